use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::error::Result;
use crate::model::{Header, NavbarItem, Project};

/// The full persisted data set: one map per entity kind, keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tables {
    #[serde(default)]
    pub projects: BTreeMap<Uuid, Project>,
    #[serde(default)]
    pub headers: BTreeMap<Uuid, Header>,
    #[serde(default)]
    pub navbar_items: BTreeMap<Uuid, NavbarItem>,
}

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while DocStore handles the "what" (lookups, ordering, cascades).
pub trait StorageBackend {
    /// Load every table. A backend with nothing stored yet returns empty tables.
    fn load(&self) -> Result<Tables>;

    /// Replace every table.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn save(&self, tables: &Tables) -> Result<()>;
}
