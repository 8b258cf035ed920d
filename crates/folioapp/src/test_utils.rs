//! Test doubles shared by unit tests and downstream crates
//! (enable the `test_utils` feature).

use uuid::Uuid;

use crate::commands::navbar::NavbarItemUpdate;
use crate::error::{FolioError, Result};
use crate::model::{NavbarItem, NavbarKind};
use crate::ports::{HeaderWriter, NavbarWriter};

pub use crate::clock::ManualClock;
pub use crate::store::memory::fixtures::StoreFixture;

/// Records every write it receives. A failing writer records nothing and
/// returns a store error from every call.
#[derive(Debug, Default)]
pub struct RecordingWriter {
    pub header_writes: Vec<(Uuid, String)>,
    pub created: Vec<NavbarItem>,
    pub navbar_updates: Vec<(Uuid, NavbarItemUpdate)>,
    pub deleted: Vec<Uuid>,
    pub fail: bool,
}

impl RecordingWriter {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Content of the most recent header write.
    pub fn last_content(&self) -> Option<&str> {
        self.header_writes.last().map(|(_, content)| content.as_str())
    }

    fn check(&self) -> Result<()> {
        if self.fail {
            Err(FolioError::Store("simulated write failure".to_string()))
        } else {
            Ok(())
        }
    }
}

impl HeaderWriter for RecordingWriter {
    fn write_content(&mut self, header_id: Uuid, content: &str) -> Result<()> {
        self.check()?;
        self.header_writes.push((header_id, content.to_string()));
        Ok(())
    }
}

impl NavbarWriter for RecordingWriter {
    fn create_navbar_item(&mut self, project_id: Uuid, kind: NavbarKind, label: &str) -> Result<NavbarItem> {
        self.check()?;
        let item = NavbarItem::new(project_id, kind, label, self.created.len() as i64);
        self.created.push(item.clone());
        Ok(item)
    }

    fn update_navbar_item(&mut self, id: Uuid, update: NavbarItemUpdate) -> Result<()> {
        self.check()?;
        self.navbar_updates.push((id, update));
        Ok(())
    }

    fn delete_navbar_item(&mut self, id: Uuid) -> Result<()> {
        self.check()?;
        self.deleted.push(id);
        Ok(())
    }
}
