//! Write paths the editing surfaces persist through.
//!
//! Surfaces never talk to a [`crate::store::DataStore`] directly. They hold
//! live state and hand finished values to one of these ports, which
//! [`crate::api::FolioApi`] implements with the usual ownership checks. Tests
//! plug in [`crate::test_utils::RecordingWriter`] instead.

use uuid::Uuid;

use crate::commands::navbar::NavbarItemUpdate;
use crate::error::Result;
use crate::model::{NavbarItem, NavbarKind};

pub trait HeaderWriter {
    /// Replace a header's serialized content.
    fn write_content(&mut self, header_id: Uuid, content: &str) -> Result<()>;
}

pub trait NavbarWriter {
    fn create_navbar_item(&mut self, project_id: Uuid, kind: NavbarKind, label: &str) -> Result<NavbarItem>;

    fn update_navbar_item(&mut self, id: Uuid, update: NavbarItemUpdate) -> Result<()>;

    fn delete_navbar_item(&mut self, id: Uuid) -> Result<()>;
}
