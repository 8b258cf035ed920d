//! # Storage Layer
//!
//! The [`DataStore`] trait is the persistence collaborator behind every
//! command: plain create/read/update/delete over projects, headers and navbar
//! items. It knows nothing about sessions or ownership; those checks live in
//! [`crate::commands`].
//!
//! ## Layering
//!
//! ```text
//! DataStore (trait)
//!    └── DocStore<B: StorageBackend>     lookups, ordering, cascades
//!           ├── MemBackend               tables in a RefCell (tests)
//!           └── FsBackend                one folio.json, atomic tmp+rename
//! ```
//!
//! Every mutation is load → modify → save of the whole table set, so a
//! multi-entity change (a cascade, a reorder) lands in a single write.
//! Concurrent writers are not coordinated: the last save wins.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── folio.json      # projects, headers, navbar_items
//! ├── folio.toml      # optional configuration
//! └── prefs.json      # user preferences key/value file
//! ```
//!
//! ## Ordering
//!
//! `list_headers` and `list_navbar_items` return entities sorted by `order`,
//! ties broken by creation time, which is the order the rest of the crate
//! treats as authoritative.

use uuid::Uuid;

use crate::error::Result;
use crate::model::{Header, NavbarItem, Project};

pub mod backend;
pub mod doc_store;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;

pub use doc_store::DocStore;
pub use fs::FileStore;
pub use memory::InMemoryStore;

/// Abstract interface for folio storage.
pub trait DataStore {
    /// Save a project (create or update)
    fn save_project(&mut self, project: &Project) -> Result<()>;

    fn get_project(&self, id: &Uuid) -> Result<Project>;

    /// All projects, oldest first.
    fn list_projects(&self) -> Result<Vec<Project>>;

    /// Delete a project together with its headers and navbar items.
    fn delete_project(&mut self, id: &Uuid) -> Result<()>;

    fn save_headers(&mut self, headers: &[Header]) -> Result<()>;

    fn get_header(&self, id: &Uuid) -> Result<Header>;

    /// Headers of a project in `order`.
    fn list_headers(&self, project_id: &Uuid) -> Result<Vec<Header>>;

    fn delete_headers(&mut self, ids: &[Uuid]) -> Result<()>;

    fn save_navbar_items(&mut self, items: &[NavbarItem]) -> Result<()>;

    fn get_navbar_item(&self, id: &Uuid) -> Result<NavbarItem>;

    /// Navbar items of a project in `order`.
    fn list_navbar_items(&self, project_id: &Uuid) -> Result<Vec<NavbarItem>>;

    fn delete_navbar_item(&mut self, id: &Uuid) -> Result<()>;

    fn save_header(&mut self, header: &Header) -> Result<()> {
        self.save_headers(std::slice::from_ref(header))
    }

    fn save_navbar_item(&mut self, item: &NavbarItem) -> Result<()> {
        self.save_navbar_items(std::slice::from_ref(item))
    }
}
