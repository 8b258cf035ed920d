use super::doc_store::DocStore;
use super::mem_backend::MemBackend;

pub type InMemoryStore = DocStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        DocStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Header, NavbarItem, NavbarKind, Project, UserId};
    use crate::store::DataStore;
    use uuid::Uuid;

    /// An in-memory store pre-populated for one owner.
    pub struct StoreFixture {
        pub store: InMemoryStore,
        pub owner: UserId,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                owner: UserId::new(),
            }
        }

        pub fn add_project(&mut self, name: &str) -> Project {
            let project = Project::new(self.owner, name, "");
            self.store.save_project(&project).unwrap();
            project
        }

        pub fn add_header(&mut self, project_id: Uuid, title: &str, parent_id: Option<Uuid>) -> Header {
            let order = self.store.list_headers(&project_id).unwrap().len() as i64;
            let header = Header::new(project_id, title, parent_id, order);
            self.store.save_header(&header).unwrap();
            header
        }

        pub fn add_navbar_item(&mut self, project_id: Uuid, kind: NavbarKind, label: &str) -> NavbarItem {
            let order = self.store.list_navbar_items(&project_id).unwrap().len() as i64;
            let item = NavbarItem::new(project_id, kind, label, order);
            self.store.save_navbar_item(&item).unwrap();
            item
        }

        pub fn set_content(&mut self, header: &mut Header, content: &str) {
            header.content = content.to_string();
            self.store.save_header(header).unwrap();
        }
    }
}
