use super::backend::StorageBackend;
use super::DataStore;
use crate::error::{FolioError, Result};
use crate::model::{Header, NavbarItem, Project};
use tracing::debug;
use uuid::Uuid;

pub struct DocStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: StorageBackend> DocStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: StorageBackend> DataStore for DocStore<B> {
    fn save_project(&mut self, project: &Project) -> Result<()> {
        let mut tables = self.backend.load()?;
        tables.projects.insert(project.id, project.clone());
        self.backend.save(&tables)
    }

    fn get_project(&self, id: &Uuid) -> Result<Project> {
        self.backend
            .load()?
            .projects
            .remove(id)
            .ok_or_else(|| FolioError::not_found("Project", id))
    }

    fn list_projects(&self) -> Result<Vec<Project>> {
        let mut projects: Vec<Project> = self.backend.load()?.projects.into_values().collect();
        projects.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(projects)
    }

    fn delete_project(&mut self, id: &Uuid) -> Result<()> {
        let mut tables = self.backend.load()?;
        if tables.projects.remove(id).is_none() {
            return Err(FolioError::not_found("Project", id));
        }
        let headers_before = tables.headers.len();
        tables.headers.retain(|_, header| header.project_id != *id);
        let items_before = tables.navbar_items.len();
        tables.navbar_items.retain(|_, item| item.project_id != *id);
        debug!(
            project = %id,
            headers = headers_before - tables.headers.len(),
            navbar_items = items_before - tables.navbar_items.len(),
            "cascade delete"
        );
        self.backend.save(&tables)
    }

    fn save_headers(&mut self, headers: &[Header]) -> Result<()> {
        let mut tables = self.backend.load()?;
        for header in headers {
            tables.headers.insert(header.id, header.clone());
        }
        self.backend.save(&tables)
    }

    fn get_header(&self, id: &Uuid) -> Result<Header> {
        self.backend
            .load()?
            .headers
            .remove(id)
            .ok_or_else(|| FolioError::not_found("Header", id))
    }

    fn list_headers(&self, project_id: &Uuid) -> Result<Vec<Header>> {
        let mut headers: Vec<Header> = self
            .backend
            .load()?
            .headers
            .into_values()
            .filter(|header| header.project_id == *project_id)
            .collect();
        headers.sort_by(|a, b| a.order.cmp(&b.order).then(a.created_at.cmp(&b.created_at)));
        Ok(headers)
    }

    fn delete_headers(&mut self, ids: &[Uuid]) -> Result<()> {
        let mut tables = self.backend.load()?;
        for id in ids {
            if tables.headers.remove(id).is_none() {
                return Err(FolioError::not_found("Header", id));
            }
        }
        self.backend.save(&tables)
    }

    fn save_navbar_items(&mut self, items: &[NavbarItem]) -> Result<()> {
        let mut tables = self.backend.load()?;
        for item in items {
            tables.navbar_items.insert(item.id, item.clone());
        }
        self.backend.save(&tables)
    }

    fn get_navbar_item(&self, id: &Uuid) -> Result<NavbarItem> {
        self.backend
            .load()?
            .navbar_items
            .remove(id)
            .ok_or_else(|| FolioError::not_found("Navbar item", id))
    }

    fn list_navbar_items(&self, project_id: &Uuid) -> Result<Vec<NavbarItem>> {
        let mut items: Vec<NavbarItem> = self
            .backend
            .load()?
            .navbar_items
            .into_values()
            .filter(|item| item.project_id == *project_id)
            .collect();
        items.sort_by(|a, b| a.order.cmp(&b.order).then(a.created_at.cmp(&b.created_at)));
        Ok(items)
    }

    fn delete_navbar_item(&mut self, id: &Uuid) -> Result<()> {
        let mut tables = self.backend.load()?;
        if tables.navbar_items.remove(id).is_none() {
            return Err(FolioError::not_found("Navbar item", id));
        }
        self.backend.save(&tables)
    }
}
