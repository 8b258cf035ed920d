use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::commands::{owned_project, CmdMessage, CmdResult};
use crate::error::{FolioError, Result};
use crate::model::{Project, UserId};
use crate::store::DataStore;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl ProjectUpdate {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

pub fn create<S: DataStore>(store: &mut S, owner: UserId, name: &str, description: &str) -> Result<CmdResult> {
    let name = name.trim();
    if name.is_empty() {
        return Err(FolioError::invalid("project name cannot be empty"));
    }
    let project = Project::new(owner, name, description);
    store.save_project(&project)?;
    info!(project = %project.id, "project created");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Project created: {}", project.name)));
    Ok(result.with_projects(vec![project]))
}

/// Projects owned by `owner`, oldest first.
pub fn list<S: DataStore>(store: &S, owner: UserId) -> Result<CmdResult> {
    let projects = store
        .list_projects()?
        .into_iter()
        .filter(|project| project.owner == owner)
        .collect();
    Ok(CmdResult::default().with_projects(projects))
}

/// A project with its headers and navbar items, both in `order`.
pub fn details<S: DataStore>(store: &S, owner: UserId, id: Uuid) -> Result<CmdResult> {
    let project = owned_project(store, owner, id)?;
    let headers = store.list_headers(&id)?;
    let items = store.list_navbar_items(&id)?;
    Ok(CmdResult::default()
        .with_projects(vec![project])
        .with_headers(headers)
        .with_navbar_items(items))
}

pub fn update<S: DataStore>(store: &mut S, owner: UserId, id: Uuid, update: ProjectUpdate) -> Result<CmdResult> {
    let mut project = owned_project(store, owner, id)?;
    if let Some(name) = update.name {
        let name = name.trim();
        if name.is_empty() {
            return Err(FolioError::invalid("project name cannot be empty"));
        }
        project.name = name.to_string();
    }
    if let Some(description) = update.description {
        project.description = description;
    }
    project.updated_at = Utc::now();
    store.save_project(&project)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Project updated: {}", project.name)));
    Ok(result.with_projects(vec![project]))
}

pub fn delete<S: DataStore>(store: &mut S, owner: UserId, id: Uuid) -> Result<CmdResult> {
    let project = owned_project(store, owner, id)?;
    store.delete_project(&id)?;
    info!(project = %id, "project deleted");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Project deleted: {}", project.name)));
    Ok(result.with_projects(vec![project]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn test_create_and_list_scoped_to_owner() {
        let mut fixture = StoreFixture::new();
        let owner = fixture.owner;
        create(&mut fixture.store, owner, "Handbook", "team docs").unwrap();
        create(&mut fixture.store, UserId::new(), "Someone else", "").unwrap();

        let listed = list(&fixture.store, owner).unwrap().projects;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Handbook");
        assert_eq!(listed[0].description, "team docs");
    }

    #[test]
    fn test_create_rejects_blank_name() {
        let mut fixture = StoreFixture::new();
        let owner = fixture.owner;
        assert!(matches!(
            create(&mut fixture.store, owner, "   ", ""),
            Err(FolioError::Invalid(_))
        ));
    }

    #[test]
    fn test_update_by_stranger_is_unauthorized() {
        let mut fixture = StoreFixture::new();
        let project = fixture.add_project("Mine");
        let result = update(&mut fixture.store, UserId::new(), project.id, ProjectUpdate::name("Theirs"));
        assert!(matches!(result, Err(FolioError::Unauthorized)));
        assert_eq!(fixture.store.get_project(&project.id).unwrap().name, "Mine");
    }

    #[test]
    fn test_update_keeps_unset_fields() {
        let mut fixture = StoreFixture::new();
        let owner = fixture.owner;
        let id = create(&mut fixture.store, owner, "Old", "desc").unwrap().projects[0].id;

        let updated = update(&mut fixture.store, owner, id, ProjectUpdate::name("New")).unwrap();
        assert_eq!(updated.projects[0].name, "New");
        assert_eq!(updated.projects[0].description, "desc");
    }

    #[test]
    fn test_delete_cascades_to_children() {
        let mut fixture = StoreFixture::new();
        let project = fixture.add_project("P");
        fixture.add_header(project.id, "Intro", None);
        let owner = fixture.owner;

        delete(&mut fixture.store, owner, project.id).unwrap();
        assert!(fixture.store.list_headers(&project.id).unwrap().is_empty());
        assert!(matches!(
            details(&fixture.store, owner, project.id),
            Err(FolioError::NotFound { .. })
        ));
    }
}
