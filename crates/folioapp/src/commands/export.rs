use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::commands::owned_project;
use crate::error::Result;
use crate::model::{Header, NavbarItem, Project, UserId};
use crate::render::{export_filename, render_document_with, ExportAssets};
use crate::store::DataStore;

/// Everything needed to show or export a project, read without a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublicProject {
    pub project: Project,
    pub headers: Vec<Header>,
    pub navbar_items: Vec<NavbarItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportResult {
    pub filename: String,
    pub html: String,
}

/// Unauthenticated, read-only view of a project.
pub fn public_project<S: DataStore>(store: &S, id: Uuid) -> Result<PublicProject> {
    let project = store.get_project(&id)?;
    let headers = store.list_headers(&id)?;
    let navbar_items = store.list_navbar_items(&id)?;
    Ok(PublicProject {
        project,
        headers,
        navbar_items,
    })
}

/// Render already-loaded project data. No I/O.
pub fn render(details: &PublicProject, assets: &ExportAssets) -> ExportResult {
    ExportResult {
        filename: export_filename(&details.project.name),
        html: render_document_with(&details.project.name, &details.headers, &details.navbar_items, assets),
    }
}

/// Export a project owned by `owner`.
pub fn run<S: DataStore>(store: &S, owner: UserId, id: Uuid, assets: &ExportAssets) -> Result<ExportResult> {
    owned_project(store, owner, id)?;
    let details = public_project(store, id)?;
    let result = render(&details, assets);
    info!(project = %id, file = %result.filename, bytes = result.html.len(), "project exported");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FolioError;
    use crate::model::NavbarKind;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn test_export_names_file_after_project() {
        let mut fixture = StoreFixture::new();
        let project = fixture.add_project("Team Handbook");
        fixture.add_header(project.id, "Intro", None);
        fixture.add_navbar_item(project.id, NavbarKind::Title, "");
        let owner = fixture.owner;

        let result = run(&fixture.store, owner, project.id, &ExportAssets::default()).unwrap();
        assert_eq!(result.filename, "team-handbook.html");
        assert!(result.html.contains("<title>Team Handbook</title>"));
        assert!(result.html.contains(">Intro</span>"));
    }

    #[test]
    fn test_export_requires_ownership() {
        let mut fixture = StoreFixture::new();
        let project = fixture.add_project("P");
        let result = run(&fixture.store, UserId::new(), project.id, &ExportAssets::default());
        assert!(matches!(result, Err(FolioError::Unauthorized)));
    }

    #[test]
    fn test_public_project_needs_no_owner() {
        let mut fixture = StoreFixture::new();
        let project = fixture.add_project("P");
        fixture.add_header(project.id, "A", None);
        let details = public_project(&fixture.store, project.id).unwrap();
        assert_eq!(details.headers.len(), 1);
    }
}
