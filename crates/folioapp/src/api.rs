//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for all folio operations, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Authenticates**: asks the [`Session`] for the acting user and fails
//!   with [`FolioError::Unauthorized`] when there is none
//! - **Dispatches** to the appropriate command function
//! - **Resolves selectors** typed by a person into entity ids
//! - **Implements the write ports** ([`HeaderWriter`], [`NavbarWriter`]) so
//!   editing surfaces persist through the same checks as everything else
//!
//! The one unauthenticated path is [`FolioApi::public_project`], the
//! read-only view used to display or export a published project.
//!
//! ## Selectors
//!
//! Command-line users rarely type UUIDs:
//!
//! - **Projects**: exact name (case-insensitive), full id, or id prefix
//! - **Headers**: outline number (`2`, `1.3`), full id, id prefix, or exact title
//! - **Navbar items**: 1-based position, full id, or id prefix
//!
//! An id prefix must be at least four characters and match exactly one entity.
//!
//! ## Generic Over DataStore and Session
//!
//! `FolioApi<S: DataStore, A: Session>`:
//! - Production: `FolioApi<FileStore, StaticSession>`
//! - Testing: `FolioApi<InMemoryStore, StaticSession>`

use uuid::Uuid;

use crate::commands::{self, export, headers, navbar, projects, CmdResult};
use crate::error::{FolioError, Result};
use crate::model::{Header, NavbarItem, NavbarKind, Project, UserId};
use crate::outline::{compute_numbering, display_order, reorder_within_parent};
use crate::ports::{HeaderWriter, NavbarWriter};
use crate::render::ExportAssets;
use crate::session::Session;
use crate::store::DataStore;

pub use commands::export::{ExportResult, PublicProject};
pub use commands::headers::HeaderUpdate;
pub use commands::navbar::NavbarItemUpdate;
pub use commands::projects::ProjectUpdate;
pub use commands::{CmdMessage, MessageLevel, Notice};

const MIN_ID_PREFIX: usize = 4;

pub struct FolioApi<S: DataStore, A: Session> {
    store: S,
    session: A,
}

impl<S: DataStore, A: Session> FolioApi<S, A> {
    pub fn new(store: S, session: A) -> Self {
        Self { store, session }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn owner(&self) -> Result<UserId> {
        self.session.current_user().ok_or(FolioError::Unauthorized)
    }

    // --- Projects ---

    pub fn create_project(&mut self, name: &str, description: &str) -> Result<CmdResult> {
        let owner = self.owner()?;
        projects::create(&mut self.store, owner, name, description)
    }

    pub fn list_projects(&self) -> Result<CmdResult> {
        projects::list(&self.store, self.owner()?)
    }

    pub fn project_details(&self, id: Uuid) -> Result<CmdResult> {
        projects::details(&self.store, self.owner()?, id)
    }

    pub fn update_project(&mut self, id: Uuid, update: ProjectUpdate) -> Result<CmdResult> {
        let owner = self.owner()?;
        projects::update(&mut self.store, owner, id, update)
    }

    pub fn delete_project(&mut self, id: Uuid) -> Result<CmdResult> {
        let owner = self.owner()?;
        projects::delete(&mut self.store, owner, id)
    }

    // --- Headers ---

    pub fn create_header(&mut self, project_id: Uuid, title: &str, parent_id: Option<Uuid>) -> Result<CmdResult> {
        let owner = self.owner()?;
        headers::create(&mut self.store, owner, project_id, title, parent_id)
    }

    pub fn update_header(&mut self, id: Uuid, update: HeaderUpdate) -> Result<CmdResult> {
        let owner = self.owner()?;
        headers::update(&mut self.store, owner, id, update)
    }

    pub fn delete_header(&mut self, id: Uuid) -> Result<CmdResult> {
        let owner = self.owner()?;
        headers::delete(&mut self.store, owner, id)
    }

    pub fn reorder_headers(&mut self, project_id: Uuid, ordered_ids: &[Uuid]) -> Result<CmdResult> {
        let owner = self.owner()?;
        headers::reorder(&mut self.store, owner, project_id, ordered_ids)
    }

    pub fn list_headers(&self, project_id: Uuid) -> Result<CmdResult> {
        headers::list(&self.store, self.owner()?, project_id)
    }

    pub fn get_header(&self, id: Uuid) -> Result<Header> {
        headers::owned_header(&self.store, self.owner()?, id)
    }

    /// Drop `active` onto `over` in the outline. Both must share a parent.
    pub fn move_header(&mut self, project_id: Uuid, active: Uuid, over: Uuid) -> Result<CmdResult> {
        let current = self.list_headers(project_id)?.headers;
        let display = display_order(&current);
        let ids = reorder_within_parent(&display, active, over)
            .ok_or_else(|| FolioError::invalid("headers can only be moved among siblings"))?;
        self.reorder_headers(project_id, &ids)
    }

    // --- Navbar ---

    pub fn create_navbar_item(&mut self, project_id: Uuid, kind: NavbarKind, label: &str, href: &str) -> Result<CmdResult> {
        let owner = self.owner()?;
        navbar::create(&mut self.store, owner, project_id, kind, label, href)
    }

    pub fn update_navbar_item(&mut self, id: Uuid, update: NavbarItemUpdate) -> Result<CmdResult> {
        let owner = self.owner()?;
        navbar::update(&mut self.store, owner, id, update)
    }

    pub fn delete_navbar_item(&mut self, id: Uuid) -> Result<CmdResult> {
        let owner = self.owner()?;
        navbar::delete(&mut self.store, owner, id)
    }

    pub fn reorder_navbar_items(&mut self, project_id: Uuid, ordered_ids: &[Uuid]) -> Result<CmdResult> {
        let owner = self.owner()?;
        navbar::reorder(&mut self.store, owner, project_id, ordered_ids)
    }

    pub fn list_navbar_items(&self, project_id: Uuid) -> Result<CmdResult> {
        navbar::list(&self.store, self.owner()?, project_id)
    }

    // --- Export ---

    /// Read-only project view that needs no session.
    pub fn public_project(&self, id: Uuid) -> Result<PublicProject> {
        export::public_project(&self.store, id)
    }

    pub fn export_project(&self, id: Uuid, assets: &ExportAssets) -> Result<ExportResult> {
        export::run(&self.store, self.owner()?, id, assets)
    }

    // --- Selectors ---

    pub fn resolve_project(&self, selector: &str) -> Result<Project> {
        let owned = self.list_projects()?.projects;
        let wanted = selector.trim();
        if let Some(project) = owned.iter().find(|p| p.name.eq_ignore_ascii_case(wanted)) {
            return Ok(project.clone());
        }
        resolve_by_id(&owned, wanted, |p| p.id, "Project")
    }

    pub fn resolve_header(&self, project_id: Uuid, selector: &str) -> Result<Header> {
        let current = self.list_headers(project_id)?.headers;
        let wanted = selector.trim();
        let numbering = compute_numbering(&current);
        if let Some(header) = current.iter().find(|h| numbering.get(&h.id).map(String::as_str) == Some(wanted)) {
            return Ok(header.clone());
        }
        match resolve_by_id(&current, wanted, |h| h.id, "Header") {
            Ok(header) => Ok(header),
            Err(err) => current
                .iter()
                .find(|h| h.title.eq_ignore_ascii_case(wanted))
                .cloned()
                .ok_or(err),
        }
    }

    pub fn resolve_navbar_item(&self, project_id: Uuid, selector: &str) -> Result<NavbarItem> {
        let items = self.list_navbar_items(project_id)?.navbar_items;
        let wanted = selector.trim();
        if let Ok(position) = wanted.parse::<usize>() {
            return position
                .checked_sub(1)
                .and_then(|index| items.get(index))
                .cloned()
                .ok_or_else(|| FolioError::not_found("Navbar item", wanted));
        }
        resolve_by_id(&items, wanted, |i| i.id, "Navbar item")
    }
}

fn resolve_by_id<T: Clone>(entities: &[T], selector: &str, id_of: impl Fn(&T) -> Uuid, kind: &'static str) -> Result<T> {
    if let Ok(id) = Uuid::parse_str(selector) {
        return entities
            .iter()
            .find(|e| id_of(e) == id)
            .cloned()
            .ok_or_else(|| FolioError::not_found(kind, selector));
    }
    let prefix = selector.to_ascii_lowercase();
    if prefix.len() < MIN_ID_PREFIX {
        return Err(FolioError::not_found(kind, selector));
    }
    let mut matches = entities.iter().filter(|e| id_of(e).to_string().starts_with(&prefix));
    match (matches.next(), matches.next()) {
        (Some(found), None) => Ok(found.clone()),
        (Some(_), Some(_)) => Err(FolioError::invalid(format!("{} id prefix is ambiguous: {}", kind, selector))),
        _ => Err(FolioError::not_found(kind, selector)),
    }
}

impl<S: DataStore, A: Session> HeaderWriter for FolioApi<S, A> {
    fn write_content(&mut self, header_id: Uuid, content: &str) -> Result<()> {
        self.update_header(header_id, HeaderUpdate::content(content)).map(|_| ())
    }
}

impl<S: DataStore, A: Session> NavbarWriter for FolioApi<S, A> {
    fn create_navbar_item(&mut self, project_id: Uuid, kind: NavbarKind, label: &str) -> Result<NavbarItem> {
        FolioApi::create_navbar_item(self, project_id, kind, label, "")?
            .navbar_items
            .pop()
            .ok_or_else(|| FolioError::Store("created navbar item was not returned".to_string()))
    }

    fn update_navbar_item(&mut self, id: Uuid, update: NavbarItemUpdate) -> Result<()> {
        FolioApi::update_navbar_item(self, id, update).map(|_| ())
    }

    fn delete_navbar_item(&mut self, id: Uuid) -> Result<()> {
        FolioApi::delete_navbar_item(self, id).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::StaticSession;
    use crate::store::InMemoryStore;

    fn api() -> FolioApi<InMemoryStore, StaticSession> {
        FolioApi::new(InMemoryStore::new(), StaticSession::signed_in(UserId::new()))
    }

    #[test]
    fn test_anonymous_session_is_unauthorized() {
        let mut api = FolioApi::new(InMemoryStore::new(), StaticSession::anonymous());
        assert!(matches!(api.create_project("P", ""), Err(FolioError::Unauthorized)));
        assert!(matches!(api.list_projects(), Err(FolioError::Unauthorized)));
    }

    #[test]
    fn test_public_project_without_session() {
        let mut owner_api = api();
        let project = owner_api.create_project("Public", "").unwrap().projects.remove(0);
        let store = owner_api.store;

        let anonymous = FolioApi::new(store, StaticSession::anonymous());
        assert_eq!(anonymous.public_project(project.id).unwrap().project.name, "Public");
        assert!(matches!(
            anonymous.export_project(project.id, &ExportAssets::default()),
            Err(FolioError::Unauthorized)
        ));
    }

    #[test]
    fn test_resolve_header_by_number_title_and_prefix() {
        let mut api = api();
        let project = api.create_project("P", "").unwrap().projects.remove(0);
        let intro = api.create_header(project.id, "Intro", None).unwrap().headers.remove(0);
        let child = api.create_header(project.id, "Setup", Some(intro.id)).unwrap().headers.remove(0);

        assert_eq!(api.resolve_header(project.id, "1.1").unwrap().id, child.id);
        assert_eq!(api.resolve_header(project.id, "intro").unwrap().id, intro.id);
        let prefix = &child.id.to_string()[..8];
        assert_eq!(api.resolve_header(project.id, prefix).unwrap().id, child.id);
        assert!(api.resolve_header(project.id, "9").is_err());
    }

    #[test]
    fn test_resolve_project_and_navbar_item() {
        let mut api = api();
        let project = api.create_project("Handbook", "").unwrap().projects.remove(0);
        api.create_navbar_item(project.id, NavbarKind::Title, "", "").unwrap();
        let link = api.create_navbar_item(project.id, NavbarKind::Link, "Docs", "").unwrap().navbar_items.remove(0);

        assert_eq!(api.resolve_project("HANDBOOK").unwrap().id, project.id);
        assert_eq!(api.resolve_navbar_item(project.id, "2").unwrap().id, link.id);
        assert!(api.resolve_navbar_item(project.id, "0").is_err());
    }

    #[test]
    fn test_move_header_among_siblings_only() {
        let mut api = api();
        let project = api.create_project("P", "").unwrap().projects.remove(0);
        let a = api.create_header(project.id, "A", None).unwrap().headers.remove(0);
        let b = api.create_header(project.id, "B", None).unwrap().headers.remove(0);
        let child = api.create_header(project.id, "A1", Some(a.id)).unwrap().headers.remove(0);

        api.move_header(project.id, b.id, a.id).unwrap();
        let titles: Vec<String> = display_order(&api.list_headers(project.id).unwrap().headers)
            .iter()
            .map(|h| h.title.clone())
            .collect();
        assert_eq!(titles, vec!["B", "A", "A1"]);

        assert!(matches!(api.move_header(project.id, child.id, b.id), Err(FolioError::Invalid(_))));
    }

    #[test]
    fn test_header_writer_checks_ownership() {
        let mut owner_api = api();
        let project = owner_api.create_project("P", "").unwrap().projects.remove(0);
        let header = owner_api.create_header(project.id, "H", None).unwrap().headers.remove(0);
        owner_api.write_content(header.id, "[]").unwrap();
        assert_eq!(owner_api.get_header(header.id).unwrap().content, "[]");

        let mut stranger = FolioApi::new(owner_api.store, StaticSession::signed_in(UserId::new()));
        assert!(matches!(stranger.write_content(header.id, "x"), Err(FolioError::Unauthorized)));
    }
}
