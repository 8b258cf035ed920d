//! # Command Layer
//!
//! The owner-scoped operations of folio: project, header and navbar CRUD plus
//! export. Each area lives in its own submodule as plain functions over a
//! [`DataStore`] and the id of the acting user.
//!
//! ## Role and Responsibilities
//!
//! - Check that the acting user owns the project an entity belongs to
//! - Keep the structural rules: dense sibling `order`, cascades on delete, a
//!   header tree at most two levels deep
//! - Return structured [`CmdResult`]s; never print
//!
//! Resolving *who* the acting user is happens one layer up in
//! [`crate::api::FolioApi`], which turns a missing session into
//! [`FolioError::Unauthorized`] before any command runs.
//!
//! ## Failure Model
//!
//! A command either fully applies or returns an error without a partial state
//! change visible to the caller: validation happens before the first write.
//! Entities owned by someone else are reported as [`FolioError::Unauthorized`],
//! absent ones as [`FolioError::NotFound`].
//!
//! ## Testing Strategy
//!
//! Command tests run against `InMemoryStore` and cover ownership, ordering
//! and cascade behavior. The surfaces are tested separately against a
//! recording writer.

use serde::Serialize;
use uuid::Uuid;

use crate::error::{FolioError, Result};
use crate::model::{Header, NavbarItem, Project, UserId};
use crate::store::DataStore;

pub mod export;
pub mod headers;
pub mod navbar;
pub mod projects;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

/// A transient message for the user, as raised by the editing surfaces.
pub type Notice = CmdMessage;

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub projects: Vec<Project>,
    pub headers: Vec<Header>,
    pub navbar_items: Vec<NavbarItem>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_projects(mut self, projects: Vec<Project>) -> Self {
        self.projects = projects;
        self
    }

    pub fn with_headers(mut self, headers: Vec<Header>) -> Self {
        self.headers = headers;
        self
    }

    pub fn with_navbar_items(mut self, items: Vec<NavbarItem>) -> Self {
        self.navbar_items = items;
        self
    }
}

/// Load a project and check that `owner` owns it.
pub(crate) fn owned_project<S: DataStore>(store: &S, owner: UserId, project_id: Uuid) -> Result<Project> {
    let project = store.get_project(&project_id)?;
    if project.owner != owner {
        return Err(FolioError::Unauthorized);
    }
    Ok(project)
}

/// Rewrite `order` so it follows `ordered_ids`. Every id must be in `current`.
pub(crate) fn apply_order<T>(
    current: &mut [T],
    ordered_ids: &[Uuid],
    id_of: impl Fn(&T) -> Uuid,
    set_order: impl Fn(&mut T, i64),
    kind: &'static str,
) -> Result<()> {
    for id in ordered_ids {
        if !current.iter().any(|entity| id_of(entity) == *id) {
            return Err(FolioError::not_found(kind, id));
        }
    }
    for (index, id) in ordered_ids.iter().enumerate() {
        if let Some(entity) = current.iter_mut().find(|entity| id_of(entity) == *id) {
            set_order(entity, index as i64);
        }
    }
    Ok(())
}

pub(crate) fn next_order(orders: impl Iterator<Item = i64>) -> i64 {
    orders.max().map(|last| last + 1).unwrap_or(0)
}
