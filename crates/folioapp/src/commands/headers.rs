use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::commands::{apply_order, next_order, owned_project, CmdMessage, CmdResult};
use crate::error::{FolioError, Result};
use crate::model::{Header, UserId};
use crate::store::DataStore;

/// Fields of a header that can change after creation. `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub icon: Option<String>,
}

impl HeaderUpdate {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    pub fn icon(icon: impl Into<String>) -> Self {
        Self {
            icon: Some(icon.into()),
            ..Self::default()
        }
    }
}

/// Load a header and check that `owner` owns its project.
pub(crate) fn owned_header<S: DataStore>(store: &S, owner: UserId, id: Uuid) -> Result<Header> {
    let header = store.get_header(&id)?;
    owned_project(store, owner, header.project_id)?;
    Ok(header)
}

/// Append a header to a project, optionally under a top-level parent.
pub fn create<S: DataStore>(
    store: &mut S,
    owner: UserId,
    project_id: Uuid,
    title: &str,
    parent_id: Option<Uuid>,
) -> Result<CmdResult> {
    owned_project(store, owner, project_id)?;
    let title = title.trim();
    if title.is_empty() {
        return Err(FolioError::invalid("header title cannot be empty"));
    }

    if let Some(parent_id) = parent_id {
        let parent = store.get_header(&parent_id)?;
        if parent.project_id != project_id {
            return Err(FolioError::invalid("parent header belongs to another project"));
        }
        if !parent.is_top_level() {
            return Err(FolioError::invalid(format!(
                "\"{}\" is already nested; headers can only be nested one level deep",
                parent.title
            )));
        }
    }

    let existing = store.list_headers(&project_id)?;
    let order = next_order(existing.iter().map(|h| h.order));
    let header = Header::new(project_id, title, parent_id, order);
    store.save_header(&header)?;
    info!(header = %header.id, project = %project_id, "header created");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Header added"));
    Ok(result.with_headers(vec![header]))
}

pub fn update<S: DataStore>(store: &mut S, owner: UserId, id: Uuid, update: HeaderUpdate) -> Result<CmdResult> {
    let mut header = owned_header(store, owner, id)?;
    if let Some(title) = update.title {
        let title = title.trim();
        if title.is_empty() {
            return Err(FolioError::invalid("header title cannot be empty"));
        }
        header.title = title.to_string();
    }
    if let Some(content) = update.content {
        debug!(header = %id, bytes = content.len(), "header content written");
        header.content = content;
    }
    if let Some(icon) = update.icon {
        header.icon = icon;
    }
    header.updated_at = Utc::now();
    store.save_header(&header)?;
    Ok(CmdResult::default().with_headers(vec![header]))
}

/// Delete a header and its direct children.
pub fn delete<S: DataStore>(store: &mut S, owner: UserId, id: Uuid) -> Result<CmdResult> {
    let header = owned_header(store, owner, id)?;
    let mut doomed: Vec<Uuid> = store
        .list_headers(&header.project_id)?
        .into_iter()
        .filter(|h| h.parent_id == Some(id))
        .map(|h| h.id)
        .collect();
    doomed.push(id);
    store.delete_headers(&doomed)?;
    info!(header = %id, removed = doomed.len(), "header deleted");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Header deleted"));
    Ok(result.with_headers(vec![header]))
}

/// Rewrite `order` of a project's headers to follow `ordered_ids`.
pub fn reorder<S: DataStore>(store: &mut S, owner: UserId, project_id: Uuid, ordered_ids: &[Uuid]) -> Result<CmdResult> {
    owned_project(store, owner, project_id)?;
    let mut headers = store.list_headers(&project_id)?;
    apply_order(&mut headers, ordered_ids, |h| h.id, |h, order| h.order = order, "Header")?;
    store.save_headers(&headers)?;
    headers.sort_by_key(|h| h.order);
    Ok(CmdResult::default().with_headers(headers))
}

pub fn list<S: DataStore>(store: &S, owner: UserId, project_id: Uuid) -> Result<CmdResult> {
    owned_project(store, owner, project_id)?;
    Ok(CmdResult::default().with_headers(store.list_headers(&project_id)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn test_create_appends_order() {
        let mut fixture = StoreFixture::new();
        let project = fixture.add_project("P");
        let owner = fixture.owner;

        let first = create(&mut fixture.store, owner, project.id, "One", None).unwrap().headers[0].clone();
        let second = create(&mut fixture.store, owner, project.id, "Two", None).unwrap().headers[0].clone();
        assert_eq!(first.order, 0);
        assert_eq!(second.order, 1);
        assert_eq!(first.content, "");
    }

    #[test]
    fn test_nesting_limited_to_two_levels() {
        let mut fixture = StoreFixture::new();
        let project = fixture.add_project("P");
        let owner = fixture.owner;

        let intro = create(&mut fixture.store, owner, project.id, "Intro", None).unwrap().headers[0].clone();
        let details = create(&mut fixture.store, owner, project.id, "Details", Some(intro.id))
            .unwrap()
            .headers[0]
            .clone();
        assert_eq!(details.parent_id, Some(intro.id));

        let deeper = create(&mut fixture.store, owner, project.id, "Deeper", Some(details.id));
        assert!(matches!(deeper, Err(FolioError::Invalid(_))));
        assert_eq!(fixture.store.list_headers(&project.id).unwrap().len(), 2);
    }

    #[test]
    fn test_parent_from_other_project_rejected() {
        let mut fixture = StoreFixture::new();
        let p1 = fixture.add_project("P1");
        let p2 = fixture.add_project("P2");
        let foreign = fixture.add_header(p2.id, "Foreign", None);
        let owner = fixture.owner;

        let result = create(&mut fixture.store, owner, p1.id, "Child", Some(foreign.id));
        assert!(matches!(result, Err(FolioError::Invalid(_))));
    }

    #[test]
    fn test_update_partial_fields() {
        let mut fixture = StoreFixture::new();
        let project = fixture.add_project("P");
        let header = fixture.add_header(project.id, "Intro", None);
        let owner = fixture.owner;

        update(&mut fixture.store, owner, header.id, HeaderUpdate::icon("🚀")).unwrap();
        update(&mut fixture.store, owner, header.id, HeaderUpdate::content("# Hi")).unwrap();

        let stored = fixture.store.get_header(&header.id).unwrap();
        assert_eq!(stored.title, "Intro");
        assert_eq!(stored.icon, "🚀");
        assert_eq!(stored.content, "# Hi");
    }

    #[test]
    fn test_update_by_stranger_is_unauthorized() {
        let mut fixture = StoreFixture::new();
        let project = fixture.add_project("P");
        let header = fixture.add_header(project.id, "Intro", None);

        let result = update(&mut fixture.store, UserId::new(), header.id, HeaderUpdate::title("Mine"));
        assert!(matches!(result, Err(FolioError::Unauthorized)));
    }

    #[test]
    fn test_delete_cascades_to_children_only() {
        let mut fixture = StoreFixture::new();
        let project = fixture.add_project("P");
        let parent = fixture.add_header(project.id, "Parent", None);
        fixture.add_header(project.id, "Child", Some(parent.id));
        let sibling = fixture.add_header(project.id, "Sibling", None);
        let owner = fixture.owner;

        delete(&mut fixture.store, owner, parent.id).unwrap();
        let remaining = fixture.store.list_headers(&project.id).unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, sibling.id);
    }

    #[test]
    fn test_reorder_rewrites_order() {
        let mut fixture = StoreFixture::new();
        let project = fixture.add_project("P");
        let a = fixture.add_header(project.id, "A", None);
        let b = fixture.add_header(project.id, "B", None);
        let owner = fixture.owner;

        let result = reorder(&mut fixture.store, owner, project.id, &[b.id, a.id]).unwrap();
        let titles: Vec<&str> = result.headers.iter().map(|h| h.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "A"]);
    }

    #[test]
    fn test_reorder_with_unknown_id_changes_nothing() {
        let mut fixture = StoreFixture::new();
        let project = fixture.add_project("P");
        let a = fixture.add_header(project.id, "A", None);
        let owner = fixture.owner;

        let result = reorder(&mut fixture.store, owner, project.id, &[Uuid::new_v4(), a.id]);
        assert!(matches!(result, Err(FolioError::NotFound { .. })));
        assert_eq!(fixture.store.get_header(&a.id).unwrap().order, 0);
    }
}
