use tracing::info;
use uuid::Uuid;

use crate::commands::{apply_order, next_order, owned_project, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{NavbarItem, NavbarKind, UserId, MIN_NAVBAR_WIDTH};
use crate::store::DataStore;

/// Fields of a navbar item that can change after creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavbarItemUpdate {
    pub label: Option<String>,
    pub href: Option<String>,
    pub width: Option<u32>,
    pub styles: Option<String>,
}

impl NavbarItemUpdate {
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    pub fn href(href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            ..Self::default()
        }
    }

    pub fn width(width: u32) -> Self {
        Self {
            width: Some(width),
            ..Self::default()
        }
    }

    pub fn styles(styles: impl Into<String>) -> Self {
        Self {
            styles: Some(styles.into()),
            ..Self::default()
        }
    }
}

fn owned_item<S: DataStore>(store: &S, owner: UserId, id: Uuid) -> Result<NavbarItem> {
    let item = store.get_navbar_item(&id)?;
    owned_project(store, owner, item.project_id)?;
    Ok(item)
}

pub fn create<S: DataStore>(
    store: &mut S,
    owner: UserId,
    project_id: Uuid,
    kind: NavbarKind,
    label: &str,
    href: &str,
) -> Result<CmdResult> {
    owned_project(store, owner, project_id)?;
    let existing = store.list_navbar_items(&project_id)?;
    let mut item = NavbarItem::new(project_id, kind, label, next_order(existing.iter().map(|i| i.order)));
    item.href = href.to_string();
    store.save_navbar_item(&item)?;
    info!(item = %item.id, %kind, project = %project_id, "navbar item created");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Added {}", kind.default_label())));
    Ok(result.with_navbar_items(vec![item]))
}

pub fn update<S: DataStore>(store: &mut S, owner: UserId, id: Uuid, update: NavbarItemUpdate) -> Result<CmdResult> {
    let mut item = owned_item(store, owner, id)?;
    if let Some(label) = update.label {
        item.label = label;
    }
    if let Some(href) = update.href {
        item.href = href;
    }
    if let Some(width) = update.width {
        item.width = width.max(MIN_NAVBAR_WIDTH);
    }
    if let Some(styles) = update.styles {
        item.styles = styles;
    }
    store.save_navbar_item(&item)?;
    Ok(CmdResult::default().with_navbar_items(vec![item]))
}

pub fn delete<S: DataStore>(store: &mut S, owner: UserId, id: Uuid) -> Result<CmdResult> {
    let item = owned_item(store, owner, id)?;
    store.delete_navbar_item(&id)?;
    info!(item = %id, "navbar item deleted");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Item removed"));
    Ok(result.with_navbar_items(vec![item]))
}

pub fn reorder<S: DataStore>(store: &mut S, owner: UserId, project_id: Uuid, ordered_ids: &[Uuid]) -> Result<CmdResult> {
    owned_project(store, owner, project_id)?;
    let mut items = store.list_navbar_items(&project_id)?;
    apply_order(&mut items, ordered_ids, |i| i.id, |i, order| i.order = order, "Navbar item")?;
    store.save_navbar_items(&items)?;
    items.sort_by_key(|i| i.order);
    Ok(CmdResult::default().with_navbar_items(items))
}

pub fn list<S: DataStore>(store: &S, owner: UserId, project_id: Uuid) -> Result<CmdResult> {
    owned_project(store, owner, project_id)?;
    Ok(CmdResult::default().with_navbar_items(store.list_navbar_items(&project_id)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FolioError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn test_create_defaults() {
        let mut fixture = StoreFixture::new();
        let project = fixture.add_project("P");
        let owner = fixture.owner;

        let item = create(&mut fixture.store, owner, project.id, NavbarKind::Link, "", "")
            .unwrap()
            .navbar_items
            .remove(0);
        assert_eq!(item.width, 120);
        assert_eq!(item.styles, "{}");
        assert_eq!(item.order, 0);
    }

    #[test]
    fn test_update_enforces_min_width() {
        let mut fixture = StoreFixture::new();
        let project = fixture.add_project("P");
        let item = fixture.add_navbar_item(project.id, NavbarKind::Button, "Go");
        let owner = fixture.owner;

        update(&mut fixture.store, owner, item.id, NavbarItemUpdate::width(10)).unwrap();
        assert_eq!(fixture.store.get_navbar_item(&item.id).unwrap().width, 60);
    }

    #[test]
    fn test_update_keeps_other_fields() {
        let mut fixture = StoreFixture::new();
        let project = fixture.add_project("P");
        let item = fixture.add_navbar_item(project.id, NavbarKind::Link, "Docs");
        let owner = fixture.owner;

        update(&mut fixture.store, owner, item.id, NavbarItemUpdate::href("/docs")).unwrap();
        let stored = fixture.store.get_navbar_item(&item.id).unwrap();
        assert_eq!(stored.label, "Docs");
        assert_eq!(stored.href, "/docs");
    }

    #[test]
    fn test_delete_by_stranger_is_unauthorized() {
        let mut fixture = StoreFixture::new();
        let project = fixture.add_project("P");
        let item = fixture.add_navbar_item(project.id, NavbarKind::Badge, "v1");

        let result = delete(&mut fixture.store, UserId::new(), item.id);
        assert!(matches!(result, Err(FolioError::Unauthorized)));
        assert!(fixture.store.get_navbar_item(&item.id).is_ok());
    }

    #[test]
    fn test_reorder() {
        let mut fixture = StoreFixture::new();
        let project = fixture.add_project("P");
        let a = fixture.add_navbar_item(project.id, NavbarKind::Title, "A");
        let b = fixture.add_navbar_item(project.id, NavbarKind::Link, "B");
        let owner = fixture.owner;

        reorder(&mut fixture.store, owner, project.id, &[b.id, a.id]).unwrap();
        let labels: Vec<String> = list(&fixture.store, owner, project.id)
            .unwrap()
            .navbar_items
            .into_iter()
            .map(|i| i.label)
            .collect();
        assert_eq!(labels, vec!["B", "A"]);
    }
}
