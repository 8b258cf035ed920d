//! Whole-project flows through the API facade, the editing surfaces and the
//! exporter, backed by the file store.

use folioapp::api::{FolioApi, HeaderUpdate};
use folioapp::blocks::{parse_sequence, BlockData, BlockKind};
use folioapp::clock::ManualClock;
use folioapp::error::FolioError;
use folioapp::model::{NavbarKind, UserId};
use folioapp::navbar::{ItemStyles, NavbarEditor, StyleKey};
use folioapp::outline::{compute_numbering, display_order};
use folioapp::render::ExportAssets;
use folioapp::session::StaticSession;
use folioapp::store::FileStore;
use folioapp::surface::{DocumentSurface, SurfaceEvent, SurfaceOptions};
use serde_json::json;
use tempfile::TempDir;

fn open_api(dir: &TempDir, user: UserId) -> FolioApi<FileStore, StaticSession> {
    FolioApi::new(FileStore::new(dir.path().to_path_buf()), StaticSession::signed_in(user))
}

#[test]
fn test_nesting_is_limited_to_one_level() {
    let dir = TempDir::new().unwrap();
    let mut api = open_api(&dir, UserId::new());
    let project = api.create_project("Guide", "").unwrap().projects.remove(0);

    let intro = api.create_header(project.id, "Intro", None).unwrap().headers.remove(0);
    let details = api
        .create_header(project.id, "Details", Some(intro.id))
        .unwrap()
        .headers
        .remove(0);
    let refused = api.create_header(project.id, "Deeper", Some(details.id));
    assert!(matches!(refused, Err(FolioError::Invalid(_))));

    let headers = api.list_headers(project.id).unwrap().headers;
    let numbering = compute_numbering(&headers);
    assert_eq!(numbering[&intro.id], "1");
    assert_eq!(numbering[&details.id], "1.1");
    assert_eq!(headers.len(), 2);
}

#[test]
fn test_block_editing_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let user = UserId::new();
    let mut api = open_api(&dir, user);
    let project = api.create_project("Guide", "").unwrap().projects.remove(0);
    let header = api.create_header(project.id, "Setup", None).unwrap().headers.remove(0);

    let clock = ManualClock::new();
    let mut surface = DocumentSurface::open(&header, clock.clone(), SurfaceOptions::default());
    surface.mount();
    let heading = surface.insert(BlockKind::Heading, None);
    surface.edit(&heading, |editor| editor.on_input("Install"));
    surface.insert(BlockKind::Code, None);
    clock.advance_ms(1500);
    surface.tick(&mut api);

    assert!(surface
        .drain_events()
        .contains(&SurfaceEvent::Saved { header_id: header.id }));

    let reopened = open_api(&dir, user).get_header(header.id).unwrap();
    let blocks = parse_sequence(Some(&reopened.content));
    assert_eq!(blocks, surface.blocks());
    assert!(matches!(&blocks[0].data, BlockData::Heading(h) if h.html == "Install"));
}

#[test]
fn test_other_users_cannot_write() {
    let dir = TempDir::new().unwrap();
    let mut owner_api = open_api(&dir, UserId::new());
    let project = owner_api.create_project("Private", "").unwrap().projects.remove(0);
    let header = owner_api.create_header(project.id, "A", None).unwrap().headers.remove(0);

    let mut stranger = open_api(&dir, UserId::new());
    assert!(stranger.list_projects().unwrap().projects.is_empty());
    assert!(matches!(
        stranger.update_header(header.id, HeaderUpdate::title("B")),
        Err(FolioError::Unauthorized)
    ));
    assert!(matches!(stranger.delete_project(project.id), Err(FolioError::Unauthorized)));

    let failing_clock = ManualClock::new();
    let mut surface = DocumentSurface::open(&header, failing_clock.clone(), SurfaceOptions::default());
    surface.insert(BlockKind::Text, None);
    surface.save_now(&mut stranger);
    assert!(surface.is_dirty());
}

#[test]
fn test_navbar_editor_persists_layout() {
    let dir = TempDir::new().unwrap();
    let user = UserId::new();
    let mut api = open_api(&dir, user);
    let project = api.create_project("Guide", "").unwrap().projects.remove(0);

    let clock = ManualClock::new();
    let mut editor = NavbarEditor::new(project.id, &project.name, Vec::new(), clock.clone());
    let title = editor.add_item(&mut api, NavbarKind::Title).unwrap();
    let link = editor.add_item(&mut api, NavbarKind::Link).unwrap();
    editor.drag_end(&mut api, link, 40.0);
    editor.set_style(&mut api, title, StyleKey::BgColor, json!("#222222"));
    editor.resize(title, 30.0);
    clock.advance_ms(220);
    editor.tick(&mut api);
    assert!(editor.drain_notices().is_empty());

    let items = api.list_navbar_items(project.id).unwrap().navbar_items;
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].label, "Guide");
    assert_eq!(items[0].width, 60);
    assert!(items[0].styles.contains("#222222"));
    assert_eq!(ItemStyles::parse(&items[1].styles).x(), Some(176.0));
}

#[test]
fn test_export_is_deterministic_and_public_read_matches() {
    let dir = TempDir::new().unwrap();
    let mut api = open_api(&dir, UserId::new());
    let project = api.create_project("Team Handbook", "").unwrap().projects.remove(0);
    let intro = api.create_header(project.id, "Intro", None).unwrap().headers.remove(0);
    let later = api.create_header(project.id, "Later", None).unwrap().headers.remove(0);
    api.create_header(project.id, "Child", Some(intro.id)).unwrap();
    api.update_header(intro.id, HeaderUpdate::content("# Welcome\n\nPlain markdown."))
        .unwrap();
    api.create_navbar_item(project.id, NavbarKind::ThemeToggle, "", "").unwrap();

    let assets = ExportAssets::default();
    let first = api.export_project(project.id, &assets).unwrap();
    let second = api.export_project(project.id, &assets).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.filename, "team-handbook.html");
    assert!(first.html.contains("<h1>Welcome</h1>"));

    let public = FolioApi::new(FileStore::new(dir.path().to_path_buf()), StaticSession::anonymous())
        .public_project(project.id)
        .unwrap();
    let order: Vec<&str> = display_order(&public.headers).into_iter().map(|h| h.title.as_str()).collect();
    assert_eq!(order, vec!["Intro", "Child", "Later"]);

    let intro_at = first.html.find(&format!("id=\"header-{}\"", intro.id)).unwrap();
    let later_at = first.html.find(&format!("id=\"header-{}\"", later.id)).unwrap();
    assert!(intro_at < later_at);
}
