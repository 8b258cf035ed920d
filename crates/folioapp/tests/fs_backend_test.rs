use folioapp::model::{Header, NavbarItem, NavbarKind, Project, UserId};
use folioapp::store::backend::{StorageBackend, Tables};
use folioapp::store::fs_backend::{FsBackend, DATABASE_FILE};
use folioapp::store::{DataStore, FileStore};
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().to_path_buf());
    (dir, backend)
}

#[test]
fn test_missing_database_loads_empty_tables() {
    let (_dir, backend) = setup();
    assert_eq!(backend.load().unwrap(), Tables::default());
}

#[test]
fn test_save_is_atomic_and_leaves_no_tmp_files() {
    let (dir, backend) = setup();
    let project = Project::new(UserId::new(), "Docs", "");
    let mut tables = Tables::default();
    tables.projects.insert(project.id, project.clone());

    backend.save(&tables).unwrap();
    assert!(dir.path().join(DATABASE_FILE).exists());

    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap().to_string();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
    assert_eq!(backend.load().unwrap().projects.get(&project.id), Some(&project));
}

#[test]
fn test_creates_missing_root_on_save() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("a").join("b");
    let backend = FsBackend::new(nested.clone());
    backend.save(&Tables::default()).unwrap();
    assert!(nested.join(DATABASE_FILE).exists());
}

#[test]
fn test_corrupt_database_is_an_error() {
    let (dir, backend) = setup();
    fs::write(dir.path().join(DATABASE_FILE), "{not json").unwrap();
    assert!(backend.load().is_err());
}

#[test]
fn test_file_store_persists_across_instances() {
    let dir = TempDir::new().unwrap();
    let owner = UserId::new();
    let project = Project::new(owner, "Handbook", "");
    let header = Header::new(project.id, "Intro", None, 0);
    let item = NavbarItem::new(project.id, NavbarKind::Title, "Handbook", 0);

    {
        let mut store = FileStore::new(dir.path().to_path_buf());
        store.save_project(&project).unwrap();
        store.save_header(&header).unwrap();
        store.save_navbar_item(&item).unwrap();
    }

    let store = FileStore::new(dir.path().to_path_buf());
    assert_eq!(store.root(), dir.path());
    assert_eq!(store.get_project(&project.id).unwrap().name, "Handbook");
    assert_eq!(store.list_headers(&project.id).unwrap(), vec![header]);
    assert_eq!(store.list_navbar_items(&project.id).unwrap(), vec![item]);
}
