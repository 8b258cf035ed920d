use super::doc_store::DocStore;
use super::fs_backend::FsBackend;
use std::path::{Path, PathBuf};

/// Production store: tables in `<root>/folio.json`.
pub type FileStore = DocStore<FsBackend>;

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        DocStore::with_backend(FsBackend::new(root))
    }

    pub fn root(&self) -> &Path {
        self.backend.root()
    }
}
