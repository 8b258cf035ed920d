use super::backend::{StorageBackend, Tables};
use crate::error::{FolioError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const DATABASE_FILE: &str = "folio.json";

/// Stores every table in a single `folio.json` under `root`.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn database_path(&self) -> PathBuf {
        self.root.join(DATABASE_FILE)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(FolioError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn load(&self) -> Result<Tables> {
        let data_file = self.database_path();
        if !data_file.exists() {
            return Ok(Tables::default());
        }
        let content = fs::read_to_string(data_file).map_err(FolioError::Io)?;
        let tables: Tables = serde_json::from_str(&content).map_err(FolioError::Serialization)?;
        Ok(tables)
    }

    fn save(&self, tables: &Tables) -> Result<()> {
        self.ensure_dir()?;

        let content = serde_json::to_string_pretty(tables).map_err(FolioError::Serialization)?;

        // Atomic write
        let tmp_file = self.root.join(format!(".folio-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(FolioError::Io)?;
        fs::rename(&tmp_file, self.database_path()).map_err(FolioError::Io)?;

        Ok(())
    }
}
