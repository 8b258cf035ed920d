//! # Configuration
//!
//! Folio configuration is loaded with [`confique`], layering environment
//! variables over a TOML file over compiled defaults.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `FOLIO_AUTOSAVE_MS`, `FOLIO_HISTORY_CAPACITY`, etc.
//! 2. **Data dir config**: `<data dir>/folio.toml`.
//! 3. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `autosave_ms` | `1500` | Quiet period before a dirty section is saved |
//! | `history_debounce_ms` | `300` | Typing bursts shorter than this are one undo step |
//! | `navbar_width_debounce_ms` | `220` | Quiet period before a navbar resize is saved |
//! | `history_capacity` | `500` | Undo entries kept per section, `0` for unbounded |
//! | `highlight_css_url` | highlight.js 11.9.0 | Stylesheet linked from exports |
//! | `highlight_js_url` | highlight.js 11.9.0 | Script linked from exports |
//!
//! ## Data Directory
//!
//! [`data_dir`] picks where `folio.json`, `folio.toml` and `prefs.json` live: an
//! explicit path when the client has one, otherwise the OS data directory from
//! the `directories` crate.

use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{FolioError, Result};
use crate::render::document::{DEFAULT_HIGHLIGHT_CSS, DEFAULT_HIGHLIGHT_JS};
use crate::render::ExportAssets;

pub const CONFIG_FILE: &str = "folio.toml";

/// Configuration for folio, stored in `folio.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FolioConfig {
    /// Milliseconds of inactivity before a dirty section is saved.
    #[config(env = "FOLIO_AUTOSAVE_MS", default = 1500)]
    pub autosave_ms: u64,

    /// Milliseconds that coalesce typing into one undo step.
    #[config(env = "FOLIO_HISTORY_DEBOUNCE_MS", default = 300)]
    pub history_debounce_ms: u64,

    #[config(env = "FOLIO_NAVBAR_WIDTH_DEBOUNCE_MS", default = 220)]
    pub navbar_width_debounce_ms: u64,

    /// Undo entries kept per open section. 0 keeps everything.
    #[config(env = "FOLIO_HISTORY_CAPACITY", default = 500)]
    pub history_capacity: usize,

    #[config(
        env = "FOLIO_HIGHLIGHT_CSS_URL",
        default = "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/styles/github.min.css"
    )]
    pub highlight_css_url: String,

    #[config(
        env = "FOLIO_HIGHLIGHT_JS_URL",
        default = "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/highlight.min.js"
    )]
    pub highlight_js_url: String,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            autosave_ms: 1500,
            history_debounce_ms: 300,
            navbar_width_debounce_ms: 220,
            history_capacity: 500,
            highlight_css_url: DEFAULT_HIGHLIGHT_CSS.to_string(),
            highlight_js_url: DEFAULT_HIGHLIGHT_JS.to_string(),
        }
    }
}

impl FolioConfig {
    /// Load from the environment and `<data_dir>/folio.toml`. A missing file is fine.
    pub fn load(data_dir: &Path) -> Result<Self> {
        Ok(Self::builder().env().file(data_dir.join(CONFIG_FILE)).load()?)
    }

    /// Load from `<data_dir>/folio.toml` only, ignoring the environment.
    pub fn load_file(data_dir: &Path) -> Result<Self> {
        Ok(Self::builder().file(data_dir.join(CONFIG_FILE)).load()?)
    }

    pub fn autosave_delay(&self) -> Duration {
        Duration::from_millis(self.autosave_ms)
    }

    pub fn history_debounce(&self) -> Duration {
        Duration::from_millis(self.history_debounce_ms)
    }

    pub fn navbar_width_debounce(&self) -> Duration {
        Duration::from_millis(self.navbar_width_debounce_ms)
    }

    pub fn export_assets(&self) -> ExportAssets {
        ExportAssets {
            highlight_css_url: self.highlight_css_url.clone(),
            highlight_js_url: self.highlight_js_url.clone(),
        }
    }
}

/// `explicit` if given, else the platform data dir for folio.
pub fn data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    ProjectDirs::from("", "", "folio")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| FolioError::Config("could not determine a data directory".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_explicit_data_dir_wins() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(data_dir(Some(dir.path())).unwrap(), dir.path());
    }

    #[test]
    fn test_default_config() {
        let config = FolioConfig::default();
        assert_eq!(config.autosave_delay(), Duration::from_millis(1500));
        assert_eq!(config.history_debounce(), Duration::from_millis(300));
        assert_eq!(config.navbar_width_debounce(), Duration::from_millis(220));
        assert_eq!(config.export_assets(), ExportAssets::default());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(FolioConfig::load_file(dir.path()).unwrap(), FolioConfig::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "autosave_ms = 500\nhistory_capacity = 0\n").unwrap();

        let config = FolioConfig::load_file(dir.path()).unwrap();
        assert_eq!(config.autosave_ms, 500);
        assert_eq!(config.history_capacity, 0);
        assert_eq!(config.history_debounce_ms, 300);
    }

    #[test]
    fn test_written_config_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let custom = FolioConfig {
            autosave_ms: 250,
            history_capacity: 20,
            highlight_js_url: "https://cdn.example.com/hl.js".to_string(),
            ..FolioConfig::default()
        };
        fs::write(dir.path().join(CONFIG_FILE), toml::to_string(&custom).unwrap()).unwrap();

        let loaded = FolioConfig::load_file(dir.path()).unwrap();
        assert_eq!(loaded, custom);
        assert_eq!(loaded.export_assets().highlight_js_url, "https://cdn.example.com/hl.js");
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "autosave_ms = \"soon\"\n").unwrap();
        assert!(matches!(
            FolioConfig::load_file(dir.path()),
            Err(crate::error::FolioError::Config(_))
        ));
    }
}
