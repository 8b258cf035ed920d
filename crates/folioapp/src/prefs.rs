//! # User Preferences
//!
//! The editor palette and the docs-page theme are per-user settings, loaded
//! once when a session starts and written back on every change through a
//! [`KeyValueStore`]:
//!
//! | Key | Value |
//! |-----|-------|
//! | `docColorScheme` | JSON [`ColorScheme`] |
//! | `docs-theme` | `"light"` or `"dark"` |
//!
//! Preference storage is never allowed to break editing. The first failed
//! read or write swaps the store for [`NoopKv`] and logs a warning; the
//! in-memory values keep working for the rest of the session.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::warn;
use uuid::Uuid;

use crate::error::{FolioError, Result};
use crate::render::Theme;

pub const COLOR_SCHEME_KEY: &str = "docColorScheme";
pub const DOCS_THEME_KEY: &str = "docs-theme";
pub const PREFS_FILE: &str = "prefs.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorScheme {
    pub bg: String,
    pub bg_alt: String,
    pub border: String,
    pub accent: String,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            bg: Theme::LIGHT.bg.to_string(),
            bg_alt: Theme::LIGHT.bg_alt.to_string(),
            border: Theme::LIGHT.border.to_string(),
            accent: Theme::LIGHT.accent.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorKey {
    Bg,
    BgAlt,
    Border,
    Accent,
}

impl ColorKey {
    pub const ALL: [ColorKey; 4] = [ColorKey::Bg, ColorKey::BgAlt, ColorKey::Border, ColorKey::Accent];

    pub fn label(&self) -> &'static str {
        match self {
            ColorKey::Bg => "Background",
            ColorKey::BgAlt => "Panel Background",
            ColorKey::Border => "Border",
            ColorKey::Accent => "Accent",
        }
    }
}

impl FromStr for ColorKey {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "bg" => Ok(ColorKey::Bg),
            "bgAlt" | "bg-alt" => Ok(ColorKey::BgAlt),
            "border" => Ok(ColorKey::Border),
            "accent" => Ok(ColorKey::Accent),
            other => Err(FolioError::invalid(format!("unknown color: {}", other))),
        }
    }
}

impl ColorScheme {
    pub fn get(&self, key: ColorKey) -> &str {
        match key {
            ColorKey::Bg => &self.bg,
            ColorKey::BgAlt => &self.bg_alt,
            ColorKey::Border => &self.border,
            ColorKey::Accent => &self.accent,
        }
    }

    pub fn set(&mut self, key: ColorKey, value: impl Into<String>) {
        let slot = match key {
            ColorKey::Bg => &mut self.bg,
            ColorKey::BgAlt => &mut self.bg_alt,
            ColorKey::Border => &mut self.border,
            ColorKey::Accent => &mut self.accent,
        };
        *slot = value.into();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocsTheme {
    #[default]
    Light,
    Dark,
}

impl DocsTheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocsTheme::Light => "light",
            DocsTheme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            DocsTheme::Light => DocsTheme::Dark,
            DocsTheme::Dark => DocsTheme::Light,
        }
    }

    pub fn palette(&self) -> Theme {
        match self {
            DocsTheme::Light => Theme::LIGHT,
            DocsTheme::Dark => Theme::DARK,
        }
    }
}

impl fmt::Display for DocsTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserPreferences {
    pub colors: ColorScheme,
    pub docs_theme: DocsTheme,
}

/// String key/value persistence for preferences.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct MemoryKv {
    values: BTreeMap<String, String>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKv {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}

/// Accepts everything, remembers nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopKv;

impl KeyValueStore for NoopKv {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
        Ok(())
    }

    fn remove(&mut self, _key: &str) -> Result<()> {
        Ok(())
    }
}

/// A JSON object file of string values, rewritten atomically on each change.
#[derive(Debug)]
pub struct FileKv {
    path: PathBuf,
}

impl FileKv {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn write_all(&self, values: &BTreeMap<String, String>) -> Result<()> {
        let dir = self
            .path
            .parent()
            .ok_or_else(|| FolioError::Store(format!("no parent directory for {}", self.path.display())))?;
        fs::create_dir_all(dir)?;
        let tmp = dir.join(format!(".prefs-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp, serde_json::to_string_pretty(values)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileKv {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());
        self.write_all(&values)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut values = self.read_all()?;
        if values.remove(key).is_some() {
            self.write_all(&values)?;
        }
        Ok(())
    }
}

/// Loaded preferences plus the store they are written back to.
pub struct PreferenceSession {
    prefs: UserPreferences,
    store: Box<dyn KeyValueStore>,
}

impl PreferenceSession {
    pub fn load(store: Box<dyn KeyValueStore>) -> Self {
        let mut session = Self {
            prefs: UserPreferences::default(),
            store,
        };

        match session.store.get(COLOR_SCHEME_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<ColorScheme>(&raw) {
                Ok(colors) => session.prefs.colors = colors,
                Err(err) => warn!("ignoring stored color scheme: {}", err),
            },
            Ok(None) => {}
            Err(err) => session.degrade(&err),
        }

        match session.store.get(DOCS_THEME_KEY) {
            Ok(Some(raw)) if raw == "dark" => session.prefs.docs_theme = DocsTheme::Dark,
            Ok(_) => {}
            Err(err) => session.degrade(&err),
        }

        session
    }

    pub fn preferences(&self) -> &UserPreferences {
        &self.prefs
    }

    pub fn set_color(&mut self, key: ColorKey, value: &str) {
        self.prefs.colors.set(key, value);
        match serde_json::to_string(&self.prefs.colors) {
            Ok(raw) => self.write(COLOR_SCHEME_KEY, &raw),
            Err(err) => warn!("could not encode color scheme: {}", err),
        }
    }

    /// Restore the default palette and forget the stored one.
    pub fn reset_colors(&mut self) {
        self.prefs.colors = ColorScheme::default();
        if let Err(err) = self.store.remove(COLOR_SCHEME_KEY) {
            self.degrade(&err);
        }
    }

    pub fn set_docs_theme(&mut self, theme: DocsTheme) {
        self.prefs.docs_theme = theme;
        self.write(DOCS_THEME_KEY, theme.as_str());
    }

    pub fn toggle_docs_theme(&mut self) -> DocsTheme {
        let next = self.prefs.docs_theme.toggled();
        self.set_docs_theme(next);
        next
    }

    fn write(&mut self, key: &str, value: &str) {
        if let Err(err) = self.store.set(key, value) {
            self.degrade(&err);
        }
    }

    fn degrade(&mut self, err: &FolioError) {
        warn!("preference storage unavailable, changes will not persist: {}", err);
        self.store = Box::new(NoopKv);
    }
}
