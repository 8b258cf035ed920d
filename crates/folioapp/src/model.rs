//! # Domain Model: Projects, Headers and Navbar Items
//!
//! A [`Project`] is the unit of authoring and export. It exclusively owns two
//! collections:
//!
//! - [`Header`]s: the sections of the document, arranged as a two-level tree
//!   (top-level headers and their direct children).
//! - [`NavbarItem`]s: the widgets of the top navigation bar.
//!
//! Deleting a project removes both collections; deleting a header removes its
//! direct children.
//!
//! ## Header Content
//!
//! `Header::content` is a single text field holding one of two encodings:
//!
//! ```text
//! [{"id":"…","data":{"type":"text",…}}, …]   <-- block sequence (JSON array)
//! # Getting started …                         <-- legacy markdown
//! ```
//!
//! The encoding is self-describing: trimmed text starting with `[` that parses
//! as a JSON array is a block sequence, anything else is markdown. See
//! [`crate::blocks::parse_sequence`] and [`Header::content_kind`].
//!
//! ## Ordering
//!
//! `order` is a dense integer unique among siblings. New headers and navbar
//! items are appended (`last + 1`); reordering rewrites every `order` field of
//! the affected collection in one pass.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::blocks::is_block_sequence;
use crate::error::FolioError;

/// Identity of an authenticated author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for UserId {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(UserId)
            .map_err(|_| FolioError::invalid(format!("not a user id: {}", s)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub owner: UserId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    pub fn new(owner: UserId, name: impl Into<String>, description: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner,
            name: name.into(),
            description: description.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// How a header's `content` field is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Blocks,
    Markdown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub id: Uuid,
    pub project_id: Uuid,
    #[serde(default)]
    pub parent_id: Option<Uuid>,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub icon: String,
    pub order: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Header {
    pub fn new(project_id: Uuid, title: impl Into<String>, parent_id: Option<Uuid>, order: i64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            project_id,
            parent_id,
            title: title.into(),
            content: String::new(),
            icon: String::new(),
            order,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_top_level(&self) -> bool {
        self.parent_id.is_none()
    }

    pub fn content_kind(&self) -> ContentKind {
        if is_block_sequence(&self.content) {
            ContentKind::Blocks
        } else {
            ContentKind::Markdown
        }
    }
}

/// Closed set of navbar widget types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavbarKind {
    Title,
    Search,
    Link,
    Button,
    Badge,
    DividerV,
    Github,
    ThemeToggle,
}

impl NavbarKind {
    pub const ALL: [NavbarKind; 8] = [
        NavbarKind::Title,
        NavbarKind::Search,
        NavbarKind::Link,
        NavbarKind::Button,
        NavbarKind::Badge,
        NavbarKind::DividerV,
        NavbarKind::Github,
        NavbarKind::ThemeToggle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NavbarKind::Title => "title",
            NavbarKind::Search => "search",
            NavbarKind::Link => "link",
            NavbarKind::Button => "button",
            NavbarKind::Badge => "badge",
            NavbarKind::DividerV => "divider-v",
            NavbarKind::Github => "github",
            NavbarKind::ThemeToggle => "theme-toggle",
        }
    }

    /// Label shown in the "add item" menu, also the initial label of non-title items.
    pub fn default_label(&self) -> &'static str {
        match self {
            NavbarKind::Title => "Project Title",
            NavbarKind::Search => "Search Box",
            NavbarKind::Link => "Link",
            NavbarKind::Button => "Button",
            NavbarKind::Badge => "Badge",
            NavbarKind::DividerV => "Divider",
            NavbarKind::Github => "GitHub Link",
            NavbarKind::ThemeToggle => "Theme Toggle",
        }
    }
}

impl fmt::Display for NavbarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NavbarKind {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NavbarKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s.trim())
            .ok_or_else(|| FolioError::invalid(format!("unknown navbar item type: {}", s)))
    }
}

pub const DEFAULT_NAVBAR_WIDTH: u32 = 120;
pub const MIN_NAVBAR_WIDTH: u32 = 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavbarItem {
    pub id: Uuid,
    pub project_id: Uuid,
    #[serde(rename = "type")]
    pub kind: NavbarKind,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub href: String,
    #[serde(default = "default_navbar_width")]
    pub width: u32,
    /// Opaque style override blob, see [`crate::navbar::ItemStyles`].
    #[serde(default = "empty_styles")]
    pub styles: String,
    pub order: i64,
    pub created_at: DateTime<Utc>,
}

fn default_navbar_width() -> u32 {
    DEFAULT_NAVBAR_WIDTH
}

fn empty_styles() -> String {
    "{}".to_string()
}

impl NavbarItem {
    pub fn new(project_id: Uuid, kind: NavbarKind, label: impl Into<String>, order: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            project_id,
            kind,
            label: label.into(),
            href: String::new(),
            width: DEFAULT_NAVBAR_WIDTH,
            styles: empty_styles(),
            order,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navbar_kind_wire_names() {
        let json = serde_json::to_string(&NavbarKind::DividerV).unwrap();
        assert_eq!(json, "\"divider-v\"");
        let kind: NavbarKind = serde_json::from_str("\"theme-toggle\"").unwrap();
        assert_eq!(kind, NavbarKind::ThemeToggle);
    }

    #[test]
    fn test_navbar_kind_from_str() {
        assert_eq!("github".parse::<NavbarKind>().unwrap(), NavbarKind::Github);
        assert!("sidebar".parse::<NavbarKind>().is_err());
    }

    #[test]
    fn test_navbar_item_defaults() {
        let item = NavbarItem::new(Uuid::new_v4(), NavbarKind::Link, "", 0);
        assert_eq!(item.width, 120);
        assert_eq!(item.styles, "{}");
        assert_eq!(item.href, "");
    }

    #[test]
    fn test_legacy_navbar_item_without_optional_fields() {
        let json = format!(
            r#"{{"id":"{}","project_id":"{}","type":"title","order":0,"created_at":"2024-01-01T00:00:00Z"}}"#,
            Uuid::new_v4(),
            Uuid::new_v4()
        );
        let item: NavbarItem = serde_json::from_str(&json).unwrap();
        assert_eq!(item.width, 120);
        assert_eq!(item.styles, "{}");
    }

    #[test]
    fn test_header_content_kind() {
        let mut header = Header::new(Uuid::new_v4(), "Intro", None, 0);
        assert_eq!(header.content_kind(), ContentKind::Markdown);
        header.content = "  []".to_string();
        assert_eq!(header.content_kind(), ContentKind::Blocks);
        header.content = "[not json".to_string();
        assert_eq!(header.content_kind(), ContentKind::Markdown);
    }

    #[test]
    fn test_user_id_parse() {
        let id = UserId::new();
        assert_eq!(id.to_string().parse::<UserId>().unwrap(), id);
        assert!("bob".parse::<UserId>().is_err());
    }
}
