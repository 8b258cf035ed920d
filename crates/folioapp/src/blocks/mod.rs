//! # Block Model
//!
//! A section's structured content is a [`BlockSequence`]: an ordered list of
//! [`Block`]s. Each block carries an id (unique within its sequence, stable
//! across edits), an optional layout width, and exactly one variant payload
//! from the closed set in [`BlockData`].
//!
//! ## Wire Format
//!
//! Blocks are persisted as a JSON array inside the header's `content` field.
//! The discriminant lives inside `data` and payload fields are camelCase:
//!
//! ```json
//! [
//!   {"id": "3f2c…", "data": {"type": "heading", "html": "Install", "level": 2, "align": "left", "color": ""}},
//!   {"id": "9a11…", "width": "1/2", "data": {"type": "divider", "borderStyle": "solid", "borderColor": "#D9CFC7", "thickness": 1}}
//! ]
//! ```
//!
//! `width` is omitted when the block spans the full row. This is a durable
//! on-disk format: every payload struct decodes with per-field defaults so
//! older documents missing a field still load. An element that still does not
//! decode (a kind from a newer release, a field of the wrong type) becomes
//! [`BlockData::Unknown`] and is written back exactly as it was read.
//!
//! ## Dispatch
//!
//! Every consumer (editors, renderer, palette) matches exhaustively on
//! [`BlockData`], so a new kind cannot be added without visiting each site.
//! `Unknown` is the one variant no picker can create.
//!
//! ## Submodules
//!
//! - [`parse`]: `parse_sequence` / `serialize_sequence` and legacy promotion
//! - [`palette`]: the block picker entries
//! - [`editors`]: one view-model per kind

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::FolioError;

pub mod editors;
pub mod palette;
pub mod parse;

pub use palette::{PaletteEntry, BLOCK_PALETTE};
pub use parse::{ensure_unique_ids, is_block_sequence, parse_sequence, serialize_sequence};

pub type BlockSequence = Vec<Block>;

pub fn new_block_id() -> String {
    Uuid::new_v4().to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Block {
    #[serde(default = "new_block_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<BlockWidth>,
    pub data: BlockData,
}

impl Block {
    pub fn new(data: BlockData) -> Self {
        Self {
            id: new_block_id(),
            width: None,
            data,
        }
    }

    /// Keep a stored element that does not decode as any known block.
    /// Its id and width are read when present so it can still be moved and resized.
    pub fn unknown(raw: Value) -> Self {
        let id = raw
            .get("id")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(new_block_id);
        let width = raw
            .get("width")
            .and_then(|w| BlockWidth::deserialize(w).ok());
        Self {
            id,
            width,
            data: BlockData::Unknown(UnknownBlock { raw }),
        }
    }

    pub fn kind(&self) -> BlockKind {
        self.data.kind()
    }

    /// Layout width, `Full` when unset.
    pub fn layout_width(&self) -> BlockWidth {
        self.width.unwrap_or_default()
    }
}

#[derive(Serialize)]
struct StoredBlock<'a> {
    id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    width: Option<BlockWidth>,
    data: &'a BlockData,
}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.data {
            BlockData::Unknown(unknown) => unknown.element(&self.id, self.width).serialize(serializer),
            data => StoredBlock {
                id: &self.id,
                width: self.width,
                data,
            }
            .serialize(serializer),
        }
    }
}

/// Create a block of `kind` with a fresh id and that kind's default fields.
pub fn create_block(kind: BlockKind) -> Block {
    Block::new(BlockData::default_for(kind))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Text,
    Heading,
    Code,
    Callout,
    Image,
    Table,
    Divider,
    Button,
    Badge,
    Quote,
    /// Stored content this release cannot read. Never in [`BlockKind::ALL`].
    Unknown,
}

impl BlockKind {
    pub const ALL: [BlockKind; 10] = [
        BlockKind::Text,
        BlockKind::Heading,
        BlockKind::Code,
        BlockKind::Callout,
        BlockKind::Image,
        BlockKind::Table,
        BlockKind::Divider,
        BlockKind::Button,
        BlockKind::Badge,
        BlockKind::Quote,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Text => "text",
            BlockKind::Heading => "heading",
            BlockKind::Code => "code",
            BlockKind::Callout => "callout",
            BlockKind::Image => "image",
            BlockKind::Table => "table",
            BlockKind::Divider => "divider",
            BlockKind::Button => "button",
            BlockKind::Badge => "badge",
            BlockKind::Quote => "quote",
            BlockKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockKind {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        BlockKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == needle)
            .ok_or_else(|| FolioError::invalid(format!("unknown block type: {}", s)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BlockData {
    Text(TextBlock),
    Heading(HeadingBlock),
    Code(CodeBlock),
    Callout(CalloutBlock),
    Image(ImageBlock),
    Table(TableBlock),
    Divider(DividerBlock),
    Button(ButtonBlock),
    Badge(BadgeBlock),
    Quote(QuoteBlock),
    #[serde(skip)]
    Unknown(UnknownBlock),
}

impl BlockData {
    pub fn default_for(kind: BlockKind) -> Self {
        match kind {
            BlockKind::Text => BlockData::Text(TextBlock::default()),
            BlockKind::Heading => BlockData::Heading(HeadingBlock::default()),
            BlockKind::Code => BlockData::Code(CodeBlock::default()),
            BlockKind::Callout => BlockData::Callout(CalloutBlock::default()),
            BlockKind::Image => BlockData::Image(ImageBlock::default()),
            BlockKind::Table => BlockData::Table(TableBlock::default()),
            BlockKind::Divider => BlockData::Divider(DividerBlock::default()),
            BlockKind::Button => BlockData::Button(ButtonBlock::default()),
            BlockKind::Badge => BlockData::Badge(BadgeBlock::default()),
            BlockKind::Quote => BlockData::Quote(QuoteBlock::default()),
            BlockKind::Unknown => BlockData::Unknown(UnknownBlock::default()),
        }
    }

    pub fn kind(&self) -> BlockKind {
        match self {
            BlockData::Text(_) => BlockKind::Text,
            BlockData::Heading(_) => BlockKind::Heading,
            BlockData::Code(_) => BlockKind::Code,
            BlockData::Callout(_) => BlockKind::Callout,
            BlockData::Image(_) => BlockKind::Image,
            BlockData::Table(_) => BlockKind::Table,
            BlockData::Divider(_) => BlockKind::Divider,
            BlockData::Button(_) => BlockKind::Button,
            BlockData::Badge(_) => BlockKind::Badge,
            BlockData::Quote(_) => BlockKind::Quote,
            BlockData::Unknown(_) => BlockKind::Unknown,
        }
    }

    /// The rich-markup body, for kinds that have one.
    pub fn markup(&self) -> Option<&str> {
        match self {
            BlockData::Text(b) => Some(&b.html),
            BlockData::Heading(b) => Some(&b.html),
            BlockData::Callout(b) => Some(&b.html),
            BlockData::Quote(b) => Some(&b.html),
            _ => None,
        }
    }
}

// --- Shared field enums ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BlockWidth {
    #[default]
    #[serde(rename = "full")]
    Full,
    #[serde(rename = "1/2")]
    Half,
    #[serde(rename = "1/3")]
    Third,
    #[serde(rename = "2/3")]
    TwoThirds,
}

impl BlockWidth {
    pub const ALL: [BlockWidth; 4] = [
        BlockWidth::Full,
        BlockWidth::Half,
        BlockWidth::Third,
        BlockWidth::TwoThirds,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BlockWidth::Full => "full",
            BlockWidth::Half => "1/2",
            BlockWidth::Third => "1/3",
            BlockWidth::TwoThirds => "2/3",
        }
    }

    /// CSS width of a block in a row with 8px gaps.
    pub fn css(&self) -> &'static str {
        match self {
            BlockWidth::Full => "100%",
            BlockWidth::Half => "calc(50% - 4px)",
            BlockWidth::Third => "calc(33.333% - 5.34px)",
            BlockWidth::TwoThirds => "calc(66.666% - 2.67px)",
        }
    }
}

impl FromStr for BlockWidth {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockWidth::ALL
            .iter()
            .copied()
            .find(|w| w.as_str() == s.trim())
            .ok_or_else(|| FolioError::invalid(format!("width must be one of full, 1/2, 1/3, 2/3: {}", s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    pub fn as_str(&self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum HeadingLevel {
    H1,
    #[default]
    H2,
    H3,
}

impl HeadingLevel {
    pub fn number(&self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }

    pub fn font_size(&self) -> &'static str {
        match self {
            HeadingLevel::H1 => "2rem",
            HeadingLevel::H2 => "1.5rem",
            HeadingLevel::H3 => "1.25rem",
        }
    }

    pub fn font_weight(&self) -> u16 {
        match self {
            HeadingLevel::H1 => 800,
            HeadingLevel::H2 => 700,
            HeadingLevel::H3 => 600,
        }
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(HeadingLevel::H1),
            2 => Ok(HeadingLevel::H2),
            3 => Ok(HeadingLevel::H3),
            other => Err(format!("heading level must be 1, 2 or 3, got {}", other)),
        }
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> u8 {
        level.number()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeTheme {
    Dark,
    #[default]
    Light,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalloutVariant {
    #[default]
    Info,
    Warning,
    Danger,
    Success,
}

impl CalloutVariant {
    pub const ALL: [CalloutVariant; 4] = [
        CalloutVariant::Info,
        CalloutVariant::Warning,
        CalloutVariant::Danger,
        CalloutVariant::Success,
    ];

    /// (border, background)
    pub fn colors(&self) -> (&'static str, &'static str) {
        match self {
            CalloutVariant::Info => ("#3b82f6", "#eff6ff"),
            CalloutVariant::Warning => ("#f59e0b", "#fffbeb"),
            CalloutVariant::Danger => ("#ef4444", "#fef2f2"),
            CalloutVariant::Success => ("#22c55e", "#f0fdf4"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSize {
    Sm,
    #[default]
    Md,
    Lg,
    Full,
}

impl ImageSize {
    pub fn css_width(&self) -> &'static str {
        match self {
            ImageSize::Sm => "320px",
            ImageSize::Md => "480px",
            ImageSize::Lg => "720px",
            ImageSize::Full => "100%",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl BorderStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            BorderStyle::Solid => "solid",
            BorderStyle::Dashed => "dashed",
            BorderStyle::Dotted => "dotted",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Thickness {
    #[default]
    One,
    Two,
    Four,
}

impl Thickness {
    pub fn px(&self) -> u8 {
        match self {
            Thickness::One => 1,
            Thickness::Two => 2,
            Thickness::Four => 4,
        }
    }
}

impl TryFrom<u8> for Thickness {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Thickness::One),
            2 => Ok(Thickness::Two),
            4 => Ok(Thickness::Four),
            other => Err(format!("thickness must be 1, 2 or 4, got {}", other)),
        }
    }
}

impl From<Thickness> for u8 {
    fn from(thickness: Thickness) -> u8 {
        thickness.px()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    #[default]
    Filled,
    Outlined,
    Ghost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    pub fn padding(&self) -> &'static str {
        match self {
            ButtonSize::Sm => "4px 12px",
            ButtonSize::Md => "8px 20px",
            ButtonSize::Lg => "12px 28px",
        }
    }

    pub fn font_size(&self) -> &'static str {
        match self {
            ButtonSize::Sm => "12px",
            ButtonSize::Md => "14px",
            ButtonSize::Lg => "16px",
        }
    }
}

// --- Variant payloads ---

pub const DEFAULT_TEXT_SIZE: u32 = 14;
pub const DEFAULT_CODE_LANGUAGE: &str = "typescript";
pub const DEFAULT_DIVIDER_COLOR: &str = "#D9CFC7";
pub const DEFAULT_BUTTON_COLOR: &str = "#C9B59C";
pub const DEFAULT_CALLOUT_ICON: &str = "ℹ️";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextBlock {
    pub html: String,
    pub align: Align,
    pub font_size: u32,
    pub font_weight: FontWeight,
    pub color: String,
    pub bg_color: String,
}

impl Default for TextBlock {
    fn default() -> Self {
        Self {
            html: String::new(),
            align: Align::Left,
            font_size: DEFAULT_TEXT_SIZE,
            font_weight: FontWeight::Normal,
            color: String::new(),
            bg_color: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeadingBlock {
    pub html: String,
    pub level: HeadingLevel,
    pub align: Align,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CodeBlock {
    pub code: String,
    pub language: String,
    pub theme: CodeTheme,
    pub line_numbers: bool,
}

impl Default for CodeBlock {
    fn default() -> Self {
        Self {
            code: String::new(),
            language: DEFAULT_CODE_LANGUAGE.to_string(),
            theme: CodeTheme::Light,
            line_numbers: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalloutBlock {
    pub variant: CalloutVariant,
    pub icon: String,
    pub html: String,
}

impl Default for CalloutBlock {
    fn default() -> Self {
        Self {
            variant: CalloutVariant::Info,
            icon: DEFAULT_CALLOUT_ICON.to_string(),
            html: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageBlock {
    pub url: String,
    pub caption: String,
    pub size: ImageSize,
    pub align: Align,
}

impl Default for ImageBlock {
    fn default() -> Self {
        Self {
            url: String::new(),
            caption: String::new(),
            size: ImageSize::Md,
            align: Align::Center,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableBlock {
    /// Row 0 is the header row. Rectangular, at least 1x1.
    pub rows: Vec<Vec<String>>,
}

impl Default for TableBlock {
    fn default() -> Self {
        Self {
            rows: vec![vec![String::new(); 3]; 2],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DividerBlock {
    pub border_style: BorderStyle,
    pub border_color: String,
    pub thickness: Thickness,
}

impl Default for DividerBlock {
    fn default() -> Self {
        Self {
            border_style: BorderStyle::Solid,
            border_color: DEFAULT_DIVIDER_COLOR.to_string(),
            thickness: Thickness::One,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ButtonBlock {
    pub label: String,
    pub href: String,
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub color: String,
    pub border_radius: u32,
}

impl Default for ButtonBlock {
    fn default() -> Self {
        Self {
            label: "Button".to_string(),
            href: "#".to_string(),
            variant: ButtonVariant::Filled,
            size: ButtonSize::Md,
            color: DEFAULT_BUTTON_COLOR.to_string(),
            border_radius: 6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BadgeBlock {
    pub label: String,
    pub bg_color: String,
    pub text_color: String,
    pub border_radius: u32,
}

impl Default for BadgeBlock {
    fn default() -> Self {
        Self {
            label: "Badge".to_string(),
            bg_color: "#EFE9E3".to_string(),
            text_color: "#1a1a1a".to_string(),
            border_radius: 9999,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuoteBlock {
    pub html: String,
    pub author: String,
}

/// The undecoded stored element, kept whole.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownBlock {
    pub raw: Value,
}

impl Default for UnknownBlock {
    fn default() -> Self {
        Self {
            raw: Value::Object(serde_json::Map::new()),
        }
    }
}

impl UnknownBlock {
    /// The element to store, with the block's current id and width folded in.
    fn element(&self, id: &str, width: Option<BlockWidth>) -> Value {
        let mut raw = self.raw.clone();
        if let Value::Object(fields) = &mut raw {
            fields.insert("id".to_string(), Value::String(id.to_string()));
            match width {
                Some(width) => {
                    fields.insert("width".to_string(), Value::String(width.as_str().to_string()));
                }
                None => {
                    let readable = fields
                        .get("width")
                        .map(|w| BlockWidth::deserialize(w).is_ok())
                        .unwrap_or(false);
                    if readable {
                        fields.remove("width");
                    }
                }
            }
        }
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_block_defaults() {
        let block = create_block(BlockKind::Text);
        match &block.data {
            BlockData::Text(text) => {
                assert_eq!(text.html, "");
                assert_eq!(text.align, Align::Left);
                assert_eq!(text.font_size, 14);
                assert_eq!(text.font_weight, FontWeight::Normal);
                assert_eq!(text.color, "");
            }
            other => panic!("expected text block, got {:?}", other),
        }
        assert_eq!(block.width, None);
        assert_eq!(block.layout_width(), BlockWidth::Full);
    }

    #[test]
    fn test_create_block_assigns_fresh_ids() {
        let a = create_block(BlockKind::Quote);
        let b = create_block(BlockKind::Quote);
        assert_ne!(a.id, b.id);
        assert_eq!(a.data, b.data);
    }

    #[test]
    fn test_every_kind_creates_matching_variant() {
        for kind in BlockKind::ALL {
            assert_eq!(create_block(kind).kind(), kind);
        }
    }

    #[test]
    fn test_wire_format_uses_camel_case_and_inner_tag() {
        let block = Block {
            id: "b1".to_string(),
            width: Some(BlockWidth::Half),
            data: BlockData::default_for(BlockKind::Divider),
        };
        let value = serde_json::to_value(&block).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "b1",
                "width": "1/2",
                "data": {"type": "divider", "borderStyle": "solid", "borderColor": "#D9CFC7", "thickness": 1}
            })
        );
    }

    #[test]
    fn test_full_width_is_omitted() {
        let block = create_block(BlockKind::Badge);
        let value = serde_json::to_value(&block).unwrap();
        assert!(value.get("width").is_none());
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let block: Block =
            serde_json::from_value(json!({"id": "x", "data": {"type": "button", "label": "Go"}})).unwrap();
        match block.data {
            BlockData::Button(button) => {
                assert_eq!(button.label, "Go");
                assert_eq!(button.href, "#");
                assert_eq!(button.border_radius, 6);
            }
            other => panic!("expected button, got {:?}", other),
        }
    }

    #[test]
    fn test_heading_level_rejects_out_of_range() {
        let result: Result<Block, _> =
            serde_json::from_value(json!({"id": "x", "data": {"type": "heading", "level": 4}}));
        assert!(result.is_err());
    }

    #[test]
    fn test_default_table_is_two_by_three() {
        let table = TableBlock::default();
        assert_eq!(table.rows.len(), 2);
        assert!(table.rows.iter().all(|row| row.len() == 3));
    }

    #[test]
    fn test_unknown_block_keeps_its_element() {
        let raw = json!({"id": "n1", "width": "1/3", "data": {"type": "video", "src": "a.mp4"}});
        let block = Block::unknown(raw.clone());
        assert_eq!(block.id, "n1");
        assert_eq!(block.width, Some(BlockWidth::Third));
        assert_eq!(block.kind(), BlockKind::Unknown);
        assert_eq!(serde_json::to_value(&block).unwrap(), raw);
    }

    #[test]
    fn test_unknown_block_writes_new_id_and_width() {
        let mut block = Block::unknown(json!({"id": "n1", "width": "1/3", "data": {"type": "video"}}));
        block.id = "n2".to_string();
        block.width = None;
        assert_eq!(
            serde_json::to_value(&block).unwrap(),
            json!({"id": "n2", "data": {"type": "video"}})
        );
    }

    #[test]
    fn test_unknown_is_not_creatable() {
        assert!(!BlockKind::ALL.contains(&BlockKind::Unknown));
        assert!("unknown".parse::<BlockKind>().is_err());
    }

    #[test]
    fn test_kind_and_width_from_str() {
        assert_eq!("Callout".parse::<BlockKind>().unwrap(), BlockKind::Callout);
        assert!("video".parse::<BlockKind>().is_err());
        assert_eq!("2/3".parse::<BlockWidth>().unwrap(), BlockWidth::TwoThirds);
        assert!("3/4".parse::<BlockWidth>().is_err());
    }
}
