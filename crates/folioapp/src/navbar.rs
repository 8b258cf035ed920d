//! # Navbar Layout Model
//!
//! The navbar is a row of absolutely positioned widgets. Each item stores a
//! width and an opaque JSON style blob ([`ItemStyles`]) that may carry an
//! explicit `x`. Positions are never stored as compiled layout; they are
//! re-derived from the ordered items whenever needed:
//!
//! ```text
//! cursor = 8
//! for item in items:
//!     x      = item.styles.x  or  cursor
//!     cursor = (item.styles.x or cursor) + width(item) + 8
//! ```
//!
//! `width(item)` is the stored width, except vertical dividers which always
//! take 20px.
//!
//! ## Interactions
//!
//! - **Drag**: on drop, `max(0, resolved_x + delta)` becomes the item's
//!   explicit `x`. An item with an explicit `x` never goes back to flow layout.
//! - **Resize**: the width follows the pointer live (minimum 60) and is
//!   written after a 220ms quiet period per item.
//! - **Add**: a new item starts at the rightmost edge plus the gap, so it
//!   never overlaps an existing one.
//!
//! [`NavbarEditor`] owns the live item list for one project and persists
//! through a [`NavbarWriter`]. Write failures become [`Notice`]s; local state
//! is kept.

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::clock::{Clock, Debounce, SystemClock};
use crate::commands::navbar::NavbarItemUpdate;
use crate::commands::Notice;
use crate::error::FolioError;
use crate::model::{NavbarItem, NavbarKind, MIN_NAVBAR_WIDTH};
use crate::ports::NavbarWriter;

pub const LEFT_MARGIN: f64 = 8.0;
pub const ITEM_GAP: f64 = 8.0;
pub const DIVIDER_WIDTH: f64 = 20.0;
pub const DEFAULT_WIDTH_DEBOUNCE: Duration = Duration::from_millis(220);

/// Keys of the style blob a user can edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleKey {
    BgColor,
    TextColor,
    FontSize,
    Padding,
    BorderRadius,
}

impl StyleKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StyleKey::BgColor => "bgColor",
            StyleKey::TextColor => "textColor",
            StyleKey::FontSize => "fontSize",
            StyleKey::Padding => "padding",
            StyleKey::BorderRadius => "borderRadius",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, StyleKey::FontSize | StyleKey::BorderRadius)
    }

    /// Convert user text into the JSON value stored under this key.
    pub fn value_from_str(&self, raw: &str) -> Result<Value, FolioError> {
        if self.is_numeric() {
            raw.trim()
                .parse::<f64>()
                .ok()
                .and_then(|n| serde_json::Number::from_f64(n).map(Value::Number))
                .ok_or_else(|| FolioError::invalid(format!("{} must be a number", self.as_str())))
        } else {
            Ok(Value::String(raw.to_string()))
        }
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StyleKey {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "bgColor" | "bg-color" | "bg" => Ok(StyleKey::BgColor),
            "textColor" | "text-color" | "color" => Ok(StyleKey::TextColor),
            "fontSize" | "font-size" => Ok(StyleKey::FontSize),
            "padding" => Ok(StyleKey::Padding),
            "borderRadius" | "border-radius" | "radius" => Ok(StyleKey::BorderRadius),
            other => Err(FolioError::invalid(format!("unknown style key: {}", other))),
        }
    }
}

/// Per-item style overrides. Unknown keys are preserved on rewrite.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemStyles {
    values: Map<String, Value>,
}

impl ItemStyles {
    /// Parse a style blob; anything that is not a JSON object yields no overrides.
    pub fn parse(raw: &str) -> Self {
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(values)) => Self { values },
            Ok(_) | Err(_) => {
                if !raw.trim().is_empty() {
                    debug!("ignoring malformed navbar style blob: {}", raw);
                }
                Self::default()
            }
        }
    }

    pub fn x(&self) -> Option<f64> {
        self.values.get("x").and_then(Value::as_f64)
    }

    pub fn set_x(&mut self, x: f64) {
        if let Some(number) = serde_json::Number::from_f64(x) {
            self.values.insert("x".to_string(), Value::Number(number));
        }
    }

    pub fn bg_color(&self) -> Option<&str> {
        self.str_value(StyleKey::BgColor)
    }

    pub fn text_color(&self) -> Option<&str> {
        self.str_value(StyleKey::TextColor)
    }

    pub fn padding(&self) -> Option<&str> {
        self.str_value(StyleKey::Padding)
    }

    pub fn font_size(&self) -> Option<f64> {
        self.values.get(StyleKey::FontSize.as_str()).and_then(Value::as_f64)
    }

    pub fn border_radius(&self) -> Option<f64> {
        self.values.get(StyleKey::BorderRadius.as_str()).and_then(Value::as_f64)
    }

    pub fn set(&mut self, key: StyleKey, value: Value) {
        self.values.insert(key.as_str().to_string(), value);
    }

    pub fn to_json(&self) -> String {
        Value::Object(self.values.clone()).to_string()
    }

    fn str_value(&self, key: StyleKey) -> Option<&str> {
        self.values
            .get(key.as_str())
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }
}

/// Width an item occupies in the flow.
pub fn effective_width(item: &NavbarItem) -> f64 {
    match item.kind {
        NavbarKind::DividerV => DIVIDER_WIDTH,
        _ => f64::from(item.width),
    }
}

/// Resolved x of every item, in order.
pub fn resolve_positions(items: &[NavbarItem]) -> Vec<f64> {
    let mut cursor = LEFT_MARGIN;
    items
        .iter()
        .map(|item| {
            let explicit = ItemStyles::parse(&item.styles).x();
            let x = explicit.unwrap_or(cursor);
            cursor = x + effective_width(item) + ITEM_GAP;
            x
        })
        .collect()
}

/// Position of the item at `index`, clamped to the last item.
/// An empty bar puts everything at the left margin.
pub fn resolve_x(items: &[NavbarItem], index: usize) -> f64 {
    if items.is_empty() {
        return LEFT_MARGIN;
    }
    resolve_positions(&items[..=index.min(items.len() - 1)])
        .last()
        .copied()
        .unwrap_or(LEFT_MARGIN)
}

/// Where a newly added item goes: past the rightmost edge.
pub fn next_x(items: &[NavbarItem]) -> f64 {
    resolve_positions(items)
        .iter()
        .zip(items)
        .map(|(x, item)| x + effective_width(item) + ITEM_GAP)
        .fold(LEFT_MARGIN, f64::max)
}

/// Scrollable width of the navbar canvas.
pub fn content_width(items: &[NavbarItem]) -> f64 {
    resolve_positions(items)
        .iter()
        .zip(items)
        .map(|(x, item)| x + effective_width(item) + 40.0)
        .fold(300.0, f64::max)
}

pub fn clamp_width(raw: f64) -> u32 {
    let rounded = raw.round();
    if rounded.is_nan() || rounded < f64::from(MIN_NAVBAR_WIDTH) {
        MIN_NAVBAR_WIDTH
    } else if rounded > f64::from(u32::MAX) {
        u32::MAX
    } else {
        rounded as u32
    }
}

/// Style blob after dropping an item that was at `resolved_x`.
pub fn dropped_styles(item: &NavbarItem, resolved_x: f64, delta_x: f64) -> String {
    let mut styles = ItemStyles::parse(&item.styles);
    styles.set_x((resolved_x + delta_x).max(0.0));
    styles.to_json()
}

/// Live navbar state for one project.
pub struct NavbarEditor<C: Clock = SystemClock> {
    project_id: Uuid,
    project_name: String,
    items: Vec<NavbarItem>,
    selected: Option<Uuid>,
    width_writes: BTreeMap<Uuid, Debounce<u32>>,
    width_delay: Duration,
    notices: Vec<Notice>,
    clock: C,
}

impl<C: Clock> NavbarEditor<C> {
    pub fn new(project_id: Uuid, project_name: impl Into<String>, items: Vec<NavbarItem>, clock: C) -> Self {
        Self {
            project_id,
            project_name: project_name.into(),
            items,
            selected: None,
            width_writes: BTreeMap::new(),
            width_delay: DEFAULT_WIDTH_DEBOUNCE,
            notices: Vec::new(),
            clock,
        }
    }

    pub fn with_width_debounce(mut self, delay: Duration) -> Self {
        self.width_delay = delay;
        self
    }

    pub fn items(&self) -> &[NavbarItem] {
        &self.items
    }

    pub fn positions(&self) -> Vec<f64> {
        resolve_positions(&self.items)
    }

    pub fn selected(&self) -> Option<&NavbarItem> {
        let id = self.selected?;
        self.items.iter().find(|item| item.id == id)
    }

    pub fn select(&mut self, id: Option<Uuid>) {
        self.selected = id.filter(|id| self.index_of(*id).is_some());
    }

    pub fn drain_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Create an item of `kind` to the right of everything else.
    pub fn add_item<W: NavbarWriter>(&mut self, writer: &mut W, kind: NavbarKind) -> Option<Uuid> {
        let x = next_x(&self.items);
        let label = match kind {
            NavbarKind::Title => self.project_name.clone(),
            _ => kind.default_label().to_string(),
        };

        let created = writer
            .create_navbar_item(self.project_id, kind, &label)
            .and_then(|mut item| {
                let mut styles = ItemStyles::default();
                styles.set_x(x);
                item.styles = styles.to_json();
                writer.update_navbar_item(item.id, NavbarItemUpdate::styles(item.styles.clone()))?;
                Ok(item)
            });

        match created {
            Ok(item) => {
                let id = item.id;
                debug!(%id, %kind, x, "navbar item added");
                self.items.push(item);
                Some(id)
            }
            Err(err) => {
                self.fail("Failed to add item", &err);
                None
            }
        }
    }

    pub fn delete<W: NavbarWriter>(&mut self, writer: &mut W, id: Uuid) -> bool {
        match writer.delete_navbar_item(id) {
            Ok(()) => {
                self.items.retain(|item| item.id != id);
                self.width_writes.remove(&id);
                if self.selected == Some(id) {
                    self.selected = None;
                }
                true
            }
            Err(err) => {
                self.fail("Failed to remove item", &err);
                false
            }
        }
    }

    /// Finish a drag of `id` by `delta_x` pixels.
    pub fn drag_end<W: NavbarWriter>(&mut self, writer: &mut W, id: Uuid, delta_x: f64) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        let resolved = resolve_x(&self.items, index);
        let styles = dropped_styles(&self.items[index], resolved, delta_x);
        self.items[index].styles = styles.clone();

        if let Err(err) = writer.update_navbar_item(id, NavbarItemUpdate::styles(styles)) {
            self.fail("Failed to save position", &err);
        }
    }

    /// Pointer moved on the trailing edge: apply the width now, write it later.
    pub fn resize(&mut self, id: Uuid, raw_width: f64) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        let width = clamp_width(raw_width);
        self.items[index].width = width;
        let now = self.clock.now();
        let delay = self.width_delay;
        self.width_writes
            .entry(id)
            .or_insert_with(|| Debounce::new(delay))
            .schedule(width, now);
    }

    pub fn set_label<W: NavbarWriter>(&mut self, writer: &mut W, id: Uuid, label: &str) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        self.items[index].label = label.to_string();
        if let Err(err) = writer.update_navbar_item(id, NavbarItemUpdate::label(label)) {
            self.fail("Failed to save", &err);
        }
    }

    pub fn set_href<W: NavbarWriter>(&mut self, writer: &mut W, id: Uuid, href: &str) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        self.items[index].href = href.to_string();
        if let Err(err) = writer.update_navbar_item(id, NavbarItemUpdate::href(href)) {
            self.fail("Failed to save", &err);
        }
    }

    pub fn set_style<W: NavbarWriter>(&mut self, writer: &mut W, id: Uuid, key: StyleKey, value: Value) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        let mut styles = ItemStyles::parse(&self.items[index].styles);
        styles.set(key, value);
        let blob = styles.to_json();
        self.items[index].styles = blob.clone();
        if let Err(err) = writer.update_navbar_item(id, NavbarItemUpdate::styles(blob)) {
            self.fail("Failed to save styles", &err);
        }
    }

    /// Write widths whose quiet period has passed.
    pub fn tick<W: NavbarWriter>(&mut self, writer: &mut W) {
        let now = self.clock.now();
        let due: Vec<(Uuid, u32)> = self
            .width_writes
            .iter_mut()
            .filter_map(|(id, timer)| timer.poll(now).map(|width| (*id, width)))
            .collect();
        self.write_widths(writer, due);
    }

    /// Write every pending width immediately.
    pub fn flush<W: NavbarWriter>(&mut self, writer: &mut W) {
        let due: Vec<(Uuid, u32)> = self
            .width_writes
            .iter_mut()
            .filter_map(|(id, timer)| timer.flush().map(|width| (*id, width)))
            .collect();
        self.write_widths(writer, due);
    }

    pub fn has_pending_writes(&self) -> bool {
        self.width_writes.values().any(Debounce::is_pending)
    }

    /// Drop pending width writes, as when the editor is closed.
    pub fn teardown(&mut self) {
        self.width_writes.clear();
    }

    fn write_widths<W: NavbarWriter>(&mut self, writer: &mut W, due: Vec<(Uuid, u32)>) {
        self.width_writes.retain(|_, timer| timer.is_pending());
        for (id, width) in due {
            if let Err(err) = writer.update_navbar_item(id, NavbarItemUpdate::width(width)) {
                self.fail("Failed to save width", &err);
            }
        }
    }

    fn index_of(&self, id: Uuid) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    fn fail(&mut self, message: &str, err: &FolioError) {
        warn!("{}: {}", message, err);
        self.notices.push(Notice::error(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::test_utils::RecordingWriter;

    fn item(kind: NavbarKind, width: u32, styles: &str) -> NavbarItem {
        let mut item = NavbarItem::new(Uuid::nil(), kind, "", 0);
        item.width = width;
        item.styles = styles.to_string();
        item
    }

    #[test]
    fn test_default_flow_positions() {
        let items = vec![
            item(NavbarKind::Title, 120, "{}"),
            item(NavbarKind::DividerV, 120, "{}"),
            item(NavbarKind::Link, 80, "{}"),
        ];
        assert_eq!(resolve_positions(&items), vec![8.0, 136.0, 164.0]);
        assert_eq!(resolve_x(&items, 2), 164.0);
        assert_eq!(resolve_x(&items, 7), 164.0);
    }

    #[test]
    fn test_resolve_x_on_empty_bar() {
        assert_eq!(resolve_x(&[], 0), 8.0);
        assert_eq!(resolve_x(&[], 3), 8.0);
    }

    #[test]
    fn test_explicit_x_overrides_and_restarts_flow() {
        let items = vec![
            item(NavbarKind::Title, 120, r#"{"x":300}"#),
            item(NavbarKind::Link, 80, "{}"),
        ];
        assert_eq!(resolve_positions(&items), vec![300.0, 428.0]);
    }

    #[test]
    fn test_malformed_styles_fall_back_to_flow() {
        let items = vec![item(NavbarKind::Title, 120, "not json"), item(NavbarKind::Link, 80, r#"{"x":"12"}"#)];
        assert_eq!(resolve_positions(&items), vec![8.0, 136.0]);
    }

    #[test]
    fn test_next_x() {
        assert_eq!(next_x(&[]), 8.0);
        let items = vec![
            item(NavbarKind::Title, 120, r#"{"x":400}"#),
            item(NavbarKind::Link, 80, r#"{"x":10}"#),
        ];
        assert_eq!(next_x(&items), 528.0);
    }

    #[test]
    fn test_dropped_styles_clamp_and_preserve_keys() {
        let dragged = item(NavbarKind::Button, 120, r##"{"bgColor":"#000","x":20}"##);
        let styles = ItemStyles::parse(&dropped_styles(&dragged, 20.0, -50.0));
        assert_eq!(styles.x(), Some(0.0));
        assert_eq!(styles.bg_color(), Some("#000"));
    }

    #[test]
    fn test_clamp_width() {
        assert_eq!(clamp_width(12.0), 60);
        assert_eq!(clamp_width(150.4), 150);
        assert_eq!(clamp_width(f64::NAN), 60);
    }

    #[test]
    fn test_style_key_values() {
        assert!(StyleKey::FontSize.value_from_str("abc").is_err());
        assert_eq!(StyleKey::FontSize.value_from_str("14").unwrap(), serde_json::json!(14.0));
        assert_eq!("radius".parse::<StyleKey>().unwrap(), StyleKey::BorderRadius);
    }

    #[test]
    fn test_add_item_places_after_existing_and_uses_project_name() {
        let clock = ManualClock::new();
        let mut writer = RecordingWriter::default();
        let project = Uuid::new_v4();
        let existing = item(NavbarKind::Link, 100, "{}");
        let mut editor = NavbarEditor::new(project, "Handbook", vec![existing], clock);

        let id = editor.add_item(&mut writer, NavbarKind::Title).unwrap();
        let added = editor.items().iter().find(|i| i.id == id).unwrap();
        assert_eq!(added.label, "Handbook");
        assert_eq!(ItemStyles::parse(&added.styles).x(), Some(116.0));
        assert_eq!(writer.navbar_updates.len(), 1);
    }

    #[test]
    fn test_drag_makes_position_explicit() {
        let clock = ManualClock::new();
        let mut writer = RecordingWriter::default();
        let items = vec![item(NavbarKind::Title, 120, "{}"), item(NavbarKind::Link, 80, "{}")];
        let dragged = items[1].id;
        let mut editor = NavbarEditor::new(Uuid::nil(), "P", items, clock);

        editor.drag_end(&mut writer, dragged, 40.0);
        assert_eq!(editor.positions(), vec![8.0, 176.0]);
        assert_eq!(writer.navbar_updates.len(), 1);
    }

    #[test]
    fn test_resize_writes_after_quiet_period() {
        let clock = ManualClock::new();
        let mut writer = RecordingWriter::default();
        let items = vec![item(NavbarKind::Button, 120, "{}")];
        let id = items[0].id;
        let mut editor = NavbarEditor::new(Uuid::nil(), "P", items, clock.clone());

        editor.resize(id, 40.0);
        assert_eq!(editor.items()[0].width, 60);
        clock.advance_ms(100);
        editor.resize(id, 180.6);
        clock.advance_ms(200);
        editor.tick(&mut writer);
        assert!(writer.navbar_updates.is_empty());

        clock.advance_ms(20);
        editor.tick(&mut writer);
        assert_eq!(writer.navbar_updates.len(), 1);
        assert_eq!(writer.navbar_updates[0].1.width, Some(181));
        assert!(!editor.has_pending_writes());
    }

    #[test]
    fn test_write_failure_keeps_local_state_and_reports() {
        let clock = ManualClock::new();
        let mut writer = RecordingWriter::failing();
        let items = vec![item(NavbarKind::Link, 120, "{}")];
        let id = items[0].id;
        let mut editor = NavbarEditor::new(Uuid::nil(), "P", items, clock);

        editor.set_label(&mut writer, id, "Docs");
        assert_eq!(editor.items()[0].label, "Docs");
        let notices = editor.drain_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].content, "Failed to save");
    }

    #[test]
    fn test_delete_clears_selection() {
        let clock = ManualClock::new();
        let mut writer = RecordingWriter::default();
        let items = vec![item(NavbarKind::Badge, 120, "{}")];
        let id = items[0].id;
        let mut editor = NavbarEditor::new(Uuid::nil(), "P", items, clock);
        editor.select(Some(id));
        assert!(editor.delete(&mut writer, id));
        assert!(editor.selected().is_none());
        assert!(editor.items().is_empty());
    }
}
