//! # Header Outline
//!
//! Headers form a two-level tree stored flat with a `parent_id`. Everything
//! the sidebar and the export need is derived from the flat list, taken in
//! `order` (ties broken by `created_at`) whatever order the slice is in:
//!
//! ```text
//! stored order            display order        numbering
//! A  (top)                A                    1
//! B  (top)                C  (child of A)      1.1
//! C  (parent A)           B                    2
//! ```
//!
//! A header whose parent is missing from the list is neither numbered nor
//! displayed.

use std::collections::{HashMap, HashSet};
use uuid::Uuid;

use crate::model::Header;

/// Glyphs offered by the header icon picker. Any text is accepted as an icon.
pub const HEADER_ICONS: [&str; 21] = [
    "📄", "📝", "📚", "📖", "🔧", "⚙️", "🚀", "💡", "🎯", "🔍", "✅", "⚠️", "❌", "🔥", "💎", "🌟", "🎉", "🛡️",
    "📊", "📈", "🗂️",
];

fn by_order(headers: &[Header]) -> Vec<&Header> {
    let mut sorted: Vec<&Header> = headers.iter().collect();
    sorted.sort_by_key(|h| (h.order, h.created_at));
    sorted
}

fn children_of<'a, 's>(sorted: &'s [&'a Header], parent: Uuid) -> impl Iterator<Item = &'a Header> + 's {
    sorted.iter().copied().filter(move |h| h.parent_id == Some(parent))
}

/// Outline numbers: "1", "2" for top-level headers, "1.1" for children.
pub fn compute_numbering(headers: &[Header]) -> HashMap<Uuid, String> {
    let sorted = by_order(headers);
    let mut numbering = HashMap::new();
    for (i, top) in sorted.iter().filter(|h| h.is_top_level()).enumerate() {
        let number = (i + 1).to_string();
        for (j, child) in children_of(&sorted, top.id).enumerate() {
            numbering.insert(child.id, format!("{}.{}", number, j + 1));
        }
        numbering.insert(top.id, number);
    }
    numbering
}

/// Each top-level header followed by its children.
pub fn display_order(headers: &[Header]) -> Vec<&Header> {
    let sorted = by_order(headers);
    let mut ordered = Vec::with_capacity(headers.len());
    for top in sorted.iter().copied().filter(|h| h.is_top_level()) {
        ordered.push(top);
        ordered.extend(children_of(&sorted, top.id));
    }
    ordered
}

/// Headers whose title contains `query` (case-insensitive), plus their parents.
/// A blank query keeps everything.
pub fn filter_by_title<'a>(headers: &'a [Header], query: &str) -> Vec<&'a Header> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return headers.iter().collect();
    }
    let mut keep = HashSet::new();
    for header in headers {
        if header.title.to_lowercase().contains(&query) {
            keep.insert(header.id);
            if let Some(parent) = header.parent_id {
                keep.insert(parent);
            }
        }
    }
    headers.iter().filter(|h| keep.contains(&h.id)).collect()
}

/// New id order after dropping `active` onto `over` in the display order.
///
/// Returns `None` for a no-op drop, an unknown id, or a drag across levels
/// (the two headers have different parents).
pub fn reorder_within_parent(display: &[&Header], active: Uuid, over: Uuid) -> Option<Vec<Uuid>> {
    if active == over {
        return None;
    }
    let from = display.iter().position(|h| h.id == active)?;
    let to = display.iter().position(|h| h.id == over)?;
    if display[from].parent_id != display[to].parent_id {
        return None;
    }
    let mut ids: Vec<Uuid> = display.iter().map(|h| h.id).collect();
    let moved = ids.remove(from);
    ids.insert(to, moved);
    Some(ids)
}
