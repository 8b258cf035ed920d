//! # Rendering Module
//!
//! Turns library data into terminal text. Layout math (numbering, column
//! widths, truncation) is done here with `unicode-width`, colors come from
//! [`super::styles`] by semantic name.

use super::styles::{names, paint};
use chrono::{DateTime, Utc};
use folioapp::api::{CmdMessage, MessageLevel};
use folioapp::blocks::{Block, BlockData, BLOCK_PALETTE};
use folioapp::model::{Header, NavbarItem, Project};
use folioapp::navbar::ItemStyles;
use folioapp::outline::{compute_numbering, display_order};
use folioapp::prefs::{ColorKey, UserPreferences};
use std::collections::HashSet;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use uuid::Uuid;

pub const LINE_WIDTH: usize = 100;
pub const TIME_WIDTH: usize = 14;
pub const SUMMARY_WIDTH: usize = 60;

pub fn render_projects(projects: &[Project]) -> String {
    if projects.is_empty() {
        return "No projects yet.\n".to_string();
    }
    let name_width = projects.iter().map(|p| p.name.width()).max().unwrap_or(0);
    let mut out = String::new();
    for project in projects {
        let padding = " ".repeat(name_width - project.name.width());
        let mut line = format!("  {}{}", paint(names::TITLE, &project.name), padding);
        if !project.description.is_empty() {
            let room = LINE_WIDTH.saturating_sub(name_width + TIME_WIDTH + 6);
            line.push_str("  ");
            line.push_str(&paint(names::MUTED, &truncate_to_width(&project.description, room)));
        }
        line.push_str("  ");
        line.push_str(&paint(names::TIME, &format_time_ago(project.updated_at)));
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Numbered outline. With `visible`, only those headers are shown.
pub fn render_outline(headers: &[Header], visible: Option<&[&Header]>) -> String {
    if headers.is_empty() {
        return "No headers yet.\n".to_string();
    }
    let numbering = compute_numbering(headers);
    let shown: Option<HashSet<Uuid>> = visible.map(|v| v.iter().map(|h| h.id).collect());

    let mut out = String::new();
    for header in display_order(headers) {
        if let Some(shown) = &shown {
            if !shown.contains(&header.id) {
                continue;
            }
        }
        let number = numbering.get(&header.id).map(String::as_str).unwrap_or("?");
        let indent = if header.is_top_level() { "  " } else { "      " };
        let icon = if header.icon.is_empty() {
            String::new()
        } else {
            format!("{} ", header.icon)
        };
        out.push_str(&format!(
            "{}{} {}{}\n",
            indent,
            paint(names::NUMBER, &format!("{}.", number)),
            icon,
            paint(names::REGULAR, &header.title)
        ));
    }
    if out.is_empty() {
        return "No matching headers.\n".to_string();
    }
    out
}

pub fn render_blocks(blocks: &[Block]) -> String {
    if blocks.is_empty() {
        return "No blocks yet.\n".to_string();
    }
    let mut out = String::new();
    for (i, block) in blocks.iter().enumerate() {
        let kind = format!("{:<8}", block.kind().as_str());
        let mut line = format!(
            "  {} {} {}",
            paint(names::NUMBER, &format!("{:>2}.", i + 1)),
            paint(names::KIND, &kind),
            truncate_to_width(&block_summary(&block.data), SUMMARY_WIDTH)
        );
        if let Some(width) = block.width {
            line.push_str(&format!("  {}", paint(names::MUTED, &format!("[{}]", width.as_str()))));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// One-line description of a block's content.
pub fn block_summary(data: &BlockData) -> String {
    if let Some(markup) = data.markup() {
        return strip_tags(markup);
    }
    match data {
        BlockData::Code(code) => {
            let first = code.code.lines().next().unwrap_or("");
            format!("({}) {}", code.language, first)
        }
        BlockData::Image(image) => {
            if image.caption.is_empty() {
                image.url.clone()
            } else {
                format!("{} ({})", image.url, image.caption)
            }
        }
        BlockData::Table(table) => {
            let cols = table.rows.first().map(Vec::len).unwrap_or(0);
            format!("{}x{} table", table.rows.len(), cols)
        }
        BlockData::Divider(divider) => format!("{} divider", divider.border_style.as_str()),
        BlockData::Button(button) => format!("[{}] -> {}", button.label, button.href),
        BlockData::Badge(badge) => badge.label.clone(),
        BlockData::Unknown(_) => "(unsupported, kept as stored)".to_string(),
        _ => String::new(),
    }
}

pub fn render_palette() -> String {
    BLOCK_PALETTE
        .iter()
        .map(|entry| {
            format!(
                "  {:<4}{} {}\n",
                entry.icon,
                paint(names::KIND, &format!("{:<8}", entry.kind.as_str())),
                paint(names::MUTED, entry.description)
            )
        })
        .collect()
}

/// Navbar items in order, with where each one lands on the bar.
pub fn render_navbar(items: &[NavbarItem], positions: &[f64]) -> String {
    if items.is_empty() {
        return "The navbar is empty.\n".to_string();
    }
    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        let x = positions.get(i).copied().unwrap_or(0.0);
        let mut line = format!(
            "  {} {} {}",
            paint(names::NUMBER, &format!("{:>2}.", i + 1)),
            paint(names::KIND, &format!("{:<12}", item.kind.as_str())),
            item.label
        );
        if !item.href.is_empty() {
            line.push_str(&format!(" {}", paint(names::MUTED, &format!("<{}>", item.href))));
        }
        let styles = ItemStyles::parse(&item.styles);
        let mut geometry = format!("x={} w={}", x, item.width);
        if let Some(bg) = styles.bg_color() {
            geometry.push_str(&format!(" bg={}", bg));
        }
        line.push_str(&format!("  {}", paint(names::FAINT, &geometry)));
        out.push_str(&line);
        out.push('\n');
    }
    out
}

pub fn render_prefs(prefs: &UserPreferences) -> String {
    let mut out = format!("  {:<18}{}\n", "Docs theme", prefs.docs_theme);
    for key in ColorKey::ALL {
        out.push_str(&format!("  {:<18}{}\n", key.label(), prefs.colors.get(key)));
    }
    out
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|msg| {
            let style = match msg.level {
                MessageLevel::Info => names::INFO,
                MessageLevel::Success => names::SUCCESS,
                MessageLevel::Warning => names::WARNING,
                MessageLevel::Error => names::ERROR,
            };
            format!("{}\n", paint(style, &msg.content))
        })
        .collect()
}

pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

/// Cut `text` to at most `width` columns, ending with an ellipsis when cut.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

fn strip_tags(markup: &str) -> String {
    let mut out = String::new();
    let mut in_tag = false;
    for c in markup.chars() {
        match c {
            '<' => {
                in_tag = true;
                out.push(' ');
            }
            '>' => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    let text = out
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&amp;", "&");
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
