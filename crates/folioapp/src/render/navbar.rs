//! Navbar widgets for the export document.
//!
//! Each item is wrapped in an absolutely positioned box at the x resolved by
//! [`crate::navbar::resolve_positions`]. Colors reference the theme custom
//! properties (`--accent`, `--border`, …) declared by the document, so the
//! theme toggle restyles the navbar without re-rendering it.

use super::{escape_html, Style};
use crate::model::{NavbarItem, NavbarKind};
use crate::navbar::{effective_width, resolve_positions, ItemStyles};

pub const GITHUB_ICON_PATH: &str = "M12 2C6.477 2 2 6.484 2 12.017c0 4.425 2.865 8.18 6.839 9.504.5.092.682-.217.682-.483 0-.237-.008-.868-.013-1.703-2.782.605-3.369-1.343-3.369-1.343-.454-1.158-1.11-1.466-1.11-1.466-.908-.62.069-.608.069-.608 1.003.07 1.531 1.032 1.531 1.032.892 1.53 2.341 1.088 2.91.832.092-.647.35-1.088.636-1.338-2.22-.253-4.555-1.113-4.555-4.951 0-1.093.39-1.988 1.029-2.688-.103-.253-.446-1.272.098-2.65 0 0 .84-.27 2.75 1.026A9.564 9.564 0 0112 6.844c.85.004 1.705.115 2.504.337 1.909-1.296 2.747-1.027 2.747-1.027.546 1.379.202 2.398.1 2.651.64.7 1.028 1.595 1.028 2.688 0 3.848-2.339 4.695-4.566 4.943.359.309.678.92.678 1.855 0 1.338-.012 2.419-.012 2.747 0 .268.18.58.688.482A10.019 10.019 0 0022 12.017C22 6.484 17.522 2 12 2z";

const SEARCH_ICON: &str = "<svg width=\"11\" height=\"11\" viewBox=\"0 0 24 24\" fill=\"none\" stroke=\"currentColor\" stroke-width=\"2.5\"><circle cx=\"11\" cy=\"11\" r=\"8\"/><path d=\"m21 21-4.35-4.35\"/></svg>";

/// Pixel length without a trailing `.0` for whole values.
pub(crate) fn px(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}px", value as i64)
    } else {
        format!("{:.2}px", value)
    }
}

fn or_default<'a>(label: &'a str, fallback: &'a str) -> &'a str {
    if label.is_empty() {
        fallback
    } else {
        label
    }
}

fn href_or_hash(href: &str) -> &str {
    or_default(href, "#")
}

/// External links open in a new tab; the `#` placeholder does not.
fn target_attrs(href: &str) -> &'static str {
    if href.is_empty() {
        ""
    } else {
        " target=\"_blank\" rel=\"noopener noreferrer\""
    }
}

fn base_style(item: &NavbarItem) -> Style {
    let width = px(effective_width(item));
    match item.kind {
        NavbarKind::Title => Style::new()
            .set("font-weight", "700")
            .set("font-size", "1.1rem")
            .set("min-width", width.clone())
            .set("max-width", width),
        NavbarKind::Search => Style::new()
            .set("display", "flex")
            .set("align-items", "center")
            .set("gap", "4px")
            .set("padding", "4px 10px")
            .set("border-radius", "6px")
            .set("border", "1px solid var(--border)")
            .set("background-color", "var(--bg)")
            .set("font-size", "0.85rem")
            .set("min-width", width.clone())
            .set("max-width", width),
        NavbarKind::Link => Style::new()
            .set("text-decoration", "none")
            .set("color", "var(--accent)")
            .set("font-size", "0.9rem")
            .set("min-width", width.clone())
            .set("max-width", width),
        NavbarKind::Button => Style::new()
            .set("display", "inline-flex")
            .set("align-items", "center")
            .set("justify-content", "center")
            .set("padding", "4px 12px")
            .set("border-radius", "4px")
            .set("font-size", "0.75rem")
            .set("font-weight", "500")
            .set("text-decoration", "none")
            .set("color", "#fff")
            .set("background-color", "var(--accent)")
            .set("min-width", width.clone())
            .set("max-width", width),
        NavbarKind::Badge => Style::new()
            .set("display", "inline-flex")
            .set("align-items", "center")
            .set("padding", "2px 8px")
            .set("border-radius", "9999px")
            .set("font-size", "0.75rem")
            .set("border", "1px solid var(--border)")
            .set("background-color", "var(--bg-alt)"),
        NavbarKind::DividerV => Style::new()
            .set("display", "block")
            .set("width", "1px")
            .set("height", "20px")
            .set("margin", "0 auto")
            .set("background-color", "var(--border)"),
        NavbarKind::Github => Style::new()
            .set("display", "flex")
            .set("align-items", "center")
            .set("gap", "4px")
            .set("font-size", "0.75rem")
            .set("text-decoration", "none")
            .set("color", "var(--text)"),
        NavbarKind::ThemeToggle => Style::new()
            .set("background", "none")
            .set("border", "none")
            .set("cursor", "pointer")
            .set("font-size", "1rem")
            .set("line-height", "1"),
    }
}

/// Base style with the item's overrides layered on top.
pub fn item_style(item: &NavbarItem) -> Style {
    let overrides = ItemStyles::parse(&item.styles);
    base_style(item)
        .set_opt("background-color", overrides.bg_color())
        .set_opt("color", overrides.text_color())
        .set_opt("font-size", overrides.font_size().map(px))
        .set_opt("padding", overrides.padding())
        .set_opt("border-radius", overrides.border_radius().map(px))
}

/// Markup of one widget, without its positioning wrapper.
pub fn render_item(item: &NavbarItem, project_name: &str) -> String {
    let style = item_style(item).attr();
    let label = |fallback: &str| escape_html(or_default(&item.label, fallback));
    match item.kind {
        NavbarKind::Title => format!("<span{}>{}</span>", style, escape_html(or_default(&item.label, project_name))),
        NavbarKind::Search => format!(
            "<div{}>{}<input type=\"text\" placeholder=\"Search...\" data-role=\"search\" style=\"outline:none;border:none;background:transparent;color:var(--text);font-size:inherit;flex:1;min-width:0\" /></div>",
            style, SEARCH_ICON
        ),
        NavbarKind::Link => format!(
            "<a href=\"{}\"{}{}>{}</a>",
            escape_html(href_or_hash(&item.href)),
            target_attrs(&item.href),
            style,
            label("Link")
        ),
        NavbarKind::Button => format!(
            "<a href=\"{}\"{}{}>{}</a>",
            escape_html(href_or_hash(&item.href)),
            target_attrs(&item.href),
            style,
            label("Button")
        ),
        NavbarKind::Badge => format!("<span{}>{}</span>", style, label("Badge")),
        NavbarKind::DividerV => format!("<div{}></div>", style),
        NavbarKind::Github => format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" title=\"GitHub\"{}><svg width=\"14\" height=\"14\" viewBox=\"0 0 24 24\" fill=\"currentColor\"><path d=\"{}\"/></svg></a>",
            escape_html(href_or_hash(&item.href)),
            style,
            GITHUB_ICON_PATH
        ),
        NavbarKind::ThemeToggle => format!(
            "<button type=\"button\" data-action=\"toggle-theme\" title=\"Toggle theme\"{}>🌙</button>",
            style
        ),
    }
}

/// Every item in order, each absolutely positioned at its resolved x.
pub fn render_navbar(items: &[NavbarItem], project_name: &str) -> String {
    let mut out = String::new();
    for (item, x) in items.iter().zip(resolve_positions(items)) {
        let wrapper = Style::new()
            .set("position", "absolute")
            .set("left", px(x))
            .set("top", "50%")
            .set("transform", "translateY(-50%)")
            .set("width", px(effective_width(item)))
            .set("overflow", "hidden")
            .set("white-space", "nowrap");
        out.push_str(&format!(
            "<div class=\"nav-item\" data-item-id=\"{}\" data-type=\"{}\"{}>{}</div>",
            item.id,
            item.kind,
            wrapper.attr(),
            render_item(item, project_name)
        ));
    }
    out
}
