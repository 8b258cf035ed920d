//! Styles for the folio CLI.
//!
//! Renderers never pick colors themselves. They ask for a semantic style by name
//! (`names::NUMBER`, `names::TIME`, ...) and `THEME` maps that name to a
//! `console::Style`. Changing how the CLI looks means editing `build_theme` only.
//!
//! `console` drops the escape codes when stdout is not a terminal, so piped
//! output and the integration tests see plain text.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Style identifiers shared by the renderers.
pub mod names {
    pub const REGULAR: &str = "regular";
    pub const MUTED: &str = "muted";
    pub const FAINT: &str = "faint";
    pub const TITLE: &str = "title";
    pub const TIME: &str = "time";
    pub const NUMBER: &str = "number";
    pub const KIND: &str = "kind";
    pub const ERROR: &str = "error";
    pub const WARNING: &str = "warning";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
}

pub static THEME: Lazy<HashMap<&'static str, Style>> = Lazy::new(build_theme);

fn build_theme() -> HashMap<&'static str, Style> {
    let regular = Style::new();
    let muted = Style::new().color256(245);
    let faint = Style::new().color256(240);
    let accent = Style::new().color256(137);

    HashMap::from([
        (names::REGULAR, regular.clone()),
        (names::MUTED, muted.clone()),
        (names::FAINT, faint),
        (names::TITLE, regular.bold()),
        (names::TIME, muted.clone().italic()),
        (names::NUMBER, accent.clone().bold()),
        (names::KIND, accent),
        (names::ERROR, Style::new().red().bold()),
        (names::WARNING, Style::new().yellow().bold()),
        (names::SUCCESS, Style::new().green()),
        (names::INFO, muted),
    ])
}

/// Apply the named style. Unknown names render unstyled.
pub fn paint(name: &str, text: &str) -> String {
    match THEME.get(name) {
        Some(style) => style.apply_to(text).to_string(),
        None => text.to_string(),
    }
}
