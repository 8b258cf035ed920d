//! # Static HTML Rendering
//!
//! Everything here is a pure function of its arguments: no I/O, no clock, no
//! mutation of inputs. Rendering the same project twice yields byte-identical
//! output, which is what makes `export` safe to rerun at any time.
//!
//! ## Layout
//!
//! - [`blocks`]: one block variant → inline-styled HTML, read-only or editable
//! - [`markdown`]: legacy markdown sections via `pulldown-cmark`
//! - [`navbar`]: navbar widgets positioned by [`crate::navbar::resolve_positions`]
//! - [`document`]: the standalone export document that stitches them together
//!
//! ## Escaping
//!
//! Plain-text fields (titles, labels, captions, table cells, code, authors,
//! URLs) always pass through [`escape_html`]. Rich-markup bodies of text,
//! heading, callout and quote blocks are markup fragments produced by the
//! editing surface and are emitted as-is.
//!
//! ## Styles
//!
//! Inline styles are assembled with [`Style`], which keeps declarations in
//! insertion order and lets a later `set` of the same property replace the
//! earlier value. Navbar overrides are layered on base styles this way.

use std::fmt;

pub mod blocks;
pub mod document;
pub mod markdown;
pub mod navbar;

pub use blocks::{render_block, render_block_data, render_sequence, BlockView, RenderMode};
pub use document::{export_filename, render_document, render_document_with, ExportAssets, Theme};
pub use markdown::render_markdown;
pub use navbar::render_navbar;

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Ordered list of CSS declarations rendered as a `style` attribute value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    declarations: Vec<(&'static str, String)>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, property: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.declarations.iter_mut().find(|(p, _)| *p == property) {
            Some(slot) => slot.1 = value,
            None => self.declarations.push((property, value)),
        }
        self
    }

    /// `set` only when `value` is present and non-empty.
    pub fn set_opt(self, property: &'static str, value: Option<impl Into<String>>) -> Self {
        match value.map(Into::into) {
            Some(value) if !value.is_empty() => self.set(property, value),
            _ => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Escaped `style="…"` attribute, empty when there are no declarations.
    pub fn attr(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            format!(" style=\"{}\"", escape_html(&self.to_string()))
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (property, value)) in self.declarations.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{}:{}", property, value)?;
        }
        Ok(())
    }
}
