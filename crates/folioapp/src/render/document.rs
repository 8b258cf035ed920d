//! The standalone export document.
//!
//! ```text
//! <nav>      navbar canvas, items at their resolved x
//! <aside>    "Contents": numbered outline, children indented
//! <main>     one <section id="header-<id>"> per header, display order
//! <script>   theme toggle (persisted under "docs-theme"), sidebar
//!            search filter, highlight.js
//! ```
//!
//! The only external references are the highlight.js stylesheet and script;
//! the page is fully readable without them.

use std::fmt::Write as _;

use super::blocks::{render_sequence, RenderMode};
use super::markdown::render_markdown;
use super::navbar::{px, render_navbar};
use super::escape_html;
use crate::blocks::parse_sequence;
use crate::model::{ContentKind, Header, NavbarItem, NavbarKind};
use crate::navbar::content_width;
use crate::outline::{compute_numbering, display_order};

pub const DEFAULT_HIGHLIGHT_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/styles/github.min.css";
pub const DEFAULT_HIGHLIGHT_JS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/highlight.min.js";

/// Palette of the docs page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub bg: &'static str,
    pub bg_alt: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub text: &'static str,
}

impl Theme {
    pub const LIGHT: Theme = Theme {
        bg: "#F9F8F6",
        bg_alt: "#EFE9E3",
        border: "#D9CFC7",
        accent: "#C9B59C",
        text: "#1a1a1a",
    };

    pub const DARK: Theme = Theme {
        bg: "#18171a",
        bg_alt: "#242228",
        border: "#3a3440",
        accent: "#C9B59C",
        text: "#e8e0f0",
    };

    /// CSS custom property declarations for this palette.
    pub fn css_vars(&self) -> String {
        format!(
            "--bg:{};--bg-alt:{};--border:{};--accent:{};--text:{}",
            self.bg, self.bg_alt, self.border, self.accent, self.text
        )
    }
}

/// Where the syntax-highlighting resources are loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportAssets {
    pub highlight_css_url: String,
    pub highlight_js_url: String,
}

impl Default for ExportAssets {
    fn default() -> Self {
        Self {
            highlight_css_url: DEFAULT_HIGHLIGHT_CSS.to_string(),
            highlight_js_url: DEFAULT_HIGHLIGHT_JS.to_string(),
        }
    }
}

/// `"My Project"` → `"my-project.html"`.
pub fn export_filename(project_name: &str) -> String {
    let slug = project_name
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() {
        "export.html".to_string()
    } else {
        format!("{}.html", slug)
    }
}

pub fn render_document(project_name: &str, headers: &[Header], navbar_items: &[NavbarItem]) -> String {
    render_document_with(project_name, headers, navbar_items, &ExportAssets::default())
}

pub fn render_document_with(
    project_name: &str,
    headers: &[Header],
    navbar_items: &[NavbarItem],
    assets: &ExportAssets,
) -> String {
    let numbering = compute_numbering(headers);
    let ordered = display_order(headers);
    let number_of = |header: &Header| numbering.get(&header.id).cloned().unwrap_or_default();

    let mut sidebar = String::new();
    for header in &ordered {
        let indent = if header.is_top_level() { "12px" } else { "28px" };
        let _ = write!(
            sidebar,
            "<li data-header-id=\"{id}\" data-parent-id=\"{parent}\" data-title=\"{search}\"><a href=\"#header-{id}\" style=\"display:flex;gap:6px;padding:8px 12px 8px {indent};text-decoration:none;color:var(--text);border-radius:6px;font-size:0.875rem\"><span style=\"color:var(--accent);font-family:monospace;font-size:0.75rem\">{number}</span>{icon}<span>{title}</span></a></li>",
            id = header.id,
            parent = header.parent_id.map(|p| p.to_string()).unwrap_or_default(),
            search = escape_html(&header.title.to_lowercase()),
            indent = indent,
            number = number_of(header),
            icon = icon_span(header),
            title = escape_html(&header.title),
        );
    }

    let mut sections = String::new();
    for header in &ordered {
        let _ = write!(
            sections,
            "<section id=\"header-{id}\" style=\"margin-bottom:3rem\"><h2 style=\"font-size:1.5rem;font-weight:700;margin-bottom:1rem;padding-bottom:0.5rem;border-bottom:2px solid var(--border)\">{icon}{title}</h2>{content}</section>",
            id = header.id,
            icon = icon_span(header),
            title = escape_html(&header.title),
            content = render_content(header),
        );
    }

    let mut navbar = render_navbar(navbar_items, project_name);
    if !navbar_items.iter().any(|item| item.kind == NavbarKind::ThemeToggle) {
        navbar.push_str("<button type=\"button\" data-action=\"toggle-theme\" title=\"Toggle theme\" style=\"position:absolute;right:16px;top:50%;transform:translateY(-50%);background:none;border:none;cursor:pointer;font-size:1rem\">🌙</button>");
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en" data-theme="light">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{title}</title>
  <link rel="stylesheet" href="{css_url}" />
  <script src="{js_url}"></script>
  <style>
{css}
  </style>
</head>
<body>
  <nav><div class="nav-canvas" style="min-width:{canvas_width}">{navbar}</div></nav>
  <div class="layout">
    <aside>
      <h3>Contents</h3>
      <ul>{sidebar}</ul>
    </aside>
    <main>{sections}</main>
  </div>
  <script>{script}</script>
</body>
</html>
"#,
        title = escape_html(project_name),
        css_url = escape_html(&assets.highlight_css_url),
        js_url = escape_html(&assets.highlight_js_url),
        css = stylesheet(),
        canvas_width = px(content_width(navbar_items)),
        navbar = navbar,
        sidebar = sidebar,
        sections = sections,
        script = SCRIPT,
    )
}

fn icon_span(header: &Header) -> String {
    if header.icon.is_empty() {
        String::new()
    } else {
        format!("<span class=\"header-icon\">{} </span>", escape_html(&header.icon))
    }
}

fn render_content(header: &Header) -> String {
    match header.content_kind() {
        ContentKind::Blocks => render_sequence(&parse_sequence(Some(&header.content)), RenderMode::ReadOnly),
        ContentKind::Markdown => format!("<div class=\"prose\">{}</div>", render_markdown(&header.content)),
    }
}

fn stylesheet() -> String {
    format!(
        r#"    :root {{ {light} }}
    html[data-theme="dark"] {{ {dark} }}
    * {{ box-sizing: border-box; margin: 0; padding: 0; }}
    body {{ font-family: Arial, Helvetica, sans-serif; background: var(--bg); color: var(--text); min-height: 100vh; display: flex; flex-direction: column; }}
    nav {{ height: 60px; background: var(--bg-alt); border-bottom: 1px solid var(--border); position: sticky; top: 0; z-index: 10; overflow-x: auto; }}
    .nav-canvas {{ position: relative; height: 100%; }}
    .layout {{ display: flex; flex: 1; }}
    aside {{ width: 240px; min-width: 240px; background: var(--bg-alt); border-right: 1px solid var(--border); padding: 16px 8px; position: sticky; top: 60px; height: calc(100vh - 60px); overflow-y: auto; }}
    aside h3 {{ font-size: 0.75rem; font-weight: 700; text-transform: uppercase; letter-spacing: 0.08em; color: #888; padding: 0 12px; margin-bottom: 8px; }}
    aside ul {{ list-style: none; }}
    aside a:hover {{ background: var(--border); }}
    main {{ flex: 1; padding: 40px 48px; max-width: 900px; }}
    .prose h1, .prose h2, .prose h3, .prose h4 {{ font-weight: 700; margin: 1.5rem 0 0.75rem; }}
    .prose h1 {{ font-size: 2rem; }}
    .prose h2 {{ font-size: 1.5rem; }}
    .prose h3 {{ font-size: 1.25rem; }}
    .prose p {{ line-height: 1.75; margin-bottom: 1rem; }}
    .prose ul, .prose ol {{ padding-left: 1.5rem; margin-bottom: 1rem; }}
    .prose li {{ margin-bottom: 0.25rem; line-height: 1.6; }}
    .prose pre {{ background: #f4f4f4; border-radius: 6px; padding: 1rem; overflow-x: auto; margin-bottom: 1rem; }}
    .prose code:not(pre code) {{ background: var(--bg-alt); border: 1px solid var(--border); border-radius: 4px; padding: 2px 6px; font-size: 0.85em; font-family: monospace; }}
    .prose blockquote {{ border-left: 4px solid var(--accent); padding-left: 1rem; color: #666; margin-bottom: 1rem; }}
    .prose table {{ width: 100%; border-collapse: collapse; margin-bottom: 1rem; }}
    .prose th, .prose td {{ padding: 8px 12px; border: 1px solid var(--border); text-align: left; }}
    .prose th {{ background: var(--bg-alt); font-weight: 600; }}
    .prose a {{ color: var(--accent); }}"#,
        light = Theme::LIGHT.css_vars(),
        dark = Theme::DARK.css_vars(),
    )
}

const SCRIPT: &str = r#"(function () {
  var root = document.documentElement;
  var dark = false;
  try { dark = localStorage.getItem("docs-theme") === "dark"; } catch (e) {}
  function apply() {
    root.setAttribute("data-theme", dark ? "dark" : "light");
    document.querySelectorAll('[data-action="toggle-theme"]').forEach(function (b) {
      b.textContent = dark ? "☀️" : "🌙";
    });
  }
  apply();
  document.addEventListener("click", function (e) {
    if (!e.target.closest || !e.target.closest('[data-action="toggle-theme"]')) return;
    dark = !dark;
    apply();
    try { localStorage.setItem("docs-theme", dark ? "dark" : "light"); } catch (e) {}
  });
  document.querySelectorAll('[data-role="search"]').forEach(function (input) {
    input.addEventListener("input", function () {
      var q = input.value.trim().toLowerCase();
      var rows = document.querySelectorAll("aside li[data-header-id]");
      var keep = {};
      rows.forEach(function (li) {
        if (!q || li.getAttribute("data-title").indexOf(q) !== -1) {
          keep[li.getAttribute("data-header-id")] = true;
          var parent = li.getAttribute("data-parent-id");
          if (parent) keep[parent] = true;
        }
      });
      rows.forEach(function (li) {
        li.style.display = keep[li.getAttribute("data-header-id")] ? "" : "none";
      });
    });
  });
  if (window.hljs) { hljs.highlightAll(); }
})();"#;
