//! Per-variant block rendering.
//!
//! The style constants (size maps, color pairs, paddings) are the ones the
//! authoring surface shows, so an exported page looks like the editor. In
//! [`RenderMode::Editable`] prose bodies become `contenteditable` regions
//! tagged with `data-field`, and controls carry a `data-action` attribute the
//! host maps back onto the matching editor method.

use super::{escape_html, Style};
use crate::blocks::editors::code::{CodeView, CODE_LANGUAGES};
use crate::blocks::{
    Align, BadgeBlock, Block, BlockData, ButtonBlock, ButtonVariant, CalloutBlock, CodeBlock,
    CodeTheme, DividerBlock, FontWeight, HeadingBlock, ImageBlock, QuoteBlock, TableBlock,
    TextBlock, DEFAULT_BUTTON_COLOR, DEFAULT_DIVIDER_COLOR,
};

const EMPTY_TEXT_PLACEHOLDER: &str = "<span style='color:#aaa'>Empty text block</span>";
const NBSP: &str = "&nbsp;";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    #[default]
    ReadOnly,
    Editable,
}

/// Per-render state that is not part of the stored block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlockView {
    pub mode: RenderMode,
    /// The image at the block's URL failed to load.
    pub image_broken: bool,
    pub code_view: CodeView,
}

impl BlockView {
    pub fn read_only() -> Self {
        Self::default()
    }

    pub fn editable() -> Self {
        Self {
            mode: RenderMode::Editable,
            ..Self::default()
        }
    }

    fn editable_mode(&self) -> bool {
        self.mode == RenderMode::Editable
    }
}

/// Lay out a whole sequence as a wrapping row of blocks.
pub fn render_sequence(blocks: &[Block], mode: RenderMode) -> String {
    let view = BlockView {
        mode,
        ..BlockView::default()
    };
    let mut out = String::from(
        "<div class=\"blocks\" style=\"display:flex;flex-wrap:wrap;gap:8px;align-items:flex-start\">",
    );
    for block in blocks {
        out.push_str(&render_block(block, &view));
    }
    out.push_str("</div>");
    out
}

/// One block inside its width wrapper.
pub fn render_block(block: &Block, view: &BlockView) -> String {
    if matches!(block.data, BlockData::Unknown(_)) && !view.editable_mode() {
        return String::new();
    }
    let style = Style::new()
        .set("width", block.layout_width().css())
        .set("padding", "4px 0");
    format!(
        "<div data-block-id=\"{}\"{}>{}</div>",
        escape_html(&block.id),
        style.attr(),
        render_block_data(&block.data, view)
    )
}

pub fn render_block_data(data: &BlockData, view: &BlockView) -> String {
    match data {
        BlockData::Text(b) => render_text(b, view),
        BlockData::Heading(b) => render_heading(b, view),
        BlockData::Code(b) => render_code(b, view),
        BlockData::Callout(b) => render_callout(b, view),
        BlockData::Image(b) => render_image(b, view),
        BlockData::Table(b) => render_table(b, view),
        BlockData::Divider(b) => render_divider(b),
        BlockData::Button(b) => render_button(b, view),
        BlockData::Badge(b) => render_badge(b, view),
        BlockData::Quote(b) => render_quote(b, view),
        BlockData::Unknown(_) => render_unknown(view),
    }
}

fn render_unknown(view: &BlockView) -> String {
    if !view.editable_mode() {
        return String::new();
    }
    "<div style=\"padding:8px;border:1px dashed #ccc;color:#888;font-size:12px\">Unsupported block</div>"
        .to_string()
}

fn editable_attrs(field: &str, placeholder: &str) -> String {
    format!(
        " contenteditable=\"true\" data-field=\"{}\" data-placeholder=\"{}\"",
        field,
        escape_html(placeholder)
    )
}

fn flex_align(align: Align) -> &'static str {
    match align {
        Align::Left => "flex-start",
        Align::Center => "center",
        Align::Right => "flex-end",
    }
}

fn render_text(b: &TextBlock, view: &BlockView) -> String {
    let mut style = Style::new().set("text-align", b.align.as_str());
    if b.font_size > 0 {
        style = style.set("font-size", format!("{}px", b.font_size));
    }
    let style = style
        .set(
            "font-weight",
            if b.font_weight == FontWeight::Bold { "700" } else { "400" },
        )
        .set_opt("color", Some(b.color.as_str()))
        .set_opt("background-color", Some(b.bg_color.as_str()))
        .set("min-height", "1.5em")
        .set("line-height", "1.7")
        .set("padding", "2px 0")
        .set("white-space", "pre-wrap")
        .set("word-break", "break-word");

    if view.editable_mode() {
        format!(
            "<div{}{}>{}</div>",
            editable_attrs("html", "Type something..."),
            style.attr(),
            b.html
        )
    } else {
        let body = if b.html.is_empty() { EMPTY_TEXT_PLACEHOLDER } else { b.html.as_str() };
        format!("<div{}>{}</div>", style.attr(), body)
    }
}

fn render_heading(b: &HeadingBlock, view: &BlockView) -> String {
    let tag = format!("h{}", b.level.number());
    let style = Style::new()
        .set("text-align", b.align.as_str())
        .set("font-size", b.level.font_size())
        .set("font-weight", b.level.font_weight().to_string())
        .set_opt("color", Some(b.color.as_str()))
        .set("min-height", "1.2em")
        .set("line-height", "1.3")
        .set("padding", "2px 0")
        .set("word-break", "break-word");
    let attrs = if view.editable_mode() {
        editable_attrs("html", "Heading")
    } else {
        String::new()
    };
    format!("<{tag}{}{}>{}</{tag}>", attrs, style.attr(), b.html, tag = tag)
}

fn code_palette(theme: CodeTheme) -> (&'static str, &'static str, &'static str, &'static str) {
    // (background, text, border, muted)
    match theme {
        CodeTheme::Dark => ("#1e1e1e", "#d4d4d4", "#3a3a3a", "#888"),
        CodeTheme::Light => ("#f6f8fa", "#1a1a1a", "#D9CFC7", "#666"),
    }
}

fn render_code(b: &CodeBlock, view: &BlockView) -> String {
    let (bg, fg, border, muted) = code_palette(b.theme);
    let container = Style::new()
        .set("background-color", bg)
        .set("color", fg)
        .set("border", format!("1px solid {}", border))
        .set("border-radius", "8px")
        .set("overflow", "hidden");
    let bar = Style::new()
        .set("display", "flex")
        .set("align-items", "center")
        .set("gap", "8px")
        .set("padding", "6px 12px")
        .set("border-bottom", format!("1px solid {}", border))
        .set("font-size", "11px")
        .set("color", muted);

    let mut out = format!("<div class=\"code-block\"{}>", container.attr());
    out.push_str(&format!("<div{}>", bar.attr()));
    if view.editable_mode() {
        out.push_str("<select data-field=\"language\">");
        for lang in CODE_LANGUAGES {
            let selected = if *lang == b.language { " selected" } else { "" };
            out.push_str(&format!("<option value=\"{lang}\"{selected}>{lang}</option>"));
        }
        out.push_str("</select>");
        let label = match view.code_view {
            CodeView::Highlighted => "Edit",
            CodeView::Raw => "Preview",
        };
        out.push_str(&format!(
            "<button data-action=\"toggle-code-view\" style=\"margin-left:auto\">{}</button>",
            label
        ));
    } else {
        out.push_str(&format!("<span>{}</span>", escape_html(&b.language)));
    }
    out.push_str("</div>");

    let pre = Style::new()
        .set("margin", "0")
        .set("padding", "12px 16px")
        .set("overflow-x", "auto")
        .set("font-size", "13px")
        .set("font-family", "monospace")
        .set("line-height", "1.6");

    if view.editable_mode() && view.code_view == CodeView::Raw {
        let area = Style::new()
            .set("width", "100%")
            .set("min-height", "120px")
            .set("padding", "12px 16px")
            .set("border", "none")
            .set("outline", "none")
            .set("resize", "vertical")
            .set("font-size", "13px")
            .set("font-family", "monospace")
            .set("line-height", "1.6")
            .set("background", "transparent")
            .set("color", "inherit");
        out.push_str(&format!(
            "<textarea data-field=\"code\" spellcheck=\"false\"{}>{}</textarea>",
            area.attr(),
            escape_html(&b.code)
        ));
    } else {
        let code = format!(
            "<pre{}{}><code class=\"language-{}\">{}</code></pre>",
            if view.editable_mode() { " data-action=\"edit-code\"" } else { "" },
            pre.attr(),
            escape_html(&b.language),
            escape_html(&b.code)
        );
        if b.line_numbers {
            let count = b.code.lines().count().max(1);
            let numbers: Vec<String> = (1..=count).map(|n| n.to_string()).collect();
            let gutter = pre
                .clone()
                .set("padding", "12px 8px 12px 12px")
                .set("text-align", "right")
                .set("color", muted)
                .set("user-select", "none")
                .set("border-right", format!("1px solid {}", border));
            out.push_str(&format!(
                "<div style=\"display:flex\"><pre aria-hidden=\"true\"{}>{}</pre>{}</div>",
                gutter.attr(),
                numbers.join("\n"),
                code
            ));
        } else {
            out.push_str(&code);
        }
    }
    out.push_str("</div>");
    out
}

fn render_callout(b: &CalloutBlock, view: &BlockView) -> String {
    let (border, bg) = b.variant.colors();
    let container = Style::new()
        .set("display", "flex")
        .set("gap", "10px")
        .set("padding", "12px 16px")
        .set("border-radius", "8px")
        .set("border-left", format!("4px solid {}", border))
        .set("background-color", bg);
    let icon = Style::new().set("font-size", "18px").set("flex-shrink", "0");
    let text = Style::new()
        .set("flex", "1")
        .set("font-size", "14px")
        .set("line-height", "1.6")
        .set("min-height", "1.5em")
        .set("word-break", "break-word");

    if view.editable_mode() {
        format!(
            "<div{}><span{}{}>{}</span><div{}{}>{}</div></div>",
            container.attr(),
            editable_attrs("icon", ""),
            icon.set("min-width", "24px").attr(),
            escape_html(&b.icon),
            editable_attrs("html", "Add callout text..."),
            text.attr(),
            b.html
        )
    } else {
        let body = if b.html.is_empty() { NBSP } else { b.html.as_str() };
        format!(
            "<div{}><span{}>{}</span><div{}>{}</div></div>",
            container.attr(),
            icon.attr(),
            escape_html(&b.icon),
            text.attr(),
            body
        )
    }
}

fn render_image(b: &ImageBlock, view: &BlockView) -> String {
    let width = b.size.css_width();
    let wrap = Style::new()
        .set("display", "flex")
        .set("flex-direction", "column")
        .set("align-items", flex_align(b.align))
        .set("gap", "6px");

    let mut out = format!("<div{}>", wrap.attr());
    if !b.url.is_empty() && !view.image_broken {
        let img = Style::new()
            .set("max-width", width)
            .set("width", "100%")
            .set("border-radius", "6px")
            .set("display", "block");
        let alt = if b.caption.is_empty() { "image" } else { b.caption.as_str() };
        out.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\"{} />",
            escape_html(&b.url),
            escape_html(alt),
            img.attr()
        ));
    } else {
        let placeholder = Style::new()
            .set("width", width)
            .set("max-width", "100%")
            .set("height", "160px")
            .set("background-color", "#EFE9E3")
            .set("border", "1px dashed #D9CFC7")
            .set("border-radius", "6px")
            .set("display", "flex")
            .set("align-items", "center")
            .set("justify-content", "center")
            .set("color", "#aaa")
            .set("font-size", "13px");
        let message = if b.url.is_empty() { "No image URL" } else { "Image failed to load" };
        out.push_str(&format!("<div{}>{}</div>", placeholder.attr(), message));
    }

    let caption = Style::new()
        .set("font-size", "12px")
        .set("color", "#888")
        .set("text-align", "center");
    if view.editable_mode() {
        let input = Style::new()
            .set("font-size", "11px")
            .set("padding", "2px 6px")
            .set("border", "1px solid #D9CFC7")
            .set("border-radius", "4px")
            .set("width", width)
            .set("max-width", "100%");
        out.push_str(&format!(
            "<input type=\"text\" data-field=\"url\" placeholder=\"Image URL\" value=\"{}\"{} />",
            escape_html(&b.url),
            input.attr()
        ));
        out.push_str(&format!(
            "<input type=\"text\" data-field=\"caption\" placeholder=\"Caption\" value=\"{}\"{} />",
            escape_html(&b.caption),
            input.set("text-align", "center").attr()
        ));
    } else if !b.caption.is_empty() {
        out.push_str(&format!("<span{}>{}</span>", caption.attr(), escape_html(&b.caption)));
    }
    out.push_str("</div>");
    out
}

fn render_table(b: &TableBlock, view: &BlockView) -> String {
    let cell = Style::new()
        .set("border", "1px solid #D9CFC7")
        .set("padding", "6px 10px")
        .set("font-size", "13px")
        .set("min-width", "80px")
        .set("vertical-align", "top");

    let mut out = String::from(
        "<div style=\"overflow-x:auto\"><table style=\"border-collapse:collapse;width:100%\"><tbody>",
    );
    for (ri, row) in b.rows.iter().enumerate() {
        let header = ri == 0;
        let row_bg = if header { "#EFE9E3" } else { "transparent" };
        out.push_str(&format!("<tr style=\"background-color:{}\">", row_bg));
        for (ci, text) in row.iter().enumerate() {
            let style = cell.clone().set("font-weight", if header { "600" } else { "400" });
            if view.editable_mode() {
                out.push_str(&format!(
                    "<td contenteditable=\"true\" data-row=\"{}\" data-col=\"{}\"{}>{}</td>",
                    ri,
                    ci,
                    style.attr(),
                    escape_html(text)
                ));
            } else {
                out.push_str(&format!("<td{}>{}</td>", style.attr(), escape_html(text)));
            }
        }
        if view.editable_mode() {
            out.push_str(&format!(
                "<td style=\"border:none;padding:0 4px;vertical-align:middle\"><button data-action=\"remove-row\" data-row=\"{}\" title=\"Remove row\">×</button></td>",
                ri
            ));
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");
    if view.editable_mode() {
        out.push_str("<div style=\"display:flex;gap:6px;margin-top:6px\">");
        for (action, label) in [("add-row", "+ Row"), ("add-col", "+ Col"), ("remove-col", "- Col")] {
            out.push_str(&format!(
                "<button data-action=\"{}\" style=\"font-size:11px;padding:2px 8px;border:1px solid #D9CFC7;border-radius:4px;background:transparent;color:#666\">{}</button>",
                action, label
            ));
        }
        out.push_str("</div>");
    }
    out.push_str("</div>");
    out
}

fn render_divider(b: &DividerBlock) -> String {
    let color = if b.border_color.is_empty() {
        DEFAULT_DIVIDER_COLOR
    } else {
        b.border_color.as_str()
    };
    let style = Style::new().set("border", "none").set(
        "border-top",
        format!("{}px {} {}", b.thickness.px(), b.border_style.as_str(), color),
    );
    format!("<hr{} />", style.set("margin", "8px 0").attr())
}

fn button_style(b: &ButtonBlock, view: &BlockView) -> Style {
    let color = if b.color.is_empty() { DEFAULT_BUTTON_COLOR } else { b.color.as_str() };
    let base = Style::new()
        .set("display", "inline-flex")
        .set("align-items", "center")
        .set("justify-content", "center")
        .set("padding", b.size.padding())
        .set("font-size", b.size.font_size())
        .set("border-radius", format!("{}px", b.border_radius))
        .set("font-weight", "600")
        .set("text-decoration", "none")
        .set("cursor", if view.editable_mode() { "default" } else { "pointer" })
        .set("border", "none");
    match b.variant {
        ButtonVariant::Filled => base.set("background-color", color).set("color", "#fff"),
        ButtonVariant::Outlined => base
            .set("border", format!("2px solid {}", color))
            .set("color", color)
            .set("background-color", "transparent"),
        ButtonVariant::Ghost => base.set("color", color).set("background-color", "transparent"),
    }
}

fn render_button(b: &ButtonBlock, view: &BlockView) -> String {
    let style = button_style(b, view);
    if view.editable_mode() {
        format!(
            "<div style=\"display:flex;align-items:center;gap:8px\"><span{}{}>{}</span><input type=\"text\" data-field=\"href\" placeholder=\"URL\" value=\"{}\" style=\"font-size:11px;padding:2px 6px;border:1px solid #D9CFC7;border-radius:4px\" /></div>",
            editable_attrs("label", "Button"),
            style.attr(),
            escape_html(&b.label),
            escape_html(&b.href)
        )
    } else {
        let href = if b.href.is_empty() { "#" } else { b.href.as_str() };
        let target = if b.href.is_empty() { "" } else { " target=\"_blank\"" };
        let label = if b.label.is_empty() { "Button" } else { b.label.as_str() };
        format!(
            "<a href=\"{}\"{} rel=\"noopener noreferrer\"{}>{}</a>",
            escape_html(href),
            target,
            style.attr(),
            escape_html(label)
        )
    }
}

fn render_badge(b: &BadgeBlock, view: &BlockView) -> String {
    let style = Style::new()
        .set("display", "inline-flex")
        .set("align-items", "center")
        .set("padding", "3px 10px")
        .set("border-radius", format!("{}px", b.border_radius))
        .set("background-color", if b.bg_color.is_empty() { "#EFE9E3" } else { b.bg_color.as_str() })
        .set("color", if b.text_color.is_empty() { "#1a1a1a" } else { b.text_color.as_str() })
        .set("font-size", "12px")
        .set("font-weight", "500");
    if view.editable_mode() {
        format!(
            "<span{}{}>{}</span>",
            editable_attrs("label", "Badge"),
            style.set("min-width", "40px").attr(),
            escape_html(&b.label)
        )
    } else {
        let label = if b.label.is_empty() { "Badge" } else { b.label.as_str() };
        format!("<span{}>{}</span>", style.attr(), escape_html(label))
    }
}

fn render_quote(b: &QuoteBlock, view: &BlockView) -> String {
    let container = Style::new()
        .set("border-left", "4px solid #C9B59C")
        .set("padding-left", "16px")
        .set("padding-top", "8px")
        .set("padding-bottom", "8px");
    let text = Style::new()
        .set("font-size", "15px")
        .set("font-style", "italic")
        .set("line-height", "1.7")
        .set("color", "#555")
        .set("min-height", "1.5em")
        .set("word-break", "break-word");
    let author = Style::new()
        .set("font-size", "12px")
        .set("color", "#888")
        .set("margin-top", "6px");

    if view.editable_mode() {
        format!(
            "<blockquote{}><div{}{}>{}</div><div{}{}>{}</div></blockquote>",
            container.attr(),
            editable_attrs("html", "Write a quote..."),
            text.attr(),
            b.html,
            editable_attrs("author", "Author"),
            author.set("min-width", "60px").attr(),
            escape_html(&b.author)
        )
    } else {
        let body = if b.html.is_empty() { NBSP } else { b.html.as_str() };
        let attribution = if b.author.is_empty() {
            String::new()
        } else {
            format!("<div{}>— {}</div>", author.attr(), escape_html(&b.author))
        };
        format!(
            "<blockquote{}><div{}>{}</div>{}</blockquote>",
            container.attr(),
            text.attr(),
            body,
            attribution
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::{
        create_block, BlockKind, BlockWidth, CalloutVariant, HeadingLevel, ImageSize, Thickness,
    };

    fn read_only(data: &BlockData) -> String {
        render_block_data(data, &BlockView::read_only())
    }

    #[test]
    fn test_unknown_block_only_shows_while_editing() {
        let block = Block::unknown(serde_json::json!({"id": "v", "data": {"type": "video"}}));
        assert_eq!(render_block(&block, &BlockView::read_only()), "");
        let editable = render_block(&block, &BlockView::editable());
        assert!(editable.contains("data-block-id=\"v\""));
        assert!(editable.contains("Unsupported block"));
    }

    #[test]
    fn test_heading_tag_and_size_follow_level() {
        let html = read_only(&BlockData::Heading(HeadingBlock {
            html: "Install".to_string(),
            level: HeadingLevel::H1,
            ..HeadingBlock::default()
        }));
        assert!(html.starts_with("<h1"));
        assert!(html.contains("font-size:2rem"));
        assert!(html.contains("font-weight:800"));
        assert!(html.ends_with("Install</h1>"));
    }

    #[test]
    fn test_empty_text_shows_placeholder_only_when_read_only() {
        let data = BlockData::default_for(BlockKind::Text);
        assert!(read_only(&data).contains("Empty text block"));
        let editable = render_block_data(&data, &BlockView::editable());
        assert!(!editable.contains("Empty text block"));
        assert!(editable.contains("contenteditable=\"true\""));
    }

    #[test]
    fn test_text_style_skips_unset_colors() {
        let html = read_only(&BlockData::default_for(BlockKind::Text));
        assert!(html.contains("font-size:14px"));
        assert!(!html.contains("background-color"));
        assert!(!html.contains(";color:"));
    }

    #[test]
    fn test_callout_variant_colors() {
        let html = read_only(&BlockData::Callout(CalloutBlock {
            variant: CalloutVariant::Danger,
            ..CalloutBlock::default()
        }));
        assert!(html.contains("border-left:4px solid #ef4444"));
        assert!(html.contains("background-color:#fef2f2"));
    }

    #[test]
    fn test_image_placeholders() {
        let mut image = ImageBlock::default();
        assert!(read_only(&BlockData::Image(image.clone())).contains("No image URL"));

        image.url = "https://example.com/a.png".to_string();
        image.size = ImageSize::Lg;
        let ok = read_only(&BlockData::Image(image.clone()));
        assert!(ok.contains("<img src=\"https://example.com/a.png\""));
        assert!(ok.contains("max-width:720px"));

        let broken = render_block_data(
            &BlockData::Image(image),
            &BlockView {
                image_broken: true,
                ..BlockView::default()
            },
        );
        assert!(broken.contains("Image failed to load"));
        assert!(!broken.contains("<img"));
    }

    #[test]
    fn test_table_cells_are_escaped_and_header_row_styled() {
        let html = read_only(&BlockData::Table(TableBlock {
            rows: vec![
                vec!["Name".to_string(), "<b>".to_string()],
                vec!["a".to_string(), "b".to_string()],
            ],
        }));
        assert!(html.contains("&lt;b&gt;"));
        assert!(html.contains("background-color:#EFE9E3"));
        assert_eq!(html.matches("<td").count(), 4);
    }

    #[test]
    fn test_divider_border() {
        let html = read_only(&BlockData::Divider(DividerBlock {
            thickness: Thickness::Four,
            ..DividerBlock::default()
        }));
        assert!(html.contains("border-top:4px solid #D9CFC7"));
    }

    #[test]
    fn test_button_variants() {
        let filled = read_only(&BlockData::default_for(BlockKind::Button));
        assert!(filled.contains("background-color:#C9B59C"));
        assert!(filled.contains("color:#fff"));
        assert!(filled.contains("href=\"#\""));
        assert!(!filled.contains("target="));

        let outlined = read_only(&BlockData::Button(ButtonBlock {
            variant: ButtonVariant::Outlined,
            href: "https://example.com".to_string(),
            ..ButtonBlock::default()
        }));
        assert!(outlined.contains("border:2px solid #C9B59C"));
        assert!(outlined.contains("target=\"_blank\""));
    }

    #[test]
    fn test_quote_author_line() {
        let html = read_only(&BlockData::Quote(QuoteBlock {
            html: "Simple is better".to_string(),
            author: "Tim".to_string(),
        }));
        assert!(html.contains("— Tim"));
        let anonymous = read_only(&BlockData::default_for(BlockKind::Quote));
        assert!(!anonymous.contains("—"));
    }

    #[test]
    fn test_code_is_escaped_with_language_class() {
        let html = read_only(&BlockData::Code(CodeBlock {
            code: "if a < b {}".to_string(),
            language: "rust".to_string(),
            ..CodeBlock::default()
        }));
        assert!(html.contains("class=\"language-rust\""));
        assert!(html.contains("if a &lt; b {}"));
        assert!(html.contains("#f6f8fa"));
    }

    #[test]
    fn test_code_line_number_gutter() {
        let html = read_only(&BlockData::Code(CodeBlock {
            code: "a\nb\nc".to_string(),
            line_numbers: true,
            ..CodeBlock::default()
        }));
        assert!(html.contains(">1\n2\n3</pre>"));
    }

    #[test]
    fn test_editable_code_raw_view_uses_textarea() {
        let view = BlockView {
            mode: RenderMode::Editable,
            code_view: CodeView::Raw,
            ..BlockView::default()
        };
        let html = render_block_data(&BlockData::default_for(BlockKind::Code), &view);
        assert!(html.contains("<textarea data-field=\"code\""));
        assert!(html.contains("<option value=\"typescript\" selected>"));
    }

    #[test]
    fn test_sequence_wraps_blocks_with_width() {
        let mut block = create_block(BlockKind::Badge);
        block.width = Some(BlockWidth::Half);
        let html = render_sequence(&[block.clone()], RenderMode::ReadOnly);
        assert!(html.contains(&format!("data-block-id=\"{}\"", block.id)));
        assert!(html.contains("width:calc(50% - 4px)"));
    }
}
