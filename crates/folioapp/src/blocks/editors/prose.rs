//! Editors for the kinds with a rich-markup body: text, heading, callout and
//! quote. Each keeps its payload plus a [`RichTextRegion`] for the body.

use super::rich_text::{RegionSync, RichTextRegion};
use crate::blocks::{
    Align, BlockData, CalloutBlock, CalloutVariant, FontWeight, HeadingBlock, HeadingLevel,
    QuoteBlock, TextBlock,
};
use crate::error::{FolioError, Result};

pub const MIN_FONT_SIZE: u32 = 10;
pub const MAX_FONT_SIZE: u32 = 48;

#[derive(Debug, Clone)]
pub struct TextEditor {
    data: TextBlock,
    body: RichTextRegion,
}

impl TextEditor {
    pub fn new(data: TextBlock) -> Self {
        let body = RichTextRegion::new(data.html.clone());
        Self { data, body }
    }

    pub fn data(&self) -> &TextBlock {
        &self.data
    }

    pub fn body(&mut self) -> &mut RichTextRegion {
        &mut self.body
    }

    pub fn on_input(&mut self, markup: &str) -> BlockData {
        self.body.on_input(markup);
        self.data.html = markup.to_string();
        self.emit()
    }

    pub fn set_align(&mut self, align: Align) -> BlockData {
        self.data.align = align;
        self.emit()
    }

    pub fn set_font_size(&mut self, size: u32) -> Result<BlockData> {
        if !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&size) {
            return Err(FolioError::invalid(format!(
                "font size must be between {} and {}",
                MIN_FONT_SIZE, MAX_FONT_SIZE
            )));
        }
        self.data.font_size = size;
        Ok(self.emit())
    }

    pub fn toggle_bold(&mut self) -> BlockData {
        self.data.font_weight = match self.data.font_weight {
            FontWeight::Normal => FontWeight::Bold,
            FontWeight::Bold => FontWeight::Normal,
        };
        self.emit()
    }

    pub fn set_color(&mut self, color: &str) -> BlockData {
        self.data.color = color.to_string();
        self.emit()
    }

    pub fn set_bg_color(&mut self, color: &str) -> BlockData {
        self.data.bg_color = color.to_string();
        self.emit()
    }

    pub fn sync(&mut self, data: TextBlock) -> RegionSync {
        let sync = self.body.external_update(&data.html);
        self.data = data;
        sync
    }

    pub fn emit(&self) -> BlockData {
        BlockData::Text(self.data.clone())
    }
}

#[derive(Debug, Clone)]
pub struct HeadingEditor {
    data: HeadingBlock,
    body: RichTextRegion,
}

impl HeadingEditor {
    pub fn new(data: HeadingBlock) -> Self {
        let body = RichTextRegion::new(data.html.clone());
        Self { data, body }
    }

    pub fn data(&self) -> &HeadingBlock {
        &self.data
    }

    pub fn body(&mut self) -> &mut RichTextRegion {
        &mut self.body
    }

    pub fn on_input(&mut self, markup: &str) -> BlockData {
        self.body.on_input(markup);
        self.data.html = markup.to_string();
        self.emit()
    }

    pub fn set_level(&mut self, level: HeadingLevel) -> BlockData {
        self.data.level = level;
        self.emit()
    }

    pub fn set_align(&mut self, align: Align) -> BlockData {
        self.data.align = align;
        self.emit()
    }

    pub fn set_color(&mut self, color: &str) -> BlockData {
        self.data.color = color.to_string();
        self.emit()
    }

    pub fn sync(&mut self, data: HeadingBlock) -> RegionSync {
        let sync = self.body.external_update(&data.html);
        self.data = data;
        sync
    }

    pub fn emit(&self) -> BlockData {
        BlockData::Heading(self.data.clone())
    }
}

#[derive(Debug, Clone)]
pub struct CalloutEditor {
    data: CalloutBlock,
    body: RichTextRegion,
}

impl CalloutEditor {
    pub fn new(data: CalloutBlock) -> Self {
        let body = RichTextRegion::new(data.html.clone());
        Self { data, body }
    }

    pub fn data(&self) -> &CalloutBlock {
        &self.data
    }

    pub fn body(&mut self) -> &mut RichTextRegion {
        &mut self.body
    }

    pub fn on_input(&mut self, markup: &str) -> BlockData {
        self.body.on_input(markup);
        self.data.html = markup.to_string();
        self.emit()
    }

    /// The icon is free text; an empty edit keeps the previous glyph.
    pub fn set_icon(&mut self, icon: &str) -> BlockData {
        if !icon.is_empty() {
            self.data.icon = icon.to_string();
        }
        self.emit()
    }

    pub fn set_variant(&mut self, variant: CalloutVariant) -> BlockData {
        self.data.variant = variant;
        self.emit()
    }

    pub fn sync(&mut self, data: CalloutBlock) -> RegionSync {
        let sync = self.body.external_update(&data.html);
        self.data = data;
        sync
    }

    pub fn emit(&self) -> BlockData {
        BlockData::Callout(self.data.clone())
    }
}

#[derive(Debug, Clone)]
pub struct QuoteEditor {
    data: QuoteBlock,
    body: RichTextRegion,
}

impl QuoteEditor {
    pub fn new(data: QuoteBlock) -> Self {
        let body = RichTextRegion::new(data.html.clone());
        Self { data, body }
    }

    pub fn data(&self) -> &QuoteBlock {
        &self.data
    }

    pub fn body(&mut self) -> &mut RichTextRegion {
        &mut self.body
    }

    pub fn on_input(&mut self, markup: &str) -> BlockData {
        self.body.on_input(markup);
        self.data.html = markup.to_string();
        self.emit()
    }

    pub fn set_author(&mut self, author: &str) -> BlockData {
        self.data.author = author.to_string();
        self.emit()
    }

    pub fn sync(&mut self, data: QuoteBlock) -> RegionSync {
        let sync = self.body.external_update(&data.html);
        self.data = data;
        sync
    }

    pub fn emit(&self) -> BlockData {
        BlockData::Quote(self.data.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_updates_keep_other_fields() {
        let mut editor = TextEditor::new(TextBlock {
            html: "hello".to_string(),
            color: "#333".to_string(),
            ..TextBlock::default()
        });
        editor.toggle_bold();
        let data = editor.set_align(Align::Center);

        match data {
            BlockData::Text(text) => {
                assert_eq!(text.html, "hello");
                assert_eq!(text.color, "#333");
                assert_eq!(text.font_weight, FontWeight::Bold);
                assert_eq!(text.align, Align::Center);
            }
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn test_font_size_bounds() {
        let mut editor = TextEditor::new(TextBlock::default());
        assert!(editor.set_font_size(9).is_err());
        assert!(editor.set_font_size(49).is_err());
        assert!(editor.set_font_size(48).is_ok());
        assert_eq!(editor.data().font_size, 48);
    }

    #[test]
    fn test_heading_input_updates_markup() {
        let mut editor = HeadingEditor::new(HeadingBlock::default());
        editor.set_level(HeadingLevel::H3);
        let data = editor.on_input("Usage <i>notes</i>");
        match data {
            BlockData::Heading(h) => {
                assert_eq!(h.html, "Usage <i>notes</i>");
                assert_eq!(h.level, HeadingLevel::H3);
            }
            other => panic!("expected heading, got {:?}", other),
        }
    }

    #[test]
    fn test_callout_variant_keeps_icon_and_empty_icon_ignored() {
        let mut editor = CalloutEditor::new(CalloutBlock::default());
        editor.set_icon("🔥");
        editor.set_variant(CalloutVariant::Warning);
        editor.set_icon("");
        assert_eq!(editor.data().icon, "🔥");
        assert_eq!(editor.data().variant, CalloutVariant::Warning);
    }

    #[test]
    fn test_sync_while_focused_defers_body() {
        let mut editor = QuoteEditor::new(QuoteBlock::default());
        editor.body().mount();
        editor.body().focus();
        editor.on_input("typing");

        let sync = editor.sync(QuoteBlock {
            html: "from undo".to_string(),
            author: "Ada".to_string(),
        });
        assert_eq!(sync, RegionSync::Deferred);
        assert_eq!(editor.data().author, "Ada");
        assert_eq!(editor.body().blur(), Some("from undo".to_string()));
    }
}
