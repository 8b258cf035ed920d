//! # Per-Block Editors
//!
//! One stateful view-model per block kind. An editor holds the block's current
//! payload plus any presentation state (rich-text focus, code view, image load
//! failure) and turns user input into a **complete** updated payload:
//!
//! ```text
//! host event ──► editor.set_x(..) ──► BlockData (every field) ──► surface.update(id, data)
//! ```
//!
//! The surface replaces a block's payload wholesale, so each setter starts
//! from the previous payload and overwrites exactly the fields it owns.
//!
//! When the payload changes from outside (undo, redo), the host calls
//! [`BlockEditor::sync`]; for prose kinds the returned [`RegionSync`] says
//! whether it may write into its editable region now.
//!
//! `Unknown` blocks get a passthrough editor with no setters: they can be
//! moved, resized, duplicated and deleted, never changed.
//!
//! Rendering goes through [`crate::render::blocks`] with the editor's
//! presentation state folded into a [`BlockView`].

pub mod code;
pub mod controls;
pub mod image;
pub mod prose;
pub mod rich_text;
pub mod table;

pub use code::{CodeEditor, CodeView, CODE_LANGUAGES};
pub use controls::{BadgeEditor, ButtonEditor, DividerEditor};
pub use image::ImageEditor;
pub use prose::{CalloutEditor, HeadingEditor, QuoteEditor, TextEditor};
pub use rich_text::{RegionSync, RichTextRegion};
pub use table::TableEditor;

use crate::blocks::{BlockData, BlockKind, UnknownBlock};
use crate::render::blocks::{render_block_data, BlockView, RenderMode};

#[derive(Debug, Clone)]
pub enum BlockEditor {
    Text(TextEditor),
    Heading(HeadingEditor),
    Code(CodeEditor),
    Callout(CalloutEditor),
    Image(ImageEditor),
    Table(TableEditor),
    Divider(DividerEditor),
    Button(ButtonEditor),
    Badge(BadgeEditor),
    Quote(QuoteEditor),
    Unknown(UnknownBlock),
}

impl BlockEditor {
    pub fn for_data(data: &BlockData) -> Self {
        match data.clone() {
            BlockData::Text(d) => BlockEditor::Text(TextEditor::new(d)),
            BlockData::Heading(d) => BlockEditor::Heading(HeadingEditor::new(d)),
            BlockData::Code(d) => BlockEditor::Code(CodeEditor::new(d)),
            BlockData::Callout(d) => BlockEditor::Callout(CalloutEditor::new(d)),
            BlockData::Image(d) => BlockEditor::Image(ImageEditor::new(d)),
            BlockData::Table(d) => BlockEditor::Table(TableEditor::new(d)),
            BlockData::Divider(d) => BlockEditor::Divider(DividerEditor::new(d)),
            BlockData::Button(d) => BlockEditor::Button(ButtonEditor::new(d)),
            BlockData::Badge(d) => BlockEditor::Badge(BadgeEditor::new(d)),
            BlockData::Quote(d) => BlockEditor::Quote(QuoteEditor::new(d)),
            BlockData::Unknown(d) => BlockEditor::Unknown(d),
        }
    }

    pub fn kind(&self) -> BlockKind {
        self.data().kind()
    }

    /// The full current payload.
    pub fn data(&self) -> BlockData {
        match self {
            BlockEditor::Text(e) => e.emit(),
            BlockEditor::Heading(e) => e.emit(),
            BlockEditor::Code(e) => e.emit(),
            BlockEditor::Callout(e) => e.emit(),
            BlockEditor::Image(e) => e.emit(),
            BlockEditor::Table(e) => e.emit(),
            BlockEditor::Divider(e) => e.emit(),
            BlockEditor::Button(e) => e.emit(),
            BlockEditor::Badge(e) => e.emit(),
            BlockEditor::Quote(e) => e.emit(),
            BlockEditor::Unknown(d) => BlockData::Unknown(d.clone()),
        }
    }

    /// The rich-text body region, for prose kinds.
    pub fn region(&mut self) -> Option<&mut RichTextRegion> {
        match self {
            BlockEditor::Text(e) => Some(e.body()),
            BlockEditor::Heading(e) => Some(e.body()),
            BlockEditor::Callout(e) => Some(e.body()),
            BlockEditor::Quote(e) => Some(e.body()),
            _ => None,
        }
    }

    /// Route a body input event to the prose editor. Other kinds ignore it.
    pub fn on_input(&mut self, markup: &str) -> Option<BlockData> {
        match self {
            BlockEditor::Text(e) => Some(e.on_input(markup)),
            BlockEditor::Heading(e) => Some(e.on_input(markup)),
            BlockEditor::Callout(e) => Some(e.on_input(markup)),
            BlockEditor::Quote(e) => Some(e.on_input(markup)),
            _ => None,
        }
    }

    /// Accept a payload that changed outside this editor.
    pub fn sync(&mut self, data: &BlockData) -> RegionSync {
        match (self, data.clone()) {
            (BlockEditor::Text(e), BlockData::Text(d)) => e.sync(d),
            (BlockEditor::Heading(e), BlockData::Heading(d)) => e.sync(d),
            (BlockEditor::Callout(e), BlockData::Callout(d)) => e.sync(d),
            (BlockEditor::Quote(e), BlockData::Quote(d)) => e.sync(d),
            (BlockEditor::Code(e), BlockData::Code(d)) => {
                e.sync(d);
                RegionSync::Unchanged
            }
            (BlockEditor::Image(e), BlockData::Image(d)) => {
                e.sync(d);
                RegionSync::Unchanged
            }
            (BlockEditor::Table(e), BlockData::Table(d)) => {
                e.sync(d);
                RegionSync::Unchanged
            }
            (BlockEditor::Divider(e), BlockData::Divider(d)) => {
                e.sync(d);
                RegionSync::Unchanged
            }
            (BlockEditor::Button(e), BlockData::Button(d)) => {
                e.sync(d);
                RegionSync::Unchanged
            }
            (BlockEditor::Badge(e), BlockData::Badge(d)) => {
                e.sync(d);
                RegionSync::Unchanged
            }
            (BlockEditor::Unknown(e), BlockData::Unknown(d)) => {
                *e = d;
                RegionSync::Unchanged
            }
            (this, _) => {
                // The block changed kind: start over with a fresh editor.
                *this = BlockEditor::for_data(data);
                match data.markup() {
                    Some(markup) => RegionSync::Write(markup.to_string()),
                    None => RegionSync::Unchanged,
                }
            }
        }
    }

    pub fn view(&self, mode: RenderMode) -> BlockView {
        let mut view = BlockView {
            mode,
            ..BlockView::default()
        };
        match self {
            BlockEditor::Image(e) => view.image_broken = e.is_broken(),
            BlockEditor::Code(e) => view.code_view = e.view(),
            _ => {}
        }
        view
    }

    pub fn render_read_only(&self) -> String {
        render_block_data(&self.data(), &self.view(RenderMode::ReadOnly))
    }

    pub fn render_editable(&self) -> String {
        render_block_data(&self.data(), &self.view(RenderMode::Editable))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::{QuoteBlock, TextBlock};

    #[test]
    fn test_for_data_matches_kind() {
        for kind in BlockKind::ALL {
            let data = BlockData::default_for(kind);
            let editor = BlockEditor::for_data(&data);
            assert_eq!(editor.kind(), kind);
            assert_eq!(editor.data(), data);
        }
    }

    #[test]
    fn test_on_input_only_for_prose() {
        let mut quote = BlockEditor::for_data(&BlockData::default_for(BlockKind::Quote));
        assert!(quote.on_input("wise words").is_some());
        let mut table = BlockEditor::for_data(&BlockData::default_for(BlockKind::Table));
        assert!(table.on_input("x").is_none());
        assert!(table.region().is_none());
    }

    #[test]
    fn test_sync_with_different_kind_replaces_editor() {
        let mut editor = BlockEditor::for_data(&BlockData::default_for(BlockKind::Badge));
        let sync = editor.sync(&BlockData::Quote(QuoteBlock {
            html: "hi".to_string(),
            author: String::new(),
        }));
        assert_eq!(sync, RegionSync::Write("hi".to_string()));
        assert_eq!(editor.kind(), BlockKind::Quote);
    }

    #[test]
    fn test_sync_same_kind_updates_data() {
        let mut editor = BlockEditor::for_data(&BlockData::default_for(BlockKind::Text));
        let next = BlockData::Text(TextBlock {
            html: "restored".to_string(),
            ..TextBlock::default()
        });
        assert_eq!(editor.sync(&next), RegionSync::Write("restored".to_string()));
        assert_eq!(editor.data(), next);
    }

    #[test]
    fn test_unknown_editor_passes_data_through() {
        let data = BlockData::Unknown(UnknownBlock {
            raw: serde_json::json!({"id": "v", "data": {"type": "video"}}),
        });
        let mut editor = BlockEditor::for_data(&data);
        assert_eq!(editor.kind(), BlockKind::Unknown);
        assert_eq!(editor.data(), data);
        assert!(editor.on_input("x").is_none());
        assert!(editor.render_read_only().is_empty());
    }

    #[test]
    fn test_broken_image_reaches_render() {
        let mut editor = BlockEditor::for_data(&BlockData::default_for(BlockKind::Image));
        if let BlockEditor::Image(image) = &mut editor {
            image.set_url("https://example.com/gone.png");
            image.mark_broken();
        }
        assert!(editor.render_read_only().contains("Image failed to load"));
        assert!(editor.render_editable().contains("data-field=\"url\""));
    }
}
