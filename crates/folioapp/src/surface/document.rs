//! The block document surface.
//!
//! Structural edits (insert, delete, duplicate, move, reorder) are each one
//! undo step. Edits inside a block and width changes are debounced so a burst
//! of typing collapses into a single step.
//!
//! Prose editors are created lazily, the first time the host asks for a
//! block's editor. When undo or redo changes a block underneath its editor the
//! surface syncs the editor and reports what the host should do with the
//! editable region as [`SurfaceEvent::Region`].

use std::collections::HashMap;
use tracing::{debug, warn};
use uuid::Uuid;

use super::autosave::Autosave;
use super::keyboard::{KeyEvent, Shortcut};
use super::{SurfaceEvent, SurfaceOptions};
use crate::blocks::editors::{BlockEditor, RegionSync};
use crate::blocks::{create_block, ensure_unique_ids, parse_sequence, serialize_sequence, Block, BlockData, BlockKind, BlockWidth};
use crate::clock::{Clock, SystemClock};
use crate::commands::Notice;
use crate::error::Result;
use crate::history::History;
use crate::model::Header;
use crate::ports::HeaderWriter;
use crate::render::blocks::{render_block, BlockView, RenderMode};

pub struct DocumentSurface<C: Clock = SystemClock> {
    header_id: Uuid,
    blocks: Vec<Block>,
    editors: HashMap<String, BlockEditor>,
    selected: Option<String>,
    picker_after: Option<Option<String>>,
    history: History<Vec<Block>>,
    autosave: Autosave,
    mounted: bool,
    events: Vec<SurfaceEvent>,
    clock: C,
}

impl<C: Clock> DocumentSurface<C> {
    /// Open a header's content. Legacy text becomes a single text block and
    /// repeated block ids are replaced.
    pub fn open(header: &Header, clock: C, options: SurfaceOptions) -> Self {
        let mut blocks = parse_sequence(Some(&header.content));
        let fixed = ensure_unique_ids(&mut blocks);
        if fixed > 0 {
            debug!(header = %header.id, fixed, "re-identified duplicate block ids");
        }
        let history = History::with_debounce(blocks.clone(), options.history_debounce)
            .with_capacity(options.history_capacity);
        Self {
            header_id: header.id,
            blocks,
            editors: HashMap::new(),
            selected: None,
            picker_after: None,
            history,
            autosave: Autosave::new(options.autosave_delay),
            mounted: false,
            events: Vec::new(),
            clock,
        }
    }

    pub fn header_id(&self) -> Uuid {
        self.header_id
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn block(&self, id: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn select(&mut self, id: Option<&str>) {
        self.selected = id.filter(|id| self.index_of(id).is_some()).map(str::to_string);
    }

    pub fn is_dirty(&self) -> bool {
        self.autosave.is_dirty()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn drain_events(&mut self) -> Vec<SurfaceEvent> {
        std::mem::take(&mut self.events)
    }

    // --- Picker ---

    /// Open the block picker. The chosen block goes after `after`, or at the end.
    pub fn open_picker_after(&mut self, after: Option<&str>) {
        self.picker_after = Some(after.map(str::to_string));
    }

    pub fn is_picker_open(&self) -> bool {
        self.picker_after.is_some()
    }

    pub fn close_picker(&mut self) {
        self.picker_after = None;
    }

    /// Insert the kind chosen in the picker and close it.
    pub fn pick(&mut self, kind: BlockKind) -> String {
        let after = self.picker_after.take().flatten();
        self.insert(kind, after.as_deref())
    }

    // --- Structural edits ---

    /// Insert a new block after `after`, or at the end when `after` is absent
    /// or unknown. The new block becomes the selection.
    pub fn insert(&mut self, kind: BlockKind, after: Option<&str>) -> String {
        let block = create_block(kind);
        let id = block.id.clone();
        let index = after
            .and_then(|after| self.index_of(after))
            .map(|i| i + 1)
            .unwrap_or(self.blocks.len());
        self.blocks.insert(index, block);
        self.selected = Some(id.clone());
        self.commit_structural();
        id
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        self.blocks.remove(index);
        self.editors.remove(id);
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        self.commit_structural();
        true
    }

    /// Copy a block's payload under a new id, right after the original.
    pub fn duplicate(&mut self, id: &str) -> Option<String> {
        let index = self.index_of(id)?;
        let copy = Block::new(self.blocks[index].data.clone());
        let copy_id = copy.id.clone();
        self.blocks.insert(index + 1, copy);
        self.selected = Some(copy_id.clone());
        self.commit_structural();
        Some(copy_id)
    }

    pub fn move_up(&mut self, id: &str) -> bool {
        match self.index_of(id) {
            Some(index) if index > 0 => {
                self.blocks.swap(index - 1, index);
                self.commit_structural();
                true
            }
            _ => false,
        }
    }

    pub fn move_down(&mut self, id: &str) -> bool {
        match self.index_of(id) {
            Some(index) if index + 1 < self.blocks.len() => {
                self.blocks.swap(index, index + 1);
                self.commit_structural();
                true
            }
            _ => false,
        }
    }

    /// Drop `active` at the position of `over`.
    pub fn reorder(&mut self, active: &str, over: &str) -> bool {
        let (Some(from), Some(to)) = (self.index_of(active), self.index_of(over)) else {
            return false;
        };
        if from == to {
            return false;
        }
        let block = self.blocks.remove(from);
        self.blocks.insert(to, block);
        self.commit_structural();
        true
    }

    // --- Field edits ---

    /// Replace a block's payload wholesale.
    pub fn update(&mut self, id: &str, data: BlockData) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        if let Some(editor) = self.editors.get_mut(id) {
            let sync = editor.sync(&data);
            push_region(&mut self.events, id, sync);
        }
        self.blocks[index].data = data;
        self.commit_debounced();
        true
    }

    pub fn set_width(&mut self, id: &str, width: Option<BlockWidth>) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        self.blocks[index].width = width.filter(|w| *w != BlockWidth::Full);
        self.commit_debounced();
        true
    }

    /// The block's editor, created on first use.
    pub fn editor(&mut self, id: &str) -> Option<&mut BlockEditor> {
        let index = self.index_of(id)?;
        let data = &self.blocks[index].data;
        Some(
            self.editors
                .entry(id.to_string())
                .or_insert_with(|| BlockEditor::for_data(data)),
        )
    }

    /// Run an editor action and apply the payload it produces.
    pub fn edit<F>(&mut self, id: &str, action: F) -> bool
    where
        F: FnOnce(&mut BlockEditor) -> Option<BlockData>,
    {
        let Some(data) = self.editor(id).and_then(action) else {
            return false;
        };
        self.apply_from_editor(id, data)
    }

    /// Like [`DocumentSurface::edit`] for editor actions that validate input.
    pub fn try_edit<F>(&mut self, id: &str, action: F) -> Result<bool>
    where
        F: FnOnce(&mut BlockEditor) -> Result<Option<BlockData>>,
    {
        let Some(editor) = self.editor(id) else {
            return Ok(false);
        };
        match action(editor)? {
            Some(data) => Ok(self.apply_from_editor(id, data)),
            None => Ok(false),
        }
    }

    // --- History ---

    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                self.apply_snapshot(snapshot);
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                self.apply_snapshot(snapshot);
                true
            }
            None => false,
        }
    }

    // --- Host hooks ---

    pub fn mount(&mut self) {
        self.mounted = true;
    }

    /// Stop listening for keys and drop pending timers. An edit still inside
    /// its debounce window is not saved.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.history.discard_pending();
        self.autosave.cancel();
        for editor in self.editors.values_mut() {
            if let Some(region) = editor.region() {
                region.unmount();
            }
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Returns true when the key was consumed and its default action should
    /// be suppressed.
    pub fn handle_key(&mut self, event: &KeyEvent) -> bool {
        if !self.mounted {
            return false;
        }
        match Shortcut::from_event(event) {
            Some(Shortcut::Undo) => {
                self.undo();
                true
            }
            Some(Shortcut::Redo) => {
                self.redo();
                true
            }
            None => false,
        }
    }

    /// Fire due timers.
    pub fn tick<W: HeaderWriter>(&mut self, writer: &mut W) {
        let now = self.clock.now();
        self.history.tick(now);
        if self.autosave.due(now) {
            self.save(writer);
        }
    }

    /// Commit any pending history entry and save right away.
    pub fn save_now<W: HeaderWriter>(&mut self, writer: &mut W) {
        self.history.flush();
        self.save(writer);
    }

    pub fn serialized(&self) -> Result<String> {
        serialize_sequence(&self.blocks)
    }

    /// Editable markup for every block, with each editor's presentation state.
    pub fn render_editable(&self) -> String {
        let mut out = String::from(
            "<div class=\"blocks\" style=\"display:flex;flex-wrap:wrap;gap:8px;align-items:flex-start\">",
        );
        for block in &self.blocks {
            let view = match self.editors.get(&block.id) {
                Some(editor) => editor.view(RenderMode::Editable),
                None => BlockView::editable(),
            };
            out.push_str(&render_block(block, &view));
        }
        out.push_str("</div>");
        out
    }

    fn apply_from_editor(&mut self, id: &str, data: BlockData) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        self.blocks[index].data = data;
        self.commit_debounced();
        true
    }

    fn apply_snapshot(&mut self, snapshot: Vec<Block>) {
        self.blocks = snapshot;
        let blocks = &self.blocks;
        self.editors.retain(|id, _| blocks.iter().any(|b| &b.id == id));
        for block in &self.blocks {
            if let Some(editor) = self.editors.get_mut(&block.id) {
                let sync = editor.sync(&block.data);
                push_region(&mut self.events, &block.id, sync);
            }
        }
        if let Some(selected) = &self.selected {
            if !self.blocks.iter().any(|b| &b.id == selected) {
                self.selected = None;
            }
        }
        self.changed();
    }

    fn commit_structural(&mut self) {
        self.history.push_immediate(self.blocks.clone());
        self.changed();
    }

    fn commit_debounced(&mut self) {
        self.history.push_debounced(self.blocks.clone(), self.clock.now());
        self.changed();
    }

    fn changed(&mut self) {
        match self.serialized() {
            Ok(content) => self.events.push(SurfaceEvent::ContentChanged {
                header_id: self.header_id,
                content,
            }),
            Err(err) => warn!(header = %self.header_id, "could not serialize blocks: {}", err),
        }
        self.autosave.mark_dirty(self.clock.now());
    }

    fn save<W: HeaderWriter>(&mut self, writer: &mut W) {
        let event = match self.serialized() {
            Ok(content) => self.autosave.save(writer, self.header_id, &content),
            Err(err) => {
                warn!(header = %self.header_id, "could not serialize blocks: {}", err);
                SurfaceEvent::Notice(Notice::error("Failed to save"))
            }
        };
        self.events.push(event);
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == id)
    }
}

fn push_region(events: &mut Vec<SurfaceEvent>, block_id: &str, sync: RegionSync) {
    if sync != RegionSync::Unchanged {
        events.push(SurfaceEvent::Region {
            block_id: block_id.to_string(),
            sync,
        });
    }
}
