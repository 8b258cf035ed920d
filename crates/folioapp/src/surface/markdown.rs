//! The markdown surface, for sections whose content is not a block array.
//!
//! Typing is debounced into undo steps like block field edits. Toolbar
//! formats replace the current selection with a markdown snippet as a single
//! immediate step and return the selection covering the inserted text.
//! Selections are character offsets, not byte offsets.

use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::autosave::Autosave;
use super::keyboard::{KeyEvent, Shortcut};
use super::{SurfaceEvent, SurfaceOptions};
use crate::clock::{Clock, SystemClock};
use crate::error::FolioError;
use crate::history::History;
use crate::model::Header;
use crate::ports::HeaderWriter;
use crate::render::render_markdown;

const TABLE_SKELETON: &str = "| Column 1 | Column 2 | Column 3 |\n\
|----------|----------|----------|\n\
| Cell     | Cell     | Cell     |\n\
| Cell     | Cell     | Cell     |";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn caret(at: usize) -> Self {
        Self { start: at, end: at }
    }

    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start: start.min(end),
            end: start.max(end),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Format {
    Bold,
    Italic,
    InlineCode,
    Link,
    Heading1,
    Heading2,
    Quote,
    BulletList,
    OrderedList,
    InfoNote,
    WarningNote,
    Table,
    Image,
    Divider,
    /// Fenced code with a language tag.
    CodeBlock(String),
}

impl Format {
    /// The markdown that replaces `selected`.
    pub fn snippet(&self, selected: &str) -> String {
        let or = |placeholder: &str| {
            if selected.is_empty() {
                placeholder.to_string()
            } else {
                selected.to_string()
            }
        };
        match self {
            Format::Bold => format!("**{}**", or("bold text")),
            Format::Italic => format!("*{}*", or("italic text")),
            Format::InlineCode => format!("`{}`", or("code")),
            Format::Link => format!("[{}](url)", or("link text")),
            Format::Heading1 => format!("# {}", or("Heading 1")),
            Format::Heading2 => format!("## {}", or("Heading 2")),
            Format::Quote => format!("> {}", or("blockquote")),
            Format::BulletList if selected.is_empty() => "- item".to_string(),
            Format::BulletList => selected
                .split('\n')
                .map(|line| format!("- {}", line))
                .collect::<Vec<_>>()
                .join("\n"),
            Format::OrderedList if selected.is_empty() => "1. item".to_string(),
            Format::OrderedList => selected
                .split('\n')
                .enumerate()
                .map(|(i, line)| format!("{}. {}", i + 1, line))
                .collect::<Vec<_>>()
                .join("\n"),
            Format::InfoNote => format!("> ℹ️ **Note:** {}", or("Add your info here")),
            Format::WarningNote => format!("> ⚠️ **Warning:** {}", or("Add your warning here")),
            Format::Table => TABLE_SKELETON.to_string(),
            Format::Image => format!("![{}](https://example.com/image.png)", or("alt text")),
            Format::Divider => "\n\n---\n\n".to_string(),
            Format::CodeBlock(language) => format!("```{}\n{}\n```", language, or("// code here")),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Bold => f.write_str("bold"),
            Format::Italic => f.write_str("italic"),
            Format::InlineCode => f.write_str("code"),
            Format::Link => f.write_str("link"),
            Format::Heading1 => f.write_str("h1"),
            Format::Heading2 => f.write_str("h2"),
            Format::Quote => f.write_str("quote"),
            Format::BulletList => f.write_str("list"),
            Format::OrderedList => f.write_str("ordered-list"),
            Format::InfoNote => f.write_str("info"),
            Format::WarningNote => f.write_str("warning"),
            Format::Table => f.write_str("table"),
            Format::Image => f.write_str("image"),
            Format::Divider => f.write_str("divider"),
            Format::CodeBlock(language) => write!(f, "codeblock:{}", language),
        }
    }
}

impl FromStr for Format {
    type Err = FolioError;

    /// Accepts the names printed by `Display`; `codeblock:<lang>` picks a language.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        if let Some(language) = name.strip_prefix("codeblock:") {
            return Ok(Format::CodeBlock(language.to_string()));
        }
        Ok(match name.as_str() {
            "bold" => Format::Bold,
            "italic" => Format::Italic,
            "code" => Format::InlineCode,
            "link" => Format::Link,
            "h1" => Format::Heading1,
            "h2" => Format::Heading2,
            "quote" => Format::Quote,
            "list" => Format::BulletList,
            "ordered-list" => Format::OrderedList,
            "info" => Format::InfoNote,
            "warning" => Format::WarningNote,
            "table" => Format::Table,
            "image" => Format::Image,
            "divider" => Format::Divider,
            "codeblock" => Format::CodeBlock("javascript".to_string()),
            _ => return Err(FolioError::invalid(format!("unknown format: {}", s))),
        })
    }
}

pub struct MarkdownSurface<C: Clock = SystemClock> {
    header_id: Uuid,
    text: String,
    history: History<String>,
    autosave: Autosave,
    mounted: bool,
    events: Vec<SurfaceEvent>,
    clock: C,
}

impl<C: Clock> MarkdownSurface<C> {
    pub fn open(header: &Header, clock: C, options: SurfaceOptions) -> Self {
        let text = header.content.clone();
        Self {
            header_id: header.id,
            history: History::with_debounce(text.clone(), options.history_debounce)
                .with_capacity(options.history_capacity),
            text,
            autosave: Autosave::new(options.autosave_delay),
            mounted: false,
            events: Vec::new(),
            clock,
        }
    }

    pub fn header_id(&self) -> Uuid {
        self.header_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_dirty(&self) -> bool {
        self.autosave.is_dirty()
    }

    pub fn drain_events(&mut self) -> Vec<SurfaceEvent> {
        std::mem::take(&mut self.events)
    }

    /// The preview pane.
    pub fn preview(&self) -> String {
        render_markdown(&self.text)
    }

    /// The textarea changed.
    pub fn input(&mut self, text: &str) {
        self.text = text.to_string();
        self.history.push_debounced(self.text.clone(), self.clock.now());
        self.changed();
    }

    /// Replace `selection` with the snippet for `format`.
    pub fn apply_format(&mut self, format: &Format, selection: Selection) -> Selection {
        let len = self.text.chars().count();
        let start = selection.start.min(len);
        let end = selection.end.clamp(start, len);
        let (start_byte, end_byte) = (byte_offset(&self.text, start), byte_offset(&self.text, end));

        let snippet = format.snippet(&self.text[start_byte..end_byte]);
        let mut next = String::with_capacity(self.text.len() + snippet.len());
        next.push_str(&self.text[..start_byte]);
        next.push_str(&snippet);
        next.push_str(&self.text[end_byte..]);

        self.text = next;
        self.history.push_immediate(self.text.clone());
        self.changed();
        Selection::new(start, start + snippet.chars().count())
    }

    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(text) => {
                self.text = text;
                self.changed();
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(text) => {
                self.text = text;
                self.changed();
                true
            }
            None => false,
        }
    }

    pub fn mount(&mut self) {
        self.mounted = true;
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
        self.history.discard_pending();
        self.autosave.cancel();
    }

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

    pub fn tick<W: HeaderWriter>(&mut self, writer: &mut W) {
        let now = self.clock.now();
        self.history.tick(now);
        if self.autosave.due(now) {
            let event = self.autosave.save(writer, self.header_id, &self.text);
            self.events.push(event);
        }
    }

    pub fn save_now<W: HeaderWriter>(&mut self, writer: &mut W) {
        self.history.flush();
        let event = self.autosave.save(writer, self.header_id, &self.text);
        self.events.push(event);
    }

    fn changed(&mut self) {
        self.events.push(SurfaceEvent::ContentChanged {
            header_id: self.header_id,
            content: self.text.clone(),
        });
        self.autosave.mark_dirty(self.clock.now());
    }
}

fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices().nth(chars).map(|(i, _)| i).unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::test_utils::RecordingWriter;

    fn surface(content: &str) -> (MarkdownSurface<ManualClock>, ManualClock) {
        let mut header = Header::new(Uuid::new_v4(), "Notes", None, 0);
        header.content = content.to_string();
        let clock = ManualClock::new();
        let mut surface = MarkdownSurface::open(&header, clock.clone(), SurfaceOptions::default());
        surface.mount();
        (surface, clock)
    }

    #[test]
    fn test_bold_wraps_selection() {
        let (mut surface, _) = surface("make this loud");
        let selection = surface.apply_format(&Format::Bold, Selection::new(10, 14));
        assert_eq!(surface.text(), "make this **loud**");
        assert_eq!(selection, Selection::new(10, 18));
    }

    #[test]
    fn test_empty_selection_uses_placeholder() {
        let (mut surface, _) = surface("");
        surface.apply_format(&Format::Link, Selection::caret(0));
        assert_eq!(surface.text(), "[link text](url)");
    }

    #[test]
    fn test_lists_prefix_each_line() {
        assert_eq!(Format::BulletList.snippet("a\nb"), "- a\n- b");
        assert_eq!(Format::OrderedList.snippet("a\nb"), "1. a\n2. b");
        assert_eq!(Format::OrderedList.snippet(""), "1. item");
    }

    #[test]
    fn test_code_block_and_notes() {
        assert_eq!(
            Format::CodeBlock("rust".to_string()).snippet(""),
            "```rust\n// code here\n```"
        );
        assert_eq!(Format::WarningNote.snippet("careful"), "> ⚠️ **Warning:** careful");
        assert_eq!("codeblock:python".parse::<Format>().unwrap(), Format::CodeBlock("python".to_string()));
        assert!("sparkles".parse::<Format>().is_err());
    }

    #[test]
    fn test_selection_counts_characters() {
        let (mut surface, _) = surface("héllo wörld");
        surface.apply_format(&Format::Italic, Selection::new(6, 11));
        assert_eq!(surface.text(), "héllo *wörld*");
    }

    #[test]
    fn test_format_is_one_undo_step() {
        let (mut surface, _) = surface("x");
        surface.apply_format(&Format::Heading1, Selection::new(0, 1));
        surface.apply_format(&Format::Divider, Selection::caret(3));
        assert!(surface.undo());
        assert_eq!(surface.text(), "# x");
        assert!(surface.undo());
        assert_eq!(surface.text(), "x");
        assert!(!surface.undo());
    }

    #[test]
    fn test_typing_then_autosave() {
        let (mut surface, clock) = surface("");
        let mut writer = RecordingWriter::default();
        surface.input("# T");
        clock.advance_ms(200);
        surface.input("# Title");
        clock.advance_ms(1500);
        surface.tick(&mut writer);

        assert_eq!(writer.last_content(), Some("# Title"));
        assert!(surface.handle_key(&KeyEvent::new("z").ctrl()));
        assert_eq!(surface.text(), "");
        assert!(surface.preview().is_empty());
    }
}
