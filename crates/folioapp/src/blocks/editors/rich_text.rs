//! Externally edited markup regions.
//!
//! The core owns only the markup string. The host owns the editable surface
//! (a `contenteditable` element, a terminal widget, …) and asks this type what
//! to do with it:
//!
//! - on first mount the stored markup is written into the surface once;
//! - after that every input event makes the surface authoritative;
//! - a value arriving from elsewhere (undo, redo, a toolbar action) is written
//!   into the surface only when the user is not typing in it. While focused,
//!   the value is held back and handed out on blur.

/// What the host should do with its editable surface after an external change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionSync {
    Unchanged,
    /// Replace the surface's content with this markup.
    Write(String),
    /// The surface is focused; the markup is held until `blur`.
    Deferred,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RichTextRegion {
    markup: String,
    mounted: bool,
    focused: bool,
    deferred: Option<String>,
}

impl RichTextRegion {
    pub fn new(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
            ..Self::default()
        }
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Initial content for the surface. Only the first call returns a value.
    pub fn mount(&mut self) -> Option<String> {
        if self.mounted {
            return None;
        }
        self.mounted = true;
        Some(self.markup.clone())
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
        self.focused = false;
        self.deferred = None;
    }

    /// The user edited the surface; its markup is now authoritative.
    pub fn on_input(&mut self, markup: &str) {
        self.markup = markup.to_string();
        self.deferred = None;
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    /// Returns markup the host must now write into the surface, if a change
    /// arrived while it was focused.
    pub fn blur(&mut self) -> Option<String> {
        self.focused = false;
        let markup = self.deferred.take()?;
        self.markup = markup.clone();
        Some(markup)
    }

    pub fn external_update(&mut self, markup: &str) -> RegionSync {
        if markup == self.markup {
            self.deferred = None;
            return RegionSync::Unchanged;
        }
        if self.focused {
            self.deferred = Some(markup.to_string());
            return RegionSync::Deferred;
        }
        self.markup = markup.to_string();
        RegionSync::Write(self.markup.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_writes_once() {
        let mut region = RichTextRegion::new("<b>hi</b>");
        assert_eq!(region.mount(), Some("<b>hi</b>".to_string()));
        assert_eq!(region.mount(), None);
    }

    #[test]
    fn test_input_is_authoritative() {
        let mut region = RichTextRegion::new("a");
        region.mount();
        region.on_input("ab");
        assert_eq!(region.markup(), "ab");
        assert_eq!(region.external_update("ab"), RegionSync::Unchanged);
    }

    #[test]
    fn test_external_update_while_blurred_writes() {
        let mut region = RichTextRegion::new("a");
        assert_eq!(region.external_update("b"), RegionSync::Write("b".to_string()));
        assert_eq!(region.markup(), "b");
    }

    #[test]
    fn test_external_update_while_focused_waits_for_blur() {
        let mut region = RichTextRegion::new("draft");
        region.focus();
        assert_eq!(region.external_update("older"), RegionSync::Deferred);
        assert_eq!(region.markup(), "draft");
        assert_eq!(region.blur(), Some("older".to_string()));
        assert_eq!(region.markup(), "older");
    }

    #[test]
    fn test_typing_after_deferral_discards_it() {
        let mut region = RichTextRegion::new("draft");
        region.focus();
        region.external_update("older");
        region.on_input("draft!");
        assert_eq!(region.blur(), None);
        assert_eq!(region.markup(), "draft!");
    }
}
