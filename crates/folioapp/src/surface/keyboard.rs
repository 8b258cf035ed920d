//! Undo and redo shortcuts.
//!
//! Ctrl and Cmd are interchangeable. `Z` undoes, `Y` or `Shift+Z` redoes.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn shift(mut self) -> Self {
        self.shift = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Undo,
    Redo,
}

impl Shortcut {
    pub fn from_event(event: &KeyEvent) -> Option<Shortcut> {
        if !(event.ctrl || event.meta) {
            return None;
        }
        match event.key.to_ascii_lowercase().as_str() {
            "z" if event.shift => Some(Shortcut::Redo),
            "z" => Some(Shortcut::Undo),
            "y" => Some(Shortcut::Redo),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcuts() {
        assert_eq!(Shortcut::from_event(&KeyEvent::new("z").ctrl()), Some(Shortcut::Undo));
        assert_eq!(Shortcut::from_event(&KeyEvent::new("z").meta()), Some(Shortcut::Undo));
        assert_eq!(Shortcut::from_event(&KeyEvent::new("Z").ctrl().shift()), Some(Shortcut::Redo));
        assert_eq!(Shortcut::from_event(&KeyEvent::new("y").meta()), Some(Shortcut::Redo));
        assert_eq!(Shortcut::from_event(&KeyEvent::new("z")), None);
        assert_eq!(Shortcut::from_event(&KeyEvent::new("s").ctrl()), None);
    }
}
