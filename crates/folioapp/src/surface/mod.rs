//! # Editing Surfaces
//!
//! A surface holds the live content of the one section that is open, its undo
//! history and its autosave timer. Two kinds exist:
//!
//! - [`DocumentSurface`]: block content (`Vec<Block>` snapshots)
//! - [`MarkdownSurface`]: legacy or freeform markdown (`String` snapshots)
//!
//! Both follow the same contract:
//!
//! ```text
//! mutation ──► live state ──► history (immediate or debounced)
//!                  │
//!                  ├──► SurfaceEvent::ContentChanged   (host updates the header)
//!                  └──► autosave.mark_dirty            (1500ms, restarted)
//!
//! tick(writer) ──► history commit when quiet
//!              └─► autosave fires: write the latest snapshot through the writer
//! ```
//!
//! Undo and redo go through the same notify and dirty path as direct edits.
//!
//! Surfaces never block and own no threads. The host calls `tick()` from its
//! event loop, `handle_key()` from its key handler while mounted, and drains
//! [`SurfaceEvent`]s after each call.

use uuid::Uuid;

use crate::blocks::editors::RegionSync;
use crate::commands::Notice;
use crate::config::FolioConfig;
use std::time::Duration;

pub mod autosave;
pub mod document;
pub mod keyboard;
pub mod markdown;

pub use autosave::{Autosave, DEFAULT_AUTOSAVE_DELAY};
pub use document::DocumentSurface;
pub use keyboard::{KeyEvent, Shortcut};
pub use markdown::{Format, MarkdownSurface, Selection};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// The section's serialized content changed.
    ContentChanged { header_id: Uuid, content: String },
    /// A prose block's editable region should be updated by the host.
    Region { block_id: String, sync: RegionSync },
    /// An autosave completed.
    Saved { header_id: Uuid },
    Notice(Notice),
}

/// Timer settings shared by both surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceOptions {
    pub autosave_delay: Duration,
    pub history_debounce: Duration,
    pub history_capacity: usize,
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        Self {
            autosave_delay: DEFAULT_AUTOSAVE_DELAY,
            history_debounce: crate::history::DEFAULT_DEBOUNCE,
            history_capacity: 500,
        }
    }
}

impl From<&FolioConfig> for SurfaceOptions {
    fn from(config: &FolioConfig) -> Self {
        Self {
            autosave_delay: config.autosave_delay(),
            history_debounce: config.history_debounce(),
            history_capacity: config.history_capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_follow_config() {
        let config = FolioConfig {
            autosave_ms: 50,
            history_capacity: 3,
            ..FolioConfig::default()
        };
        let options = SurfaceOptions::from(&config);
        assert_eq!(options.autosave_delay, Duration::from_millis(50));
        assert_eq!(options.history_capacity, 3);
        assert_eq!(SurfaceOptions::from(&FolioConfig::default()), SurfaceOptions::default());
    }
}
