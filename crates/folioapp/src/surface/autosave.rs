//! Dirty tracking and the debounced save.
//!
//! The timer carries no value. When it fires the surface serializes whatever
//! is live at that moment, so edits made while a save was pending are never
//! lost to a stale snapshot. A failed save leaves the section dirty; the next
//! edit restarts the timer.

use std::time::{Duration, Instant};
use tracing::{debug, warn};
use uuid::Uuid;

use super::SurfaceEvent;
use crate::clock::Debounce;
use crate::commands::Notice;
use crate::ports::HeaderWriter;

pub const DEFAULT_AUTOSAVE_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone)]
pub struct Autosave {
    dirty: bool,
    timer: Debounce<()>,
}

impl Default for Autosave {
    fn default() -> Self {
        Self::new(DEFAULT_AUTOSAVE_DELAY)
    }
}

impl Autosave {
    pub fn new(delay: Duration) -> Self {
        Self {
            dirty: false,
            timer: Debounce::new(delay),
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_pending(&self) -> bool {
        self.timer.is_pending()
    }

    /// Mark the section dirty and restart the quiet period.
    pub fn mark_dirty(&mut self, now: Instant) {
        self.dirty = true;
        self.timer.schedule((), now);
    }

    /// True once when the quiet period has passed.
    pub fn due(&mut self, now: Instant) -> bool {
        self.timer.poll(now).is_some()
    }

    pub fn cancel(&mut self) {
        self.timer.cancel();
    }

    /// Write `content` and report the outcome as an event.
    pub fn save<W: HeaderWriter>(&mut self, writer: &mut W, header_id: Uuid, content: &str) -> SurfaceEvent {
        self.timer.cancel();
        match writer.write_content(header_id, content) {
            Ok(()) => {
                self.dirty = false;
                debug!(header = %header_id, bytes = content.len(), "section saved");
                SurfaceEvent::Saved { header_id }
            }
            Err(err) => {
                warn!(header = %header_id, "autosave failed: {}", err);
                SurfaceEvent::Notice(Notice::error("Failed to save"))
            }
        }
    }
}
