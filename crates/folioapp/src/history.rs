//! # History Buffer
//!
//! Linear undo/redo over full document snapshots. The buffer is generic over
//! the snapshot type: the block surface stores `Vec<Block>`, the markdown
//! surface stores `String`.
//!
//! ## Model
//!
//! ```text
//! entries:  [s0] [s1] [s2] [s3]
//!                      ^
//!                   position
//! ```
//!
//! - The buffer starts with exactly one entry (the initial value) at position 0.
//! - A commit that differs from `entries[position]` truncates everything after
//!   `position` and appends. There is no redo-after-branch.
//! - Equality is structural (`PartialEq`), so a commit of an identical
//!   snapshot is ignored.
//!
//! ## Coalescing
//!
//! Typing produces a stream of snapshots. [`History::push_debounced`] keeps
//! only the latest one pending and commits it once the stream has been quiet
//! for the debounce window (300ms by default), so a burst of keystrokes is a
//! single undo step. Structural edits call [`History::push_immediate`], which
//! drops the pending value and commits at once.
//!
//! `undo` and `redo` flush a pending value first so an in-flight edit is
//! never lost when the user reaches for Ctrl+Z mid-burst.
//!
//! ## Capacity
//!
//! With a non-zero capacity the oldest entries are evicted once the buffer
//! grows past it. Zero means unbounded.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::clock::Debounce;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
pub struct History<T> {
    entries: VecDeque<T>,
    position: usize,
    pending: Debounce<T>,
    capacity: usize,
}

impl<T: Clone + PartialEq> History<T> {
    pub fn new(initial: T) -> Self {
        Self::with_debounce(initial, DEFAULT_DEBOUNCE)
    }

    pub fn with_debounce(initial: T, debounce: Duration) -> Self {
        let mut entries = VecDeque::new();
        entries.push_back(initial);
        Self {
            entries,
            position: 0,
            pending: Debounce::new(debounce),
            capacity: 0,
        }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self.evict();
        self
    }

    /// Schedule `value` as the pending snapshot, restarting the quiet period.
    pub fn push_debounced(&mut self, value: T, now: Instant) {
        self.pending.schedule(value, now);
    }

    /// Commit `value` now, discarding any pending snapshot.
    pub fn push_immediate(&mut self, value: T) {
        self.pending.cancel();
        self.commit(value);
    }

    /// Commit the pending snapshot if its quiet period is over.
    /// Returns true when an entry was added.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.pending.poll(now) {
            Some(value) => self.commit(value),
            None => false,
        }
    }

    /// Commit the pending snapshot regardless of its deadline.
    pub fn flush(&mut self) -> bool {
        match self.pending.flush() {
            Some(value) => self.commit(value),
            None => false,
        }
    }

    /// Drop the pending snapshot without committing it.
    pub fn discard_pending(&mut self) {
        self.pending.cancel();
    }

    pub fn undo(&mut self) -> Option<T> {
        self.flush();
        if self.position == 0 {
            return None;
        }
        self.position -= 1;
        self.entries.get(self.position).cloned()
    }

    pub fn redo(&mut self) -> Option<T> {
        self.flush();
        if self.position + 1 >= self.entries.len() {
            return None;
        }
        self.position += 1;
        self.entries.get(self.position).cloned()
    }

    pub fn can_undo(&self) -> bool {
        self.position > 0 || self.has_pending()
    }

    pub fn can_redo(&self) -> bool {
        self.position + 1 < self.entries.len()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_pending()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.deadline()
    }

    pub fn current(&self) -> Option<&T> {
        self.entries.get(self.position)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn commit(&mut self, value: T) -> bool {
        if self.current() == Some(&value) {
            return false;
        }
        self.entries.truncate(self.position + 1);
        self.entries.push_back(value);
        self.position = self.entries.len() - 1;
        self.evict();
        true
    }

    fn evict(&mut self) {
        if self.capacity == 0 {
            return;
        }
        while self.entries.len() > self.capacity && self.position > 0 {
            self.entries.pop_front();
            self.position -= 1;
        }
    }
}
