//! # Clocks and Debounced Deadlines
//!
//! Editing surfaces run three timers: history coalescing, autosave and the
//! navbar width write. None of them own a thread or an async runtime. Each
//! timer is a [`Debounce`], a pending value plus a deadline, and the host
//! drives time forward by calling the surface's `tick()`:
//!
//! ```text
//! edit ──► schedule(value, now)        deadline = now + delay (restarted)
//! tick ──► poll(now)                   Some(value) once now >= deadline
//! undo ──► flush()                     Some(value) regardless of deadline
//! teardown ──► cancel()                value discarded
//! ```
//!
//! Time comes from a [`Clock`]. Production code uses [`SystemClock`]; tests
//! use [`ManualClock`], whose clones share one instant so a test can advance
//! time observed by a surface it has handed the clock to.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

/// A value waiting for a quiet period before it takes effect.
#[derive(Debug, Clone)]
pub struct Debounce<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debounce<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replace the pending value and restart the timer.
    pub fn schedule(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.delay));
    }

    /// Take the pending value if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, deadline)) if *deadline <= now => self.pending.take().map(|(value, _)| value),
            _ => None,
        }
    }

    /// Take the pending value immediately.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    pub fn peek(&self) -> Option<&T> {
        self.pending.as_ref().map(|(value, _)| value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_before_and_after_deadline() {
        let clock = ManualClock::new();
        let mut timer = Debounce::new(Duration::from_millis(300));
        timer.schedule("a", clock.now());

        clock.advance_ms(299);
        assert_eq!(timer.poll(clock.now()), None);
        clock.advance_ms(1);
        assert_eq!(timer.poll(clock.now()), Some("a"));
        assert!(!timer.is_pending());
    }

    #[test]
    fn test_schedule_restarts_deadline() {
        let clock = ManualClock::new();
        let mut timer = Debounce::new(Duration::from_millis(300));
        timer.schedule(1, clock.now());
        clock.advance_ms(200);
        timer.schedule(2, clock.now());
        clock.advance_ms(200);
        assert_eq!(timer.poll(clock.now()), None);
        clock.advance_ms(100);
        assert_eq!(timer.poll(clock.now()), Some(2));
    }

    #[test]
    fn test_flush_and_cancel() {
        let clock = ManualClock::new();
        let mut timer = Debounce::new(Duration::from_millis(300));
        timer.schedule(7, clock.now());
        assert_eq!(timer.flush(), Some(7));
        assert_eq!(timer.flush(), None);

        timer.schedule(8, clock.now());
        timer.cancel();
        clock.advance_ms(1000);
        assert_eq!(timer.poll(clock.now()), None);
    }

    #[test]
    fn test_manual_clock_clones_share_time() {
        let clock = ManualClock::new();
        let other = clock.clone();
        let start = other.now();
        clock.advance_ms(50);
        assert_eq!(other.now() - start, Duration::from_millis(50));
    }
}
