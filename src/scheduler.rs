//! Deferred work driven by the UI frame clock.
//!
//! Nothing here spawns threads or timers: callers pass the current `Instant`
//! and poll once per frame. `next_due` lets the UI ask for a repaint exactly
//! when the next deadline passes.

use std::time::{Duration, Instant};

/// A single cancellable deadline. Scheduling again replaces the pending one.
#[derive(Debug, Default, Clone)]
pub struct DeferredTask {
    due: Option<Instant>,
}

impl DeferredTask {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule the task `delay` after `now`, replacing any pending deadline.
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.due = Some(now + delay);
    }

    /// Cancel the pending deadline. Safe to call when nothing is pending.
    pub fn cancel(&mut self) {
        self.due = None;
    }

    pub fn is_pending(&self) -> bool {
        self.due.is_some()
    }

    pub fn due(&self) -> Option<Instant> {
        self.due
    }

    /// Consume the deadline if it has passed. Returns true exactly once per
    /// scheduled deadline.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }
}

/// Fire-and-forget deadlines carrying a payload. Entries cannot be cancelled
/// individually; `clear` drops them all.
#[derive(Debug, Clone)]
pub struct DelayQueue<T> {
    entries: Vec<(Instant, T)>,
}

impl<T> Default for DelayQueue<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> DelayQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, now: Instant, delay: Duration, item: T) {
        self.entries.push((now + delay, item));
    }

    /// Remove and return every payload whose deadline has passed, in the
    /// order they were pushed.
    pub fn drain_due(&mut self, now: Instant) -> Vec<T> {
        let mut due = Vec::new();
        let mut pending = Vec::with_capacity(self.entries.len());
        for (deadline, item) in self.entries.drain(..) {
            if now >= deadline {
                due.push(item);
            } else {
                pending.push((deadline, item));
            }
        }
        self.entries = pending;
        due
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.entries.iter().map(|(deadline, _)| *deadline).min()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
