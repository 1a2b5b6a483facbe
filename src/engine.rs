//! The bubble grouping engine.
//!
//! `ChatEngine` owns the record list and every piece of deferred work that
//! acts on it: the debounced merge timer, the staged bridge reveals and the
//! bridge refresh that follows each entrance animation. It is owned by the
//! app and driven by [`ChatEngine::tick`] once per frame.

use std::time::{Duration, Instant};

use chrono::Local;
use tracing::debug;

use crate::bridges;
use crate::bubble::{BubbleId, BubbleRecord, Message, SenderKind};
use crate::config::Settings;
use crate::grouping;
use crate::scheduler::{DeferredTask, DelayQueue};

/// Default debounce between the last message and the grouping pass.
pub const DEFAULT_MERGE_DELAY: Duration = Duration::from_millis(1000);
/// Default delay before freshly assigned bridges become visible.
pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(50);
/// Length of the bubble entrance animation.
pub const ENTRANCE_DURATION: Duration = Duration::from_millis(400);

/// Timing knobs of the engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineConfig {
    pub merge_delay: Duration,
    pub bridge_reveal_delay: Duration,
    pub entrance_duration: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            merge_delay: DEFAULT_MERGE_DELAY,
            bridge_reveal_delay: DEFAULT_REVEAL_DELAY,
            entrance_duration: ENTRANCE_DURATION,
        }
    }
}

impl From<&Settings> for EngineConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            merge_delay: Duration::from_millis(settings.merge_delay_ms),
            bridge_reveal_delay: Duration::from_millis(settings.bridge_reveal_delay_ms),
            ..Self::default()
        }
    }
}

/// Something the engine did during a tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineEvent {
    /// A grouping pass merged `groups` new groups covering `bubbles` bubbles.
    Merged { groups: usize, bubbles: usize },
    /// Bridges were recomputed; `count` bubbles carry one.
    BridgesUpdated { count: usize },
    /// Previously assigned bridges became visible.
    BridgesRevealed { count: usize },
}

pub struct ChatEngine {
    records: Vec<BubbleRecord>,
    next_id: BubbleId,
    /// Bumped by every reset; scripted arrivals carry it.
    generation: u64,
    config: EngineConfig,
    merge_timer: DeferredTask,
    reveals: DelayQueue<Vec<BubbleId>>,
    entrances: DelayQueue<BubbleId>,
}

impl Default for ChatEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl ChatEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
            generation: 0,
            config,
            merge_timer: DeferredTask::new(),
            reveals: DelayQueue::new(),
            entrances: DelayQueue::new(),
        }
    }

    pub fn records(&self) -> &[BubbleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn merge_pending(&self) -> bool {
        self.merge_timer.is_pending()
    }

    /// Append a message and restart the merge timer.
    ///
    /// A merge that came due before `now` runs first, so a late frame cannot
    /// fold the new message into a group that should already be closed.
    pub fn add_message(
        &mut self,
        text: impl Into<String>,
        sender: SenderKind,
        now: Instant,
    ) -> BubbleId {
        if self.merge_timer.fire_if_due(now) {
            self.merge_now(now);
        }

        let id = self.next_id;
        self.next_id += 1;

        self.records
            .push(BubbleRecord::new(id, Message::new(text, sender), now));

        self.merge_timer.schedule(now, self.config.merge_delay);
        self.entrances.push(now, self.config.entrance_duration, id);

        debug!(id, %sender, total = self.records.len(), "bubble added");
        id
    }

    /// Send a locally typed message. Blank input is ignored.
    pub fn send(&mut self, text: &str, now: Instant) -> Option<BubbleId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(self.add_message(text, SenderKind::Sent, now))
    }

    /// Accept a message from the peer. Arrivals scripted before the last
    /// reset are dropped.
    pub fn receive(&mut self, generation: u64, text: &str, now: Instant) -> Option<BubbleId> {
        if generation != self.generation {
            debug!(generation, current = self.generation, "dropping stale arrival");
            return None;
        }
        Some(self.add_message(text, SenderKind::Received, now))
    }

    /// Record the rendered width of a bubble (unscaled, timestamp excluded).
    /// Returns false for unknown ids.
    pub fn set_width(&mut self, id: BubbleId, width: f32) -> bool {
        match self.records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                record.width = Some(width);
                true
            }
            None => false,
        }
    }

    /// Run all deferred work that is due at `now`.
    pub fn tick(&mut self, now: Instant) -> Vec<EngineEvent> {
        let mut events = Vec::new();

        if self.merge_timer.fire_if_due(now) {
            events.extend(self.merge_now(now));
        } else if !self.entrances.drain_due(now).is_empty() {
            events.push(self.refresh_bridges(now));
        }

        let due = self.reveals.drain_due(now);
        if !due.is_empty() {
            let ids: Vec<BubbleId> = due.into_iter().flatten().collect();
            let count = bridges::reveal_bridges(&mut self.records, &ids);
            events.push(EngineEvent::BridgesRevealed { count });
        }

        events
    }

    /// Run the grouping pass immediately, then recompute bridges.
    pub fn merge_now(&mut self, now: Instant) -> Vec<EngineEvent> {
        // A merge already covers the bridge refresh of settled entrances.
        self.entrances.drain_due(now);

        let stamp = Local::now().format("%H:%M").to_string();
        let merged = grouping::merge_groups(&mut self.records, &stamp);
        let bubbles = merged.iter().map(|run| run.len()).sum();
        debug!(groups = merged.len(), bubbles, "grouping pass");

        vec![
            EngineEvent::Merged {
                groups: merged.len(),
                bubbles,
            },
            self.refresh_bridges(now),
        ]
    }

    /// Recompute every bridge and schedule their reveal.
    pub fn refresh_bridges(&mut self, now: Instant) -> EngineEvent {
        let bridged = bridges::update_bridges(&mut self.records);
        let count = bridged.len();
        if !bridged.is_empty() {
            self.reveals
                .push(now, self.config.bridge_reveal_delay, bridged);
        }
        debug!(count, "bridges updated");
        EngineEvent::BridgesUpdated { count }
    }

    /// Drop every record and all pending work. Returns the new generation,
    /// which the caller hands to the seed script.
    pub fn reset(&mut self) -> u64 {
        self.merge_timer.cancel();
        self.reveals.clear();
        self.entrances.clear();
        self.records.clear();
        self.generation += 1;
        debug!(generation = self.generation, "engine reset");
        self.generation
    }

    /// Earliest instant at which `tick` has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        [
            self.merge_timer.due(),
            self.reveals.next_due(),
            self.entrances.next_due(),
        ]
        .into_iter()
        .flatten()
        .min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bubble::{BridgeDirection, Role};

    const MS: Duration = Duration::from_millis(1);

    fn roles(engine: &ChatEngine) -> Vec<Role> {
        engine.records().iter().map(|r| r.role).collect()
    }

    #[test]
    fn test_burst_merges_after_delay() {
        let t0 = Instant::now();
        let mut engine = ChatEngine::default();
        engine.send("one", t0);
        engine.send("two", t0 + 300 * MS);
        engine.send("three", t0 + 600 * MS);

        // 1000ms after the first message, but only 400ms after the last
        engine.tick(t0 + 1000 * MS);
        assert!(engine.records().iter().all(|r| !r.is_merged()));

        let events = engine.tick(t0 + 1600 * MS);
        assert!(events.contains(&EngineEvent::Merged {
            groups: 1,
            bubbles: 3
        }));
        assert_eq!(roles(&engine), vec![Role::First, Role::Middle, Role::Last]);
        assert!(engine.records()[2].timestamp.is_some());
        assert!(engine.records()[..2].iter().all(|r| r.timestamp.is_none()));
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let t0 = Instant::now();
        let mut engine = ChatEngine::default();
        assert_eq!(engine.send("   ", t0), None);
        assert_eq!(engine.send("", t0), None);
        assert!(engine.is_empty());
        assert!(!engine.merge_pending());
    }

    #[test]
    fn test_send_trims_text() {
        let mut engine = ChatEngine::default();
        engine.send("  hello \n", Instant::now());
        assert_eq!(engine.records()[0].text(), "hello");
    }

    #[test]
    fn test_overdue_merge_runs_before_late_message() {
        let t0 = Instant::now();
        let mut engine = ChatEngine::default();
        engine.send("a", t0);
        engine.send("b", t0 + 100 * MS);

        // The merge came due at 1100ms but no frame ticked before this one
        engine.send("c", t0 + 1150 * MS);
        assert_eq!(roles(&engine), vec![Role::First, Role::Last, Role::None]);
        assert!(engine.merge_pending());

        engine.tick(t0 + 2150 * MS);
        assert_eq!(roles(&engine), vec![Role::First, Role::Last, Role::None]);
    }

    #[test]
    fn test_ids_are_unique_across_reset() {
        let t0 = Instant::now();
        let mut engine = ChatEngine::default();
        let a = engine.send("a", t0).unwrap();
        engine.reset();
        let b = engine.send("b", t0).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_stale_arrivals_are_dropped() {
        let t0 = Instant::now();
        let mut engine = ChatEngine::default();
        let old = engine.generation();
        let new = engine.reset();
        assert_eq!(engine.receive(old, "late", t0), None);
        assert!(engine.receive(new, "fresh", t0).is_some());
        assert_eq!(engine.len(), 1);
    }

    #[test]
    fn test_reset_cancels_pending_merge() {
        let t0 = Instant::now();
        let mut engine = ChatEngine::default();
        engine.send("a", t0);
        engine.send("b", t0);
        engine.reset();
        assert!(!engine.merge_pending());
        assert_eq!(engine.next_deadline(), None);
        assert!(engine.tick(t0 + 5000 * MS).is_empty());
    }

    #[test]
    fn test_bridges_reveal_after_delay() {
        let t0 = Instant::now();
        let mut engine = ChatEngine::default();
        let gen = engine.generation();
        let a = engine.receive(gen, "lol", t0).unwrap();
        let b = engine.receive(gen, "hahahahahaha", t0).unwrap();
        engine.set_width(a, 40.0);
        engine.set_width(b, 120.0);

        let merge_at = t0 + 1000 * MS;
        let events = engine.tick(merge_at);
        assert!(events.contains(&EngineEvent::BridgesUpdated { count: 1 }));

        let bridge = engine.records()[0].bridge.expect("bridge assigned");
        assert_eq!(bridge.direction, BridgeDirection::Down);
        assert!(!bridge.visible);

        engine.tick(merge_at + 49 * MS);
        assert!(!engine.records()[0].bridge.unwrap().visible);

        let events = engine.tick(merge_at + 50 * MS);
        assert!(events.contains(&EngineEvent::BridgesRevealed { count: 1 }));
        assert!(engine.records()[0].bridge.unwrap().visible);
    }

    #[test]
    fn test_entrance_completion_refreshes_bridges() {
        let t0 = Instant::now();
        let mut engine = ChatEngine::default();
        let gen = engine.generation();
        let a = engine.receive(gen, "a", t0).unwrap();
        let b = engine.receive(gen, "bbbbbbbb", t0).unwrap();
        engine.set_width(a, 30.0);
        engine.set_width(b, 90.0);
        engine.tick(t0 + 1000 * MS);
        engine.tick(t0 + 1050 * MS);

        // a later sent bubble settles and triggers a fresh bridge pass
        engine.send("hey", t0 + 2000 * MS);
        let events = engine.tick(t0 + 2400 * MS);
        assert_eq!(events, vec![EngineEvent::BridgesUpdated { count: 1 }]);
    }

    #[test]
    fn test_next_deadline_tracks_merge_timer() {
        let t0 = Instant::now();
        let mut engine = ChatEngine::default();
        engine.send("a", t0);
        assert_eq!(engine.next_deadline(), Some(t0 + 400 * MS));
        engine.tick(t0 + 400 * MS);
        assert_eq!(engine.next_deadline(), Some(t0 + 1000 * MS));
    }

    #[test]
    fn test_set_width_unknown_id() {
        let mut engine = ChatEngine::default();
        assert!(!engine.set_width(7, 10.0));
    }

    #[test]
    fn test_config_from_settings() {
        let settings = Settings {
            merge_delay_ms: 250,
            bridge_reveal_delay_ms: 10,
            ..Settings::default()
        };
        let config = EngineConfig::from(&settings);
        assert_eq!(config.merge_delay, 250 * MS);
        assert_eq!(config.bridge_reveal_delay, 10 * MS);
        assert_eq!(config.entrance_duration, ENTRANCE_DURATION);
    }
}
