//! Integration tests for liquid-chat
//!
//! These tests exercise full conversations across the engine, grouping,
//! bridge and script modules, driving time by hand.

use std::time::{Duration, Instant};

use crate::bubble::{BridgeDirection, Role, SenderKind};
use crate::engine::{ChatEngine, EngineConfig, EngineEvent};
use crate::script::Script;

const MS: Duration = Duration::from_millis(1);

fn engine() -> ChatEngine {
    ChatEngine::new(EngineConfig::default())
}

/// Feed a script into the engine the way the backend would deliver it.
fn deliver(engine: &mut ChatEngine, script: &Script, generation: u64, start: Instant) {
    for line in &script.lines {
        engine.receive(generation, &line.text, start + line.delay);
    }
}

fn roles(engine: &ChatEngine) -> Vec<Role> {
    engine.records().iter().map(|r| r.role).collect()
}

#[test]
fn test_quick_pair_merges_into_one_group() {
    let mut engine = engine();
    let t0 = Instant::now();

    engine.send("hello", t0);
    engine.send("world", t0 + 400 * MS);

    // Debounced: the timer restarted with the second message
    engine.tick(t0 + 1000 * MS);
    assert_eq!(roles(&engine), vec![Role::None, Role::None]);

    engine.tick(t0 + 1400 * MS);
    assert_eq!(roles(&engine), vec![Role::First, Role::Last]);
    assert!(engine.records()[0].timestamp.is_none());
    assert!(engine.records()[1].timestamp.is_some());
}

#[test]
fn test_slow_pair_merges_on_the_second_pass() {
    let mut engine = engine();
    let t0 = Instant::now();

    engine.send("hello", t0);
    engine.tick(t0 + 1000 * MS);
    // The first pass leaves the lone message unmerged
    assert_eq!(roles(&engine), vec![Role::None]);

    engine.send("world", t0 + 1200 * MS);
    engine.tick(t0 + 1300 * MS);
    assert_eq!(roles(&engine), vec![Role::None, Role::None]);

    // Unmerged singles are not boundaries: the next pass absorbs "hello"
    engine.tick(t0 + 2200 * MS);
    assert_eq!(roles(&engine), vec![Role::First, Role::Last]);
    assert!(engine.records()[0].timestamp.is_none());
    assert!(engine.records()[1].timestamp.is_some());
}

#[test]
fn test_other_sender_keeps_earlier_single_alone() {
    let mut engine = engine();
    let generation = engine.generation();
    let t0 = Instant::now();

    engine.send("hello", t0);
    engine.tick(t0 + 1000 * MS);
    engine.receive(generation, "hey", t0 + 1100 * MS);
    engine.send("world", t0 + 1200 * MS);
    engine.tick(t0 + 2200 * MS);

    assert_eq!(roles(&engine), vec![Role::None, Role::None, Role::None]);
    assert!(engine.records().iter().all(|r| r.timestamp.is_none()));
}

#[test]
fn test_long_run_gets_first_middles_last() {
    let mut engine = engine();
    let t0 = Instant::now();

    for i in 0..5u32 {
        engine.send(&format!("line {i}"), t0 + i * 100 * MS);
    }
    engine.tick(t0 + 1400 * MS);

    assert_eq!(
        roles(&engine),
        vec![Role::First, Role::Middle, Role::Middle, Role::Middle, Role::Last]
    );
    let stamped: Vec<bool> = engine
        .records()
        .iter()
        .map(|r| r.timestamp.is_some())
        .collect();
    assert_eq!(stamped, vec![false, false, false, false, true]);
}

#[test]
fn test_interleaved_senders_only_group_their_runs() {
    let mut engine = engine();
    let generation = engine.generation();
    let t0 = Instant::now();

    engine.send("one", t0);
    engine.receive(generation, "reply", t0 + 100 * MS);
    engine.send("two", t0 + 200 * MS);
    engine.send("three", t0 + 300 * MS);
    engine.tick(t0 + 1300 * MS);

    assert_eq!(
        roles(&engine),
        vec![Role::None, Role::None, Role::First, Role::Last]
    );
}

#[test]
fn test_second_pass_changes_nothing() {
    let mut engine = engine();
    let t0 = Instant::now();

    engine.send("a", t0);
    engine.send("b", t0 + 10 * MS);
    engine.tick(t0 + 1010 * MS);
    let before: Vec<_> = engine
        .records()
        .iter()
        .map(|r| (r.role, r.timestamp.clone()))
        .collect();

    engine.merge_now(t0 + 5000 * MS);
    let after: Vec<_> = engine
        .records()
        .iter()
        .map(|r| (r.role, r.timestamp.clone()))
        .collect();
    assert_eq!(before, after);
}

#[test]
fn test_merged_group_is_a_hard_boundary() {
    let mut engine = engine();
    let t0 = Instant::now();

    engine.send("a", t0);
    engine.send("b", t0 + 10 * MS);
    engine.tick(t0 + 1010 * MS);

    // Two later messages from the same sender form their own group
    engine.send("c", t0 + 2000 * MS);
    engine.send("d", t0 + 2010 * MS);
    engine.tick(t0 + 3010 * MS);

    assert_eq!(
        roles(&engine),
        vec![Role::First, Role::Last, Role::First, Role::Last]
    );
    let stamped = engine
        .records()
        .iter()
        .filter(|r| r.timestamp.is_some())
        .count();
    assert_eq!(stamped, 2);
}

#[test]
fn test_seed_conversation_merges_and_bridges() {
    let mut engine = engine();
    let t0 = Instant::now();
    let generation = engine.generation();
    deliver(&mut engine, &Script::seed(), generation, t0);

    // Widths come back from the first rendered frame
    let ids: Vec<_> = engine.records().iter().map(|r| r.id).collect();
    for (id, width) in ids.iter().zip([60.0, 150.0, 100.0]) {
        engine.set_width(*id, width);
    }

    let events = engine.tick(t0 + 1600 * MS);
    assert!(events.contains(&EngineEvent::Merged {
        groups: 1,
        bubbles: 3
    }));
    assert_eq!(roles(&engine), vec![Role::First, Role::Middle, Role::Last]);

    let bridges: Vec<_> = engine.records().iter().map(|r| r.bridge).collect();
    let down = bridges[0].expect("first bubble bridges down");
    assert_eq!(down.direction, BridgeDirection::Down);
    assert!((down.magnitude - 32.4).abs() < 1e-4);
    assert!(!down.visible);
    assert!(bridges[1].is_none());
    let up = bridges[2].expect("third bubble bridges up");
    assert_eq!(up.direction, BridgeDirection::Up);

    let events = engine.tick(t0 + 1650 * MS);
    assert!(events.contains(&EngineEvent::BridgesRevealed { count: 2 }));
    assert!(engine
        .records()
        .iter()
        .filter_map(|r| r.bridge)
        .all(|b| b.visible));
}

#[test]
fn test_sent_groups_never_bridge() {
    let mut engine = engine();
    let t0 = Instant::now();

    engine.send("short", t0);
    engine.send("a much longer sentence", t0 + 10 * MS);
    let ids: Vec<_> = engine.records().iter().map(|r| r.id).collect();
    engine.set_width(ids[0], 50.0);
    engine.set_width(ids[1], 200.0);
    engine.tick(t0 + 1010 * MS);

    assert!(engine.records().iter().all(|r| r.bridge.is_none()));
}

#[test]
fn test_reset_leaves_only_the_seed() {
    let mut engine = engine();
    let t0 = Instant::now();
    let old_generation = engine.generation();

    engine.send("before reset", t0);
    deliver(&mut engine, &Script::demo(), old_generation, t0);
    engine.tick(t0 + 1600 * MS);

    let generation = engine.reset();
    assert!(engine.is_empty());
    assert!(!engine.merge_pending());
    assert_eq!(engine.next_deadline(), None);

    // A script started before the reset still delivering
    let t1 = t0 + 2000 * MS;
    deliver(&mut engine, &Script::demo(), old_generation, t1);
    deliver(&mut engine, &Script::seed(), generation, t1);
    engine.tick(t1 + 1600 * MS);

    let texts: Vec<_> = engine.records().iter().map(|r| r.text().to_string()).collect();
    let seed: Vec<_> = Script::seed().lines.into_iter().map(|l| l.text).collect();
    assert_eq!(texts, seed);
    assert!(engine
        .records()
        .iter()
        .all(|r| r.sender() == SenderKind::Received));
}

#[test]
fn test_blank_input_adds_nothing() {
    let mut engine = engine();
    let t0 = Instant::now();

    assert_eq!(engine.send("   ", t0), None);
    assert!(engine.is_empty());
    assert!(!engine.merge_pending());
}
