//! Bridge placement for merged received bubbles.
//!
//! Bubbles in a merged received run are walked in triads: the first of each
//! triad bridges down to the next bubble, the second is the long anchor and
//! never bridges, the third bridges up to the previous bubble. A bridge only
//! appears when the two widths differ by at least [`MIN_WIDTH_DIFF`].

use std::ops::Range;

use crate::bubble::{Bridge, BridgeDirection, BubbleId, BubbleRecord, SenderKind};

/// Smallest width difference that gets a bridge.
pub const MIN_WIDTH_DIFF: f32 = 10.0;
/// Width difference above which the bridge stops growing.
pub const MAX_WIDTH_DIFF: f32 = 36.0;
/// Bridge size relative to the (capped) width difference.
pub const BRIDGE_FACTOR: f32 = 0.9;

/// Bridge size for a width difference, or `None` below the threshold.
pub fn bridge_magnitude(diff: f32) -> Option<f32> {
    let diff = diff.abs();
    if diff < MIN_WIDTH_DIFF {
        return None;
    }
    Some(diff.min(MAX_WIDTH_DIFF) * BRIDGE_FACTOR)
}

fn is_bridge_candidate(record: &BubbleRecord) -> bool {
    record.is_merged() && record.sender() == SenderKind::Received
}

/// Maximal runs of physically adjacent merged received bubbles.
///
/// Group boundaries are ignored: two merged received groups that touch form
/// one run. Runs shorter than two are dropped.
pub fn bridge_runs(records: &[BubbleRecord]) -> Vec<Range<usize>> {
    let mut runs = Vec::new();
    let mut start: Option<usize> = None;

    for (idx, record) in records.iter().enumerate() {
        match (start, is_bridge_candidate(record)) {
            (None, true) => start = Some(idx),
            (Some(s), false) => {
                if idx - s >= 2 {
                    runs.push(s..idx);
                }
                start = None;
            }
            _ => {}
        }
    }

    if let Some(s) = start {
        if records.len() - s >= 2 {
            runs.push(s..records.len());
        }
    }

    runs
}

fn bridge_between(own: Option<f32>, other: Option<f32>) -> Option<f32> {
    let (own, other) = (own?, other?);
    bridge_magnitude(own - other)
}

/// Clear every bridge and recompute them from scratch.
///
/// Returns the ids of the bubbles that received a (hidden) bridge, which the
/// caller reveals after a short delay.
pub fn update_bridges(records: &mut [BubbleRecord]) -> Vec<BubbleId> {
    for record in records.iter_mut() {
        record.bridge = None;
    }

    let mut bridged = Vec::new();

    for run in bridge_runs(records) {
        for idx in run.clone() {
            let pos = idx - run.start;
            let assigned = match pos % 3 {
                0 if idx + 1 < run.end => {
                    bridge_between(records[idx].width, records[idx + 1].width)
                        .map(|m| Bridge::new(BridgeDirection::Down, m))
                }
                2 => bridge_between(records[idx].width, records[idx - 1].width)
                    .map(|m| Bridge::new(BridgeDirection::Up, m)),
                _ => None,
            };

            if let Some(bridge) = assigned {
                records[idx].bridge = Some(bridge);
                bridged.push(records[idx].id);
            }
        }
    }

    bridged
}

/// Make the bridges of the given bubbles visible.
///
/// Ids that no longer carry a bridge are skipped. Returns how many bridges
/// were revealed.
pub fn reveal_bridges(records: &mut [BubbleRecord], ids: &[BubbleId]) -> usize {
    let mut revealed = 0;
    for record in records.iter_mut().filter(|r| ids.contains(&r.id)) {
        if let Some(bridge) = record.bridge.as_mut() {
            bridge.visible = true;
            revealed += 1;
        }
    }
    revealed
}
