//! Grouping of consecutive same-sender bubbles into merged runs.

use std::ops::Range;

use crate::bubble::{BubbleRecord, Role};

/// Minimum run length for a group to be merged.
pub const MIN_GROUP_LEN: usize = 2;

/// Partition the unmerged records into maximal runs of the same sender.
///
/// Already merged records act as hard boundaries: they end the current run
/// and never join a new one. Runs of any length are returned, singletons
/// included; callers decide what to do with short runs.
pub fn group_consecutive(records: &[BubbleRecord]) -> Vec<Range<usize>> {
    let mut groups: Vec<Range<usize>> = Vec::new();
    let mut current: Option<Range<usize>> = None;

    for (idx, record) in records.iter().enumerate() {
        if record.is_merged() {
            if let Some(run) = current.take() {
                groups.push(run);
            }
            continue;
        }

        current = match current.take() {
            Some(run) if records[run.start].sender() == record.sender() => {
                Some(run.start..idx + 1)
            }
            Some(run) => {
                groups.push(run);
                Some(idx..idx + 1)
            }
            None => Some(idx..idx + 1),
        };
    }

    if let Some(run) = current {
        groups.push(run);
    }

    groups
}

/// Run one grouping pass.
///
/// Every run of at least [`MIN_GROUP_LEN`] unmerged records is merged: the
/// first gets [`Role::First`], the last [`Role::Last`] plus `stamp` as its
/// timestamp, everything in between [`Role::Middle`]. Returns the ranges that
/// were merged by this pass. Running it again without new records merges
/// nothing.
pub fn merge_groups(records: &mut [BubbleRecord], stamp: &str) -> Vec<Range<usize>> {
    let merged: Vec<Range<usize>> = group_consecutive(records)
        .into_iter()
        .filter(|run| run.len() >= MIN_GROUP_LEN)
        .collect();

    for run in &merged {
        let last = run.end - 1;
        for idx in run.clone() {
            let record = &mut records[idx];
            if idx == run.start {
                record.role = Role::First;
            } else if idx == last {
                record.role = Role::Last;
                record.stamp(stamp);
            } else {
                record.role = Role::Middle;
            }
        }
    }

    merged
}
