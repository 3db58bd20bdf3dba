//! The weariness transition log.
//!
//! Records are kept in the order they were logged, which is what
//! [`WearinessEvents::summarize`] prints. Queries do not rely on that order
//! being chronological; they scan every record.

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use weary_types::WearyTransition;

/// Returned by [`WearinessEvents::nearest_transition`] when nothing matches.
pub const NOT_FOUND: i64 = i64::MAX;

/// Append-only history of weariness level changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WearinessEvents {
    transitions: Vec<WearyTransition>,
}

impl WearinessEvents {
    /// Create an empty log.
    pub const fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a change from `old_level` to `new_level` observed at `when`.
    ///
    /// `when` is truncated to whole minutes.
    pub fn log(&mut self, old_level: i32, new_level: i32, when: TimeDelta) {
        self.transitions.push(WearyTransition {
            minutes: when.num_minutes(),
            from: old_level,
            to: new_level,
        });
    }

    /// Minutes of the `from` -> `to` transition closest to `around`, or
    /// `None` if there is no such transition.
    ///
    /// Ties keep whichever matching record was logged first.
    pub fn find_nearest(&self, from: i32, to: i32, around: TimeDelta) -> Option<i64> {
        let around_mins = around.num_minutes();
        // (minutes, distance from around)
        let mut best: Option<(i64, u64)> = None;
        for change in &self.transitions {
            if change.from != from || change.to != to {
                continue;
            }
            let diff = change.minutes.abs_diff(around_mins);
            if best.is_none_or(|(_, best_diff)| diff < best_diff) {
                best = Some((change.minutes, diff));
            }
        }
        best.map(|(minutes, _)| minutes)
    }

    /// Minutes of the `from` -> `to` transition closest to `around`, or
    /// [`NOT_FOUND`].
    ///
    /// With `around` at zero this is the earliest such transition.
    pub fn nearest_transition(&self, from: i32, to: i32, around: TimeDelta) -> i64 {
        self.find_nearest(from, to, around).unwrap_or(NOT_FOUND)
    }

    /// Minutes of the earliest `from` -> `to` transition, or [`NOT_FOUND`].
    pub fn first_transition(&self, from: i32, to: i32) -> i64 {
        self.nearest_transition(from, to, TimeDelta::zero())
    }

    /// One line per record, in the order logged.
    pub fn summarize(&self) -> String {
        self.transitions
            .iter()
            .map(|change| {
                format!(
                    "Transition: Weariness from {} to {} at {} minutes\n",
                    change.from, change.to, change.minutes
                )
            })
            .collect()
    }

    /// Whether nothing was logged.
    pub fn empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// All records, in the order logged.
    pub fn transitions(&self) -> &[WearyTransition] {
        &self.transitions
    }
}
