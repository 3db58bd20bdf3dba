//! Record types shared across the workspace.

use serde::{Deserialize, Serialize};

/// A single change in weariness level, timestamped in whole minutes since
/// the start of a run.
///
/// Several records with the same `from`/`to` pair may exist at different
/// times; a long run can cross the same boundary repeatedly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WearyTransition {
    /// Minutes elapsed when the change was observed.
    pub minutes: i64,
    /// Level before the change.
    pub from: i32,
    /// Level after the change.
    pub to: i32,
}
