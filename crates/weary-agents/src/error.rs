//! Error types for the weary-agents crate.
//!
//! Schedule hooks return nothing, so agent failures are not propagated to
//! the scheduler. A [`Survivor`](crate::Survivor) records each failure as a
//! fault instead, and tests inspect the fault list after a run.

use weary_types::{ActivityId, ItemTypeId};

/// Errors that can occur while mutating agent state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AgentError {
    /// The named activity is not in the agent's activity catalog.
    #[error("unknown activity: {activity}")]
    UnknownActivity {
        /// The activity that was requested.
        activity: ActivityId,
    },

    /// The food item is not in the agent's food catalog.
    #[error("unknown food item: {item}")]
    UnknownFood {
        /// The item that was requested.
        item: ItemTypeId,
    },

    /// An arithmetic overflow occurred during a physiology computation.
    #[error("arithmetic overflow in vital computation: {context}")]
    ArithmeticOverflow {
        /// Description of what was being computed.
        context: String,
    },
}
