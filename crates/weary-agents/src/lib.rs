//! Agent capability, activities, and the reference survivor for the Weary
//! harness.
//!
//! This crate contains everything the scheduler mutates. The scheduling core
//! only depends on the [`Avatar`] trait; the [`Survivor`] is a small,
//! deterministic implementation used by scenarios and tests.
//!
//! # Modules
//!
//! - [`activity`] -- Cloneable activity actors and the assigned-activity slot
//! - [`avatar`] -- The [`Avatar`] capability trait
//! - [`config`] -- Physiology tunables ([`SurvivorConfig`])
//! - [`error`] -- Error types for agent operations ([`AgentError`])
//! - [`survivor`] -- The reference agent ([`Survivor`])
//! - [`vitals`] -- Per-minute weariness and digestion mechanics

pub mod activity;
pub mod avatar;
pub mod config;
pub mod error;
pub mod survivor;
pub mod vitals;

// Re-export primary types at crate root for convenience.
pub use activity::{ActivityActor, ActorStatus, AssignedActivity, ExertionActor};
pub use avatar::Avatar;
pub use config::SurvivorConfig;
pub use error::AgentError;
pub use survivor::Survivor;
pub use vitals::Vitals;
