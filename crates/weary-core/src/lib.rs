//! Task list, schedules, and the weariness transition log for the Weary
//! harness.
//!
//! This crate owns the deterministic run loop: a FIFO [`TaskList`] of
//! borrowed [`Schedule`]s drives an [`Avatar`] tick by tick, and every change
//! in the avatar's weariness level lands in a [`WearinessEvents`] log that
//! tests query afterwards.
//!
//! # Modules
//!
//! - [`config`] -- Scenario loading from YAML into owned schedule plans.
//! - [`driver`] -- The run loop ([`do_activity`], [`run_tasks`]).
//! - [`events`] -- The transition log with nearest-time lookup.
//! - [`schedule`] -- Schedule variants and their setup/per-tick hooks.
//! - [`tasklist`] -- The cursor-based task list.
//!
//! [`Avatar`]: weary_agents::Avatar

pub mod config;
pub mod driver;
pub mod events;
pub mod schedule;
pub mod tasklist;

#[cfg(test)]
pub(crate) mod test_support;

pub use driver::{RunReport, do_activity, run_tasks};
pub use events::{NOT_FOUND, WearinessEvents};
pub use schedule::{ActivityTarget, SCHED_CLEAR_GUTS, Schedule, ScheduleKind};
pub use tasklist::TaskList;
