//! The agent capability the scheduler drives.
//!
//! Schedules and the simulation driver only ever talk to an agent through
//! [`Avatar`]. None of these calls return errors; an implementation reports
//! its own failures (see [`Survivor::faults`](crate::Survivor::faults)).

use chrono::TimeDelta;
use weary_types::{ActivityId, ItemTypeId};

use crate::activity::ActivityActor;

/// Per-tick mutation calls issued to a simulated agent.
pub trait Avatar {
    /// Start the named catalog activity, replacing any current one.
    fn assign_activity(&mut self, activity: &ActivityId);

    /// Start an actor-driven activity, replacing any current one.
    fn assign_actor(&mut self, actor: Box<dyn ActivityActor>);

    /// Whether the agent is currently busy with an activity.
    fn has_activity(&self) -> bool;

    /// Progress the current activity by one turn. A no-op when idle.
    fn do_activity_turn(&mut self);

    /// Eat one portion of `food`.
    fn consume(&mut self, food: &ItemTypeId);

    /// Empty stomach and guts.
    fn clear_digestion(&mut self);

    /// Fall asleep, dropping any current activity.
    fn fall_asleep(&mut self);

    /// Whether the agent is asleep.
    fn is_asleep(&self) -> bool;

    /// Let `elapsed` of simulated time pass for the body.
    fn update_body(&mut self, elapsed: TimeDelta);

    /// The current weariness level.
    fn weariness_level(&self) -> i32;
}
