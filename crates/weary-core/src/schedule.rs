//! Schedules: what an agent does while a task is active.
//!
//! A [`Schedule`] knows how to start a task ([`Schedule::setup`]) and what
//! to do on each tick of it ([`Schedule::do_turn`]). It knows nothing about
//! the task list or the transition log, so the same schedule can appear in
//! many task lists, or several times in one.
//!
//! The variant set is closed:
//!
//! | variant    | setup                         | per tick                          | instantaneous |
//! |------------|-------------------------------|-----------------------------------|---------------|
//! | activity   | assign activity or actor copy | re-assign if idle, then one turn  | no            |
//! | meal       | eat one portion               | nothing                           | yes           |
//! | clear guts | empty stomach and guts        | nothing                           | yes           |
//! | sleep      | fall asleep                   | fall asleep again if woken        | no            |

use std::fmt;
use std::sync::LazyLock;

use chrono::TimeDelta;
use weary_agents::{ActivityActor, Avatar};
use weary_types::{ActivityId, ItemTypeId};

/// Minutes between ticks unless a schedule says otherwise.
pub const DEFAULT_INTERVAL_MINUTES: i64 = 5;

/// The shared, stateless clear-guts schedule.
pub static SCHED_CLEAR_GUTS: LazyLock<Schedule> = LazyLock::new(Schedule::clear_guts);

/// The activity an activity schedule assigns.
#[derive(Debug, Clone)]
pub enum ActivityTarget {
    /// A catalog activity, looked up by the agent.
    Named(ActivityId),
    /// A prototype actor; each assignment receives its own clone.
    Actor(Box<dyn ActivityActor>),
}

/// The closed set of schedule variants.
#[derive(Debug, Clone)]
pub enum ScheduleKind {
    /// Keep the agent busy with an activity.
    Activity(ActivityTarget),
    /// Eat one portion of a food item.
    Meal(ItemTypeId),
    /// Empty the digestive tract.
    ClearGuts,
    /// Sleep.
    Sleep,
}

/// A unit of repeatable simulated behavior.
#[derive(Debug, Clone)]
pub struct Schedule {
    kind: ScheduleKind,
    interval: TimeDelta,
}

impl Schedule {
    /// Build a schedule from a variant and the default interval.
    pub fn new(kind: ScheduleKind) -> Self {
        Self {
            kind,
            interval: TimeDelta::minutes(DEFAULT_INTERVAL_MINUTES),
        }
    }

    /// Perform the named activity, checking every `interval`.
    pub fn activity(id: impl Into<ActivityId>, interval: TimeDelta) -> Self {
        Self {
            kind: ScheduleKind::Activity(ActivityTarget::Named(id.into())),
            interval,
        }
    }

    /// Perform copies of `actor`, checking every `interval`.
    pub fn actor(actor: &dyn ActivityActor, interval: TimeDelta) -> Self {
        Self {
            kind: ScheduleKind::Activity(ActivityTarget::Actor(actor.clone_box())),
            interval,
        }
    }

    /// Eat one portion of `food`.
    pub fn meal(food: impl Into<ItemTypeId>) -> Self {
        Self::new(ScheduleKind::Meal(food.into()))
    }

    /// Empty stomach and guts. See also [`SCHED_CLEAR_GUTS`].
    pub fn clear_guts() -> Self {
        Self::new(ScheduleKind::ClearGuts)
    }

    /// Sleep for as long as the task lasts.
    pub fn sleep() -> Self {
        Self::new(ScheduleKind::Sleep)
    }

    /// Replace the tick interval.
    #[must_use]
    pub const fn with_interval(mut self, interval: TimeDelta) -> Self {
        self.interval = interval;
        self
    }

    /// Time between ticks while this schedule is active.
    pub const fn interval(&self) -> TimeDelta {
        self.interval
    }

    /// The variant.
    pub const fn kind(&self) -> &ScheduleKind {
        &self.kind
    }

    /// Whether the task completes within a single tick, whatever its
    /// budgeted duration.
    pub const fn instantaneous(&self) -> bool {
        match self.kind {
            ScheduleKind::Meal(_) | ScheduleKind::ClearGuts => true,
            ScheduleKind::Activity(_) | ScheduleKind::Sleep => false,
        }
    }

    /// One-time initialization when this schedule becomes the active task.
    pub fn setup<A: Avatar + ?Sized>(&self, guy: &mut A) {
        match &self.kind {
            ScheduleKind::Activity(ActivityTarget::Named(id)) => guy.assign_activity(id),
            ScheduleKind::Activity(ActivityTarget::Actor(actor)) => {
                guy.assign_actor(actor.clone_box());
            }
            ScheduleKind::Meal(food) => guy.consume(food),
            ScheduleKind::ClearGuts => guy.clear_digestion(),
            ScheduleKind::Sleep => guy.fall_asleep(),
        }
    }

    /// Per-tick effect while this schedule is active.
    pub fn do_turn<A: Avatar + ?Sized>(&self, guy: &mut A) {
        match &self.kind {
            ScheduleKind::Activity(_) => {
                // Finished or never started: pick the activity back up.
                if !guy.has_activity() {
                    self.setup(guy);
                }
                guy.do_activity_turn();
            }
            ScheduleKind::Sleep => {
                if !guy.is_asleep() {
                    guy.fall_asleep();
                }
            }
            ScheduleKind::Meal(_) | ScheduleKind::ClearGuts => {}
        }
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ScheduleKind::Activity(ActivityTarget::Named(id)) => write!(f, "activity {id}"),
            ScheduleKind::Activity(ActivityTarget::Actor(actor)) => {
                write!(f, "actor {}", actor.activity_id())
            }
            ScheduleKind::Meal(food) => write!(f, "meal {food}"),
            ScheduleKind::ClearGuts => f.write_str("clear guts"),
            ScheduleKind::Sleep => f.write_str("sleep"),
        }
    }
}
