//! Scenario loading and typed scenario structures.
//!
//! A scenario file is YAML with two keys: `survivor`, overriding any
//! [`SurvivorConfig`] tunables, and `tasks`, the ordered task list. Each
//! task names its kind and its budget in minutes:
//!
//! ```yaml
//! survivor:
//!   level_threshold: 120
//! tasks:
//!   - { kind: clear_guts, minutes: 1 }
//!   - { kind: meal, food: oatmeal, minutes: 1 }
//!   - { kind: activity, activity: ACT_WORKOUT_HARD, interval_minutes: 5, minutes: 240 }
//!   - { kind: actor, activity: ACT_CHOP_LOGS, exertion: brisk, turns: 6, minutes: 60 }
//!   - { kind: sleep, minutes: 480 }
//! ```
//!
//! A scenario becomes a *plan*: owned schedules with their budgets. The
//! caller keeps the plan alive and builds a [`TaskList`] that borrows it.

use std::path::Path;

use chrono::TimeDelta;
use serde::Deserialize;
use weary_agents::{ExertionActor, SurvivorConfig};
use weary_types::{ActivityId, ActivityLevel, ItemTypeId};

use crate::schedule::{DEFAULT_INTERVAL_MINUTES, Schedule};
use crate::tasklist::TaskList;

/// Errors that can occur when loading a scenario.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the scenario file from disk.
    #[error("failed to read scenario file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse scenario YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A task entry is out of range.
    #[error("invalid task #{index}: {reason}")]
    InvalidTask {
        /// Zero-based position of the task in the list.
        index: usize,
        /// Explanation of what is wrong with the task.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// A task entry as written in a scenario file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TaskEntry {
    /// A named catalog activity.
    Activity {
        /// The activity to perform.
        activity: ActivityId,
        /// Minutes between ticks.
        #[serde(default = "default_interval_minutes")]
        interval_minutes: i64,
        /// Budget in minutes.
        minutes: i64,
    },
    /// An actor with a fixed exertion level.
    Actor {
        /// The activity kind the actor reports.
        activity: ActivityId,
        /// How strenuous the actor is.
        exertion: ActivityLevel,
        /// Turns after which the actor finishes; open-ended when absent.
        #[serde(default)]
        turns: Option<u32>,
        /// Minutes between ticks.
        #[serde(default = "default_interval_minutes")]
        interval_minutes: i64,
        /// Budget in minutes.
        minutes: i64,
    },
    /// Eat one portion of a food item.
    Meal {
        /// The food to eat.
        food: ItemTypeId,
        /// Budget in minutes.
        #[serde(default = "default_instant_minutes")]
        minutes: i64,
    },
    /// Empty stomach and guts.
    ClearGuts {
        /// Budget in minutes.
        #[serde(default = "default_instant_minutes")]
        minutes: i64,
    },
    /// Sleep.
    Sleep {
        /// Minutes between ticks.
        #[serde(default = "default_interval_minutes")]
        interval_minutes: i64,
        /// Budget in minutes.
        minutes: i64,
    },
}

impl TaskEntry {
    /// Build the owned schedule and its budget.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTask`] if the interval is not positive
    /// or the budget is negative or out of range.
    pub fn build(&self, index: usize) -> Result<(Schedule, TimeDelta), ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidTask {
            index,
            reason: reason.to_owned(),
        };

        let (schedule, minutes) = match self {
            Self::Activity {
                activity,
                interval_minutes,
                minutes,
            } => {
                let interval = positive_minutes(*interval_minutes).ok_or_else(|| {
                    invalid("interval_minutes must be positive")
                })?;
                (Schedule::activity(activity.clone(), interval), *minutes)
            }
            Self::Actor {
                activity,
                exertion,
                turns,
                interval_minutes,
                minutes,
            } => {
                let interval = positive_minutes(*interval_minutes).ok_or_else(|| {
                    invalid("interval_minutes must be positive")
                })?;
                let mut actor = ExertionActor::new(activity.clone(), *exertion);
                if let Some(turns) = *turns {
                    actor = actor.with_turns(turns);
                }
                (Schedule::actor(&actor, interval), *minutes)
            }
            Self::Meal { food, minutes } => (Schedule::meal(food.clone()), *minutes),
            Self::ClearGuts { minutes } => (Schedule::clear_guts(), *minutes),
            Self::Sleep {
                interval_minutes,
                minutes,
            } => {
                let interval = positive_minutes(*interval_minutes).ok_or_else(|| {
                    invalid("interval_minutes must be positive")
                })?;
                (Schedule::sleep().with_interval(interval), *minutes)
            }
        };

        if minutes < 0 {
            return Err(invalid("minutes must not be negative"));
        }
        let budget = TimeDelta::try_minutes(minutes).ok_or_else(|| invalid("minutes out of range"))?;
        Ok((schedule, budget))
    }
}

/// A full scenario: agent tunables plus the task list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScenarioConfig {
    /// Survivor physiology overrides.
    #[serde(default)]
    pub survivor: SurvivorConfig,

    /// Tasks in execution order.
    #[serde(default = "default_tasks")]
    pub tasks: Vec<TaskEntry>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            survivor: SurvivorConfig::default(),
            tasks: default_tasks(),
        }
    }
}

impl ScenarioConfig {
    /// Load a scenario from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse a scenario from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        Ok(config)
    }

    /// Build owned schedules and budgets for every task, in order.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError::InvalidTask`] encountered.
    pub fn build_plan(&self) -> Result<Vec<(Schedule, TimeDelta)>, ConfigError> {
        self.tasks
            .iter()
            .enumerate()
            .map(|(index, entry)| entry.build(index))
            .collect()
    }
}

/// Borrow a plan as a task list.
pub fn task_list(plan: &[(Schedule, TimeDelta)]) -> TaskList<'_> {
    plan.iter().map(|(schedule, budget)| (schedule, *budget)).collect()
}

/// `minutes` as a duration, if strictly positive and in range.
fn positive_minutes(minutes: i64) -> Option<TimeDelta> {
    if minutes <= 0 {
        return None;
    }
    TimeDelta::try_minutes(minutes)
}

const fn default_interval_minutes() -> i64 {
    DEFAULT_INTERVAL_MINUTES
}

const fn default_instant_minutes() -> i64 {
    1
}

fn default_tasks() -> Vec<TaskEntry> {
    vec![
        TaskEntry::ClearGuts { minutes: 1 },
        TaskEntry::Meal {
            food: ItemTypeId::from("oatmeal"),
            minutes: 1,
        },
        TaskEntry::Activity {
            activity: ActivityId::from("ACT_WORKOUT_HARD"),
            interval_minutes: DEFAULT_INTERVAL_MINUTES,
            minutes: 240,
        },
        TaskEntry::Sleep {
            interval_minutes: DEFAULT_INTERVAL_MINUTES,
            minutes: 480,
        },
    ]
}
