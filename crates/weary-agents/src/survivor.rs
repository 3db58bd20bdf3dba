//! The reference agent used by scenarios and integration tests.
//!
//! A [`Survivor`] has a stomach, guts, a weariness tracker, a sleep flag,
//! and at most one current activity. Time passes in whole minutes; any
//! sub-minute remainder handed to [`Avatar::update_body`] is carried to the
//! next call so that short ticks still add up.

use chrono::TimeDelta;
use tracing::{debug, warn};
use weary_types::{ActivityId, ActivityLevel, ItemTypeId};

use crate::activity::{ActivityActor, ActorStatus, AssignedActivity};
use crate::avatar::Avatar;
use crate::config::SurvivorConfig;
use crate::error::AgentError;
use crate::vitals::{self, Vitals};

/// Seconds in one simulated minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// A simulated agent with a simple weariness and digestion model.
#[derive(Debug, Clone)]
pub struct Survivor {
    config: SurvivorConfig,
    vitals: Vitals,
    asleep: bool,
    activity: Option<AssignedActivity>,
    /// Seconds handed to `update_body` that did not fill a whole minute.
    carry_seconds: i64,
    faults: Vec<AgentError>,
}

impl Default for Survivor {
    fn default() -> Self {
        Self::new(SurvivorConfig::default())
    }
}

impl Survivor {
    /// Create a rested, awake, unfed survivor.
    pub const fn new(config: SurvivorConfig) -> Self {
        Self {
            config,
            vitals: Vitals {
                stomach_kcal: 0,
                guts_kcal: 0,
                tracker: 0,
            },
            asleep: false,
            activity: None,
            carry_seconds: 0,
            faults: Vec::new(),
        }
    }

    /// The physiology configuration.
    pub const fn config(&self) -> &SurvivorConfig {
        &self.config
    }

    /// Current body state.
    pub const fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    /// The current activity, if any.
    pub const fn activity(&self) -> Option<&AssignedActivity> {
        self.activity.as_ref()
    }

    /// The exertion the survivor is under right now.
    pub fn exertion(&self) -> ActivityLevel {
        if self.asleep {
            return ActivityLevel::None;
        }
        self.activity
            .as_ref()
            .map_or(ActivityLevel::None, AssignedActivity::exertion)
    }

    /// Failures recorded since creation, oldest first.
    pub fn faults(&self) -> &[AgentError] {
        &self.faults
    }

    fn record_fault(&mut self, fault: AgentError) {
        warn!(error = %fault, "survivor fault");
        self.faults.push(fault);
    }

    /// Advance the body by one minute.
    fn tick_minute(&mut self) -> Result<(), AgentError> {
        let exertion = self.exertion();
        vitals::apply_exertion(&mut self.vitals, &self.config, exertion, self.asleep, 1)?;
        vitals::digest(&mut self.vitals, &self.config, 1);

        if self.asleep && self.vitals.tracker <= self.config.wake_threshold {
            self.asleep = false;
            debug!(tracker = self.vitals.tracker, "survivor woke up rested");
        }
        Ok(())
    }
}

impl Avatar for Survivor {
    fn assign_activity(&mut self, activity: &ActivityId) {
        let Some(&exertion) = self.config.activities.get(activity) else {
            self.record_fault(AgentError::UnknownActivity {
                activity: activity.clone(),
            });
            return;
        };
        debug!(%activity, ?exertion, "activity assigned");
        self.asleep = false;
        self.activity = Some(AssignedActivity::Named {
            id: activity.clone(),
            exertion,
        });
    }

    fn assign_actor(&mut self, actor: Box<dyn ActivityActor>) {
        debug!(activity = %actor.activity_id(), exertion = ?actor.exertion(), "actor assigned");
        self.asleep = false;
        self.activity = Some(AssignedActivity::Actor(actor));
    }

    fn has_activity(&self) -> bool {
        self.activity.is_some()
    }

    fn do_activity_turn(&mut self) {
        let finished = match self.activity.as_mut() {
            Some(AssignedActivity::Actor(actor)) => actor.do_turn() == ActorStatus::Finished,
            Some(AssignedActivity::Named { .. }) | None => false,
        };
        if finished
            && let Some(done) = self.activity.take()
        {
            debug!(activity = %done.id(), "activity finished");
        }
    }

    fn consume(&mut self, food: &ItemTypeId) {
        let Some(&kcal) = self.config.foods.get(food) else {
            self.record_fault(AgentError::UnknownFood { item: food.clone() });
            return;
        };
        vitals::apply_meal(&mut self.vitals, &self.config, kcal);
        debug!(%food, kcal, stomach_kcal = self.vitals.stomach_kcal, "meal eaten");
    }

    fn clear_digestion(&mut self) {
        vitals::clear_digestion(&mut self.vitals);
    }

    fn fall_asleep(&mut self) {
        self.activity = None;
        self.asleep = true;
    }

    fn is_asleep(&self) -> bool {
        self.asleep
    }

    fn update_body(&mut self, elapsed: TimeDelta) {
        let total = self.carry_seconds.saturating_add(elapsed.num_seconds());
        if total <= 0 {
            self.carry_seconds = 0;
            return;
        }
        let minutes = total.div_euclid(SECONDS_PER_MINUTE);
        self.carry_seconds = total.rem_euclid(SECONDS_PER_MINUTE);

        for _ in 0..minutes {
            if let Err(fault) = self.tick_minute() {
                self.record_fault(fault);
                break;
            }
        }
    }

    fn weariness_level(&self) -> i32 {
        self.config.level_for(self.vitals.tracker)
    }
}
