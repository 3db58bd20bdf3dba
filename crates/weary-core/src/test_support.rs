//! Shared test fixtures for the unit tests in this crate.

use chrono::TimeDelta;
use weary_agents::{ActivityActor, Avatar};
use weary_types::{ActivityId, ItemTypeId};

/// Records every call the schedules make.
#[derive(Debug, Default)]
pub(crate) struct RecordingAvatar {
    pub calls: Vec<String>,
    pub busy: bool,
    pub asleep: bool,
    pub level: i32,
}

impl Avatar for RecordingAvatar {
    fn assign_activity(&mut self, activity: &ActivityId) {
        self.busy = true;
        self.calls.push(format!("assign {activity}"));
    }

    fn assign_actor(&mut self, actor: Box<dyn ActivityActor>) {
        self.busy = true;
        self.calls.push(format!("actor {}", actor.activity_id()));
    }

    fn has_activity(&self) -> bool {
        self.busy
    }

    fn do_activity_turn(&mut self) {
        self.calls.push(String::from("turn"));
    }

    fn consume(&mut self, food: &ItemTypeId) {
        self.calls.push(format!("eat {food}"));
    }

    fn clear_digestion(&mut self) {
        self.calls.push(String::from("clear"));
    }

    fn fall_asleep(&mut self) {
        self.asleep = true;
        self.busy = false;
        self.calls.push(String::from("sleep"));
    }

    fn is_asleep(&self) -> bool {
        self.asleep
    }

    fn update_body(&mut self, _elapsed: TimeDelta) {}

    fn weariness_level(&self) -> i32 {
        self.level
    }
}
