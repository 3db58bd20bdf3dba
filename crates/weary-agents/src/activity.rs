//! Activities an agent can be busy with.
//!
//! An agent's current activity is either a named entry from its activity
//! catalog, which runs until replaced, or an [`ActivityActor`]: an effect
//! object that carries its own state and decides when it is done.
//!
//! Actors are cloned, never shared. A schedule keeps one prototype and hands
//! each assignment a fresh copy through [`ActivityActor::clone_box`].

use std::fmt;

use weary_types::{ActivityId, ActivityLevel};

/// Whether an actor wants to keep going after a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorStatus {
    /// The activity continues next turn.
    Continue,
    /// The activity is complete and should be cleared.
    Finished,
}

/// A cloneable activity effect object.
pub trait ActivityActor: fmt::Debug + Send + Sync {
    /// The activity kind this actor performs.
    fn activity_id(&self) -> &ActivityId;

    /// How strenuous the activity currently is.
    fn exertion(&self) -> ActivityLevel;

    /// Progress the activity by one turn.
    fn do_turn(&mut self) -> ActorStatus;

    /// Clone into a new boxed actor.
    fn clone_box(&self) -> Box<dyn ActivityActor>;
}

impl Clone for Box<dyn ActivityActor> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// An actor with a fixed exertion level and an optional turn limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExertionActor {
    id: ActivityId,
    exertion: ActivityLevel,
    turns_left: Option<u32>,
}

impl ExertionActor {
    /// An actor that runs until it is replaced.
    pub fn new(id: impl Into<ActivityId>, exertion: ActivityLevel) -> Self {
        Self {
            id: id.into(),
            exertion,
            turns_left: None,
        }
    }

    /// Limit the actor to `turns` turns, after which it reports
    /// [`ActorStatus::Finished`].
    #[must_use]
    pub const fn with_turns(mut self, turns: u32) -> Self {
        self.turns_left = Some(turns);
        self
    }

    /// Turns remaining, or `None` for an open-ended actor.
    pub const fn turns_left(&self) -> Option<u32> {
        self.turns_left
    }
}

impl ActivityActor for ExertionActor {
    fn activity_id(&self) -> &ActivityId {
        &self.id
    }

    fn exertion(&self) -> ActivityLevel {
        self.exertion
    }

    fn do_turn(&mut self) -> ActorStatus {
        match self.turns_left {
            None => ActorStatus::Continue,
            Some(left) => {
                let left = left.saturating_sub(1);
                self.turns_left = Some(left);
                if left == 0 {
                    ActorStatus::Finished
                } else {
                    ActorStatus::Continue
                }
            }
        }
    }

    fn clone_box(&self) -> Box<dyn ActivityActor> {
        Box::new(self.clone())
    }
}

/// The activity an agent is currently assigned.
#[derive(Debug, Clone)]
pub enum AssignedActivity {
    /// A catalog activity, resolved to its exertion level at assignment.
    Named {
        /// The activity kind.
        id: ActivityId,
        /// Exertion taken from the catalog.
        exertion: ActivityLevel,
    },
    /// An actor-driven activity.
    Actor(Box<dyn ActivityActor>),
}

impl AssignedActivity {
    /// The activity kind.
    pub fn id(&self) -> &ActivityId {
        match self {
            Self::Named { id, .. } => id,
            Self::Actor(actor) => actor.activity_id(),
        }
    }

    /// The exertion this activity imposes right now.
    pub fn exertion(&self) -> ActivityLevel {
        match self {
            Self::Named { exertion, .. } => *exertion,
            Self::Actor(actor) => actor.exertion(),
        }
    }
}
