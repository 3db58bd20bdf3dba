//! The run loop: drive an agent through a task list, one tick at a time.
//!
//! Each tick:
//!
//! 1. Fetch the active schedule; run its setup if it just became active.
//! 2. Instantaneous schedules finish here, without simulated time passing.
//! 3. Run one turn of the schedule and let one interval pass for the body.
//! 4. Log a transition if the weariness level changed. The transition is
//!    stamped with the time at the start of the tick.
//! 5. Advance simulated time and the task list by the schedule's interval.
//!
//! The loop ends when the task list is exhausted. It is deterministic given
//! the same task list and agent.

use chrono::TimeDelta;
use tracing::{debug, info, warn};
use weary_agents::Avatar;

use crate::events::WearinessEvents;
use crate::tasklist::TaskList;

/// Everything a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// The transitions observed.
    pub events: WearinessEvents,
    /// Simulated time that passed.
    pub elapsed: TimeDelta,
    /// Non-instantaneous ticks executed.
    pub ticks: u64,
}

/// Run every task in `tasks` against `guy` and return the transition log.
pub fn do_activity<A: Avatar + ?Sized>(tasks: TaskList<'_>, guy: &mut A) -> WearinessEvents {
    run_tasks(tasks, guy).events
}

/// Run every task in `tasks` against `guy`, reporting simulated time and
/// tick count along with the transition log.
pub fn run_tasks<A: Avatar + ?Sized>(mut tasks: TaskList<'_>, guy: &mut A) -> RunReport {
    let mut events = WearinessEvents::new();
    // How long we have been doing activities for
    let mut spent = TimeDelta::zero();
    let mut ticks: u64 = 0;
    let mut weariness = guy.weariness_level();
    // Cursor of the task whose setup already ran
    let mut started: Option<usize> = None;

    info!(
        tasks = tasks.len(),
        total_minutes = tasks.total_duration().num_minutes(),
        weariness,
        "Activity run starting"
    );

    while !tasks.is_exhausted() {
        let task = tasks.next_task();
        let cursor = tasks.cursor();

        if started != Some(cursor) {
            debug!(cursor, %task, minutes = spent.num_minutes(), "Task started");
            task.setup(guy);
            started = Some(cursor);
        }

        if task.instantaneous() {
            tasks.finish_current();
            continue;
        }

        let interval = task.interval();
        if interval <= TimeDelta::zero() {
            warn!(cursor, %task, "Task interval is not positive, skipping task");
            tasks.finish_current();
            continue;
        }

        task.do_turn(guy);
        guy.update_body(interval);

        let level = guy.weariness_level();
        if level != weariness {
            debug!(
                from = weariness,
                to = level,
                minutes = spent.num_minutes(),
                "Weariness changed"
            );
            events.log(weariness, level, spent);
            weariness = level;
        }

        spent = spent.checked_add(&interval).unwrap_or(TimeDelta::MAX);
        ticks = ticks.saturating_add(1);
        tasks.advance(interval);
    }

    info!(
        ticks,
        elapsed_minutes = spent.num_minutes(),
        transitions = events.len(),
        weariness,
        "Activity run finished"
    );

    RunReport {
        events,
        elapsed: spent,
        ticks,
    }
}
