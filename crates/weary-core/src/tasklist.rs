//! The FIFO task list that decides which schedule is active.
//!
//! A [`TaskList`] borrows its schedules; the `'s` lifetime makes the borrow
//! checker guarantee every schedule outlives the list. Each entry carries a
//! time budget. The list accumulates elapsed time for the active entry and
//! moves to the next one once the accumulated time is strictly greater than
//! the budget, so a task whose budget is a whole number of ticks runs one
//! tick long rather than one tick short.
//!
//! # Usage errors
//!
//! - Asking an empty list for its active task is a hard stop.
//! - Advancing past the end resets the cursor to the first task. The run
//!   loop never does this; the restart is kept as observable behavior and
//!   pinned by tests.

use chrono::TimeDelta;
use tracing::error;

use crate::schedule::Schedule;

/// An ordered list of (schedule, budget) entries with a cursor.
#[derive(Debug, Clone, Default)]
pub struct TaskList<'s> {
    /// The tasks yet to do, and how long each one lasts.
    tasks: Vec<(&'s Schedule, TimeDelta)>,
    /// How long the current task has been running.
    advanced: TimeDelta,
    /// Index of the current task. Equal to `tasks.len()` once exhausted.
    cursor: usize,
}

impl<'s> TaskList<'s> {
    /// Create an empty task list.
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently active schedule.
    ///
    /// An exhausted list is diagnosed and falls back to the first task.
    ///
    /// # Panics
    ///
    /// Panics if no task was ever enqueued; there is no schedule to return.
    #[allow(clippy::panic)]
    pub fn next_task(&self) -> &'s Schedule {
        if let Some(&(task, _)) = self.tasks.get(self.cursor) {
            return task;
        }

        error!(
            cursor = self.cursor,
            len = self.tasks.len(),
            "Requested task when none existed!"
        );
        match self.tasks.first() {
            Some(&(task, _)) => task,
            None => panic!("requested the active task of an empty task list"),
        }
    }

    /// Spend `how_long` on the current task, moving to the next task once
    /// the time spent exceeds the current task's budget.
    pub fn advance(&mut self, how_long: TimeDelta) {
        self.advanced = self
            .advanced
            .checked_add(&how_long)
            .unwrap_or(TimeDelta::MAX);

        let rolls_over = self
            .tasks
            .get(self.cursor)
            .is_none_or(|&(_, budget)| self.advanced > budget);
        if rolls_over {
            self.roll_over();
        }
    }

    /// End the current task now, whatever its budget.
    ///
    /// Does nothing once the list is exhausted.
    pub fn finish_current(&mut self) {
        if self.is_exhausted() {
            return;
        }
        self.roll_over();
    }

    fn roll_over(&mut self) {
        self.advanced = TimeDelta::zero();
        self.cursor = self.cursor.saturating_add(1);

        // Running out of tasks leaves the cursor one past the end. Going any
        // further is a usage error.
        if self.cursor > self.tasks.len() {
            error!(
                cursor = self.cursor,
                len = self.tasks.len(),
                "Attempted to continue advancing once all tasks were finished!"
            );
            self.cursor = 0;
        }
    }

    /// Append a task. The list keeps only a reference to `added`.
    pub fn enqueue(&mut self, added: &'s Schedule, how_long: TimeDelta) {
        self.tasks.push((added, how_long));
    }

    /// Remove every task and rewind.
    pub fn clear(&mut self) {
        self.cursor = 0;
        self.advanced = TimeDelta::zero();
        self.tasks.clear();
    }

    /// Sum of all budgets, whatever the cursor position.
    pub fn total_duration(&self) -> TimeDelta {
        self.tasks
            .iter()
            .try_fold(TimeDelta::zero(), |total, (_, budget)| {
                total.checked_add(budget)
            })
            .unwrap_or(TimeDelta::MAX)
    }

    /// Budget left on the current task. Zero once exhausted.
    pub fn remaining(&self) -> TimeDelta {
        self.tasks
            .get(self.cursor)
            .and_then(|&(_, budget)| budget.checked_sub(&self.advanced))
            .map_or(TimeDelta::zero(), |left| left.max(TimeDelta::zero()))
    }

    /// Number of tasks, finished or not.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether no task was enqueued.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Index of the current task.
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Time spent on the current task.
    pub const fn elapsed(&self) -> TimeDelta {
        self.advanced
    }

    /// Whether every task has run.
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.tasks.len()
    }
}

impl<'s> FromIterator<(&'s Schedule, TimeDelta)> for TaskList<'s> {
    fn from_iter<I: IntoIterator<Item = (&'s Schedule, TimeDelta)>>(iter: I) -> Self {
        Self {
            tasks: iter.into_iter().collect(),
            advanced: TimeDelta::zero(),
            cursor: 0,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::schedule::SCHED_CLEAR_GUTS;

    fn mins(n: i64) -> TimeDelta {
        TimeDelta::minutes(n)
    }

    #[test]
    fn total_duration_sums_budgets() {
        let sleep = Schedule::sleep();
        let work = Schedule::activity("ACT_WORKOUT_HARD", mins(5));
        let mut tasks = TaskList::new();
        assert_eq!(tasks.total_duration(), TimeDelta::zero());

        tasks.enqueue(&work, mins(60));
        tasks.enqueue(&sleep, mins(480));
        tasks.enqueue(&work, mins(15));
        assert_eq!(tasks.total_duration(), mins(555));

        tasks.advance(mins(61));
        assert_eq!(tasks.cursor(), 1);
        assert_eq!(tasks.total_duration(), mins(555));
    }

    #[test]
    fn exact_budget_does_not_roll_over() {
        let sleep = Schedule::sleep();
        let mut tasks = TaskList::new();
        tasks.enqueue(&sleep, mins(10));
        tasks.enqueue(&sleep, mins(10));

        tasks.advance(mins(10));
        assert_eq!(tasks.cursor(), 0);
        assert_eq!(tasks.elapsed(), mins(10));
        assert_eq!(tasks.remaining(), TimeDelta::zero());

        tasks.advance(TimeDelta::seconds(1));
        assert_eq!(tasks.cursor(), 1);
        assert_eq!(tasks.elapsed(), TimeDelta::zero());
    }

    #[test]
    fn overshoot_rolls_over_exactly_once() {
        let sleep = Schedule::sleep();
        let mut tasks = TaskList::new();
        tasks.enqueue(&sleep, mins(10));
        tasks.enqueue(&sleep, mins(10));
        tasks.enqueue(&sleep, mins(10));

        // Leftover time is dropped, not carried into the next task.
        tasks.advance(mins(25));
        assert_eq!(tasks.cursor(), 1);
        assert_eq!(tasks.elapsed(), TimeDelta::zero());
    }

    #[test]
    fn next_task_follows_the_cursor() {
        let meal = Schedule::meal("oatmeal");
        let sleep = Schedule::sleep();
        let mut tasks = TaskList::new();
        tasks.enqueue(&meal, mins(1));
        tasks.enqueue(&sleep, mins(5));

        assert!(std::ptr::eq(tasks.next_task(), &meal));
        tasks.advance(mins(2));
        assert!(std::ptr::eq(tasks.next_task(), &sleep));
    }

    #[test]
    fn exhausted_list_falls_back_to_first_task() {
        let meal = Schedule::meal("oatmeal");
        let sleep = Schedule::sleep();
        let mut tasks = TaskList::new();
        tasks.enqueue(&meal, mins(1));
        tasks.enqueue(&sleep, mins(1));
        tasks.advance(mins(2));
        tasks.advance(mins(2));
        assert!(tasks.is_exhausted());
        assert_eq!(tasks.cursor(), 2);
        assert!(std::ptr::eq(tasks.next_task(), &meal));
    }

    #[test]
    #[should_panic(expected = "empty task list")]
    fn next_task_on_empty_list_is_fatal() {
        let tasks = TaskList::new();
        let _ = tasks.next_task();
    }

    #[test]
    fn advancing_past_the_end_restarts_from_the_first_task() {
        let sleep = Schedule::sleep();
        let mut tasks = TaskList::new();
        tasks.enqueue(&sleep, mins(5));
        tasks.advance(mins(6));
        assert!(tasks.is_exhausted());

        tasks.advance(mins(1));
        assert_eq!(tasks.cursor(), 0);
        assert!(!tasks.is_exhausted());
        assert_eq!(tasks.elapsed(), TimeDelta::zero());
    }

    #[test]
    fn advancing_an_empty_list_keeps_cursor_at_zero() {
        let mut tasks = TaskList::new();
        tasks.advance(mins(5));
        assert_eq!(tasks.cursor(), 0);
        assert!(tasks.is_exhausted());
    }

    #[test]
    fn finish_current_skips_the_remaining_budget() {
        let sleep = Schedule::sleep();
        let mut tasks = TaskList::new();
        tasks.enqueue(&SCHED_CLEAR_GUTS, mins(30));
        tasks.enqueue(&sleep, mins(30));

        tasks.advance(mins(7));
        tasks.finish_current();
        assert_eq!(tasks.cursor(), 1);

        tasks.finish_current();
        assert!(tasks.is_exhausted());
        tasks.finish_current();
        assert_eq!(tasks.cursor(), 2);
    }

    #[test]
    fn finish_current_ignores_the_budget() {
        let sleep = Schedule::sleep();
        let mut tasks = TaskList::new();
        tasks.enqueue(&SCHED_CLEAR_GUTS, TimeDelta::MAX);
        tasks.enqueue(&sleep, mins(5));

        tasks.advance(mins(3));
        tasks.finish_current();
        assert_eq!(tasks.cursor(), 1);
        assert_eq!(tasks.elapsed(), TimeDelta::zero());

        tasks.finish_current();
        assert!(tasks.is_exhausted());
        // Nothing left to finish.
        tasks.finish_current();
        assert_eq!(tasks.cursor(), 2);
    }

    #[test]
    fn clear_then_enqueue_matches_a_fresh_list() {
        let meal = Schedule::meal("oatmeal");
        let sleep = Schedule::sleep();

        let mut reused = TaskList::new();
        reused.enqueue(&sleep, mins(10));
        reused.enqueue(&sleep, mins(10));
        reused.advance(mins(11));
        reused.advance(mins(3));
        reused.clear();
        assert!(reused.is_empty());
        assert_eq!(reused.cursor(), 0);
        assert_eq!(reused.elapsed(), TimeDelta::zero());

        let mut fresh = TaskList::new();
        for list in [&mut reused, &mut fresh] {
            list.enqueue(&meal, mins(1));
            list.enqueue(&sleep, mins(20));
            list.advance(mins(2));
            list.advance(mins(5));
        }
        assert_eq!(reused.cursor(), fresh.cursor());
        assert_eq!(reused.elapsed(), fresh.elapsed());
        assert_eq!(reused.total_duration(), fresh.total_duration());
        assert!(std::ptr::eq(reused.next_task(), fresh.next_task()));
    }

    #[test]
    fn collects_from_owned_plan() {
        let plan = vec![
            (Schedule::meal("oatmeal"), mins(1)),
            (Schedule::sleep(), mins(60)),
        ];
        let tasks: TaskList<'_> = plan.iter().map(|(s, d)| (s, *d)).collect();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks.total_duration(), mins(61));
    }
}
