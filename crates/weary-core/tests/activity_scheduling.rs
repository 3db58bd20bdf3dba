//! End-to-end runs of the task list against the reference survivor.
//!
//! Expected minutes follow from the default survivor tunables: hard
//! exercise adds 10 points a minute (15 when unfed), sleep removes 5, and
//! every 300 points is one weariness level.

#![allow(clippy::unwrap_used)]

use chrono::TimeDelta;
use weary_agents::{Avatar, ExertionActor, Survivor, SurvivorConfig};
use weary_core::config::{ScenarioConfig, task_list};
use weary_core::{NOT_FOUND, SCHED_CLEAR_GUTS, Schedule, TaskList, do_activity, run_tasks};
use weary_types::ActivityLevel;

fn mins(n: i64) -> TimeDelta {
    TimeDelta::minutes(n)
}

#[test]
fn workout_then_sleep_rises_and_falls() {
    let oatmeal = Schedule::meal("oatmeal");
    let workout = Schedule::activity("ACT_WORKOUT_HARD", mins(5));
    let sleep = Schedule::sleep();

    let mut tasks = TaskList::new();
    tasks.enqueue(&SCHED_CLEAR_GUTS, mins(1));
    tasks.enqueue(&oatmeal, mins(1));
    tasks.enqueue(&workout, mins(60));
    tasks.enqueue(&sleep, mins(120));

    let mut guy = Survivor::default();
    let report = run_tasks(tasks, &mut guy);
    let log = &report.events;

    assert_eq!(log.len(), 4, "{}", log.summarize());
    assert_eq!(log.first_transition(0, 1), 25);
    assert_eq!(log.first_transition(1, 2), 55);
    assert_eq!(log.first_transition(2, 1), 75);
    assert_eq!(log.first_transition(1, 0), 135);
    assert_eq!(log.first_transition(2, 3), NOT_FOUND);

    // 13 workout ticks and 25 sleep ticks.
    assert_eq!(report.ticks, 38);
    assert_eq!(report.elapsed, mins(190));
    assert!(guy.is_asleep());
    assert!(guy.faults().is_empty());
}

#[test]
fn going_hungry_tires_faster() {
    let oatmeal = Schedule::meal("oatmeal");
    let workout = Schedule::activity("ACT_WORKOUT_HARD", mins(5));

    let mut fed = TaskList::new();
    fed.enqueue(&SCHED_CLEAR_GUTS, mins(1));
    fed.enqueue(&oatmeal, mins(1));
    fed.enqueue(&workout, mins(60));

    let mut hungry = TaskList::new();
    hungry.enqueue(&SCHED_CLEAR_GUTS, mins(1));
    hungry.enqueue(&workout, mins(60));

    let fed_log = do_activity(fed, &mut Survivor::default());
    let hungry_log = do_activity(hungry, &mut Survivor::default());

    assert_eq!(fed_log.first_transition(0, 1), 25);
    assert_eq!(hungry_log.first_transition(0, 1), 15);
}

#[test]
fn finished_actor_is_picked_back_up() {
    let config = SurvivorConfig {
        level_threshold: 100,
        ..SurvivorConfig::default()
    };
    let oatmeal = Schedule::meal("oatmeal");
    let steady = ExertionActor::new("ACT_CHOP_LOGS", ActivityLevel::Brisk);
    let bursts = steady.clone().with_turns(2);
    let steady_sched = Schedule::actor(&steady, mins(5));
    let burst_sched = Schedule::actor(&bursts, mins(5));

    let mut steady_tasks = TaskList::new();
    steady_tasks.enqueue(&oatmeal, mins(1));
    steady_tasks.enqueue(&steady_sched, mins(30));

    let mut burst_tasks = TaskList::new();
    burst_tasks.enqueue(&oatmeal, mins(1));
    burst_tasks.enqueue(&burst_sched, mins(30));

    let mut steady_guy = Survivor::new(config.clone());
    let steady_log = do_activity(steady_tasks, &mut steady_guy);
    let mut burst_guy = Survivor::new(config);
    let burst_log = do_activity(burst_tasks, &mut burst_guy);

    // 30 points a tick without pause.
    assert_eq!(steady_log.first_transition(0, 1), 15);
    // Every second tick the actor finishes and the body rests for a tick
    // before the schedule re-assigns a fresh copy.
    assert_eq!(burst_log.first_transition(0, 1), 30);
    assert_eq!(burst_log.len(), 1);
    assert!(burst_guy.has_activity());
}

#[test]
fn instantaneous_task_then_ten_minutes_logs_one_transition() {
    let config = SurvivorConfig {
        level_threshold: 200,
        ..SurvivorConfig::default()
    };
    let workout = Schedule::activity("ACT_WORKOUT_HARD", mins(5));
    let mut tasks = TaskList::new();
    tasks.enqueue(&SCHED_CLEAR_GUTS, mins(1));
    tasks.enqueue(&workout, mins(10));
    let total = tasks.total_duration().num_minutes();

    // Unfed: 75 points a tick, level 1 on the third and last tick.
    let log = do_activity(tasks, &mut Survivor::new(config));

    assert_eq!(log.len(), 1, "{}", log.summarize());
    let at = log.first_transition(0, 1);
    assert!(at > 0 && at < total);
    assert_eq!(at, 10);
}

#[test]
fn unknown_food_is_reported_by_the_agent() {
    let rock = Schedule::meal("rock");
    let sleep = Schedule::sleep();
    let mut tasks = TaskList::new();
    tasks.enqueue(&rock, mins(1));
    tasks.enqueue(&sleep, mins(10));

    let mut guy = Survivor::default();
    let log = do_activity(tasks, &mut guy);

    assert!(log.empty());
    assert_eq!(guy.faults().len(), 1);
}

#[test]
fn empty_run_produces_empty_log() {
    let log = do_activity(TaskList::new(), &mut Survivor::default());
    assert!(log.empty());
    assert_eq!(log.summarize(), "");
}

#[test]
fn scenario_file_matches_hand_built_list() {
    let yaml = include_str!("../../../scenarios/workout_then_sleep.yaml");
    let scenario = ScenarioConfig::parse(yaml).unwrap();
    let plan = scenario.build_plan().unwrap();

    let mut guy = Survivor::new(scenario.survivor.clone());
    let log = do_activity(task_list(&plan), &mut guy);

    assert_eq!(
        log.summarize(),
        "Transition: Weariness from 0 to 1 at 25 minutes\n\
         Transition: Weariness from 1 to 2 at 55 minutes\n\
         Transition: Weariness from 2 to 1 at 75 minutes\n\
         Transition: Weariness from 1 to 0 at 135 minutes\n"
    );
}

#[test]
fn hungry_chopping_scenario_runs_clean() {
    let yaml = include_str!("../../../scenarios/chop_logs_hungry.yaml");
    let scenario = ScenarioConfig::parse(yaml).unwrap();
    let plan = scenario.build_plan().unwrap();

    let mut guy = Survivor::new(scenario.survivor.clone());
    let report = run_tasks(task_list(&plan), &mut guy);

    assert!(guy.faults().is_empty());
    assert!(!report.events.empty());
    assert_ne!(report.events.first_transition(0, 1), NOT_FOUND);
}
