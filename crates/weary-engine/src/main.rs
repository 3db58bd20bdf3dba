//! Harness binary for the Weary simulation.
//!
//! Loads a scenario, runs its task list against a fresh [`Survivor`], and
//! prints the weariness transitions that were observed.
//!
//! ```text
//! weary-engine [scenario.yaml] [--json]
//! ```
//!
//! Without a scenario path the built-in default scenario runs. `--json`
//! prints a machine-readable report instead of the transition summary.
//! Logging goes to stderr and honours `RUST_LOG` (default `info`).
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Parse arguments and load the scenario
//! 3. Build the plan and borrow it as a task list
//! 4. Run the task list against the survivor
//! 5. Print the report

mod error;

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use weary_agents::{Avatar, Survivor};
use weary_core::config::{ScenarioConfig, task_list};
use weary_core::{RunReport, run_tasks};
use weary_types::WearyTransition;

use crate::error::EngineError;

/// Parsed command line.
#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    scenario: Option<PathBuf>,
    json: bool,
}

/// Machine-readable output of a run.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    transitions: &'a [WearyTransition],
    elapsed_minutes: i64,
    ticks: u64,
    final_level: i32,
    faults: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    info!("weary-engine starting");

    // 2. Parse arguments and load the scenario.
    let args = parse_args(std::env::args().skip(1))?;
    let scenario = load_scenario(args.scenario.as_deref())?;
    info!(tasks = scenario.tasks.len(), "Scenario loaded");

    // 3. Build the plan.
    let plan = scenario.build_plan().map_err(EngineError::from)?;
    let tasks = task_list(&plan);

    // 4. Run.
    let mut survivor = Survivor::new(scenario.survivor);
    info!(
        level_threshold = survivor.config().level_threshold,
        max_level = survivor.config().max_level,
        "Survivor ready"
    );
    let report = run_tasks(tasks, &mut survivor);

    for fault in survivor.faults() {
        warn!(error = %fault, "Survivor reported a fault during the run");
    }

    // 5. Report.
    let rendered = render(&report, &survivor, args.json)?;
    print!("{rendered}");

    info!(
        transitions = report.events.len(),
        elapsed_minutes = report.elapsed.num_minutes(),
        "weary-engine finished"
    );
    Ok(())
}

/// Parse everything after the program name.
fn parse_args<I>(args: I) -> Result<Args, EngineError>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = Args::default();
    for arg in args {
        if arg == "--json" {
            parsed.json = true;
        } else if arg.starts_with("--") {
            return Err(EngineError::Usage {
                message: format!("unknown flag {arg}"),
            });
        } else if parsed.scenario.is_some() {
            return Err(EngineError::Usage {
                message: format!("unexpected argument {arg}"),
            });
        } else {
            parsed.scenario = Some(PathBuf::from(arg));
        }
    }
    Ok(parsed)
}

/// Load the scenario at `path`, or the built-in default when none is given.
fn load_scenario(path: Option<&Path>) -> Result<ScenarioConfig, EngineError> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "Loading scenario");
            Ok(ScenarioConfig::from_file(path)?)
        }
        None => {
            info!("No scenario given, using the default scenario");
            Ok(ScenarioConfig::default())
        }
    }
}

/// Render the run as the plain summary or as pretty JSON.
fn render(report: &RunReport, survivor: &Survivor, json: bool) -> Result<String, EngineError> {
    if !json {
        return Ok(report.events.summarize());
    }
    let out = JsonReport {
        transitions: report.events.transitions(),
        elapsed_minutes: report.elapsed.num_minutes(),
        ticks: report.ticks,
        final_level: survivor.weariness_level(),
        faults: survivor.faults().iter().map(ToString::to_string).collect(),
    };
    let mut text = serde_json::to_string_pretty(&out)?;
    text.push('\n');
    Ok(text)
}
