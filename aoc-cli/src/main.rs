//! AOC CLI - runs, times and verifies Advent of Code solvers

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod output;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aggregator::{ResultAggregator, ResultKey};
use aoc_solver::{SolverRegistry, SolverRegistryBuilder};
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::{Executor, WorkItem};
use output::{OutputFormatter, Summary};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args);
    init_logging(&config)?;

    let registry = build_registry(&config.tags)?;
    info!(solvers = registry.storage().len(), "registry built");

    let executor =
        Executor::new(registry, &config).map_err(|e| CliError::Config(e.to_string()))?;

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }
    if let Some(path) = &config.input_override
        && work_items.len() != 1
    {
        return Err(CliError::Config(format!(
            "--input {} needs exactly one selected day, {} match",
            path.display(),
            work_items.len()
        )));
    }
    info!(days = work_items.len(), mode = ?config.parallelize_by, "running");

    run_executor(executor, &work_items, config.quiet)
}

/// Stderr logging; `RUST_LOG` overrides the level picked from the flags
fn init_logging(config: &Config) -> Result<(), CliError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level()))
        .map_err(|e| CliError::Logging(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}

/// Run the executor in the background and print rows in order as they arrive
fn run_executor(executor: Executor, work_items: &[WorkItem], quiet: bool) -> Result<(), CliError> {
    let expected_keys = work_items.iter().flat_map(ResultKey::for_work);

    let (tx, rx) = std::sync::mpsc::channel();
    let executor_handle = std::thread::spawn(move || executor.execute(tx));

    let formatter = OutputFormatter::new(quiet);
    let mut aggregator = ResultAggregator::new(expected_keys);
    let mut results = Vec::new();

    formatter.print_header();
    for result in rx {
        for ready in aggregator.add(result) {
            formatter.print_result(&ready);
            results.push(ready);
        }
    }

    // Rows behind a gap left by a stopped run
    for ready in aggregator.drain() {
        formatter.print_result(&ready);
        results.push(ready);
    }
    if !aggregator.is_complete() {
        debug!("run stopped before every day finished");
    }

    let outcome = executor_handle
        .join()
        .map_err(|_| CliError::Config("Executor thread panicked".to_string()))?;

    let summary = Summary::from_results(&results);
    formatter.print_summary(&summary);

    outcome?;
    if summary.failed > 0 {
        warn!(failed = summary.failed, "run finished with errors");
        return Err(CliError::Failed(summary.failed));
    }
    Ok(())
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<SolverRegistry, CliError> {
    let builder = SolverRegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
