//! Executor that loads inputs, runs solvers and reports each phase

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::inputs::InputStore;
use aoc_solver::{DynSolver, SolveError, SolverRegistry, Verdict};
use chrono::TimeDelta;
use itertools::Itertools;
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::mpsc::Sender;
use tracing::{debug, info, info_span, warn};

/// One reported step of a day, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    Setup,
    Part(u8),
    Total,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhaseOutcome {
    /// The input parsed successfully
    Parsed,
    Answer { value: String, verdict: Verdict },
    /// Not run because an earlier phase of the day failed
    Skipped,
    Total,
}

/// Result of a single phase, sent to the aggregator as soon as it is known
#[derive(Debug, Clone)]
pub struct PhaseResult {
    pub year: u16,
    pub day: u8,
    pub phase: Phase,
    pub outcome: Result<PhaseOutcome, ArcExecutorError>,
    pub duration: TimeDelta,
}

impl PhaseResult {
    fn ok(year: u16, day: u8, phase: Phase, outcome: PhaseOutcome, duration: TimeDelta) -> Self {
        Self {
            year,
            day,
            phase,
            outcome: Ok(outcome),
            duration,
        }
    }

    fn failed(year: u16, day: u8, phase: Phase, error: ArcExecutorError) -> Self {
        Self {
            year,
            day,
            phase,
            outcome: Err(error),
            duration: TimeDelta::zero(),
        }
    }
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

impl WorkItem {
    /// Every phase this item reports: setup, each part, then the total
    pub fn phases(&self) -> impl Iterator<Item = Phase> + use<> {
        std::iter::once(Phase::Setup)
            .chain(self.parts.clone().map(Phase::Part))
            .chain(std::iter::once(Phase::Total))
    }
}

/// Executor for running solvers, sequentially or on a rayon pool
pub struct Executor {
    sync_executor_config: SyncExecutorConfig,
    thread_pool: rayon::ThreadPool,
}

pub struct SyncExecutorConfig {
    registry: SolverRegistry,
    store: InputStore,
    parallelize_by: ParallelizeBy,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let store = match &config.input_override {
            Some(path) => InputStore::File(path.clone()),
            None => InputStore::dir(&config.input_dir, config.variant),
        };

        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            sync_executor_config: SyncExecutorConfig {
                registry,
                store,
                parallelize_by: config.parallelize_by,
                year_filter: config.year_filter,
                day_filter: config.day_filter,
                part_filter: config.part_filter,
            },
            thread_pool,
        })
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let cfg = &self.sync_executor_config;
        cfg.registry
            .storage()
            .iter_info()
            .filter(|info| cfg.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| cfg.day_filter.is_none_or(|d| info.day == d))
            .filter_map(|info| {
                Some(WorkItem {
                    year: info.year,
                    day: info.day,
                    parts: self.filter_parts(info.parts)?,
                })
            })
            .collect()
    }

    /// Parts of a day with `max_parts` parts that pass the part filter
    fn filter_parts(&self, max_parts: u8) -> Option<RangeInclusive<u8>> {
        match self.sync_executor_config.part_filter {
            Some(p) if p <= max_parts => Some(p..=p),
            Some(_) => None,
            None => Some(1..=max_parts),
        }
    }

    /// Execute all work items and send each phase to `tx`.
    ///
    /// Returns the answer mismatches: sequential mode stops at the first one,
    /// the parallel modes collect them. Other failures are only reported as
    /// error rows.
    pub fn execute(&self, tx: Sender<PhaseResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();
        let cfg = &self.sync_executor_config;

        match cfg.parallelize_by {
            ParallelizeBy::Sequential => work_items
                .iter()
                .try_for_each(|work| run_day(work, &tx, cfg)),
            ParallelizeBy::Year => {
                let by_year: Vec<Vec<WorkItem>> = work_items
                    .into_iter()
                    .chunk_by(|w| w.year)
                    .into_iter()
                    .map(|(_, group)| group.collect())
                    .collect();

                self.execute_parallel(by_year, &tx)
            }
            // Part differs from Day inside run_day
            ParallelizeBy::Day | ParallelizeBy::Part => {
                let singles = work_items.into_iter().map(|w| vec![w]).collect();
                self.execute_parallel(singles, &tx)
            }
        }
    }

    /// Run groups in parallel; each group runs in order and stops at its first
    /// mismatch. Errors from all groups are combined.
    fn execute_parallel(
        &self,
        groups: Vec<Vec<WorkItem>>,
        tx: &Sender<PhaseResult>,
    ) -> Result<(), ArcExecutorError> {
        let cfg = &self.sync_executor_config;

        self.thread_pool.install(|| {
            groups
                .into_par_iter()
                .map(|items| items.iter().try_for_each(|work| run_day(work, tx, cfg)).err())
                .reduce_with(|err1, err2| match (err1, err2) {
                    (Some(e1), Some(e2)) => Some(ArcExecutorError::combine(e1, e2)),
                    (e1, e2) => e1.or(e2),
                })
                .unwrap_or_default()
                .map_or(Ok(()), Err)
        })
    }
}

fn send(tx: &Sender<PhaseResult>, row: PhaseResult) -> Result<(), ArcExecutorError> {
    tx.send(row)
        .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))
}

/// Read, parse and solve one day, sending every phase of `work`
fn run_day(
    work: &WorkItem,
    tx: &Sender<PhaseResult>,
    cfg: &SyncExecutorConfig,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);
    let span = info_span!("day", year, day);
    let _entered = span.enter();

    let input = match cfg.store.read(year, day) {
        Ok((path, input)) => {
            debug!(path = %path.display(), bytes = input.len(), "input loaded");
            input
        }
        Err(source) => {
            let error: ArcExecutorError = ExecutorError::Input {
                year,
                day,
                path: cfg.store.path(year, day),
                source,
            }
            .into();
            warn!(%error, "skipping day");
            for phase in work.phases() {
                let row = match phase {
                    Phase::Total => PhaseResult::ok(year, day, phase, PhaseOutcome::Total, TimeDelta::zero()),
                    _ => PhaseResult::failed(year, day, phase, error.clone()),
                };
                send(tx, row)?;
            }
            return Ok(());
        }
    };

    let mut solver = match cfg.registry.create_solver(year, day, &input) {
        Ok(solver) => solver,
        Err(source) => {
            let error: ArcExecutorError = ExecutorError::solver(year, day, source).into();
            warn!(%error, "parse failed");
            send(tx, PhaseResult::failed(year, day, Phase::Setup, error))?;
            for part in work.parts.clone() {
                let row = PhaseResult::ok(year, day, Phase::Part(part), PhaseOutcome::Skipped, TimeDelta::zero());
                send(tx, row)?;
            }
            return send(tx, PhaseResult::ok(year, day, Phase::Total, PhaseOutcome::Total, TimeDelta::zero()));
        }
    };

    let parse_duration = solver.parse_duration();
    debug!(elapsed_us = parse_duration.num_microseconds(), "parsed");
    send(tx, PhaseResult::ok(year, day, Phase::Setup, PhaseOutcome::Parsed, parse_duration))?;

    let rows = if matches!(cfg.parallelize_by, ParallelizeBy::Part) {
        solve_parts_parallel(work, &input, cfg)
    } else {
        solve_parts_in_order(work, &mut *solver, &cfg.store)
    };

    let mut total = parse_duration;
    let mut mismatch: Option<ArcExecutorError> = None;
    for row in rows {
        total += row.duration;
        if let Err(e) = &row.outcome
            && e.is_mismatch()
        {
            mismatch = Some(ArcExecutorError::combine_opt(mismatch, e.clone()));
        }
        send(tx, row)?;
    }
    send(tx, PhaseResult::ok(year, day, Phase::Total, PhaseOutcome::Total, total))?;

    mismatch.map_or(Ok(()), Err)
}

/// Solve the parts one after another on one parsed instance; a failed part
/// skips the ones after it
fn solve_parts_in_order(
    work: &WorkItem,
    solver: &mut dyn DynSolver,
    store: &InputStore,
) -> Vec<PhaseResult> {
    let (year, day) = (work.year, work.day);
    let mut rows = Vec::new();
    let mut failed = false;

    for part in work.parts.clone() {
        if failed {
            rows.push(PhaseResult::ok(year, day, Phase::Part(part), PhaseOutcome::Skipped, TimeDelta::zero()));
            continue;
        }
        let row = solve_part(year, day, part, solver, store);
        failed = row.outcome.is_err();
        rows.push(row);
    }
    rows
}

/// Solve each part on its own freshly parsed instance, in parallel
fn solve_parts_parallel(work: &WorkItem, input: &str, cfg: &SyncExecutorConfig) -> Vec<PhaseResult> {
    let (year, day) = (work.year, work.day);
    work.parts
        .clone()
        .into_par_iter()
        .map(|part| match cfg.registry.create_solver(year, day, input) {
            Ok(mut solver) => solve_part(year, day, part, &mut *solver, &cfg.store),
            Err(e) => PhaseResult::failed(year, day, Phase::Part(part), ExecutorError::solver(year, day, e).into()),
        })
        .collect()
}

fn solve_part(
    year: u16,
    day: u8,
    part: u8,
    solver: &mut dyn DynSolver,
    store: &InputStore,
) -> PhaseResult {
    let checked = if store.verifies() {
        solver.check(part, store.variant())
    } else {
        solver.solve(part).map(|result| (result, Verdict::Unverified))
    };

    let (result, verdict) = match checked {
        Ok(checked) => checked,
        Err(SolveError::NoSolution(reason)) if !has_recorded_answer(solver, store, part) => {
            info!(part, %reason, "no answer and none recorded, skipping");
            return PhaseResult::ok(year, day, Phase::Part(part), PhaseOutcome::Skipped, TimeDelta::zero());
        }
        Err(e) => {
            let error: ArcExecutorError = ExecutorError::solver(year, day, e).into();
            warn!(part, %error, "part failed");
            return PhaseResult::failed(year, day, Phase::Part(part), error);
        }
    };

    let duration = result.duration();
    debug!(part, answer = %result.answer, ?verdict, elapsed_us = duration.num_microseconds(), "solved");

    let outcome = match verdict {
        Verdict::Mismatch { expected } => Err(ExecutorError::Mismatch {
            year,
            day,
            part,
            expected,
            actual: result.answer,
        }
        .into()),
        verdict => Ok(PhaseOutcome::Answer {
            value: result.answer,
            verdict,
        }),
    };

    PhaseResult {
        year,
        day,
        phase: Phase::Part(part),
        outcome,
        duration,
    }
}

/// Whether the answer to `part` is known for the input being read
fn has_recorded_answer(solver: &dyn DynSolver, store: &InputStore, part: u8) -> bool {
    store.verifies() && solver.expectations().get(store.variant(), part).is_some()
}
