//! Solve every entry of a problem set and compare against the expected answers.
//!
//! A bad entry becomes an [ProblemOutcome::Error] for that entry only; the rest of the
//! batch still runs.

use log::{debug, info, warn};
use rayon::prelude::*;
use serde::Serialize;

use crate::data::problem_set::{ProblemEntry, ProblemSet};
use crate::optimizer::{GridPathOptimizer, SolveStrategy};
use crate::parallel::{batch_ranges, PoolError, WorkerPool};

/// Number of chunks reported by [run_problem_set_with_progress].
const PROGRESS_BATCH_COUNT: usize = 20;

#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    pub pool: WorkerPool,
    /// Solve entries one after another on the calling thread.
    pub sequential: bool,
    pub strategy: SolveStrategy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProblemOutcome {
    Correct,
    Wrong { got: u64 },
    Error { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProblemResult {
    pub problem: u64,
    pub expected: i64,
    #[serde(flatten)]
    pub outcome: ProblemOutcome,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Count declared by the problem set file.
    pub total_problems: usize,
    pub solved_correctly: usize,
    pub wrong_answers: usize,
    pub errors: usize,
    /// One result per entry, ordered by problem id.
    pub results: Vec<ProblemResult>,
    pub generated_at: String,
}

impl RunReport {
    fn from_results(total_problems: usize, mut results: Vec<ProblemResult>) -> Self {
        results.sort_by_key(|r| r.problem);
        let count = |pred: fn(&ProblemOutcome) -> bool| {
            results.iter().filter(|r| pred(&r.outcome)).count()
        };
        let solved_correctly = count(|o| matches!(o, ProblemOutcome::Correct));
        let wrong_answers = count(|o| matches!(o, ProblemOutcome::Wrong { .. }));
        let errors = count(|o| matches!(o, ProblemOutcome::Error { .. }));
        Self {
            total_problems,
            solved_correctly,
            wrong_answers,
            errors,
            results,
            generated_at: chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        }
    }

    pub fn mistakes(&self) -> impl Iterator<Item = &ProblemResult> {
        self.results
            .iter()
            .filter(|r| matches!(r.outcome, ProblemOutcome::Wrong { .. }))
    }

    pub fn failures(&self) -> impl Iterator<Item = &ProblemResult> {
        self.results
            .iter()
            .filter(|r| matches!(r.outcome, ProblemOutcome::Error { .. }))
    }

    /// True when every entry solved correctly and the declared count matches.
    pub fn all_correct(&self) -> bool {
        self.wrong_answers == 0
            && self.errors == 0
            && self.solved_correctly == self.total_problems
    }
}

/// Solve one entry. Never fails; problems surface in the outcome.
pub fn solve_entry(entry: &ProblemEntry, strategy: SolveStrategy) -> ProblemResult {
    let outcome = match entry.to_grid() {
        Ok(grid) => {
            let got = GridPathOptimizer::new(grid).with_strategy(strategy).solve();
            if i64::try_from(got).map_or(false, |g| g == entry.correct_answer) {
                ProblemOutcome::Correct
            } else {
                debug!(
                    "problem {}: expected {}, got {}",
                    entry.problem, entry.correct_answer, got
                );
                ProblemOutcome::Wrong { got }
            }
        }
        Err(err) => {
            warn!("problem {}: {}", entry.problem, err);
            ProblemOutcome::Error {
                message: err.to_string(),
            }
        }
    };
    ProblemResult {
        problem: entry.problem,
        expected: entry.correct_answer,
        outcome,
    }
}

/// Map every entry in [PROGRESS_BATCH_COUNT] chunks. One pool serves the whole run.
fn map_in_chunks<T, M, P>(
    entries: &[ProblemEntry],
    options: &RunOptions,
    map: M,
    mut on_progress: P,
) -> Result<Vec<T>, PoolError>
where
    T: Send,
    M: Fn(&ProblemEntry) -> T + Sync + Send,
    P: FnMut(usize, usize),
{
    let total = entries.len();
    let pool = if options.sequential {
        None
    } else {
        Some(options.pool.build()?)
    };

    let mut out = Vec::with_capacity(total);
    for (start, end) in batch_ranges(total, PROGRESS_BATCH_COUNT) {
        let chunk = &entries[start..end];
        match &pool {
            None => out.extend(chunk.iter().map(&map)),
            Some(pool) => {
                let solved: Vec<T> = pool.install(|| chunk.par_iter().map(&map).collect());
                out.extend(solved);
            }
        }
        on_progress(end, total);
    }
    Ok(out)
}

pub fn run_problem_set(set: &ProblemSet, options: &RunOptions) -> Result<RunReport, PoolError> {
    run_problem_set_with_progress(set, options, |_, _| {})
}

/// Like [run_problem_set] but solves in chunks and calls `on_progress(done, total)` after each.
pub fn run_problem_set_with_progress<F>(
    set: &ProblemSet,
    options: &RunOptions,
    mut on_progress: F,
) -> Result<RunReport, PoolError>
where
    F: FnMut(usize, usize),
{
    let total = set.data.len();
    info!(
        "running {} problem(s) ({}, {})",
        total,
        options.strategy,
        if options.sequential {
            "sequential"
        } else {
            "parallel"
        }
    );
    on_progress(0, total);

    let strategy = options.strategy;
    let results = map_in_chunks(
        &set.data,
        options,
        |entry| solve_entry(entry, strategy),
        on_progress,
    )?;

    let report = RunReport::from_results(set.problems, results);
    info!(
        "solved {} of {} correctly ({} wrong, {} errors)",
        report.solved_correctly, report.total_problems, report.wrong_answers, report.errors
    );
    Ok(report)
}
