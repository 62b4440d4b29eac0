//! Batch evaluation of problem sets against the optimizer.

pub mod report;
pub mod runner;

pub use report::{render, render_json, render_text, write_csv, ReportFormat};
pub use runner::{
    run_problem_set, run_problem_set_with_progress, solve_entry, ProblemOutcome, ProblemResult,
    RunOptions, RunReport,
};
