//! Run configuration: defaults, then environment, then command-line flags.
//!
//! - `PRIZE_PATH_DATA`: problem set path (default [DEFAULT_PROBLEM_SET_PATH])
//! - `PRIZE_PATH_WORKERS`: worker threads, 0 = all cores

use std::env;

use log::warn;

use crate::data::problem_set::DEFAULT_PROBLEM_SET_PATH;
use crate::harness::{ReportFormat, RunOptions};
use crate::optimizer::SolveStrategy;
use crate::parallel::WorkerPool;

pub const DATA_ENV: &str = "PRIZE_PATH_DATA";
pub const WORKERS_ENV: &str = "PRIZE_PATH_WORKERS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub problem_set_path: String,
    pub workers: usize,
    pub sequential: bool,
    pub strategy: SolveStrategy,
    pub format: ReportFormat,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            problem_set_path: DEFAULT_PROBLEM_SET_PATH.to_string(),
            workers: 0,
            sequential: false,
            strategy: SolveStrategy::default(),
            format: ReportFormat::Text,
        }
    }
}

impl RunConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults overlaid with whatever `lookup` returns for the known variables.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(path) = lookup(DATA_ENV).filter(|p| !p.trim().is_empty()) {
            config.problem_set_path = path;
        }
        if let Some(raw) = lookup(WORKERS_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(workers) => config.workers = workers,
                Err(_) => warn!("invalid {WORKERS_ENV} '{raw}', using all cores"),
            }
        }
        config
    }

    /// Apply `run` flags. `args` excludes the program name and subcommand.
    pub fn apply_args(&mut self, args: &[String]) -> Result<(), String> {
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--json" => self.format = ReportFormat::Json,
                "--csv" => self.format = ReportFormat::Csv,
                "--sequential" => self.sequential = true,
                "--workers" => {
                    let value = iter.next().ok_or("--workers needs a value")?;
                    self.workers = value
                        .parse()
                        .map_err(|_| format!("invalid worker count '{value}'"))?;
                }
                "--strategy" => {
                    let value = iter.next().ok_or("--strategy needs a value")?;
                    self.strategy = value.parse()?;
                }
                flag if flag.starts_with("--") => return Err(format!("unknown flag '{flag}'")),
                path => self.problem_set_path = path.to_string(),
            }
        }
        Ok(())
    }

    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            pool: WorkerPool::with_workers(self.workers),
            sequential: self.sequential,
            strategy: self.strategy,
        }
    }
}
