//! Problem-set files: a declared problem count plus one entry per test case.
//!
//! ```yaml
//! problems: 2
//! data:
//!   - problem: 1
//!     correct_answer: 8
//!     prizes: [1, 2, 3, 4]
//! ```
//!
//! Prize values stay as raw YAML until a grid is requested, so one malformed value only
//! fails its own problem instead of the whole file.

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use crate::error::{InvalidInputError, ProblemSetError};
use crate::grid::PrizeGrid;

pub const DEFAULT_PROBLEM_SET_PATH: &str = "data/problem_set.in";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProblemSet {
    /// Count declared by the file author; not necessarily `data.len()`.
    pub problems: usize,
    #[serde(default)]
    pub data: Vec<ProblemEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemEntry {
    pub problem: u64,
    pub correct_answer: i64,
    #[serde(default)]
    pub prizes: Vec<Value>,
}

impl ProblemEntry {
    pub fn new(problem: u64, correct_answer: i64, prizes: &[i64]) -> Self {
        Self {
            problem,
            correct_answer,
            prizes: prizes.iter().map(|&p| Value::from(p)).collect(),
        }
    }

    /// Prize list as integers. Floats, strings and out-of-range numbers are malformed.
    pub fn prize_values(&self) -> Result<Vec<i64>, InvalidInputError> {
        self.prizes
            .iter()
            .enumerate()
            .map(|(index, value)| {
                value.as_i64().ok_or_else(|| InvalidInputError::MalformedValue {
                    index,
                    found: describe_value(value),
                })
            })
            .collect()
    }

    pub fn to_grid(&self) -> Result<PrizeGrid, InvalidInputError> {
        PrizeGrid::from_flat(&self.prize_values()?)
    }
}

fn describe_value(value: &Value) -> String {
    match serde_yaml::to_string(value) {
        Ok(s) => s.trim().to_string(),
        Err(_) => format!("{value:?}"),
    }
}

impl ProblemSet {
    pub fn from_entries(data: Vec<ProblemEntry>) -> Self {
        Self {
            problems: data.len(),
            data,
        }
    }
}

pub fn parse_problem_set(raw: &str) -> Result<ProblemSet, ProblemSetError> {
    Ok(serde_yaml::from_str(raw)?)
}

pub fn load_problem_set(path: impl AsRef<Path>) -> Result<ProblemSet, ProblemSetError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let set = parse_problem_set(&raw)?;
    debug!(
        "loaded {} problem(s) from {} (declared {})",
        set.data.len(),
        path.display(),
        set.problems
    );
    Ok(set)
}

pub fn save_problem_set(path: impl AsRef<Path>, set: &ProblemSet) -> Result<(), ProblemSetError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_yaml::to_string(set)?)?;
    Ok(())
}
