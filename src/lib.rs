//! Maximum prize collection on a square grid with down/right moves, plus the
//! problem-set harness that checks it against expected answers.

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod grid;
pub mod harness;
pub mod logging;
pub mod optimizer;
pub mod parallel;
pub mod rng;

pub use error::{InvalidInputError, ProblemSetError};
pub use grid::PrizeGrid;
pub use optimizer::{solve_flat, solve_grid, GridPathOptimizer, SolveStrategy};
