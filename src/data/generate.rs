//! Seeded random problem sets with answers filled in by the optimizer.

use std::num::NonZeroUsize;

use log::info;

use crate::data::problem_set::{ProblemEntry, ProblemSet};
use crate::grid::PrizeGrid;
use crate::optimizer::solve_grid;
use crate::rng::Rng;

#[derive(Debug, Clone, Copy)]
pub struct GenerateOptions {
    pub count: usize,
    pub min_side: usize,
    pub max_side: usize,
    /// Prizes are drawn from `0..=max_prize`.
    pub max_prize: u32,
    pub seed: u64,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            count: 20,
            min_side: 1,
            max_side: 12,
            max_prize: 100,
            seed: 7,
        }
    }
}

/// Build `count` problems numbered from 1. Same options, same output.
pub fn generate_problem_set(options: &GenerateOptions) -> ProblemSet {
    let mut rng = Rng::new(options.seed);
    let min_side = NonZeroUsize::new(options.min_side).unwrap_or(NonZeroUsize::MIN);
    let max_side = options.max_side.max(min_side.get());
    let spread = (max_side - min_side.get()) as u64;
    let max_prize = u64::from(options.max_prize);

    let data = (1..=options.count as u64)
        .map(|problem| {
            let side = min_side.saturating_add(rng.range_inclusive(0, spread) as usize);
            let grid = PrizeGrid::from_fn(side, |_, _| rng.range_inclusive(0, max_prize));
            // prizes are at most u32::MAX, so both casts are lossless
            let prizes: Vec<i64> = grid.cells().iter().map(|&p| p as i64).collect();
            ProblemEntry::new(problem, solve_grid(&grid) as i64, &prizes)
        })
        .collect();

    let set = ProblemSet::from_entries(data);
    info!(
        "generated {} problem(s), sides {}..={}, seed {}",
        set.data.len(),
        min_side.get(),
        max_side,
        options.seed
    );
    set
}
