//! Maximum-prize path search over a square grid.
//!
//! A path starts at (0, 0), ends at (n-1, n-1) and moves one cell down or right per
//! step. `OPT(row, col)` is the best prize sum from `(row, col)` to the terminal cell,
//! inclusive of both:
//!
//! ```text
//! OPT(r, c) = grid[r][c] + max(OPT(r+1, c), OPT(r, c+1))   // neighbours that exist
//! OPT(n-1, n-1) = grid[n-1][n-1]
//! ```
//!
//! The answer is `OPT(0, 0)`.

mod memo;

use std::fmt;
use std::str::FromStr;

use log::trace;

use crate::error::InvalidInputError;
use crate::grid::PrizeGrid;
use memo::MemoTable;

/// Evaluation order for the recurrence. Every strategy returns the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStrategy {
    /// Fill the memo table from the terminal cell back to the origin.
    BottomUp,
    /// Memoized descent from the origin, driven by an explicit stack instead of recursion.
    TopDown,
    /// Bottom-up with a single row buffer; O(n) extra space.
    RollingRow,
}

impl Default for SolveStrategy {
    fn default() -> Self {
        Self::BottomUp
    }
}

impl SolveStrategy {
    pub const ALL: [SolveStrategy; 3] = [Self::BottomUp, Self::TopDown, Self::RollingRow];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BottomUp => "bottom-up",
            Self::TopDown => "top-down",
            Self::RollingRow => "rolling-row",
        }
    }
}

impl fmt::Display for SolveStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SolveStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "bottom-up" => Ok(Self::BottomUp),
            "top-down" => Ok(Self::TopDown),
            "rolling-row" => Ok(Self::RollingRow),
            other => Err(format!(
                "unknown strategy '{other}' (expected bottom-up, top-down or rolling-row)"
            )),
        }
    }
}

/// Owns one grid and computes its best monotone path total.
#[derive(Debug, Clone)]
pub struct GridPathOptimizer {
    grid: PrizeGrid,
    strategy: SolveStrategy,
    memo: Option<MemoTable>,
}

impl GridPathOptimizer {
    pub fn new(grid: PrizeGrid) -> Self {
        Self {
            grid,
            strategy: SolveStrategy::default(),
            memo: None,
        }
    }

    pub fn from_rows<R: AsRef<[i64]>>(rows: &[R]) -> Result<Self, InvalidInputError> {
        PrizeGrid::from_rows(rows).map(Self::new)
    }

    pub fn from_flat(values: &[i64]) -> Result<Self, InvalidInputError> {
        PrizeGrid::from_flat(values).map(Self::new)
    }

    pub fn with_strategy(mut self, strategy: SolveStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Best prize total over all down/right paths from (0, 0) to (n-1, n-1).
    ///
    /// Each call starts from a fresh memo table, so the result depends only on the grid.
    pub fn solve(&mut self) -> u64 {
        trace!("solving {0}x{0} grid ({1})", self.grid.side(), self.strategy);
        match self.strategy {
            SolveStrategy::BottomUp => {
                let memo = fill_bottom_up(&self.grid);
                let best = memo.get(0, 0).unwrap_or(0);
                self.memo = Some(memo);
                best
            }
            SolveStrategy::TopDown => {
                let memo = fill_top_down(&self.grid);
                let best = memo.get(0, 0).unwrap_or(0);
                self.memo = Some(memo);
                best
            }
            SolveStrategy::RollingRow => {
                self.memo = None;
                solve_rolling_row(&self.grid)
            }
        }
    }
}

/// Successor cells of `(row, col)`: `[below, right]`, `None` off the board.
#[inline]
fn neighbours(side: usize, row: usize, col: usize) -> [Option<(usize, usize)>; 2] {
    [
        (row + 1 < side).then_some((row + 1, col)),
        (col + 1 < side).then_some((row, col + 1)),
    ]
}

fn fill_bottom_up(grid: &PrizeGrid) -> MemoTable {
    let n = grid.side();
    let mut memo = MemoTable::new(n);
    for row in (0..n).rev() {
        for col in (0..n).rev() {
            let best_next = neighbours(n, row, col)
                .into_iter()
                .flatten()
                .filter_map(|(r, c)| memo.get(r, c))
                .max()
                .unwrap_or(0);
            memo.set(row, col, grid.get(row, col).saturating_add(best_next));
        }
    }
    memo
}

fn fill_top_down(grid: &PrizeGrid) -> MemoTable {
    let n = grid.side();
    let mut memo = MemoTable::new(n);
    let mut stack = vec![(0usize, 0usize)];

    while let Some(&(row, col)) = stack.last() {
        if memo.get(row, col).is_some() {
            stack.pop();
            continue;
        }
        let next = neighbours(n, row, col);
        let pending: Vec<(usize, usize)> = next
            .into_iter()
            .flatten()
            .filter(|&(r, c)| memo.get(r, c).is_none())
            .collect();
        if !pending.is_empty() {
            stack.extend(pending);
            continue;
        }
        let best_next = next
            .into_iter()
            .flatten()
            .filter_map(|(r, c)| memo.get(r, c))
            .max()
            .unwrap_or(0);
        memo.set(row, col, grid.get(row, col).saturating_add(best_next));
        stack.pop();
    }
    memo
}

fn solve_rolling_row(grid: &PrizeGrid) -> u64 {
    let n = grid.side();
    // best[col] holds OPT for the row below until overwritten for the current row.
    let mut best = vec![0u64; n];
    for row in (0..n).rev() {
        for col in (0..n).rev() {
            let below = (row + 1 < n).then(|| best[col]);
            let right = (col + 1 < n).then(|| best[col + 1]);
            let best_next = below.into_iter().chain(right).max().unwrap_or(0);
            best[col] = grid.get(row, col).saturating_add(best_next);
        }
    }
    best.first().copied().unwrap_or(0)
}

/// Solve a grid with the default strategy.
pub fn solve_grid(grid: &PrizeGrid) -> u64 {
    GridPathOptimizer::new(grid.clone()).solve()
}

/// Reshape a flat row-major prize list into a square grid and solve it.
pub fn solve_flat(values: &[i64]) -> Result<u64, InvalidInputError> {
    Ok(GridPathOptimizer::from_flat(values)?.solve())
}
