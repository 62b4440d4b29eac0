//! Square prize board. Validated once at construction, read-only afterwards.

use std::num::NonZeroUsize;

use crate::error::InvalidInputError;

/// An n×n board of non-negative prizes stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrizeGrid {
    side: usize,
    cells: Vec<u64>,
}

/// Largest `n` with `n * n <= count`.
fn integer_sqrt(count: usize) -> usize {
    let mut n = (count as f64).sqrt() as usize;
    while n * n > count {
        n -= 1;
    }
    while (n + 1) * (n + 1) <= count {
        n += 1;
    }
    n
}

fn checked_prize(row: usize, col: usize, value: i64) -> Result<u64, InvalidInputError> {
    u64::try_from(value).map_err(|_| InvalidInputError::NegativeValue { row, col, value })
}

impl PrizeGrid {
    /// Build from explicit rows. Every row must have exactly `rows.len()` cells.
    pub fn from_rows<R: AsRef<[i64]>>(rows: &[R]) -> Result<Self, InvalidInputError> {
        let side = rows.len();
        if side == 0 {
            return Err(InvalidInputError::Empty);
        }
        let mut cells = Vec::with_capacity(side * side);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != side {
                return Err(InvalidInputError::NotSquare {
                    row,
                    expected: side,
                    found: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                cells.push(checked_prize(row, col, value)?);
            }
        }
        Ok(Self { side, cells })
    }

    /// Reshape a flat row-major list: element `i` lands at `(i / n, i % n)`.
    pub fn from_flat(values: &[i64]) -> Result<Self, InvalidInputError> {
        if values.is_empty() {
            return Err(InvalidInputError::Empty);
        }
        let side = integer_sqrt(values.len());
        if side * side != values.len() {
            return Err(InvalidInputError::NotPerfectSquare {
                count: values.len(),
            });
        }
        let cells = values
            .iter()
            .enumerate()
            .map(|(i, &value)| checked_prize(i / side, i % side, value))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { side, cells })
    }

    /// Fill a `side`×`side` board from `prize(row, col)`. Cannot fail: the side is non-zero
    /// and every `u64` is a valid prize.
    pub fn from_fn<F>(side: NonZeroUsize, mut prize: F) -> Self
    where
        F: FnMut(usize, usize) -> u64,
    {
        let side = side.get();
        let cells = (0..side * side).map(|i| prize(i / side, i % side)).collect();
        Self { side, cells }
    }

    pub fn side(&self) -> usize {
        self.side
    }

    /// Prize at `(row, col)`. Panics when out of bounds, like slice indexing.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u64 {
        self.cells[row * self.side + col]
    }

    /// All prizes in row-major order.
    pub fn cells(&self) -> &[u64] {
        &self.cells
    }

    /// Swap rows and columns.
    pub fn transpose(&self) -> Self {
        let n = self.side;
        let cells = (0..n * n).map(|i| self.get(i % n, i / n)).collect();
        Self { side: n, cells }
    }

    pub fn max_cell(&self) -> u64 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.cells.iter().fold(0u64, |acc, &v| acc.saturating_add(v))
    }

    /// Copy with one cell replaced.
    pub fn with_cell(&self, row: usize, col: usize, value: u64) -> Self {
        let mut cells = self.cells.clone();
        cells[row * self.side + col] = value;
        Self {
            side: self.side,
            cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_sqrt_handles_boundaries() {
        assert_eq!(integer_sqrt(0), 0);
        assert_eq!(integer_sqrt(1), 1);
        assert_eq!(integer_sqrt(8), 2);
        assert_eq!(integer_sqrt(9), 3);
        assert_eq!(integer_sqrt(10), 3);
    }

    #[test]
    fn from_flat_reshapes_row_major() {
        let grid = PrizeGrid::from_flat(&[1, 2, 3, 4]).unwrap();
        assert_eq!(grid.side(), 2);
        assert_eq!(grid.cells(), &[1, 2, 3, 4]);
        assert_eq!(grid.get(1, 0), 3);
    }

    #[test]
    fn from_flat_rejects_non_square_count() {
        let err = PrizeGrid::from_flat(&[0; 10]).unwrap_err();
        assert_eq!(err, InvalidInputError::NotPerfectSquare { count: 10 });
    }

    #[test]
    fn from_flat_reports_position_of_negative_value() {
        let err = PrizeGrid::from_flat(&[1, 2, 3, 4, 5, -6, 7, 8, 9]).unwrap_err();
        assert_eq!(
            err,
            InvalidInputError::NegativeValue {
                row: 1,
                col: 2,
                value: -6
            }
        );
    }

    #[test]
    fn from_rows_rejects_ragged_and_empty_input() {
        let empty: Vec<Vec<i64>> = Vec::new();
        assert_eq!(PrizeGrid::from_rows(&empty), Err(InvalidInputError::Empty));

        let ragged = vec![vec![1i64, 2], vec![3]];
        assert_eq!(
            PrizeGrid::from_rows(&ragged),
            Err(InvalidInputError::NotSquare {
                row: 1,
                expected: 2,
                found: 1
            })
        );

        let wide = vec![vec![1i64, 2, 3]];
        assert!(matches!(
            PrizeGrid::from_rows(&wide),
            Err(InvalidInputError::NotSquare { row: 0, .. })
        ));
    }

    #[test]
    fn transpose_swaps_axes() {
        let grid = PrizeGrid::from_rows(&[[1i64, 2, 3], [4, 5, 6], [7, 8, 9]]).unwrap();
        let t = grid.transpose();
        assert_eq!(t.cells(), &[1, 4, 7, 2, 5, 8, 3, 6, 9]);
        assert_eq!(t.get(2, 1), 6);
        assert_eq!(t.transpose(), grid);
    }

    #[test]
    fn summary_helpers() {
        let grid = PrizeGrid::from_rows(&[[1i64, 9], [3, 4]]).unwrap();
        assert_eq!(grid.max_cell(), 9);
        assert_eq!(grid.total(), 17);
        assert_eq!(grid.with_cell(0, 0, 5).get(0, 0), 5);
        assert_eq!(grid.cells().len(), 4);
    }

    #[test]
    fn from_fn_fills_row_major() {
        let side = NonZeroUsize::new(3).unwrap();
        let grid = PrizeGrid::from_fn(side, |row, col| (row * 10 + col) as u64);
        assert_eq!(grid.side(), 3);
        assert_eq!(grid.get(2, 1), 21);
        assert_eq!(grid, PrizeGrid::from_rows(&[[0i64, 1, 2], [10, 11, 12], [20, 21, 22]]).unwrap());
    }
}
