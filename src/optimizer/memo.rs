/// Per-cell cache of computed path values, indexed like the grid.
///
/// An entry is `None` until its value is known and is written at most once.
#[derive(Debug, Clone)]
pub(crate) struct MemoTable {
    side: usize,
    entries: Vec<Option<u64>>,
}

impl MemoTable {
    pub(crate) fn new(side: usize) -> Self {
        Self {
            side,
            entries: vec![None; side * side],
        }
    }

    #[inline]
    pub(crate) fn get(&self, row: usize, col: usize) -> Option<u64> {
        self.entries[row * self.side + col]
    }

    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, value: u64) {
        let slot = &mut self.entries[row * self.side + col];
        debug_assert!(slot.is_none(), "memo entry ({row}, {col}) written twice");
        *slot = Some(value);
    }

    #[cfg(test)]
    pub(crate) fn filled(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }
}
