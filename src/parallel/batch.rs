//! Chunk boundaries for progress-reporting runs over a problem set.

/// Cut `total` entries into at most `chunks` contiguous `[start, end)` ranges.
///
/// Sizes differ by at most one, larger chunks first. Fewer entries than chunks gives
/// one entry per chunk; no entries gives no chunks.
///
/// ```
/// # use prize_path::parallel::batch_ranges;
/// assert_eq!(batch_ranges(7, 3), vec![(0, 3), (3, 5), (5, 7)]);
/// ```
pub fn batch_ranges(total: usize, chunks: usize) -> Vec<(usize, usize)> {
    let chunks = chunks.min(total);
    if chunks == 0 {
        return Vec::new();
    }
    let (size, larger) = (total / chunks, total % chunks);
    (0..chunks)
        .scan(0, |start, i| {
            let range = (*start, *start + size + usize::from(i < larger));
            *start = range.1;
            Some(range)
        })
        .collect()
}
