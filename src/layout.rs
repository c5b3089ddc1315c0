// ABOUTME: Slide layout engine for name lists
// ABOUTME: Balances entries over columns and pairs columns two per slide

use crate::errors::{BreakError, Result};
use std::ops::Range;

/// Columns shown side by side on one slide
pub const COLUMNS_PER_SLIDE: usize = 2;

/// One slide of a paginated list: which slice of the entries each column shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideLayout {
    /// Zero-based slide index
    pub index: usize,
    /// Number of slides in the whole list
    pub total: usize,
    /// Entry ranges, one per column, left to right
    pub columns: Vec<Range<usize>>,
}

impl SlideLayout {
    /// The `(current, total)` counter for the slide title, only when there is more than one slide
    pub fn counter(&self) -> Option<(usize, usize)> {
        if self.total > 1 {
            Some((self.index + 1, self.total))
        } else {
            None
        }
    }
}

/// Split `count` entries into `ceil(count / column_max)` columns whose lengths
/// differ by at most one, longer columns first.
pub fn column_lengths(count: usize, column_max: usize) -> Result<Vec<usize>> {
    if column_max == 0 {
        return Err(BreakError::ConfigError(
            "column_max must be at least 1".to_string(),
        ));
    }
    if count == 0 {
        return Ok(Vec::new());
    }

    let ncols = count.div_ceil(column_max);
    let base = count / ncols;
    let longer = count - base * ncols;

    let mut lengths = vec![base + 1; longer];
    lengths.resize(ncols, base);
    Ok(lengths)
}

/// Group column lengths into slides of up to two columns, keeping their order
pub fn paginate(lengths: &[usize]) -> Vec<SlideLayout> {
    let total = lengths.len().div_ceil(COLUMNS_PER_SLIDE);
    let mut start = 0;

    lengths
        .chunks(COLUMNS_PER_SLIDE)
        .enumerate()
        .map(|(index, chunk)| {
            let columns = chunk
                .iter()
                .map(|len| {
                    let range = start..start + len;
                    start += len;
                    range
                })
                .collect();
            SlideLayout {
                index,
                total,
                columns,
            }
        })
        .collect()
}

/// Lay out `count` entries: partition into columns, then paginate
pub fn layout_entries(count: usize, column_max: usize) -> Result<Vec<SlideLayout>> {
    let lengths = column_lengths(count, column_max)?;
    Ok(paginate(&lengths))
}
