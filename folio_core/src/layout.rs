//! # Row Layout
//!
//! Partitions an ordered list into rows following a repeating size pattern.
//! The page uses 3, 2, 2, 3, 2, 2, ... : every third row (starting with the
//! first) holds three cards, the others two.
//!
//! The pattern index advances once per *completed* row. Whatever is left
//! after the last full row becomes one final short row.
//!
//! ```text
//! N = 8   ->  [3] [2] [2] [1]
//! N = 10  ->  [3] [2] [2] [3]
//! ```
//!
//! Grouping is a pure function of the input length, so it can be called on
//! every render without holding any state.
//!
//! ## Example
//!
//! ```rust
//! use folio_core::layout::group_rows;
//!
//! let items = [1, 2, 3, 4, 5, 6, 7, 8];
//! let rows = group_rows(&items);
//! let sizes: Vec<usize> = rows.iter().map(|r| r.len()).collect();
//! assert_eq!(sizes, [3, 2, 2, 1]);
//! ```

use std::ops::Range;

/// Repeating sequence of row sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowPattern {
    sizes: &'static [usize],
}

impl RowPattern {
    /// The page's 3-2-2 pattern
    pub const STAGGERED: RowPattern = RowPattern { sizes: &[3, 2, 2] };

    /// Target size of the row at `row_index` (0-based)
    pub fn size_for(&self, row_index: usize) -> usize {
        self.sizes[row_index % self.sizes.len()]
    }

    /// Index ranges of each row for a list of `len` items.
    pub fn row_ranges(&self, len: usize) -> Vec<Range<usize>> {
        let mut ranges = Vec::new();
        let mut start = 0;
        let mut row_index = 0;

        while start < len {
            let end = (start + self.size_for(row_index)).min(len);
            ranges.push(start..end);
            start = end;
            row_index += 1;
        }

        ranges
    }

    /// Split `items` into rows, borrowing from the input.
    pub fn group<'a, T>(&self, items: &'a [T]) -> Vec<&'a [T]> {
        self.row_ranges(items.len())
            .into_iter()
            .map(|range| &items[range])
            .collect()
    }
}

impl Default for RowPattern {
    fn default() -> Self {
        RowPattern::STAGGERED
    }
}

/// Group items into 3-2-2 rows. Empty input yields no rows.
pub fn group_rows<T>(items: &[T]) -> Vec<&[T]> {
    RowPattern::STAGGERED.group(items)
}
