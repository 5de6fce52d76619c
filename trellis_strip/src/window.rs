// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The realized-window result returned by strip queries.

use core::ops::Range;

/// The row range a host should realize for one scroll position.
///
/// Produced by [`RowStrip::window`](crate::RowStrip::window). Hosts diff
/// consecutive windows to decide which rows to create, recycle, or leave
/// alone, and use `leading_extent` to position the first realized row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StripWindow {
    /// First realized row index.
    pub start: usize,
    /// One past the last realized row index.
    pub end: usize,
    /// Strip-space extent preceding row `start`.
    pub leading_extent: f64,
    /// Total extent of the whole strip, realized or not.
    pub content_extent: f64,
}

impl StripWindow {
    /// Returns the realized `[start, end)` index range.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Returns the number of realized rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` if no rows are realized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Returns `true` if `index` falls inside the realized range.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::StripWindow;

    #[test]
    fn range_len_and_contains_agree() {
        let w = StripWindow {
            start: 3,
            end: 7,
            leading_extent: 60.0,
            content_extent: 200.0,
        };
        assert_eq!(w.range(), 3..7);
        assert_eq!(w.len(), 4);
        assert!(!w.is_empty());
        assert!(w.contains(3));
        assert!(w.contains(6));
        assert!(!w.contains(7));
        assert!(!w.contains(2));
    }

    #[test]
    fn empty_window_has_no_rows() {
        let w = StripWindow {
            start: 5,
            end: 5,
            leading_extent: 0.0,
            content_extent: 100.0,
        };
        assert!(w.is_empty());
        assert_eq!(w.len(), 0);
        assert!(!w.contains(5));
    }
}
