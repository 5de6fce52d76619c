// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The uniform-extent row strip and its offset/index arithmetic.

use crate::window::StripWindow;

/// A dense strip of rows indexed `0..len`, all sharing one extent.
///
/// Offsets are measured from the start of the strip and grow toward its end;
/// row `i` occupies `[i * extent, (i + 1) * extent)`. The strip is a plain
/// value: snapshot it from whatever owns the row data and rebuild the
/// snapshot when the data changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowStrip {
    len: usize,
    extent: f64,
}

impl RowStrip {
    /// Creates a strip of `len` rows with the given uniform extent.
    ///
    /// A non-positive or non-finite `extent` yields a degenerate strip: all
    /// offset queries return `0.0` / `None` and windows are empty.
    #[must_use]
    pub fn new(len: usize, extent: f64) -> Self {
        Self { len, extent }
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the strip has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the uniform per-row extent.
    #[must_use]
    pub fn extent(&self) -> f64 {
        self.extent
    }

    /// Returns `true` if the strip can position rows at all.
    ///
    /// Degenerate strips (no rows, or a non-positive/non-finite extent) have
    /// no usable geometry.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        // NaN extents fail the finiteness check.
        self.len == 0 || self.extent <= 0.0 || !self.extent.is_finite()
    }

    /// Returns the total extent of all rows.
    #[must_use]
    pub fn total_extent(&self) -> f64 {
        if self.is_degenerate() {
            0.0
        } else {
            usize_to_f64(self.len) * self.extent
        }
    }

    /// Returns the start offset of row `index`.
    ///
    /// `index == len` is allowed and returns the end of the strip, so that
    /// `offset_of(i + 1) - offset_of(i)` is always the row extent.
    #[must_use]
    pub fn offset_of(&self, index: usize) -> f64 {
        if self.is_degenerate() {
            0.0
        } else {
            usize_to_f64(index.min(self.len)) * self.extent
        }
    }

    /// Returns the index of the row nearest to `offset`, clamped to valid rows.
    ///
    /// Offsets before the strip map to row `0`; offsets at or past the end
    /// map to the last row. Returns `0` for a degenerate strip.
    #[must_use]
    pub fn index_at_offset(&self, offset: f64) -> usize {
        if self.is_degenerate() || !offset.is_finite() {
            return 0;
        }
        let approx = floor_to_usize(offset / self.extent);
        approx.min(self.len - 1)
    }

    /// Returns the index of the row whose span contains `offset`, if any.
    ///
    /// Unlike [`RowStrip::index_at_offset`], offsets outside `[0,
    /// total_extent)` return `None` instead of clamping.
    #[must_use]
    pub fn index_containing(&self, offset: f64) -> Option<usize> {
        if self.is_degenerate() || !offset.is_finite() {
            return None;
        }
        if offset < 0.0 || offset >= self.total_extent() {
            return None;
        }
        // In range, so the clamped query is exact.
        Some(self.index_at_offset(offset))
    }

    /// Computes the `[start, end)` row range intersecting a scrolled viewport.
    ///
    /// `scroll_offset` is the strip-space offset visible at the start of the
    /// viewport; `viewport_extent` is the viewport's size along the strip.
    /// `overscan_before` and `overscan_after` widen the realized range by a
    /// distance (not a row count) on each side, for hosts that want rows
    /// ready just outside the visible region.
    ///
    /// Rows intersecting the widened span `[scroll_offset - overscan_before,
    /// scroll_offset + viewport_extent + overscan_after)` are included. A row
    /// that merely touches the span boundary with zero overlap is excluded.
    /// Degenerate strips and non-finite or non-positive viewports yield an
    /// empty window.
    #[must_use]
    pub fn window(
        &self,
        scroll_offset: f64,
        viewport_extent: f64,
        overscan_before: f64,
        overscan_after: f64,
    ) -> StripWindow {
        let empty = StripWindow {
            start: 0,
            end: 0,
            leading_extent: 0.0,
            content_extent: self.total_extent(),
        };
        if self.is_degenerate()
            || !scroll_offset.is_finite()
            || viewport_extent <= 0.0
            || !viewport_extent.is_finite()
        {
            return empty;
        }
        let before = overscan_before.max(0.0);
        let after = overscan_after.max(0.0);
        if !before.is_finite() || !after.is_finite() {
            return empty;
        }

        let span_start = (scroll_offset - before).max(0.0);
        let span_end = (scroll_offset + viewport_extent + after).max(0.0);
        if span_end <= span_start || span_start >= self.total_extent() {
            return empty;
        }

        let start = floor_to_usize(span_start / self.extent).min(self.len);
        let end = ceil_to_usize(span_end / self.extent).min(self.len);
        StripWindow {
            start,
            end,
            leading_extent: self.offset_of(start),
            content_extent: self.total_extent(),
        }
    }
}

/// Converts a row count or index to `f64`.
///
/// Counts stay far below 2^53 in practice, so the conversion is exact for
/// every strip a UI can realistically hold.
fn usize_to_f64(value: usize) -> f64 {
    value as f64
}

/// Floors a non-negative finite value and converts it to `usize`.
///
/// Callers guarantee `value >= 0.0`; the saturating float-to-int cast then
/// matches a mathematical floor.
fn floor_to_usize(value: f64) -> usize {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Truncation toward zero is floor for the non-negative inputs used here"
    )]
    {
        value as usize
    }
}

/// Ceils a non-negative finite value and converts it to `usize`.
///
/// Avoids `f64::ceil` so the crate stays free of `std`/`libm` math.
fn ceil_to_usize(value: f64) -> usize {
    let floored = floor_to_usize(value);
    if usize_to_f64(floored) < value {
        floored.saturating_add(1)
    } else {
        floored
    }
}

#[cfg(test)]
mod tests {
    use super::RowStrip;

    #[test]
    fn offsets_and_totals_for_uniform_rows() {
        let strip = RowStrip::new(10, 25.0);
        assert_eq!(strip.len(), 10);
        assert_eq!(strip.total_extent(), 250.0);
        assert_eq!(strip.offset_of(0), 0.0);
        assert_eq!(strip.offset_of(4), 100.0);
        // One-past-the-end is the strip end.
        assert_eq!(strip.offset_of(10), 250.0);
        assert_eq!(strip.offset_of(99), 250.0);
    }

    #[test]
    fn index_at_offset_clamps_to_valid_rows() {
        let strip = RowStrip::new(10, 25.0);
        assert_eq!(strip.index_at_offset(-5.0), 0);
        assert_eq!(strip.index_at_offset(0.0), 0);
        assert_eq!(strip.index_at_offset(24.999), 0);
        assert_eq!(strip.index_at_offset(25.0), 1);
        assert_eq!(strip.index_at_offset(249.0), 9);
        assert_eq!(strip.index_at_offset(1_000.0), 9);
    }

    #[test]
    fn index_containing_rejects_out_of_strip_offsets() {
        let strip = RowStrip::new(4, 50.0);
        assert_eq!(strip.index_containing(-0.1), None);
        assert_eq!(strip.index_containing(0.0), Some(0));
        assert_eq!(strip.index_containing(199.9), Some(3));
        assert_eq!(strip.index_containing(200.0), None);
        assert_eq!(strip.index_containing(f64::NAN), None);
    }

    #[test]
    fn degenerate_strips_have_no_geometry() {
        for strip in [
            RowStrip::new(0, 25.0),
            RowStrip::new(10, 0.0),
            RowStrip::new(10, -3.0),
            RowStrip::new(10, f64::NAN),
        ] {
            assert!(strip.is_degenerate());
            assert_eq!(strip.total_extent(), 0.0);
            assert_eq!(strip.offset_of(3), 0.0);
            assert_eq!(strip.index_containing(10.0), None);
            assert!(strip.window(0.0, 100.0, 0.0, 0.0).is_empty());
        }
    }

    #[test]
    fn window_covers_exactly_the_intersecting_rows() {
        let strip = RowStrip::new(100, 20.0);

        // Viewport aligned to row boundaries: the row starting at the end of
        // the span has zero overlap and is excluded.
        let w = strip.window(100.0, 60.0, 0.0, 0.0);
        assert_eq!(w.range(), 5..8);
        assert_eq!(w.leading_extent, 100.0);
        assert_eq!(w.content_extent, 2000.0);

        // Misaligned viewport picks up partial rows on both sides.
        let w = strip.window(90.0, 60.0, 0.0, 0.0);
        assert_eq!(w.range(), 4..8);

        // A viewport smaller than one row still realizes the row under it.
        let w = strip.window(30.0, 5.0, 0.0, 0.0);
        assert_eq!(w.range(), 1..2);
    }

    #[test]
    fn window_clamps_to_strip_bounds() {
        let strip = RowStrip::new(5, 50.0);

        // Scrolled past the end: nothing to realize.
        assert!(strip.window(400.0, 100.0, 0.0, 0.0).is_empty());

        // Negative offsets clamp to the strip start.
        let w = strip.window(-75.0, 100.0, 0.0, 0.0);
        assert_eq!(w.range(), 0..1);

        // A huge viewport realizes everything.
        let w = strip.window(0.0, 1e9, 0.0, 0.0);
        assert_eq!(w.range(), 0..5);
    }

    #[test]
    fn overscan_widens_the_window_by_distance() {
        let strip = RowStrip::new(100, 20.0);
        let base = strip.window(100.0, 60.0, 0.0, 0.0);
        assert_eq!(base.range(), 5..8);

        // One row of overscan on each side.
        let w = strip.window(100.0, 60.0, 20.0, 20.0);
        assert_eq!(w.range(), 4..9);

        // Asymmetric overscan, and a fractional distance realizes the
        // partially-covered row.
        let w = strip.window(100.0, 60.0, 0.0, 10.0);
        assert_eq!(w.range(), 5..9);

        // Negative overscan is treated as zero, never narrowing the window.
        let w = strip.window(100.0, 60.0, -50.0, -50.0);
        assert_eq!(w.range(), 5..8);
    }

    #[test]
    fn window_rejects_non_finite_inputs() {
        let strip = RowStrip::new(10, 20.0);
        assert!(strip.window(f64::NAN, 60.0, 0.0, 0.0).is_empty());
        assert!(strip.window(0.0, f64::INFINITY, 0.0, 0.0).is_empty());
        assert!(strip.window(0.0, 60.0, f64::INFINITY, 0.0).is_empty());
        assert!(strip.window(0.0, 0.0, 0.0, 0.0).is_empty());
    }
}
