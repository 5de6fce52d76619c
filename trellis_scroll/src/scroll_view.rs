// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use kurbo::Point;

use crate::modes::ClampMode;

/// Headless vertical scroll viewport over a 1D content extent.
///
/// `ScrollView` tracks a viewport extent, a content extent, and the content
/// offset currently aligned with the viewport top. Offsets are expressed in
/// content units (typically logical pixels) and grow downward from the
/// content top.
#[derive(Clone, Debug)]
pub struct ScrollView {
    viewport_extent: f64,
    content_extent: f64,
    offset: f64,
    clamp_mode: ClampMode,
}

impl ScrollView {
    /// Creates a new scroll view with the given viewport extent.
    ///
    /// - Initial content extent is zero (nothing to scroll).
    /// - Initial offset is zero (viewport aligned with the content top).
    /// - Offsets are confined to the content by default.
    #[must_use]
    pub fn new(viewport_extent: f64) -> Self {
        let viewport_extent = if viewport_extent.is_finite() {
            viewport_extent.max(0.0)
        } else {
            0.0
        };
        Self {
            viewport_extent,
            content_extent: 0.0,
            offset: 0.0,
            clamp_mode: ClampMode::default(),
        }
    }

    /// Returns the viewport extent.
    #[must_use]
    pub fn viewport_extent(&self) -> f64 {
        self.viewport_extent
    }

    /// Sets the viewport extent.
    ///
    /// Negative or non-finite extents are treated as zero. The current
    /// offset is re-clamped afterwards, since shrinking the content-to-
    /// viewport gap can strand the offset past the new maximum.
    pub fn set_viewport_extent(&mut self, extent: f64) {
        let extent = if extent.is_finite() { extent.max(0.0) } else { 0.0 };
        if self.viewport_extent == extent {
            return;
        }
        self.viewport_extent = extent;
        self.set_offset(self.offset);
    }

    /// Returns the content extent.
    #[must_use]
    pub fn content_extent(&self) -> f64 {
        self.content_extent
    }

    /// Sets the content extent, re-clamping the current offset.
    pub fn set_content_extent(&mut self, extent: f64) {
        let extent = if extent.is_finite() { extent.max(0.0) } else { 0.0 };
        if self.content_extent == extent {
            return;
        }
        self.content_extent = extent;
        self.set_offset(self.offset);
    }

    /// Returns the current clamp mode.
    #[must_use]
    pub fn clamp_mode(&self) -> ClampMode {
        self.clamp_mode
    }

    /// Sets the clamp mode for offset mutations.
    pub fn set_clamp_mode(&mut self, mode: ClampMode) {
        if self.clamp_mode != mode {
            self.clamp_mode = mode;
            self.set_offset(self.offset);
        }
    }

    /// Returns the content offset aligned with the viewport top.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Sets the content offset, applying the configured clamping.
    ///
    /// Non-finite offsets are ignored.
    pub fn set_offset(&mut self, offset: f64) {
        if !offset.is_finite() {
            return;
        }
        self.offset = match self.clamp_mode {
            ClampMode::None => offset,
            ClampMode::Confined => offset.clamp(0.0, self.max_offset()),
        };
    }

    /// Scrolls by a delta in content units (positive scrolls toward the end).
    pub fn scroll_by(&mut self, delta: f64) {
        if delta == 0.0 || !delta.is_finite() {
            return;
        }
        self.set_offset(self.offset + delta);
    }

    /// Returns the largest confined offset.
    ///
    /// This is `content_extent - viewport_extent`, or `0` when the content
    /// fits entirely inside the viewport.
    #[must_use]
    pub fn max_offset(&self) -> f64 {
        (self.content_extent - self.viewport_extent).max(0.0)
    }

    /// Returns the content-space range currently visible through the viewport.
    #[must_use]
    pub fn visible_range(&self) -> Range<f64> {
        self.offset..self.offset + self.viewport_extent
    }

    /// Converts a view-space y coordinate into content space.
    #[must_use]
    pub fn view_to_content_y(&self, y: f64) -> f64 {
        y + self.offset
    }

    /// Converts a content-space y coordinate into view space.
    #[must_use]
    pub fn content_to_view_y(&self, y: f64) -> f64 {
        y - self.offset
    }

    /// Converts a view-space point into content space.
    ///
    /// Only the y coordinate is transformed; x passes through unchanged,
    /// since the model scrolls along a single axis.
    #[must_use]
    pub fn view_to_content_point(&self, pt: Point) -> Point {
        Point::new(pt.x, self.view_to_content_y(pt.y))
    }

    /// Converts a content-space point into view space.
    #[must_use]
    pub fn content_to_view_point(&self, pt: Point) -> Point {
        Point::new(pt.x, self.content_to_view_y(pt.y))
    }

    /// Returns the offset that aligns the end of the content with the end of
    /// the viewport.
    ///
    /// Equals [`ScrollView::max_offset`]; named separately because callers
    /// use it as a target ("scroll to the end") rather than a bound.
    #[must_use]
    pub fn end_offset(&self) -> f64 {
        self.max_offset()
    }

    /// Returns `true` if the offset is within `epsilon` below the end.
    ///
    /// The check is asymmetric: positions slightly before the end count as
    /// "at the end", matching the common feed behavior of treating "near the
    /// bottom" as "at the bottom" so new rows keep the view pinned.
    #[must_use]
    pub fn is_at_end(&self, epsilon: f64) -> bool {
        self.offset + epsilon.max(0.0) >= self.end_offset()
    }

    /// Scrolls so the end of the content aligns with the end of the viewport.
    pub fn scroll_to_end(&mut self) {
        self.set_offset(self.end_offset());
    }

    /// Snapshot of the current scroll state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ScrollViewDebugInfo {
        ScrollViewDebugInfo {
            viewport_extent: self.viewport_extent,
            content_extent: self.content_extent,
            offset: self.offset,
            max_offset: self.max_offset(),
            visible_range: self.visible_range(),
            clamp_mode: self.clamp_mode,
        }
    }
}

/// Debug snapshot of a [`ScrollView`] state.
#[derive(Clone, Debug)]
pub struct ScrollViewDebugInfo {
    /// Viewport extent in content units.
    pub viewport_extent: f64,
    /// Total content extent.
    pub content_extent: f64,
    /// Current content offset at the viewport top.
    pub offset: f64,
    /// Largest confined offset.
    pub max_offset: f64,
    /// Content-space range visible through the viewport.
    pub visible_range: Range<f64>,
    /// Clamp mode applied to offset mutations.
    pub clamp_mode: ClampMode,
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{ClampMode, ScrollView};

    fn view() -> ScrollView {
        let mut v = ScrollView::new(200.0);
        v.set_content_extent(1000.0);
        v
    }

    #[test]
    fn offsets_confine_to_scrollable_range_by_default() {
        let mut v = view();
        assert_eq!(v.clamp_mode(), ClampMode::Confined);
        assert_eq!(v.max_offset(), 800.0);

        v.set_offset(-50.0);
        assert_eq!(v.offset(), 0.0);

        v.set_offset(350.0);
        assert_eq!(v.offset(), 350.0);

        v.scroll_by(10_000.0);
        assert_eq!(v.offset(), 800.0);
    }

    #[test]
    fn unclamped_mode_allows_overscroll() {
        let mut v = view();
        v.set_clamp_mode(ClampMode::None);
        v.set_offset(-30.0);
        assert_eq!(v.offset(), -30.0);

        // Switching clamping back on pulls the offset into range.
        v.set_clamp_mode(ClampMode::Confined);
        assert_eq!(v.offset(), 0.0);
    }

    #[test]
    fn content_fitting_in_viewport_never_scrolls() {
        let mut v = ScrollView::new(500.0);
        v.set_content_extent(120.0);
        assert_eq!(v.max_offset(), 0.0);

        v.scroll_by(75.0);
        assert_eq!(v.offset(), 0.0);
        assert!(v.is_at_end(0.0));
    }

    #[test]
    fn shrinking_content_reclamps_the_offset() {
        let mut v = view();
        v.set_offset(800.0);
        v.set_content_extent(300.0);
        assert_eq!(v.offset(), 100.0);

        v.set_viewport_extent(300.0);
        assert_eq!(v.offset(), 0.0);
    }

    #[test]
    fn view_content_conversion_roundtrips() {
        let mut v = view();
        v.set_offset(350.0);

        assert_eq!(v.view_to_content_y(25.0), 375.0);
        assert_eq!(v.content_to_view_y(375.0), 25.0);
        assert_eq!(v.visible_range(), 350.0..550.0);

        let p = Point::new(40.0, 25.0);
        let c = v.view_to_content_point(p);
        assert_eq!(c, Point::new(40.0, 375.0));
        assert_eq!(v.content_to_view_point(c), p);
    }

    #[test]
    fn end_anchoring_helpers_agree_with_max_offset() {
        let mut v = view();
        assert_eq!(v.end_offset(), 800.0);

        v.scroll_to_end();
        assert_eq!(v.offset(), 800.0);
        assert!(v.is_at_end(0.0));

        v.set_offset(799.5);
        assert!(v.is_at_end(1.0));
        assert!(!v.is_at_end(0.0));

        v.set_offset(700.0);
        assert!(!v.is_at_end(1.0));
    }

    #[test]
    fn non_finite_inputs_are_ignored_or_zeroed() {
        let mut v = view();
        v.set_offset(350.0);

        v.set_offset(f64::NAN);
        assert_eq!(v.offset(), 350.0);
        v.scroll_by(f64::INFINITY);
        assert_eq!(v.offset(), 350.0);

        v.set_content_extent(f64::NAN);
        assert_eq!(v.content_extent(), 0.0);
        assert_eq!(v.offset(), 0.0);
    }

    #[test]
    fn debug_info_reflects_current_state() {
        let mut v = view();
        v.set_offset(100.0);
        let info = v.debug_info();
        assert_eq!(info.viewport_extent, 200.0);
        assert_eq!(info.content_extent, 1000.0);
        assert_eq!(info.offset, 100.0);
        assert_eq!(info.max_offset, 800.0);
        assert_eq!(info.visible_range, 100.0..300.0);
        assert_eq!(info.clamp_mode, ClampMode::Confined);
    }
}
