// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::ops::Range;

use kurbo::{Point, Size};

use trellis_scroll::{ScrollView, ScrollViewDebugInfo};
use trellis_strip::{RowStrip, StripWindow};

use crate::cell::TableCell;
use crate::datasource::TableDataSource;
use crate::delegate::TableViewDelegate;
use crate::fill_order::FillOrder;
use crate::stats::TableStats;
use crate::touch::{TapOutcome, TapState};

/// A scrollable list that materializes only the cells intersecting its
/// viewport and recycles the rest.
///
/// The table maintains three pieces of state:
///
/// - the **used map**, an ordered index → cell mapping for every
///   materialized index (its key set is the visible index set);
/// - the **free pool**, a LIFO stack of cells detached from the layout and
///   ready to represent a new index;
/// - a **scroll viewport** and a **row strip** snapshot (count and uniform
///   cell height, re-queried from the data source on every
///   [`reload_data`](TableView::reload_data)).
///
/// Cells are created lazily through the data source the first time an index
/// must materialize with an empty pool, and live for the table's lifetime;
/// recycling reuses them, it never frees them.
///
/// All operations are synchronous and none is re-entrant: delegate
/// callbacks receive the table's cells by reference and cannot call back
/// into the same table while it is borrowed.
#[derive(Debug)]
pub struct TableView<T, D: TableDataSource<T>> {
    source: D,
    fill_order: FillOrder,
    viewport: Size,
    cell_size: Size,
    strip: RowStrip,
    scroll: ScrollView,
    overscan: f64,
    used: BTreeMap<usize, TableCell<T>>,
    free: Vec<TableCell<T>>,
    touch: TapState,
    stats: TableStats,
}

impl<T, D: TableDataSource<T>> TableView<T, D> {
    /// Creates a table over `source` with the given viewport size.
    ///
    /// The table starts empty: no cells are materialized and the row count
    /// is zero until the first [`reload_data`](TableView::reload_data).
    #[must_use]
    pub fn new(source: D, viewport: Size) -> Self {
        Self::with_fill_order(source, viewport, FillOrder::default())
    }

    /// Creates a table with an explicit fill order.
    #[must_use]
    pub fn with_fill_order(source: D, viewport: Size, fill_order: FillOrder) -> Self {
        Self {
            source,
            fill_order,
            viewport,
            cell_size: Size::ZERO,
            strip: RowStrip::new(0, 0.0),
            scroll: ScrollView::new(viewport.height),
            overscan: 0.0,
            used: BTreeMap::new(),
            free: Vec::new(),
            touch: TapState::default(),
            stats: TableStats::default(),
        }
    }

    /// Returns the data source.
    #[must_use]
    pub fn source(&self) -> &D {
        &self.source
    }

    /// Returns the data source mutably.
    ///
    /// Mutations the table should reflect (count or size changes) require a
    /// [`reload_data`](TableView::reload_data) afterwards.
    pub fn source_mut(&mut self) -> &mut D {
        &mut self.source
    }

    /// Replaces the data source.
    ///
    /// The table keeps showing the previous source's cells until the next
    /// [`reload_data`](TableView::reload_data).
    pub fn set_source(&mut self, source: D) {
        self.source = source;
    }

    /// Returns the fill order.
    #[must_use]
    pub fn fill_order(&self) -> FillOrder {
        self.fill_order
    }

    /// Sets the fill order.
    ///
    /// Every materialized cell is repositioned for the new anchoring, then
    /// the visible window is re-synchronized against the current offset:
    /// indices that mirrored out of view are recycled into the indices that
    /// mirrored in. Cells representing indices visible under both orders
    /// keep their identity.
    pub fn set_fill_order(&mut self, fill_order: FillOrder) {
        if self.fill_order == fill_order {
            return;
        }
        self.fill_order = fill_order;
        let indices: Vec<usize> = self.used.keys().copied().collect();
        for index in indices {
            self.update_cell_at_index(index);
        }
        self.sync_visible_window();
    }

    /// Returns the viewport size.
    #[must_use]
    pub fn viewport_size(&self) -> Size {
        self.viewport
    }

    /// Resizes the viewport and re-synchronizes the visible window.
    pub fn set_viewport_size(&mut self, viewport: Size) {
        if self.viewport == viewport {
            return;
        }
        self.viewport = viewport;
        self.scroll.set_viewport_extent(viewport.height);
        self.sync_visible_window();
    }

    /// Returns the symmetric overscan distance.
    #[must_use]
    pub fn overscan(&self) -> f64 {
        self.overscan
    }

    /// Sets an overscan distance and re-synchronizes the visible window.
    ///
    /// Overscan widens the maintained window by a distance (not a row
    /// count) on both sides, so rows are materialized just before they
    /// scroll into view. Negative or non-finite values are treated as zero.
    pub fn set_overscan(&mut self, overscan: f64) {
        self.overscan = if overscan.is_finite() {
            overscan.max(0.0)
        } else {
            0.0
        };
        self.sync_visible_window();
    }

    /// Returns the row count as of the last reload.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.strip.len()
    }

    /// Returns the uniform cell size as of the last reload.
    #[must_use]
    pub fn cell_size(&self) -> Size {
        self.cell_size
    }

    /// Returns the scroll viewport.
    ///
    /// Read-only: offset mutations must go through the table so the visible
    /// window stays in sync.
    #[must_use]
    pub fn scroll_view(&self) -> &ScrollView {
        &self.scroll
    }

    /// Returns the current content offset.
    #[must_use]
    pub fn scroll_offset(&self) -> f64 {
        self.scroll.offset()
    }

    /// Discards the current visible window and rebuilds it from the data
    /// source's present state.
    ///
    /// Every materialized cell is parked in the free pool, the count and
    /// cell size are re-queried, and the visible window is repopulated
    /// (drawing on the pool first). Calling this twice in a row with an
    /// unchanged source yields the same visible state.
    pub fn reload_data(&mut self) {
        while let Some((_, mut cell)) = self.used.pop_first() {
            cell.set_index(None);
            self.free.push(cell);
            self.stats.freed += 1;
        }
        self.cell_size = self.source.cell_size();
        self.strip = RowStrip::new(self.source.cell_count(), self.cell_size.height);
        self.scroll.set_content_extent(self.strip.total_extent());
        self.sync_visible_window();
    }

    /// Returns the cell materialized at `index`, if any.
    #[must_use]
    pub fn cell_at_index(&self, index: usize) -> Option<&TableCell<T>> {
        self.used.get(&index)
    }

    /// Returns the cell materialized at `index` mutably, if any.
    pub fn cell_at_index_mut(&mut self, index: usize) -> Option<&mut TableCell<T>> {
        self.used.get_mut(&index)
    }

    /// Removes and returns the most recently pooled cell.
    ///
    /// Returns `None` when the pool is empty, the expected steady state
    /// signaling that the next materialization must build a new cell.
    pub fn dequeue_cell(&mut self) -> Option<TableCell<T>> {
        self.free.pop()
    }

    /// Materializes the cell for `index` and adds it to the layout.
    ///
    /// Prefers reconfiguring a pooled cell over building a new one. No-op
    /// if `index` is already visible or outside `[0, cell_count)`.
    pub fn insert_cell_at_index(&mut self, index: usize) {
        if index >= self.strip.len() || self.used.contains_key(&index) {
            return;
        }
        let recycled = self.dequeue_cell();
        let reused = recycled.is_some();
        let mut cell = self.source.build_cell(index, recycled);
        cell.set_index(Some(index));
        cell.set_origin(self.origin_for_index(index));
        if reused {
            self.stats.reused += 1;
        } else {
            self.stats.built += 1;
        }
        self.used.insert(index, cell);
    }

    /// Detaches the cell at `index` from the layout and pools it.
    ///
    /// No-op if `index` is not visible.
    pub fn remove_cell_at_index(&mut self, index: usize) {
        if let Some(mut cell) = self.used.remove(&index) {
            cell.set_index(None);
            self.free.push(cell);
            self.stats.freed += 1;
        }
    }

    /// Recomputes and applies the origin of the cell at `index`.
    ///
    /// Identity and content are untouched; use this when layout inputs
    /// changed but the cell still represents the same data. No-op for
    /// invisible or out-of-range indices.
    pub fn update_cell_at_index(&mut self, index: usize) {
        if index >= self.strip.len() {
            return;
        }
        let origin = self.origin_for_index(index);
        if let Some(cell) = self.used.get_mut(&index) {
            cell.set_origin(origin);
        }
    }

    /// Returns `true` if `index` is materialized.
    #[must_use]
    pub fn is_index_visible(&self, index: usize) -> bool {
        self.used.contains_key(&index)
    }

    /// Iterates the visible index set in ascending order.
    pub fn visible_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.used.keys().copied()
    }

    /// Returns the smallest visible index, if any cell is materialized.
    #[must_use]
    pub fn first_visible_index(&self) -> Option<usize> {
        self.used.keys().next().copied()
    }

    /// Returns the largest visible index, if any cell is materialized.
    #[must_use]
    pub fn last_visible_index(&self) -> Option<usize> {
        self.used.keys().next_back().copied()
    }

    /// Returns the number of materialized cells.
    #[must_use]
    pub fn used_len(&self) -> usize {
        self.used.len()
    }

    /// Returns the number of pooled cells.
    #[must_use]
    pub fn free_len(&self) -> usize {
        self.free.len()
    }

    /// Sets the content offset and maintains the visible window.
    ///
    /// Indices scrolled out of the window are recycled into the pool;
    /// indices scrolled in are materialized, drawing on the pool first.
    pub fn set_scroll_offset(&mut self, offset: f64) {
        self.scroll.set_offset(offset);
        self.sync_visible_window();
    }

    /// Scrolls by a delta in content units and maintains the visible window.
    pub fn scroll_by(&mut self, delta: f64) {
        self.scroll.scroll_by(delta);
        self.sync_visible_window();
    }

    /// Resolves the index under a view-space point.
    ///
    /// Constant-time arithmetic over the scroll offset, uniform cell size,
    /// and fill order; no scan. Returns `None` for points outside the
    /// viewport, outside the cells' horizontal bounds, or past the content.
    #[must_use]
    pub fn index_at_point(&self, point: Point) -> Option<usize> {
        if point.x < 0.0 || point.x >= self.cell_size.width {
            return None;
        }
        if point.y < 0.0 || point.y >= self.scroll.viewport_extent() {
            return None;
        }
        let content_y = self.scroll.view_to_content_y(point.y);
        let row = self.strip.index_containing(content_y)?;
        Some(match self.fill_order {
            FillOrder::TopDown => row,
            FillOrder::BottomUp => self.strip.len() - 1 - row,
        })
    }

    /// Starts tracking a touch at a view-space position.
    pub fn touch_began(&mut self, point: Point) {
        self.touch.on_down(point);
    }

    /// Feeds a touch move.
    ///
    /// Once the touch commits to a drag, its vertical deltas pan the
    /// content (maintaining the visible window) and the delegate's
    /// [`did_scroll`](crate::ScrollViewDelegate::did_scroll) is invoked
    /// with each new offset.
    pub fn touch_moved(&mut self, point: Point, delegate: &mut dyn TableViewDelegate<T>) {
        if let Some(delta) = self.touch.on_move(point) {
            if delta.y != 0.0 {
                // Content follows the finger: dragging down reveals earlier rows.
                self.scroll_by(-delta.y);
                delegate.did_scroll(self.scroll.offset());
            }
        }
    }

    /// Ends a touch.
    ///
    /// A release that stayed within the tap slop resolves the cell under
    /// the press position and notifies the delegate's
    /// [`cell_touched`](TableViewDelegate::cell_touched); the touched index
    /// is returned. Drags and touches that resolve to no materialized cell
    /// return `None`.
    pub fn touch_ended(
        &mut self,
        point: Point,
        delegate: &mut dyn TableViewDelegate<T>,
    ) -> Option<usize> {
        match self.touch.on_up(point) {
            TapOutcome::Tap(press) => {
                let index = self.index_at_point(press)?;
                let cell = self.used.get(&index)?;
                delegate.cell_touched(index, cell);
                Some(index)
            }
            TapOutcome::Drag | TapOutcome::Idle => None,
        }
    }

    /// Abandons the touch in flight, if any.
    pub fn touch_cancelled(&mut self) {
        self.touch.cancel();
    }

    /// Returns the cell lifecycle counters.
    #[must_use]
    pub fn stats(&self) -> TableStats {
        self.stats
    }

    /// Snapshot of the current table state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> TableDebugInfo {
        TableDebugInfo {
            cell_count: self.strip.len(),
            cell_size: self.cell_size,
            fill_order: self.fill_order,
            window: self.visible_index_range(),
            used: self.used.len(),
            free: self.free.len(),
            stats: self.stats,
            scroll: self.scroll.debug_info(),
        }
    }

    /// Computes the content-space origin for `index` under the fill order.
    fn origin_for_index(&self, index: usize) -> Point {
        let y = match self.fill_order {
            FillOrder::TopDown => self.strip.offset_of(index),
            FillOrder::BottomUp => self.strip.total_extent() - self.strip.offset_of(index + 1),
        };
        Point::new(0.0, y)
    }

    fn current_window(&self) -> StripWindow {
        self.strip.window(
            self.scroll.offset(),
            self.scroll.viewport_extent(),
            self.overscan,
            self.overscan,
        )
    }

    /// Maps the content-space window into logical indices.
    ///
    /// The strip counts rows from the content top; under `BottomUp` the
    /// logical indices run the other way, so the range mirrors through the
    /// row count.
    fn visible_index_range(&self) -> Range<usize> {
        let range = self.current_window().range();
        match self.fill_order {
            FillOrder::TopDown => range,
            FillOrder::BottomUp => {
                let len = self.strip.len();
                len - range.end..len - range.start
            }
        }
    }

    /// Diffs the materialized set against the window the offset implies.
    ///
    /// Removals run first so entrants can draw the freshly pooled cells.
    fn sync_visible_window(&mut self) {
        let range = self.visible_index_range();
        let stale: Vec<usize> = self
            .used
            .keys()
            .copied()
            .filter(|index| !range.contains(index))
            .collect();
        for index in stale {
            self.remove_cell_at_index(index);
        }
        for index in range {
            self.insert_cell_at_index(index);
        }
    }
}

/// Debug snapshot of a [`TableView`] state.
#[derive(Clone, Debug)]
pub struct TableDebugInfo {
    /// Row count as of the last reload.
    pub cell_count: usize,
    /// Uniform cell size as of the last reload.
    pub cell_size: Size,
    /// Current fill order.
    pub fill_order: FillOrder,
    /// Index range the current offset implies.
    pub window: Range<usize>,
    /// Number of materialized cells.
    pub used: usize,
    /// Number of pooled cells.
    pub free: usize,
    /// Cell lifecycle counters.
    pub stats: TableStats,
    /// Scroll viewport snapshot.
    pub scroll: ScrollViewDebugInfo,
}
