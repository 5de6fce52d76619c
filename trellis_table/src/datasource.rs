// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The capability set a table consumes to materialize cells.

use kurbo::Size;

use crate::cell::TableCell;

/// Supplies a table with its row count, uniform cell size, and cells.
///
/// The table queries `cell_count` and `cell_size` on every
/// [`reload_data`](crate::TableView::reload_data) and calls `build_cell`
/// whenever an index enters the visible window. Implementations own the row
/// data; the table owns the cells it is handed.
pub trait TableDataSource<T> {
    /// Returns the total number of cells in the table.
    fn cell_count(&self) -> usize;

    /// Returns the size shared by every cell.
    ///
    /// The height drives layout and windowing; the width bounds touch
    /// resolution horizontally.
    fn cell_size(&self) -> Size;

    /// Produces the cell for `index`.
    ///
    /// When `recycled` is `Some`, the table is handing back a cell it
    /// previously displayed at another index; reconfigure its payload for
    /// `index` and return it rather than constructing a new one. Dropping
    /// the recycled cell and building fresh is permitted but forfeits the
    /// point of the pool.
    ///
    /// The returned cell's index and origin are overwritten by the table;
    /// implementations only need to care about the payload.
    fn build_cell(&mut self, index: usize, recycled: Option<TableCell<T>>) -> TableCell<T>;
}
