// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_table --heading-base-level=0

//! Trellis Table: a headless, cell-recycling table view.
//!
//! This crate maintains the visible subset of a conceptually large, linear
//! cell sequence inside a scrollable viewport, minimizing cell construction
//! cost by recycling off-screen cells. It is the table-view layer on top of
//! the windowing arithmetic in `trellis_strip` and the offset model in
//! `trellis_scroll`.
//!
//! The core concepts are:
//!
//! - [`TableDataSource`]: the capability set the table consumes: total
//!   cell count, uniform cell size, and cell construction/reconfiguration.
//! - [`TableCell`]: a host payload plus the index and content-space origin
//!   the table manages for it.
//! - [`TableView`]: the view itself. It owns the index-to-cell mapping for
//!   the visible window, a LIFO free pool of recycled cells, the scroll
//!   offset, and the tap-vs-drag touch state.
//! - [`TableViewDelegate`] (extending [`ScrollViewDelegate`]): the
//!   capability set the table notifies on cell touches and drag scrolling.
//!   Delegates are borrowed per call and never stored.
//! - [`FillOrder`]: whether index 0 anchors at the top or the bottom of the
//!   content.
//!
//! The table is headless: it does **not** draw, own scene nodes, or run
//! scroll physics. Hosts attach whatever they render as the cell payload,
//! read cell origins when drawing, and feed touch positions in from their
//! input layer.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use trellis_table::{TableCell, TableDataSource, TableView};
//!
//! // A data source over some labels; cells carry the label text.
//! struct Labels(Vec<String>);
//!
//! impl TableDataSource<String> for Labels {
//!     fn cell_count(&self) -> usize {
//!         self.0.len()
//!     }
//!
//!     fn cell_size(&self) -> Size {
//!         Size::new(100.0, 50.0)
//!     }
//!
//!     fn build_cell(&mut self, index: usize, recycled: Option<TableCell<String>>) -> TableCell<String> {
//!         let label = self.0[index].clone();
//!         match recycled {
//!             Some(mut cell) => {
//!                 *cell.payload_mut() = label;
//!                 cell
//!             }
//!             None => TableCell::new(label),
//!         }
//!     }
//! }
//!
//! let labels = Labels((0..100).map(|i| format!("item {i}")).collect());
//!
//! // A viewport three rows tall; populate it.
//! let mut table = TableView::new(labels, Size::new(100.0, 150.0));
//! table.reload_data();
//! assert_eq!(table.visible_indices().collect::<Vec<_>>(), [0, 1, 2]);
//!
//! // Scroll ten rows down: the table materializes entrants from its free
//! // pool instead of building new cells.
//! table.set_scroll_offset(500.0);
//! assert_eq!(table.visible_indices().collect::<Vec<_>>(), [10, 11, 12]);
//! assert_eq!(table.cell_at_index(10).unwrap().payload(), "item 10");
//! assert!(table.stats().reused > 0);
//! ```
//!
//! ## Re-entrancy
//!
//! All operations are synchronous, immediate computations over the current
//! visible window; none suspends or blocks. No operation is re-entrant with
//! itself: the borrow rules enforce this statically, since every mutation
//! takes `&mut self` and delegates are borrowed only for the duration of
//! the call that notifies them.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cell;
mod datasource;
mod delegate;
mod fill_order;
mod stats;
mod table;
mod touch;

pub use cell::TableCell;
pub use datasource::TableDataSource;
pub use delegate::{ScrollViewDelegate, TableViewDelegate};
pub use fill_order::FillOrder;
pub use stats::TableStats;
pub use table::{TableDebugInfo, TableView};
pub use touch::{DEFAULT_TAP_SLOP, TapOutcome, TapState};
