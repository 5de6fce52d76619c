// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Strip: core 1D windowing arithmetic for uniform row strips.
//!
//! This crate provides a small, renderer-agnostic core for reasoning about a
//! dense strip of rows indexed `0..len`, all sharing one extent. It answers
//! the questions a recycling list view asks on every scroll step:
//!
//! - [`RowStrip`]: the strip itself, a row count plus the uniform per-row
//!   extent, with offset/index conversions and the total content extent.
//! - [`RowStrip::window`]: given a scroll offset, a viewport extent, and
//!   asymmetric overscan distances, which `[start, end)` index range should
//!   be realized, and how much leading extent precedes it.
//! - [`StripWindow`]: the result of that computation.
//!
//! Because every row has the same extent, all queries are closed-form
//! arithmetic; nothing here allocates or searches.
//!
//! This crate deliberately does **not** know about cells, viewports, or any
//! particular UI stack. Hosts are responsible for:
//!
//! - Calling [`RowStrip::window`] when scroll or viewport changes.
//! - Diffing the returned `[start, end)` range to create/destroy/recycle
//!   whatever visual objects represent rows.
//!
//! ## Minimal example
//!
//! ```rust
//! use trellis_strip::RowStrip;
//!
//! // 100 rows, each 20 logical pixels tall.
//! let strip = RowStrip::new(100, 20.0);
//! assert_eq!(strip.total_extent(), 2000.0);
//!
//! // Viewport of 60px scrolled 100px from the start: rows 5..9 intersect.
//! let window = strip.window(100.0, 60.0, 0.0, 0.0);
//! assert_eq!(window.range(), 5..8);
//! assert_eq!(window.leading_extent, 100.0);
//! ```
//!
//! All extents and offsets live in a caller-chosen 1D coordinate space
//! (typically logical pixels) and are expected to be finite; non-finite or
//! non-positive geometry degrades to empty windows rather than panicking.
//! This crate is `no_std` and does not allocate.

#![no_std]

mod strip;
mod window;

pub use strip::RowStrip;
pub use window::StripWindow;
