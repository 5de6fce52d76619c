// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Scroll: a headless vertical scroll-viewport model.
//!
//! This crate provides a small model of a scrollable viewport over a 1D
//! content extent, where both are typically expressed in logical pixels. It
//! focuses on:
//!
//! - Clamped content-offset state (how far the content is scrolled).
//! - Coordinate conversion between view space and content space.
//! - End-anchoring helpers for feed-style hosts that want to stay pinned to
//!   the bottom of growing content.
//!
//! It does **not** own any scroll physics, gesture recognition, or
//! rendering. Callers are expected to:
//!
//! - Feed pan deltas or absolute offsets in from their input layer.
//! - Keep [`ScrollView::set_content_extent`] in sync with their content.
//! - Use the conversion helpers to map pointer positions into content space
//!   for hit testing.
//!
//! ## Minimal example
//!
//! ```rust
//! use trellis_scroll::ScrollView;
//!
//! // A 200px-tall viewport over 1000px of content.
//! let mut view = ScrollView::new(200.0);
//! view.set_content_extent(1000.0);
//!
//! view.scroll_by(350.0);
//! assert_eq!(view.offset(), 350.0);
//!
//! // Offsets clamp to the scrollable range by default.
//! view.scroll_by(10_000.0);
//! assert_eq!(view.offset(), view.max_offset());
//!
//! // A view-space y maps to content space by adding the offset.
//! assert_eq!(view.view_to_content_y(25.0), view.offset() + 25.0);
//! ```
//!
//! ## Design notes
//!
//! - The model is vertical-only: content offsets grow downward from the
//!   content top, matching top-down reading order. Hosts with horizontal
//!   strips can reuse it by treating "y" as their scroll axis.
//! - Controllers that interpret input events and behaviors such as inertia
//!   are expected to live in higher-level crates built on top of this one.
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

mod modes;
mod scroll_view;

pub use modes::ClampMode;
pub use scroll_view::{ScrollView, ScrollViewDebugInfo};
