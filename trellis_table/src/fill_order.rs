// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Direction in which index 0 is anchored when laying out cells.
///
/// Content coordinates always run downward from the content top; fill order
/// decides which end of the content extent row 0 occupies. Consulted by
/// every positioning computation in [`crate::TableView`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FillOrder {
    /// Row 0 sits at the top of the content extent, rows growing downward.
    #[default]
    TopDown,
    /// Row 0 sits at the bottom of the content extent, rows growing upward.
    BottomUp,
}
