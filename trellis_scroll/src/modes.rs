// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Clamp behavior for scroll offsets relative to the content extent.
///
/// Consulted by every mutation of a [`crate::ScrollView`] offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ClampMode {
    /// Do not apply any clamping; the offset may move freely, including
    /// past either end of the content.
    None,
    /// Confine the offset to `[0, max_offset]` so the viewport never shows
    /// space before the first row or after the last.
    #[default]
    Confined,
}
