// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap-vs-drag discrimination with spatial tolerance.
//!
//! A table receives one stream of touch positions and must decide whether a
//! gesture was a tap on a cell or a pan of the content. [`TapState`] tracks
//! a single pointer through down → move → up:
//!
//! 1) Call [`TapState::on_down`] with the press position.
//! 2) On each move, call [`TapState::on_move`]; once the pointer leaves the
//!    slop radius the gesture is a drag, and every subsequent call returns
//!    the movement delta since the previous position.
//! 3) Call [`TapState::on_up`]; a release that never left the slop radius
//!    reports a tap at the press position.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use trellis_table::{TapOutcome, TapState};
//!
//! let mut tap = TapState::default();
//!
//! // Press, wiggle within the slop radius, release: a tap.
//! tap.on_down(Point::new(10.0, 20.0));
//! assert_eq!(tap.on_move(Point::new(11.0, 21.0)), None);
//! assert_eq!(
//!     tap.on_up(Point::new(11.0, 21.0)),
//!     TapOutcome::Tap(Point::new(10.0, 20.0))
//! );
//! ```

use kurbo::{Point, Vec2};

/// Default slop radius, in the same logical units as touch positions.
pub const DEFAULT_TAP_SLOP: f64 = 8.0;

/// What a pointer release amounted to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TapOutcome {
    /// The gesture stayed within the slop radius; the payload is the press
    /// position, which is where the tap should resolve.
    Tap(Point),
    /// The gesture left the slop radius and was a drag.
    Drag,
    /// No press was being tracked.
    Idle,
}

/// Tracks one pointer through a press, discriminating taps from drags.
///
/// Motion inside the slop radius is absorbed (a finger is never perfectly
/// still); the first move beyond it commits the gesture to a drag for the
/// rest of the press.
#[derive(Clone, Copy, Debug)]
pub struct TapState {
    down_pos: Option<Point>,
    last_pos: Option<Point>,
    dragging: bool,
    slop: f64,
}

impl Default for TapState {
    fn default() -> Self {
        Self::new(DEFAULT_TAP_SLOP)
    }
}

impl TapState {
    /// Creates a tracker with the given slop radius.
    ///
    /// Negative or non-finite radii are treated as zero (every move is a
    /// drag).
    #[must_use]
    pub fn new(slop: f64) -> Self {
        Self {
            down_pos: None,
            last_pos: None,
            dragging: false,
            slop: if slop.is_finite() { slop.max(0.0) } else { 0.0 },
        }
    }

    /// Returns the slop radius.
    #[must_use]
    pub fn slop(&self) -> f64 {
        self.slop
    }

    /// Returns `true` while a press is being tracked.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.down_pos.is_some()
    }

    /// Returns `true` once the current press has committed to a drag.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Starts tracking a press at `pos`.
    ///
    /// A press that was already in flight is discarded.
    pub fn on_down(&mut self, pos: Point) {
        self.down_pos = Some(pos);
        self.last_pos = Some(pos);
        self.dragging = false;
    }

    /// Feeds a pointer move, returning the drag delta if the gesture is
    /// (now) a drag.
    ///
    /// Returns `None` while the pointer stays within the slop radius of the
    /// press position, and `None` when no press is tracked. Once dragging,
    /// returns the delta since the previous reported position on every
    /// call.
    pub fn on_move(&mut self, pos: Point) -> Option<Vec2> {
        let down = self.down_pos?;
        let last = self.last_pos.unwrap_or(down);
        self.last_pos = Some(pos);

        if !self.dragging {
            // Compare squared distances so no_std builds need no sqrt.
            if (pos - down).hypot2() <= self.slop * self.slop {
                return None;
            }
            self.dragging = true;
        }
        Some(pos - last)
    }

    /// Ends the press, reporting what it amounted to.
    pub fn on_up(&mut self, pos: Point) -> TapOutcome {
        let Some(down) = self.down_pos else {
            return TapOutcome::Idle;
        };
        let dragged = self.dragging || (pos - down).hypot2() > self.slop * self.slop;
        self.reset();
        if dragged {
            TapOutcome::Drag
        } else {
            TapOutcome::Tap(down)
        }
    }

    /// Abandons the current press without reporting anything.
    pub fn cancel(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.down_pos = None;
        self.last_pos = None;
        self.dragging = false;
    }
}
