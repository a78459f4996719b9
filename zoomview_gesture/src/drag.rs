// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag tracking over a multi-touch centroid, with a touch-slop threshold.
//!
//! ## Usage
//!
//! 1) Start tracking with [`DragTracker::start`] on touch-down, passing the
//!    centroid of all pointers and the pointer count.
//! 2) On each move, call [`DragTracker::update`]. It returns `None` until the
//!    centroid has moved more than the slop away from the reference point,
//!    then the movement delta since the last update.
//! 3) End the sequence with [`DragTracker::end`].
//!
//! When the pointer count changes mid-gesture (a finger added or lifted) the
//! centroid jumps. The tracker treats that sample as a new reference point
//! instead of a movement, and requires the slop to be crossed again.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use zoomview_gesture::drag::DragTracker;
//!
//! let mut drag = DragTracker::default();
//! drag.start(Point::new(10.0, 20.0), 1);
//!
//! // Within an 8px slop: not a drag yet.
//! assert_eq!(drag.update(Point::new(13.0, 24.0), 1, 8.0), None);
//! assert!(!drag.is_dragging());
//!
//! // Crossing the slop reports the full displacement from the reference.
//! assert_eq!(drag.update(Point::new(20.0, 20.0), 1, 8.0), Some(Vec2::new(10.0, 0.0)));
//! assert!(drag.is_dragging());
//! ```

use kurbo::{Point, Vec2};

/// Tracks the drag reference point and slop state for one touch sequence.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragTracker {
    /// Reference point deltas are measured from.
    pub reference: Option<Point>,
    /// Pointer count seen on the previous sample.
    pub pointer_count: usize,
    /// Whether the slop has been crossed since the last reset.
    pub dragging: bool,
}

impl DragTracker {
    /// Start tracking a new sequence at `centroid`.
    pub fn start(&mut self, centroid: Point, pointer_count: usize) {
        self.reference = Some(centroid);
        self.pointer_count = pointer_count;
        self.dragging = false;
    }

    /// Feed a new centroid, returning the drag delta once past the slop.
    pub fn update(&mut self, centroid: Point, pointer_count: usize, slop: f64) -> Option<Vec2> {
        let reference = self.reference?;
        if pointer_count != self.pointer_count {
            self.pointer_count = pointer_count;
            self.reference = Some(centroid);
            self.dragging = false;
            return None;
        }
        let delta = centroid - reference;
        if !self.dragging {
            if delta.hypot() <= slop {
                return None;
            }
            self.dragging = true;
        }
        self.reference = Some(centroid);
        Some(delta)
    }

    /// End the current sequence and reset state.
    pub fn end(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` once the slop was crossed in the current sequence.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Returns `true` between [`DragTracker::start`] and [`DragTracker::end`].
    pub fn is_tracking(&self) -> bool {
        self.reference.is_some()
    }
}
