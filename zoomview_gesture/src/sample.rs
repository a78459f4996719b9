// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw touch input: phases, pointers, and samples.

use kurbo::Point;
use smallvec::SmallVec;

/// Phase of a touch sample within one interaction sequence.
///
/// - [`TouchPhase::Down`] is the first pointer landing.
/// - A secondary pointer landing or lifting while others remain down is a
///   [`TouchPhase::Move`] whose pointer list changed.
/// - [`TouchPhase::Up`] is the last pointer lifting.
/// - [`TouchPhase::Cancel`] aborts the sequence (for example when a parent
///   takes over the gesture).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// First pointer went down.
    Down,
    /// Pointers moved, or pointers were added/removed mid-gesture.
    Move,
    /// Last pointer went up.
    Up,
    /// The sequence was cancelled by the host.
    Cancel,
}

/// One active pointer in a [`TouchSample`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    /// Host-assigned pointer identifier, stable for the pointer's lifetime.
    pub id: u64,
    /// Position in viewport coordinates.
    pub position: Point,
}

impl TouchPoint {
    /// Creates a pointer at `position`.
    #[must_use]
    pub fn new(id: u64, position: Point) -> Self {
        Self { id, position }
    }
}

/// A single multi-touch sample delivered by the host.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchSample {
    /// Phase of this sample.
    pub phase: TouchPhase,
    /// Pointers in contact (for [`TouchPhase::Up`], the lifting pointer).
    pub pointers: SmallVec<[TouchPoint; 4]>,
    /// Host timestamp in milliseconds.
    pub time_ms: u64,
}

impl TouchSample {
    /// Creates a sample from any pointer iterator.
    pub fn new(phase: TouchPhase, time_ms: u64, pointers: impl IntoIterator<Item = TouchPoint>) -> Self {
        Self {
            phase,
            pointers: pointers.into_iter().collect(),
            time_ms,
        }
    }

    /// Single-pointer sample with pointer id `0`.
    #[must_use]
    pub fn single(phase: TouchPhase, time_ms: u64, position: Point) -> Self {
        Self::new(phase, time_ms, [TouchPoint::new(0, position)])
    }

    /// Number of pointers in this sample.
    #[must_use]
    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    /// Mean position of all pointers, or `None` for an empty sample.
    #[must_use]
    pub fn centroid(&self) -> Option<Point> {
        if self.pointers.is_empty() {
            return None;
        }
        let sum = self
            .pointers
            .iter()
            .fold(kurbo::Vec2::ZERO, |acc, p| acc + p.position.to_vec2());
        Some((sum / self.pointers.len() as f64).to_point())
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{TouchPhase, TouchPoint, TouchSample};

    #[test]
    fn centroid_is_mean_of_pointers() {
        let sample = TouchSample::new(
            TouchPhase::Move,
            0,
            [
                TouchPoint::new(1, Point::new(0.0, 0.0)),
                TouchPoint::new(2, Point::new(100.0, 50.0)),
                TouchPoint::new(3, Point::new(200.0, 100.0)),
            ],
        );
        assert_eq!(sample.centroid(), Some(Point::new(100.0, 50.0)));
        assert_eq!(sample.pointer_count(), 3);
    }

    #[test]
    fn empty_sample_has_no_centroid() {
        let sample = TouchSample::new(TouchPhase::Move, 0, core::iter::empty());
        assert_eq!(sample.centroid(), None);
    }
}
