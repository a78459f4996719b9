// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Double-tap recognition with spatial and temporal tolerance.
//!
//! A double tap is recognized on the *second* touch-down when:
//! - the first tap was a single pointer that never strayed past the touch
//!   slop from where it landed, and was lifted;
//! - the second down lands between `double_tap_min_time_ms` and
//!   `double_tap_timeout_ms` after the first lift;
//! - the second down lands within `double_tap_slop` of the first down.
//!
//! The reported position is where the first tap landed.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use zoomview_gesture::GestureConfig;
//! use zoomview_gesture::double_tap::DoubleTapState;
//! use zoomview_gesture::{TouchPhase, TouchSample};
//!
//! let config = GestureConfig::default();
//! let mut taps = DoubleTapState::default();
//! let at = Point::new(200.0, 300.0);
//!
//! assert_eq!(taps.on_sample(&TouchSample::single(TouchPhase::Down, 0, at), &config), None);
//! assert_eq!(taps.on_sample(&TouchSample::single(TouchPhase::Up, 80, at), &config), None);
//! let second = Point::new(204.0, 296.0);
//! assert_eq!(
//!     taps.on_sample(&TouchSample::single(TouchPhase::Down, 200, second), &config),
//!     Some(at)
//! );
//! ```

use kurbo::Point;

use crate::{GestureConfig, TouchPhase, TouchSample};

/// Tracks the previous tap so that a following touch-down can be matched.
#[derive(Clone, Copy, Debug, Default)]
pub struct DoubleTapState {
    /// Where the current candidate tap landed.
    first_down: Option<Point>,
    /// Whether the current candidate is still a valid tap.
    is_tap: bool,
    /// Time the candidate tap was lifted.
    first_up_ms: Option<u64>,
}

impl DoubleTapState {
    /// Feeds a sample; returns the double-tap position when one is recognized.
    pub fn on_sample(&mut self, sample: &TouchSample, config: &GestureConfig) -> Option<Point> {
        let centroid = sample.centroid()?;
        match sample.phase {
            TouchPhase::Down => {
                if let Some(at) = self.matches_second_down(sample.time_ms, centroid, config) {
                    *self = Self::default();
                    log::trace!("double tap at ({}, {})", at.x, at.y);
                    return Some(at);
                }
                self.first_down = Some(centroid);
                self.is_tap = sample.pointer_count() == 1;
                self.first_up_ms = None;
            }
            TouchPhase::Move => {
                if let Some(down_at) = self.first_down
                    && (sample.pointer_count() > 1
                        || (centroid - down_at).hypot() > config.touch_slop)
                {
                    self.is_tap = false;
                }
            }
            TouchPhase::Up => {
                if self.is_tap && self.first_down.is_some() {
                    self.first_up_ms = Some(sample.time_ms);
                } else {
                    *self = Self::default();
                }
            }
            TouchPhase::Cancel => *self = Self::default(),
        }
        None
    }

    /// Forgets any pending first tap.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn matches_second_down(&self, time_ms: u64, at: Point, config: &GestureConfig) -> Option<Point> {
        let first_at = self.first_down?;
        let up_ms = self.first_up_ms?;
        if !self.is_tap {
            return None;
        }
        let gap = time_ms.checked_sub(up_ms)?;
        if gap < config.double_tap_min_time_ms || gap > config.double_tap_timeout_ms {
            return None;
        }
        if (at - first_at).hypot() >= config.double_tap_slop {
            return None;
        }
        Some(first_at)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::DoubleTapState;
    use crate::{GestureConfig, TouchPhase, TouchPoint, TouchSample};

    fn tap(state: &mut DoubleTapState, config: &GestureConfig, down_ms: u64, at: Point) -> Option<Point> {
        let down = state.on_sample(&TouchSample::single(TouchPhase::Down, down_ms, at), config);
        let up = state.on_sample(&TouchSample::single(TouchPhase::Up, down_ms + 60, at), config);
        assert_eq!(up, None);
        down
    }

    #[test]
    fn two_quick_taps_are_a_double_tap() {
        let config = GestureConfig::default();
        let mut state = DoubleTapState::default();
        let at = Point::new(50.0, 50.0);
        assert_eq!(tap(&mut state, &config, 0, at), None);
        assert_eq!(tap(&mut state, &config, 200, Point::new(60.0, 40.0)), Some(at));
    }

    #[test]
    fn third_tap_starts_a_new_pair() {
        let config = GestureConfig::default();
        let mut state = DoubleTapState::default();
        let at = Point::new(50.0, 50.0);
        tap(&mut state, &config, 0, at);
        assert!(tap(&mut state, &config, 200, at).is_some());
        assert_eq!(tap(&mut state, &config, 400, at), None);
        assert!(tap(&mut state, &config, 600, at).is_some());
    }

    #[test]
    fn slow_second_tap_is_not_a_double_tap() {
        let config = GestureConfig::default();
        let mut state = DoubleTapState::default();
        let at = Point::new(50.0, 50.0);
        tap(&mut state, &config, 0, at);
        // First up at 60; timeout is 300ms after it.
        assert_eq!(tap(&mut state, &config, 361, at), None);
    }

    #[test]
    fn too_fast_second_tap_is_not_a_double_tap() {
        let config = GestureConfig::default();
        let mut state = DoubleTapState::default();
        let at = Point::new(50.0, 50.0);
        tap(&mut state, &config, 0, at);
        assert_eq!(tap(&mut state, &config, 70, at), None);
    }

    #[test]
    fn distant_second_tap_is_not_a_double_tap() {
        let config = GestureConfig::default();
        let mut state = DoubleTapState::default();
        tap(&mut state, &config, 0, Point::new(50.0, 50.0));
        assert_eq!(tap(&mut state, &config, 200, Point::new(300.0, 50.0)), None);
    }

    #[test]
    fn dragging_first_tap_disqualifies_it() {
        let config = GestureConfig::default();
        let mut state = DoubleTapState::default();
        let at = Point::new(50.0, 50.0);
        state.on_sample(&TouchSample::single(TouchPhase::Down, 0, at), &config);
        state.on_sample(
            &TouchSample::single(TouchPhase::Move, 20, Point::new(90.0, 50.0)),
            &config,
        );
        state.on_sample(&TouchSample::single(TouchPhase::Up, 40, at), &config);
        assert_eq!(tap(&mut state, &config, 150, at), None);
    }

    #[test]
    fn second_pointer_disqualifies_first_tap() {
        let config = GestureConfig::default();
        let mut state = DoubleTapState::default();
        let at = Point::new(50.0, 50.0);
        state.on_sample(&TouchSample::single(TouchPhase::Down, 0, at), &config);
        state.on_sample(
            &TouchSample::new(
                TouchPhase::Move,
                10,
                [TouchPoint::new(0, at), TouchPoint::new(1, at)],
            ),
            &config,
        );
        state.on_sample(&TouchSample::single(TouchPhase::Up, 40, at), &config);
        assert_eq!(tap(&mut state, &config, 150, at), None);
    }
}
