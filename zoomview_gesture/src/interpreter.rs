// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Turns raw touch samples into gesture intents.
//!
//! [`GestureInterpreter::process`] runs each sample through three stages:
//!
//! 1. Double-tap recognition. A recognized double tap consumes the sample:
//!    only [`GestureIntent::DoubleTap`] is emitted for it, though drag and
//!    velocity tracking still start there.
//! 2. Pinch recognition, emitting `ScaleBegin`/`Scale`/`ScaleEnd`.
//! 3. Centroid tracking by phase:
//!    - `Down`: starts velocity tracking and the drag reference, emits `Down`.
//!    - `Move`: emits `Move`, then `Drag` once the centroid passed the slop.
//!      A pointer-count change re-anchors the reference instead of dragging.
//!    - `Up`: emits `Up`, carrying the release velocity if a drag happened.
//!    - `Cancel`: drops velocity tracking, emits `Cancel`.
//!
//! Pinch and drag are independent: a two-finger pinch also drags by the
//! movement of the fingers' centroid.

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

use crate::double_tap::DoubleTapState;
use crate::drag::DragTracker;
use crate::pinch::PinchState;
use crate::velocity::VelocityTracker;
use crate::{GestureConfig, TouchPhase, TouchSample};

/// Higher-level gesture produced from one or more touch samples.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureIntent {
    /// A double tap; `position` is where the first tap landed.
    DoubleTap {
        /// Tap position in viewport coordinates.
        position: Point,
    },
    /// The first pointer touched down.
    Down,
    /// Pointers moved (emitted for every non-consumed move sample).
    Move,
    /// The centroid moved by `delta` while dragging.
    Drag {
        /// Centroid movement since the previous drag step.
        delta: Vec2,
    },
    /// A pinch started.
    ScaleBegin {
        /// Centroid of the pinching pointers.
        focus: Point,
    },
    /// One pinch step.
    Scale {
        /// Ratio of the current span to the previous span.
        factor: f64,
        /// Centroid of the pinching pointers.
        focus: Point,
    },
    /// The pinch ended.
    ScaleEnd,
    /// The last pointer lifted.
    Up {
        /// Release velocity in px/s, in pointer-movement convention, when
        /// the sequence was a drag.
        velocity: Option<Vec2>,
    },
    /// The host cancelled the sequence.
    Cancel,
}

/// Intents produced by a single sample.
pub type Intents = SmallVec<[GestureIntent; 4]>;

/// Stateful interpreter for one touch surface.
#[derive(Clone, Debug, Default)]
pub struct GestureInterpreter {
    config: GestureConfig,
    double_tap: DoubleTapState,
    pinch: PinchState,
    drag: DragTracker,
    velocity: Option<VelocityTracker>,
}

impl GestureInterpreter {
    /// Creates an interpreter using `config` thresholds.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the thresholds in use.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Returns `true` once the current sequence has crossed the drag slop.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Returns `true` while a pinch is in progress.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.pinch.is_in_progress()
    }

    /// Processes one sample and returns the intents it produced, in order.
    ///
    /// Samples without pointers produce nothing.
    pub fn process(&mut self, sample: &TouchSample) -> Intents {
        let mut out = Intents::new();
        let Some(centroid) = sample.centroid() else {
            return out;
        };

        if let Some(position) = self.double_tap.on_sample(sample, &self.config) {
            // The rest of this touch sequence still drags and flings.
            self.begin_tracking(sample, centroid);
            out.push(GestureIntent::DoubleTap { position });
            return out;
        }

        self.pinch.on_sample(sample, &mut out);

        let count = sample.pointer_count();
        match sample.phase {
            TouchPhase::Down => {
                self.begin_tracking(sample, centroid);
                out.push(GestureIntent::Down);
            }
            TouchPhase::Move => {
                out.push(GestureIntent::Move);
                if let Some(delta) = self.drag.update(centroid, count, self.config.touch_slop) {
                    if let Some(velocity) = &mut self.velocity {
                        velocity.add(sample.time_ms, centroid);
                    }
                    out.push(GestureIntent::Drag { delta });
                }
            }
            TouchPhase::Up => {
                let release = if self.drag.is_dragging() {
                    self.velocity.take().map(|mut velocity| {
                        velocity.add(sample.time_ms, centroid);
                        self.clamp_velocity(velocity.velocity(self.config.velocity_horizon_ms))
                    })
                } else {
                    None
                };
                self.velocity = None;
                self.drag.end();
                out.push(GestureIntent::Up { velocity: release });
            }
            TouchPhase::Cancel => {
                self.velocity = None;
                self.drag.end();
                out.push(GestureIntent::Cancel);
            }
        }
        out
    }

    /// Drops all in-flight gesture state.
    pub fn reset(&mut self) {
        let config = self.config;
        *self = Self::new(config);
    }

    fn begin_tracking(&mut self, sample: &TouchSample, centroid: Point) {
        let mut velocity = VelocityTracker::new();
        velocity.add(sample.time_ms, centroid);
        self.velocity = Some(velocity);
        self.drag.start(centroid, sample.pointer_count());
    }

    fn clamp_velocity(&self, velocity: Vec2) -> Vec2 {
        let max = self.config.max_fling_velocity;
        let speed = velocity.hypot();
        if speed > max && speed > 0.0 {
            velocity * (max / speed)
        } else {
            velocity
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::{GestureIntent, GestureInterpreter};
    use crate::{GestureConfig, TouchPhase, TouchPoint, TouchSample};

    fn one(phase: TouchPhase, t: u64, x: f64, y: f64) -> TouchSample {
        TouchSample::single(phase, t, Point::new(x, y))
    }

    #[test]
    fn tap_emits_down_and_up_without_velocity() {
        let mut gi = GestureInterpreter::default();
        assert_eq!(gi.process(&one(TouchPhase::Down, 0, 10.0, 10.0)).as_slice(), &[GestureIntent::Down]);
        assert_eq!(
            gi.process(&one(TouchPhase::Move, 10, 12.0, 11.0)).as_slice(),
            &[GestureIntent::Move]
        );
        assert_eq!(
            gi.process(&one(TouchPhase::Up, 20, 12.0, 11.0)).as_slice(),
            &[GestureIntent::Up { velocity: None }]
        );
    }

    #[test]
    fn drag_emits_deltas_and_release_velocity() {
        let mut gi = GestureInterpreter::default();
        gi.process(&one(TouchPhase::Down, 0, 500.0, 500.0));
        let first = gi.process(&one(TouchPhase::Move, 10, 480.0, 500.0));
        assert_eq!(
            first.as_slice(),
            &[GestureIntent::Move, GestureIntent::Drag { delta: Vec2::new(-20.0, 0.0) }]
        );
        for i in 2..=5_u32 {
            gi.process(&one(TouchPhase::Move, u64::from(i) * 10, 500.0 - 20.0 * f64::from(i), 500.0));
        }
        let up = gi.process(&one(TouchPhase::Up, 60, 380.0, 500.0));
        let [GestureIntent::Up { velocity: Some(v) }] = up.as_slice() else {
            panic!("expected release velocity, got {up:?}");
        };
        assert!((v.x + 2000.0).abs() < 1e-6);
        assert!(v.y.abs() < 1e-6);
    }

    #[test]
    fn release_velocity_is_clamped() {
        let mut gi = GestureInterpreter::new(GestureConfig::default().with_max_fling_velocity(1000.0));
        gi.process(&one(TouchPhase::Down, 0, 0.0, 0.0));
        gi.process(&one(TouchPhase::Move, 10, 100.0, 0.0));
        let up = gi.process(&one(TouchPhase::Up, 20, 200.0, 0.0));
        let [GestureIntent::Up { velocity: Some(v) }] = up.as_slice() else {
            panic!("expected release velocity, got {up:?}");
        };
        assert!((v.hypot() - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn double_tap_consumes_second_down() {
        let mut gi = GestureInterpreter::default();
        gi.process(&one(TouchPhase::Down, 0, 300.0, 400.0));
        gi.process(&one(TouchPhase::Up, 50, 300.0, 400.0));
        let second = gi.process(&one(TouchPhase::Down, 150, 302.0, 398.0));
        assert_eq!(
            second.as_slice(),
            &[GestureIntent::DoubleTap { position: Point::new(300.0, 400.0) }]
        );
        // The rest of the second tap flows through normally.
        assert_eq!(
            gi.process(&one(TouchPhase::Up, 200, 302.0, 398.0)).as_slice(),
            &[GestureIntent::Up { velocity: None }]
        );
    }

    #[test]
    fn pinch_intents_precede_drag() {
        let mut gi = GestureInterpreter::default();
        gi.process(&one(TouchPhase::Down, 0, 100.0, 100.0));
        let add = TouchSample::new(
            TouchPhase::Move,
            10,
            [
                TouchPoint::new(0, Point::new(100.0, 100.0)),
                TouchPoint::new(1, Point::new(200.0, 100.0)),
            ],
        );
        let out = gi.process(&add);
        // Adding a finger re-anchors the drag instead of jumping the centroid.
        assert_eq!(
            out.as_slice(),
            &[GestureIntent::ScaleBegin { focus: Point::new(150.0, 100.0) }, GestureIntent::Move]
        );
        assert!(gi.is_pinching());

        let spread = TouchSample::new(
            TouchPhase::Move,
            20,
            [
                TouchPoint::new(0, Point::new(50.0, 120.0)),
                TouchPoint::new(1, Point::new(250.0, 120.0)),
            ],
        );
        let out = gi.process(&spread);
        assert_eq!(
            out.as_slice(),
            &[
                GestureIntent::Scale { factor: 2.0, focus: Point::new(150.0, 120.0) },
                GestureIntent::Move,
                GestureIntent::Drag { delta: Vec2::new(0.0, 20.0) },
            ]
        );
    }

    #[test]
    fn cancel_ends_everything() {
        let mut gi = GestureInterpreter::default();
        gi.process(&one(TouchPhase::Down, 0, 0.0, 0.0));
        gi.process(&one(TouchPhase::Move, 10, 50.0, 0.0));
        assert!(gi.is_dragging());
        let out = gi.process(&one(TouchPhase::Cancel, 20, 50.0, 0.0));
        assert_eq!(out.as_slice(), &[GestureIntent::Cancel]);
        assert!(!gi.is_dragging());
    }

    #[test]
    fn empty_sample_is_ignored() {
        let mut gi = GestureInterpreter::default();
        assert!(gi.process(&TouchSample::new(TouchPhase::Down, 0, core::iter::empty())).is_empty());
    }
}
