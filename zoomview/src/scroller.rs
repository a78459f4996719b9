// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inertial scroll model used for flings.
//!
//! The model works in scroll-offset space (offset = −image left/top) and
//! applies a constant deceleration along the initial velocity direction:
//!
//! - duration `T = |v| / a`
//! - travel `D = |v|² / 2a`
//!
//! The resting offset is clamped into the allowed range per axis, and the
//! position eases from start to the resting offset along the deceleration
//! curve, so motion is monotonic and always ends exactly at rest.

use kurbo::{Point, Vec2};

/// Constant-deceleration fling model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scroller {
    start: Point,
    rest: Point,
    start_ms: u64,
    speed: f64,
    deceleration: f64,
    /// Unclamped travel distance; the easing denominator.
    travel: f64,
    current: Point,
    elapsed_s: f64,
    finished: bool,
}

impl Scroller {
    /// Starts a fling from `start` with `velocity` (px/s), bounded to `[min, max]` per axis.
    ///
    /// A zero velocity or non-positive deceleration produces a scroller that
    /// is already finished at the (clamped) start offset.
    #[must_use]
    pub fn fling(
        start: Point,
        velocity: Vec2,
        min: Point,
        max: Point,
        deceleration: f64,
        now_ms: u64,
    ) -> Self {
        let speed = velocity.hypot();
        let moving = speed > 0.0 && speed.is_finite() && deceleration > 0.0;
        let travel = if moving {
            speed * speed / (2.0 * deceleration)
        } else {
            0.0
        };
        let unclamped = if moving {
            start + velocity * (travel / speed)
        } else {
            start
        };
        let rest = Point::new(unclamped.x.clamp(min.x, max.x), unclamped.y.clamp(min.y, max.y));
        Self {
            start,
            rest,
            start_ms: now_ms,
            speed: if moving { speed } else { 0.0 },
            deceleration,
            travel,
            current: start,
            elapsed_s: 0.0,
            finished: !moving,
        }
    }

    /// Advances the model to `now_ms`.
    ///
    /// Returns `false` if the scroller had already finished before this call;
    /// otherwise updates [`Scroller::current`] and returns `true`. The call
    /// that reaches the end of the fling returns `true` and lands on the
    /// resting offset.
    pub fn compute_offset(&mut self, now_ms: u64) -> bool {
        if self.finished {
            return false;
        }
        let elapsed_s = now_ms.saturating_sub(self.start_ms) as f64 / 1000.0;
        let duration_s = self.duration_s();
        if elapsed_s >= duration_s {
            self.elapsed_s = duration_s;
            self.current = self.rest;
            self.finished = true;
        } else {
            self.elapsed_s = elapsed_s;
            let covered = self.speed * elapsed_s - 0.5 * self.deceleration * elapsed_s * elapsed_s;
            let progress = covered / self.travel;
            self.current = self.start + (self.rest - self.start) * progress;
        }
        true
    }

    /// Current offset.
    #[must_use]
    pub fn current(&self) -> Point {
        self.current
    }

    /// Offset the fling comes to rest at.
    #[must_use]
    pub fn rest(&self) -> Point {
        self.rest
    }

    /// Velocity of the eased motion at the last computed time, in px/s.
    ///
    /// Its magnitude decreases monotonically and is zero once finished.
    #[must_use]
    pub fn current_velocity(&self) -> Vec2 {
        if self.finished || self.travel <= 0.0 {
            return Vec2::ZERO;
        }
        let remaining_speed = (self.speed - self.deceleration * self.elapsed_s).max(0.0);
        (self.rest - self.start) * (remaining_speed / self.travel)
    }

    /// Total duration of the fling in milliseconds.
    #[must_use]
    pub fn duration_ms(&self) -> f64 {
        self.duration_s() * 1000.0
    }

    /// Returns `true` once the fling has come to rest or was force-finished.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Stops the fling where it currently is.
    pub fn force_finish(&mut self) {
        self.finished = true;
    }

    fn duration_s(&self) -> f64 {
        if self.deceleration > 0.0 {
            self.speed / self.deceleration
        } else {
            0.0
        }
    }
}
