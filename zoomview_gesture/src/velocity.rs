// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer velocity estimation for fling hand-off.
//!
//! [`VelocityTracker`] keeps the most recent positions in a fixed ring and
//! fits a straight line through the ones inside a time horizon. The slope
//! of that line is the release velocity, in pixels per second.

use kurbo::{Point, Vec2};

/// Number of samples retained.
const HISTORY: usize = 20;

#[derive(Clone, Copy, Debug, Default)]
struct Entry {
    time_ms: u64,
    position: Point,
}

/// Least-squares velocity estimator over recent pointer positions.
#[derive(Clone, Debug, Default)]
pub struct VelocityTracker {
    ring: [Entry; HISTORY],
    head: usize,
    len: usize,
}

impl VelocityTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a position at `time_ms`.
    ///
    /// A sample older than the newest one restarts the history, as the host
    /// clock is expected to be monotonic within a gesture.
    pub fn add(&mut self, time_ms: u64, position: Point) {
        if let Some(newest) = self.newest()
            && time_ms < newest.time_ms
        {
            self.clear();
        }
        self.ring[self.head] = Entry { time_ms, position };
        self.head = (self.head + 1) % HISTORY;
        self.len = (self.len + 1).min(HISTORY);
    }

    /// Forgets all samples.
    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }

    /// Number of retained samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no samples are retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Velocity in px/s fitted over samples within `horizon_ms` of the newest.
    ///
    /// Returns [`Vec2::ZERO`] with fewer than two usable samples or when all
    /// usable samples share one timestamp.
    #[must_use]
    pub fn velocity(&self, horizon_ms: u64) -> Vec2 {
        let Some(newest) = self.newest() else {
            return Vec2::ZERO;
        };

        let mut n = 0.0;
        let mut sum_t = 0.0;
        let mut sum_p = Vec2::ZERO;
        for entry in self.recent(newest.time_ms, horizon_ms) {
            n += 1.0;
            sum_t += seconds_before(newest.time_ms, entry.time_ms);
            sum_p += entry.position.to_vec2();
        }
        if n < 2.0 {
            return Vec2::ZERO;
        }
        let mean_t = sum_t / n;
        let mean_p = sum_p / n;

        let mut cov = Vec2::ZERO;
        let mut var = 0.0;
        for entry in self.recent(newest.time_ms, horizon_ms) {
            let dt = seconds_before(newest.time_ms, entry.time_ms) - mean_t;
            cov += (entry.position.to_vec2() - mean_p) * dt;
            var += dt * dt;
        }
        if var <= 0.0 { Vec2::ZERO } else { cov / var }
    }

    fn newest(&self) -> Option<Entry> {
        if self.len == 0 {
            return None;
        }
        Some(self.ring[(self.head + HISTORY - 1) % HISTORY])
    }

    /// Retained entries, newest first, that lie within the horizon.
    fn recent(&self, newest_ms: u64, horizon_ms: u64) -> impl Iterator<Item = Entry> + '_ {
        (0..self.len)
            .map(move |back| self.ring[(self.head + HISTORY - 1 - back) % HISTORY])
            .take_while(move |entry| newest_ms - entry.time_ms <= horizon_ms)
    }
}

/// Signed time of `time_ms` relative to `newest_ms`, in seconds (non-positive).
fn seconds_before(newest_ms: u64, time_ms: u64) -> f64 {
    -((newest_ms - time_ms) as f64) / 1000.0
}
