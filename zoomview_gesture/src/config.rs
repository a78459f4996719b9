// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Thresholds used by the gesture recognizers.
///
/// Distances are in viewport pixels, times in milliseconds. The defaults
/// match common touch platform conventions at a baseline density; hosts on
/// high-density screens should scale the distances accordingly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    /// Distance the centroid must move before a touch counts as a drag.
    pub touch_slop: f64,
    /// Maximum time between the first tap's lift and the second down.
    pub double_tap_timeout_ms: u64,
    /// Minimum time between the first tap's lift and the second down.
    pub double_tap_min_time_ms: u64,
    /// Maximum distance between the two downs of a double tap.
    pub double_tap_slop: f64,
    /// Only samples this recent contribute to the release velocity.
    pub velocity_horizon_ms: u64,
    /// Upper bound on the magnitude of the release velocity, in px/s.
    pub max_fling_velocity: f64,
}

impl GestureConfig {
    /// Returns a copy with the given touch slop.
    #[must_use]
    pub fn with_touch_slop(mut self, touch_slop: f64) -> Self {
        self.touch_slop = touch_slop;
        self
    }

    /// Returns a copy with the given double-tap timing window.
    #[must_use]
    pub fn with_double_tap_window(mut self, min_time_ms: u64, timeout_ms: u64) -> Self {
        self.double_tap_min_time_ms = min_time_ms;
        self.double_tap_timeout_ms = timeout_ms;
        self
    }

    /// Returns a copy with the given double-tap distance tolerance.
    #[must_use]
    pub fn with_double_tap_slop(mut self, double_tap_slop: f64) -> Self {
        self.double_tap_slop = double_tap_slop;
        self
    }

    /// Returns a copy with the given maximum fling velocity.
    #[must_use]
    pub fn with_max_fling_velocity(mut self, max_fling_velocity: f64) -> Self {
        self.max_fling_velocity = max_fling_velocity;
        self
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            touch_slop: 8.0,
            double_tap_timeout_ms: 300,
            double_tap_min_time_ms: 40,
            double_tap_slop: 100.0,
            velocity_horizon_ms: 100,
            max_fling_velocity: 8_000.0,
        }
    }
}
