// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller configuration and its validation.

use core::fmt;

use zoomview_gesture::GestureConfig;

/// Tunables for [`ZoomController`](crate::ZoomController).
///
/// Scale multipliers are relative to the fit-to-viewport scale computed when
/// an image is laid out:
///
/// | Bound | Default |
/// |---|---|
/// | minimum | fit ÷ `min_scale_divisor` (4) |
/// | double-tap | fit × `double_tap_scale` (2) |
/// | soft maximum | fit × `max_scale_multiplier` (4) |
/// | overscroll maximum | soft maximum × `overscroll_multiplier` (5) |
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomConfig {
    /// Gesture recognizer thresholds.
    pub gesture: GestureConfig,
    /// Delay between animation steps.
    pub tick_interval_ms: u64,
    /// Double-tap zoom level relative to the fit scale.
    pub double_tap_scale: f64,
    /// The minimum scale is the fit scale divided by this.
    pub min_scale_divisor: f64,
    /// The soft maximum scale is the fit scale multiplied by this.
    pub max_scale_multiplier: f64,
    /// The hard (overscroll) maximum is the soft maximum multiplied by this.
    pub overscroll_multiplier: f64,
    /// Per-step factor while smoothly zooming in.
    pub zoom_in_step: f64,
    /// Per-step factor while smoothly zooming out.
    pub zoom_out_step: f64,
    /// Pinch steps landing this close to a hard bound snap onto it.
    pub scale_epsilon: f64,
    /// The image must exceed the viewport by this much to claim the gesture.
    pub exclusive_epsilon: f64,
    /// Fling deceleration in px/s².
    pub fling_deceleration: f64,
    /// Whether a new touch-down stops a running smooth zoom.
    pub preempt_smooth_zoom_on_touch: bool,
}

impl ZoomConfig {
    /// Returns a copy with the given gesture thresholds.
    #[must_use]
    pub fn with_gesture(mut self, gesture: GestureConfig) -> Self {
        self.gesture = gesture;
        self
    }

    /// Returns a copy with the given animation tick interval.
    #[must_use]
    pub fn with_tick_interval_ms(mut self, tick_interval_ms: u64) -> Self {
        self.tick_interval_ms = tick_interval_ms;
        self
    }

    /// Returns a copy with the given smooth-zoom step factors.
    #[must_use]
    pub fn with_zoom_steps(mut self, zoom_in_step: f64, zoom_out_step: f64) -> Self {
        self.zoom_in_step = zoom_in_step;
        self.zoom_out_step = zoom_out_step;
        self
    }

    /// Returns a copy with the given fling deceleration.
    #[must_use]
    pub fn with_fling_deceleration(mut self, fling_deceleration: f64) -> Self {
        self.fling_deceleration = fling_deceleration;
        self
    }

    /// Returns a copy that does or does not let touch-down stop a smooth zoom.
    #[must_use]
    pub fn with_preempt_smooth_zoom_on_touch(mut self, preempt: bool) -> Self {
        self.preempt_smooth_zoom_on_touch = preempt;
        self
    }

    /// Checks that every field is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        for (name, value) in [
            ("double_tap_scale", self.double_tap_scale),
            ("min_scale_divisor", self.min_scale_divisor),
            ("max_scale_multiplier", self.max_scale_multiplier),
            ("overscroll_multiplier", self.overscroll_multiplier),
        ] {
            if !(value.is_finite() && value >= 1.0) {
                return Err(ConfigError::InvalidMultiplier { name, value });
            }
        }
        if !(self.zoom_in_step.is_finite() && self.zoom_in_step > 1.0) {
            return Err(ConfigError::InvalidStep {
                name: "zoom_in_step",
                value: self.zoom_in_step,
            });
        }
        if !(self.zoom_out_step > 0.0 && self.zoom_out_step < 1.0) {
            return Err(ConfigError::InvalidStep {
                name: "zoom_out_step",
                value: self.zoom_out_step,
            });
        }
        for (name, value) in [
            ("scale_epsilon", self.scale_epsilon),
            ("exclusive_epsilon", self.exclusive_epsilon),
            ("touch_slop", self.gesture.touch_slop),
            ("double_tap_slop", self.gesture.double_tap_slop),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::InvalidDistance { name, value });
            }
        }
        if !(self.fling_deceleration.is_finite() && self.fling_deceleration > 0.0) {
            return Err(ConfigError::InvalidRate {
                name: "fling_deceleration",
                value: self.fling_deceleration,
            });
        }
        if !(self.gesture.max_fling_velocity.is_finite() && self.gesture.max_fling_velocity > 0.0) {
            return Err(ConfigError::InvalidRate {
                name: "max_fling_velocity",
                value: self.gesture.max_fling_velocity,
            });
        }
        if self.gesture.double_tap_min_time_ms > self.gesture.double_tap_timeout_ms {
            return Err(ConfigError::InvertedDoubleTapWindow {
                min_time_ms: self.gesture.double_tap_min_time_ms,
                timeout_ms: self.gesture.double_tap_timeout_ms,
            });
        }
        Ok(())
    }
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            gesture: GestureConfig::default(),
            tick_interval_ms: 16,
            double_tap_scale: 2.0,
            min_scale_divisor: 4.0,
            max_scale_multiplier: 4.0,
            overscroll_multiplier: 5.0,
            zoom_in_step: 1.07,
            zoom_out_step: 0.93,
            scale_epsilon: 0.01,
            exclusive_epsilon: 0.01,
            fling_deceleration: 2_000.0,
            preempt_smooth_zoom_on_touch: true,
        }
    }
}

/// Error returned when a [`ZoomConfig`] is unusable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// `tick_interval_ms` is zero.
    ZeroTickInterval,
    /// A scale multiplier is below `1.0` or not finite.
    InvalidMultiplier {
        /// Field name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },
    /// A smooth-zoom step factor is on the wrong side of `1.0`.
    InvalidStep {
        /// Field name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },
    /// A distance or tolerance is negative or not finite.
    InvalidDistance {
        /// Field name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },
    /// A deceleration or velocity limit is not strictly positive.
    InvalidRate {
        /// Field name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },
    /// The double-tap minimum time exceeds its timeout.
    InvertedDoubleTapWindow {
        /// Configured minimum time.
        min_time_ms: u64,
        /// Configured timeout.
        timeout_ms: u64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroTickInterval => write!(f, "tick_interval_ms must be non-zero"),
            Self::InvalidMultiplier { name, value } => {
                write!(f, "{name} must be a finite multiplier >= 1, got {value}")
            }
            Self::InvalidStep { name, value } => {
                write!(f, "{name} is not a usable zoom step factor: {value}")
            }
            Self::InvalidDistance { name, value } => {
                write!(f, "{name} must be finite and non-negative, got {value}")
            }
            Self::InvalidRate { name, value } => {
                write!(f, "{name} must be positive, got {value}")
            }
            Self::InvertedDoubleTapWindow {
                min_time_ms,
                timeout_ms,
            } => write!(
                f,
                "double-tap minimum time {min_time_ms}ms exceeds timeout {timeout_ms}ms"
            ),
        }
    }
}

impl core::error::Error for ConfigError {}
