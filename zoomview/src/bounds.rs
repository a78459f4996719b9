// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::ZoomConfig;

/// Scale limits derived from the fit-to-viewport scale.
///
/// Computed once per image/viewport pairing and immutable afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleBounds {
    /// Fit-to-viewport scale; release never leaves the image below it.
    pub init: f64,
    /// Hard minimum reachable while pinching.
    pub min: f64,
    /// Double-tap zoom level.
    pub mid: f64,
    /// Soft maximum; release snaps back to it.
    pub max: f64,
    /// Hard maximum reachable while pinching.
    pub max_overscroll: f64,
}

impl ScaleBounds {
    /// Derives the bounds for a fit scale of `init`.
    #[must_use]
    pub fn from_init(init: f64, config: &ZoomConfig) -> Self {
        let max = init * config.max_scale_multiplier;
        Self {
            init,
            min: init / config.min_scale_divisor,
            mid: init * config.double_tap_scale,
            max,
            max_overscroll: max * config.overscroll_multiplier,
        }
    }

    /// Where a double tap at `scale` zooms to.
    #[must_use]
    pub fn double_tap_target(&self, scale: f64) -> f64 {
        if scale < self.mid { self.mid } else { self.init }
    }

    /// Where a released gesture at `scale` must settle, if anywhere.
    #[must_use]
    pub fn settle_target(&self, scale: f64) -> Option<f64> {
        if scale < self.init {
            Some(self.init)
        } else if scale > self.max {
            Some(self.max)
        } else {
            None
        }
    }
}
