// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scale changes: validated pinch steps and the stepped smooth zoom.

use kurbo::Point;

use crate::animation::Step;
use crate::{ScaleBounds, Surface, ZoomConfig};

/// Applies scale changes to a [`Surface`] within [`ScaleBounds`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleController {
    bounds: ScaleBounds,
    epsilon: f64,
    zoom_in_step: f64,
    zoom_out_step: f64,
}

impl ScaleController {
    /// Creates a controller for `bounds`, taking tolerances and step factors from `config`.
    #[must_use]
    pub fn new(bounds: ScaleBounds, config: &ZoomConfig) -> Self {
        Self {
            bounds,
            epsilon: config.scale_epsilon,
            zoom_in_step: config.zoom_in_step,
            zoom_out_step: config.zoom_out_step,
        }
    }

    /// The scale limits in effect.
    #[must_use]
    pub fn bounds(&self) -> &ScaleBounds {
        &self.bounds
    }

    /// Scales `surface` by `factor` about `pivot`, then recenters it.
    ///
    /// Growth is accepted only while the result stays below the overscroll
    /// maximum, shrinking only while it stays above the minimum. A result
    /// within the epsilon of either bound lands exactly on that bound.
    /// Returns `false` (leaving the surface untouched) for rejected steps.
    pub fn apply_scale_delta(&self, surface: &mut Surface, factor: f64, pivot: Point) -> bool {
        if !(factor.is_finite() && factor > 0.0) {
            return false;
        }
        let scale = surface.scale();
        let prospective = scale * factor;
        let grows = factor > 1.0 && prospective < self.bounds.max_overscroll;
        let shrinks = factor < 1.0 && prospective > self.bounds.min;
        if !grows && !shrinks {
            log::trace!("rejected scale step {factor} at scale {scale}");
            return false;
        }

        if grows && prospective > self.bounds.max_overscroll - self.epsilon {
            surface.compose_scale_to(self.bounds.max_overscroll, pivot);
        } else if shrinks && prospective < self.bounds.min + self.epsilon {
            surface.compose_scale_to(self.bounds.min, pivot);
        } else {
            surface.compose_scale(factor, pivot);
        }
        // Pivoted scaling can open gaps at the edges.
        surface.recenter();
        true
    }

    /// Prepares a smooth zoom of `surface` toward `target` about `pivot`.
    ///
    /// Returns `None` when already at `target` or for a non-positive target.
    #[must_use]
    pub fn smooth_zoom(&self, surface: &Surface, target: f64, pivot: Point) -> Option<SmoothZoom> {
        if !(target.is_finite() && target > 0.0) {
            return None;
        }
        let scale = surface.scale();
        let step = if scale < target {
            self.zoom_in_step
        } else if scale > target {
            self.zoom_out_step
        } else {
            return None;
        };
        Some(SmoothZoom {
            target,
            pivot,
            step,
        })
    }
}

/// A stepped zoom toward a target scale about a fixed pivot.
///
/// Each tick multiplies the scale by a fixed step factor (direction chosen
/// at creation) and recenters. The tick that reaches or crosses the target
/// corrects the scale to exactly the target and ends the animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothZoom {
    target: f64,
    pivot: Point,
    step: f64,
}

impl SmoothZoom {
    /// Scale the animation ends at.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Fixed point of the zoom, in viewport coordinates.
    #[must_use]
    pub fn pivot(&self) -> Point {
        self.pivot
    }

    /// Per-tick factor: above `1.0` when zooming in, below when zooming out.
    #[must_use]
    pub fn step_factor(&self) -> f64 {
        self.step
    }

    pub(crate) fn step(&self, surface: &mut Surface) -> Step {
        surface.compose_scale(self.step, self.pivot);
        surface.recenter();

        let scale = surface.scale();
        let short = if self.step > 1.0 {
            scale < self.target
        } else {
            scale > self.target
        };
        if short {
            return Step::Continue;
        }
        surface.compose_scale_to(self.target, self.pivot);
        surface.recenter();
        Step::Done
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size};

    use super::ScaleController;
    use crate::animation::Step;
    use crate::{ScaleBounds, Surface, ZoomConfig};

    fn setup() -> (ScaleController, Surface) {
        let config = ZoomConfig::default();
        // 1080x2400 in 1080x1920: width already matches, fit scale 1.0.
        let surface = Surface::fit(Size::new(1080.0, 2400.0), Size::new(1080.0, 1920.0)).unwrap();
        let bounds = ScaleBounds::from_init(surface.scale(), &config);
        (ScaleController::new(bounds, &config), surface)
    }

    #[test]
    fn growth_below_overscroll_is_unclamped() {
        let (sc, mut surface) = setup();
        assert!(sc.apply_scale_delta(&mut surface, 3.9, Point::new(540.0, 960.0)));
        assert!(sc.apply_scale_delta(&mut surface, 1.5, Point::new(100.0, 200.0)));
        assert!((surface.scale() - 5.85).abs() < 1e-9);
    }

    #[test]
    fn growth_past_overscroll_is_rejected() {
        let (sc, mut surface) = setup();
        assert!(sc.apply_scale_delta(&mut surface, 19.0, Point::ZERO));
        let before = surface;
        assert!(!sc.apply_scale_delta(&mut surface, 1.2, Point::ZERO));
        assert_eq!(surface, before);
    }

    #[test]
    fn landing_near_a_bound_snaps_onto_it() {
        let (sc, mut surface) = setup();
        assert!(sc.apply_scale_delta(&mut surface, 19.995, Point::new(10.0, 10.0)));
        assert_eq!(surface.scale(), 20.0);

        let (sc, mut surface) = setup();
        assert!(sc.apply_scale_delta(&mut surface, 0.255, Point::new(10.0, 10.0)));
        assert_eq!(surface.scale(), 0.25);
        assert!(!sc.apply_scale_delta(&mut surface, 0.99, Point::new(10.0, 10.0)));
    }

    #[test]
    fn identity_and_invalid_factors_are_rejected() {
        let (sc, mut surface) = setup();
        assert!(!sc.apply_scale_delta(&mut surface, 1.0, Point::ZERO));
        assert!(!sc.apply_scale_delta(&mut surface, 0.0, Point::ZERO));
        assert!(!sc.apply_scale_delta(&mut surface, f64::NAN, Point::ZERO));
        assert_eq!(surface.scale(), 1.0);
    }

    #[test]
    fn smooth_zoom_reaches_target_exactly() {
        let (sc, mut surface) = setup();
        let pivot = Point::new(300.0, 700.0);
        for target in [2.0, 0.25, 4.0, 1.0] {
            let zoom = sc.smooth_zoom(&surface, target, pivot).unwrap();
            let mut ticks = 0;
            while zoom.step(&mut surface) == Step::Continue {
                ticks += 1;
                assert!(ticks < 1_000);
            }
            assert_eq!(surface.scale(), target);
        }
    }

    #[test]
    fn smooth_zoom_to_current_scale_is_none() {
        let (sc, surface) = setup();
        assert!(sc.smooth_zoom(&surface, 1.0, Point::ZERO).is_none());
        assert!(sc.smooth_zoom(&surface, -1.0, Point::ZERO).is_none());
    }
}
