// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panning: clamped drags and inertial flings.

use kurbo::{Point, Vec2};
use zoomview_transform::Axes;

use crate::animation::Step;
use crate::{Scroller, Surface, ZoomConfig};

/// Applies drags and starts flings on a [`Surface`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanController {
    deceleration: f64,
}

impl PanController {
    /// Creates a controller taking the fling deceleration from `config`.
    #[must_use]
    pub fn new(config: &ZoomConfig) -> Self {
        Self {
            deceleration: config.fling_deceleration,
        }
    }

    /// Translates `surface` by `delta` restricted to `axes`, then closes any
    /// edge gaps on those axes.
    ///
    /// Returns whether the transform changed.
    pub fn apply_drag(&self, surface: &mut Surface, delta: Vec2, axes: Axes) -> bool {
        let before = surface.transform();
        surface.compose_translate(axes.mask(delta));
        surface.clamp_edges(axes);
        surface.transform() != before
    }

    /// Prepares a fling of `surface` at `velocity` (px/s, image motion).
    ///
    /// The allowed travel on each axis is the image's overflow past the
    /// viewport. Returns `None` when there is nothing to travel on either
    /// axis, or when `velocity` would not move the image (including when it
    /// already sits at the end of its range in that direction).
    #[must_use]
    pub fn fling(&self, surface: &Surface, velocity: Vec2, now_ms: u64) -> Option<Fling> {
        let rect = surface.image_rect();
        let viewport = surface.viewport();
        let start = Point::new(-rect.x0, -rect.y0);
        let (min_x, max_x) = offset_range(start.x, rect.width(), viewport.width);
        let (min_y, max_y) = offset_range(start.y, rect.height(), viewport.height);
        if min_x == max_x && min_y == max_y {
            log::trace!("fling skipped: image does not overflow the viewport");
            return None;
        }

        // Scroll offsets run opposite to image motion.
        let scroller = Scroller::fling(
            start,
            -velocity,
            Point::new(min_x, min_y),
            Point::new(max_x, max_y),
            self.deceleration,
            now_ms,
        );
        // Already resting against the range end in the fling direction.
        if scroller.is_finished() || (scroller.rest() - start).hypot() < 1e-9 {
            log::trace!("fling skipped: no travel toward {velocity:?}");
            return None;
        }
        Some(Fling {
            scroller,
            last: start,
            axes: surface.overflowing_axes(),
        })
    }
}

fn offset_range(start: f64, extent: f64, viewport: f64) -> (f64, f64) {
    if extent > viewport {
        (0.0, extent - viewport)
    } else {
        (start, start)
    }
}

/// An in-progress fling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fling {
    scroller: Scroller,
    last: Point,
    axes: Axes,
}

impl Fling {
    /// The underlying scroll model.
    #[must_use]
    pub fn scroller(&self) -> &Scroller {
        &self.scroller
    }

    /// Axes the fling clamps against.
    #[must_use]
    pub fn axes(&self) -> Axes {
        self.axes
    }

    pub(crate) fn step(&mut self, surface: &mut Surface, now_ms: u64) -> Step {
        if !self.scroller.compute_offset(now_ms) {
            return Step::Done;
        }
        let current = self.scroller.current();
        surface.compose_translate(self.last - current);
        surface.clamp_edges(self.axes);
        self.last = current;
        if self.scroller.is_finished() {
            Step::Done
        } else {
            Step::Continue
        }
    }

    pub(crate) fn cancel(&mut self) {
        self.scroller.force_finish();
    }
}
