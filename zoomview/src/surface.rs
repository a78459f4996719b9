// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};
use zoomview_transform::{Axes, Transform, centering_delta, drag_clamp_delta, fit_transform};

/// An image laid out in a viewport, together with its current transform.
///
/// The surface is the single owner of the [`Transform`]. The scale and pan
/// controllers borrow it mutably for each operation; nothing else writes it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    transform: Transform,
    image: Size,
    viewport: Size,
}

impl Surface {
    /// Lays out `image` centered in `viewport` at the fit scale.
    ///
    /// Returns `None` if either size is degenerate.
    #[must_use]
    pub fn fit(image: Size, viewport: Size) -> Option<Self> {
        let transform = fit_transform(image, viewport)?;
        Some(Self {
            transform,
            image,
            viewport,
        })
    }

    /// Current transform.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Current uniform scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.transform.scale()
    }

    /// Intrinsic image size.
    #[must_use]
    pub fn image_size(&self) -> Size {
        self.image
    }

    /// Viewport size.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Center of the viewport.
    #[must_use]
    pub fn viewport_center(&self) -> Point {
        (self.viewport.to_vec2() / 2.0).to_point()
    }

    /// The image's rectangle in viewport coordinates.
    #[must_use]
    pub fn image_rect(&self) -> Rect {
        self.transform.image_rect(self.image)
    }

    /// Axes along which the image is larger than the viewport.
    #[must_use]
    pub fn overflowing_axes(&self) -> Axes {
        Axes::overflowing(self.image_rect(), self.viewport)
    }

    /// Whether the image exceeds the viewport by more than `epsilon` on either axis.
    #[must_use]
    pub fn exceeds_viewport(&self, epsilon: f64) -> bool {
        let rect = self.image_rect();
        rect.width() > self.viewport.width + epsilon || rect.height() > self.viewport.height + epsilon
    }

    pub(crate) fn compose_scale(&mut self, factor: f64, pivot: Point) {
        self.transform.compose_scale(factor, pivot);
    }

    pub(crate) fn compose_scale_to(&mut self, target: f64, pivot: Point) {
        self.transform.compose_scale_to(target, pivot);
    }

    pub(crate) fn compose_translate(&mut self, delta: Vec2) {
        self.transform.compose_translate(delta);
    }

    /// Pulls the image flush with the viewport edges, or centers it on axes
    /// where it is smaller than the viewport.
    pub(crate) fn recenter(&mut self) {
        let delta = centering_delta(self.image_rect(), self.viewport);
        self.transform.compose_translate(delta);
    }

    /// Closes gaps between image and viewport edges on `axes` only.
    pub(crate) fn clamp_edges(&mut self, axes: Axes) {
        let delta = drag_clamp_delta(self.image_rect(), self.viewport, axes);
        self.transform.compose_translate(delta);
    }
}
