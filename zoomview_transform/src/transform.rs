// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Uniform scale + translation mapping image space into viewport space.
///
/// A `Transform` starts at [`Transform::IDENTITY`] (or from
/// [`fit_transform`](crate::fit_transform)) and is afterwards only changed by
/// composing further operations onto it:
/// - [`Transform::compose_scale`] scales about a pivot given in viewport space.
/// - [`Transform::compose_translate`] moves the image by a viewport-space delta.
///
/// Each composed operation is applied *after* the existing transform, so a
/// pivot always refers to the current on-screen position of the image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    affine: Affine,
}

impl Transform {
    /// The identity transform: scale `1.0`, no translation.
    pub const IDENTITY: Self = Self {
        affine: Affine::IDENTITY,
    };

    /// Creates a transform with the given uniform scale and translation.
    #[must_use]
    pub fn new(scale: f64, translation: Vec2) -> Self {
        Self {
            affine: Affine::new([scale, 0.0, 0.0, scale, translation.x, translation.y]),
        }
    }

    /// Scales by `factor` about `pivot`, keeping `pivot` fixed in viewport space.
    pub fn compose_scale(&mut self, factor: f64, pivot: Point) {
        self.affine = self.affine.then_scale_about(factor, pivot);
    }

    /// Scales about `pivot` so that the resulting scale is exactly `target`.
    ///
    /// `factor = target / scale` followed by a multiplication does not always
    /// land on `target` bit-for-bit; the scale coefficient is snapped to
    /// `target` afterwards. No-op on a degenerate (zero scale) transform.
    pub fn compose_scale_to(&mut self, target: f64, pivot: Point) {
        let current = self.scale();
        if current == 0.0 {
            return;
        }
        self.compose_scale(target / current, pivot);
        let [_, b, c, _, e, f] = self.affine.as_coeffs();
        self.affine = Affine::new([target, b, c, target, e, f]);
    }

    /// Translates by `delta` in viewport space.
    pub fn compose_translate(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        self.affine = self.affine.then_translate(delta);
    }

    /// Returns the current uniform scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.affine.as_coeffs()[0]
    }

    /// Returns the current translation in viewport space.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.affine.translation()
    }

    /// Maps a point from image space into viewport space.
    #[must_use]
    pub fn map_point(&self, pt: Point) -> Point {
        self.affine * pt
    }

    /// Maps an axis-aligned image-space rectangle into viewport space.
    ///
    /// The result is the bounding box of the transformed corners, which for
    /// a uniform scale + translate is the exact image of the rectangle.
    #[must_use]
    pub fn map_rect(&self, rect: Rect) -> Rect {
        self.affine.transform_rect_bbox(rect)
    }

    /// Returns the on-screen rectangle of an image with the given intrinsic size.
    #[must_use]
    pub fn image_rect(&self, intrinsic: Size) -> Rect {
        self.map_rect(intrinsic.to_rect())
    }

    /// Returns the underlying affine, for handing to a renderer.
    #[must_use]
    pub fn affine(&self) -> Affine {
        self.affine
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Transform> for Affine {
    fn from(transform: Transform) -> Self {
        transform.affine
    }
}
