// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

use crate::Transform;

/// Returns the scale at which an image of `intrinsic` size fits `viewport`.
///
/// - When either intrinsic dimension already equals the matching viewport
///   dimension, that axis counts as fitted and the scale is `1.0`.
/// - Otherwise the smaller of the two axis ratios is used, so the image's
///   larger-relative dimension matches the viewport exactly and the other
///   dimension fits inside.
///
/// Returns `None` if either size has a non-positive dimension.
#[must_use]
pub fn fit_scale(intrinsic: Size, viewport: Size) -> Option<f64> {
    if !is_usable(intrinsic) || !is_usable(viewport) {
        return None;
    }
    if intrinsic.width == viewport.width || intrinsic.height == viewport.height {
        return Some(1.0);
    }
    let sx = viewport.width / intrinsic.width;
    let sy = viewport.height / intrinsic.height;
    Some(sx.min(sy))
}

/// Returns the initial transform: the image centered in `viewport` at [`fit_scale`].
///
/// The image center is first moved onto the viewport center, then scaled
/// about it, so the image stays centered regardless of the scale.
#[must_use]
pub fn fit_transform(intrinsic: Size, viewport: Size) -> Option<Transform> {
    let scale = fit_scale(intrinsic, viewport)?;
    let mut transform = Transform::IDENTITY;
    transform.compose_translate((viewport.to_vec2() - intrinsic.to_vec2()) / 2.0);
    transform.compose_scale(scale, (viewport.to_vec2() / 2.0).to_point());
    Some(transform)
}

fn is_usable(size: Size) -> bool {
    size.width > 0.0 && size.height > 0.0 && size.is_finite()
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::{fit_scale, fit_transform};

    #[test]
    fn matching_width_keeps_unit_scale() {
        let scale = fit_scale(Size::new(1080.0, 2400.0), Size::new(1080.0, 1920.0));
        assert_eq!(scale, Some(1.0));
    }

    #[test]
    fn oversized_image_shrinks_to_constraining_axis() {
        // Height ratio 0.5 is tighter than width ratio 0.625.
        let scale = fit_scale(Size::new(1600.0, 1600.0), Size::new(1000.0, 800.0));
        assert_eq!(scale, Some(0.5));
    }

    #[test]
    fn small_image_grows_until_one_axis_fills() {
        let scale = fit_scale(Size::new(250.0, 100.0), Size::new(1000.0, 800.0));
        assert_eq!(scale, Some(4.0));
    }

    #[test]
    fn mixed_image_fits_wide_axis() {
        let scale = fit_scale(Size::new(2000.0, 400.0), Size::new(1000.0, 800.0));
        assert_eq!(scale, Some(0.5));
    }

    #[test]
    fn degenerate_sizes_do_not_fit() {
        assert_eq!(fit_scale(Size::ZERO, Size::new(10.0, 10.0)), None);
        assert_eq!(fit_scale(Size::new(10.0, 10.0), Size::new(0.0, 10.0)), None);
        assert!(fit_transform(Size::new(-1.0, 5.0), Size::new(10.0, 10.0)).is_none());
    }

    #[test]
    fn fitted_image_is_centered() {
        let viewport = Size::new(1000.0, 800.0);
        let image = Size::new(333.0, 1777.0);
        let t = fit_transform(image, viewport).unwrap();
        let rect = t.image_rect(image);
        assert!((rect.center().x - 500.0).abs() < 1e-9);
        assert!((rect.center().y - 400.0).abs() < 1e-9);
        assert!((rect.height() - 800.0).abs() < 1e-9);
    }
}
