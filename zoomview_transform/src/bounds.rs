// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edge correction for an image rectangle shown inside a viewport.
//!
//! Both functions return the translation that should be composed onto the
//! image transform; neither mutates anything.
//!
//! - [`centering_delta`] runs after every scale change: an axis where the
//!   image covers the viewport is pulled flush so no gap shows, and an axis
//!   where the image is smaller than the viewport is centered.
//! - [`drag_clamp_delta`] runs after panning: it only closes gaps on the
//!   requested [`Axes`] and never re-centers.

use kurbo::{Rect, Size, Vec2};

/// Corrections smaller than this (in pixels) are rounding noise and dropped,
/// so that applying a correction twice is a no-op.
const NEGLIGIBLE: f64 = 1e-9;

bitflags::bitflags! {
    /// Set of axes a pan or edge check applies to.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Axes: u8 {
        /// The X axis (left/right edges).
        const HORIZONTAL = 0b0000_0001;
        /// The Y axis (top/bottom edges).
        const VERTICAL   = 0b0000_0010;
    }
}

impl Axes {
    /// Axes along which `image` is strictly larger than `viewport`.
    ///
    /// Only these axes can be panned; on the others the image already fits
    /// and stays where the last centering put it.
    #[must_use]
    pub fn overflowing(image: Rect, viewport: Size) -> Self {
        let mut axes = Self::empty();
        if image.width() > viewport.width {
            axes |= Self::HORIZONTAL;
        }
        if image.height() > viewport.height {
            axes |= Self::VERTICAL;
        }
        axes
    }

    /// Zeroes the components of `delta` for axes not in `self`.
    #[must_use]
    pub fn mask(self, delta: Vec2) -> Vec2 {
        Vec2::new(
            if self.contains(Self::HORIZONTAL) { delta.x } else { 0.0 },
            if self.contains(Self::VERTICAL) { delta.y } else { 0.0 },
        )
    }
}

/// Translation that keeps `image` flush with or centered in the viewport.
///
/// Per axis:
/// - If the image extent is at least the viewport extent, a gap on the
///   leading edge (`x0 > 0`) or trailing edge (`x1 < width`) is closed.
///   Both cannot be open at once.
/// - Otherwise the image is centered on that axis.
#[must_use]
pub fn centering_delta(image: Rect, viewport: Size) -> Vec2 {
    Vec2::new(
        center_or_close(image.x0, image.x1, viewport.width),
        center_or_close(image.y0, image.y1, viewport.height),
    )
}

/// Translation that closes gaps between `image` and the viewport edges on `axes`.
///
/// Axes outside `axes` are left alone, even if they show a gap; callers
/// exclude axes where the image is smaller than the viewport.
#[must_use]
pub fn drag_clamp_delta(image: Rect, viewport: Size, axes: Axes) -> Vec2 {
    let dx = if axes.contains(Axes::HORIZONTAL) {
        close_gap(image.x0, image.x1, viewport.width)
    } else {
        0.0
    };
    let dy = if axes.contains(Axes::VERTICAL) {
        close_gap(image.y0, image.y1, viewport.height)
    } else {
        0.0
    };
    Vec2::new(dx, dy)
}

fn center_or_close(start: f64, end: f64, extent: f64) -> f64 {
    let len = end - start;
    if len >= extent {
        close_gap(start, end, extent)
    } else {
        snap(extent / 2.0 - end + len / 2.0)
    }
}

fn close_gap(start: f64, end: f64, extent: f64) -> f64 {
    let mut delta = 0.0;
    if start > 0.0 {
        delta = -start;
    }
    if end < extent {
        delta = extent - end;
    }
    snap(delta)
}

fn snap(delta: f64) -> f64 {
    if delta.abs() < NEGLIGIBLE { 0.0 } else { delta }
}
