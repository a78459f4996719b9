// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoomview Transform: the geometric core of a pan/zoom image view.
//!
//! This crate provides small, headless building blocks for showing a single
//! image inside a viewport, where both are expressed in device pixels. It
//! focuses on:
//! - A uniform scale + translate [`Transform`] that is only ever changed by
//!   composing further scales (about a pivot) and translations.
//! - Mapping the image's intrinsic rectangle into viewport space.
//! - Computing the initial fit-to-viewport transform.
//! - Edge correction: closing gaps between the image and viewport edges and
//!   centering axes where the image is smaller than the viewport.
//!
//! It does **not** interpret input or run animations. Gesture recognition
//! lives in `zoomview_gesture` and the stateful controller in `zoomview`.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use zoomview_transform::{centering_delta, fit_transform};
//!
//! let viewport = Size::new(800.0, 600.0);
//! let image = Size::new(1600.0, 400.0);
//!
//! // Fit the wide image to the viewport width and center it vertically.
//! let mut transform = fit_transform(image, viewport).unwrap();
//! assert_eq!(transform.scale(), 0.5);
//!
//! // Zoom in about a corner, then pull the image back flush with the edges.
//! transform.compose_scale(3.0, Point::new(0.0, 0.0));
//! let delta = centering_delta(transform.image_rect(image), viewport);
//! transform.compose_translate(delta);
//!
//! let rect = transform.image_rect(image);
//! assert!(rect.x0 <= 0.0 && rect.x1 >= viewport.width);
//! ```
//!
//! ## Design notes
//!
//! - Transforms are axis-aligned with a **uniform** scale factor.
//! - Composition follows "then" (post-multiplication) semantics: a composed
//!   operation is applied after everything already in the transform.
//! - Rotation and skew are out of scope.
//!
//! This crate is `no_std`.

#![no_std]

mod bounds;
mod fit;
mod transform;

pub use bounds::{Axes, centering_delta, drag_clamp_delta};
pub use fit::{fit_scale, fit_transform};
pub use transform::Transform;
