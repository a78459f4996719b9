// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoomview: a touch-driven pan/zoom controller for a single image.
//!
//! [`ZoomController`] owns the image's [`Transform`] and turns host input into
//! changes of it:
//!
//! - pinch to scale about the fingers' focal point, with an elastic
//!   overscroll past the soft maximum that snaps back on release;
//! - double tap to zoom between the fit scale and twice the fit scale;
//! - drag to pan along the axes where the image overflows the viewport;
//! - fling to keep panning with decelerating inertia after release.
//!
//! After every change the image is pulled back against the viewport edges,
//! or centered on axes where it is smaller than the viewport.
//!
//! The controller is headless and clock-free. The host reports layout and
//! touch samples, calls [`ZoomController::on_frame`] when
//! [`ZoomController::next_frame_at`] says a step is due, and receives new
//! transforms through its [`ZoomHost`] implementation.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use zoomview::{TouchPhase, TouchSample, Transform, ZoomController, ZoomHost};
//!
//! #[derive(Default)]
//! struct Renderer {
//!     frames: Vec<Transform>,
//! }
//!
//! impl ZoomHost for Renderer {
//!     fn on_transform_changed(&mut self, transform: &Transform) {
//!         self.frames.push(*transform);
//!     }
//!
//!     fn on_request_exclusive_gesture(&mut self, _exclusive: bool) {}
//! }
//!
//! let mut zoom = ZoomController::new(Renderer::default());
//! zoom.set_viewport_size(Size::new(1080.0, 1920.0));
//! zoom.set_image_size(Some(Size::new(1080.0, 2400.0)));
//! assert_eq!(zoom.scale(), Some(1.0));
//!
//! // A double tap zooms to twice the fit scale about the tapped point.
//! let at = Point::new(540.0, 960.0);
//! for (phase, time_ms) in [(TouchPhase::Down, 0), (TouchPhase::Up, 60), (TouchPhase::Down, 180)] {
//!     zoom.handle_touch(&TouchSample::single(phase, time_ms, at));
//! }
//! assert!(zoom.is_auto_scaling());
//! while let Some(due) = zoom.next_frame_at() {
//!     zoom.on_frame(due);
//! }
//! assert_eq!(zoom.scale(), Some(2.0));
//! assert!(zoom.host().frames.len() > 2);
//! ```
//!
//! ## Crates
//!
//! - `zoomview_transform`: the transform, fit and edge-correction geometry.
//! - `zoomview_gesture`: touch samples to gesture intents.
//! - `zoomview` (this crate): scale limits, animations and the controller.
//!
//! Diagnostics go through the [`log`] facade; no logger is installed.
//!
//! This crate is `no_std`.

#![no_std]

mod animation;
mod bounds;
mod config;
mod controller;
mod host;
mod pan;
mod scale;
mod scroller;
mod surface;

pub use animation::{Animation, AnimationSlot};
pub use bounds::ScaleBounds;
pub use config::{ConfigError, ZoomConfig};
pub use controller::ZoomController;
pub use host::ZoomHost;
pub use pan::{Fling, PanController};
pub use scale::{ScaleController, SmoothZoom};
pub use scroller::Scroller;
pub use surface::Surface;

pub use zoomview_gesture::{
    GestureConfig, GestureIntent, GestureInterpreter, TouchPhase, TouchPoint, TouchSample,
};
pub use zoomview_transform::{Axes, Transform};
