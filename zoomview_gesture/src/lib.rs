// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoomview Gesture: touch gesture recognition for pan/zoom surfaces.
//!
//! This crate provides small, focused state machines that turn a stream of
//! raw multi-touch samples into higher-level intents. Each module handles a
//! specific part of the problem:
//!
//! - [`drag`]: Centroid drag tracking with a touch-slop threshold
//! - [`velocity`]: Least-squares release velocity for fling hand-off
//! - [`double_tap`]: Double-tap recognition with spatial/temporal tolerance
//! - [`pinch`]: Pinch (scale gesture) recognition from pointer spans
//!
//! [`GestureInterpreter`] composes them and emits [`GestureIntent`]s in the
//! order a controller should apply them.
//!
//! ## Design Philosophy
//!
//! - **Headless**: no clock, no event loop; every sample carries its own
//!   timestamp and the interpreter only reacts to what it is fed.
//! - **Integration-friendly**: samples are plain data, so any windowing or
//!   input system can produce them.
//! - **Intent, not effect**: the interpreter never touches a transform. It
//!   reports what the user did; `zoomview` decides what that means.
//!
//! ## Usage
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use zoomview_gesture::{GestureIntent, GestureInterpreter, TouchPhase, TouchSample};
//!
//! let mut gestures = GestureInterpreter::default();
//!
//! let down = TouchSample::single(TouchPhase::Down, 0, Point::new(100.0, 100.0));
//! assert_eq!(gestures.process(&down).as_slice(), &[GestureIntent::Down]);
//!
//! // Moving past the touch slop turns the touch into a drag.
//! let moved = TouchSample::single(TouchPhase::Move, 16, Point::new(130.0, 100.0));
//! assert_eq!(
//!     gestures.process(&moved).as_slice(),
//!     &[GestureIntent::Move, GestureIntent::Drag { delta: Vec2::new(30.0, 0.0) }]
//! );
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod config;
pub mod double_tap;
pub mod drag;
mod interpreter;
pub mod pinch;
mod sample;
pub mod velocity;

pub use config::GestureConfig;
pub use interpreter::{GestureIntent, GestureInterpreter, Intents};
pub use sample::{TouchPhase, TouchPoint, TouchSample};
