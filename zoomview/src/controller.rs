// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The stateful pan/zoom controller.

use core::fmt;

use kurbo::{Point, Rect, Size, Vec2};
use zoomview_gesture::{GestureIntent, GestureInterpreter, TouchSample};
use zoomview_transform::Transform;

use crate::animation::{Animation, AnimationSlot};
use crate::{ConfigError, PanController, ScaleBounds, ScaleController, Surface, ZoomConfig, ZoomHost};

/// A fitted image/viewport pairing and the scale limits derived from it.
#[derive(Clone, Copy, Debug, PartialEq)]
struct View {
    surface: Surface,
    scale: ScaleController,
}

/// Touch-driven pan/zoom controller for a single image.
///
/// Feed it layout notifications ([`set_viewport_size`](Self::set_viewport_size),
/// [`set_image_size`](Self::set_image_size)), touch samples
/// ([`handle_touch`](Self::handle_touch)) and frame callbacks
/// ([`on_frame`](Self::on_frame)). Every transform change is reported to the
/// [`ZoomHost`].
///
/// Until both an image size and a viewport size are known, every operation
/// is a no-op and queries return `None`.
pub struct ZoomController<H: ZoomHost = ()> {
    config: ZoomConfig,
    host: H,
    gestures: GestureInterpreter,
    pan: PanController,
    animation: AnimationSlot,
    view: Option<View>,
    image_size: Option<Size>,
    viewport_size: Option<Size>,
    exclusive: bool,
    now_ms: u64,
}

impl<H: ZoomHost> fmt::Debug for ZoomController<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZoomController")
            .field("config", &self.config)
            .field("view", &self.view)
            .field("animation", &self.animation)
            .field("image_size", &self.image_size)
            .field("viewport_size", &self.viewport_size)
            .field("now_ms", &self.now_ms)
            .finish_non_exhaustive()
    }
}

impl Default for ZoomController {
    fn default() -> Self {
        Self::new(())
    }
}

impl<H: ZoomHost> ZoomController<H> {
    /// Creates a controller with the default configuration.
    #[must_use]
    pub fn new(host: H) -> Self {
        Self::build(ZoomConfig::default(), host)
    }

    /// Creates a controller with `config`, rejecting invalid values.
    pub fn with_config(config: ZoomConfig, host: H) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, host))
    }

    fn build(config: ZoomConfig, host: H) -> Self {
        Self {
            config,
            host,
            gestures: GestureInterpreter::new(config.gesture),
            pan: PanController::new(&config),
            animation: AnimationSlot::default(),
            view: None,
            image_size: None,
            viewport_size: None,
            exclusive: false,
            now_ms: 0,
        }
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    // --- Layout ---

    /// Reports the viewport size. A size different from the last one re-fits the image.
    pub fn set_viewport_size(&mut self, size: Size) {
        if self.viewport_size == Some(size) {
            return;
        }
        self.viewport_size = Some(size);
        self.refit();
    }

    /// Reports the loaded image's pixel size, or `None` once it is unloaded.
    ///
    /// A size different from the last one re-fits the image.
    pub fn set_image_size(&mut self, size: Option<Size>) {
        if self.image_size == size {
            return;
        }
        self.image_size = size;
        self.refit();
    }

    fn refit(&mut self) {
        self.animation.cancel();
        self.gestures.reset();
        self.release_exclusive();
        self.view = None;

        let (Some(image), Some(viewport)) = (self.image_size, self.viewport_size) else {
            return;
        };
        let Some(surface) = Surface::fit(image, viewport) else {
            log::debug!("cannot fit image {image:?} into viewport {viewport:?}");
            return;
        };
        let bounds = ScaleBounds::from_init(surface.scale(), &self.config);
        log::debug!(
            "fit image {image:?} into viewport {viewport:?}: scale {} (min {}, mid {}, max {}, overscroll {})",
            bounds.init,
            bounds.min,
            bounds.mid,
            bounds.max,
            bounds.max_overscroll,
        );
        self.view = Some(View {
            surface,
            scale: ScaleController::new(bounds, &self.config),
        });
        self.host.on_transform_changed(&surface.transform());
    }

    // --- Input ---

    /// Processes one touch sample.
    pub fn handle_touch(&mut self, sample: &TouchSample) {
        self.advance_clock(sample.time_ms);
        let intents = self.gestures.process(sample);
        if self.view.is_none() {
            return;
        }
        for intent in intents {
            self.apply_intent(intent);
        }
    }

    fn apply_intent(&mut self, intent: GestureIntent) {
        match intent {
            GestureIntent::DoubleTap { position } => {
                if self.animation.is_smooth_zooming() {
                    log::trace!("double tap ignored while zooming");
                    return;
                }
                if let Some(view) = &self.view {
                    let target = view.scale.bounds().double_tap_target(view.surface.scale());
                    self.start_smooth_zoom(target, position);
                }
            }
            GestureIntent::Down => {
                let preempt = self.config.preempt_smooth_zoom_on_touch && self.animation.is_smooth_zooming();
                if self.animation.is_flinging() || preempt {
                    self.cancel_animation();
                }
                self.claim_exclusive_if_zoomed();
            }
            GestureIntent::Move => self.claim_exclusive_if_zoomed(),
            GestureIntent::Drag { delta } => {
                self.apply_drag(delta);
            }
            GestureIntent::Scale { factor, focus } => {
                self.apply_scale_delta(factor, focus);
            }
            GestureIntent::ScaleBegin { .. } | GestureIntent::ScaleEnd => {}
            GestureIntent::Up { velocity } => {
                self.release_exclusive();
                self.settle();
                if let Some(velocity) = velocity
                    && !self.animation.is_smooth_zooming()
                {
                    self.start_fling(velocity);
                }
            }
            GestureIntent::Cancel => self.release_exclusive(),
        }
    }

    fn claim_exclusive_if_zoomed(&mut self) {
        let Some(view) = &self.view else {
            return;
        };
        if view.surface.exceeds_viewport(self.config.exclusive_epsilon) {
            self.exclusive = true;
            self.host.on_request_exclusive_gesture(true);
        }
    }

    fn release_exclusive(&mut self) {
        if self.exclusive {
            self.exclusive = false;
            self.host.on_request_exclusive_gesture(false);
        }
    }

    // --- Frames ---

    /// Runs the active animation's step if one is due at `now_ms`.
    ///
    /// Returns `true` if a step ran.
    pub fn on_frame(&mut self, now_ms: u64) -> bool {
        self.advance_clock(now_ms);
        let Some(view) = &mut self.view else {
            return false;
        };
        let before = view.surface.transform();
        if !self.animation.tick(&mut view.surface, self.now_ms, self.config.tick_interval_ms) {
            return false;
        }
        let after = view.surface.transform();
        if after != before {
            self.host.on_transform_changed(&after);
        }
        true
    }

    /// When the host should next call [`on_frame`](Self::on_frame), or `None` when idle.
    #[must_use]
    pub fn next_frame_at(&self) -> Option<u64> {
        self.animation.next_frame_at()
    }

    fn advance_clock(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    fn first_tick_at(&self) -> u64 {
        self.now_ms.saturating_add(self.config.tick_interval_ms)
    }

    // --- Direct operations ---

    /// Scales by `factor` about `pivot` (viewport coordinates), within the
    /// overscroll limits.
    ///
    /// Returns `false` if the step was rejected.
    pub fn apply_scale_delta(&mut self, factor: f64, pivot: Point) -> bool {
        let Some(view) = &mut self.view else {
            return false;
        };
        if !view.scale.apply_scale_delta(&mut view.surface, factor, pivot) {
            return false;
        }
        self.host.on_transform_changed(&view.surface.transform());
        true
    }

    /// Pans by `delta` on the axes where the image overflows the viewport.
    ///
    /// Returns `false` if the transform did not change.
    pub fn apply_drag(&mut self, delta: Vec2) -> bool {
        let Some(view) = &mut self.view else {
            return false;
        };
        let axes = view.surface.overflowing_axes();
        if !self.pan.apply_drag(&mut view.surface, delta, axes) {
            return false;
        }
        self.host.on_transform_changed(&view.surface.transform());
        true
    }

    /// Starts a smooth zoom toward `target` about `pivot`, replacing any running animation.
    ///
    /// The target is clamped into the scale limits. Returns `false` when
    /// already at the target.
    pub fn start_smooth_zoom(&mut self, target: f64, pivot: Point) -> bool {
        let Some(view) = &self.view else {
            return false;
        };
        let bounds = view.scale.bounds();
        let target = target.clamp(bounds.min, bounds.max_overscroll);
        let Some(zoom) = view.scale.smooth_zoom(&view.surface, target, pivot) else {
            return false;
        };
        log::debug!("smooth zoom from {} to {target}", view.surface.scale());
        let due = self.first_tick_at();
        self.animation.start(Animation::SmoothZoom(zoom), due);
        true
    }

    /// Starts a fling with the release `velocity` (px/s, in the direction the
    /// pointer moved), replacing any running animation.
    ///
    /// Returns `false` when the image cannot travel.
    pub fn start_fling(&mut self, velocity: Vec2) -> bool {
        let Some(view) = &self.view else {
            return false;
        };
        let Some(fling) = self.pan.fling(&view.surface, velocity, self.now_ms) else {
            return false;
        };
        log::debug!(
            "fling at {velocity:?} px/s for {:.0}ms",
            fling.scroller().duration_ms()
        );
        let due = self.first_tick_at();
        self.animation.start(Animation::Fling(fling), due);
        true
    }

    /// Snaps the scale back into `[init, max]` with a smooth zoom about the
    /// viewport center.
    ///
    /// Does nothing while a smooth zoom is already running. Returns `true`
    /// if a zoom started.
    pub fn settle(&mut self) -> bool {
        if self.animation.is_smooth_zooming() {
            return false;
        }
        let Some(view) = &self.view else {
            return false;
        };
        let Some(target) = view.scale.bounds().settle_target(view.surface.scale()) else {
            return false;
        };
        let pivot = view.surface.viewport_center();
        self.start_smooth_zoom(target, pivot)
    }

    /// Stops the running animation where it is. Returns `true` if one was running.
    pub fn cancel_animation(&mut self) -> bool {
        match self.animation.cancel() {
            Some(animation) => {
                log::debug!("animation cancelled: {animation:?}");
                true
            }
            None => false,
        }
    }

    // --- Queries ---

    /// The current transform.
    #[must_use]
    pub fn transform(&self) -> Option<Transform> {
        self.view.map(|view| view.surface.transform())
    }

    /// The current uniform scale.
    #[must_use]
    pub fn scale(&self) -> Option<f64> {
        self.view.map(|view| view.surface.scale())
    }

    /// The scale limits for the current pairing.
    #[must_use]
    pub fn scale_bounds(&self) -> Option<&ScaleBounds> {
        self.view.as_ref().map(|view| view.scale.bounds())
    }

    /// The image's rectangle in viewport coordinates.
    #[must_use]
    pub fn image_rect(&self) -> Option<Rect> {
        self.view.map(|view| view.surface.image_rect())
    }

    /// The fitted image/viewport pairing.
    #[must_use]
    pub fn surface(&self) -> Option<&Surface> {
        self.view.as_ref().map(|view| &view.surface)
    }

    /// The last reported image size.
    #[must_use]
    pub fn image_size(&self) -> Option<Size> {
        self.image_size
    }

    /// The last reported viewport size.
    #[must_use]
    pub fn viewport_size(&self) -> Option<Size> {
        self.viewport_size
    }

    /// Whether a smooth zoom is running.
    #[must_use]
    pub fn is_auto_scaling(&self) -> bool {
        self.animation.is_smooth_zooming()
    }

    /// Whether a fling is running.
    #[must_use]
    pub fn is_flinging(&self) -> bool {
        self.animation.is_flinging()
    }

    /// The animation slot.
    #[must_use]
    pub fn animation(&self) -> &AnimationSlot {
        &self.animation
    }

    /// The host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The host, mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consumes the controller, returning the host.
    #[must_use]
    pub fn into_host(self) -> H {
        self.host
    }
}
