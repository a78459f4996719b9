// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The single animation slot driven by host frames.

use crate::{Fling, SmoothZoom, Surface};

/// Outcome of one animation tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    Continue,
    Done,
}

/// A running animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Animation {
    /// Stepped zoom toward a target scale.
    SmoothZoom(SmoothZoom),
    /// Inertial pan.
    Fling(Fling),
}

/// Holds at most one running [`Animation`] and when its next tick is due.
///
/// Starting an animation replaces whatever was running.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationSlot {
    active: Option<Animation>,
    due_ms: Option<u64>,
}

impl AnimationSlot {
    /// Installs `animation`, due for its first tick at `due_ms`.
    pub fn start(&mut self, animation: Animation, due_ms: u64) {
        if let Some(previous) = self.cancel() {
            log::debug!("animation replaced: {previous:?}");
        }
        self.active = Some(animation);
        self.due_ms = Some(due_ms);
    }

    /// Stops the running animation, returning it.
    pub fn cancel(&mut self) -> Option<Animation> {
        self.due_ms = None;
        let mut animation = self.active.take()?;
        if let Animation::Fling(fling) = &mut animation {
            fling.cancel();
        }
        Some(animation)
    }

    /// The running animation, if any.
    #[must_use]
    pub fn active(&self) -> Option<&Animation> {
        self.active.as_ref()
    }

    /// Time the next tick is due, or `None` when idle.
    #[must_use]
    pub fn next_frame_at(&self) -> Option<u64> {
        self.due_ms
    }

    /// Whether a smooth zoom is running.
    #[must_use]
    pub fn is_smooth_zooming(&self) -> bool {
        matches!(self.active, Some(Animation::SmoothZoom(_)))
    }

    /// Whether a fling is running.
    #[must_use]
    pub fn is_flinging(&self) -> bool {
        matches!(self.active, Some(Animation::Fling(_)))
    }

    /// Runs one tick if one is due at `now_ms`.
    ///
    /// Returns `true` when the surface was stepped. The next tick is
    /// scheduled `tick_ms` after `now_ms`, or cleared when the animation ends.
    pub(crate) fn tick(&mut self, surface: &mut Surface, now_ms: u64, tick_ms: u64) -> bool {
        let Some(due) = self.due_ms else {
            return false;
        };
        if now_ms < due {
            return false;
        }
        let Some(animation) = &mut self.active else {
            self.due_ms = None;
            return false;
        };
        let step = match animation {
            Animation::SmoothZoom(zoom) => zoom.step(surface),
            Animation::Fling(fling) => fling.step(surface, now_ms),
        };
        match step {
            Step::Continue => self.due_ms = Some(now_ms.saturating_add(tick_ms)),
            Step::Done => {
                log::debug!("animation finished at {now_ms}ms, scale {}", surface.scale());
                self.active = None;
                self.due_ms = None;
            }
        }
        true
    }
}
