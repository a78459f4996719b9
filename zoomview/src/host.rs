// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The controller's outbound contract with its host.

use zoomview_transform::Transform;

/// A callback sink for controller output.
///
/// The controller owns its host and calls it synchronously from whichever
/// operation caused the change.
pub trait ZoomHost {
    /// Called with the new transform whenever it changes, including the
    /// initial fit.
    fn on_transform_changed(&mut self, transform: &Transform);

    /// Called with `true` while the image is larger than the viewport during
    /// a touch sequence, so an enclosing swipeable container should not
    /// steal the gesture; called with `false` when that sequence ends.
    fn on_request_exclusive_gesture(&mut self, exclusive: bool);
}

/// A host that ignores all output; useful for polling-style integrations.
impl ZoomHost for () {
    fn on_transform_changed(&mut self, _transform: &Transform) {}

    fn on_request_exclusive_gesture(&mut self, _exclusive: bool) {}
}

impl<H: ZoomHost + ?Sized> ZoomHost for &mut H {
    fn on_transform_changed(&mut self, transform: &Transform) {
        (**self).on_transform_changed(transform);
    }

    fn on_request_exclusive_gesture(&mut self, exclusive: bool) {
        (**self).on_request_exclusive_gesture(exclusive);
    }
}
