// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between gesture interpretation and the camera it drives.

use kurbo::{Point, Vec2};
use panzoom_camera::Camera;

/// Something that can be panned and zoomed.
///
/// [`Camera`] is the production implementation. Tests and hosts that want
/// to observe or redirect gestures can provide their own.
pub trait PanZoomTarget {
    /// Pans by `delta` in surface-local pixels.
    fn move_by(&mut self, delta: Vec2);

    /// Multiplies the scale by `ratio`, keeping `anchor` (surface-local) fixed.
    fn scale_by(&mut self, ratio: f64, anchor: Point);
}

impl PanZoomTarget for Camera {
    fn move_by(&mut self, delta: Vec2) {
        Self::move_by(self, delta);
    }

    fn scale_by(&mut self, ratio: f64, anchor: Point) {
        Self::scale_by(self, ratio, anchor);
    }
}

impl<T: PanZoomTarget + ?Sized> PanZoomTarget for &mut T {
    fn move_by(&mut self, delta: Vec2) {
        (**self).move_by(delta);
    }

    fn scale_by(&mut self, ratio: f64, anchor: Point) {
        (**self).scale_by(ratio, anchor);
    }
}

/// A zoom request: multiply the scale by `ratio` around `anchor`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Zoom {
    /// Multiplicative scale change.
    pub ratio: f64,
    /// Surface-local point that stays fixed.
    pub anchor: Point,
}

impl Zoom {
    /// Sends this zoom to `target`.
    pub fn apply<T: PanZoomTarget + ?Sized>(self, target: &mut T) {
        target.scale_by(self.ratio, self.anchor);
    }
}
