// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunables shared by the pinch and wheel interpreters.

/// Gesture tuning.
///
/// Zoom divisors are "pixels per e-fold": a pinch that widens by
/// `pinch_zoom_divisor` pixels multiplies the scale by `e`. The exponential
/// mapping turns additive pixel deltas into smooth multiplicative zoom.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GestureConfig {
    /// Pinch distance change (in pixels) that scales by a factor of `e`.
    pub pinch_zoom_divisor: f64,
    /// Wheel `delta_y` (in pixels) that scales by a factor of `1/e`.
    pub wheel_zoom_divisor: f64,
    /// Divisor applied to legacy `wheelDelta*` fields to express them in pixels.
    pub legacy_wheel_divisor: f64,
    /// Pixels per line for line-based scroll deltas.
    pub scroll_line_pixels: f64,
}

impl GestureConfig {
    /// Zoom ratio for a change in pinch distance of `pinch_delta` pixels.
    #[must_use]
    pub fn pinch_ratio(&self, pinch_delta: f64) -> f64 {
        (pinch_delta / self.pinch_zoom_divisor).exp()
    }

    /// Zoom ratio for a modifier-wheel step of `delta_y` pixels.
    ///
    /// Scrolling down (positive `delta_y`) zooms out.
    #[must_use]
    pub fn wheel_ratio(&self, delta_y: f64) -> f64 {
        (-delta_y / self.wheel_zoom_divisor).exp()
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            pinch_zoom_divisor: 100.0,
            wheel_zoom_divisor: 100.0,
            legacy_wheel_divisor: 3.0,
            scroll_line_pixels: 20.0,
        }
    }
}
