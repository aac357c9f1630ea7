// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel interpretation: normalize scroll deltas, then pan or zoom.
//!
//! Plain wheel motion pans the content with the scroll. With Ctrl or Meta
//! held (which is also what trackpad pinch gestures report on most
//! platforms) the vertical delta becomes a zoom around the cursor.
//!
//! [`WheelInput`] holds a pixel delta in wheel convention: positive values
//! scroll down/right, the way a page would. It is built either from a
//! `ui-events` [`PointerScrollEvent`] or, for hosts that still receive the
//! browser's legacy `wheelDelta*` fields, from a [`LegacyWheelDelta`].
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use panzoom_gesture::GestureConfig;
//! use panzoom_gesture::wheel::{WheelAction, WheelInput};
//! use ui_events::keyboard::Modifiers;
//!
//! let config = GestureConfig::default();
//! let input = WheelInput {
//!     delta: Vec2::new(0.0, 100.0),
//!     modifiers: Modifiers::empty(),
//!     position: Point::new(50.0, 60.0),
//! };
//! assert_eq!(
//!     WheelAction::interpret(&input, Point::ZERO, &config),
//!     WheelAction::Pan(Vec2::new(-0.0, -100.0)),
//! );
//! ```

use kurbo::{Point, Size, Vec2};
use ui_events::ScrollDelta;
use ui_events::keyboard::Modifiers;
use ui_events::pointer::PointerScrollEvent;

use crate::config::GestureConfig;
use crate::target::{PanZoomTarget, Zoom};

/// Legacy `wheelDeltaX` / `wheelDeltaY` / `wheelDelta` fields.
///
/// These count in the opposite direction to standard deltas, in units of
/// `legacy_wheel_divisor` pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LegacyWheelDelta {
    /// `wheelDeltaX` and `wheelDeltaY`.
    Axes {
        /// Horizontal legacy delta.
        x: f64,
        /// Vertical legacy delta.
        y: f64,
    },
    /// Single-axis `wheelDelta`, vertical only. `None` when the event
    /// carried no usable delta at all.
    Single(Option<f64>),
}

impl LegacyWheelDelta {
    /// Converts to a wheel-convention pixel delta.
    #[must_use]
    pub fn normalize(self, legacy_divisor: f64) -> Vec2 {
        match self {
            Self::Axes { x, y } => Vec2::new(-x / legacy_divisor, -y / legacy_divisor),
            Self::Single(Some(delta)) => Vec2::new(0.0, -delta / legacy_divisor),
            Self::Single(None) => Vec2::ZERO,
        }
    }
}

/// One wheel event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelInput {
    /// Pixel delta, positive scrolling down/right.
    pub delta: Vec2,
    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
    /// Pointer position in client coordinates.
    pub position: Point,
}

impl WheelInput {
    /// Reads a `ui-events` scroll event.
    ///
    /// `ui-events` deltas are positive when content should follow the
    /// pointer down/right, so they are negated into wheel convention.
    /// Pixel deltas are converted to logical pixels, line deltas are
    /// multiplied by `line_pixels`, and page deltas by `page`.
    #[must_use]
    pub fn from_scroll(event: &PointerScrollEvent, line_pixels: f64, page: Size) -> Self {
        let delta = match &event.delta {
            ScrollDelta::PixelDelta(pos) => {
                let logical = pos.to_logical::<f64>(event.state.scale_factor);
                Vec2::new(logical.x, logical.y)
            }
            ScrollDelta::LineDelta(x, y) => {
                Vec2::new(f64::from(*x) * line_pixels, f64::from(*y) * line_pixels)
            }
            ScrollDelta::PageDelta(x, y) => {
                Vec2::new(f64::from(*x) * page.width, f64::from(*y) * page.height)
            }
        };
        Self {
            delta: -delta,
            modifiers: event.state.modifiers,
            position: event.state.logical_point(),
        }
    }

    /// Builds an input from legacy wheel fields.
    #[must_use]
    pub fn from_legacy(
        legacy: LegacyWheelDelta,
        legacy_divisor: f64,
        modifiers: Modifiers,
        position: Point,
    ) -> Self {
        Self {
            delta: legacy.normalize(legacy_divisor),
            modifiers,
            position,
        }
    }
}

fn zero_nan(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v }
}

/// What a wheel event resolves to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WheelAction {
    /// Pan by the given surface-local delta.
    Pan(Vec2),
    /// Zoom around a surface-local anchor.
    Zoom(Zoom),
}

impl WheelAction {
    /// Resolves a wheel event into a pan or a zoom.
    ///
    /// `NaN` delta components read as `0.0`. `surface_origin` is the
    /// client-space origin of the render surface and is subtracted from
    /// the pointer position to obtain the zoom anchor.
    #[must_use]
    pub fn interpret(input: &WheelInput, surface_origin: Point, config: &GestureConfig) -> Self {
        let delta = Vec2::new(zero_nan(input.delta.x), zero_nan(input.delta.y));
        if input.modifiers.ctrl() || input.modifiers.meta() {
            Self::Zoom(Zoom {
                ratio: config.wheel_ratio(delta.y),
                anchor: (input.position - surface_origin).to_point(),
            })
        } else {
            Self::Pan(-delta)
        }
    }

    /// Sends this action to `target`.
    pub fn apply<T: PanZoomTarget + ?Sized>(self, target: &mut T) {
        match self {
            Self::Pan(delta) => target.move_by(delta),
            Self::Zoom(zoom) => zoom.apply(target),
        }
    }
}
