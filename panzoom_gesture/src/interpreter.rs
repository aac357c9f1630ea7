// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Multi-pointer gesture interpreter: one-finger drag, two-finger pan + pinch zoom.
//!
//! Pointer events only update tracked positions. Deltas are turned into
//! camera motion once per frame by [`GestureInterpreter::sample_frame`],
//! which must run after all of the frame's input events have been handled.

use kurbo::{Point, Vec2};
use ui_events::pointer::{PointerEvent, PointerId};

use crate::config::GestureConfig;
use crate::pinch::PinchBaseline;
use crate::pointers::PointerTracker;
use crate::target::{PanZoomTarget, Zoom};
use crate::wheel::{WheelAction, WheelInput};

/// What one call to [`GestureInterpreter::sample_frame`] applied.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameSample {
    /// Number of pointers active during the sample.
    pub pointers: usize,
    /// Pan delta sent to the target, if any.
    pub pan: Option<Vec2>,
    /// Pinch zoom sent to the target, if any.
    pub zoom: Option<Zoom>,
}

/// Turns pointer and wheel input into pan and zoom requests.
///
/// Pointers are keyed by their `ui-events` [`PointerId`].
#[derive(Clone, Debug)]
pub struct GestureInterpreter {
    pointers: PointerTracker<PointerId>,
    pinch: PinchBaseline,
    config: GestureConfig,
}

impl Default for GestureInterpreter {
    fn default() -> Self {
        Self {
            pointers: PointerTracker::default(),
            pinch: PinchBaseline::default(),
            config: GestureConfig::default(),
        }
    }
}

impl GestureInterpreter {
    /// Creates an idle interpreter with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an idle interpreter with the given configuration.
    #[must_use]
    pub fn with_config(config: GestureConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Replaces the configuration.
    pub fn set_config(&mut self, config: GestureConfig) {
        self.config = config;
    }

    /// Returns the tracked pointers.
    #[must_use]
    pub fn pointers(&self) -> &PointerTracker<PointerId> {
        &self.pointers
    }

    /// Pinch distance recorded by the last two-pointer frame, if any.
    #[must_use]
    pub fn pinch_baseline(&self) -> Option<f64> {
        self.pinch.previous_distance()
    }

    /// Dispatches a pointer event to the matching handler.
    ///
    /// Down, move, up, and cancel events are tracked by pointer id, at their
    /// logical position. Events without a pointer id, and every other kind
    /// (scroll, gesture, enter, leave), are ignored. Returns `true` if the
    /// tracked pointers changed.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> bool {
        match event {
            PointerEvent::Down(e) => {
                let Some(id) = e.pointer.pointer_id else {
                    return false;
                };
                self.pointer_down(id, e.state.logical_point());
                true
            }
            PointerEvent::Move(e) => e
                .pointer
                .pointer_id
                .is_some_and(|id| self.pointer_move(id, e.current.logical_point())),
            PointerEvent::Up(e) => e.pointer.pointer_id.is_some_and(|id| self.pointer_up(id)),
            PointerEvent::Cancel(info) => {
                info.pointer_id.is_some_and(|id| self.pointer_cancel(id))
            }
            _ => false,
        }
    }

    /// Starts tracking a pointer and resets the pinch baseline.
    ///
    /// The baseline is reset on every down, even when two or more pointers
    /// are already active, so pinch zoom resumes one frame later.
    /// A down for an id that is already tracked restarts that pointer at
    /// `position` and moves it behind every other active pointer.
    pub fn pointer_down(&mut self, id: PointerId, position: Point) {
        self.pointers.insert(id, position);
        self.pinch.reset();
        tracing::debug!(pointers = self.pointers.len(), "pointer down");
    }

    /// Updates a tracked pointer. Unknown ids are ignored.
    pub fn pointer_move(&mut self, id: PointerId, position: Point) -> bool {
        self.pointers.update(&id, position)
    }

    /// Stops tracking a released pointer. Unknown ids are ignored.
    pub fn pointer_up(&mut self, id: PointerId) -> bool {
        let removed = self.pointers.remove(&id).is_some();
        if removed {
            tracing::debug!(pointers = self.pointers.len(), "pointer up");
        }
        removed
    }

    /// Stops tracking a cancelled pointer. Unknown ids are ignored.
    pub fn pointer_cancel(&mut self, id: PointerId) -> bool {
        let removed = self.pointers.remove(&id).is_some();
        if removed {
            tracing::debug!(pointers = self.pointers.len(), "pointer cancelled");
        }
        removed
    }

    /// Forgets every pointer and the pinch baseline.
    pub fn reset(&mut self) {
        self.pointers.clear();
        self.pinch.reset();
    }

    /// Converts this frame's pointer motion into pan/zoom on `target`.
    ///
    /// - Two or more pointers: the two earliest form the pinch pair. Their
    ///   midpoint motion (surface-local) is always applied as a pan; a change
    ///   in their distance since the previous frame zooms by
    ///   `exp(change / pinch_zoom_divisor)` around the current midpoint.
    /// - One pointer: its raw screen delta pans, if non-zero.
    /// - No pointers: nothing.
    ///
    /// Afterwards every pointer's previous position advances to its current
    /// one. Call exactly once per frame.
    pub fn sample_frame<T: PanZoomTarget + ?Sized>(
        &mut self,
        target: &mut T,
        surface_origin: Point,
    ) -> FrameSample {
        let mut sample = FrameSample {
            pointers: self.pointers.len(),
            ..FrameSample::default()
        };

        if let Some((a, b)) = self.pointers.pinch_pair() {
            let origin = surface_origin.to_vec2();
            let previous_mid = a.previous.midpoint(b.previous) - origin;
            let current_mid = a.current.midpoint(b.current) - origin;
            let distance = a.current.distance(b.current);

            let pan = current_mid - previous_mid;
            target.move_by(pan);
            sample.pan = Some(pan);

            let pinch_delta = self.pinch.sample(distance);
            if pinch_delta != 0.0 {
                let zoom = Zoom {
                    ratio: self.config.pinch_ratio(pinch_delta),
                    anchor: current_mid,
                };
                zoom.apply(target);
                sample.zoom = Some(zoom);
            }
        } else if let Some(pointer) = self.pointers.nth(0) {
            let pan = pointer.delta();
            if pan != Vec2::ZERO {
                target.move_by(pan);
                sample.pan = Some(pan);
            }
        }

        self.pointers.advance();

        if sample.pan.is_some() || sample.zoom.is_some() {
            let zoom_ratio = sample.zoom.map(|zoom| zoom.ratio);
            tracing::trace!(
                pointers = sample.pointers,
                pan = ?sample.pan,
                zoom = ?zoom_ratio,
                "gesture frame"
            );
        }
        sample
    }

    /// Interprets a wheel event and applies it to `target`.
    pub fn handle_wheel<T: PanZoomTarget + ?Sized>(
        &self,
        target: &mut T,
        input: &WheelInput,
        surface_origin: Point,
    ) -> WheelAction {
        let action = WheelAction::interpret(input, surface_origin, &self.config);
        action.apply(target);
        action
    }
}
