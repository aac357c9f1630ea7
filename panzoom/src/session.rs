// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Vec2};
use panzoom_camera::{Camera, ScaleRange};
use panzoom_frame::{FrameHooks, FrameToken};
use panzoom_gesture::drag::MouseDrag;
use panzoom_gesture::wheel::{WheelAction, WheelInput};
use panzoom_gesture::{FrameSample, GestureConfig, GestureInterpreter};
use ui_events::pointer::{PointerEvent, PointerType};

/// Startup configuration for a [`PanZoomSession`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionConfig {
    /// Allowed camera scale range.
    pub scale_range: ScaleRange,
    /// Gesture tuning.
    pub gesture: GestureConfig,
}

/// Result of one [`PanZoomSession::frame`] call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameOutput {
    /// What the gesture interpreter applied this frame.
    pub sample: FrameSample,
    /// Content → surface transform to draw with.
    pub transform: Affine,
}

/// One pannable, zoomable surface and everything that drives it.
///
/// The session is the explicit context a host threads through its input
/// callbacks and its animation loop:
///
/// - Input callbacks forward `ui-events` pointer events to
///   [`PanZoomSession::pointer`]. Legacy wheel input goes to
///   [`PanZoomSession::wheel`].
/// - The animation loop calls [`PanZoomSession::frame`] once per tick and
///   draws with the returned transform.
///
/// All mutation happens through `&mut self`, so the event/frame ordering
/// is whatever order the host calls in. Hosts that receive input on other
/// threads must funnel it to the thread that owns the session.
#[derive(Debug)]
pub struct PanZoomSession {
    camera: Camera,
    gestures: GestureInterpreter,
    mouse: MouseDrag,
    hooks: FrameHooks<Camera>,
    surface: Rect,
}

impl PanZoomSession {
    /// Creates a session with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    /// Creates a session from `config`.
    #[must_use]
    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            camera: Camera::with_scale_range(config.scale_range),
            gestures: GestureInterpreter::with_config(config.gesture),
            mouse: MouseDrag::default(),
            hooks: FrameHooks::new(),
            surface: Rect::ZERO,
        }
    }

    /// Returns the camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Returns the camera for direct manipulation (programmatic pans, resets).
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Returns the gesture interpreter.
    #[must_use]
    pub fn gestures(&self) -> &GestureInterpreter {
        &self.gestures
    }

    /// The surface rectangle (client coordinates) seen by the last frame.
    #[must_use]
    pub fn surface(&self) -> Rect {
        self.surface
    }

    /// Updates the surface rectangle without running a frame.
    ///
    /// Useful when the surface moves between frames (for example on scroll)
    /// and wheel events must resolve their anchor against the new origin.
    pub fn set_surface(&mut self, surface: Rect) {
        if self.surface != surface {
            tracing::debug!(?surface, "session surface changed");
            self.surface = surface;
        }
    }

    /// Routes a `ui-events` pointer event.
    ///
    /// - Scroll events are applied immediately as wheel input (see
    ///   [`PanZoomSession::wheel`]); their action is returned.
    /// - Mouse down/move/up/cancel drive the mouse drag, which pans on
    ///   every move while the button is held.
    /// - Touch and pen down/move/up/cancel are recorded by the gesture
    ///   interpreter and applied at the next [`PanZoomSession::frame`].
    ///
    /// Other events are ignored.
    pub fn pointer(&mut self, event: &PointerEvent) -> Option<WheelAction> {
        match event {
            PointerEvent::Scroll(scroll) => {
                let input = WheelInput::from_scroll(
                    scroll,
                    self.gestures.config().scroll_line_pixels,
                    self.surface.size(),
                );
                Some(self.wheel(&input))
            }
            PointerEvent::Down(e) if is_mouse(e.pointer.pointer_type) => {
                self.mouse_down(e.state.logical_point());
                None
            }
            PointerEvent::Move(e) if is_mouse(e.pointer.pointer_type) => {
                self.mouse_move(e.current.logical_point());
                None
            }
            PointerEvent::Up(e) if is_mouse(e.pointer.pointer_type) => {
                self.mouse_up();
                None
            }
            PointerEvent::Cancel(info) if is_mouse(info.pointer_type) => {
                self.mouse_up();
                None
            }
            _ => {
                self.gestures.handle_pointer(event);
                None
            }
        }
    }

    /// Applies a wheel event immediately.
    ///
    /// The zoom anchor is measured from the origin of the last known surface.
    pub fn wheel(&mut self, input: &WheelInput) -> WheelAction {
        self.gestures
            .handle_wheel(&mut self.camera, input, self.surface.origin())
    }

    /// Mouse button pressed at a client position.
    pub fn mouse_down(&mut self, position: Point) {
        self.mouse.press(position);
    }

    /// Mouse moved; pans immediately while the button is held.
    pub fn mouse_move(&mut self, position: Point) -> Option<Vec2> {
        self.mouse.motion_pan(position, &mut self.camera)
    }

    /// Mouse button released.
    pub fn mouse_up(&mut self) {
        self.mouse.release();
    }

    /// Adds a hook that runs every frame, after gesture sampling.
    pub fn subscribe_frame(&mut self, hook: impl FnMut(&mut Camera) + 'static) -> FrameToken {
        self.hooks.subscribe(hook)
    }

    /// Removes a frame hook.
    pub fn unsubscribe_frame(&mut self, token: FrameToken) -> bool {
        self.hooks.unsubscribe(token)
    }

    /// Runs one animation frame.
    ///
    /// In order:
    /// 1. records `surface` (client-space rectangle of the render surface);
    /// 2. samples pointer gestures, using the surface origin for local
    ///    coordinates;
    /// 3. runs frame hooks;
    /// 4. pushes the surface size and `bounds` into the camera, which
    ///    re-clamps if either changed.
    ///
    /// Returns the sample and the transform to draw with.
    pub fn frame(&mut self, surface: Rect, bounds: Option<Rect>) -> FrameOutput {
        self.set_surface(surface);
        let sample = self.gestures.sample_frame(&mut self.camera, surface.origin());
        self.hooks.tick(&mut self.camera);
        self.camera.set_viewport_size(surface.size());
        self.camera.set_bounds_limit(bounds);
        tracing::trace!(
            pointers = sample.pointers,
            panned = sample.pan.is_some(),
            zoomed = sample.zoom.is_some(),
            scale = self.camera.scale(),
            "session frame"
        );
        FrameOutput {
            sample,
            transform: self.camera.transform(),
        }
    }

    /// Runs one frame with the content bounded to the surface's own extent.
    ///
    /// Equivalent to `frame(surface, Some(Rect::from_origin_size(Point::ZERO, surface.size())))`,
    /// the usual setup when content is laid out to fill the surface.
    pub fn frame_bounded_to_surface(&mut self, surface: Rect) -> FrameOutput {
        let bounds = Rect::from_origin_size(Point::ZERO, surface.size());
        self.frame(surface, Some(bounds))
    }
}

impl Default for PanZoomSession {
    fn default() -> Self {
        Self::new()
    }
}

fn is_mouse(pointer_type: PointerType) -> bool {
    matches!(pointer_type, PointerType::Mouse)
}
