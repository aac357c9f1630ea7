// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panzoom: a headless viewport controller for pannable, zoomable canvases.
//!
//! This crate ties the workspace together:
//!
//! - [`camera`]: clamped position + scale state ([`Camera`]).
//! - [`gesture`]: pointer, pinch, wheel, and mouse-drag interpretation.
//! - [`frame`]: per-frame hook registry.
//! - [`PanZoomSession`]: the explicit context a host passes to its input
//!   callbacks and animation loop.
//!
//! Rendering, event-listener wiring, and the animation loop itself stay in
//! the host. The session consumes [`ui_events`](gesture::ui_events) pointer
//! events and the surface rectangle, and hands back a transform to draw
//! with. Hosts without a windowing backend can build events with
//! [`gesture::synthetic`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use panzoom::gesture::synthetic::{touch_down, touch_move};
//! use panzoom::{PanZoomSession, ScaleRange, SessionConfig};
//!
//! let config = SessionConfig {
//!     scale_range: ScaleRange::new(1.0, 4.0),
//!     ..SessionConfig::default()
//! };
//! let mut session = PanZoomSession::with_config(config);
//! let surface = Rect::new(0.0, 0.0, 800.0, 400.0);
//!
//! // Two fingers go down, then spread apart over the next frame.
//! session.pointer(&touch_down(1, Point::new(350.0, 200.0)));
//! session.pointer(&touch_down(2, Point::new(450.0, 200.0)));
//! session.frame_bounded_to_surface(surface);
//!
//! session.pointer(&touch_move(1, Point::new(300.0, 200.0)));
//! session.pointer(&touch_move(2, Point::new(500.0, 200.0)));
//! let out = session.frame_bounded_to_surface(surface);
//!
//! assert!(out.sample.zoom.is_some());
//! assert!(session.camera().scale() > 1.0);
//! ```

mod session;

pub use panzoom_camera as camera;
pub use panzoom_frame as frame;
pub use panzoom_gesture as gesture;

pub use panzoom_camera::{Camera, PanRange, ScaleRange};
pub use panzoom_frame::FrameToken;
pub use panzoom_gesture::{GestureConfig, PanZoomTarget};
pub use session::{FrameOutput, PanZoomSession, SessionConfig};
