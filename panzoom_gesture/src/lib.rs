// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panzoom Gesture: turn raw pointer and wheel input into pan and zoom.
//!
//! This crate provides small state machines that sit between a host's
//! [`ui_events`] pointer events and a [`panzoom_camera::Camera`]:
//!
//! - [`pointers`]: Track active pointers by id, in arrival order, with
//!   previous/current positions
//! - [`pinch`]: Track the frame-to-frame change in pinch distance
//! - [`interpreter`]: One-finger drag and two-finger pan + pinch zoom,
//!   sampled once per frame
//! - [`wheel`]: Normalize wheel deltas and resolve them to pan or
//!   cursor-anchored zoom
//! - [`drag`]: Classic mouse-button drag panning on every move event
//! - [`synthetic`]: Build `ui-events` pointer events for headless replay
//!
//! Everything that moves the camera goes through the [`PanZoomTarget`]
//! trait, which [`panzoom_camera::Camera`] implements.
//!
//! ## Frame model
//!
//! Pointer events only record positions. Once per animation frame, after
//! that frame's events, the host calls
//! [`GestureInterpreter::sample_frame`], which computes deltas, drives the
//! target, and then advances every pointer's baseline. Wheel events are
//! applied immediately.
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use panzoom_camera::Camera;
//! use panzoom_gesture::{GestureInterpreter, synthetic};
//!
//! let mut camera = Camera::new();
//! camera.set_viewport_size(Size::new(800.0, 400.0));
//!
//! let mut gestures = GestureInterpreter::new();
//! let surface_origin = Point::new(0.0, 0.0);
//!
//! gestures.handle_pointer(&synthetic::touch_down(1, Point::new(50.0, 50.0)));
//! gestures.sample_frame(&mut camera, surface_origin);
//!
//! gestures.handle_pointer(&synthetic::touch_move(1, Point::new(53.0, 57.0)));
//! let sample = gestures.sample_frame(&mut camera, surface_origin);
//!
//! assert_eq!(sample.pan, Some(Vec2::new(3.0, 7.0)));
//! assert_eq!(camera.position(), Point::new(3.0, 7.0));
//! ```
//!
//! ## Input hygiene
//!
//! No input is rejected. Unknown pointer ids are ignored, `NaN` wheel
//! fields are read as zero, and the camera clamps whatever it is asked to
//! do.

pub mod config;
pub mod drag;
pub mod interpreter;
pub mod pinch;
pub mod pointers;
pub mod synthetic;
pub mod target;
pub mod wheel;

pub use ui_events;

pub use config::GestureConfig;
pub use interpreter::{FrameSample, GestureInterpreter};
pub use target::{PanZoomTarget, Zoom};
