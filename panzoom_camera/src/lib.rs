// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panzoom Camera: clamped position + scale state for a pannable, zoomable canvas.
//!
//! This crate provides a small, headless model of a 2D camera. It focuses on:
//! - Position (translation of the content origin) and uniform scale.
//! - Clamping the scale into a [`ScaleRange`] and the position into a
//!   [`PanRange`] derived from the viewport size and an optional
//!   content-space bounds limit.
//! - Anchor-preserving zoom (zoom toward the cursor or pinch midpoint).
//! - Conversions between content and view coordinates for renderers and
//!   hit testing.
//!
//! It does **not** render anything or listen to input devices. Callers are
//! expected to:
//! - Push the surface size and content bounds once per frame.
//! - Feed pan deltas and zoom ratios from a gesture layer (for example
//!   `panzoom_gesture`) into [`Camera::move_by`] / [`Camera::scale_by`].
//! - Read [`Camera::transform`] (or `position` + `scale`) when drawing.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size, Vec2};
//! use panzoom_camera::{Camera, ScaleRange};
//!
//! let mut camera = Camera::with_scale_range(ScaleRange::new(1.0, 4.0));
//! camera.set_viewport_size(Size::new(800.0, 400.0));
//! camera.set_bounds_limit(Some(Rect::new(0.0, 0.0, 800.0, 400.0)));
//!
//! // At scale 1 the content exactly fills the viewport: panning is absorbed.
//! camera.move_by(Vec2::new(25.0, 0.0));
//! assert_eq!(camera.position(), Point::ZERO);
//!
//! // Zoom in around the cursor; the point under it stays put.
//! let cursor = Point::new(200.0, 100.0);
//! let before = camera.view_to_content_point(cursor);
//! camera.scale_by(2.0, cursor);
//! let after = camera.view_to_content_point(cursor);
//! assert!((before - after).hypot() < 1e-9);
//! ```
//!
//! ## Clamping model
//!
//! With a bounds limit `b` and scale `s`, the translation range is
//! `max_x = -b.x0 * s` and `min_x = max_x - b.width() * s + viewport.width`
//! (likewise for Y): the scaled content can be dragged until its far edge
//! reaches the viewport's far edge. When the content is smaller than the
//! viewport the range inverts and the position collapses to `max_x`.
//! Without a bounds limit the range spans `±(2^53 - 1)`.
//!
//! No operation fails: degenerate input is clamped or ignored.
//!
//! This crate is `no_std`.

#![no_std]

mod camera;
mod range;

pub use camera::{Camera, CameraDebugInfo};
pub use range::{MAX_SAFE_INTEGER, PanRange, ScaleRange};
