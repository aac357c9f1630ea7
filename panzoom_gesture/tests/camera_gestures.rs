// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for `panzoom_gesture` driving a real `panzoom_camera::Camera`.
//!
//! These run whole gestures (touch, pinch, wheel, mouse) frame by frame and
//! check the resulting camera state rather than individual calls.

use dpi::PhysicalPosition;
use kurbo::{Point, Rect, Size, Vec2};
use panzoom_camera::{Camera, ScaleRange};
use panzoom_gesture::drag::MouseDrag;
use panzoom_gesture::synthetic;
use panzoom_gesture::wheel::{LegacyWheelDelta, WheelAction, WheelInput};
use panzoom_gesture::{GestureConfig, GestureInterpreter};
use ui_events::ScrollDelta;
use ui_events::keyboard::Modifiers;
use ui_events::pointer::{PointerEvent, PointerId};

const ORIGIN: Point = Point::new(0.0, 0.0);

fn id(n: u64) -> PointerId {
    PointerId::new(n).unwrap()
}

fn bounded_camera() -> Camera {
    let mut camera = Camera::with_scale_range(ScaleRange::new(1.0, 4.0));
    camera.set_viewport_size(Size::new(800.0, 400.0));
    camera.set_bounds_limit(Some(Rect::new(0.0, 0.0, 800.0, 400.0)));
    camera
}

#[test]
fn drag_on_unzoomed_bounded_content_is_absorbed() {
    let mut camera = bounded_camera();
    let mut gestures = GestureInterpreter::new();

    gestures.pointer_down(id(1), Point::new(50.0, 50.0));
    gestures.sample_frame(&mut camera, ORIGIN);
    gestures.pointer_move(id(1), Point::new(90.0, 80.0));
    let sample = gestures.sample_frame(&mut camera, ORIGIN);

    assert_eq!(sample.pan, Some(Vec2::new(40.0, 30.0)));
    assert_eq!(camera.position(), Point::ZERO);
}

#[test]
fn pinch_out_zooms_in_and_pinch_in_returns() {
    let mut camera = bounded_camera();
    let mut gestures = GestureInterpreter::new();

    gestures.pointer_down(id(1), Point::new(350.0, 200.0));
    gestures.pointer_down(id(2), Point::new(450.0, 200.0));
    gestures.sample_frame(&mut camera, ORIGIN);
    assert_eq!(camera.scale(), 1.0);

    // Spread symmetrically by 50px: scale grows by exp(0.5) around (400, 200).
    gestures.pointer_move(id(1), Point::new(325.0, 200.0));
    gestures.pointer_move(id(2), Point::new(475.0, 200.0));
    gestures.sample_frame(&mut camera, ORIGIN);

    let expected = 0.5_f64.exp();
    assert!((camera.scale() - expected).abs() < 1e-12);
    let anchor_content = camera.view_to_content_point(Point::new(400.0, 200.0));
    assert!((anchor_content - Point::new(400.0, 200.0)).hypot() < 1e-9);

    // Pinch back in past the start: scale stops at the range minimum.
    gestures.pointer_move(id(1), Point::new(390.0, 200.0));
    gestures.pointer_move(id(2), Point::new(410.0, 200.0));
    gestures.sample_frame(&mut camera, ORIGIN);
    assert_eq!(camera.scale(), 1.0);
    assert_eq!(camera.position(), Point::ZERO);
}

#[test]
fn pinch_zoom_respects_scale_max() {
    let mut camera = bounded_camera();
    let mut gestures = GestureInterpreter::new();

    gestures.pointer_down(id(1), Point::new(300.0, 200.0));
    gestures.pointer_down(id(2), Point::new(500.0, 200.0));
    gestures.sample_frame(&mut camera, ORIGIN);

    for step in 1..=10 {
        let spread = 100.0 + 60.0 * f64::from(step);
        gestures.pointer_move(id(1), Point::new(400.0 - spread, 200.0));
        gestures.pointer_move(id(2), Point::new(400.0 + spread, 200.0));
        gestures.sample_frame(&mut camera, ORIGIN);
        assert!(camera.scale() <= 4.0);
    }
    assert_eq!(camera.scale(), 4.0);
}

#[test]
fn two_finger_pan_after_zoom_moves_camera() {
    let mut camera = bounded_camera();
    camera.scale_by(2.0, Point::new(400.0, 200.0));
    assert_eq!(camera.position(), Point::new(-400.0, -200.0));

    let mut gestures = GestureInterpreter::new();
    let surface = Point::new(30.0, 40.0);
    gestures.pointer_down(id(1), Point::new(100.0, 100.0));
    gestures.pointer_down(id(2), Point::new(200.0, 100.0));
    gestures.sample_frame(&mut camera, surface);

    gestures.pointer_move(id(1), Point::new(110.0, 95.0));
    gestures.pointer_move(id(2), Point::new(210.0, 95.0));
    let sample = gestures.sample_frame(&mut camera, surface);

    assert_eq!(sample.pan, Some(Vec2::new(10.0, -5.0)));
    assert_eq!(sample.zoom, None);
    assert_eq!(camera.position(), Point::new(-390.0, -205.0));
}

#[test]
fn wheel_pans_and_ctrl_wheel_zooms_at_cursor() {
    let mut camera = Camera::new();
    camera.set_viewport_size(Size::new(800.0, 400.0));
    let gestures = GestureInterpreter::new();
    let surface = Point::new(100.0, 50.0);

    let pan = WheelInput {
        delta: Vec2::new(20.0, 100.0),
        modifiers: Modifiers::empty(),
        position: Point::new(300.0, 250.0),
    };
    let action = gestures.handle_wheel(&mut camera, &pan, surface);
    assert_eq!(action, WheelAction::Pan(Vec2::new(-20.0, -100.0)));
    assert_eq!(camera.position(), Point::new(-20.0, -100.0));

    let zoom = WheelInput::from_legacy(
        LegacyWheelDelta::Single(Some(300.0)),
        3.0,
        Modifiers::CONTROL,
        Point::new(300.0, 250.0),
    );
    let anchor = Point::new(200.0, 200.0);
    let before = camera.view_to_content_point(anchor);
    gestures.handle_wheel(&mut camera, &zoom, surface);
    let after = camera.view_to_content_point(anchor);

    assert!((camera.scale() - 1.0_f64.exp()).abs() < 1e-12);
    assert!((after - before).hypot() < 1e-9);
}

#[test]
fn nan_wheel_event_leaves_camera_untouched() {
    let mut camera = Camera::new();
    let gestures = GestureInterpreter::with_config(GestureConfig::default());
    let input = WheelInput {
        delta: Vec2::new(f64::NAN, f64::NAN),
        modifiers: Modifiers::META,
        position: Point::new(10.0, 10.0),
    };
    gestures.handle_wheel(&mut camera, &input, ORIGIN);
    assert_eq!(camera.scale(), 1.0);
    assert_eq!(camera.position(), Point::ZERO);
}

#[test]
fn mouse_drag_pans_camera_directly() {
    let mut camera = Camera::new();
    let mut drag = MouseDrag::default();

    drag.press(Point::new(10.0, 10.0));
    drag.motion_pan(Point::new(15.0, 12.0), &mut camera);
    drag.motion_pan(Point::new(25.0, 2.0), &mut camera);
    drag.release();
    drag.motion_pan(Point::new(500.0, 500.0), &mut camera);

    assert_eq!(camera.position(), Point::new(15.0, -8.0));
}

#[test]
fn scroll_event_pans_with_content_and_ctrl_scroll_zooms_in() {
    let mut camera = Camera::new();
    camera.set_viewport_size(Size::new(800.0, 400.0));
    let gestures = GestureInterpreter::new();
    let config = *gestures.config();

    let scroll_input = |event: &PointerEvent| {
        let PointerEvent::Scroll(scroll) = event else {
            panic!("expected a scroll event, got {event:?}");
        };
        WheelInput::from_scroll(scroll, config.scroll_line_pixels, Size::new(800.0, 400.0))
    };

    // Two lines of upward scroll move the content down by 40px.
    let up = synthetic::scroll(
        ScrollDelta::LineDelta(0.0, 2.0),
        Modifiers::empty(),
        Point::new(100.0, 100.0),
    );
    gestures.handle_wheel(&mut camera, &scroll_input(&up), ORIGIN);
    assert_eq!(camera.position(), Point::new(0.0, 40.0));

    let pinch = synthetic::scroll(
        ScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 100.0)),
        Modifiers::CONTROL,
        Point::new(100.0, 100.0),
    );
    gestures.handle_wheel(&mut camera, &scroll_input(&pinch), ORIGIN);
    assert!((camera.scale() - 1.0_f64.exp()).abs() < 1e-12);
}

#[test]
fn touch_events_drive_pinch_through_ui_events() {
    let mut camera = bounded_camera();
    let mut gestures = GestureInterpreter::new();

    gestures.handle_pointer(&synthetic::touch_down(11, Point::new(300.0, 200.0)));
    gestures.handle_pointer(&synthetic::touch_down(12, Point::new(500.0, 200.0)));
    gestures.sample_frame(&mut camera, ORIGIN);

    gestures.handle_pointer(&synthetic::touch_move(11, Point::new(250.0, 200.0)));
    gestures.handle_pointer(&synthetic::touch_move(12, Point::new(550.0, 200.0)));
    let sample = gestures.sample_frame(&mut camera, ORIGIN);

    assert_eq!(sample.pointers, 2);
    assert!((camera.scale() - 1.0_f64.exp()).abs() < 1e-12);

    gestures.handle_pointer(&synthetic::touch_cancel(11));
    gestures.handle_pointer(&synthetic::touch_up(12, Point::new(550.0, 200.0)));
    assert!(gestures.pointers().is_empty());
}
