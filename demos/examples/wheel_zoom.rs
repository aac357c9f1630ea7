// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel and mouse basics.
//!
//! Scrolls, ctrl-zooms at a cursor, then drags with the mouse, using a
//! surface that sits at an offset inside its window. Pixel, line, and page
//! scrolls arrive as `ui-events` pointer events; one legacy `wheelDelta`
//! reading goes through the wheel adapter. Also shows a frame hook
//! that eases the camera back toward the top-left corner.
//!
//! Run:
//! - `cargo run -p panzoom_demos --example wheel_zoom`
//! - `RUST_LOG=debug cargo run -p panzoom_demos --example wheel_zoom`

use dpi::PhysicalPosition;
use kurbo::{Point, Rect};
use panzoom::PanZoomSession;
use panzoom::gesture::synthetic;
use panzoom::gesture::ui_events::ScrollDelta;
use panzoom::gesture::ui_events::keyboard::Modifiers;
use panzoom::gesture::wheel::{LegacyWheelDelta, WheelAction, WheelInput};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Surface placed 40px from the window's left edge and 60px from its top.
    let surface = Rect::new(40.0, 60.0, 840.0, 460.0);
    let mut session = PanZoomSession::new();
    session.frame_bounded_to_surface(surface);

    let cursor = Point::new(440.0, 260.0);
    let legacy = WheelInput::from_legacy(
        LegacyWheelDelta::Single(Some(120.0)),
        session.gestures().config().legacy_wheel_divisor,
        Modifiers::CONTROL,
        cursor,
    );
    let action = session.wheel(&legacy);
    report(&session, action);

    let scrolls = [
        (
            ScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 50.0)),
            Modifiers::META,
        ),
        (
            ScrollDelta::PixelDelta(PhysicalPosition::new(-30.0, -90.0)),
            Modifiers::empty(),
        ),
        (ScrollDelta::LineDelta(-2.0, 0.0), Modifiers::SHIFT),
        (ScrollDelta::PageDelta(0.0, 0.25), Modifiers::empty()),
        (
            ScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -200.0)),
            Modifiers::CONTROL,
        ),
    ];
    for (delta, modifiers) in scrolls {
        let event = synthetic::scroll(delta, modifiers, cursor);
        if let Some(action) = session.pointer(&event) {
            report(&session, action);
        }
    }

    session.pointer(&synthetic::mouse_down(Point::new(100.0, 100.0)));
    for step in 1..=4 {
        let to = Point::new(100.0 + 25.0 * f64::from(step), 100.0);
        session.pointer(&synthetic::mouse_move(to));
        println!("mouse drag to {to:?} -> {:?}", session.camera().position());
    }
    session.pointer(&synthetic::mouse_up(Point::new(200.0, 100.0)));

    // Ease a tenth of the way home every frame.
    session.subscribe_frame(|camera| {
        let back = -camera.position().to_vec2() * 0.1;
        camera.move_by(back);
    });
    for _ in 0..10 {
        session.frame_bounded_to_surface(surface);
    }
    let home = session.camera().position().to_vec2();
    println!(
        "after easing: {:?} (|offset| = {:.2})",
        session.camera().position(),
        home.hypot()
    );
    tracing::info!(scale = session.camera().scale(), "done");
}

fn report(session: &PanZoomSession, action: WheelAction) {
    let camera = session.camera();
    match action {
        WheelAction::Pan(v) => println!("pan  {v:?} -> position {:?}", camera.position()),
        WheelAction::Zoom(z) => println!(
            "zoom x{:.3} at {:?} -> scale {:.3}",
            z.ratio,
            z.anchor,
            camera.scale()
        ),
    }
}
