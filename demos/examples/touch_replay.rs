// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch replay.
//!
//! Replays a scripted touch session against a headless 800x400 surface:
//! a pinch out, a two-finger pan, a third finger landing mid-gesture, then a
//! single-finger drag. Prints the camera after every frame.
//!
//! Run:
//! - `cargo run -p panzoom_demos --example touch_replay`
//! - `RUST_LOG=panzoom_gesture=trace,panzoom_camera=trace cargo run -p panzoom_demos --example touch_replay`

use kurbo::{Point, Rect};
use panzoom::gesture::synthetic::{touch_down, touch_move, touch_up};
use panzoom::gesture::ui_events::pointer::PointerEvent;
use panzoom::{PanZoomSession, ScaleRange, SessionConfig};
use tracing_subscriber::EnvFilter;

/// Events delivered before one frame.
type Frame = Vec<PointerEvent>;

fn down(id: u64, x: f64, y: f64) -> PointerEvent {
    touch_down(id, Point::new(x, y))
}

fn moved(id: u64, x: f64, y: f64) -> PointerEvent {
    touch_move(id, Point::new(x, y))
}

fn up(id: u64, x: f64, y: f64) -> PointerEvent {
    touch_up(id, Point::new(x, y))
}

fn script() -> Vec<Frame> {
    let mut frames: Vec<Frame> = vec![vec![down(1, 350.0, 200.0), down(2, 450.0, 200.0)]];

    // Spread the pair by 20px per frame.
    for step in 1..=5 {
        let spread = 50.0 + 10.0 * f64::from(step);
        frames.push(vec![
            moved(1, 400.0 - spread, 200.0),
            moved(2, 400.0 + spread, 200.0),
        ]);
    }

    // Slide both fingers left and up together.
    for step in 1..=3 {
        let shift = 15.0 * f64::from(step);
        frames.push(vec![
            moved(1, 300.0 - shift, 200.0 - shift),
            moved(2, 500.0 - shift, 200.0 - shift),
        ]);
    }

    // A third finger lands: zoom pauses for one frame.
    frames.push(vec![down(3, 700.0, 350.0)]);
    frames.push(vec![up(1, 255.0, 155.0), up(3, 700.0, 350.0)]);

    // Finger 2 keeps dragging on its own.
    for step in 1..=3 {
        let x = 455.0 + 20.0 * f64::from(step);
        frames.push(vec![moved(2, x, 155.0)]);
    }
    frames.push(vec![up(2, 515.0, 155.0)]);
    frames
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let surface = Rect::new(0.0, 0.0, 800.0, 400.0);
    let mut session = PanZoomSession::with_config(SessionConfig {
        scale_range: ScaleRange::new(1.0, 4.0),
        ..SessionConfig::default()
    });
    session.frame_bounded_to_surface(surface);

    for (index, events) in script().into_iter().enumerate() {
        for event in events {
            session.pointer(&event);
        }
        let out = session.frame_bounded_to_surface(surface);
        let camera = session.camera();
        tracing::info!(frame = index, pointers = out.sample.pointers, "frame done");
        println!(
            "frame {index:>2}: pointers={} position=({:8.2}, {:8.2}) scale={:.3}",
            out.sample.pointers,
            camera.position().x,
            camera.position().y,
            camera.scale(),
        );
    }

    println!("visible content: {:?}", session.camera().visible_content_rect());
}
