// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `panzoom_gesture` frame sampling.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size};
use panzoom::gesture::{GestureInterpreter, synthetic};
use panzoom::{Camera, PanZoomSession, ScaleRange};

const FRAMES: u32 = 240;

fn bounded_camera() -> Camera {
    let mut camera = Camera::with_scale_range(ScaleRange::new(1.0, 4.0));
    camera.set_viewport_size(Size::new(800.0, 400.0));
    camera.set_bounds_limit(Some(Rect::new(0.0, 0.0, 800.0, 400.0)));
    camera
}

/// Pointer ids start at 1; id 0 carries no `PointerId`.
fn id(i: u32) -> u64 {
    u64::from(i) + 1
}

/// Pointer `i` of `n` on a circle whose radius breathes with `frame`.
fn finger(i: u32, n: u32, frame: u32) -> Point {
    let angle = core::f64::consts::TAU * f64::from(i) / f64::from(n);
    let radius = 80.0 + 40.0 * (f64::from(frame) * 0.1).sin();
    Point::new(400.0 + radius * angle.cos(), 200.0 + radius * angle.sin())
}

fn bench_sample_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("panzoom_gesture");

    for fingers in [1_u32, 2, 5] {
        group.bench_with_input(
            BenchmarkId::new("sample_frame", fingers),
            &fingers,
            |b, &fingers| {
                b.iter_batched(
                    || {
                        let mut gestures = GestureInterpreter::new();
                        for i in 0..fingers {
                            gestures.handle_pointer(&synthetic::touch_down(
                                id(i),
                                finger(i, fingers, 0),
                            ));
                        }
                        (gestures, bounded_camera())
                    },
                    |(mut gestures, mut camera)| {
                        for frame in 1..=FRAMES {
                            for i in 0..fingers {
                                let event = synthetic::touch_move(id(i), finger(i, fingers, frame));
                                gestures.handle_pointer(&event);
                            }
                            black_box(gestures.sample_frame(&mut camera, Point::ZERO));
                        }
                        black_box(camera.scale());
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.bench_function("session_frame(pinch)", |b| {
        let surface = Rect::new(0.0, 0.0, 800.0, 400.0);
        b.iter_batched(
            || {
                let mut session = PanZoomSession::new();
                session.frame_bounded_to_surface(surface);
                session
            },
            |mut session| {
                for frame in 0..FRAMES {
                    for i in 0..2 {
                        let position = finger(i, 2, frame);
                        let event = if frame == 0 {
                            synthetic::touch_down(id(i), position)
                        } else {
                            synthetic::touch_move(id(i), position)
                        };
                        session.pointer(&event);
                    }
                    black_box(session.frame_bounded_to_surface(surface));
                }
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_sample_frame);
criterion_main!(benches);
