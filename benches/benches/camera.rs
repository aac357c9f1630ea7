// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `panzoom_camera` clamping.

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size, Vec2};
use panzoom::{Camera, ScaleRange};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }

    fn signed(&mut self, magnitude: f64) -> f64 {
        (self.next_f64() * 2.0 - 1.0) * magnitude
    }
}

fn bounded_camera() -> Camera {
    let mut camera = Camera::with_scale_range(ScaleRange::new(1.0, 4.0));
    camera.set_viewport_size(Size::new(800.0, 400.0));
    camera.set_bounds_limit(Some(Rect::new(0.0, 0.0, 800.0, 400.0)));
    camera
}

fn requests(count: usize, seed: u64) -> Vec<(Point, f64)> {
    let mut rng = Lcg(seed);
    (0..count)
        .map(|_| {
            let position = Point::new(rng.signed(3_000.0), rng.signed(3_000.0));
            (position, rng.next_f64() * 6.0)
        })
        .collect()
}

fn bench_camera(c: &mut Criterion) {
    let mut group = c.benchmark_group("panzoom_camera");

    let batch = requests(1_024, 0xCA3E_0000_0000_0001);

    group.bench_function("update_position_scale(bounded)", |b| {
        b.iter_batched(
            bounded_camera,
            |mut camera| {
                for &(position, scale) in &batch {
                    camera.update_position_scale(black_box(position), black_box(scale));
                }
                black_box(camera.position());
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("update_position_scale(unbounded)", |b| {
        b.iter_batched(
            Camera::new,
            |mut camera| {
                for &(position, scale) in &batch {
                    camera.update_position_scale(black_box(position), black_box(scale));
                }
                black_box(camera.position());
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("scale_by+move_by", |b| {
        b.iter_batched(
            bounded_camera,
            |mut camera| {
                for &(position, scale) in &batch {
                    camera.scale_by(black_box(scale.max(0.1)), position);
                    camera.move_by(black_box(Vec2::new(position.y, position.x)));
                }
                black_box(camera.scale());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_camera);
criterion_main!(benches);
