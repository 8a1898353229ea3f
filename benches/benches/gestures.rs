// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};
use loupe_view::{ViewConfig, ZoomController};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_unit(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        f64::from((self.0 >> 32) as u32) / f64::from(u32::MAX)
    }
}

fn laid_out() -> ZoomController {
    let mut zoom = ZoomController::new(ViewConfig::default()).unwrap();
    zoom.set_content_size(Size::new(4000.0, 3000.0));
    zoom.set_viewport_size(Size::new(800.0, 600.0));
    zoom
}

/// Pinch samples that wander around the viewport center and drift past both
/// scale limits, so the elastic branch is exercised as well.
fn pinch_stream(len: usize, seed: u64) -> Vec<(f64, Point)> {
    let mut rng = Lcg::new(seed);
    (0..len)
        .map(|i| {
            let factor = if (i / 64) % 2 == 0 { 1.05 } else { 0.95 };
            let focus = Point::new(
                400.0 + (rng.next_unit() - 0.5) * 40.0,
                300.0 + (rng.next_unit() - 0.5) * 40.0,
            );
            (factor, focus)
        })
        .collect()
}

fn bench_gestures(c: &mut Criterion) {
    let mut group = c.benchmark_group("loupe_view");

    for &len in &[64_usize, 1_024] {
        let samples = pinch_stream(len, 0x10_0BE0_0000_0001);
        group.bench_function(format!("pinch(samples={len})"), |b| {
            b.iter_batched(
                laid_out,
                |mut zoom| {
                    zoom.begin_pinch(Point::new(400.0, 300.0));
                    for &(factor, focus) in &samples {
                        zoom.pinch(factor, focus);
                    }
                    zoom.end_pinch(0);
                    black_box(zoom.transform())
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.bench_function("pan(1024)", |b| {
        let mut rng = Lcg::new(7);
        let scrolls: Vec<Vec2> = (0..1_024)
            .map(|_| Vec2::new(rng.next_unit() * 60.0 - 30.0, rng.next_unit() * 60.0 - 30.0))
            .collect();
        b.iter_batched(
            || {
                let mut zoom = laid_out();
                zoom.double_tap(Point::new(400.0, 300.0), 0);
                while zoom.advance(1_000) {}
                zoom
            },
            |mut zoom| {
                for &scroll in &scrolls {
                    zoom.pan(scroll);
                }
                black_box(zoom.transform())
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("double_tap_then_frames", |b| {
        b.iter_batched(
            laid_out,
            |mut zoom| {
                zoom.double_tap(Point::new(400.0, 300.0), 0);
                let mut now = 0;
                while zoom.advance(now) {
                    now += 1;
                }
                black_box(zoom.transform())
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("viewport_resize", |b| {
        let mut zoom = laid_out();
        let mut flip = false;
        b.iter(|| {
            flip = !flip;
            let size = if flip {
                Size::new(600.0, 800.0)
            } else {
                Size::new(800.0, 600.0)
            };
            zoom.set_viewport_size(black_box(size));
            black_box(zoom.state().fit_scale())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_gestures);
criterion_main!(benches);
