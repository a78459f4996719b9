// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use zoomview::ZoomController;
use zoomview_gesture::{GestureInterpreter, TouchPhase, TouchPoint, TouchSample};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_f64(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }
}

/// A drag with jitter: one finger down, `moves` samples, then up.
fn drag_stream(moves: u32, seed: u64) -> Vec<TouchSample> {
    let mut rng = Lcg::new(seed);
    let mut at = Point::new(540.0, 960.0);
    let mut stream = vec![TouchSample::single(TouchPhase::Down, 0, at)];
    for i in 1..=moves {
        at.x -= 10.0 + rng.next_f64() * 4.0;
        at.y += rng.next_f64() * 2.0 - 1.0;
        stream.push(TouchSample::single(TouchPhase::Move, u64::from(i) * 8, at));
    }
    stream.push(TouchSample::single(TouchPhase::Up, u64::from(moves + 1) * 8, at));
    stream
}

/// Two fingers spreading apart from the viewport center.
fn pinch_stream(moves: u32) -> Vec<TouchSample> {
    let pair = |spread: f64| {
        [
            TouchPoint::new(0, Point::new(540.0 - spread, 960.0)),
            TouchPoint::new(1, Point::new(540.0 + spread, 960.0)),
        ]
    };
    let mut stream = vec![TouchSample::new(
        TouchPhase::Down,
        0,
        [TouchPoint::new(0, Point::new(490.0, 960.0))],
    )];
    for i in 1..=moves {
        let t = u64::from(i) * 8;
        let spread = 50.0 + f64::from(i) * 2.0;
        stream.push(TouchSample::new(TouchPhase::Move, t, pair(spread)));
    }
    let t = u64::from(moves + 1) * 8;
    stream.push(TouchSample::new(
        TouchPhase::Up,
        t,
        [TouchPoint::new(0, Point::new(440.0, 960.0))],
    ));
    stream
}

fn bench_gestures(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoomview_gesture");
    group.sample_size(50);

    for &moves in &[64_u32, 512] {
        let drag = drag_stream(moves, 0xD1CE);
        group.bench_function(format!("interpret_drag(moves={moves})"), |b| {
            b.iter_batched(
                GestureInterpreter::default,
                |mut gestures| {
                    for sample in &drag {
                        black_box(gestures.process(sample));
                    }
                },
                BatchSize::SmallInput,
            );
        });

        let pinch = pinch_stream(moves);
        group.bench_function(format!("interpret_pinch(moves={moves})"), |b| {
            b.iter_batched(
                GestureInterpreter::default,
                |mut gestures| {
                    for sample in &pinch {
                        black_box(gestures.process(sample));
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();

    let mut group = c.benchmark_group("zoomview_controller");
    group.sample_size(50);
    let fitted = || {
        let mut zc = ZoomController::default();
        zc.set_viewport_size(Size::new(1080.0, 1920.0));
        zc.set_image_size(Some(Size::new(1080.0, 2400.0)));
        zc
    };
    let pinch = pinch_stream(256);
    group.bench_function("handle_pinch(moves=256)", |b| {
        b.iter_batched(
            fitted,
            |mut zc| {
                for sample in &pinch {
                    zc.handle_touch(sample);
                }
                black_box(zc.scale())
            },
            BatchSize::SmallInput,
        );
    });
    let drag = drag_stream(256, 0xBEEF);
    group.bench_function("handle_drag(moves=256)", |b| {
        b.iter_batched(
            || {
                let mut zc = fitted();
                zc.apply_scale_delta(3.0, Point::new(540.0, 960.0));
                zc
            },
            |mut zc| {
                for sample in &drag {
                    zc.handle_touch(sample);
                }
                black_box(zc.image_rect())
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_gestures);
criterion_main!(benches);
