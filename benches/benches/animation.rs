// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};
use zoomview::{Scroller, ZoomController};

fn fitted(viewport: Size, image: Size) -> ZoomController {
    let mut zc = ZoomController::default();
    zc.set_viewport_size(viewport);
    zc.set_image_size(Some(image));
    zc
}

fn run_to_rest(zc: &mut ZoomController) -> u32 {
    let mut ticks = 0;
    while let Some(due) = zc.next_frame_at() {
        zc.on_frame(due);
        ticks += 1;
    }
    ticks
}

fn bench_animation(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoomview_animation");
    group.sample_size(50);

    let viewport = Size::new(1080.0, 1920.0);
    let image = Size::new(4000.0, 6000.0);

    for &target in &[2.0_f64, 4.0] {
        group.bench_function(format!("smooth_zoom_to_rest(x{target})"), |b| {
            b.iter_batched(
                || {
                    let mut zc = fitted(viewport, image);
                    let init = zc.scale().unwrap_or(1.0);
                    zc.start_smooth_zoom(init * target, Point::new(300.0, 700.0));
                    zc
                },
                |mut zc| black_box(run_to_rest(&mut zc)),
                BatchSize::SmallInput,
            );
        });
    }

    for &speed in &[800.0_f64, 8000.0] {
        group.bench_function(format!("fling_to_rest(v={speed})"), |b| {
            b.iter_batched(
                || {
                    let mut zc = fitted(viewport, image);
                    zc.apply_scale_delta(4.0, Point::new(540.0, 960.0));
                    zc.start_fling(Vec2::new(-speed, speed * 0.5));
                    zc
                },
                |mut zc| black_box(run_to_rest(&mut zc)),
                BatchSize::SmallInput,
            );
        });
    }

    group.bench_function("scroller_compute_offset(1000 ticks)", |b| {
        b.iter(|| {
            let mut scroller = Scroller::fling(
                Point::new(500.0, 500.0),
                Vec2::new(40_000.0, -25_000.0),
                Point::ZERO,
                Point::new(1e6, 1e6),
                2_000.0,
                0,
            );
            let mut now = 0;
            while scroller.compute_offset(now) {
                now += 16;
            }
            black_box(scroller.current())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_animation);
criterion_main!(benches);
