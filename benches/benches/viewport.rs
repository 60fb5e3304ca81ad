// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size, Vec2};
use vantage_view::{Viewport, ViewportFlags};

fn viewport() -> Viewport {
    let mut vp = Viewport::with_flags(
        Size::new(1280.0, 720.0),
        ViewportFlags::FLIPPED_VERTICALLY | ViewportFlags::MAINTAIN_ASPECT_RATIO,
    )
    .unwrap();
    vp.set_displayed_world_area(Rect::new(-50.0, -50.0, 50.0, 50.0))
        .unwrap();
    vp
}

fn bench_gestures(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport/gestures");

    // One frame's worth of wheel-zoom plus drag, as a gesture layer would issue.
    group.bench_function("zoom_pan_rotate", |b| {
        b.iter_batched(
            viewport,
            |mut vp| {
                let anchor = Point::new(640.0, 360.0);
                vp.zoom(anchor, 1.1, 1.1).unwrap();
                vp.pan(Vec2::new(3.0, -2.0)).unwrap();
                vp.rotate(anchor, 0.01).unwrap();
                black_box(vp);
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("resize_preserve_aspect", |b| {
        b.iter_batched(
            viewport,
            |mut vp| {
                vp.resize(Size::new(1024.0, 768.0)).unwrap();
                black_box(vp);
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport/queries");
    let vp = viewport();

    group.bench_function("visible_world_rect", |b| {
        b.iter(|| black_box(black_box(&vp).visible_world_rect()));
    });
    group.bench_function("screen_to_world_point", |b| {
        b.iter(|| black_box(vp.screen_to_world_point(black_box(Point::new(17.0, 400.0)))));
    });
    group.bench_function("suggest_grid_step", |b| {
        b.iter(|| black_box(vp.suggest_grid_step(black_box(64.0)).unwrap()));
    });

    group.finish();
}

criterion_group!(benches, bench_gestures, bench_queries);
criterion_main!(benches);
