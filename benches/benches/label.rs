// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Affine, Point, Vec2};
use vantage_label::{AnchorFraction, HeuristicTextMeasurer, LabelPlacement, LabelPredicate};

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("label/layout");
    let world_to_screen = Affine::translate(Vec2::new(640.0, 360.0)) * Affine::scale(12.0);
    let measurer = HeuristicTextMeasurer::default();
    let predicate = LabelPredicate::width_between(0.0, 80.0)
        .and(!LabelPredicate::height_between(0.0, 1.0))
        .or(LabelPredicate::always());

    for len in [16usize, 256, 4_096] {
        let placements: Vec<LabelPlacement> = (0..len)
            .map(|i| {
                LabelPlacement::new(Point::new(i as f64, 0.0))
                    .unwrap()
                    .with_anchor(AnchorFraction::TOP_CENTER)
                    .with_angle(-0.5)
                    .unwrap()
            })
            .collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("fixed_size", len), &placements, |b, ps| {
            b.iter(|| {
                for p in ps {
                    black_box(p.layout("1.25", &measurer, world_to_screen, &predicate));
                }
            });
        });

        group.bench_with_input(
            BenchmarkId::new("transforming", len),
            &placements,
            |b, ps| {
                b.iter(|| {
                    for p in ps {
                        let p = p.with_transforming_labels(true);
                        black_box(p.layout("1.25", &measurer, world_to_screen, &predicate));
                    }
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
