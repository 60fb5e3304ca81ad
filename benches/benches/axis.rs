// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use vantage_axis::{AxisRange, NumberFormat, TickPlan, snap_down, snap_up};

fn inputs(len: usize) -> Vec<f64> {
    // Spread over ~24 decades so every branch of the snapping ladder is hit.
    (0..len)
        .map(|i| 10f64.powf(-12.0 + 24.0 * (i as f64) / (len as f64)) * 1.37)
        .collect()
}

fn bench_snap(c: &mut Criterion) {
    let mut group = c.benchmark_group("axis/snap");
    let xs = inputs(1_024);
    group.throughput(Throughput::Elements(xs.len() as u64));

    group.bench_function("snap_up", |b| {
        b.iter(|| {
            for &x in &xs {
                black_box(snap_up(black_box(x)).unwrap());
            }
        });
    });
    group.bench_function("snap_down", |b| {
        b.iter(|| {
            for &x in &xs {
                black_box(snap_down(black_box(x)).unwrap());
            }
        });
    });

    group.finish();
}

fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("axis/format");
    let xs = inputs(1_024);
    group.throughput(Throughput::Elements(xs.len() as u64));

    group.bench_function("for_value_and_format", |b| {
        b.iter(|| {
            for &x in &xs {
                black_box(NumberFormat::for_value(x).format(x));
            }
        });
    });

    group.finish();
}

fn bench_tick_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("axis/tick_plan");

    for target in [5usize, 10, 50, 200] {
        let range = AxisRange::new(-0.37, 1.21).unwrap();
        group.throughput(Throughput::Elements(target as u64));
        group.bench_with_input(BenchmarkId::new("plan_and_label", target), &target, |b, &t| {
            b.iter(|| {
                let plan = TickPlan::new(black_box(range), t).unwrap();
                for v in plan.ticks() {
                    black_box(plan.label(v));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_snap, bench_format, bench_tick_plan);
criterion_main!(benches);
