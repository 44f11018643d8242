// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_window_scroll::{
    GeometryInput, HeadlessViewport, RenderedRange, ScrollConfig, SharedWindowMetrics,
    WindowScrollStrategy, compute_rendered_range,
};

const ITEM_EXTENT: f64 = 32.0;
const VIEWPORT: f64 = 900.0;

fn bench_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("window_scroll/geometry");

    // A settled range exercises the early-out path; a stale one forces an
    // expansion on every call.
    let settled = GeometryInput {
        scroll_offset: 64_000.0,
        viewport_extent: VIEWPORT,
        len: 100_000,
        item_extent: ITEM_EXTENT,
        min_buffer: 200.0,
        max_buffer: 600.0,
        previous: RenderedRange::new(1_990, 2_047),
    };
    group.bench_function("settled", |b| {
        b.iter(|| black_box(compute_rendered_range(black_box(&settled))));
    });

    let stale = GeometryInput {
        previous: RenderedRange::new(0, 30),
        ..settled
    };
    group.bench_function("stale", |b| {
        b.iter(|| black_box(compute_rendered_range(black_box(&stale))));
    });

    let shrunk = GeometryInput {
        len: 500,
        previous: RenderedRange::new(1_990, 2_047),
        ..settled
    };
    group.bench_function("shrunk", |b| {
        b.iter(|| black_box(compute_rendered_range(black_box(&shrunk))));
    });

    group.finish();
}

fn bench_scroll_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("window_scroll/strategy_sweep");

    // Hypothesis: per-event cost is flat in the list length since the
    // geometry never walks items.
    for len in [1_000_usize, 100_000, 10_000_000] {
        let steps = 1_000_u32;
        group.throughput(Throughput::Elements(u64::from(steps)));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            let window = SharedWindowMetrics::new(0.0, VIEWPORT);
            let mut strategy: WindowScrollStrategy<HeadlessViewport<f64>, _> =
                WindowScrollStrategy::new(ScrollConfig::new(ITEM_EXTENT, 0.0, 200.0, 600.0));
            strategy.attach(HeadlessViewport::new(len), window.clone());
            let max_offset = len as f64 * ITEM_EXTENT - VIEWPORT;

            b.iter(|| {
                for step in 0..steps {
                    let offset = (f64::from(step) * 97.0) % max_offset;
                    window.set_scroll_offset(offset);
                    strategy.on_window_scroll();
                }
                black_box(strategy.rendered_state());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_geometry, bench_scroll_sweep);
criterion_main!(benches);
