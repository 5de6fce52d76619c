// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `trellis_strip` window queries.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use trellis_strip::RowStrip;

fn bench_window_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("strip_window");

    for len in [100_usize, 100_000, 10_000_000] {
        let strip = RowStrip::new(len, 20.0);
        let total = strip.total_extent();
        group.bench_with_input(BenchmarkId::new("sweep", len), &strip, |b, strip| {
            // Sweep the offset across the whole strip; window cost must not
            // depend on the row count.
            let mut offset = 0.0;
            b.iter(|| {
                offset += 37.0;
                if offset > total {
                    offset = 0.0;
                }
                black_box(strip.window(black_box(offset), 600.0, 40.0, 40.0))
            });
        });
    }

    group.finish();
}

fn bench_index_queries(c: &mut Criterion) {
    let strip = RowStrip::new(1_000_000, 20.0);
    c.bench_function("strip_index_containing", |b| {
        let mut offset = 0.0;
        b.iter(|| {
            offset += 113.0;
            if offset >= strip.total_extent() {
                offset = 0.0;
            }
            black_box(strip.index_containing(black_box(offset)))
        });
    });
}

criterion_group!(benches, bench_window_queries, bench_index_queries);
criterion_main!(benches);
