// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `trellis_table` scroll-driven recycling.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Size;
use trellis_table::{TableCell, TableDataSource, TableView};

struct Numbered {
    count: usize,
}

impl TableDataSource<usize> for Numbered {
    fn cell_count(&self) -> usize {
        self.count
    }

    fn cell_size(&self) -> Size {
        Size::new(320.0, 24.0)
    }

    fn build_cell(&mut self, index: usize, recycled: Option<TableCell<usize>>) -> TableCell<usize> {
        match recycled {
            Some(mut cell) => {
                *cell.payload_mut() = index;
                cell
            }
            None => TableCell::new(index),
        }
    }
}

fn bench_scroll_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("recycle_scroll");

    for count in [1_000_usize, 1_000_000] {
        group.bench_with_input(
            BenchmarkId::new("row_steps", count),
            &count,
            |b, &count| {
                let mut table = TableView::new(Numbered { count }, Size::new(320.0, 480.0));
                table.reload_data();
                let max = table.scroll_view().max_offset();
                b.iter(|| {
                    // One-row steps, wrapping at the end: every step recycles
                    // one leaver into one entrant.
                    let next = table.scroll_offset() + 24.0;
                    table.set_scroll_offset(if next > max { 0.0 } else { next });
                    black_box(table.used_len());
                });
            },
        );
    }

    group.finish();
}

fn bench_reload(c: &mut Criterion) {
    let mut table = TableView::new(Numbered { count: 100_000 }, Size::new(320.0, 480.0));
    table.reload_data();
    c.bench_function("reload_data", |b| {
        b.iter(|| {
            table.reload_data();
            black_box(table.used_len());
        });
    });
}

criterion_group!(benches, bench_scroll_churn, bench_reload);
criterion_main!(benches);
