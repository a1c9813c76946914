//! Benchmarks for cellflow
//!
//! Run with: cargo bench

use cellflow::{Behavior, Cell, ReactiveGraph, Signal, lift2, merge};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_cell_set(c: &mut Criterion) {
    let cell = Cell::new(0i32);
    c.bench_function("cell_set", |b| b.iter(|| cell.set_value(black_box(42))));
}

fn bench_cell_get(c: &mut Criterion) {
    let cell = Cell::new(42i32);
    c.bench_function("cell_get", |b| b.iter(|| black_box(cell.value())));
}

fn bench_behavior_sample(c: &mut Criterion) {
    let cell = Cell::new(21i32);
    let doubled: Behavior<'_, i32, 128> = Behavior::<i32>::tracking(&cell).map(|v| v * 2);
    c.bench_function("behavior_sample", |b| b.iter(|| black_box(doubled.sample())));
}

fn bench_lift2_sample(c: &mut Criterion) {
    let left = Cell::new(10i32);
    let right = Cell::new(20i32);
    let sum: Behavior<'_, i32, 256> = lift2(
        |a, b| a + b,
        &Behavior::<i32>::tracking(&left),
        &Behavior::<i32>::tracking(&right),
    );
    c.bench_function("lift2_sample", |b| b.iter(|| black_box(sum.sample())));
}

fn bench_signal_merge(c: &mut Criterion) {
    c.bench_function("signal_merge", |b| {
        b.iter(|| {
            black_box(merge(
                &Signal::fired(black_box(10i32)),
                &Signal::fired(black_box(20i32)),
                |x, y| x + y,
            ))
        })
    });
}

fn bench_graph_update_cell(c: &mut Criterion) {
    let graph = ReactiveGraph::new((Cell::new(5i32), Cell::new(10i32), Cell::new(0i32)));
    c.bench_function("graph_update_cell", |b| {
        b.iter(|| graph.update_cell::<2, _>(|cells| cells.0.value() + cells.1.value()))
    });
}

criterion_group!(
    benches,
    bench_cell_set,
    bench_cell_get,
    bench_behavior_sample,
    bench_lift2_sample,
    bench_signal_merge,
    bench_graph_update_cell,
);
criterion_main!(benches);
