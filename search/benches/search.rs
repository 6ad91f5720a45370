//! Benchmarks for the sorted-sequence searches against the slice builtins
//!
//! Run with: `cargo bench --bench search`

use algo_grow_array::GrowArray;
use algo_search::{
    binary_search, binary_search_recursive, first_occurrence, last_occurrence, lower_bound,
    upper_bound,
};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn sorted(size: usize) -> GrowArray<u64> {
    // Every value appears twice so the occurrence searches have runs to find.
    (0..size as u64).map(|i| i / 2).collect()
}

fn bench_binary_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("binary_search");

    for size in [1 << 10, 1 << 16, 1 << 20] {
        let arr = sorted(size);
        let target = (size as u64) / 3;

        group.bench_with_input(BenchmarkId::new("iterative", size), &target, |b, target| {
            b.iter(|| black_box(binary_search(&arr, black_box(target))));
        });

        group.bench_with_input(BenchmarkId::new("recursive", size), &target, |b, target| {
            b.iter(|| black_box(binary_search_recursive(&arr, black_box(target))));
        });

        group.bench_with_input(BenchmarkId::new("slice", size), &target, |b, target| {
            b.iter(|| black_box(arr.as_slice().binary_search(black_box(target)).ok()));
        });
    }

    group.finish();
}

fn bench_bounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("bounds");

    for size in [1 << 10, 1 << 20] {
        let arr = sorted(size);
        let target = (size as u64) / 3;

        group.bench_with_input(BenchmarkId::new("lower_bound", size), &target, |b, target| {
            b.iter(|| black_box(lower_bound(&arr, black_box(target))));
        });

        group.bench_with_input(BenchmarkId::new("upper_bound", size), &target, |b, target| {
            b.iter(|| black_box(upper_bound(&arr, black_box(target))));
        });

        group.bench_with_input(BenchmarkId::new("partition_point", size), &target, |b, target| {
            b.iter(|| {
                let target = *black_box(target);
                black_box(arr.partition_point(|x| *x < target))
            });
        });
    }

    group.finish();
}

fn bench_occurrence(c: &mut Criterion) {
    let mut group = c.benchmark_group("occurrence");

    let size = 1 << 16;
    let arr = sorted(size);
    let target = (size as u64) / 3;

    group.bench_function("first_occurrence", |b| {
        b.iter(|| black_box(first_occurrence(&arr, black_box(&target))));
    });

    group.bench_function("last_occurrence", |b| {
        b.iter(|| black_box(last_occurrence(&arr, black_box(&target))));
    });

    group.finish();
}

criterion_group!(benches, bench_binary_search, bench_bounds, bench_occurrence);
criterion_main!(benches);
