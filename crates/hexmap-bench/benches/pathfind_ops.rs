//! Criterion micro-benchmarks for route searches.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use hexmap_bench::reference_world;
use hexmap_core::MapPoint;
use hexmap_world::{HumanRules, PathFinder, PathOptions};

/// Benchmark: walk around the lake, from one shore to the other.
fn bench_human_around_lake(c: &mut Criterion) {
    let world = reference_world(1).unwrap();
    let options = PathOptions::default().recorded();

    c.bench_function("human_around_lake", |b| {
        b.iter(|| {
            black_box(world.find_human_path(MapPoint::new(128, 95), MapPoint::new(128, 145), &options));
        });
    });
}

/// Benchmark: the same search through a caller-owned finder with
/// randomized tie-breaking.
fn bench_private_finder_randomized(c: &mut Criterion) {
    let world = reference_world(1).unwrap();
    let mut finder = PathFinder::new();
    let options = PathOptions::default().recorded().randomized();

    c.bench_function("private_finder_randomized", |b| {
        b.iter(|| {
            black_box(finder.find(
                &world,
                MapPoint::new(10, 40),
                MapPoint::new(240, 40),
                &HumanRules,
                &options,
            ));
        });
    });
}

/// Benchmark: ship route across the lake.
fn bench_ship_across_lake(c: &mut Criterion) {
    let world = reference_world(1).unwrap();

    c.bench_function("ship_across_lake", |b| {
        b.iter(|| {
            black_box(world.find_ship_path(MapPoint::new(50, 102), MapPoint::new(200, 137), None));
        });
    });
}

criterion_group!(
    benches,
    bench_human_around_lake,
    bench_private_finder_randomized,
    bench_ship_across_lake
);
criterion_main!(benches);
