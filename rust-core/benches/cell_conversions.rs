use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use rand::rngs::StdRng;
use rand::SeedableRng;
use lrl_cell::reduction::{DeloneReduction, ReductionOracle};
use lrl_cell::{RandomLatticeGenerator, UnitCell, G6};

/// Conversions between the cell and each lattice encoding
fn bench_conversions(c: &mut Criterion) {
    let mut group = c.benchmark_group("cell_conversions");

    let cell = UnitCell::new(10.0, 11.0, 12.0, 80.0, 85.0, 95.0);
    let g6 = cell.to_g6();

    group.bench_function("cell_to_g6", |b| {
        b.iter(|| black_box(&cell).to_g6());
    });

    group.bench_function("g6_to_cell", |b| {
        b.iter(|| UnitCell::from_g6(black_box(&g6)));
    });

    group.bench_function("cell_to_b4", |b| {
        b.iter(|| black_box(&cell).to_b4());
    });

    group.bench_function("cell_inverse", |b| {
        b.iter(|| black_box(&cell).inverse());
    });

    group.bench_function("primitive_cell_f", |b| {
        b.iter(|| black_box(&cell).primitive_cell(black_box("F")));
    });

    group.finish();
}

/// Reduction and the rejection samplers built on it
fn bench_reduction(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduction");

    let s6 = UnitCell::new(10.0, 11.0, 12.0, 70.0, 75.0, 80.0).to_s6();
    let oracle = DeloneReduction::default();

    group.bench_function("delone_reduce", |b| {
        b.iter(|| oracle.reduce(black_box(&s6)));
    });

    group.bench_function("metric_addition", |b| {
        let g6 = G6::new([100.0, 121.0, 144.0, 45.0, 20.0, -11.0]);
        b.iter(|| black_box(g6) + black_box(g6));
    });

    group.bench_function("random_delone_reduced", |b| {
        let mut generator = RandomLatticeGenerator::new(StdRng::seed_from_u64(0));
        b.iter(|| generator.delone_reduced());
    });

    group.finish();
}

criterion_group!(cell_benches, bench_conversions, bench_reduction);
criterion_main!(cell_benches);
