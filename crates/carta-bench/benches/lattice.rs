//! Criterion benchmarks for lattice lookups.

use std::hint::black_box;

use carta_grid::SquareLattice;
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_cell_to_geo(c: &mut Criterion) {
    let lattice = SquareLattice::new(100, 1.0, (50.0, 50.0)).unwrap();
    c.bench_function("cell_to_geo_10k", |b| {
        b.iter(|| {
            for cell in lattice.cells() {
                black_box(lattice.cell_to_geo(cell).unwrap());
            }
        });
    });
}

fn bench_geo_to_cell(c: &mut Criterion) {
    let lattice = SquareLattice::new(100, 1.0, (50.0, 50.0)).unwrap();
    let probes: Vec<(f64, f64)> = (0..1000)
        .map(|i| (f64::from(i % 100) - 49.7, f64::from(i / 10) - 49.2))
        .collect();
    c.bench_function("geo_to_cell_1k", |b| {
        b.iter(|| {
            for &(x, y) in &probes {
                black_box(lattice.geo_to_cell(x, y).unwrap());
            }
        });
    });
}

fn bench_points_for(c: &mut Criterion) {
    let lattice = SquareLattice::new(100, 1.0, (0.0, 0.0)).unwrap();
    c.bench_function("points_for_10k", |b| {
        b.iter(|| black_box(lattice.points_for(lattice.cells()).unwrap().len()));
    });
}

criterion_group!(benches, bench_cell_to_geo, bench_geo_to_cell, bench_points_for);
criterion_main!(benches);
