//! Criterion benchmarks for neighbour detection, coastlines and distance ranking.

use std::hint::black_box;

use carta_bench::{reference_profile, scattered_profile, stress_profile, ID_FIELD, NAME_FIELD};
use carta_relate::{BorderWeighting, CoastlineStrategy, GeometrySet, RelationConfig};
use criterion::{criterion_group, criterion_main, Criterion};

fn config() -> RelationConfig {
    RelationConfig::new(ID_FIELD, NAME_FIELD)
}

fn bench_fractional_reference(c: &mut Criterion) {
    c.bench_function("fractional_neighbours_256", |b| {
        b.iter(|| {
            let mut set = GeometrySet::build(reference_profile(), config()).unwrap();
            black_box(set.neighbours(BorderWeighting::Fractional).unwrap().row_sum(0));
        });
    });
}

fn bench_binary_stress(c: &mut Criterion) {
    let mut group = c.benchmark_group("stress");
    group.sample_size(10);
    group.bench_function("binary_neighbours_1600", |b| {
        b.iter(|| {
            let mut set = GeometrySet::build(stress_profile(), config()).unwrap();
            black_box(set.neighbours(BorderWeighting::Binary).unwrap().size());
        });
    });
    group.finish();
}

fn bench_explicit_coastline(c: &mut Criterion) {
    let explicit = config().with_coastline(CoastlineStrategy::Explicit);
    c.bench_function("explicit_coastline_256", |b| {
        b.iter(|| {
            let mut set = GeometrySet::build(reference_profile(), explicit.clone()).unwrap();
            black_box(set.coastline().unwrap().len());
        });
    });
}

fn bench_distance_ranks(c: &mut Criterion) {
    c.bench_function("distance_ranks_200", |b| {
        b.iter(|| {
            let mut set = GeometrySet::build(scattered_profile(200, 42), config()).unwrap();
            black_box(set.distances().unwrap().row_sum(0));
        });
    });
}

criterion_group!(
    benches,
    bench_fractional_reference,
    bench_binary_stress,
    bench_explicit_coastline,
    bench_distance_ranks
);
criterion_main!(benches);
