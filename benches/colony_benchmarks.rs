//! Solver benchmarks with confidence intervals.
//!
//! Run with: cargo criterion

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use formica::colony::{AntColony, PheromoneMatrix, Tour};
use formica::config::ColonyConfig;
use formica::engine::rng::ColonyRng;
use formica::graph::{DistanceMatrix, Edge};
use formica::metrics::NullSink;

/// Ring instance of size n: real edges of weight 3, chords at the penalty.
fn ring_instance(n: usize) -> DistanceMatrix {
    let edges: Vec<Edge> = (0..n).map(|i| Edge::new(i, (i + 1) % n, 3)).collect();
    DistanceMatrix::from_edges(&edges).expect("valid ring")
}

/// Single-tour construction across instance sizes.
fn bench_tour_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("tour_construction");
    group.sample_size(100);
    group.confidence_level(0.95);

    for n in [10, 25, 50].iter() {
        group.bench_with_input(BenchmarkId::new("construct", n), n, |b, &n| {
            let distances = ring_instance(n);
            let pheromone = PheromoneMatrix::uniform(n);
            let mut rng = ColonyRng::new(42);
            b.iter(|| {
                let tour = Tour::construct(&distances, &pheromone, 1.0, 2.0, &mut rng)
                    .expect("valid instance");
                black_box(tour.length(&distances))
            });
        });
    }

    group.finish();
}

/// Full solve loop on a small instance.
fn bench_full_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_solve");
    group.sample_size(20);
    group.confidence_level(0.95);

    for n in [10, 25].iter() {
        group.bench_with_input(BenchmarkId::new("solve", n), n, |b, &n| {
            let distances = ring_instance(n);
            let config = ColonyConfig::builder()
                .seed(42)
                .n_ants(10)
                .n_iterations(50)
                .build();
            let colony = AntColony::new(config).expect("valid config");
            b.iter(|| {
                let mut sink = NullSink;
                let solution = colony.solve(&distances, &mut sink).expect("solve");
                black_box(solution.best_length)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tour_construction, bench_full_solve);
criterion_main!(benches);
