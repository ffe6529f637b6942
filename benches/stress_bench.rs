//! Criterion benchmarks for stressel.
//!
//! Uses a synthetic dataset (a 2-D plane embedded among noisy columns) to
//! measure the cost functions, the cache, and the optimizer loops.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use stressel::ga::{GaConfig, GaRunner};
use stressel::pso::{PsoConfig, PsoRunner};
use stressel::random::create_rng;
use stressel::stress::{CostFunction, DistanceSummary, Kruskal, Sammon};
use stressel::{Dataset, FitnessFunction, NaiveFitness, Objective};

// ===========================================================================
// Synthetic data
// ===========================================================================

fn plane_with_noise(n: usize, d: usize, seed: u64) -> Dataset {
    let mut rng = create_rng(seed);
    let values: Vec<f64> = (0..n)
        .flat_map(|_| {
            let x: f64 = rng.random_range(-10.0..10.0);
            let y: f64 = rng.random_range(-10.0..10.0);
            let noise: Vec<f64> = (2..d).map(|_| rng.random_range(-0.1..0.1)).collect();
            [x, y].into_iter().chain(noise)
        })
        .collect();
    Dataset::new(n, d, values).unwrap()
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_cost_forms(c: &mut Criterion) {
    let mut group = c.benchmark_group("cost_forms");
    group.sample_size(10);

    for &n in &[50usize, 200] {
        let x = plane_with_noise(n, 10, 42);
        let y = x.select_columns(&[0, 1]);
        let summary = DistanceSummary::compute(&x);

        group.bench_with_input(BenchmarkId::new("sammon_naive", n), &(&x, &y), |b, (x, y)| {
            b.iter(|| black_box(Sammon.naive(black_box(x), black_box(y))))
        });
        group.bench_with_input(
            BenchmarkId::new("sammon_accelerated", n),
            &(&summary, &y),
            |b, (s, y)| b.iter(|| black_box(Sammon.accelerated(black_box(s), black_box(y)))),
        );
        group.bench_with_input(
            BenchmarkId::new("kruskal_accelerated", n),
            &(&summary, &y),
            |b, (s, y)| b.iter(|| black_box(Kruskal.accelerated(black_box(s), black_box(y)))),
        );
    }
    group.finish();
}

fn bench_cached_vs_naive_fitness(c: &mut Criterion) {
    let mut group = c.benchmark_group("fitness");
    group.sample_size(10);

    let x = plane_with_noise(100, 12, 7);
    let params: Vec<f64> = (0..12).map(|i| 1.0 / (i + 1) as f64).collect();
    let cached = FitnessFunction::new(x.clone(), Sammon, 3).unwrap();
    let naive = NaiveFitness::new(x, Sammon, 3).unwrap();

    group.bench_function("cached_hit", |b| {
        b.iter(|| black_box(cached.evaluate(black_box(&params))))
    });
    group.bench_function("naive", |b| {
        b.iter(|| black_box(naive.evaluate(black_box(&params))))
    });
    group.finish();
}

fn bench_optimizers(c: &mut Criterion) {
    let mut group = c.benchmark_group("optimizers");
    group.sample_size(10);

    for &d in &[8usize, 16] {
        let x = plane_with_noise(50, d, 3);
        let pso = PsoConfig::default()
            .with_max_iterations(30)
            .with_bounds(0.0, 1.0)
            .with_seed(42);
        let ga = GaConfig::default()
            .with_population_size(30)
            .with_max_generations(30)
            .with_mutation_rate(0.1)
            .with_mutation_std(0.25)
            .with_seed(42);

        group.bench_with_input(BenchmarkId::new("pso_sammon", d), &d, |b, &d| {
            b.iter(|| {
                // Fresh cache per iteration so every run pays for its misses.
                let f = FitnessFunction::new(x.clone(), Sammon, 2).unwrap();
                black_box(PsoRunner::run(&f, d, black_box(&pso)).unwrap())
            })
        });
        group.bench_with_input(BenchmarkId::new("ga_kruskal", d), &d, |b, &d| {
            b.iter(|| {
                let f = FitnessFunction::new(x.clone(), Kruskal, 2).unwrap();
                black_box(GaRunner::run(&f, d, black_box(&ga)).unwrap())
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_cost_forms,
    bench_cached_vs_naive_fitness,
    bench_optimizers
);
criterion_main!(benches);
