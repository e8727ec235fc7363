//! Criterion benchmarks for fundsim_core
//!
//! Run with: cargo bench -p fundsim_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use fundsim_core::config::SimulationOptions;
use fundsim_core::engine::{build_environment, run, run_parallel};
use fundsim_core::model::Project;
use fundsim_core::random::RandomStream;

fn create_projects(count: usize) -> Vec<Project> {
    (0..count)
        .map(|i| {
            Project::new(
                15usize.saturating_sub(i).max(1),
                10_000.0 + 1_000.0 * i as f64,
            )
        })
        .collect()
}

fn create_options(num_projects: usize, num_runs: usize) -> SimulationOptions {
    SimulationOptions {
        investment_amount: 620_000.0,
        num_runs,
        num_years: 15,
        performance: 0.034,
        volatility: 0.0896,
        seed: Some(10),
        projects: create_projects(num_projects),
        ..Default::default()
    }
}

fn benchmark_environment(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_environment");

    for num_runs in [1_000, 10_000] {
        let options = create_options(4, num_runs);
        group.bench_with_input(
            BenchmarkId::new("runs", num_runs),
            &options,
            |b, options| {
                b.iter(|| {
                    let mut random = RandomStream::for_seed(options.seed);
                    build_environment(black_box(options), &mut random)
                })
            },
        );
    }

    group.finish();
}

fn benchmark_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("run");

    for num_projects in [1, 4, 8, 16] {
        let options = create_options(num_projects, 10_000);
        group.bench_with_input(
            BenchmarkId::new("projects", num_projects),
            &options,
            |b, options| {
                b.iter(|| {
                    let mut random = RandomStream::for_seed(options.seed);
                    run(black_box(options), &mut random)
                })
            },
        );
    }

    group.finish();
}

fn benchmark_run_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_parallel");

    for num_projects in [1, 4, 8, 16] {
        let options = create_options(num_projects, 10_000);
        group.bench_with_input(
            BenchmarkId::new("projects", num_projects),
            &options,
            |b, options| {
                b.iter(|| {
                    let mut random = RandomStream::for_seed(options.seed);
                    run_parallel(black_box(options), &mut random)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_environment,
    benchmark_run,
    benchmark_run_parallel
);
criterion_main!(benches);
