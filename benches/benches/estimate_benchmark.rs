//! Estimation pipeline benchmarks.
//!
//! Run with: `cargo bench --package preflight-bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use preflight_bench::{synthetic_profile, temp_selection};
use preflight_lib::prelude::*;

fn estimate_benchmark(c: &mut Criterion) {
    let estimator = MemoryEstimator::new();
    let recommender = PolicyRecommender::new();
    let settings = PerformanceSettings::new(ConversionMode::Speed, 1024, 8, true);

    let mut group = c.benchmark_group("estimate");
    for files in [10, 1_000, 100_000] {
        let input = MemoryEstimateInput::from_settings(&synthetic_profile(files), &settings);
        group.bench_with_input(BenchmarkId::from_parameter(files), &input, |b, input| {
            b.iter(|| {
                let estimate = estimator.estimate(input);
                recommender.recommend(&estimate, settings.max_ram_mb())
            });
        });
    }
    group.finish();
}

fn profile_benchmark(c: &mut Criterion) {
    let profiler = InputProfiler::new();

    let mut group = c.benchmark_group("profile");
    group.sample_size(20);
    for count in [100, 1_000] {
        let selection = temp_selection(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(count),
            &selection.files,
            |b, files| b.iter(|| profiler.profile(files)),
        );
    }
    group.finish();
}

criterion_group!(benches, estimate_benchmark, profile_benchmark);
criterion_main!(benches);
