//! Benchmarks for jitterstats estimators
//!
//! Run with: cargo bench --features full

// Require all features for benchmarks
#[cfg(not(all(feature = "rate", feature = "statistics")))]
compile_error!("Benchmarks require all features. Run: cargo bench --features full");

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};

use jitterstats::rate::{
    estimate_from_intervals, intervals_from_timestamps, IntervalHistogram, IntervalModeEstimator,
    MeanIntervalEstimator, ModeEstimatorConfig,
};
use jitterstats::statistics::IntervalStats;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 100 ms source with sub-millisecond receive jitter and a stall every 25 packets
fn jittery_timestamps(count: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut send_time = 0.0;
    (0..count)
        .map(|i| {
            let arrival = send_time + rng.gen_range(0.0..0.5);
            send_time += if i % 25 == 24 { 250.0 } else { 100.0 };
            arrival
        })
        .collect()
}

// ============================================================================
// Mode Estimator Benchmarks
// ============================================================================

fn bench_mode_estimator(c: &mut Criterion) {
    let mut group = c.benchmark_group("mode_estimator");

    for sample_count in [51usize, 501, 5001] {
        let timestamps = jittery_timestamps(sample_count, 42);
        group.throughput(Throughput::Elements(sample_count as u64));

        group.bench_function(format!("cycle_n{}", sample_count), |b| {
            b.iter_batched(
                || IntervalModeEstimator::new(1.0, sample_count).unwrap(),
                |mut est| {
                    for &t in &timestamps {
                        est.add_sample(t);
                    }
                    black_box(est.interval())
                },
                BatchSize::SmallInput,
            );
        });
    }

    for bin_width in [0.1, 1.0, 10.0] {
        let intervals = intervals_from_timestamps(&jittery_timestamps(501, 7));
        let config = ModeEstimatorConfig::new(bin_width, 501).unwrap();

        group.bench_function(format!("estimate_w{}", bin_width), |b| {
            b.iter(|| black_box(estimate_from_intervals(black_box(&intervals), &config)));
        });
    }

    group.finish();
}

// ============================================================================
// Histogram Benchmarks
// ============================================================================

fn bench_histogram(c: &mut Criterion) {
    let mut group = c.benchmark_group("histogram");
    let intervals = intervals_from_timestamps(&jittery_timestamps(5001, 3));
    group.throughput(Throughput::Elements(intervals.len() as u64));

    group.bench_function("build", |b| {
        b.iter(|| black_box(IntervalHistogram::build(black_box(&intervals), 1.0)));
    });

    let hist = IntervalHistogram::build(&intervals, 1.0).unwrap();
    group.bench_function("mode_bin", |b| {
        b.iter(|| black_box(hist.mode_bin()));
    });

    group.finish();
}

// ============================================================================
// Baseline Benchmarks
// ============================================================================

fn bench_baseline(c: &mut Criterion) {
    let mut group = c.benchmark_group("baseline");
    let timestamps = jittery_timestamps(501, 11);
    group.throughput(Throughput::Elements(timestamps.len() as u64));

    group.bench_function("mean_cycle", |b| {
        b.iter_batched(
            || MeanIntervalEstimator::new(timestamps.len()).unwrap(),
            |mut est| {
                for &t in &timestamps {
                    est.add_sample(t);
                }
                black_box(est.interval())
            },
            BatchSize::SmallInput,
        );
    });

    let intervals = intervals_from_timestamps(&timestamps);
    group.bench_function("interval_stats", |b| {
        b.iter(|| black_box(IntervalStats::from_intervals(black_box(&intervals))));
    });

    group.finish();
}

criterion_group!(benches, bench_mode_estimator, bench_histogram, bench_baseline);

criterion_main!(benches);
