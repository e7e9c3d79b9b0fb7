//! # Agora Component Benchmarks
//!
//! | Component | Operation | Target |
//! |-----------|-----------|--------|
//! | Password strength | analyze | < 10µs |
//! | Ranking | hot / wilson score | < 100ns |
//! | Latency estimator | update | < 50ns |
//! | Load forecast | 24h x 10k trials | < 50ms |
//! | Rate limiter | try_acquire, existing key | < 1µs |

use std::sync::Arc;

use ag_02_password_strength::estimate_password_strength;
use ag_03_ranking::{hot_score_at, wilson_score, HotScoreConfig};
use ag_04_latency_estimator::{KalmanConfig, LatencyEstimator};
use ag_05_load_forecast::LoadForecaster;
use ag_07_rate_limiter::{RateLimitConfig, RateLimiter};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use shared_types::ManualTimeSource;

fn bench_password(c: &mut Criterion) {
    let mut group = c.benchmark_group("password_strength");
    for password in ["hunter2", "Tr0ub4dor&3", "correct horse battery staple"] {
        group.bench_with_input(BenchmarkId::from_parameter(password), password, |b, p| {
            b.iter(|| estimate_password_strength(black_box(p)))
        });
    }
    group.finish();
}

fn bench_ranking(c: &mut Criterion) {
    let config = HotScoreConfig::default();
    c.bench_function("hot_score", |b| {
        b.iter(|| hot_score_at(black_box(420), black_box(37), 0, 10_000, 7_200_000, &config))
    });
    c.bench_function("wilson_score", |b| {
        b.iter(|| wilson_score(black_box(420), black_box(457)))
    });
}

fn bench_estimator(c: &mut Criterion) {
    let mut estimator = LatencyEstimator::new(KalmanConfig::default()).unwrap();
    c.bench_function("kalman_update", |b| b.iter(|| estimator.update(black_box(101.5))));
}

fn bench_forecast(c: &mut Criterion) {
    let history: Vec<f64> = (0..168).map(|h| 100.0 + (h % 24) as f64).collect();
    let forecaster = LoadForecaster::default();
    let mut group = c.benchmark_group("predict_load");
    group.sample_size(20);
    for trials in [1_000u32, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(trials), &trials, |b, &trials| {
            b.iter(|| forecaster.predict_load_seeded(&history, 24, trials, 42))
        });
    }
    group.finish();
}

fn bench_limiter(c: &mut Criterion) {
    let clock = Arc::new(ManualTimeSource::new(0));
    let config = RateLimitConfig::new(u64::MAX, 1).unwrap();
    let limiter = RateLimiter::with_time_source(config, clock).unwrap();
    limiter.try_acquire("warm");
    c.bench_function("try_acquire_existing_key", |b| {
        b.iter(|| limiter.try_acquire(black_box("warm")))
    });
}

criterion_group!(
    benches,
    bench_password,
    bench_ranking,
    bench_estimator,
    bench_forecast,
    bench_limiter
);
criterion_main!(benches);
