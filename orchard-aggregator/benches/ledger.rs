//! Benchmarks for ledger building and variance roll-ups
//!
//! Run with: cargo bench -p orchard-aggregator

use chrono::{Days, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use orchard_aggregator::{build_ledger, compute_variance};
use orchard_shared::types::{ActualAmount, LedgerEvent, PlannedAmount};
use rand::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

// ============================================================================
// Helpers for synthetic data generation
// ============================================================================

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default()
}

fn make_events(rng: &mut StdRng, count: usize) -> Vec<LedgerEvent> {
    (0..count)
        .map(|_| {
            let date = start() + Days::new(rng.gen_range(0..365));
            let amount = Decimal::new(rng.gen_range(1..10_000_000), 2);
            LedgerEvent::new(Uuid::new_v4(), date, amount, "bench")
        })
        .collect()
}

fn make_amounts(rng: &mut StdRng, count: usize, categories: usize) -> (Vec<PlannedAmount>, Vec<ActualAmount>) {
    let planned = (0..categories)
        .map(|c| PlannedAmount::new(format!("category-{c}"), Decimal::new(rng.gen_range(0..5_000_000), 2)))
        .collect();
    let actual = (0..count)
        .map(|_| {
            let category = format!("category-{}", rng.gen_range(0..categories));
            let date = start() + Days::new(rng.gen_range(0..365));
            ActualAmount::new(category, date, Decimal::new(rng.gen_range(0..100_000), 2))
        })
        .collect();
    (planned, actual)
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_build_ledger(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_ledger");
    let mut rng = StdRng::seed_from_u64(42);

    for size in [100, 1_000, 10_000, 100_000] {
        let debits = make_events(&mut rng, size / 2);
        let credits = make_events(&mut rng, size / 2);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| build_ledger(black_box(&debits), black_box(&credits)));
        });
    }
    group.finish();
}

fn bench_compute_variance(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_variance");
    let mut rng = StdRng::seed_from_u64(7);

    for size in [1_000, 10_000, 100_000] {
        let (planned, actual) = make_amounts(&mut rng, size, 50);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| compute_variance(black_box(&planned), black_box(&actual), None));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build_ledger, bench_compute_variance);
criterion_main!(benches);
