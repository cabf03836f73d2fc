// ABOUTME: Criterion benchmarks for the progression analytics engine
// ABOUTME: Measures best-set selection, weekly aggregation, deltas, and sparkline rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the analytics pipeline behind the progress screen.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use common::fixtures::{generate_logs, LogBatchSize};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gymgo_core::models::RepRange;
use gymgo_intelligence::{
    aggregate_by_week, headline, pick_best_set, sparkline, suggest_next_target,
    week_over_week_delta, Metric,
};

const WEEKS_TOTAL: u32 = 8;

fn bench_best_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("best_set");
    for size in [LogBatchSize::Small, LogBatchSize::Large] {
        let logs = generate_logs("bench", size.count(), WEEKS_TOTAL);
        let sets: Vec<_> = logs.iter().flat_map(|entry| entry.sets.clone()).collect();
        group.throughput(Throughput::Elements(sets.len() as u64));
        group.bench_with_input(BenchmarkId::new("pick", size.name()), &sets, |b, sets| {
            b.iter(|| pick_best_set(black_box(sets)));
        });
    }
    group.finish();
}

fn bench_weekly_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("weekly_pipeline");
    for size in [LogBatchSize::Small, LogBatchSize::Large] {
        let logs = generate_logs("bench", size.count(), WEEKS_TOTAL);
        group.throughput(Throughput::Elements(logs.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("aggregate", size.name()),
            &logs,
            |b, logs| {
                b.iter(|| aggregate_by_week(black_box(logs), WEEKS_TOTAL));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("progress_screen", size.name()),
            &logs,
            |b, logs| {
                b.iter(|| {
                    let weeks = aggregate_by_week(black_box(logs), WEEKS_TOTAL);
                    let rows = week_over_week_delta(&weeks, Metric::E1rm);
                    let values: Vec<f64> = rows.iter().map(|row| row.value).collect();
                    (headline(&rows, 4), sparkline(&values))
                });
            },
        );
    }
    group.finish();
}

fn bench_suggestion(c: &mut Criterion) {
    let logs = generate_logs("bench", LogBatchSize::Small.count(), WEEKS_TOTAL);
    let best = logs.last().and_then(|entry| pick_best_set(&entry.sets));
    let range = RepRange::new(8, 12);

    c.bench_function("suggest_next_target", |b| {
        b.iter(|| suggest_next_target(black_box(range), black_box(best.as_ref())));
    });
}

criterion_group!(
    benches,
    bench_best_set,
    bench_weekly_pipeline,
    bench_suggestion
);
criterion_main!(benches);
