use chrono::Duration;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use sentinel_core::config::DashboardConfig;
use sentinel_core::models::UserActivity;
use sentinel_dashboard::views::{ActivityFilter, LevelFilter, RiskTimeline};
use sentinel_dashboard::{compute_stats, DashboardSnapshot, StatsAggregator};
use test_fixtures::{activity_draft, fixed_now};

/// 10K activities with scores spread over the whole range.
fn build_10k_activities() -> Vec<UserActivity> {
    (0..10_000)
        .map(|i| {
            let score = f64::from(i % 1001) / 10.0;
            activity_draft(&format!("user{i}"), score)
                .into_activity(format!("a{i}"), fixed_now() + Duration::seconds(i64::from(i)))
        })
        .collect()
}

fn bench_compute_stats(c: &mut Criterion) {
    let activities = build_10k_activities();
    c.bench_function("compute_stats_10k", |b| {
        b.iter(|| compute_stats(black_box(Some(activities.as_slice()))));
    });
}

fn bench_filter_and_timeline(c: &mut Criterion) {
    let activities = build_10k_activities();
    let filter = ActivityFilter::new("USER99", LevelFilter::All);

    c.bench_function("activity_search_10k", |b| {
        b.iter(|| filter.apply(black_box(&activities)).len());
    });
    c.bench_function("risk_timeline_10k", |b| {
        b.iter(|| RiskTimeline::from_activities(black_box(&activities), 20));
    });
}

fn bench_snapshot_build(c: &mut Criterion) {
    let activities = build_10k_activities();
    let config = DashboardConfig::default();
    let aggregator = StatsAggregator::from_config(&config);

    c.bench_function("snapshot_build_10k", |b| {
        b.iter(|| {
            DashboardSnapshot::build(
                fixed_now(),
                &aggregator,
                &config,
                black_box(&activities),
                &[],
                &[],
            )
        });
    });
}

criterion_group!(
    benches,
    bench_compute_stats,
    bench_filter_and_timeline,
    bench_snapshot_build
);
criterion_main!(benches);
