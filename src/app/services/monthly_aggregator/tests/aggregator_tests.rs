//! Tests for monthly aggregation

use super::record;
use crate::app::services::monthly_aggregator::MonthlyAggregator;
use crate::models::{MonthKey, MonthSummary};

#[test]
fn test_empty_aggregator() {
    let aggregator = MonthlyAggregator::new();

    assert!(aggregator.is_empty());
    assert!(aggregator.finish().is_empty());
    assert_eq!(aggregator.record_count(), 0);
}

#[test]
fn test_rainy_month() {
    let mut aggregator = MonthlyAggregator::new();
    // 16 days alternating 10 and 20: total 240, then 8 more days of 10: 320
    for day in 1..=16 {
        let amount = if day % 2 == 0 { 20.0 } else { 10.0 };
        aggregator.add(&record(2022, 6, day, amount));
    }
    for day in 17..=24 {
        aggregator.add(&record(2022, 6, day, 10.0));
    }

    assert_eq!(
        aggregator.finish(),
        vec![MonthSummary {
            year: 2022,
            month: 6,
            total: 320.0,
            min: 10.0,
            max: 20.0
        }]
    );
    assert_eq!(aggregator.finish()[0].to_csv_row(), "2022,6,320,10,20");
}

#[test]
fn test_dry_month() {
    let mut aggregator = MonthlyAggregator::new();
    for day in 1..=30 {
        aggregator.add(&record(2022, 9, day, 0.0));
    }

    let summaries = aggregator.finish();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].to_csv_row(), "2022,9,0,0,0");
}

#[test]
fn test_first_record_seeds_min_and_max() {
    let mut aggregator = MonthlyAggregator::new();
    aggregator.add(&record(2022, 1, 1, 5.0));

    let summary = &aggregator.finish()[0];
    assert_eq!(summary.min, 5.0);
    assert_eq!(summary.max, 5.0);
    assert_eq!(summary.total, 5.0);
}

#[test]
fn test_min_max_bound_every_amount() {
    let amounts = [3.5, 0.2, 17.0, 8.25, 0.2, 12.0];
    let mut aggregator = MonthlyAggregator::new();
    for (day, amount) in amounts.iter().enumerate() {
        aggregator.add(&record(2021, 3, day as u32 + 1, *amount));
    }

    let summary = &aggregator.finish()[0];
    for amount in amounts {
        assert!(summary.min <= amount && amount <= summary.max);
    }
    assert_eq!(summary.min, 0.2);
    assert_eq!(summary.max, 17.0);
    assert_eq!(summary.total, amounts.iter().sum::<f64>());
}

#[test]
fn test_grouping_is_exact_and_first_seen_ordered() {
    let mut aggregator = MonthlyAggregator::new();
    aggregator.add(&record(2021, 5, 1, 1.0));
    aggregator.add(&record(2020, 5, 1, 2.0)); // same month, different year
    aggregator.add(&record(2021, 4, 30, 4.0)); // earlier date, seen later
    aggregator.add(&record(2021, 5, 31, 8.0));
    aggregator.add(&record(2020, 5, 2, 16.0));

    let keys: Vec<MonthKey> = aggregator.finish().iter().map(|s| s.key()).collect();
    assert_eq!(
        keys,
        vec![
            MonthKey {
                year: 2021,
                month: 5
            },
            MonthKey {
                year: 2020,
                month: 5
            },
            MonthKey {
                year: 2021,
                month: 4
            },
        ]
    );

    let totals: Vec<f64> = aggregator.finish().iter().map(|s| s.total).collect();
    assert_eq!(totals, vec![9.0, 18.0, 4.0]);
}

#[test]
fn test_finish_is_idempotent() {
    let mut aggregator = MonthlyAggregator::new();
    aggregator.add(&record(2021, 1, 1, 1.5));
    aggregator.add(&record(2021, 2, 1, 2.5));

    let first = aggregator.finish();
    let second = aggregator.finish();
    assert_eq!(first, second);
}

#[test]
fn test_counts() {
    let records = [
        record(2021, 1, 1, 1.0),
        record(2021, 1, 2, 1.0),
        record(2021, 2, 1, 1.0),
    ];
    let aggregator: MonthlyAggregator = records.iter().collect();

    assert_eq!(aggregator.record_count(), 3);
    assert_eq!(aggregator.month_count(), 2);
    assert_eq!(aggregator.buckets()[0].count, 2);
    assert_eq!(aggregator.buckets()[1].count, 1);
}
