// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Duration, TimeZone, Utc};
use moneychat::forecast::{DEFAULT_HORIZONS, day_offsets, fit_line, forecast};
use moneychat::models::{ForecastOutcome, Transaction, TransactionType};
use moneychat::parser::Labels;
use moneychat::report::forecast_texts;

fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 8, 0, 0).unwrap()
}

fn at(days: i64, kind: TransactionType, amount: f64) -> Transaction {
    Transaction {
        timestamp: epoch() + Duration::days(days),
        kind,
        amount,
        category: "X".into(),
    }
}

fn approx(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
}

fn predicted(outcome: &ForecastOutcome) -> Vec<(u32, f64)> {
    match outcome {
        ForecastOutcome::Predicted { points, .. } => {
            points.iter().map(|p| (p.horizon_days, p.amount)).collect()
        }
        ForecastOutcome::InsufficientData => panic!("expected a prediction"),
    }
}

#[test]
fn two_points_fit_exactly() {
    let snap = vec![
        at(0, TransactionType::Income, 100.0),
        at(10, TransactionType::Income, 200.0),
    ];
    let results = forecast(&snap, &DEFAULT_HORIZONS);
    assert_eq!(results[0].kind, TransactionType::Income);
    let ForecastOutcome::Predicted { trend, points } = &results[0].outcome else {
        panic!("expected income prediction");
    };
    approx(trend.slope, 10.0);
    approx(trend.intercept, 100.0);
    assert_eq!(trend.last_day_offset, 10);
    assert_eq!(points[0].day_offset, 17);
    approx(points[0].amount, 270.0);
    assert_eq!(points[1].day_offset, 40);
    approx(points[1].amount, 500.0);
}

#[test]
fn single_point_type_does_not_block_the_other() {
    let snap = vec![
        at(0, TransactionType::Income, 100.0),
        at(10, TransactionType::Income, 200.0),
        at(3, TransactionType::Expense, 40.0),
    ];
    let results = forecast(&snap, &DEFAULT_HORIZONS);
    assert_eq!(results.len(), 2);
    assert!(matches!(results[0].outcome, ForecastOutcome::Predicted { .. }));
    assert_eq!(results[1].kind, TransactionType::Expense);
    assert_eq!(results[1].outcome, ForecastOutcome::InsufficientData);
}

#[test]
fn horizons_count_from_the_types_own_latest_day() {
    // Expense ends on day 4 even though income runs to day 20.
    let snap = vec![
        at(0, TransactionType::Expense, 10.0),
        at(2, TransactionType::Expense, 20.0),
        at(4, TransactionType::Expense, 30.0),
        at(20, TransactionType::Income, 5.0),
    ];
    let results = forecast(&snap, &[7, 30]);
    assert_eq!(results[0].outcome, ForecastOutcome::InsufficientData);
    let pts = predicted(&results[1].outcome);
    assert_eq!(pts[0].0, 7);
    approx(pts[0].1, 5.0 * 11.0 + 10.0);
    approx(pts[1].1, 5.0 * 34.0 + 10.0);
}

#[test]
fn same_day_points_are_insufficient() {
    let snap = vec![
        at(0, TransactionType::Expense, 10.0),
        Transaction {
            timestamp: epoch() + Duration::hours(5),
            ..at(0, TransactionType::Expense, 30.0)
        },
    ];
    assert_eq!(day_offsets(&snap), vec![0, 0]);
    let results = forecast(&snap, &DEFAULT_HORIZONS);
    assert_eq!(results[1].outcome, ForecastOutcome::InsufficientData);
}

#[test]
fn epoch_is_shared_across_types() {
    let snap = vec![
        at(0, TransactionType::Income, 1.0),
        Transaction {
            timestamp: epoch() + Duration::days(3) + Duration::hours(23),
            ..at(0, TransactionType::Expense, 1.0)
        },
    ];
    assert_eq!(day_offsets(&snap), vec![0, 3]);
    assert!(day_offsets(&[]).is_empty());
}

#[test]
fn least_squares_on_noisy_points() {
    let line = fit_line(&[(0, 2.0), (1, 2.0), (2, 6.0), (3, 6.0)]).unwrap();
    approx(line.slope, 1.6);
    approx(line.intercept, 1.6);
    assert_eq!(line.last_day_offset, 3);
    assert!(fit_line(&[(4, 1.0)]).is_none());
    assert!(fit_line(&[]).is_none());
}

#[test]
fn empty_snapshot_yields_insufficient_for_both() {
    let results = forecast(&[], &DEFAULT_HORIZONS);
    assert!(
        results
            .iter()
            .all(|r| r.outcome == ForecastOutcome::InsufficientData)
    );
}

#[test]
fn forecast_is_repeatable_and_renders_text() {
    let snap = vec![
        at(0, TransactionType::Income, 100.0),
        at(10, TransactionType::Income, 200.0),
    ];
    let first = forecast(&snap, &DEFAULT_HORIZONS);
    assert_eq!(first, forecast(&snap, &DEFAULT_HORIZONS));

    let texts = forecast_texts(&first, &Labels::english(), "sum");
    assert_eq!(
        texts[0],
        "📈 Forecast for income:\nIn a week: 270.00 sum\nIn a month: 500.00 sum"
    );
    assert_eq!(texts[1], "⚠ Not enough data to forecast expense.");
}
