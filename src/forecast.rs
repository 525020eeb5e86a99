// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Per-type linear trend of amount against elapsed days.

use crate::models::{
    ForecastOutcome, ForecastPoint, Transaction, TransactionType, TrendLine, TypeForecast,
};

/// One week and one month past the latest observation.
pub const DEFAULT_HORIZONS: [u32; 2] = [7, 30];

/// Whole days since the earliest timestamp in the snapshot, in snapshot order.
pub fn day_offsets(snapshot: &[Transaction]) -> Vec<i64> {
    let Some(epoch) = snapshot.iter().map(|t| t.timestamp).min() else {
        return Vec::new();
    };
    snapshot
        .iter()
        .map(|t| (t.timestamp - epoch).num_days())
        .collect()
}

/// Ordinary least squares over `(x, y)`. `None` when there are fewer than two
/// points or every `x` is the same.
pub fn fit_line(points: &[(i64, f64)]) -> Option<TrendLine> {
    if points.len() < 2 {
        return None;
    }
    let n = points.len() as f64;
    let mean_x = points.iter().map(|(x, _)| *x as f64).sum::<f64>() / n;
    let mean_y = points.iter().map(|(_, y)| *y).sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (x, y) in points {
        let dx = *x as f64 - mean_x;
        sxx += dx * dx;
        sxy += dx * (y - mean_y);
    }
    if sxx == 0.0 {
        return None;
    }

    let slope = sxy / sxx;
    let last_day_offset = points.iter().map(|(x, _)| *x).max()?;
    Some(TrendLine {
        slope,
        intercept: mean_y - slope * mean_x,
        last_day_offset,
    })
}

/// Fits each transaction type independently against a shared day epoch and
/// evaluates the line `h` days past that type's latest observation. Results
/// come back in `TransactionType::ALL` order.
pub fn forecast(snapshot: &[Transaction], horizons: &[u32]) -> Vec<TypeForecast> {
    let offsets = day_offsets(snapshot);

    TransactionType::ALL
        .iter()
        .map(|&kind| {
            let points: Vec<(i64, f64)> = snapshot
                .iter()
                .zip(&offsets)
                .filter(|(tx, _)| tx.kind == kind)
                .map(|(tx, day)| (*day, tx.amount))
                .collect();

            let outcome = match fit_line(&points) {
                Some(trend) => ForecastOutcome::Predicted {
                    points: horizons
                        .iter()
                        .map(|&h| {
                            let day_offset = trend.last_day_offset + i64::from(h);
                            ForecastPoint {
                                horizon_days: h,
                                day_offset,
                                amount: trend.predict(day_offset),
                            }
                        })
                        .collect(),
                    trend,
                },
                None => {
                    tracing::debug!(%kind, points = points.len(), "not enough data for trend");
                    ForecastOutcome::InsufficientData
                }
            };
            TypeForecast { kind, outcome }
        })
        .collect()
}
