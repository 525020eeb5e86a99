// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Turns aggregation and forecast results into chat text and the
//! category comparison table handed to the chart renderer.

use crate::aggregate::Aggregation;
use crate::models::{ForecastOutcome, Totals, TypeForecast};
use crate::parser::Labels;
use crate::utils::{capitalize, fmt_money};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub category: String,
    pub income: f64,
    pub expense: f64,
}

/// Category rows in key order with both sides present (missing side is 0).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComparisonTable {
    pub income_label: String,
    pub expense_label: String,
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    pub fn max_value(&self) -> f64 {
        self.rows
            .iter()
            .flat_map(|r| [r.income, r.expense])
            .fold(0.0, f64::max)
    }
}

pub fn comparison_table(agg: &Aggregation, labels: &Labels) -> ComparisonTable {
    ComparisonTable {
        income_label: capitalize(&labels.income),
        expense_label: capitalize(&labels.expense),
        rows: agg
            .categories
            .iter()
            .map(|(category, s)| ComparisonRow {
                category: category.clone(),
                income: s.income,
                expense: s.expense,
            })
            .collect(),
    }
}

pub fn summary_text(totals: &Totals, labels: &Labels, ccy: &str) -> String {
    format!(
        "📊 Financial report:\n💰 {}: {}\n💸 {}: {}\n⚖ Net: {}",
        capitalize(&labels.income),
        fmt_money(totals.income, ccy),
        capitalize(&labels.expense),
        fmt_money(totals.expense, ccy),
        fmt_money(totals.net(), ccy),
    )
}

/// One message per type, in the order given.
pub fn forecast_texts(forecasts: &[TypeForecast], labels: &Labels, ccy: &str) -> Vec<String> {
    forecasts
        .iter()
        .map(|f| {
            let label = labels.label(f.kind);
            match &f.outcome {
                ForecastOutcome::Predicted { points, .. } => {
                    let mut s = format!("📈 Forecast for {}:", label);
                    for p in points {
                        s.push_str(&format!(
                            "\n{}: {}",
                            horizon_phrase(p.horizon_days),
                            fmt_money(p.amount, ccy)
                        ));
                    }
                    s
                }
                ForecastOutcome::InsufficientData => {
                    format!("⚠ Not enough data to forecast {}.", label)
                }
            }
        })
        .collect()
}

fn horizon_phrase(days: u32) -> String {
    match days {
        7 => "In a week".to_string(),
        30 => "In a month".to_string(),
        1 => "In 1 day".to_string(),
        d => format!("In {} days", d),
    }
}
