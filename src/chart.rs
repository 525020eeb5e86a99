// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::ChartError;
use crate::report::ComparisonTable;
use crate::utils::pretty_table;

#[derive(Debug, Clone, PartialEq)]
pub enum Chart {
    Text(String),
    Image { file_name: String, bytes: Vec<u8> },
}

pub trait ChartRenderer: Send + Sync {
    fn render(&self, table: &ComparisonTable) -> Result<Chart, ChartError>;
}

/// Renders the comparison as a table followed by proportional bars.
#[derive(Debug, Clone)]
pub struct TextChart {
    pub bar_width: usize,
}

impl Default for TextChart {
    fn default() -> Self {
        Self { bar_width: 20 }
    }
}

impl TextChart {
    fn bar(&self, value: f64, max: f64, glyph: char) -> String {
        if max <= 0.0 || value <= 0.0 {
            return String::new();
        }
        let len = ((value / max) * self.bar_width as f64).round() as usize;
        std::iter::repeat_n(glyph, len.max(1)).collect()
    }
}

impl ChartRenderer for TextChart {
    fn render(&self, table: &ComparisonTable) -> Result<Chart, ChartError> {
        if table.rows.is_empty() {
            return Err(ChartError("no categories to plot".into()));
        }
        let rows = table
            .rows
            .iter()
            .map(|r| {
                vec![
                    r.category.clone(),
                    format!("{:.2}", r.income),
                    format!("{:.2}", r.expense),
                ]
            })
            .collect();
        let grid = pretty_table(
            &["Category", &table.income_label, &table.expense_label],
            rows,
        );

        let max = table.max_value();
        let mut out = format!("{}\n", grid);
        for r in &table.rows {
            out.push_str(&format!(
                "\n{}\n  + {}\n  - {}",
                r.category,
                self.bar(r.income, max, '█'),
                self.bar(r.expense, max, '▒'),
            ));
        }
        Ok(Chart::Text(out))
    }
}
