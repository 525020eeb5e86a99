// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{CategorySummary, Totals, Transaction, TransactionType};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Aggregation {
    pub categories: BTreeMap<String, CategorySummary>,
    pub totals: Totals,
}

/// Sums amounts per category and per type. An empty slice yields an empty
/// map and zero totals.
pub fn aggregate(snapshot: &[Transaction]) -> Aggregation {
    let mut out = Aggregation::default();
    for tx in snapshot {
        let entry = out.categories.entry(tx.category.clone()).or_default();
        match tx.kind {
            TransactionType::Income => {
                entry.income += tx.amount;
                out.totals.income += tx.amount;
            }
            TransactionType::Expense => {
                entry.expense += tx.amount;
                out.totals.expense += tx.amount;
            }
        }
    }
    out
}
