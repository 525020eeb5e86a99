// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::ParseError;
use crate::models::{Transaction, TransactionType};
use anyhow::bail;
use chrono::{DateTime, Utc};

/// Canonical words the parser accepts as the leading type token, plus the
/// language code a translator should normalize into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub lang: String,
    pub income: String,
    pub expense: String,
    pub report: String,
    pub forecast: String,
}

impl Labels {
    pub fn english() -> Self {
        Self {
            lang: "en".into(),
            income: "income".into(),
            expense: "expense".into(),
            report: "report".into(),
            forecast: "forecast".into(),
        }
    }

    pub fn russian() -> Self {
        Self {
            lang: "ru".into(),
            income: "доход".into(),
            expense: "расход".into(),
            report: "отчет".into(),
            forecast: "прогноз".into(),
        }
    }

    pub fn for_lang(code: &str) -> anyhow::Result<Self> {
        match code.to_lowercase().as_str() {
            "en" => Ok(Self::english()),
            "ru" => Ok(Self::russian()),
            other => bail!("Unsupported language '{}' (use en|ru)", other),
        }
    }

    pub fn label(&self, kind: TransactionType) -> &str {
        match kind {
            TransactionType::Income => &self.income,
            TransactionType::Expense => &self.expense,
        }
    }

    pub fn kind_for(&self, word: &str) -> Option<TransactionType> {
        let w = word.to_lowercase();
        if w == self.income {
            Some(TransactionType::Income)
        } else if w == self.expense {
            Some(TransactionType::Expense)
        } else {
            None
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::english()
    }
}

/// Parses `<type> <amount> <category words...>` into a transaction stamped `at`.
pub fn parse_entry(
    text: &str,
    labels: &Labels,
    at: DateTime<Utc>,
) -> Result<Transaction, ParseError> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() < 3 {
        return Err(ParseError::Format);
    }

    let kind = labels
        .kind_for(words[0])
        .ok_or_else(|| ParseError::UnknownType(words[0].to_string()))?;

    let amount = parse_amount(words[1])?;

    let category = words[2..].join(" ").trim().to_string();
    if category.is_empty() {
        return Err(ParseError::Format);
    }

    Ok(Transaction {
        timestamp: at,
        kind,
        amount,
        category,
    })
}

// Zero and negative values pass through unchanged.
fn parse_amount(token: &str) -> Result<f64, ParseError> {
    match token.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ParseError::AmountParse(token.to_string())),
    }
}
