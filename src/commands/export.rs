// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::bot::{Bot, Reply};
use crate::error::BotError;
use crate::models::Transaction;
use chrono::Utc;

pub fn handle(bot: &Bot) -> Result<Vec<Reply>, BotError> {
    let snapshot = bot.ledger().snapshot();
    if snapshot.is_empty() {
        return Err(BotError::EmptyLedger);
    }
    let bytes = to_csv(&snapshot).map_err(|e| BotError::Export(e.to_string()))?;
    Ok(vec![Reply::Document {
        file_name: format!("transactions-{}.csv", Utc::now().format("%Y%m%d")),
        bytes,
        caption: Some(format!("{} entries", snapshot.len())),
    }])
}

pub fn to_csv(transactions: &[Transaction]) -> anyhow::Result<Vec<u8>> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(["timestamp", "type", "amount", "category"])?;
    for t in transactions {
        wtr.write_record([
            t.timestamp.to_rfc3339(),
            t.kind.to_string(),
            t.amount.to_string(),
            t.category.clone(),
        ])?;
    }
    wtr.flush()?;
    wtr.into_inner()
        .map_err(|e| anyhow::anyhow!("finish csv: {}", e.error()))
}
