// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::bot::{Bot, Reply};
use crate::error::BotError;
use crate::parser::parse_entry;
use crate::utils::fmt_money;
use chrono::Utc;

pub fn handle(bot: &Bot, canonical: &str) -> Result<Vec<Reply>, BotError> {
    let tx = parse_entry(canonical, bot.labels(), Utc::now())?;
    let msg = format!(
        "✅ Recorded: {} {} in category {}",
        bot.labels().label(tx.kind),
        fmt_money(tx.amount, bot.currency()),
        tx.category
    );
    tracing::info!(kind = %tx.kind, amount = tx.amount, category = %tx.category, "transaction recorded");
    bot.ledger().append(tx);
    Ok(vec![Reply::text(msg)])
}
