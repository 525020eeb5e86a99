// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::bot::{Bot, Reply};
use crate::error::BotError;
use crate::forecast::{DEFAULT_HORIZONS, forecast};
use crate::report::forecast_texts;

pub fn handle(bot: &Bot) -> Result<Vec<Reply>, BotError> {
    let snapshot = bot.ledger().snapshot();
    if snapshot.is_empty() {
        return Err(BotError::EmptyLedger);
    }
    let results = forecast(&snapshot, &DEFAULT_HORIZONS);
    Ok(forecast_texts(&results, bot.labels(), bot.currency())
        .into_iter()
        .map(Reply::text)
        .collect())
}
