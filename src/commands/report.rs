// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::aggregate;
use crate::bot::{Bot, Reply};
use crate::chart::Chart;
use crate::error::BotError;
use crate::report::{comparison_table, summary_text};

pub const CHART_CAPTION: &str = "Income and expense by category";

pub fn handle(bot: &Bot) -> Result<Vec<Reply>, BotError> {
    let snapshot = bot.ledger().snapshot();
    if snapshot.is_empty() {
        return Err(BotError::EmptyLedger);
    }
    let agg = aggregate(&snapshot);
    let mut replies = vec![Reply::text(summary_text(
        &agg.totals,
        bot.labels(),
        bot.currency(),
    ))];

    let table = comparison_table(&agg, bot.labels());
    match bot.charts().render(&table) {
        Ok(Chart::Text(text)) => replies.push(Reply::text(text)),
        Ok(Chart::Image { file_name, bytes }) => replies.push(Reply::Photo {
            file_name,
            bytes,
            caption: Some(CHART_CAPTION.into()),
        }),
        Err(e) => {
            tracing::warn!(error = %e, "chart rendering failed");
            replies.push(Reply::text(bot.error_message(&BotError::Chart(e))));
        }
    }
    Ok(replies)
}
