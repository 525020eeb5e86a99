// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::bot::{Bot, Reply};
use crate::utils::capitalize;

pub fn handle(bot: &Bot) -> Vec<Reply> {
    let l = bot.labels();
    let keyboard = vec![vec![
        capitalize(&l.income),
        capitalize(&l.expense),
        capitalize(&l.report),
        capitalize(&l.forecast),
    ]];
    vec![Reply::Text {
        text: format!(
            "Hi! I'm your finance bot. Record income and expenses and I'll do the analytics.\n{}",
            bot.help_text()
        ),
        keyboard: Some(keyboard),
    }]
}
