// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

pub fn build_cli() -> Command {
    Command::new("moneychat")
        .version(clap::crate_version!())
        .about("Chat-driven income/expense ledger with reports and forecasts")
        .arg(
            Arg::new("lang")
                .long("lang")
                .env("MONEYCHAT_LANG")
                .default_value("en")
                .global(true)
                .help("Canonical language of entries (en|ru)"),
        )
        .arg(
            Arg::new("currency")
                .long("currency")
                .env("MONEYCHAT_CURRENCY")
                .default_value("sum")
                .global(true)
                .help("Currency label shown next to amounts"),
        )
        .arg(
            Arg::new("translate-url")
                .long("translate-url")
                .env("MONEYCHAT_TRANSLATE_URL")
                .global(true)
                .help("LibreTranslate-compatible endpoint; without it messages are used as typed"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .global(true)
                .help("Log filter, overrides RUST_LOG (e.g. debug, moneychat=trace)"),
        )
        .subcommand(
            Command::new("serve")
                .about("Run the Telegram bot (long polling)")
                .arg(
                    Arg::new("token")
                        .long("token")
                        .env("TELEGRAM_BOT_TOKEN")
                        .hide_env_values(true)
                        .help("Bot access token"),
                )
                .arg(
                    Arg::new("api-url")
                        .long("api-url")
                        .env("MONEYCHAT_API_URL")
                        .default_value("https://api.telegram.org"),
                )
                .arg(
                    Arg::new("poll-timeout")
                        .long("poll-timeout")
                        .value_parser(value_parser!(u64).range(1..=50))
                        .default_value("30")
                        .help("Long-poll timeout in seconds (1-50)"),
                ),
        )
        .subcommand(
            Command::new("repl")
                .about("Chat with the bot on stdin/stdout")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print replies as JSON lines"),
                )
                .arg(
                    Arg::new("out-dir")
                        .long("out-dir")
                        .default_value(".")
                        .help("Where exported documents are written"),
                ),
        )
}
