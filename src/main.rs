// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::sync::Arc;

use moneychat::bot::Bot;
use moneychat::chart::TextChart;
use moneychat::config::{Config, ReplConfig, ServeConfig};
use moneychat::ledger::Ledger;
use moneychat::translate::{HttpTranslator, PassThrough, Translator};
use moneychat::{cli, logging, repl, telegram};

fn main() -> Result<()> {
    let matches = cli::build_cli().get_matches();
    let config = Config::from_matches(&matches)?;
    logging::init(config.log_level.as_deref())?;

    let translator: Box<dyn Translator> = match &config.translate_url {
        Some(url) => Box::new(HttpTranslator::new(url, config.labels.clone())?),
        None => Box::new(PassThrough),
    };
    let bot = Bot::new(
        Arc::new(Ledger::new()),
        config.labels.clone(),
        config.currency.clone(),
        translator,
        Box::new(TextChart::default()),
    );

    match matches.subcommand() {
        Some(("serve", sub)) => {
            let serve = ServeConfig::from_matches(sub)?;
            telegram::run(&bot, &serve)?;
        }
        Some(("repl", sub)) => {
            let cfg = ReplConfig::from_matches(sub);
            let stdin = std::io::stdin();
            repl::run(&bot, &cfg, stdin.lock(), std::io::stdout())?;
        }
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
