// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use once_cell::sync::Lazy;
use regex::Regex;
use std::time::Duration;

const UA: &str = concat!(
    "moneychat/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/alphavelocity/moneychat)"
);

static COMMAND: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^/([A-Za-z0-9_]+)(?:@[A-Za-z0-9_]+)?(?:\s+(.*))?$")
        .expect("valid command regex")
});

pub fn http_client(timeout: Duration) -> Result<reqwest::blocking::Client> {
    let c = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .user_agent(UA)
        .build()?;
    Ok(c)
}

/// Splits `/name@bot args` into the lowercased command name and its trimmed
/// argument text. Returns `None` for plain messages.
pub fn parse_command(text: &str) -> Option<(String, String)> {
    let caps = COMMAND.captures(text.trim())?;
    let name = caps.get(1)?.as_str().to_lowercase();
    let args = caps
        .get(2)
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();
    Some((name, args))
}

pub fn fmt_money(amount: f64, ccy: &str) -> String {
    if ccy.is_empty() {
        format!("{:.2}", amount)
    } else {
        format!("{:.2} {}", amount, ccy)
    }
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

/// First letter uppercased, for labels shown on buttons and in replies.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
