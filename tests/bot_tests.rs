// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use moneychat::bot::{Bot, Reply};
use moneychat::chart::{Chart, ChartRenderer, TextChart};
use moneychat::commands::report::CHART_CAPTION;
use moneychat::error::{ChartError, TranslationError};
use moneychat::ledger::Ledger;
use moneychat::models::TransactionType;
use moneychat::parser::Labels;
use moneychat::report::ComparisonTable;
use moneychat::translate::{PassThrough, Translator};
use std::collections::HashMap;
use std::sync::Arc;

struct Dictionary(HashMap<&'static str, &'static str>);

impl Translator for Dictionary {
    fn canonicalize(&self, text: &str) -> Result<String, TranslationError> {
        if text.contains("??") {
            return Err(TranslationError("undetectable".into()));
        }
        Ok(self.0.get(text).map(|s| s.to_string()).unwrap_or_else(|| text.to_string()))
    }
}

struct FixedChart;

impl ChartRenderer for FixedChart {
    fn render(&self, table: &ComparisonTable) -> Result<Chart, ChartError> {
        Ok(Chart::Text(format!("CHART {} rows", table.rows.len())))
    }
}

const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

struct ImageChart;

impl ChartRenderer for ImageChart {
    fn render(&self, _table: &ComparisonTable) -> Result<Chart, ChartError> {
        Ok(Chart::Image {
            file_name: "chart.png".into(),
            bytes: PNG_MAGIC.to_vec(),
        })
    }
}

struct BrokenChart;

impl ChartRenderer for BrokenChart {
    fn render(&self, _table: &ComparisonTable) -> Result<Chart, ChartError> {
        Err(ChartError("no backend".into()))
    }
}

fn bot_with(translator: Box<dyn Translator>, charts: Box<dyn ChartRenderer>) -> Bot {
    Bot::new(
        Arc::new(Ledger::new()),
        Labels::english(),
        "sum",
        translator,
        charts,
    )
}

fn setup() -> Bot {
    bot_with(Box::new(PassThrough), Box::new(FixedChart))
}

fn texts(replies: &[Reply]) -> Vec<&str> {
    replies.iter().filter_map(|r| r.as_text()).collect()
}

#[test]
fn record_confirms_and_appends() {
    let bot = setup();
    let replies = bot.handle_message("Income 1000 Salary");
    assert_eq!(texts(&replies), ["✅ Recorded: income 1000.00 sum in category Salary"]);
    let snap = bot.ledger().snapshot();
    assert_eq!(snap.len(), 1);
    assert_eq!(snap[0].kind, TransactionType::Income);
}

#[test]
fn parse_failures_become_replies_without_side_effects() {
    let bot = setup();
    let cases = [
        ("Income 1000", "Use the format: Income 1000 Salary or Expense 500 Food"),
        ("Salary 1000 Work", "❌ Start the message with 'Income' or 'Expense'."),
        ("Income abc Salary", "❌ The amount must be a number."),
    ];
    for (input, expected) in cases {
        assert_eq!(texts(&bot.handle_message(input)), [expected], "{input}");
    }
    assert!(bot.ledger().is_empty());
}

#[test]
fn translation_runs_before_parsing() {
    let dict = Dictionary(HashMap::from([("Gasto 30 Comida", "expense 30 Comida")]));
    let bot = bot_with(Box::new(dict), Box::new(FixedChart));
    bot.handle_message("Gasto 30 Comida");
    let snap = bot.ledger().snapshot();
    assert_eq!(snap[0].kind, TransactionType::Expense);
    assert_eq!(snap[0].category, "Comida");

    let replies = bot.handle_message("?? 1 x");
    assert_eq!(texts(&replies), ["❌ Could not determine the message language."]);
    assert_eq!(bot.ledger().len(), 1);
}

#[test]
fn report_and_forecast_on_empty_ledger() {
    let bot = setup();
    for cmd in ["/report", "/forecast", "/export", "report"] {
        assert_eq!(
            texts(&bot.handle_message(cmd)),
            ["❌ No data yet. Record an entry first."],
            "{cmd}"
        );
    }
}

#[test]
fn report_sends_summary_then_chart() {
    let bot = setup();
    bot.handle_message("Income 100 A");
    bot.handle_message("Income 50 A");
    bot.handle_message("Expense 30 B");

    let replies = bot.handle_message("/report@moneychat_bot");
    let t = texts(&replies);
    assert_eq!(t.len(), 2);
    assert!(t[0].contains("Income: 150.00 sum"));
    assert!(t[0].contains("Expense: 30.00 sum"));
    assert_eq!(t[1], "CHART 2 rows");

    // Keyboard buttons send the bare word.
    assert_eq!(bot.handle_message("Report"), replies);
}

#[test]
fn image_chart_is_sent_as_photo_after_summary() {
    let bot = bot_with(Box::new(PassThrough), Box::new(ImageChart));
    bot.handle_message("Income 100 A");
    bot.handle_message("Expense 30 B");

    let replies = bot.handle_message("/report");
    assert_eq!(replies.len(), 2);
    assert!(replies[0].as_text().unwrap().starts_with("📊 Financial report:"));
    assert_eq!(
        replies[1],
        Reply::Photo {
            file_name: "chart.png".into(),
            bytes: PNG_MAGIC.to_vec(),
            caption: Some(CHART_CAPTION.into()),
        }
    );
}

#[test]
fn chart_failure_still_sends_summary() {
    let bot = bot_with(Box::new(PassThrough), Box::new(BrokenChart));
    bot.handle_message("Expense 30 B");
    let replies = bot.handle_message("/report");
    let t = texts(&replies);
    assert!(t[0].starts_with("📊 Financial report:"));
    assert_eq!(t[1], "⚠ Could not render the chart.");
}

#[test]
fn text_chart_lists_each_category() {
    let bot = bot_with(Box::new(PassThrough), Box::new(TextChart::default()));
    bot.handle_message("Income 200 Salary");
    bot.handle_message("Expense 50 Food");
    let replies = bot.handle_message("/report");
    let chart = texts(&replies)[1];
    assert!(chart.contains("Salary"));
    assert!(chart.contains("Food"));
    assert!(chart.contains("200.00"));
    assert!(chart.contains(&"█".repeat(20)));
}

#[test]
fn same_day_entries_forecast_as_insufficient() {
    let bot = setup();
    bot.handle_message("Income 100 A");
    bot.handle_message("Income 200 A");
    let replies = bot.handle_message("/forecast");
    assert_eq!(
        texts(&replies),
        [
            "⚠ Not enough data to forecast income.",
            "⚠ Not enough data to forecast expense."
        ]
    );
}

#[test]
fn start_offers_keyboard_and_unknown_commands_get_help() {
    let bot = bot_with(Box::new(PassThrough), Box::new(FixedChart));
    let replies = bot.handle_message("/start");
    match &replies[0] {
        Reply::Text { keyboard, .. } => assert_eq!(
            keyboard.as_ref().unwrap()[0],
            ["Income", "Expense", "Report", "Forecast"]
        ),
        other => panic!("unexpected reply {:?}", other),
    }
    let help = bot.handle_message("/whatever");
    assert!(texts(&help)[0].contains("/forecast"));
}

#[test]
fn russian_bot_uses_russian_words() {
    let bot = Bot::new(
        Arc::new(Ledger::new()),
        Labels::russian(),
        "сум",
        Box::new(PassThrough),
        Box::new(FixedChart),
    );
    let replies = bot.handle_message("Доход 1000 Зарплата");
    assert_eq!(texts(&replies), ["✅ Recorded: доход 1000.00 сум in category Зарплата"]);
    assert_eq!(texts(&bot.handle_message("Отчет")).len(), 2);
}
