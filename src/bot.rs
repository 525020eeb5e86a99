// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Message dispatch. Every failure below this boundary becomes a reply;
//! nothing propagates to the transport.

use crate::chart::ChartRenderer;
use crate::commands;
use crate::error::{BotError, ParseError};
use crate::ledger::Ledger;
use crate::parser::Labels;
use crate::translate::Translator;
use crate::utils::{capitalize, parse_command};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Reply {
    Text {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        keyboard: Option<Vec<Vec<String>>>,
    },
    Document {
        file_name: String,
        #[serde(skip)]
        bytes: Vec<u8>,
        #[serde(skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
    Photo {
        file_name: String,
        #[serde(skip)]
        bytes: Vec<u8>,
        #[serde(skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
}

impl Reply {
    pub fn text(s: impl Into<String>) -> Self {
        Reply::Text {
            text: s.into(),
            keyboard: None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Reply::Text { text, .. } => Some(text),
            Reply::Document { .. } | Reply::Photo { .. } => None,
        }
    }
}

pub struct Bot {
    ledger: Arc<Ledger>,
    labels: Labels,
    currency: String,
    translator: Box<dyn Translator>,
    charts: Box<dyn ChartRenderer>,
}

impl Bot {
    pub fn new(
        ledger: Arc<Ledger>,
        labels: Labels,
        currency: impl Into<String>,
        translator: Box<dyn Translator>,
        charts: Box<dyn ChartRenderer>,
    ) -> Self {
        Self {
            ledger,
            labels,
            currency: currency.into(),
            translator,
            charts,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn charts(&self) -> &dyn ChartRenderer {
        self.charts.as_ref()
    }

    pub fn handle_message(&self, text: &str) -> Vec<Reply> {
        let result = match parse_command(text) {
            Some((name, _args)) => {
                tracing::info!(command = %name, "command received");
                match name.as_str() {
                    "start" => Ok(commands::start::handle(self)),
                    "report" => commands::report::handle(self),
                    "forecast" => commands::forecast::handle(self),
                    "export" => commands::export::handle(self),
                    _ => Ok(vec![Reply::text(self.help_text())]),
                }
            }
            None => self.handle_text(text),
        };
        match result {
            Ok(replies) => replies,
            Err(e) => {
                tracing::warn!(error = %e, "request rejected");
                vec![Reply::text(self.error_message(&e))]
            }
        }
    }

    // Keyboard buttons send their bare label, so those words act as commands.
    fn handle_text(&self, text: &str) -> Result<Vec<Reply>, BotError> {
        if let Some(replies) = self.keyword(text) {
            return replies;
        }
        let canonical = self.translator.canonicalize(text)?;
        if let Some(replies) = self.keyword(&canonical) {
            return replies;
        }
        commands::record::handle(self, &canonical)
    }

    fn keyword(&self, text: &str) -> Option<Result<Vec<Reply>, BotError>> {
        let word = text.trim().to_lowercase();
        if word == self.labels.report {
            Some(commands::report::handle(self))
        } else if word == self.labels.forecast {
            Some(commands::forecast::handle(self))
        } else {
            None
        }
    }

    pub fn usage_example(&self) -> String {
        format!(
            "{} 1000 Salary or {} 500 Food",
            capitalize(&self.labels.income),
            capitalize(&self.labels.expense)
        )
    }

    pub fn help_text(&self) -> String {
        format!(
            "Record an entry: {}\n/report - totals and category chart\n/forecast - trend for the next week and month\n/export - download entries as CSV",
            self.usage_example()
        )
    }

    pub fn error_message(&self, err: &BotError) -> String {
        match err {
            BotError::Translation(_) => "❌ Could not determine the message language.".into(),
            BotError::Parse(ParseError::Format) => {
                format!("Use the format: {}", self.usage_example())
            }
            BotError::Parse(ParseError::UnknownType(_)) => format!(
                "❌ Start the message with '{}' or '{}'.",
                capitalize(&self.labels.income),
                capitalize(&self.labels.expense)
            ),
            BotError::Parse(ParseError::AmountParse(_)) => {
                "❌ The amount must be a number.".into()
            }
            BotError::EmptyLedger => "❌ No data yet. Record an entry first.".into(),
            BotError::Chart(_) => "⚠ Could not render the chart.".into(),
            BotError::Export(_) => "❌ Could not export the entries.".into(),
        }
    }
}
