// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Normalization of incoming text into the canonical language the parser
//! understands.

use crate::error::TranslationError;
use crate::parser::Labels;
use crate::utils::http_client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub trait Translator: Send + Sync {
    fn canonicalize(&self, text: &str) -> Result<String, TranslationError>;
}

/// Assumes every message already arrives in the canonical language.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

impl Translator for PassThrough {
    fn canonicalize(&self, text: &str) -> Result<String, TranslationError> {
        Ok(text.to_string())
    }
}

/// Client for a LibreTranslate-compatible `/translate` endpoint.
pub struct HttpTranslator {
    client: reqwest::blocking::Client,
    endpoint: String,
    labels: Labels,
}

#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
}

#[derive(Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

impl HttpTranslator {
    pub fn new(base_url: &str, labels: Labels) -> anyhow::Result<Self> {
        Ok(Self {
            client: http_client(Duration::from_secs(15))?,
            endpoint: format!("{}/translate", base_url.trim_end_matches('/')),
            labels,
        })
    }

    fn already_canonical(&self, text: &str) -> bool {
        let Some(first) = text.split_whitespace().next() else {
            return true;
        };
        let first = first.to_lowercase();
        self.labels.kind_for(&first).is_some()
            || first == self.labels.report
            || first == self.labels.forecast
    }
}

impl Translator for HttpTranslator {
    fn canonicalize(&self, text: &str) -> Result<String, TranslationError> {
        if self.already_canonical(text) {
            return Ok(text.to_string());
        }
        tracing::debug!(target_lang = %self.labels.lang, "translating message");
        let req = TranslateRequest {
            q: text,
            source: "auto",
            target: &self.labels.lang,
            format: "text",
        };
        let resp = self
            .client
            .post(&self.endpoint)
            .json(&req)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| TranslationError(e.to_string()))?;
        let body: TranslateResponse = resp.json().map_err(|e| TranslationError(e.to_string()))?;
        Ok(body.translated_text)
    }
}
