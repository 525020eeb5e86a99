// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::logging;
use crate::parser::Labels;
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub labels: Labels,
    pub currency: String,
    pub translate_url: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    pub fn from_matches(m: &clap::ArgMatches) -> Result<Self> {
        let lang = m
            .get_one::<String>("lang")
            .map(String::as_str)
            .unwrap_or("en");
        let log_level = m.get_one::<String>("log-level").cloned();
        if let Some(level) = &log_level {
            logging::parse_filter(level)?;
        }
        Ok(Self {
            labels: Labels::for_lang(lang)?,
            currency: m
                .get_one::<String>("currency")
                .cloned()
                .unwrap_or_default(),
            translate_url: m
                .get_one::<String>("translate-url")
                .filter(|s| !s.trim().is_empty())
                .cloned(),
            log_level,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ServeConfig {
    pub token: String,
    pub api_url: String,
    pub poll_timeout_secs: u64,
}

impl ServeConfig {
    pub fn from_matches(m: &clap::ArgMatches) -> Result<Self> {
        let token = m
            .get_one::<String>("token")
            .filter(|s| !s.trim().is_empty())
            .cloned()
            .context("TELEGRAM_BOT_TOKEN is not set; pass --token or export it")?;
        Ok(Self {
            token,
            api_url: m
                .get_one::<String>("api-url")
                .cloned()
                .unwrap_or_else(|| "https://api.telegram.org".into()),
            poll_timeout_secs: *m.get_one::<u64>("poll-timeout").unwrap_or(&30),
        })
    }
}

#[derive(Debug, Clone)]
pub struct ReplConfig {
    pub json: bool,
    pub out_dir: PathBuf,
}

impl ReplConfig {
    pub fn from_matches(m: &clap::ArgMatches) -> Self {
        Self {
            json: m.get_flag("json"),
            out_dir: m
                .get_one::<String>("out-dir")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
        }
    }
}
