// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Telegram Bot API transport: long-polls `getUpdates` and sends replies.

use crate::bot::{Bot, Reply};
use crate::config::ServeConfig;
use crate::utils::http_client;
use anyhow::{Context, Result, bail};
use reqwest::blocking::multipart::{Form, Part};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Duration;

/// Telegram rejects longer messages; the limit counts UTF-16 code units.
pub const MAX_MESSAGE_UNITS: usize = 4096;

const MAX_BACKOFF: Duration = Duration::from_secs(60);

#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub chat: Chat,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

pub struct TelegramClient {
    client: reqwest::blocking::Client,
    base: String,
    poll_timeout_secs: u64,
}

impl TelegramClient {
    pub fn new(cfg: &ServeConfig) -> Result<Self> {
        // The HTTP timeout must outlive the server-side long poll.
        let client =
            http_client(Duration::from_secs(cfg.poll_timeout_secs.saturating_add(10)))?;
        Ok(Self {
            client,
            base: format!("{}/bot{}", cfg.api_url.trim_end_matches('/'), cfg.token),
            poll_timeout_secs: cfg.poll_timeout_secs,
        })
    }

    fn url(&self, method: &str) -> String {
        format!("{}/{}", self.base, method)
    }

    pub fn get_updates(&self, offset: i64) -> Result<Vec<Update>> {
        let resp = self
            .client
            .post(self.url("getUpdates"))
            .json(&json!({
                "offset": offset,
                "timeout": self.poll_timeout_secs,
                "allowed_updates": ["message"],
            }))
            .send()
            .context("getUpdates request")?;
        unwrap_response(resp.json()?, "getUpdates")
    }

    pub fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        keyboard: Option<&Vec<Vec<String>>>,
    ) -> Result<()> {
        let mut body = json!({ "chat_id": chat_id, "text": text });
        if let Some(rows) = keyboard {
            let rows: Vec<Vec<serde_json::Value>> = rows
                .iter()
                .map(|row| row.iter().map(|b| json!({ "text": b })).collect())
                .collect();
            body["reply_markup"] = json!({
                "keyboard": rows,
                "one_time_keyboard": true,
                "resize_keyboard": true,
            });
        }
        let resp = self
            .client
            .post(self.url("sendMessage"))
            .json(&body)
            .send()
            .context("sendMessage request")?;
        unwrap_response::<serde_json::Value>(resp.json()?, "sendMessage")?;
        Ok(())
    }

    pub fn send_document(
        &self,
        chat_id: i64,
        file_name: &str,
        bytes: Vec<u8>,
        caption: Option<&str>,
    ) -> Result<()> {
        self.send_file("sendDocument", "document", chat_id, file_name, bytes, caption)
    }

    /// Images go through `sendPhoto` so clients show them inline.
    pub fn send_photo(
        &self,
        chat_id: i64,
        file_name: &str,
        bytes: Vec<u8>,
        caption: Option<&str>,
    ) -> Result<()> {
        self.send_file("sendPhoto", "photo", chat_id, file_name, bytes, caption)
    }

    fn send_file(
        &self,
        method: &str,
        field: &str,
        chat_id: i64,
        file_name: &str,
        bytes: Vec<u8>,
        caption: Option<&str>,
    ) -> Result<()> {
        let mut form = Form::new().text("chat_id", chat_id.to_string()).part(
            field.to_string(),
            Part::bytes(bytes).file_name(file_name.to_string()),
        );
        if let Some(c) = caption {
            form = form.text("caption", c.to_string());
        }
        let resp = self
            .client
            .post(self.url(method))
            .multipart(form)
            .send()
            .with_context(|| format!("{} request", method))?;
        unwrap_response::<serde_json::Value>(resp.json()?, method)?;
        Ok(())
    }

    pub fn deliver(&self, chat_id: i64, reply: Reply) -> Result<()> {
        match reply {
            Reply::Text { text, keyboard } => {
                let chunks = split_message(&text, MAX_MESSAGE_UNITS);
                let last = chunks.len().saturating_sub(1);
                for (i, chunk) in chunks.iter().enumerate() {
                    let kb = if i == last { keyboard.as_ref() } else { None };
                    self.send_message(chat_id, chunk, kb)?;
                }
                Ok(())
            }
            Reply::Document {
                file_name,
                bytes,
                caption,
            } => self.send_document(chat_id, &file_name, bytes, caption.as_deref()),
            Reply::Photo {
                file_name,
                bytes,
                caption,
            } => self.send_photo(chat_id, &file_name, bytes, caption.as_deref()),
        }
    }
}

pub fn unwrap_response<T: DeserializeOwned>(resp: ApiResponse<T>, method: &str) -> Result<T> {
    if !resp.ok {
        bail!(
            "{} failed: {}",
            method,
            resp.description.unwrap_or_else(|| "unknown error".into())
        );
    }
    resp.result
        .with_context(|| format!("{} returned no result", method))
}

/// Length as Telegram measures it.
pub fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Splits on line boundaries where possible so no chunk exceeds `max`
/// UTF-16 code units.
pub fn split_message(text: &str, max: usize) -> Vec<String> {
    let mut out = Vec::new();
    let mut cur = String::new();
    let mut cur_len = 0;
    for line in text.split_inclusive('\n') {
        let line_len = utf16_len(line);
        if cur_len + line_len > max && !cur.is_empty() {
            out.push(std::mem::take(&mut cur));
            cur_len = 0;
        }
        if line_len > max {
            let mut piece = String::new();
            let mut piece_len = 0;
            for c in line.chars() {
                let n = c.len_utf16();
                if piece_len + n > max && !piece.is_empty() {
                    out.push(std::mem::take(&mut piece));
                    piece_len = 0;
                }
                piece.push(c);
                piece_len += n;
            }
            if !piece.is_empty() {
                out.push(piece);
            }
            continue;
        }
        cur.push_str(line);
        cur_len += line_len;
    }
    if !cur.is_empty() || out.is_empty() {
        out.push(cur);
    }
    out
}

/// Handles updates one at a time in arrival order. Transport failures are
/// logged and retried with backoff; they never stop the loop.
pub fn run(bot: &Bot, cfg: &ServeConfig) -> Result<()> {
    let tg = TelegramClient::new(cfg)?;
    let mut offset = 0;
    let mut backoff = Duration::from_secs(1);
    tracing::info!("bot started, polling for updates");

    loop {
        let updates = match tg.get_updates(offset) {
            Ok(u) => {
                backoff = Duration::from_secs(1);
                u
            }
            Err(e) => {
                tracing::error!(error = %e, retry_in = ?backoff, "polling failed");
                std::thread::sleep(backoff);
                backoff = (backoff * 2).min(MAX_BACKOFF);
                continue;
            }
        };

        for update in updates {
            offset = offset.max(update.update_id + 1);
            let Some(msg) = update.message else { continue };
            let Some(text) = msg.text.as_deref() else {
                continue;
            };
            tracing::debug!(chat_id = msg.chat.id, message_id = msg.message_id, "message received");
            for reply in bot.handle_message(text) {
                if let Err(e) = tg.deliver(msg.chat.id, reply) {
                    tracing::error!(chat_id = msg.chat.id, error = %e, "failed to send reply");
                }
            }
        }
    }
}
