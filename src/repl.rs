// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::bot::{Bot, Reply};
use crate::config::ReplConfig;
use anyhow::{Context, Result};
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

pub fn save_document(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("Create {}", dir.display()))?;
    // Only the final path component is trusted.
    let name = Path::new(file_name)
        .file_name()
        .context("Document has no file name")?;
    let path = dir.join(name);
    fs::write(&path, bytes).with_context(|| format!("Write {}", path.display()))?;
    Ok(path)
}

/// Feeds each input line to the bot and prints the replies.
pub fn run<R: BufRead, W: Write>(bot: &Bot, cfg: &ReplConfig, input: R, mut out: W) -> Result<()> {
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        for reply in bot.handle_message(&line) {
            if let Reply::Document {
                file_name, bytes, ..
            }
            | Reply::Photo {
                file_name, bytes, ..
            } = &reply
            {
                match save_document(&cfg.out_dir, file_name, bytes) {
                    Ok(path) => tracing::info!(path = %path.display(), "document written"),
                    Err(e) => {
                        tracing::error!(error = %e, "failed to write document");
                        writeln!(out, "❌ Could not save {}: {:#}", file_name, e)?;
                        continue;
                    }
                }
            }
            if cfg.json {
                writeln!(out, "{}", serde_json::to_string(&reply)?)?;
                continue;
            }
            match reply {
                Reply::Text { text, .. } => writeln!(out, "{}", text)?,
                Reply::Document {
                    file_name, caption, ..
                } => writeln!(out, "[document {}{}]", file_name, caption_suffix(caption))?,
                Reply::Photo {
                    file_name, caption, ..
                } => writeln!(out, "[photo {}{}]", file_name, caption_suffix(caption))?,
            }
        }
        out.flush()?;
    }
    Ok(())
}

fn caption_suffix(caption: Option<String>) -> String {
    caption.map(|c| format!(": {}", c)).unwrap_or_default()
}
