// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! In-memory, append-only transaction history shared by every handler.

use crate::models::Transaction;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
pub struct Ledger {
    entries: Mutex<Vec<Transaction>>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends in arrival order. A timestamp older than the last stored one
    /// is raised to it so the history stays monotone.
    pub fn append(&self, mut tx: Transaction) {
        let mut entries = self.lock();
        if let Some(last) = entries.last() {
            if tx.timestamp < last.timestamp {
                tracing::debug!(
                    given = %tx.timestamp,
                    last = %last.timestamp,
                    "clamping out-of-order timestamp"
                );
                tx.timestamp = last.timestamp;
            }
        }
        entries.push(tx);
    }

    /// Point-in-time copy; the lock is released before the caller sees it.
    pub fn snapshot(&self) -> Vec<Transaction> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // Entries are only ever pushed whole, so a poisoned guard still holds a
    // consistent Vec.
    fn lock(&self) -> MutexGuard<'_, Vec<Transaction>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}
