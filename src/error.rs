// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected '<type> <amount> <category>'")]
    Format,
    #[error("unknown transaction type '{0}'")]
    UnknownType(String),
    #[error("invalid amount '{0}'")]
    AmountParse(String),
}

#[derive(Debug, Error)]
#[error("could not normalize message language: {0}")]
pub struct TranslationError(pub String);

#[derive(Debug, Error)]
#[error("could not render chart: {0}")]
pub struct ChartError(pub String);

#[derive(Debug, Error)]
pub enum BotError {
    #[error(transparent)]
    Translation(#[from] TranslationError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("ledger has no transactions")]
    EmptyLedger,
    #[error(transparent)]
    Chart(#[from] ChartError),
    #[error("export failed: {0}")]
    Export(String),
}
