// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod aggregate;
pub mod bot;
pub mod chart;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod forecast;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod parser;
pub mod repl;
pub mod report;
pub mod telegram;
pub mod translate;
pub mod utils;
