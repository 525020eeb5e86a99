// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod start;
pub mod record;
pub mod report;
pub mod forecast;
pub mod export;
