// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how icons get their numbers and their order.
//!
//! `core` turns (terms, row, config) into a number. `ranking` decides how two
//! scored rows compare. Neither looks at more than one row at a time.

mod core;
pub mod ranking;

pub use core::*;
