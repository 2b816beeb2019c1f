// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! Two entry points: the full distance for callers that want the number, and a
//! bounded check for the scorer, which only ever asks "close enough?".

mod levenshtein;

pub use levenshtein::*;
