// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored icons get sorted.
//!
//! Score first, then file name. There are no match-type buckets here; icon
//! metadata is flat, so the numeric score is the whole story.

use crate::types::ScoredResult;
use std::cmp::Ordering;

/// Decimal places kept on reported scores.
pub const SCORE_PRECISION: i32 = 3;

/// Round a raw score to [`SCORE_PRECISION`] decimals for reporting.
///
/// Scores too large to scale are returned unchanged.
pub fn round_score(score: f64) -> f64 {
    let factor = 10f64.powi(SCORE_PRECISION);
    let scaled = score * factor;
    if !scaled.is_finite() {
        return score;
    }
    scaled.round() / factor
}

/// Compare two results for ranking.
///
/// Sort order:
/// 1. **Score** - descending (higher wins)
/// 2. **File name** - ascending, byte-wise lexical order
///
/// Fully equal results compare `Equal`; a stable sort then keeps index order.
pub fn compare_results(a: &ScoredResult, b: &ScoredResult) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.row.file_name.cmp(&b.row.file_name))
}
