// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The row and result types that flow through search.
//!
//! | Rust Type      | JSON shape                                        |
//! |----------------|---------------------------------------------------|
//! | `IndexRow`     | `{ id, fileName, category, tokens, fullPath }`    |
//! | `ScoredResult` | row fields plus `score`                           |
//!
//! # Invariants
//!
//! - **IndexRow**: `tokens` are already normalized by whoever built the index.
//!   The core never re-tokenizes them. Only `file_name` and `category` are
//!   lowercased at scoring time.
//!
//! - **ScoredResult**: `row` is a clone of an index row. Producing results never
//!   mutates the index.

use serde::{Deserialize, Serialize};

/// One icon in the precomputed metadata index.
///
/// Every field defaults to empty when missing from the JSON, so a partially
/// filled row still loads and simply scores lower.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IndexRow {
    /// Stable identifier, unique within an index.
    pub id: String,
    /// File name as shipped, e.g. `home-icon.svg`.
    pub file_name: String,
    /// Category label, matched exactly by filters and by substring for boosts.
    pub category: String,
    /// Precomputed search tokens.
    pub tokens: Vec<String>,
    /// Location of the SVG asset.
    pub full_path: String,
}

/// An index row with its relevance score attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredResult {
    #[serde(flatten)]
    pub row: IndexRow,
    /// Relevance score, rounded to three decimals. The unrounded score is `> 0`.
    pub score: f64,
}

impl ScoredResult {
    pub fn id(&self) -> &str {
        &self.row.id
    }

    pub fn file_name(&self) -> &str {
        &self.row.file_name
    }
}

/// Per-signal score components for one row.
///
/// `total` is what [`score`](crate::score) returns. The other fields are the
/// unweighted signals, kept for `--explain` output and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    /// Query terms with at least one matching row token.
    pub overlap: usize,
    /// Whether any non-empty term is a substring of the lowercased file name.
    pub filename_hit: bool,
    /// Sum of matching category boost weights, before `weights.category`.
    pub category_boost: f64,
    /// Weighted sum of the three signals.
    pub total: f64,
}
