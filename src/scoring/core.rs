// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind icon relevance.
//!
//! Three independent signals, each multiplied by its configured weight:
//!
//! ```text
//! score = overlap        * weights.overlap
//!       + filename_hit   * weights.filename
//!       + category_boost * weights.category
//! ```
//!
//! | Signal           | Range            | Meaning                                        |
//! |------------------|------------------|------------------------------------------------|
//! | `overlap`        | `0..=terms.len()`| terms matching some row token                  |
//! | `filename_hit`   | `0` or `1`       | some term is a substring of the file name      |
//! | `category_boost` | any real         | summed weights of boost rules hitting category |
//!
//! Overlap is an absolute count, not a ratio. Passing the same term twice counts
//! it twice; callers that want set semantics pass a set.

use crate::config::{CategoryBoost, FuzzyConfig, SearchConfig};
use crate::fuzzy::within_distance;
use crate::types::{IndexRow, ScoreBreakdown};
use std::collections::HashSet;

/// Relevance of `row` for the given query terms.
///
/// # Example
///
/// ```
/// use iconsift::{score, IndexRow, SearchConfig};
///
/// let row = IndexRow {
///     file_name: "home-icon.svg".into(),
///     tokens: vec!["home".into(), "icon".into()],
///     ..IndexRow::default()
/// };
/// // overlap 1 * 2.0 + filename hit 1 * 1.0
/// assert_eq!(score(&["home"], &row, &SearchConfig::default()), 3.0);
/// ```
pub fn score<S: AsRef<str>>(terms: &[S], row: &IndexRow, config: &SearchConfig) -> f64 {
    score_breakdown(terms, row, config).total
}

/// Like [`score`], but keeps the individual signals.
pub fn score_breakdown<S: AsRef<str>>(
    terms: &[S],
    row: &IndexRow,
    config: &SearchConfig,
) -> ScoreBreakdown {
    let overlap = overlap_count(terms, &row.tokens, &config.fuzzy);
    let filename_hit = filename_hit(terms, &row.file_name);
    let category_boost = category_boost(&row.category, &config.category_boosts);

    let weights = &config.weights;
    let total = overlap as f64 * weights.overlap
        + if filename_hit { weights.filename } else { 0.0 }
        + category_boost * weights.category;

    ScoreBreakdown {
        overlap,
        filename_hit,
        category_boost,
        total,
    }
}

/// How many terms match at least one row token.
///
/// Exact set membership when fuzzy is off. When fuzzy is on, a term also
/// matches a token within `max_distance` edits.
pub fn overlap_count<S: AsRef<str>>(terms: &[S], tokens: &[String], fuzzy: &FuzzyConfig) -> usize {
    if tokens.is_empty() {
        return 0;
    }

    if fuzzy.enabled {
        terms
            .iter()
            .filter(|term| {
                let term = term.as_ref();
                tokens
                    .iter()
                    .any(|token| within_distance(term, token, fuzzy.max_distance))
            })
            .count()
    } else {
        let token_set: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        terms
            .iter()
            .filter(|term| token_set.contains(term.as_ref()))
            .count()
    }
}

/// Does any non-empty term occur in the lowercased file name?
pub fn filename_hit<S: AsRef<str>>(terms: &[S], file_name: &str) -> bool {
    let file = file_name.to_lowercase();
    terms.iter().any(|term| {
        let term = term.as_ref();
        !term.is_empty() && file.contains(term)
    })
}

/// Sum of the weights of every rule whose pattern occurs in the category.
///
/// Case-insensitive on both sides. Rules with an empty pattern never fire.
pub fn category_boost(category: &str, rules: &[CategoryBoost]) -> f64 {
    if rules.is_empty() {
        return 0.0;
    }

    let category = category.to_lowercase();
    rules
        .iter()
        .filter(|rule| {
            let pattern = rule.pattern.to_lowercase();
            !pattern.is_empty() && category.contains(&pattern)
        })
        .map(|rule| rule.weight)
        .sum()
}
