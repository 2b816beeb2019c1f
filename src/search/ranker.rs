// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The ranker: whole index in, top-K results out.

use super::utils::{passes_filter, resolve_terms};
use crate::config::SearchConfig;
use crate::scoring::ranking::{compare_results, round_score};
use crate::scoring::score;
use crate::types::{IndexRow, ScoredResult};

/// Search `index` for `query`.
///
/// 1. Resolve query terms (synonym expansion, tokenization fallback)
/// 2. Keep rows whose category is in `category_filter` (all rows if empty)
/// 3. Score, drop scores `<= 0`
/// 4. Sort by score descending, file name ascending
/// 5. Keep the first `top_k`, then round the reported scores to three decimals
///
/// Filtering and ordering use the unrounded score. A kept row may therefore
/// report `0.0`, and two rows reporting the same score are not necessarily
/// in file-name order.
///
/// The index is only borrowed. Results hold clones of the matching rows.
///
/// # Example
///
/// ```
/// use iconsift::{search, IndexRow, SearchConfig};
///
/// let index = vec![IndexRow {
///     id: "a".into(),
///     file_name: "home-icon.svg".into(),
///     category: "ui".into(),
///     tokens: vec!["home".into(), "icon".into()],
///     ..IndexRow::default()
/// }];
/// let results = search(&index, &SearchConfig::default(), "home", &[] as &[&str], 300);
/// assert_eq!(results[0].score, 3.0);
/// ```
pub fn search<S: AsRef<str>>(
    index: &[IndexRow],
    config: &SearchConfig,
    query: &str,
    category_filter: &[S],
    top_k: usize,
) -> Vec<ScoredResult> {
    if top_k == 0 {
        return Vec::new();
    }

    let terms = resolve_terms(query, &config.synonyms);

    let mut candidates = 0usize;
    let mut results: Vec<ScoredResult> = index
        .iter()
        .filter(|row| passes_filter(row, category_filter))
        .filter_map(|row| {
            candidates += 1;
            let s = score(&terms, row, config);
            // NaN fails this test too
            (s > 0.0).then(|| ScoredResult {
                row: row.clone(),
                score: s,
            })
        })
        .collect();

    let matched = results.len();
    results.sort_by(compare_results);
    results.truncate(top_k);
    for result in &mut results {
        result.score = round_score(result.score);
    }

    tracing::debug!(
        query,
        terms = terms.len(),
        candidates,
        matched,
        returned = results.len(),
        "search complete"
    );

    results
}
