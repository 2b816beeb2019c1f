// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the per-row score.
//!
//! Arbitrary rows, terms and weights. The total must always equal the weighted
//! sum of its parts, and overlap can never exceed the number of terms.

#![no_main]

use arbitrary::Arbitrary;
use iconsift::{score, score_breakdown, CategoryBoost, IndexRow, SearchConfig};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct ScoreInput {
    terms: Vec<String>,
    file_name: String,
    category: String,
    tokens: Vec<String>,
    boosts: Vec<(String, i8)>,
    weights: (i8, i8, i8),
    fuzzy: Option<u8>,
}

fuzz_target!(|input: ScoreInput| {
    if input.terms.len() > 16 || input.tokens.len() > 32 || input.boosts.len() > 8 {
        return;
    }

    let row = IndexRow {
        file_name: input.file_name,
        category: input.category,
        tokens: input.tokens,
        ..IndexRow::default()
    };

    let mut config = SearchConfig {
        category_boosts: input
            .boosts
            .into_iter()
            .map(|(pattern, weight)| CategoryBoost::new(pattern, f64::from(weight)))
            .collect(),
        ..SearchConfig::default()
    };
    config.weights.overlap = f64::from(input.weights.0);
    config.weights.filename = f64::from(input.weights.1);
    config.weights.category = f64::from(input.weights.2);
    if let Some(max) = input.fuzzy {
        config = config.with_fuzzy(usize::from(max % 4));
    }

    let parts = score_breakdown(&input.terms, &row, &config);

    // INVARIANT 1: overlap is bounded by the number of terms
    assert!(parts.overlap <= input.terms.len());

    // INVARIANT 2: total is the weighted sum
    let w = &config.weights;
    let expected = parts.overlap as f64 * w.overlap
        + if parts.filename_hit { w.filename } else { 0.0 }
        + parts.category_boost * w.category;
    assert!((parts.total - expected).abs() < 1e-6, "{} != {}", parts.total, expected);

    // INVARIANT 3: score() is the breakdown total
    assert_eq!(score(&input.terms, &row, &config), parts.total);
});
