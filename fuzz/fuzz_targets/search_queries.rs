// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary strings at `search` over a fixed icon set. It must never
//! panic, and what it returns must always be ranked and capped.

#![no_main]

use arbitrary::Arbitrary;
use iconsift::testing::{make_synonyms, sample_index};
use iconsift::{search, IndexRow, SearchConfig};
use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;

#[derive(Debug, Arbitrary)]
struct QueryInput {
    query: String,
    category: Option<String>,
    top_k: u8,
    fuzzy: Option<u8>,
}

fuzz_target!(|input: QueryInput| {
    static INDEX: OnceLock<Vec<IndexRow>> = OnceLock::new();
    let index = INDEX.get_or_init(sample_index);

    let query: String = input.query.chars().take(200).collect();
    let top_k = usize::from(input.top_k);

    let mut config = SearchConfig {
        synonyms: make_synonyms(&[("home", &["house"]), ("cart", &["basket", "shopping cart"])]),
        ..SearchConfig::default()
    };
    if let Some(max) = input.fuzzy {
        config = config.with_fuzzy(usize::from(max % 4));
    }

    let filter: Vec<String> = input.category.into_iter().collect();

    // INVARIANT 1: search() should never panic
    let results = search(index, &config, &query, filter.as_slice(), top_k);

    // INVARIANT 2: bounded by top_k
    assert!(results.len() <= top_k, "{} results for top_k {}", results.len(), top_k);

    for pair in results.windows(2) {
        // INVARIANT 3: score descending, file name ascending on ties
        assert!(
            pair[0].score > pair[1].score
                || (pair[0].score == pair[1].score && pair[0].row.file_name <= pair[1].row.file_name),
            "misordered results for query {:?}",
            query
        );
    }

    for result in &results {
        // INVARIANT 4: only positive scores come back
        assert!(result.score > 0.0);
        // INVARIANT 5: the filter holds
        assert!(filter.is_empty() || filter.contains(&result.row.category));
    }
});
