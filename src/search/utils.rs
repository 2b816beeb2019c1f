// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared helpers for the ranker.
//!
//! Query-term resolution and category handling, pulled out so the WASM
//! bindings and the CLI use the exact same rules as `search`.

use crate::synonyms::{expand, SynonymMap};
use crate::types::IndexRow;
use crate::util::tokenize;
use std::collections::BTreeSet;

/// Terms to score a query with.
///
/// The synonym-expanded set, or the plain tokenization of the query when the
/// expansion comes back empty. Either may be empty for a blank query, in which
/// case no row can earn overlap or file-name points.
pub fn resolve_terms(query: &str, synonyms: &SynonymMap) -> Vec<String> {
    let expanded = expand(query, synonyms);
    if expanded.is_empty() {
        tokenize(query)
    } else {
        expanded.into_iter().collect()
    }
}

/// Does `row` pass the category filter? An empty filter passes everything.
pub fn passes_filter<S: AsRef<str>>(row: &IndexRow, filter: &[S]) -> bool {
    filter.is_empty() || filter.iter().any(|c| c.as_ref() == row.category)
}

/// Distinct category values, sorted ascending.
///
/// Feeds filter controls. The empty category is included if some row has it.
pub fn categories(index: &[IndexRow]) -> Vec<String> {
    index
        .iter()
        .map(|row| row.category.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
