//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::synonyms::SynonymMap;
use crate::types::IndexRow;

/// Create an index row with the given tokens.
///
/// This is the canonical implementation used across all tests. `full_path`
/// is derived from category and file name.
pub fn make_row(id: &str, file_name: &str, category: &str, tokens: &[&str]) -> IndexRow {
    IndexRow {
        id: id.to_string(),
        file_name: file_name.to_string(),
        category: category.to_string(),
        tokens: tokens.iter().map(|t| t.to_string()).collect(),
        full_path: format!("/icons/{}/{}", category, file_name),
    }
}

/// Create an index row whose tokens are derived from its file name.
pub fn make_row_from_name(id: &str, file_name: &str, category: &str) -> IndexRow {
    IndexRow {
        id: id.to_string(),
        file_name: file_name.to_string(),
        category: category.to_string(),
        tokens: crate::util::tokenize(file_name.trim_end_matches(".svg")),
        full_path: format!("/icons/{}/{}", category, file_name),
    }
}

/// Build a synonym map from literal pairs.
pub fn make_synonyms(entries: &[(&str, &[&str])]) -> SynonymMap {
    entries
        .iter()
        .map(|(key, values)| {
            (
                key.to_string(),
                values.iter().map(|v| v.to_string()).collect(),
            )
        })
        .collect()
}

/// A small icon set covering several categories, used by integration tests
/// and benchmarks.
pub fn sample_index() -> Vec<IndexRow> {
    vec![
        make_row_from_name("1", "home-icon.svg", "ui"),
        make_row_from_name("2", "house.svg", "ui"),
        make_row_from_name("3", "arrow-left.svg", "arrows"),
        make_row_from_name("4", "arrow-right.svg", "arrows"),
        make_row_from_name("5", "arrow-up-circle.svg", "arrows"),
        make_row_from_name("6", "box.svg", "shipping"),
        make_row_from_name("7", "package-open.svg", "shipping"),
        make_row_from_name("8", "shopping-cart.svg", "commerce"),
        make_row_from_name("9", "basket.svg", "commerce"),
        make_row_from_name("10", "trash-can.svg", "actions"),
        make_row_from_name("11", "bell-ring.svg", "alerts"),
        make_row_from_name("12", "star-outline.svg", "shapes"),
        make_row_from_name("13", "star-solid.svg", "shapes"),
        make_row_from_name("14", "circle.svg", "shapes"),
        make_row_from_name("15", "user-circle.svg", "people"),
    ]
}
