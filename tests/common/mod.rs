//! Shared test utilities and fixtures.

#![allow(dead_code)]

use iconsift::{CategoryBoost, IndexRow, ScoredResult, SearchConfig};

// Re-export canonical test utilities from iconsift::testing
pub use iconsift::testing::{make_row, make_row_from_name, make_synonyms, sample_index};

/// Filter that lets every category through.
pub const NO_FILTER: &[&str] = &[];

/// Default result cap used by front ends.
pub const TOP_K: usize = 300;

// ============================================================================
// CONFIG FIXTURES
// ============================================================================

/// Synonyms a real icon site would ship.
pub fn sample_config() -> SearchConfig {
    SearchConfig {
        synonyms: make_synonyms(&[
            ("home", &["house"]),
            ("cart", &["basket", "shopping cart"]),
            ("basket", &["bag"]),
            ("trash can", &["bin", "delete"]),
        ]),
        ..SearchConfig::default()
    }
}

/// Default config plus a single category boost.
pub fn boosted_config(pattern: &str, weight: f64) -> SearchConfig {
    SearchConfig {
        category_boosts: vec![CategoryBoost::new(pattern, weight)],
        ..SearchConfig::default()
    }
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// File names of the results, in rank order.
pub fn file_names(results: &[ScoredResult]) -> Vec<&str> {
    results.iter().map(|r| r.file_name()).collect()
}

/// Assert the ranking contract holds for a result list with exact scores.
///
/// Reported scores are rounded, so callers with fractional weights should
/// check order on `score()` instead.
pub fn assert_ranked(results: &[ScoredResult]) {
    for r in results {
        assert!(r.score > 0.0, "{} has non-positive score {}", r.file_name(), r.score);
    }
    for pair in results.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.score > b.score || (a.score == b.score && a.file_name() <= b.file_name()),
            "out of order: {} ({}) before {} ({})",
            a.file_name(),
            a.score,
            b.file_name(),
            b.score
        );
    }
}

/// Find the row with the given file name in a fixture index.
pub fn row_named<'a>(index: &'a [IndexRow], file_name: &str) -> &'a IndexRow {
    index
        .iter()
        .find(|r| r.file_name == file_name)
        .unwrap_or_else(|| panic!("no row named {}", file_name))
}
