//! Invariants of the ranked result list.

use crate::strategies::{config_strategy, index_strategy, query_strategy, CATEGORIES};
use iconsift::search::utils::resolve_terms;
use iconsift::{score, search};
use proptest::prelude::*;

const NO_FILTER: &[&str] = &[];

proptest! {
    #[test]
    fn prop_results_are_ranked(
        index in index_strategy(),
        config in config_strategy(),
        query in query_strategy(),
    ) {
        let results = search(&index, &config, &query, NO_FILTER, 100);
        let terms = resolve_terms(&query, &config.synonyms);
        let raw: Vec<f64> = results.iter().map(|r| score(&terms, &r.row, &config)).collect();

        for (i, pair) in results.windows(2).enumerate() {
            let (a, b) = (raw[i], raw[i + 1]);
            prop_assert!(a > 0.0 && b > 0.0);
            prop_assert!(pair[0].score >= pair[1].score);
            prop_assert!(
                a > b || (a == b && pair[0].row.file_name <= pair[1].row.file_name),
                "out of order: {} ({}) before {} ({})",
                pair[0].row.file_name, a, pair[1].row.file_name, b
            );
        }
    }

    #[test]
    fn prop_result_count_bounded(
        index in index_strategy(),
        config in config_strategy(),
        query in query_strategy(),
        top_k in 0usize..8,
    ) {
        let results = search(&index, &config, &query, NO_FILTER, top_k);
        let terms = resolve_terms(&query, &config.synonyms);
        let positive = index.iter().filter(|r| score(&terms, r, &config) > 0.0).count();

        prop_assert!(results.len() <= top_k);
        prop_assert!(results.len() <= positive);
    }

    /// A smaller cap returns a prefix of a larger one.
    #[test]
    fn prop_top_k_is_prefix(
        index in index_strategy(),
        config in config_strategy(),
        query in query_strategy(),
        top_k in 0usize..8,
    ) {
        let small = search(&index, &config, &query, NO_FILTER, top_k);
        let large = search(&index, &config, &query, NO_FILTER, 100);
        prop_assert_eq!(&small[..], &large[..small.len()]);
    }

    /// Filtering equals searching everything, then keeping the category.
    #[test]
    fn prop_filter_restricts_without_reordering(
        index in index_strategy(),
        config in config_strategy(),
        query in query_strategy(),
        category in prop::sample::select(CATEGORIES.to_vec()),
    ) {
        let filtered = search(&index, &config, &query, &[category], 100);
        let expected: Vec<_> = search(&index, &config, &query, NO_FILTER, 100)
            .into_iter()
            .filter(|r| r.row.category == category)
            .collect();
        prop_assert_eq!(filtered, expected);
    }

    /// Every result is a row of the index.
    #[test]
    fn prop_results_come_from_index(
        index in index_strategy(),
        config in config_strategy(),
        query in query_strategy(),
    ) {
        for result in search(&index, &config, &query, NO_FILTER, 100) {
            prop_assert!(index.contains(&result.row));
        }
    }
}
