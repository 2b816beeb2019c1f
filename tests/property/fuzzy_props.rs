//! Edit distance and fuzzy overlap.

use crate::strategies::{index_strategy, query_strategy};
use iconsift::{edit_distance, search, within_distance, SearchConfig};
use proptest::prelude::*;
use std::collections::BTreeSet;

proptest! {
    #[test]
    fn prop_edit_distance_symmetric(a in "[a-d]{0,6}", b in "[a-d]{0,6}") {
        prop_assert_eq!(edit_distance(&a, &b), edit_distance(&b, &a));
    }

    #[test]
    fn prop_edit_distance_bounds(a in "[a-d]{0,6}", b in "[a-d]{0,6}") {
        let (la, lb) = (a.chars().count(), b.chars().count());
        let d = edit_distance(&a, &b);
        prop_assert!(d >= la.abs_diff(lb));
        prop_assert!(d <= la.max(lb));
        prop_assert_eq!(d == 0, a == b);
    }

    #[test]
    fn prop_triangle_inequality(
        a in "[a-c]{0,5}",
        b in "[a-c]{0,5}",
        c in "[a-c]{0,5}",
    ) {
        prop_assert!(edit_distance(&a, &c) <= edit_distance(&a, &b) + edit_distance(&b, &c));
    }

    #[test]
    fn prop_within_agrees_with_distance(
        a in "[a-d]{0,6}",
        b in "[a-d]{0,6}",
        max in 0usize..4,
    ) {
        prop_assert_eq!(within_distance(&a, &b, max), edit_distance(&a, &b) <= max);
    }

    /// One substituted character is always within distance 1.
    #[test]
    fn prop_single_substitution_is_distance_one(
        word in "[a-z]{1,8}",
        pos in any::<prop::sample::Index>(),
    ) {
        let chars: Vec<char> = word.chars().collect();
        let i = pos.index(chars.len());
        let mut mutated = chars.clone();
        mutated[i] = if chars[i] == 'z' { 'a' } else { 'z' };
        let mutated: String = mutated.into_iter().collect();

        prop_assert_eq!(edit_distance(&word, &mutated), 1);
        prop_assert!(within_distance(&word, &mutated, 1));
        prop_assert!(!within_distance(&word, &mutated, 0));
    }

    /// Turning fuzzy on can only add results.
    #[test]
    fn prop_fuzzy_results_superset_of_exact(
        index in index_strategy(),
        query in query_strategy(),
        max in 0usize..3,
    ) {
        let exact = SearchConfig::default();
        let fuzzy = SearchConfig::default().with_fuzzy(max);

        let exact_ids: BTreeSet<String> = search(&index, &exact, &query, &[] as &[&str], 100)
            .into_iter()
            .map(|r| r.row.id)
            .collect();
        let fuzzy_ids: BTreeSet<String> = search(&index, &fuzzy, &query, &[] as &[&str], 100)
            .into_iter()
            .map(|r| r.row.id)
            .collect();

        prop_assert!(exact_ids.is_subset(&fuzzy_ids));
    }
}
