//! Shared generators.

use crate::common::make_row;
use iconsift::{CategoryBoost, IndexRow, SearchConfig, SynonymMap};
use proptest::prelude::*;

pub const CATEGORIES: &[&str] = &["ui", "arrows", "shapes", "commerce"];

/// Small alphabet so generated words collide often.
pub fn dense_word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-d]{1,4}").unwrap()
}

pub fn query_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(dense_word_strategy(), 0..4).prop_map(|words| words.join(" "))
}

pub fn row_strategy(id: usize) -> impl Strategy<Value = IndexRow> {
    (
        prop::collection::vec(dense_word_strategy(), 0..5),
        prop::sample::select(CATEGORIES.to_vec()),
    )
        .prop_map(move |(words, category)| {
            let file_name = format!("{}.svg", words.join("-"));
            let tokens: Vec<&str> = words.iter().map(String::as_str).collect();
            make_row(&id.to_string(), &file_name, category, &tokens)
        })
}

pub fn index_strategy() -> impl Strategy<Value = Vec<IndexRow>> {
    (0usize..16).prop_flat_map(|n| (0..n).map(row_strategy).collect::<Vec<_>>())
}

pub fn synonyms_strategy() -> impl Strategy<Value = SynonymMap> {
    prop::collection::btree_map(
        dense_word_strategy(),
        prop::collection::vec(query_strategy(), 1..3),
        0..4,
    )
}

/// Configs with non-negative weights and boosts.
pub fn config_strategy() -> impl Strategy<Value = SearchConfig> {
    (
        0.0f64..4.0,
        0.0f64..4.0,
        0.0f64..4.0,
        prop::collection::vec(
            (prop::sample::select(CATEGORIES.to_vec()), 0.0f64..3.0),
            0..3,
        ),
        synonyms_strategy(),
        prop::option::of(0usize..3),
    )
        .prop_map(|(overlap, filename, category, boosts, synonyms, fuzzy)| {
            let mut config = SearchConfig {
                synonyms,
                category_boosts: boosts
                    .into_iter()
                    .map(|(pattern, weight)| CategoryBoost::new(pattern, weight))
                    .collect(),
                ..SearchConfig::default()
            };
            config.weights.overlap = overlap;
            config.weights.filename = filename;
            config.weights.category = category;
            if let Some(max) = fuzzy {
                config = config.with_fuzzy(max);
            }
            config
        })
}
