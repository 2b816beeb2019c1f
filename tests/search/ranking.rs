//! Ordering, tie-breaks and the result cap.

use crate::common::{
    assert_ranked, boosted_config, file_names, make_row, sample_config, sample_index, NO_FILTER,
    TOP_K,
};
use iconsift::{search, SearchConfig};

#[test]
fn test_ties_break_by_file_name() {
    let index = sample_index();
    let results = search(&index, &SearchConfig::default(), "circle", NO_FILTER, TOP_K);

    assert_eq!(
        file_names(&results),
        vec!["arrow-up-circle.svg", "circle.svg", "user-circle.svg"]
    );
    assert_ranked(&results);
}

#[test]
fn test_tie_break_ignores_index_order() {
    let index = vec![
        make_row("z", "zebra-star.svg", "shapes", &["star"]),
        make_row("a", "alpha-star.svg", "shapes", &["star"]),
    ];
    let results = search(&index, &SearchConfig::default(), "star", NO_FILTER, TOP_K);

    assert_eq!(file_names(&results), vec!["alpha-star.svg", "zebra-star.svg"]);
}

#[test]
fn test_identical_rows_keep_index_order() {
    let index = vec![
        make_row("first", "dup.svg", "ui", &["dup"]),
        make_row("second", "dup.svg", "ui", &["dup"]),
    ];
    let results = search(&index, &SearchConfig::default(), "dup", NO_FILTER, TOP_K);

    let ids: Vec<&str> = results.iter().map(|r| r.id()).collect();
    assert_eq!(ids, vec!["first", "second"]);
}

#[test]
fn test_higher_score_ranks_first() {
    let index = sample_index();
    let results = search(&index, &sample_config(), "cart", NO_FILTER, TOP_K);

    // shopping-cart: overlap 2 (cart, shopping) + filename; basket: overlap 1 + filename
    assert_eq!(file_names(&results), vec!["shopping-cart.svg", "basket.svg"]);
    assert_eq!(results[0].score, 5.0);
    assert_eq!(results[1].score, 3.0);
}

#[test]
fn test_category_boost_lifts_matching_category() {
    let index = sample_index();
    let results = search(&index, &boosted_config("arrow", 2.0), "circle", NO_FILTER, TOP_K);

    assert_eq!(results[0].file_name(), "arrow-up-circle.svg");
    assert_eq!(results[0].score, 5.0);
    assert_eq!(file_names(&results[1..]), vec!["circle.svg", "user-circle.svg"]);
}

#[test]
fn test_negative_boost_can_sink_a_row() {
    let index = sample_index();
    let results = search(&index, &boosted_config("people", -3.0), "circle", NO_FILTER, TOP_K);

    assert_eq!(file_names(&results), vec!["arrow-up-circle.svg", "circle.svg"]);
}

#[test]
fn test_top_k_truncates_after_sorting() {
    let index = sample_index();
    let results = search(&index, &SearchConfig::default(), "arrow", NO_FILTER, 2);

    assert_eq!(file_names(&results), vec!["arrow-left.svg", "arrow-right.svg"]);
}

#[test]
fn test_top_k_zero_returns_empty() {
    let index = sample_index();
    assert!(search(&index, &SearchConfig::default(), "arrow", NO_FILTER, 0).is_empty());
}

#[test]
fn test_top_k_larger_than_matches() {
    let index = sample_index();
    let results = search(&index, &SearchConfig::default(), "star", NO_FILTER, 1000);
    assert_eq!(results.len(), 2);
}

#[test]
fn test_scores_are_rounded_to_three_decimals() {
    let index = vec![make_row("a", "a.svg", "ui", &["thing"])];
    let mut config = SearchConfig::default();
    config.weights.overlap = 1.0 / 3.0;

    let results = search(&index, &config, "thing", NO_FILTER, TOP_K);

    assert_eq!(results[0].score, 0.333);
}

#[test]
fn test_tiny_positive_score_is_kept() {
    // raw 0.0004 is positive even though it reports as 0.000
    let index = vec![make_row("a", "home.svg", "ui", &[])];
    let mut config = SearchConfig::default();
    config.weights.filename = 0.0004;

    let results = search(&index, &config, "home", NO_FILTER, TOP_K);

    assert_eq!(file_names(&results), vec!["home.svg"]);
    assert_eq!(results[0].score, 0.0);
}

#[test]
fn test_order_uses_unrounded_scores() {
    // both report 2.0; the boosted row is higher before rounding
    let index = vec![
        make_row("a", "a.svg", "ui", &["x"]),
        make_row("z", "z.svg", "arrows", &["x"]),
    ];
    let results = search(&index, &boosted_config("arrows", 0.0004), "x", NO_FILTER, TOP_K);

    assert_eq!(file_names(&results), vec!["z.svg", "a.svg"]);
    assert_eq!(results[0].score, 2.0);
    assert_eq!(results[1].score, 2.0);
}

#[test]
fn test_huge_weights_keep_order_and_finite_scores() {
    let index = vec![
        make_row("a", "a.svg", "ui", &["x"]),
        make_row("b", "b.svg", "ui", &["x", "y"]),
    ];
    let mut config = SearchConfig::default();
    config.weights.overlap = 1e306;

    let results = search(&index, &config, "x y", NO_FILTER, TOP_K);

    assert_eq!(file_names(&results), vec!["b.svg", "a.svg"]);
    assert_eq!(results[0].score, 2e306);
    assert_eq!(results[1].score, 1e306);
}
