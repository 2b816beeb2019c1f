//! Category filters and the category list.

use crate::common::{file_names, make_row, sample_index, NO_FILTER, TOP_K};
use iconsift::{categories, search, SearchConfig};

#[test]
fn test_single_category_filter() {
    let results = search(&sample_index(), &SearchConfig::default(), "circle", &["shapes"], TOP_K);
    assert_eq!(file_names(&results), vec!["circle.svg"]);
}

#[test]
fn test_multiple_categories_are_a_union() {
    let results = search(
        &sample_index(),
        &SearchConfig::default(),
        "circle",
        &["shapes", "people"],
        TOP_K,
    );
    assert_eq!(file_names(&results), vec!["circle.svg", "user-circle.svg"]);
}

#[test]
fn test_filter_is_exact_and_case_sensitive() {
    let config = SearchConfig::default();
    let index = sample_index();
    assert!(search(&index, &config, "circle", &["Shapes"], TOP_K).is_empty());
    assert!(search(&index, &config, "circle", &["shape"], TOP_K).is_empty());
}

#[test]
fn test_unknown_category_returns_nothing() {
    let results = search(&sample_index(), &SearchConfig::default(), "arrow", &["nope"], TOP_K);
    assert!(results.is_empty());
}

#[test]
fn test_empty_filter_keeps_all_categories() {
    let index = sample_index();
    let config = SearchConfig::default();
    let unfiltered = search(&index, &config, "circle", NO_FILTER, TOP_K);
    assert_eq!(unfiltered.len(), 3);
}

#[test]
fn test_filter_accepts_owned_strings() {
    let filter = vec!["arrows".to_string()];
    let results = search(&sample_index(), &SearchConfig::default(), "circle", &filter, TOP_K);
    assert_eq!(file_names(&results), vec!["arrow-up-circle.svg"]);
}

#[test]
fn test_categories_sorted_and_distinct() {
    assert_eq!(
        categories(&sample_index()),
        vec!["actions", "alerts", "arrows", "commerce", "people", "shapes", "shipping", "ui"]
    );
}

#[test]
fn test_categories_of_empty_index() {
    assert!(categories(&[]).is_empty());
}

#[test]
fn test_categories_include_empty_label() {
    let index = vec![
        make_row("a", "a.svg", "", &["a"]),
        make_row("b", "b.svg", "ui", &["b"]),
    ];
    assert_eq!(categories(&index), vec!["", "ui"]);
}
