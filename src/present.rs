// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Human-facing labels for search results.
//!
//! Front ends show a title and a handful of tags per icon. Both are derived
//! here so the CLI and the browser bindings print the same thing.

use std::collections::HashSet;

/// Most tags shown for one icon.
pub const MAX_DISPLAY_TAGS: usize = 24;

/// Tokens that say nothing useful about an icon.
const TAG_STOP: &[&str] = &[
    "svg", "line", "linear", "outline", "icon", "icons", "v1", "v2", "u", "id", "2", "3", "4",
];

/// Title for an icon file: `arrow-left_2.svg` -> `Arrow Left 2`.
///
/// Drops a trailing `.svg` (any case), turns runs of `-` and `_` into a
/// single space, and capitalizes the first letter of each word.
pub fn pretty_name(file_name: &str) -> String {
    let base = strip_svg_extension(file_name);
    title_case(&collapse_separators(base))
}

/// Tags worth showing for an icon, in token order.
///
/// Lowercased, deduplicated, without single characters, bare numbers or stop
/// tags, capped at [`MAX_DISPLAY_TAGS`], then title-cased.
pub fn display_tags<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    tokens
        .iter()
        .map(|t| t.as_ref().to_lowercase())
        .filter(|t| t.chars().count() > 1)
        .filter(|t| !t.chars().all(|c| c.is_ascii_digit()))
        .filter(|t| !TAG_STOP.contains(&t.as_str()))
        .filter(|t| seen.insert(t.clone()))
        .take(MAX_DISPLAY_TAGS)
        .map(|t| title_case(&collapse_separators(&t)))
        .collect()
}

fn strip_svg_extension(file_name: &str) -> &str {
    let len = file_name.len();
    if len >= 4
        && file_name.is_char_boundary(len - 4)
        && file_name[len - 4..].eq_ignore_ascii_case(".svg")
    {
        &file_name[..len - 4]
    } else {
        file_name
    }
}

fn collapse_separators(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for c in text.chars() {
        if c == '-' || c == '_' {
            if !in_run {
                out.push(' ');
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

/// Uppercase every ASCII word character that starts a word.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_word = false;
    for c in text.chars() {
        let is_word = c.is_ascii_alphanumeric() || c == '_';
        if is_word && !prev_word {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
        prev_word = is_word;
    }
    out
}
