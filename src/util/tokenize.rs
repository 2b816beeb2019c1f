// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query and file-name tokenization.
//!
//! A token is a maximal run of ASCII lowercase letters and digits after
//! lowercasing. Everything else, including non-ASCII letters, splits tokens.
//! Row tokens are precomputed upstream with the same rule, so a query token and
//! a row token compare equal exactly when they came from the same word.

/// Split `text` into lowercase `[a-z0-9]+` runs, in order, duplicates kept.
///
/// # Example
///
/// ```
/// use iconsift::tokenize;
///
/// assert_eq!(tokenize("Arrow-Left_2x.svg"), vec!["arrow", "left", "2x", "svg"]);
/// assert!(tokenize(" -- ").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for c in text.chars().flat_map(char::to_lowercase) {
        if is_token_char(c) {
            current.push(c);
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

#[inline]
fn is_token_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}
