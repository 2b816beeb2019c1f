// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Synonym expansion: turn a query into the set of terms worth scoring.
//!
//! Expansion is exactly one level deep. The whole query phrase and each of its
//! tokens may pull in synonyms, but the pulled-in terms are never expanded in
//! turn. A table with `cart -> basket` and `basket -> bag` expands `cart` to
//! `{cart, basket}`, not `{cart, basket, bag}`.

use crate::util::tokenize;
use std::collections::{BTreeMap, BTreeSet};

/// Phrase or token -> synonym phrases.
///
/// Keys are matched against the lowercased, trimmed query, so keys should be
/// written in lowercase. Values may be multi-word phrases; they are tokenized
/// on use.
pub type SynonymMap = BTreeMap<String, Vec<String>>;

/// Expand `query` into a deduplicated term set.
///
/// 1. Lowercase and trim the query, tokenize it to seed the set.
/// 2. If the whole phrase is a key, add the tokens of each of its synonyms.
/// 3. For each seed token that is a key, add the tokens of each of its synonyms.
///
/// # Example
///
/// ```
/// use iconsift::{expand, SynonymMap};
///
/// let mut synonyms = SynonymMap::new();
/// synonyms.insert("boxes".into(), vec!["box".into(), "package".into()]);
///
/// let terms = expand("Boxes", &synonyms);
/// assert!(terms.contains("boxes") && terms.contains("box") && terms.contains("package"));
/// ```
pub fn expand(query: &str, synonyms: &SynonymMap) -> BTreeSet<String> {
    let phrase = query.trim().to_lowercase();
    let seeds = tokenize(&phrase);
    let mut terms: BTreeSet<String> = seeds.iter().cloned().collect();

    if synonyms.is_empty() {
        return terms;
    }

    if let Some(phrases) = synonyms.get(&phrase) {
        add_phrase_tokens(&mut terms, phrases);
    }

    for seed in &seeds {
        if let Some(phrases) = synonyms.get(seed) {
            add_phrase_tokens(&mut terms, phrases);
        }
    }

    terms
}

fn add_phrase_tokens(terms: &mut BTreeSet<String>, phrases: &[String]) {
    for phrase in phrases {
        terms.extend(tokenize(phrase));
    }
}
