// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for edit distance.
//!
//! The bounded check takes shortcuts the full distance does not. Any
//! disagreement between the two means fuzzy search lets in the wrong icons
//! or drops the right ones.

#![no_main]

use arbitrary::Arbitrary;
use iconsift::{edit_distance, within_distance};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct MatchInput {
    a: String,
    b: String,
    max: u8,
}

fn cap(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

fuzz_target!(|input: MatchInput| {
    let a = cap(&input.a, 40);
    let b = cap(&input.b, 40);
    let max = usize::from(input.max % 8);

    let d = edit_distance(&a, &b);

    // INVARIANT 1: symmetric
    assert_eq!(d, edit_distance(&b, &a), "asymmetric for {:?} / {:?}", a, b);

    // INVARIANT 2: bounded by lengths
    let (la, lb) = (a.chars().count(), b.chars().count());
    assert!(d >= la.abs_diff(lb), "{} below length gap for {:?} / {:?}", d, a, b);
    assert!(d <= la.max(lb), "{} above longer length for {:?} / {:?}", d, a, b);

    // INVARIANT 3: zero only for equal strings
    assert_eq!(d == 0, a == b);

    // INVARIANT 4: bounded check agrees with the full distance
    assert_eq!(
        within_distance(&a, &b, max),
        d <= max,
        "within_distance disagrees for {:?} / {:?} max={} d={}",
        a,
        b,
        max,
        d
    );
});
