// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance with an early-exit optimization.
//!
//! The key insight: `|len(a) - len(b)|` is a lower bound on edit distance.
//! If two tokens differ in length by more than the threshold, skip the O(nm) DP.
//! Icon tokens are short and most pairs are far apart, so the length check
//! rejects a large share of comparisons before anything is allocated.

/// Levenshtein distance between `a` and `b`.
///
/// Insertion, deletion and substitution each cost 1. Counts chars, not bytes.
/// Single-row DP: `O(|a|·|b|)` time, `O(|b|)` space.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let b_len = b_chars.len();

    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;

        for (j, &bc) in b_chars.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
        }
    }

    dp[b_len]
}

/// Are these tokens within `max` edits of each other?
///
/// Same answer as `edit_distance(a, b) <= max`, with two early-exit paths:
/// 1. If the length difference exceeds `max`, return false immediately
/// 2. If the minimum of a DP row exceeds `max`, abandon the DP early
///
/// Both are sound: row minimums never decrease, so neither exit can reject a
/// pair that is actually within range.
pub fn within_distance(a: &str, b: &str, max: usize) -> bool {
    if a == b {
        return true;
    }

    let a_len = a.chars().count();
    let b_len = b.chars().count();

    if a_len.abs_diff(b_len) > max {
        return false;
    }

    let b_chars: Vec<char> = b.chars().collect();
    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, &bc) in b_chars.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
            min_row = min_row.min(dp[j + 1]);
        }

        if min_row > max {
            return false;
        }
    }

    dp[b_len] <= max
}
