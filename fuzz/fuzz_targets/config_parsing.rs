// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for index and config parsing.
//!
//! Hand-written config files are the least trustworthy input the crate sees.
//! Parsing may reject them, but it must never panic, and an accepted config
//! must be usable for a search.

#![no_main]

use iconsift::testing::sample_index;
use iconsift::{parse_config, parse_index, search};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // INVARIANT 1: parsing never panics
    let _ = parse_index(text);

    if let Ok(config) = parse_config(text) {
        // INVARIANT 2: resolved weights are finite
        assert!(config.weights.overlap.is_finite());
        assert!(config.weights.filename.is_finite());
        assert!(config.weights.category.is_finite());
        for boost in &config.category_boosts {
            assert!(boost.weight.is_finite());
        }

        // INVARIANT 3: a resolved config always searches
        let capped = config.with_fuzzy(1);
        let _ = search(&sample_index(), &capped, "home", &[] as &[&str], 10);
    }
});
