// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Token-overlap icon search with synonym expansion and optional fuzzy matching.
//!
//! Matches a free-text query against a precomputed icon metadata index and
//! returns the top-K rows by a configurable weighted score. The core is pure:
//! every call recomputes from its arguments, nothing is cached, nothing is
//! mutated, and nothing can fail.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  util.rs    │────▶│ synonyms.rs  │────▶│ scoring/    │────▶│  search/    │
//! │ (tokenize)  │     │  (expand)    │     │  (score)    │     │  (search,   │
//! └─────────────┘     └──────────────┘     └─────────────┘     │ categories) │
//!                                                 ▲            └─────────────┘
//!                                          ┌──────┴──────┐
//!                                          │  fuzzy/     │
//!                                          │(edit dist.) │
//!                                          └─────────────┘
//! ```
//!
//! `loader` reads the index and config from JSON; it is the only fallible
//! module. `present` derives display labels. `wasm` (feature-gated) exposes the
//! same operations to a browser.
//!
//! # Usage
//!
//! ```
//! use iconsift::{search, IndexRow, SearchConfig};
//!
//! let index = vec![
//!     IndexRow {
//!         id: "a".into(),
//!         file_name: "home-icon.svg".into(),
//!         category: "ui".into(),
//!         tokens: vec!["home".into(), "icon".into()],
//!         ..IndexRow::default()
//!     },
//!     IndexRow {
//!         id: "b".into(),
//!         file_name: "house.svg".into(),
//!         category: "ui".into(),
//!         tokens: vec!["house".into()],
//!         ..IndexRow::default()
//!     },
//! ];
//!
//! let results = search(&index, &SearchConfig::default(), "home", &[] as &[&str], 300);
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].row.id, "a");
//! assert_eq!(results[0].score, 3.0);
//! ```

// Module declarations
pub mod config;
pub mod fuzzy;
pub mod loader;
pub mod present;
pub mod scoring;
pub mod search;
mod synonyms;
pub mod testing;
mod types;
pub mod util;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use config::{CategoryBoost, FuzzyConfig, NumberLike, SearchConfig, Weights};
pub use fuzzy::{edit_distance, within_distance};
pub use loader::{
    load_config, load_index, load_index_with_base, normalize_full_path, parse_config, parse_index,
    LoadError,
};
pub use present::{display_tags, pretty_name};
pub use scoring::{score, score_breakdown};
pub use search::{categories, search};
pub use synonyms::{expand, SynonymMap};
pub use types::{IndexRow, ScoreBreakdown, ScoredResult};
pub use util::tokenize;

#[cfg(feature = "wasm")]
pub use wasm::IconSearcher;
