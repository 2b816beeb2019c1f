// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: one linear pass from query to ranked icons.
//!
//! Resolve the query terms, drop rows outside the category filter, score the
//! rest, then sort and cut to `top_k`. Each call starts from scratch and
//! nothing is cached between queries.

mod ranker;
pub mod utils;

pub use ranker::search;
pub use utils::categories;
