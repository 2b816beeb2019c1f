// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text helpers shared by the search core.
//!
//! Only tokenization lives here for now. It is the single place that decides
//! what a "word" is, so the expander, scorer and loader all agree.

pub mod tokenize;

pub use tokenize::tokenize;
