// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the iconsift command-line interface.
//!
//! Three subcommands: `search` to rank icons for a query, `categories` to list
//! the filterable categories, and `expand` to show what a query turns into
//! after synonym expansion. Index and config paths can come from the
//! environment so repeated queries stay short.

pub mod display;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Result count when `--limit` is not given.
pub const DEFAULT_LIMIT: usize = 300;

#[derive(Parser)]
#[command(
    name = "iconsift",
    about = "Search an icon metadata index by keyword, synonym and typo",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank icons for a query
    Search(SearchArgs),

    /// List the distinct categories in an index
    Categories {
        /// Path to the icon index JSON
        #[arg(short, long, env = "ICONSIFT_INDEX")]
        index: PathBuf,

        /// Print a JSON array instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the term set a query expands to
    Expand {
        /// Query text
        query: String,

        /// Path to the search config JSON (defaults if omitted)
        #[arg(short, long, env = "ICONSIFT_CONFIG")]
        config: Option<PathBuf>,

        /// Print a JSON array instead of plain lines
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
pub struct SearchArgs {
    /// Query text
    pub query: String,

    /// Path to the icon index JSON
    #[arg(short, long, env = "ICONSIFT_INDEX")]
    pub index: PathBuf,

    /// Path to the search config JSON (defaults if omitted)
    #[arg(short, long, env = "ICONSIFT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Only consider icons in this category (repeatable)
    #[arg(long = "category", value_name = "CATEGORY")]
    pub categories: Vec<String>,

    /// Maximum number of results to return
    #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,

    /// Rewrite asset paths under this base URL
    #[arg(long, value_name = "URL")]
    pub base: Option<String>,

    /// Turn on fuzzy matching with this edit distance, overriding the config
    #[arg(long, value_name = "DISTANCE")]
    pub fuzzy: Option<usize>,

    /// Print results as JSON
    #[arg(long, conflicts_with = "explain")]
    pub json: bool,

    /// Show the per-signal breakdown of each score
    #[arg(long)]
    pub explain: bool,
}
