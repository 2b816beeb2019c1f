// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading the icon index and search configuration from JSON.
//!
//! This is the only part of the crate that can fail. Everything downstream
//! receives already-parsed, in-memory values and is total.
//!
//! # Files
//!
//! - **Index**: a JSON array of rows, `[{ id, fileName, category, tokens, fullPath }]`.
//!   Missing row fields load as empty.
//! - **Config**: a JSON object in [`ConfigFile`] shape. Missing fields take the
//!   documented defaults, malformed numbers degrade (see [`crate::config`]).

use crate::config::{ConfigFile, SearchConfig};
use crate::types::IndexRow;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why an index or config could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("index in {origin} must be a JSON array of rows")]
    NotAnArray { origin: String },
}

const INLINE_ORIGIN: &str = "<inline>";

/// Parse an index from a JSON string.
pub fn parse_index(json: &str) -> Result<Vec<IndexRow>, LoadError> {
    parse_index_from(json, INLINE_ORIGIN)
}

/// Parse a config from a JSON string, resolving it against defaults.
pub fn parse_config(json: &str) -> Result<SearchConfig, LoadError> {
    parse_config_from(json, INLINE_ORIGIN)
}

/// Read and parse an index file.
pub fn load_index(path: impl AsRef<Path>) -> Result<Vec<IndexRow>, LoadError> {
    let path = path.as_ref();
    let raw = read(path)?;
    let rows = parse_index_from(&raw, &path.display().to_string())?;
    tracing::info!(path = %path.display(), rows = rows.len(), "loaded icon index");
    Ok(rows)
}

/// Read an index file and rewrite every row's `full_path` under `base`.
///
/// See [`normalize_full_path`].
pub fn load_index_with_base(
    path: impl AsRef<Path>,
    base: &str,
) -> Result<Vec<IndexRow>, LoadError> {
    let mut rows = load_index(path)?;
    for row in &mut rows {
        row.full_path = normalize_full_path(&row.full_path, base);
    }
    Ok(rows)
}

/// Read and resolve a config file.
pub fn load_config(path: impl AsRef<Path>) -> Result<SearchConfig, LoadError> {
    let path = path.as_ref();
    let raw = read(path)?;
    let config = parse_config_from(&raw, &path.display().to_string())?;
    tracing::info!(
        path = %path.display(),
        synonyms = config.synonyms.len(),
        boosts = config.category_boosts.len(),
        fuzzy = config.fuzzy.enabled,
        "loaded search config"
    );
    tracing::debug!(?config, "resolved search config");
    Ok(config)
}

/// Rewrite an asset path from the index builder's machine into a URL path.
///
/// Backslashes become `/`. A leading `Icons` directory, optionally behind a
/// drive letter (`C:\Icons\...`) or a slash, is renamed to `icons`. Leading
/// slashes are dropped and `base` is prefixed as-is.
///
/// ```
/// use iconsift::normalize_full_path;
///
/// assert_eq!(normalize_full_path(r"C:\Icons\ui\home.svg", "/"), "/icons/ui/home.svg");
/// assert_eq!(normalize_full_path("/icons/ui/home.svg", "/app/"), "/app/icons/ui/home.svg");
/// ```
pub fn normalize_full_path(path: &str, base: &str) -> String {
    let cleaned = path.replace('\\', "/");
    let rest = strip_drive(&cleaned);
    let rest = rest.strip_prefix('/').unwrap_or(rest);

    let renamed = match rest.get(..5) {
        Some(head) if head.eq_ignore_ascii_case("icons") => format!("/icons{}", &rest[5..]),
        _ => cleaned.clone(),
    };

    format!("{}{}", base, renamed.trim_start_matches('/'))
}

/// `C:/rest` -> `/rest`; anything else unchanged.
fn strip_drive(path: &str) -> &str {
    let bytes = path.as_bytes();
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        &path[2..]
    } else {
        path
    }
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_index_from(json: &str, origin: &str) -> Result<Vec<IndexRow>, LoadError> {
    let value: serde_json::Value = serde_json::from_str(json).map_err(|source| LoadError::Json {
        origin: origin.to_string(),
        source,
    })?;

    if !value.is_array() {
        return Err(LoadError::NotAnArray {
            origin: origin.to_string(),
        });
    }

    serde_json::from_value(value).map_err(|source| LoadError::Json {
        origin: origin.to_string(),
        source,
    })
}

fn parse_config_from(json: &str, origin: &str) -> Result<SearchConfig, LoadError> {
    let file: ConfigFile = serde_json::from_str(json).map_err(|source| LoadError::Json {
        origin: origin.to_string(),
        source,
    })?;
    Ok(SearchConfig::from(file))
}
