// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search configuration: the on-disk schema and the resolved value.
//!
//! Two types on purpose. [`ConfigFile`] mirrors the JSON exactly as users write
//! it: every field optional, numbers that might be strings or garbage.
//! [`SearchConfig`] is what the scorer sees: every field present and typed.
//! Conversion happens once, at load time, and never fails. A malformed field
//! degrades to a defined value instead of blanking the whole result set.
//!
//! # Coercion rules
//!
//! | Field                  | Absent / `null` | Number / numeric string | Anything else |
//! |------------------------|-----------------|-------------------------|---------------|
//! | `weights.overlap`      | 2.0             | that value              | 0.0           |
//! | `weights.filename`     | 1.0             | that value              | 0.0           |
//! | `weights.category`     | 1.0             | that value              | 0.0           |
//! | `categoryBoosts[].weight` | 0.0          | that value              | 0.0           |
//! | `fuzzy.maxDistance`    | 1               | truncated if `>= 0`     | 1             |
//! | `fuzzy.enabled`        | false           | -                       | false (non-bool) |
//!
//! A `null` section (`weights`, `categoryBoosts`, `synonyms`, `fuzzy`) is the
//! same as leaving it out.

use crate::synonyms::SynonymMap;
use serde::{Deserialize, Serialize};

/// Default weight of the token-overlap signal.
pub const DEFAULT_OVERLAP_WEIGHT: f64 = 2.0;

/// Default weight of the file-name substring signal.
pub const DEFAULT_FILENAME_WEIGHT: f64 = 1.0;

/// Default weight applied to the summed category boosts.
pub const DEFAULT_CATEGORY_WEIGHT: f64 = 1.0;

/// Default edit-distance bound when fuzzy matching is on.
pub const DEFAULT_MAX_DISTANCE: usize = 1;

// =============================================================================
// RESOLVED CONFIGURATION
// =============================================================================

/// Fully resolved search configuration.
///
/// `SearchConfig::default()` carries the documented constants. Deserializing
/// goes through [`ConfigFile`], so `serde_json::from_str::<SearchConfig>` applies
/// the same coercion rules as the loader.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "ConfigFile")]
pub struct SearchConfig {
    pub weights: Weights,
    pub category_boosts: Vec<CategoryBoost>,
    pub synonyms: SynonymMap,
    pub fuzzy: FuzzyConfig,
}

/// Multipliers for the three scoring signals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Weights {
    pub overlap: f64,
    pub filename: f64,
    pub category: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            overlap: DEFAULT_OVERLAP_WEIGHT,
            filename: DEFAULT_FILENAME_WEIGHT,
            category: DEFAULT_CATEGORY_WEIGHT,
        }
    }
}

/// Adds `weight` when `pattern` occurs in a row's category (case-insensitive).
///
/// Rules are cumulative: a category matching three rules gets all three weights.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBoost {
    #[serde(rename = "match")]
    pub pattern: String,
    pub weight: f64,
}

impl CategoryBoost {
    pub fn new(pattern: impl Into<String>, weight: f64) -> Self {
        Self {
            pattern: pattern.into(),
            weight,
        }
    }
}

/// Fuzzy overlap matching.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FuzzyConfig {
    pub enabled: bool,
    pub max_distance: usize,
}

impl Default for FuzzyConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            max_distance: DEFAULT_MAX_DISTANCE,
        }
    }
}

impl SearchConfig {
    /// Builder-style helper used by tests and the CLI.
    pub fn with_fuzzy(mut self, max_distance: usize) -> Self {
        self.fuzzy = FuzzyConfig {
            enabled: true,
            max_distance,
        };
        self
    }
}

// =============================================================================
// ON-DISK SCHEMA
// =============================================================================

/// A numeric config value as it may appear in hand-written JSON.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumberLike {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl NumberLike {
    /// The finite number this value denotes, if any.
    ///
    /// Numeric strings are trimmed and parsed. `"inf"` and `"NaN"` parse in Rust
    /// but are rejected here along with everything non-numeric.
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            NumberLike::Number(n) => *n,
            NumberLike::Text(s) => s.trim().parse::<f64>().ok()?,
            NumberLike::Other(_) => return None,
        };
        value.is_finite().then_some(value)
    }

    /// Parse-or-default: the number, or `fallback` when it does not parse.
    pub fn parse_or(&self, fallback: f64) -> f64 {
        self.as_f64().unwrap_or(fallback)
    }

    /// A non-negative integer, truncating any fraction.
    pub fn as_distance(&self) -> Option<usize> {
        self.as_f64()
            .filter(|n| *n >= 0.0)
            .map(|n| n.trunc() as usize)
    }
}

/// Search configuration exactly as read from JSON.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigFile {
    pub weights: Option<WeightsFile>,
    pub category_boosts: Option<Vec<CategoryBoostFile>>,
    pub synonyms: Option<SynonymMap>,
    pub fuzzy: Option<FuzzyFile>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WeightsFile {
    pub overlap: Option<NumberLike>,
    pub filename: Option<NumberLike>,
    pub category: Option<NumberLike>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CategoryBoostFile {
    #[serde(rename = "match")]
    pub pattern: Option<serde_json::Value>,
    pub weight: Option<NumberLike>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FuzzyFile {
    pub enabled: Option<serde_json::Value>,
    pub max_distance: Option<NumberLike>,
}

/// Resolve an optional weight: absent keeps the default, junk becomes zero.
fn resolve_weight(name: &str, value: Option<&NumberLike>, default: f64) -> f64 {
    match value {
        None => default,
        Some(v) => {
            if v.as_f64().is_none() {
                tracing::warn!(field = name, value = ?v, "non-numeric weight, using 0");
            }
            v.parse_or(0.0)
        }
    }
}

impl From<ConfigFile> for SearchConfig {
    fn from(file: ConfigFile) -> Self {
        let weights = file.weights.unwrap_or_default();
        let weights = Weights {
            overlap: resolve_weight(
                "weights.overlap",
                weights.overlap.as_ref(),
                DEFAULT_OVERLAP_WEIGHT,
            ),
            filename: resolve_weight(
                "weights.filename",
                weights.filename.as_ref(),
                DEFAULT_FILENAME_WEIGHT,
            ),
            category: resolve_weight(
                "weights.category",
                weights.category.as_ref(),
                DEFAULT_CATEGORY_WEIGHT,
            ),
        };

        let category_boosts = file
            .category_boosts
            .unwrap_or_default()
            .into_iter()
            .map(|rule| {
                let pattern = match rule.pattern {
                    Some(serde_json::Value::String(s)) => s,
                    None | Some(serde_json::Value::Null) => String::new(),
                    Some(other) => {
                        tracing::warn!(value = %other, "category boost match is not a string, rule ignored");
                        String::new()
                    }
                };
                let weight = resolve_weight("categoryBoosts.weight", rule.weight.as_ref(), 0.0);
                CategoryBoost { pattern, weight }
            })
            .collect();

        let fuzzy_file = file.fuzzy.unwrap_or_default();
        let enabled = match fuzzy_file.enabled {
            Some(serde_json::Value::Bool(b)) => b,
            None | Some(serde_json::Value::Null) => false,
            Some(other) => {
                tracing::warn!(value = %other, "fuzzy.enabled is not a bool, fuzzy disabled");
                false
            }
        };
        let max_distance = match fuzzy_file.max_distance {
            None => DEFAULT_MAX_DISTANCE,
            Some(v) => v.as_distance().unwrap_or_else(|| {
                tracing::warn!(value = ?v, "invalid fuzzy.maxDistance, using default");
                DEFAULT_MAX_DISTANCE
            }),
        };

        SearchConfig {
            weights,
            category_boosts,
            synonyms: file.synonyms.unwrap_or_default(),
            fuzzy: FuzzyConfig {
                enabled,
                max_distance,
            },
        }
    }
}
