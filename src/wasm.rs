//! WebAssembly bindings for in-browser icon search.
//!
//! One type, `IconSearcher`, built once from the index and config JSON the page
//! already fetched. Every method is a thin wrapper over the native functions,
//! so browser results match the CLI exactly.

use crate::config::SearchConfig;
use crate::present::{display_tags, pretty_name};
use crate::search::{categories, search};
use crate::synonyms::expand;
use crate::types::IndexRow;
use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

/// Search result output for TypeScript consumption.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchResultOutput<'a> {
    id: &'a str,
    file_name: &'a str,
    category: &'a str,
    full_path: &'a str,
    tokens: &'a [String],
    score: f64,
    /// Title for the result card
    title: String,
    /// Tags for the detail panel
    tags: Vec<String>,
}

/// WASM-accessible searcher over an immutable icon index.
#[wasm_bindgen]
pub struct IconSearcher {
    index: Vec<IndexRow>,
    config: SearchConfig,
}

#[wasm_bindgen]
impl IconSearcher {
    /// Create a searcher from the parsed index array and config object.
    ///
    /// `config` may be `undefined` or `null` for the defaults. Malformed config
    /// numbers degrade the same way they do when loaded from disk.
    #[wasm_bindgen(constructor)]
    pub fn new(index: JsValue, config: JsValue) -> Result<IconSearcher, JsValue> {
        let index: Vec<IndexRow> = from_value(index).map_err(|e| e.to_string())?;
        let config: SearchConfig = if config.is_undefined() || config.is_null() {
            SearchConfig::default()
        } else {
            from_value(config).map_err(|e| e.to_string())?
        };
        Ok(IconSearcher { index, config })
    }

    /// Number of rows in the index.
    #[wasm_bindgen(getter, js_name = rowCount)]
    pub fn row_count(&self) -> usize {
        self.index.len()
    }

    /// Run a search. `categories` is an array of category names; empty means all.
    #[wasm_bindgen]
    pub fn search(&self, query: &str, categories: JsValue, top_k: usize) -> Result<JsValue, JsValue> {
        let filter: Vec<String> = if categories.is_undefined() || categories.is_null() {
            Vec::new()
        } else {
            from_value(categories).map_err(|e| e.to_string())?
        };

        let results = search(&self.index, &self.config, query, &filter, top_k);
        let output: Vec<SearchResultOutput> = results
            .iter()
            .map(|r| SearchResultOutput {
                id: &r.row.id,
                file_name: &r.row.file_name,
                category: &r.row.category,
                full_path: &r.row.full_path,
                tokens: &r.row.tokens,
                score: r.score,
                title: pretty_name(&r.row.file_name),
                tags: display_tags(&r.row.tokens),
            })
            .collect();

        to_value(&output).map_err(|e| e.to_string().into())
    }

    /// Distinct categories, sorted, for building filter controls.
    #[wasm_bindgen]
    pub fn categories(&self) -> Result<JsValue, JsValue> {
        to_value(&categories(&self.index)).map_err(|e| e.to_string().into())
    }

    /// The term set a query expands to, for debugging synonym tables.
    #[wasm_bindgen]
    pub fn expand(&self, query: &str) -> Result<JsValue, JsValue> {
        let terms: Vec<String> = expand(query, &self.config.synonyms).into_iter().collect();
        to_value(&terms).map_err(|e| e.to_string().into())
    }
}
