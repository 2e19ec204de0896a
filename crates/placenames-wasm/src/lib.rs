//! placenames-wasm: WebAssembly bindings for placenames-core
//!
//! The browser fetches the layer itself (the query endpoint is CORS-enabled);
//! this crate does the work on the returned features: parsing the
//! DESCRIPTION field, relevance ranking with filters, and dataset statistics.
//!
//! What it provides
//! ----------------
//! - Free functions: `parse_description(text)`, `build_named_after_label(...)`,
//!   `format_biography_preview(text, max_len?)`, `score_feature(feature, query)`
//! - A `PlaceNames` class holding a loaded feature array:
//!   - `new PlaceNames(features)`
//!   - `search(query, { categories, division, scope, sort, limit })`
//!   - `stats()`, `categories()`, `len()`
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { PlaceNames } from 'placenames-wasm';
//!
//! async function main() {
//!   await init();
//!   const res = await fetch(layerUrl + '/query?where=1%3D1&outFields=*&f=json');
//!   const { features } = await res.json();
//!   const db = new PlaceNames(features);
//!   console.log(db.search('cook', { sort: 'relevance', limit: 20 }));
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - Features use the service's wire shape: `{ attributes: { OBJECTID, NAME, ... }, geometry }`.
//! - Functions returning `JsValue` hand back plain JSON-compatible objects and
//!   raise a JS error on malformed input.
use serde::{Deserialize, Serialize};
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

use placenames_core::description::DEFAULT_PREVIEW_LEN;
use placenames_core::search::SearchOutcome;
use placenames_core::text::normalize_text;
use placenames_core::{
    DatasetStats, Feature, NamedAfter, SearchContext, SearchFilters, SearchScope, SortMode,
};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"placenames-wasm ready".into());
}

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/* --------------------------------------------------------------------------
   Description helpers
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn parse_description(text: &str) -> Result<JsValue, JsValue> {
    to_value(&placenames_core::parse_description(text)).map_err(js_error)
}

#[wasm_bindgen]
pub fn build_named_after_label(
    commemorated_name: &str,
    given_names: &str,
    title: &str,
    fallback_name: &str,
) -> String {
    placenames_core::build_named_after_label(&NamedAfter {
        commemorated_name,
        given_names,
        title,
        fallback_name,
    })
}

/// Defaults to the list-view length when `max_len` is omitted.
#[wasm_bindgen]
pub fn format_biography_preview(text: &str, max_len: Option<usize>) -> String {
    placenames_core::format_biography_preview(text, max_len.unwrap_or(DEFAULT_PREVIEW_LEN))
}

#[wasm_bindgen]
pub fn score_feature(feature: JsValue, query: &str) -> Result<u32, JsValue> {
    let feature: Feature = from_value(feature).map_err(js_error)?;
    Ok(placenames_core::score_feature(&feature, &normalize_text(query)))
}

/* --------------------------------------------------------------------------
   Loaded dataset
-------------------------------------------------------------------------- */

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SearchOptions {
    categories: Vec<String>,
    division: Option<String>,
    scope: SearchScope,
    sort: SortMode,
    limit: Option<usize>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResultView<'a> {
    object_id: i64,
    name: &'a str,
    category: &'a str,
    named_after: String,
    preview: String,
    score: u32,
    map_url: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchView<'a> {
    total: usize,
    has_more: bool,
    results: Vec<ResultView<'a>>,
}

impl<'a> From<SearchOutcome<'a>> for SearchView<'a> {
    fn from(outcome: SearchOutcome<'a>) -> Self {
        let has_more = outcome.has_more();
        let results = outcome
            .shown
            .iter()
            .map(|hit| {
                let f = hit.feature;
                ResultView {
                    object_id: f.object_id(),
                    name: f.display_name(),
                    category: f.category_label(),
                    named_after: f.named_after(),
                    preview: placenames_core::format_biography_preview(
                        &f.parsed_description().biography,
                        DEFAULT_PREVIEW_LEN,
                    ),
                    score: hit.score,
                    map_url: f.map_url(),
                }
            })
            .collect();
        Self {
            total: outcome.total,
            has_more,
            results,
        }
    }
}

#[wasm_bindgen]
pub struct PlaceNames {
    features: Vec<Feature>,
}

#[wasm_bindgen]
impl PlaceNames {
    /// Accepts either a feature array or a full query response object.
    #[wasm_bindgen(constructor)]
    pub fn new(features: JsValue) -> Result<PlaceNames, JsValue> {
        let features = if js_sys::Array::is_array(&features) {
            from_value::<Vec<Feature>>(features).map_err(js_error)?
        } else {
            #[derive(Deserialize)]
            struct Response {
                #[serde(default)]
                features: Vec<Feature>,
            }
            from_value::<Response>(features).map_err(js_error)?.features
        };
        Ok(PlaceNames { features })
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn search(&self, query: &str, options: JsValue) -> Result<JsValue, JsValue> {
        let options: SearchOptions = if options.is_undefined() || options.is_null() {
            SearchOptions::default()
        } else {
            from_value(options).map_err(js_error)?
        };

        let filters = SearchFilters::from_selection(
            options.categories.iter().map(String::as_str),
            options.division.as_deref(),
            options.scope,
        );

        let mut ctx = match options.limit {
            Some(limit) => SearchContext::with_page_size(limit),
            None => SearchContext::default(),
        };
        ctx.set_query(query);
        ctx.set_filters(filters);
        ctx.set_sort(options.sort);

        to_value(&SearchView::from(ctx.run(&self.features))).map_err(js_error)
    }

    pub fn stats(&self) -> Result<JsValue, JsValue> {
        to_value(&DatasetStats::from_features(&self.features)).map_err(js_error)
    }

    /// Distinct category names, sorted.
    pub fn categories(&self) -> Vec<String> {
        let mut names: Vec<String> = DatasetStats::from_features(&self.features)
            .category_distribution
            .into_iter()
            .map(|c| c.name)
            .collect();
        names.sort();
        names
    }
}
