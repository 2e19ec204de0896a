// crates/placenames-core/src/client/query.rs
//! Query construction and response shapes for the feature layer.
//!
//! Everything here is pure so it can be tested without a network.

use crate::config::{
    DEFAULT_SEARCH_LIMIT, MIN_RANKED_FETCH, ORDER_BY_NAME_THEN_ID, OUT_FIELDS,
    OUT_SPATIAL_REFERENCE, RANKED_FETCH_FACTOR,
};
use crate::model::Feature;
use serde::{Deserialize, Serialize};

/// Ordered `key=value` pairs for a `/query` request.
pub type QueryParams = Vec<(&'static str, String)>;

/// Parameters of a server-side filtered search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub category: String,
    pub limit: usize,
    pub offset: usize,
    pub include_geometry: bool,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: String::new(),
            limit: DEFAULT_SEARCH_LIMIT,
            offset: 0,
            include_geometry: true,
        }
    }
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn without_geometry(mut self) -> Self {
        self.include_geometry = false;
        self
    }

    /// Rows to request. Ranked searches over-fetch so strong matches are not
    /// cut off by the server's alphabetical order.
    pub fn record_count(&self) -> usize {
        if self.query.trim().is_empty() {
            self.limit
        } else {
            (self.limit * RANKED_FETCH_FACTOR).max(MIN_RANKED_FETCH)
        }
    }

    pub fn where_clause(&self) -> String {
        build_where_clause(&self.query, &self.category)
    }

    pub fn to_params(&self) -> QueryParams {
        let mut params = vec![
            ("where", self.where_clause()),
            ("outFields", OUT_FIELDS.join(",")),
            ("orderByFields", ORDER_BY_NAME_THEN_ID.to_string()),
            ("resultRecordCount", self.record_count().to_string()),
            ("resultOffset", self.offset.to_string()),
            ("returnGeometry", self.include_geometry.to_string()),
        ];
        if self.include_geometry {
            params.push(("outSR", OUT_SPATIAL_REFERENCE.to_string()));
        }
        params.push(("f", "json".to_string()));
        params
    }
}

/// Double single quotes for use inside a SQL string literal.
pub fn escape_sql_literal(value: &str) -> String {
    value.replace('\'', "''")
}

/// `1=1`, plus a case-insensitive `LIKE` over NAME/DESCRIPTION/OTHER_NAME
/// for a query and an equality test for a category.
pub fn build_where_clause(query: &str, category: &str) -> String {
    let mut parts = vec!["1=1".to_string()];

    let query = query.trim();
    if !query.is_empty() {
        let q = escape_sql_literal(query);
        parts.push(format!(
            "(UPPER(NAME) LIKE UPPER('%{q}%') OR UPPER(DESCRIPTION) LIKE UPPER('%{q}%') OR UPPER(OTHER_NAME) LIKE UPPER('%{q}%'))"
        ));
    }

    let category = category.trim();
    if !category.is_empty() {
        parts.push(format!("CATEGORY_NAME = '{}'", escape_sql_literal(category)));
    }

    parts.join(" AND ")
}

/// One page of a full-dataset dump.
pub fn page_params(offset: usize, page_size: usize) -> QueryParams {
    vec![
        ("where", "1=1".to_string()),
        ("outFields", OUT_FIELDS.join(",")),
        ("orderByFields", ORDER_BY_NAME_THEN_ID.to_string()),
        ("resultRecordCount", page_size.to_string()),
        ("resultOffset", offset.to_string()),
        ("returnGeometry", "true".to_string()),
        ("outSR", OUT_SPATIAL_REFERENCE.to_string()),
        ("f", "json".to_string()),
    ]
}

/// A single feature by OBJECTID.
pub fn object_id_params(object_id: i64) -> QueryParams {
    vec![
        ("where", format!("OBJECTID = {object_id}")),
        ("outFields", OUT_FIELDS.join(",")),
        ("returnGeometry", "true".to_string()),
        ("outSR", OUT_SPATIAL_REFERENCE.to_string()),
        ("f", "json".to_string()),
    ]
}

/// Distinct non-null categories, alphabetically.
pub fn category_params() -> QueryParams {
    vec![
        ("where", "CATEGORY_NAME IS NOT NULL".to_string()),
        ("outFields", "CATEGORY_NAME".to_string()),
        ("orderByFields", "CATEGORY_NAME ASC".to_string()),
        ("returnDistinctValues", "true".to_string()),
        ("returnGeometry", "false".to_string()),
        ("f", "json".to_string()),
    ]
}

/// The `error` object the service embeds in a 200 response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceError {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub details: Vec<Option<String>>,
}

impl ServiceError {
    /// Joined details, else the message, else `fallback`.
    pub fn describe(&self, fallback: &str) -> String {
        let details: Vec<&str> = self
            .details
            .iter()
            .flatten()
            .map(String::as_str)
            .filter(|d| !d.is_empty())
            .collect();
        if !details.is_empty() {
            return details.join("; ");
        }
        match self.message.as_deref() {
            Some(m) if !m.is_empty() => m.to_string(),
            _ => fallback.to_string(),
        }
    }
}

/// A response body that may carry an error envelope instead of data.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    #[serde(default)]
    pub error: Option<ServiceError>,
    #[serde(flatten)]
    pub body: T,
}

/// Body of a `/query` response.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResponse {
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub exceeded_transfer_limit: bool,
}

/// The parts of the layer description we use.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub geometry_type: Option<String>,
    #[serde(default)]
    pub max_record_count: Option<u64>,
    #[serde(default)]
    pub copyright_text: Option<String>,
}

/// A ranked page from [`super::PlaceNamesClient::search_places`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    pub features: Vec<Feature>,
    pub count: usize,
    pub exceeded_transfer_limit: bool,
}
