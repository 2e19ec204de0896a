//! Defaults and the explicit client configuration value.
//!
//! Nothing in here is mutable at runtime. Front-ends build one
//! [`ClientConfig`] at startup (optionally overriding fields from flags or the
//! environment) and hand it to the clients.

use std::time::Duration;

/// ACT Government place names, FeatureServer layer 0.
pub const DEFAULT_LAYER_URL: &str =
    "https://services1.arcgis.com/E5n4f1VY84i0xSjy/ArcGIS/rest/services/ACTGOV_PLACENAMES/FeatureServer/0";

/// Page summary endpoint of the encyclopedia REST API.
pub const DEFAULT_SUMMARY_BASE_URL: &str = "https://en.wikipedia.org/api/rest_v1/page/summary";

/// Attribute fields requested from the layer.
pub const OUT_FIELDS: [&str; 7] = [
    "OBJECTID",
    "NAME",
    "CATEGORY_NAME",
    "DESCRIPTION",
    "GAZETTAL_INFORMATION",
    "OTHER_NAME",
    "DIVISION_CODE",
];

/// Server-side ordering shared by every feature query.
pub const ORDER_BY_NAME_THEN_ID: &str = "NAME ASC, OBJECTID ASC";

/// Records per page when dumping the full dataset.
pub const DEFAULT_PAGE_SIZE: usize = 1000;

/// Results materialized per "page" of a search.
pub const DEFAULT_SEARCH_LIMIT: usize = 80;

/// Minimum number of rows fetched for a ranked server-side search.
pub const MIN_RANKED_FETCH: usize = 200;

/// Over-fetch multiplier for ranked server-side searches.
pub const RANKED_FETCH_FACTOR: usize = 4;

/// Output spatial reference (WGS84 lon/lat).
pub const OUT_SPATIAL_REFERENCE: &str = "4326";

pub const REQUEST_TIMEOUT_SECS: u64 = 30;

pub const USER_AGENT: &str = concat!("placenames-rs/", env!("CARGO_PKG_VERSION"));

/// How many entries the "top" statistics lists keep.
pub const STATS_TOP_N: usize = 15;

/// Connection settings for the Feature Data Service and the Summary Service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub layer_url: String,
    pub summary_base_url: String,
    pub timeout: Duration,
    pub page_size: usize,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            layer_url: DEFAULT_LAYER_URL.to_string(),
            summary_base_url: DEFAULT_SUMMARY_BASE_URL.to_string(),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            page_size: DEFAULT_PAGE_SIZE,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn with_layer_url(mut self, url: impl Into<String>) -> Self {
        self.layer_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_summary_base_url(mut self, url: impl Into<String>) -> Self {
        self.summary_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Page size for full dumps. Zero is clamped to one.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_trims_trailing_slash() {
        let cfg = ClientConfig::default().with_layer_url("https://example.test/FeatureServer/0/");
        assert_eq!(cfg.layer_url, "https://example.test/FeatureServer/0");
        assert_eq!(cfg.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn zero_page_size_is_clamped() {
        assert_eq!(ClientConfig::default().with_page_size(0).page_size, 1);
    }
}
