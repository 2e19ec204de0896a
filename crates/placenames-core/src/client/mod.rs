// crates/placenames-core/src/client/mod.rs
//! # Dataset Access Layer
//!
//! Talks to the ArcGIS FeatureServer layer that publishes the place names.
//! Query building and response shapes ([`query`]) are always compiled; the
//! blocking HTTP client needs the `fetch` feature.

pub mod query;

#[cfg(feature = "fetch")]
mod places;

#[cfg(feature = "fetch")]
pub use places::PlaceNamesClient;

pub use query::{LayerInfo, QueryParams, QueryResponse, SearchPage, SearchRequest, ServiceError};

#[cfg(feature = "fetch")]
pub(crate) fn http_client(
    config: &crate::config::ClientConfig,
) -> crate::error::Result<reqwest::blocking::Client> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(config.timeout)
        .build()?;
    Ok(client)
}
