// crates/placenames-core/src/summary.rs
//! # Summary Service accessor
//!
//! Looks up a short encyclopedia summary for the person or thing a place is
//! named after. The subject comes from
//! [`crate::description::build_named_after_label`]; the
//! [`NOT_SPECIFIED`](crate::description::NOT_SPECIFIED) sentinel means there
//! is nothing to look up.

use crate::description::NOT_SPECIFIED;
use serde::{Deserialize, Serialize};

/// A found summary page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub title: String,
    pub extract: String,
    pub thumbnail: Option<String>,
    pub page_url: String,
    pub description: String,
}

/// Result of a lookup that reached the service (or was skipped).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "kebab-case")]
pub enum SummaryOutcome {
    Found(Summary),
    NotFound,
    Disambiguation,
}

/// Raw page summary as returned by the REST endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummaryPayload {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub extract: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<Thumbnail>,
    #[serde(default)]
    pub content_urls: Option<ContentUrls>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Thumbnail {
    pub source: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentUrls {
    pub desktop: Option<PageUrls>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageUrls {
    pub page: Option<String>,
}

impl SummaryPayload {
    pub fn into_outcome(self) -> SummaryOutcome {
        if self.kind.as_deref() == Some("disambiguation") {
            return SummaryOutcome::Disambiguation;
        }
        SummaryOutcome::Found(Summary {
            title: self.title.unwrap_or_default(),
            extract: self.extract.unwrap_or_default(),
            thumbnail: self.thumbnail.and_then(|t| t.source),
            page_url: self
                .content_urls
                .and_then(|c| c.desktop)
                .and_then(|d| d.page)
                .unwrap_or_default(),
            description: self.description.unwrap_or_default(),
        })
    }
}

/// Whether `term` names something worth looking up.
pub fn is_lookup_subject(term: &str) -> bool {
    let term = term.trim();
    !term.is_empty() && term != NOT_SPECIFIED
}

#[cfg(feature = "fetch")]
pub use http::{summary_url, SummaryClient};

#[cfg(feature = "fetch")]
mod http {
    use super::{is_lookup_subject, SummaryOutcome, SummaryPayload};
    use crate::config::ClientConfig;
    use crate::error::{PlaceNamesError, Result};
    use reqwest::blocking::Client;
    use reqwest::{StatusCode, Url};

    /// `<base>/<term>?redirect=true`, with `term` encoded as one path segment.
    pub fn summary_url(base: &str, term: &str) -> Result<Url> {
        let mut url = Url::parse(base)
            .map_err(|e| PlaceNamesError::InvalidData(format!("bad summary URL {base}: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| PlaceNamesError::InvalidData(format!("summary URL {base} cannot take a path")))?
            .push(term);
        url.query_pairs_mut().append_pair("redirect", "true");
        Ok(url)
    }

    /// Blocking client for the page summary endpoint.
    #[derive(Debug, Clone)]
    pub struct SummaryClient {
        base_url: String,
        http: Client,
    }

    impl SummaryClient {
        pub fn new(config: &ClientConfig) -> Result<Self> {
            Ok(Self {
                base_url: config.summary_base_url.clone(),
                http: crate::client::http_client(config)?,
            })
        }

        /// Look up `primary`, retrying with `fallback` when the first is missing.
        ///
        /// An empty or [`NOT_SPECIFIED`](crate::description::NOT_SPECIFIED)
        /// primary is `NotFound` without a request.
        pub fn lookup(&self, primary: &str, fallback: &str) -> Result<SummaryOutcome> {
            if !is_lookup_subject(primary) {
                return Ok(SummaryOutcome::NotFound);
            }

            let mut payload = self.fetch(primary)?;
            if payload.is_none() && !fallback.is_empty() && fallback != primary {
                tracing::debug!(primary, fallback, "summary not found, trying fallback");
                payload = self.fetch(fallback)?;
            }

            Ok(match payload {
                Some(p) => p.into_outcome(),
                None => SummaryOutcome::NotFound,
            })
        }

        /// `Ok(None)` on 404.
        fn fetch(&self, term: &str) -> Result<Option<SummaryPayload>> {
            let url = summary_url(&self.base_url, term)?;
            tracing::debug!(%url, "summary lookup");
            let response = self.http.get(url).send()?;
            let status = response.status();
            if status == StatusCode::NOT_FOUND {
                return Ok(None);
            }
            if !status.is_success() {
                return Err(PlaceNamesError::Status {
                    context: "Summary request failed",
                    status: status.as_u16(),
                });
            }
            Ok(Some(response.json()?))
        }
    }

}
