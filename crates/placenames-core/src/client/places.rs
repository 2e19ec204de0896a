// crates/placenames-core/src/client/places.rs
use super::query::{
    category_params, object_id_params, page_params, Envelope, LayerInfo, QueryParams,
    QueryResponse, SearchPage, SearchRequest,
};
use crate::config::ClientConfig;
use crate::error::{PlaceNamesError, Result};
use crate::model::Feature;
use crate::search::rank_by_relevance;
use reqwest::blocking::Client;
use reqwest::Url;
use serde::de::DeserializeOwned;

/// Blocking client for the place names layer.
///
/// Construct one per configuration; it holds no other state.
#[derive(Debug, Clone)]
pub struct PlaceNamesClient {
    config: ClientConfig,
    http: Client,
}

impl PlaceNamesClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = super::http_client(&config)?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Layer metadata (`<layer>?f=json`).
    pub fn layer_info(&self) -> Result<LayerInfo> {
        let url = self.url("", &[("f", "json".to_string())])?;
        self.get_json(url, "Failed to load layer info", "ArcGIS layer info error")
    }

    /// Distinct category names, trimmed, in server order, without repeats.
    pub fn categories(&self) -> Result<Vec<String>> {
        let response = self.query_raw(&category_params())?;
        let mut out: Vec<String> = Vec::new();
        for value in response
            .features
            .iter()
            .filter_map(|f| f.attributes.category_name.as_deref())
            .map(str::trim)
            .filter(|v| !v.is_empty())
        {
            if !out.iter().any(|seen| seen == value) {
                out.push(value.to_string());
            }
        }
        Ok(out)
    }

    /// Server-side filtered search, re-ranked locally and cut to `limit`.
    pub fn search_places(&self, request: &SearchRequest) -> Result<SearchPage> {
        let response = self.query_raw(&request.to_params())?;
        let exceeded_transfer_limit = response.exceeded_transfer_limit;

        let mut features = reorder(response.features, &request.query);
        features.truncate(request.limit);

        tracing::debug!(
            query = %request.query,
            category = %request.category,
            returned = features.len(),
            exceeded_transfer_limit,
            "search_places"
        );

        Ok(SearchPage {
            count: features.len(),
            features,
            exceeded_transfer_limit,
        })
    }

    /// One feature by OBJECTID, if it exists.
    pub fn feature_by_id(&self, object_id: i64) -> Result<Option<Feature>> {
        let response = self.query_raw(&object_id_params(object_id))?;
        Ok(response.features.into_iter().next())
    }

    /// Every feature of the layer, one page at a time.
    ///
    /// `progress` receives the running total after each page.
    pub fn fetch_all_features(&self, mut progress: impl FnMut(usize)) -> Result<Vec<Feature>> {
        let page_size = self.config.page_size;
        let mut offset = 0;
        let mut all = Vec::new();

        loop {
            let page = self.query_raw(&page_params(offset, page_size))?;
            let received = page.features.len();
            all.extend(page.features);
            progress(all.len());
            tracing::debug!(offset, received, total = all.len(), "fetched page");

            if !page.exceeded_transfer_limit {
                break;
            }
            if received == 0 {
                tracing::warn!(offset, "server reported more data but returned an empty page");
                break;
            }
            offset += page_size;
        }

        tracing::info!(total = all.len(), "fetched full dataset");
        Ok(all)
    }

    /// `GET <layer>/query` with `params`; empty values are left out.
    pub fn query_raw(&self, params: &QueryParams) -> Result<QueryResponse> {
        let url = self.url("/query", params)?;
        self.get_json(url, "Query failed", "ArcGIS query error")
    }

    fn url(&self, suffix: &str, params: &[(&'static str, String)]) -> Result<Url> {
        let base = format!("{}{}", self.config.layer_url, suffix);
        let mut url = Url::parse(&base)
            .map_err(|e| PlaceNamesError::InvalidData(format!("bad layer URL {base}: {e}")))?;
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params.iter().filter(|(_, v)| !v.is_empty()) {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        status_context: &'static str,
        error_fallback: &str,
    ) -> Result<T> {
        tracing::trace!(%url, "GET");
        let response = self.http.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(PlaceNamesError::Status {
                context: status_context,
                status: status.as_u16(),
            });
        }

        let envelope: Envelope<T> = response.json()?;
        match envelope.error {
            Some(err) => Err(PlaceNamesError::Service(err.describe(error_fallback))),
            None => Ok(envelope.body),
        }
    }
}

/// Put features into relevance order for `query`.
fn reorder(features: Vec<Feature>, query: &str) -> Vec<Feature> {
    let order: Vec<usize> = rank_by_relevance(&features, query)
        .iter()
        .map(|hit| hit.index)
        .collect();
    let mut slots: Vec<Option<Feature>> = features.into_iter().map(Some).collect();
    order.into_iter().filter_map(|i| slots[i].take()).collect()
}
