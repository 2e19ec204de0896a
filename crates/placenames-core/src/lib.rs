// crates/placenames-core/src/lib.rs
//! placenames-core
//! ===============
//!
//! Search and exploration core for the ACT Government place names layer.
//!
//! - [`description`]: tolerant parser for the semi-structured DESCRIPTION field
//! - [`search`]: relevance scoring, filters and deterministic result ordering
//! - [`stats`]: dataset-wide counts
//! - [`client`] / [`summary`]: the two remote services (`fetch` feature)
//! - [`loader`]: read a captured query response from disk
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod client;
pub mod config;
pub mod description;
pub mod error;
pub mod loader;
pub mod model;
pub mod prelude;
pub mod search;
pub mod stats;
pub mod summary;
pub mod text;

// Re-exports
pub use crate::config::ClientConfig;
pub use crate::description::{
    build_named_after_label, format_biography_preview, parse_description, FieldLabel,
    LabelledValue, NamedAfter, ParsedDescription, NOT_SPECIFIED,
};
pub use crate::error::{PlaceNamesError, Result};
pub use crate::model::{Attributes, Facet, Feature, Geometry};
pub use crate::search::{
    rank, rank_by_relevance, rank_features, score_feature, ScoredFeature, SearchContext,
    SearchFilters, SearchScope, SortMode,
};
pub use crate::stats::DatasetStats;

#[cfg(feature = "fetch")]
pub use crate::client::PlaceNamesClient;
#[cfg(feature = "fetch")]
pub use crate::summary::SummaryClient;
