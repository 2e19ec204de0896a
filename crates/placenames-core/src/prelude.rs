// crates/placenames-core/src/prelude.rs
//! `use placenames_core::prelude::*;` for front-ends and demos.

pub use crate::client::{SearchPage, SearchRequest};
pub use crate::config::{ClientConfig, DEFAULT_SEARCH_LIMIT};
pub use crate::description::{
    build_named_after_label, format_biography_preview, parse_description, FieldLabel,
    NamedAfter, ParsedDescription, DEFAULT_PREVIEW_LEN, NOT_SPECIFIED, POPUP_PREVIEW_LEN,
};
pub use crate::error::{PlaceNamesError, Result};
pub use crate::loader::load_features_from_path;
pub use crate::model::{Facet, Feature};
pub use crate::search::{
    rank, rank_by_relevance, rank_features, ScoredFeature, SearchContext, SearchFilters,
    SearchScope, SortMode,
};
pub use crate::stats::DatasetStats;
pub use crate::summary::SummaryOutcome;

#[cfg(feature = "fetch")]
pub use crate::client::PlaceNamesClient;
#[cfg(feature = "fetch")]
pub use crate::summary::SummaryClient;
