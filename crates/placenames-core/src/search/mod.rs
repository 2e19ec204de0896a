// crates/placenames-core/src/search/mod.rs
//! # Relevance Ranker
//!
//! Pure, stateless ranking over an in-memory slice of features. Nothing is
//! cached between calls; front-ends call [`rank`] again on every change of
//! query or filters.
//!
//! Ordering with a query: score descending, then NAME (see
//! [`crate::text::compare_names`]), then OBJECTID, then input position.
//! Without a query the score term drops out.

mod context;
mod filter;
mod score;

pub use context::{SearchContext, SearchOutcome};
pub use filter::{matches_scope, SearchFilters, SearchScope, SortMode};
pub use score::{score_feature, Score};

use crate::model::{Facet, Feature};
use crate::text::{compare_names, normalize_text};
use std::cmp::Ordering;

/// One feature during a ranking pass.
#[derive(Clone, Copy, Debug)]
pub struct ScoredFeature<'a> {
    pub feature: &'a Feature,
    pub score: Score,
    /// Position in the input slice.
    pub index: usize,
}

/// NAME then OBJECTID.
pub fn compare_by_name_then_id(a: &Feature, b: &Feature) -> Ordering {
    compare_names(a.name(), b.name()).then_with(|| a.object_id().cmp(&b.object_id()))
}

/// Score descending, NAME, OBJECTID, input position.
pub fn compare_by_relevance(a: &ScoredFeature<'_>, b: &ScoredFeature<'_>) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| compare_by_name_then_id(a.feature, b.feature))
        .then_with(|| a.index.cmp(&b.index))
}

/// Category (unspecified last), NAME, OBJECTID, input position.
fn compare_by_category(a: &ScoredFeature<'_>, b: &ScoredFeature<'_>) -> Ordering {
    let by_category = match (a.feature.category(), b.feature.category()) {
        (Facet::Named(x), Facet::Named(y)) => compare_names(&x, &y),
        (x, y) => x.cmp(&y),
    };
    by_category
        .then_with(|| compare_by_name_then_id(a.feature, b.feature))
        .then_with(|| a.index.cmp(&b.index))
}

fn compare_by_name(a: &ScoredFeature<'_>, b: &ScoredFeature<'_>) -> Ordering {
    compare_by_name_then_id(a.feature, b.feature).then_with(|| a.index.cmp(&b.index))
}

/// Score every feature against `query` (normalized here) and order them.
///
/// With an empty query every score is zero and the order is NAME, OBJECTID.
pub fn rank_by_relevance<'a>(features: &'a [Feature], query: &str) -> Vec<ScoredFeature<'a>> {
    let q = normalize_text(query);
    let mut scored: Vec<_> = features
        .iter()
        .enumerate()
        .map(|(index, feature)| ScoredFeature {
            feature,
            score: score_feature(feature, &q),
            index,
        })
        .collect();
    scored.sort_by(compare_by_relevance);
    scored
}

/// Filter, score and sort.
///
/// A feature is kept when it passes every active filter and, for a non-empty
/// query, contains the query in one of the fields selected by the scope.
/// Kept features are always scored over all fields.
pub fn rank<'a>(
    features: &'a [Feature],
    query: &str,
    filters: &SearchFilters,
    sort: SortMode,
) -> Vec<ScoredFeature<'a>> {
    let q = normalize_text(query);

    let mut results: Vec<_> = features
        .iter()
        .enumerate()
        .filter(|(_, feature)| filters.accepts(feature, &q))
        .map(|(index, feature)| ScoredFeature {
            feature,
            score: score_feature(feature, &q),
            index,
        })
        .collect();

    match sort {
        SortMode::Relevance => results.sort_by(compare_by_relevance),
        SortMode::Name => results.sort_by(compare_by_name),
        SortMode::Category => results.sort_by(compare_by_category),
    }

    tracing::debug!(
        total = features.len(),
        matched = results.len(),
        query = %q,
        sort = %sort,
        "ranked features"
    );
    results
}

/// [`rank`] without the scores.
pub fn rank_features<'a>(
    features: &'a [Feature],
    query: &str,
    filters: &SearchFilters,
    sort: SortMode,
) -> Vec<&'a Feature> {
    rank(features, query, filters, sort)
        .into_iter()
        .map(|hit| hit.feature)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Attributes;

    fn feature(id: i64, name: &str) -> Feature {
        Feature {
            attributes: Attributes {
                object_id: id,
                name: Some(name.into()),
                ..Attributes::default()
            },
            geometry: None,
        }
    }

    fn names<'a>(hits: &[ScoredFeature<'a>]) -> Vec<&'a str> {
        hits.iter().map(|h| h.feature.name()).collect()
    }

    #[test]
    fn equal_scores_fall_back_to_name() {
        let features = vec![feature(5, "Cook Street"), feature(2, "cook place")];
        let hits = rank_by_relevance(&features, "cook");
        assert_eq!(hits[0].score, 800);
        assert_eq!(hits[1].score, 800);
        assert_eq!(names(&hits), vec!["cook place", "Cook Street"]);
    }

    #[test]
    fn equal_names_fall_back_to_id_then_position() {
        let features = vec![feature(9, "Dup"), feature(3, "Dup"), feature(3, "Dup")];
        let hits = rank_by_relevance(&features, "");
        let order: Vec<_> = hits.iter().map(|h| (h.feature.object_id(), h.index)).collect();
        assert_eq!(order, vec![(3, 1), (3, 2), (9, 0)]);
    }

    #[test]
    fn empty_query_is_default_order() {
        let features = vec![feature(1, "Zed"), feature(2, "Amy")];
        let hits = rank_by_relevance(&features, "   ");
        assert!(hits.iter().all(|h| h.score == 0));
        assert_eq!(names(&hits), vec!["Amy", "Zed"]);
    }

    #[test]
    fn rank_drops_non_matching() {
        let features = vec![feature(1, "Cook"), feature(2, "Mawson")];
        let hits = rank(&features, "cook", &SearchFilters::default(), SortMode::Relevance);
        assert_eq!(names(&hits), vec!["Cook"]);
    }

    #[test]
    fn name_sort_ignores_score() {
        let features = vec![feature(1, "Cook"), feature(2, "A Cook Lane")];
        let hits = rank(&features, "cook", &SearchFilters::default(), SortMode::Name);
        assert_eq!(names(&hits), vec!["A Cook Lane", "Cook"]);
    }

    #[test]
    fn category_sort_puts_unspecified_last() {
        let mut park = feature(1, "Zeta");
        park.attributes.category_name = Some("park".into());
        let mut street = feature(2, "Alpha");
        street.attributes.category_name = Some("Street".into());
        let bare = feature(3, "Aardvark");
        let features = vec![bare, street, park];
        let hits = rank(&features, "", &SearchFilters::default(), SortMode::Category);
        assert_eq!(names(&hits), vec!["Zeta", "Alpha", "Aardvark"]);
    }
}
