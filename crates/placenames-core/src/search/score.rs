// crates/placenames-core/src/search/score.rs
use crate::model::Feature;
use crate::text::normalize_opt;

/// Relevance score. Additive, zero for an empty query.
pub type Score = u32;

/// Points for a field that equals / starts with / contains the query.
#[derive(Clone, Copy, Debug)]
struct FieldWeights {
    exact: Score,
    prefix: Score,
    contains: Score,
}

const NAME_WEIGHTS: FieldWeights = FieldWeights {
    exact: 1000,
    prefix: 800,
    contains: 600,
};

const OTHER_NAME_WEIGHTS: FieldWeights = FieldWeights {
    exact: 550,
    prefix: 350,
    contains: 250,
};

const DESCRIPTION_COMMEMORATED: Score = 300;
const DESCRIPTION_FEATURE_NAME: Score = 250;
const DESCRIPTION_CONTAINS: Score = 100;

impl FieldWeights {
    /// Only the strongest of the three fires.
    #[inline]
    fn score(&self, field: &str, q: &str) -> Score {
        if field == q {
            self.exact
        } else if field.starts_with(q) {
            self.prefix
        } else if field.contains(q) {
            self.contains
        } else {
            0
        }
    }
}

/// Score one feature against an already normalized query.
///
/// NAME, OTHER_NAME and DESCRIPTION are scored independently and summed.
/// The description clauses are independent of each other as well, so a
/// `commemorated name: <q>` hit also collects the plain "contains" points.
///
/// ```rust
/// use placenames_core::model::Feature;
/// use placenames_core::search::score_feature;
///
/// let mut f = Feature::default();
/// f.attributes.name = Some("Cook Street".into());
/// f.attributes.description = Some("Named after James Cook".into());
/// assert_eq!(score_feature(&f, "cook"), 900);
/// assert_eq!(score_feature(&f, ""), 0);
/// ```
pub fn score_feature(feature: &Feature, normalized_query: &str) -> Score {
    let q = normalized_query;
    if q.is_empty() {
        return 0;
    }

    let attrs = &feature.attributes;
    let name = normalize_opt(attrs.name.as_deref());
    let other_name = normalize_opt(attrs.other_name.as_deref());
    let description = normalize_opt(attrs.description.as_deref());

    let mut score = NAME_WEIGHTS.score(&name, q) + OTHER_NAME_WEIGHTS.score(&other_name, q);

    if description.contains(&format!("commemorated name: {q}")) {
        score += DESCRIPTION_COMMEMORATED;
    }
    if description.contains(&format!("feature name: {q}")) {
        score += DESCRIPTION_FEATURE_NAME;
    }
    if description.contains(q) {
        score += DESCRIPTION_CONTAINS;
    }

    score
}
