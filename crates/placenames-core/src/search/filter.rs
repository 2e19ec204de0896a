// crates/placenames-core/src/search/filter.rs
use crate::error::PlaceNamesError;
use crate::model::{Facet, Feature};
use crate::text::{normalize_opt, normalize_text, trim_space};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Which text fields a query is matched against when deciding eligibility.
///
/// Scope only decides *whether* a feature is a result. Eligible features are
/// always scored over all fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchScope {
    #[default]
    All,
    /// NAME and OTHER_NAME.
    Name,
    /// The parsed biography.
    Biography,
}

/// Result ordering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    #[default]
    Relevance,
    Name,
    Category,
}

impl SearchScope {
    pub fn as_str(self) -> &'static str {
        match self {
            SearchScope::All => "all",
            SearchScope::Name => "name",
            SearchScope::Biography => "biography",
        }
    }
}

impl SortMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::Relevance => "relevance",
            SortMode::Name => "name",
            SortMode::Category => "category",
        }
    }
}

impl fmt::Display for SearchScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchScope {
    type Err = PlaceNamesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_text(s).as_str() {
            "all" | "" => Ok(SearchScope::All),
            "name" => Ok(SearchScope::Name),
            "biography" | "bio" => Ok(SearchScope::Biography),
            other => Err(PlaceNamesError::InvalidData(format!(
                "unknown search scope '{other}' (expected all, name or biography)"
            ))),
        }
    }
}

impl FromStr for SortMode {
    type Err = PlaceNamesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_text(s).as_str() {
            "relevance" | "" => Ok(SortMode::Relevance),
            "name" => Ok(SortMode::Name),
            "category" => Ok(SortMode::Category),
            other => Err(PlaceNamesError::InvalidData(format!(
                "unknown sort mode '{other}' (expected relevance, name or category)"
            ))),
        }
    }
}

/// Active filters. The default accepts every feature.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchFilters {
    /// Accepted categories; empty means any.
    pub categories: BTreeSet<Facet>,
    /// Exact division, if set.
    pub division: Option<Facet>,
    pub scope: SearchScope,
}

impl SearchFilters {
    /// Filters from front-end selections given as plain strings.
    ///
    /// Blank strings mean "no filter", not the unspecified bucket; pass
    /// [`Facet::Unspecified`] through [`Self::with_category`] for that.
    pub fn from_selection<'a>(
        categories: impl IntoIterator<Item = &'a str>,
        division: Option<&str>,
        scope: SearchScope,
    ) -> Self {
        let mut filters = Self::default().with_scope(scope);
        for category in categories.into_iter().filter(|c| !trim_space(c).is_empty()) {
            filters = filters.with_category(category);
        }
        if let Some(division) = division.filter(|d| !trim_space(d).is_empty()) {
            filters = filters.with_division(division);
        }
        filters
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.division.is_none()
    }

    pub fn with_category(mut self, category: impl Into<Facet>) -> Self {
        self.categories.insert(category.into());
        self
    }

    pub fn with_division(mut self, division: impl Into<Facet>) -> Self {
        self.division = Some(division.into());
        self
    }

    pub fn with_scope(mut self, scope: SearchScope) -> Self {
        self.scope = scope;
        self
    }

    /// Category and division checks only.
    pub fn accepts_facets(&self, feature: &Feature) -> bool {
        if !self.categories.is_empty() && !self.categories.contains(&feature.category()) {
            return false;
        }
        match &self.division {
            Some(division) => *division == feature.division(),
            None => true,
        }
    }

    /// Full eligibility: facets, then the scoped substring test.
    ///
    /// An empty `normalized_query` skips the text test.
    pub fn accepts(&self, feature: &Feature, normalized_query: &str) -> bool {
        self.accepts_facets(feature) && matches_scope(feature, normalized_query, self.scope)
    }
}

/// Substring eligibility of `feature` for `q` within `scope`.
pub fn matches_scope(feature: &Feature, q: &str, scope: SearchScope) -> bool {
    if q.is_empty() {
        return true;
    }
    let attrs = &feature.attributes;
    let name_hit = || {
        normalize_opt(attrs.name.as_deref()).contains(q)
            || normalize_opt(attrs.other_name.as_deref()).contains(q)
    };
    match scope {
        SearchScope::All => {
            name_hit() || normalize_opt(attrs.description.as_deref()).contains(q)
        }
        SearchScope::Name => name_hit(),
        SearchScope::Biography => normalize_text(&feature.parsed_description().biography).contains(q),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Attributes;

    fn feature(name: &str, category: Option<&str>, division: Option<&str>, desc: &str) -> Feature {
        Feature {
            attributes: Attributes {
                name: Some(name.into()),
                category_name: category.map(Into::into),
                division_code: division.map(Into::into),
                description: Some(desc.into()),
                ..Attributes::default()
            },
            geometry: None,
        }
    }

    #[test]
    fn parse_modes() {
        assert_eq!("Name".parse::<SearchScope>().unwrap(), SearchScope::Name);
        assert_eq!(" BIOGRAPHY ".parse::<SearchScope>().unwrap(), SearchScope::Biography);
        assert_eq!("category".parse::<SortMode>().unwrap(), SortMode::Category);
        assert!("newest".parse::<SortMode>().is_err());
        assert!("everything".parse::<SearchScope>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for scope in [SearchScope::All, SearchScope::Name, SearchScope::Biography] {
            assert_eq!(scope.to_string().parse::<SearchScope>().unwrap(), scope);
        }
    }

    #[test]
    fn category_set_membership() {
        let park = feature("A", Some("Park"), None, "");
        let street = feature("B", Some("Street"), None, "");
        let bare = feature("C", None, None, "");
        let filters = SearchFilters::default().with_category("Park");
        assert!(filters.accepts_facets(&park));
        assert!(!filters.accepts_facets(&street));
        assert!(!filters.accepts_facets(&bare));

        let filters = SearchFilters::default().with_category(Facet::Unspecified);
        assert!(filters.accepts_facets(&bare));
    }

    #[test]
    fn blank_selections_do_not_filter() {
        let park = feature("A", Some("Park"), None, "");
        let bare = feature("B", None, None, "");

        let filters = SearchFilters::from_selection(["", "  "], Some(""), SearchScope::All);
        assert!(filters.is_empty());
        assert!(filters.accepts_facets(&park));
        assert!(filters.accepts_facets(&bare));

        let filters = SearchFilters::from_selection(["Park", ""], Some(" "), SearchScope::Name);
        assert_eq!(filters.categories.len(), 1);
        assert_eq!(filters.division, None);
        assert_eq!(filters.scope, SearchScope::Name);
        assert!(filters.accepts_facets(&park));
        assert!(!filters.accepts_facets(&bare));
    }

    #[test]
    fn division_is_exact() {
        let f = feature("A", None, Some("Campbell"), "");
        assert!(SearchFilters::default().with_division("Campbell").accepts_facets(&f));
        assert!(!SearchFilters::default().with_division("Camp").accepts_facets(&f));
    }

    #[test]
    fn scope_restricts_fields() {
        let f = feature(
            "Mawson Drive",
            None,
            None,
            "Commemorated name: Mawson\nBiography: Antarctic explorer.",
        );
        assert!(matches_scope(&f, "antarctic", SearchScope::All));
        assert!(!matches_scope(&f, "antarctic", SearchScope::Name));
        assert!(matches_scope(&f, "antarctic", SearchScope::Biography));
        assert!(matches_scope(&f, "drive", SearchScope::Name));
        assert!(!matches_scope(&f, "drive", SearchScope::Biography));
        assert!(matches_scope(&f, "", SearchScope::Biography));
    }
}
