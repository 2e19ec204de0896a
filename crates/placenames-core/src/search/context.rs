// crates/placenames-core/src/search/context.rs
use super::{rank, ScoredFeature, SearchFilters, SortMode};
use crate::config::DEFAULT_SEARCH_LIMIT;
use crate::model::Feature;

/// Session search state: query, filters, sort and how many results are
/// currently materialized.
///
/// Owned by the front-end. The context holds no results; [`SearchContext::run`]
/// ranks from scratch each time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchContext {
    pub query: String,
    pub filters: SearchFilters,
    pub sort: SortMode,
    visible: usize,
    page_size: usize,
}

/// One evaluation of a [`SearchContext`].
#[derive(Clone, Debug)]
pub struct SearchOutcome<'a> {
    /// Number of eligible features before truncation.
    pub total: usize,
    /// The first `visible` results in order.
    pub shown: Vec<ScoredFeature<'a>>,
}

impl SearchOutcome<'_> {
    pub fn has_more(&self) -> bool {
        self.shown.len() < self.total
    }
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_SEARCH_LIMIT)
    }
}

impl SearchContext {
    pub fn with_page_size(page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            query: String::new(),
            filters: SearchFilters::default(),
            sort: SortMode::default(),
            visible: page_size,
            page_size,
        }
    }

    pub fn visible(&self) -> usize {
        self.visible
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// New query; collapses the visible window back to one page.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.visible = self.page_size;
    }

    /// New filters; collapses the visible window back to one page.
    pub fn set_filters(&mut self, filters: SearchFilters) {
        self.filters = filters;
        self.visible = self.page_size;
    }

    pub fn set_sort(&mut self, sort: SortMode) {
        self.sort = sort;
    }

    /// Materialize one more page.
    pub fn show_more(&mut self) {
        self.visible = self.visible.saturating_add(self.page_size);
    }

    /// Back to the session defaults: empty query, no filters, relevance sort.
    pub fn reset(&mut self) {
        *self = Self::with_page_size(self.page_size);
    }

    pub fn run<'a>(&self, features: &'a [Feature]) -> SearchOutcome<'a> {
        let mut shown = rank(features, &self.query, &self.filters, self.sort);
        let total = shown.len();
        shown.truncate(self.visible);
        SearchOutcome { total, shown }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Attributes;
    use crate::search::SearchScope;

    fn features(n: usize) -> Vec<Feature> {
        (0..n)
            .map(|i| Feature {
                attributes: Attributes {
                    object_id: i as i64,
                    name: Some(format!("Street {i:03}")),
                    ..Attributes::default()
                },
                geometry: None,
            })
            .collect()
    }

    #[test]
    fn pages_through_results() {
        let data = features(5);
        let mut ctx = SearchContext::with_page_size(2);
        let out = ctx.run(&data);
        assert_eq!(out.total, 5);
        assert_eq!(out.shown.len(), 2);
        assert!(out.has_more());

        ctx.show_more();
        ctx.show_more();
        let out = ctx.run(&data);
        assert_eq!(out.shown.len(), 5);
        assert!(!out.has_more());
    }

    #[test]
    fn new_query_collapses_window() {
        let mut ctx = SearchContext::with_page_size(2);
        ctx.show_more();
        assert_eq!(ctx.visible(), 4);
        ctx.set_query("street");
        assert_eq!(ctx.visible(), 2);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut ctx = SearchContext::default();
        ctx.set_query("cook");
        ctx.set_sort(SortMode::Category);
        ctx.set_filters(SearchFilters::default().with_scope(SearchScope::Name));
        ctx.show_more();
        ctx.reset();
        assert_eq!(ctx, SearchContext::default());
    }
}
