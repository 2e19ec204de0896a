//! Advanced filtering example for placenames-rs
//!
//! This example demonstrates:
//! - Category and division facets
//! - Search scopes
//! - Sort modes
//! - Paging with a search context

use placenames_rs::prelude::*;
use std::path::PathBuf;

fn main() -> Result<()> {
    println!("=== placenames-rs Advanced Filtering Example ===\n");

    let path = std::env::args_os().nth(1).map(PathBuf::from).unwrap_or_else(|| {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("crates/placenames-core/tests/fixtures/placenames_sample.json")
    });
    let features = load_features_from_path(path)?;

    // Example 1: One category
    println!("--- Example 1: Streets matching \"cook\" ---");
    let filters = SearchFilters::default().with_category("Street");
    print_hits(&rank(&features, "cook", &filters, SortMode::Relevance));

    // Example 2: Features with no category
    println!("--- Example 2: Uncategorised features ---");
    let filters = SearchFilters::default().with_category(Facet::Unspecified);
    print_hits(&rank(&features, "", &filters, SortMode::Name));

    // Example 3: Biography scope
    println!("--- Example 3: \"explorer\" in biographies only ---");
    let filters = SearchFilters::default().with_scope(SearchScope::Biography);
    print_hits(&rank(&features, "explorer", &filters, SortMode::Relevance));

    // Example 4: Sort by category
    println!("--- Example 4: Everything, by category ---");
    print_hits(&rank(&features, "", &SearchFilters::default(), SortMode::Category));

    // Example 5: Paging
    println!("--- Example 5: Paging two at a time ---");
    let mut ctx = SearchContext::with_page_size(2);
    ctx.set_query("cook");
    loop {
        let outcome = ctx.run(&features);
        println!("  showing {} of {}", outcome.shown.len(), outcome.total);
        if !outcome.has_more() {
            break;
        }
        ctx.show_more();
    }

    Ok(())
}

fn print_hits(hits: &[ScoredFeature<'_>]) {
    for hit in hits {
        println!(
            "  {:>5}  {} [{}] {}",
            hit.score,
            hit.feature.display_name(),
            hit.feature.category_label(),
            hit.feature.division()
        );
    }
    println!();
}
