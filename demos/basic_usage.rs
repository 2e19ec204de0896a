//! Basic usage example for placenames-rs
//!
//! This example demonstrates how to:
//! - Load features from a captured query response
//! - Parse the DESCRIPTION field and build the "named after" label
//! - Rank features against a search query
//! - Compute dataset statistics
//!
//! Run with an optional path to your own capture:
//! `cargo run --example basic_usage -- response.json`

use placenames_rs::prelude::*;
use std::path::PathBuf;

fn dataset_path() -> PathBuf {
    std::env::args_os().nth(1).map(PathBuf::from).unwrap_or_else(|| {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("crates/placenames-core/tests/fixtures/placenames_sample.json")
    })
}

fn main() -> Result<()> {
    println!("=== placenames-rs Basic Usage Example ===\n");

    let path = dataset_path();
    println!("Loading {}...", path.display());
    let features = load_features_from_path(&path)?;
    println!("✓ Loaded {} features\n", features.len());

    // Example 1: List features
    println!("--- Example 1: List features ---");
    for (i, feature) in features.iter().take(5).enumerate() {
        println!(
            "{}. {} [{}] OBJECTID {}",
            i + 1,
            feature.display_name(),
            feature.category_label(),
            feature.object_id()
        );
    }
    println!();

    // Example 2: Parse a description
    println!("--- Example 2: Parse a description ---");
    let text = "Commemorated name: Cook\nTitle: Captain\nGiven names: James\nBiography: Navigator and explorer.";
    let parsed = parse_description(text);
    println!("Commemorated: {}", parsed.commemorated_name);
    println!("Biography: {}", parsed.biography);
    for entry in &parsed.labelled_values {
        println!("  {}: {}", entry.label, entry.value);
    }
    println!();

    // Example 3: Named-after labels for the dataset
    println!("--- Example 3: Named after ---");
    for feature in &features {
        println!("{} -> {}", feature.display_name(), feature.named_after());
    }
    println!();

    // Example 4: Relevance search
    println!("--- Example 4: Search \"cook\" ---");
    for hit in rank_by_relevance(&features, "cook") {
        if hit.score > 0 {
            println!("{:>5}  {}", hit.score, hit.feature.display_name());
        }
    }
    println!();

    // Example 5: Statistics
    println!("--- Example 5: Statistics ---");
    let stats = DatasetStats::from_features(&features);
    println!("Features: {}", stats.total_features);
    println!("Categories: {}", stats.total_categories);
    println!("Divisions: {}", stats.total_divisions);
    for c in &stats.category_distribution {
        println!("  {:>3}  {}", c.count, c.name);
    }

    Ok(())
}
