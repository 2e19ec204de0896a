//! Error handling example for placenames-rs
//!
//! This example demonstrates how errors and sparse data surface

use placenames_rs::loader::load_features_from_reader;
use placenames_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== placenames-rs Error Handling Example ===\n");

    // Example 1: Missing file
    println!("--- Example 1: Loading a missing file ---");
    match load_features_from_path("does/not/exist.json") {
        Ok(features) => println!("✓ Loaded {} features", features.len()),
        Err(e) => println!("✗ {e}"),
    }
    println!();

    // Example 2: Malformed payloads
    println!("--- Example 2: Malformed payloads ---");
    for payload in ["", "{", "{\"features\": 3}", "[{\"attributes\": []}]"] {
        match load_features_from_reader(payload.as_bytes()) {
            Ok(features) => println!("  {payload:?}: {} features", features.len()),
            Err(e) => println!("  {payload:?}: {e}"),
        }
    }
    println!();

    // Example 3: Sparse attributes fall back to sentinels
    println!("--- Example 3: Sparse attributes ---");
    let features = load_features_from_reader(
        br#"{"features":[{"attributes":{"OBJECTID":"7","NAME":null,"DESCRIPTION":"Biography: \n"}}]}"#
            .as_slice(),
    )?;
    for feature in &features {
        println!("  Name: {}", feature.display_name());
        println!("  Category: {}", feature.category_label());
        println!("  Named after: {}", feature.named_after());
        println!("  Map: {:?}", feature.map_url());
    }
    println!();

    // Example 4: Unknown option strings
    println!("--- Example 4: Parsing options ---");
    for raw in ["relevance", "category", "alphabetical"] {
        match raw.parse::<SortMode>() {
            Ok(mode) => println!("  sort {raw:?} -> {mode}"),
            Err(e) => println!("  sort {raw:?} -> {e}"),
        }
    }
    for raw in ["bio", "name", "everything"] {
        match raw.parse::<SearchScope>() {
            Ok(scope) => println!("  scope {raw:?} -> {scope}"),
            Err(e) => println!("  scope {raw:?} -> {e}"),
        }
    }

    Ok(())
}
