//! placenames: Command-line explorer for the ACT place names layer
//!
//! Usage examples
//! --------------
//!
//! - Ranked search over the full dataset
//!   $ placenames search cook
//!
//! - Filters, scope and sort
//!   $ placenames search --category Street --division Campbell --sort name
//!   $ placenames search --scope biography antarctic
//!
//! - Let the server filter (faster, single category only)
//!   $ placenames search --server cook
//!
//! - One feature in full, with an encyclopedia summary
//!   $ placenames show 1234 --summary
//!
//! - Offline against a captured response
//!   $ placenames --input response.json stats
//!
//! Data source
//! -----------
//!
//! ACT Government via ACTmapi / ArcGIS Online, licensed CC BY 4.0. Use
//! `--layer-url` (or `PLACENAMES_LAYER_URL`) to point at another copy of the
//! layer.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::{bail, Context};
use clap::Parser;
use placenames_core::client::SearchRequest;
use placenames_core::description::{format_biography_preview, DEFAULT_PREVIEW_LEN};
use placenames_core::loader::load_features_from_path;
use placenames_core::search::{ScoredFeature, SearchContext, SearchFilters};
use placenames_core::stats::{DatasetStats, NameCount};
use placenames_core::summary::SummaryOutcome;
use placenames_core::{ClientConfig, Facet, Feature, PlaceNamesClient, SummaryClient};
use tracing::Level;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::default().with_layer_url(args.layer_url.as_str());
    let source = Source::new(args.input.as_deref(), config)?;

    match args.command {
        Commands::Search {
            query,
            categories,
            division,
            scope,
            sort,
            limit,
            server,
        } => {
            if server {
                if categories.len() > 1 || division.is_some() {
                    tracing::warn!("--server filters on a single category only; other filters ignored");
                }
                let mut request = SearchRequest::new(query.as_str()).with_limit(limit);
                if let Some(category) = categories.iter().find(|c| !c.trim().is_empty()) {
                    request = request.with_category(category.as_str());
                }
                let page = source.client.search_places(&request)?;
                for (i, feature) in page.features.iter().enumerate() {
                    print_result(i + 1, feature, None);
                }
                print_summary_line(page.count, page.count, &query);
                if page.exceeded_transfer_limit {
                    println!("Showing the first {} matches. Refine the search text or category for tighter results.", page.count);
                }
                return Ok(());
            }

            let features = source.features()?;
            let filters = SearchFilters::from_selection(
                categories.iter().map(String::as_str),
                division.as_deref(),
                scope,
            );

            let mut ctx = SearchContext::with_page_size(limit);
            ctx.set_query(query.as_str());
            ctx.set_filters(filters);
            ctx.set_sort(sort);

            let outcome = ctx.run(&features);
            for (i, hit) in outcome.shown.iter().enumerate() {
                print_result(i + 1, hit.feature, Some(hit));
            }
            print_summary_line(outcome.shown.len(), outcome.total, &query);
        }

        Commands::Show { object_id, summary } => {
            let feature = match source.find(object_id)? {
                Some(f) => f,
                None => bail!("No place name with OBJECTID {object_id}"),
            };
            print_feature(&feature);

            if summary {
                let (primary, fallback) = feature.summary_terms();
                let client = SummaryClient::new(source.client.config())?;
                match client.lookup(&primary, &fallback) {
                    Ok(SummaryOutcome::Found(s)) => {
                        println!();
                        println!("About {}", s.title);
                        if !s.description.is_empty() {
                            println!("  {}", s.description);
                        }
                        println!("  {}", s.extract);
                        if !s.page_url.is_empty() {
                            println!("  {}", s.page_url);
                        }
                    }
                    Ok(SummaryOutcome::NotFound) => println!("\nNo encyclopedia summary found."),
                    Ok(SummaryOutcome::Disambiguation) => {
                        println!("\n\"{primary}\" is ambiguous; no single summary available.")
                    }
                    Err(e) => eprintln!("\nSummary lookup failed: {e}"),
                }
            }
        }

        Commands::Categories => {
            let categories = match &source.input {
                Some(_) => {
                    let stats = DatasetStats::from_features(&source.features()?);
                    let mut names: Vec<String> =
                        stats.category_distribution.into_iter().map(|c| c.name).collect();
                    names.sort();
                    names
                }
                None => source.client.categories()?,
            };
            for category in categories {
                println!("{category}");
            }
        }

        Commands::Info => {
            let info = source.client.layer_info()?;
            println!("Layer: {}", info.name.as_deref().unwrap_or("ACT place names"));
            if let Some(kind) = &info.geometry_type {
                println!("Geometry: {kind}");
            }
            if let Some(max) = info.max_record_count {
                println!("Max records per query: {max}");
            }
            if let Some(text) = &info.copyright_text {
                println!("Copyright: {text}");
            }
            println!("URL: {}", source.client.config().layer_url);
        }

        Commands::Stats => {
            let stats = DatasetStats::from_features(&source.features()?);
            println!("Dataset statistics:");
            println!("  Features: {}", stats.total_features);
            println!("  Categories: {}", stats.total_categories);
            println!("  Divisions: {}", stats.total_divisions);
            print_counts("Category distribution", &stats.category_distribution);
            print_counts("Top divisions", &stats.top_divisions);
            print_counts("Most commemorated names", &stats.top_commemorated_names);
        }
    }

    Ok(())
}

/// Where features come from: a file, or the live layer.
struct Source<'a> {
    input: Option<&'a str>,
    client: PlaceNamesClient,
}

impl<'a> Source<'a> {
    fn new(input: Option<&'a str>, config: ClientConfig) -> anyhow::Result<Self> {
        let client = PlaceNamesClient::new(config).context("building HTTP client")?;
        Ok(Self { input, client })
    }

    fn features(&self) -> anyhow::Result<Vec<Feature>> {
        match self.input {
            Some(path) => load_features_from_path(path)
                .with_context(|| format!("loading features from {path}")),
            None => {
                let features = self.client.fetch_all_features(|n| {
                    tracing::info!(loaded = n, "downloading place names");
                })?;
                Ok(features)
            }
        }
    }

    fn find(&self, object_id: i64) -> anyhow::Result<Option<Feature>> {
        match self.input {
            Some(_) => Ok(self
                .features()?
                .into_iter()
                .find(|f| f.object_id() == object_id)),
            None => Ok(self.client.feature_by_id(object_id)?),
        }
    }
}

fn print_result(rank: usize, feature: &Feature, hit: Option<&ScoredFeature<'_>>) {
    let parsed = feature.parsed_description();
    match hit {
        Some(hit) if hit.score > 0 => println!(
            "{rank}. {} [{}] (score {})",
            feature.display_name(),
            feature.category_label(),
            hit.score
        ),
        _ => println!("{rank}. {} [{}]", feature.display_name(), feature.category_label()),
    }
    println!("   Named after: {}", feature.named_after());
    let preview = format_biography_preview(&parsed.biography, DEFAULT_PREVIEW_LEN);
    if !preview.is_empty() {
        println!("   {preview}");
    }
}

fn print_feature(feature: &Feature) {
    let parsed = feature.parsed_description();
    println!("{} (OBJECTID {})", feature.display_name(), feature.object_id());
    println!("  Category: {}", feature.category_label());
    if let Facet::Named(division) = feature.division() {
        println!("  Division: {division}");
    }
    if let Some(other) = feature.other_name().filter(|o| !o.is_empty()) {
        println!("  Other name: {other}");
    }
    println!("  Named after: {}", feature.named_after());
    for entry in &parsed.labelled_values {
        println!("  {}: {}", entry.label, entry.value);
    }
    if let Some(gazettal) = feature.gazettal_information().filter(|g| !g.trim().is_empty()) {
        println!("  Gazettal: {}", gazettal.trim());
    }
    if let Some(url) = feature.map_url() {
        println!("  Map: {url}");
    }
    if !parsed.biography.is_empty() {
        println!();
        println!("{}", parsed.biography);
    }
}

fn print_summary_line(shown: usize, total: usize, query: &str) {
    let plural = if total == 1 { "" } else { "s" };
    let query = if query.trim().is_empty() {
        String::new()
    } else {
        format!(" for \"{}\"", query.trim())
    };
    println!("\nShowing {shown} of {total} result{plural}{query}.");
}

fn print_counts(title: &str, counts: &[NameCount]) {
    if counts.is_empty() {
        return;
    }
    println!("\n{title}:");
    for c in counts {
        println!("  {:>5}  {}", c.count, c.name);
    }
}
