use clap::{Parser, Subcommand};
use placenames_core::config::{DEFAULT_LAYER_URL, DEFAULT_SEARCH_LIMIT};
use placenames_core::{SearchScope, SortMode};

/// CLI arguments for placenames-cli
#[derive(Debug, Parser)]
#[command(
    name = "placenames",
    version,
    about = "Search and explore the ACT Government place names dataset"
)]
pub struct CliArgs {
    /// Read features from a saved query response (.json or .json.gz) instead of the live layer
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// FeatureServer layer URL
    #[arg(
        long = "layer-url",
        env = "PLACENAMES_LAYER_URL",
        default_value = DEFAULT_LAYER_URL,
        global = true
    )]
    pub layer_url: String,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search place names, ranked by relevance
    Search {
        /// Search text (empty lists everything)
        #[arg(default_value = "")]
        query: String,

        /// Restrict to a category; repeat for several
        #[arg(short = 'c', long = "category")]
        categories: Vec<String>,

        /// Restrict to a division code
        #[arg(short = 'd', long = "division")]
        division: Option<String>,

        /// Fields the text must appear in: all, name or biography
        #[arg(long, default_value_t = SearchScope::All)]
        scope: SearchScope,

        /// Result order: relevance, name or category
        #[arg(long, default_value_t = SortMode::Relevance)]
        sort: SortMode,

        /// Number of results to print
        #[arg(short = 'n', long, default_value_t = DEFAULT_SEARCH_LIMIT)]
        limit: usize,

        /// Filter on the server instead of downloading the full dataset
        #[arg(long)]
        server: bool,
    },

    /// Show one place name in full
    Show {
        /// OBJECTID of the feature
        object_id: i64,

        /// Also look up an encyclopedia summary of who it is named after
        #[arg(long)]
        summary: bool,
    },

    /// List all categories
    Categories,

    /// Show layer metadata
    Info,

    /// Show dataset statistics
    Stats,
}
