//! GraphLens CLI - Bilingual knowledge graph analytics
//!
//! Fetches an entity-relation graph from a RAGFlow-compatible API (or a
//! local snapshot file) and runs read-only analytics over it: statistics,
//! connectivity ranking, filtering, and neighborhood inspection.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use config::Settings;

#[derive(Parser)]
#[command(name = "graphlens")]
#[command(author = "GraphLens Contributors")]
#[command(version)]
#[command(about = "Analytics for bilingual knowledge graphs", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// API base URL (overrides config file and GRAPHLENS_URL)
    #[arg(long, global = true)]
    url: Option<String>,

    /// API key (overrides config file and GRAPHLENS_API_KEY)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Dataset (knowledge base) id to analyze
    #[arg(long, global = true)]
    dataset: Option<String>,

    /// Analyze a local snapshot file instead of fetching from the API
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    /// Output as JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter graphlens.json config file
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// List datasets visible to the configured API key
    Datasets,

    /// Show graph statistics: counts, coverage, type distribution
    Stats,

    /// Show the best-connected entities by degree
    Hubs {
        /// Maximum results to return
        #[arg(short, long, default_value = "10")]
        top: usize,
    },

    /// List entities of one type, ranked by importance
    Filter {
        /// Entity type, canonical code or localized label
        kind: String,

        /// Maximum results to show
        #[arg(short, long, default_value = "10")]
        top: usize,
    },

    /// Search entities by keyword in name or description
    Search {
        /// Keyword (case-sensitive substring)
        keyword: String,
    },

    /// Show entities with the most source-document references
    Sources {
        /// Maximum results to return
        #[arg(short, long, default_value = "10")]
        top: usize,
    },

    /// Show the direct relations of one entity
    Neighbors {
        /// Entity identity to inspect
        entity: String,
    },

    /// Export the graph to a snapshot file
    Export {
        /// Output file
        #[arg(short, long, default_value = "graphlens-graph.json")]
        output: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let settings = Settings::resolve(cli.url, cli.api_key, cli.dataset, cli.input, cli.json);

    let result = match cli.command {
        Commands::Init { path } => commands::init(&path),
        Commands::Datasets => commands::datasets(&settings),
        Commands::Stats => commands::stats(&settings),
        Commands::Hubs { top } => commands::hubs(&settings, top),
        Commands::Filter { kind, top } => commands::filter(&settings, &kind, top),
        Commands::Search { keyword } => commands::search(&settings, &keyword),
        Commands::Sources { top } => commands::sources(&settings, top),
        Commands::Neighbors { entity } => commands::neighbors(&settings, &entity),
        Commands::Export { output } => commands::export(&settings, &output),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
