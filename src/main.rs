//! lawn-search - Fuzzy product search and spreader settings lookup
//!
//! Searches a lawn-care product catalog by name (typo tolerant), offers
//! autocomplete suggestions and shows spreader calibration settings.
//!
//! CHANGELOG:
//! - 10/17/2026 - Default catalog goes through CatalogManager::load_default
//! - 10/16/2026 - Added settings and brands commands
//! - 10/14/2026 - Initial CLI skeleton

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use lawn_search::catalog::CatalogManager;
use lawn_search::commands;
use lawn_search::fuzzy::{DEFAULT_MAX_SUGGESTIONS, DEFAULT_SEARCH_THRESHOLD};
use lawn_search::output::{self, OutputControls};

/// Fuzzy product search and spreader settings lookup for lawn care.
#[derive(Parser, Debug)]
#[command(name = "lawn-search")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Catalog JSON file (default: $LAWN_CATALOG_PATH, ~/.lawn-search/catalog.json, bundled data)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Compact JSON output (no whitespace)
    #[arg(long, global = true)]
    compact: bool,

    /// Comma-separated field allowlist
    #[arg(long, global = true)]
    fields: Option<String>,

    /// Truncate text fields to this length
    #[arg(long, global = true)]
    max_text_chars: Option<u32>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    // =========================================================================
    // SEARCH COMMANDS
    // =========================================================================
    /// Search products by name (typo tolerant)
    Search {
        /// Search query (empty lists every product)
        #[arg(default_value = "")]
        query: String,

        /// Minimum relevance score (0.0-1.0)
        #[arg(short, long, default_value_t = DEFAULT_SEARCH_THRESHOLD)]
        threshold: f64,

        /// Max results
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Autocomplete a partial product name
    Suggest {
        /// Partial product name (at least 2 characters)
        query: String,

        /// Max suggestions
        #[arg(short, long, default_value_t = DEFAULT_MAX_SUGGESTIONS)]
        limit: usize,
    },

    /// Show which part of a text matches a query
    Highlight {
        /// Text to highlight
        text: String,

        /// Query to look for
        query: String,
    },

    /// Similarity score between a query and a candidate
    Score {
        /// Query text
        query: String,

        /// Candidate name to compare against
        candidate: String,
    },

    // =========================================================================
    // CATALOG COMMANDS
    // =========================================================================
    /// List all products in the catalog
    Products,

    /// Show spreader settings for a product
    Settings {
        /// Product name (fuzzy matched)
        product: String,

        /// Only show this spreader model id
        #[arg(short, long)]
        model: Option<String>,
    },

    /// List spreader brands
    Brands,
}

fn load_catalog(path: Option<PathBuf>) -> Result<CatalogManager> {
    match path {
        Some(path) => CatalogManager::load(&path)
            .with_context(|| format!("Failed to load catalog {:?}", path)),
        None => CatalogManager::load_default().context("Failed to load default catalog"),
    }
}

fn run(cli: Cli, output_controls: &OutputControls) -> Result<()> {
    match cli.command {
        // Search commands
        Command::Search { query, threshold, limit } => {
            let catalog = load_catalog(cli.catalog)?;
            commands::search::search(&catalog, &query, threshold, limit, output_controls)
        }
        Command::Suggest { query, limit } => {
            let catalog = load_catalog(cli.catalog)?;
            commands::search::suggest(&catalog, &query, limit, output_controls)
        }
        Command::Highlight { text, query } => {
            commands::search::highlight(&text, &query, output_controls)
        }
        Command::Score { query, candidate } => {
            commands::search::score(&query, &candidate, output_controls)
        }

        // Catalog commands
        Command::Products => {
            let catalog = load_catalog(cli.catalog)?;
            commands::catalog::products(&catalog, output_controls)
        }
        Command::Settings { product, model } => {
            let catalog = load_catalog(cli.catalog)?;
            commands::catalog::settings(&catalog, &product, model.as_deref(), output_controls)
        }
        Command::Brands => {
            let catalog = load_catalog(cli.catalog)?;
            commands::catalog::brands(&catalog, output_controls)
        }
    }
}

fn main() -> ExitCode {
    // Initialize tracing/logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    // Build output controls from global flags
    let output_controls = OutputControls {
        json: cli.json,
        compact: cli.compact,
        fields: cli.fields.clone(),
        max_text_chars: cli.max_text_chars,
    };

    match run(cli, &output_controls) {
        Ok(()) => ExitCode::from(0),
        Err(e) => {
            if output_controls.json {
                println!("{}", output::format_error(&format!("{:#}", e)));
            } else {
                eprintln!("Error: {:#}", e);
            }
            ExitCode::from(1)
        }
    }
}
