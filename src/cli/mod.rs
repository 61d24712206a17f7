//! Command-line interface for workflow-matcher.
//!
//! Available commands:
//!
//! - **search**: Rank the catalog against a query
//! - **best**: Print only the best match
//! - **expand**: Show the terms a query expands into
//! - **catalog**: List, show, or export catalog entries
//!
//! ## Usage
//!
//! ```text
//! # Rank workflows for a Chinese query
//! workflow-matcher search 写作
//!
//! # JSON output for scripting
//! workflow-matcher --format json search blog writing --limit 3
//!
//! # Use custom tables
//! workflow-matcher --catalog my_workflows.json --synonyms my_synonyms.json best coding
//! ```

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::catalog::store::WorkflowCatalog;
use crate::catalog::synonyms::SynonymTable;

pub mod catalog;
pub mod expand;
pub mod search;

#[derive(Parser)]
#[command(name = "workflow-matcher")]
#[command(version)]
#[command(about = "Rank workflow templates against bilingual free-text queries")]
#[command(
    long_about = "workflow-matcher ranks a curated catalog of workflow templates against a free-text query.\n\nQueries may be English, Chinese, or mixed. Each token is expanded through a synonym table and matched against the keyword tags of every workflow."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Path to custom catalog file (defaults to the embedded catalog)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Path to custom synonym table (defaults to the embedded table)
    #[arg(long, global = true)]
    pub synonyms: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank workflows against a query
    Search(search::SearchArgs),

    /// Print the single best matching workflow
    Best(search::BestArgs),

    /// Show the expanded term set for a query
    Expand(expand::ExpandArgs),

    /// Inspect the workflow catalog
    Catalog(catalog::CatalogArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Dispatch a parsed command line
///
/// # Errors
///
/// Returns an error if a table cannot be loaded or output cannot be written.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let Cli {
        command,
        verbose,
        format,
        catalog,
        synonyms,
    } = cli;

    match command {
        Commands::Search(args) => {
            let catalog = load_catalog(catalog.as_deref())?;
            let synonyms = load_synonyms(synonyms.as_deref())?;
            search::run_search(&args, &catalog, &synonyms, format, verbose)
        }
        Commands::Best(args) => {
            let catalog = load_catalog(catalog.as_deref())?;
            let synonyms = load_synonyms(synonyms.as_deref())?;
            search::run_best(&args, &catalog, &synonyms, format)
        }
        Commands::Expand(args) => {
            let synonyms = load_synonyms(synonyms.as_deref())?;
            expand::run(&args, &synonyms, format)
        }
        Commands::Catalog(args) => {
            let workflows = load_catalog(catalog.as_deref())?;
            catalog::run(args, &workflows, format)
        }
    }
}

/// Load a catalog from `path`, or the embedded one
pub fn load_catalog(path: Option<&Path>) -> anyhow::Result<WorkflowCatalog> {
    let catalog = if let Some(path) = path {
        WorkflowCatalog::load_from_file(path)?
    } else {
        WorkflowCatalog::load_embedded()?
    };
    tracing::debug!("Loaded catalog with {} workflows", catalog.len());
    Ok(catalog)
}

/// Load a synonym table from `path`, or the embedded one
pub fn load_synonyms(path: Option<&Path>) -> anyhow::Result<SynonymTable> {
    let synonyms = if let Some(path) = path {
        SynonymTable::load_from_file(path)?
    } else {
        SynonymTable::load_embedded()?
    };
    tracing::debug!("Loaded synonym table with {} terms", synonyms.len());
    Ok(synonyms)
}

/// Join positional query words with single spaces
pub(crate) fn join_query(words: &[String]) -> String {
    words.join(" ")
}
