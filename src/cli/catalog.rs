use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};

use crate::catalog::store::WorkflowCatalog;
use crate::cli::OutputFormat;
use crate::core::types::WorkflowId;

#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommands,
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List all workflows in the catalog
    List,

    /// Show the keywords of a specific workflow
    Show {
        /// Workflow ID
        #[arg(required = true)]
        id: String,
    },

    /// Export the catalog to a file
    Export {
        /// Output file path
        #[arg(required = true)]
        output: PathBuf,
    },
}

/// Execute a catalog subcommand
///
/// # Errors
///
/// Returns an error for an unknown workflow id or a failed export.
pub fn run(
    args: CatalogArgs,
    catalog: &WorkflowCatalog,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match args.command {
        CatalogCommands::List => run_list(catalog, format),
        CatalogCommands::Show { id } => run_show(&id, catalog, format),
        CatalogCommands::Export { output } => run_export(&output, catalog),
    }
}

fn run_list(catalog: &WorkflowCatalog, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            let id_width = catalog
                .entries()
                .iter()
                .map(|e| e.id.as_str().len())
                .max()
                .unwrap_or(2)
                .max(2);

            println!("Workflow Catalog ({} workflows)\n", catalog.len());
            println!("{:<id_w$} {:>8}", "ID", "Keywords", id_w = id_width);
            println!("{}", "-".repeat(id_width + 9));
            for entry in catalog.entries() {
                println!(
                    "{:<id_w$} {:>8}",
                    entry.id.as_str(),
                    entry.keywords.len(),
                    id_w = id_width
                );
            }
        }
        OutputFormat::Json => {
            let output: Vec<_> = catalog
                .entries()
                .iter()
                .map(|e| {
                    serde_json::json!({
                        "id": e.id,
                        "keyword_count": e.keywords.len(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("id\tkeyword_count");
            for entry in catalog.entries() {
                println!("{}\t{}", entry.id, entry.keywords.len());
            }
        }
    }

    Ok(())
}

fn run_show(id: &str, catalog: &WorkflowCatalog, format: OutputFormat) -> anyhow::Result<()> {
    let entry = catalog
        .get(&WorkflowId::new(id))
        .ok_or_else(|| anyhow::anyhow!("Workflow '{}' not found", id))?;

    match format {
        OutputFormat::Text => {
            println!("Workflow: {}\n", entry.id);
            println!("Keywords ({}):", entry.keywords.len());
            for keyword in &entry.keywords {
                println!("  {keyword}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(entry)?),
        OutputFormat::Tsv => {
            println!("id\tkeyword");
            for keyword in &entry.keywords {
                println!("{}\t{}", entry.id, keyword);
            }
        }
    }

    Ok(())
}

fn run_export(output: &Path, catalog: &WorkflowCatalog) -> anyhow::Result<()> {
    let json = catalog.to_json()?;
    std::fs::write(output, json)?;

    println!(
        "Exported {} workflows to {}",
        catalog.len(),
        output.display()
    );

    Ok(())
}
