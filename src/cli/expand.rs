use clap::Args;

use crate::catalog::synonyms::SynonymTable;
use crate::cli::{join_query, OutputFormat};
use crate::matching::expander::QueryExpander;

#[derive(Args)]
pub struct ExpandArgs {
    /// Query words (joined with spaces)
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,
}

/// Execute the expand command
///
/// # Errors
///
/// Returns an error if JSON output cannot be serialized.
pub fn run(
    args: &ExpandArgs,
    synonyms: &SynonymTable,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let query = join_query(&args.query);
    let expanded = QueryExpander::new(synonyms).expand(&query);

    match format {
        OutputFormat::Text => {
            println!("Expanded '{}' into {} terms:", query, expanded.len());
            for term in expanded.iter() {
                let marker = if synonyms.contains(term) { " *" } else { "" };
                println!("  {term}{marker}");
            }
        }
        OutputFormat::Json => {
            let terms: Vec<&str> = expanded.iter().collect();
            let output = serde_json::json!({
                "query": query,
                "terms": terms,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            for term in expanded.iter() {
                println!("{term}");
            }
        }
    }

    Ok(())
}
