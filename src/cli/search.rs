use clap::Args;

use crate::catalog::store::WorkflowCatalog;
use crate::catalog::synonyms::SynonymTable;
use crate::cli::{join_query, OutputFormat};
use crate::core::result::SearchResult;
use crate::matching::engine::{MatchingConfig, MatchingEngine, DEFAULT_MIN_SCORE};

#[derive(Args)]
pub struct SearchArgs {
    /// Query words (joined with spaces)
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Maximum number of results to show
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Only show results scoring above this value
    #[arg(long, default_value_t = DEFAULT_MIN_SCORE)]
    pub min_score: u64,
}

#[derive(Args)]
pub struct BestArgs {
    /// Query words (joined with spaces)
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,
}

/// Execute the search command
///
/// # Errors
///
/// Returns an error if JSON output cannot be serialized.
pub fn run_search(
    args: &SearchArgs,
    catalog: &WorkflowCatalog,
    synonyms: &SynonymTable,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let query = join_query(&args.query);
    let config = MatchingConfig {
        min_score: args.min_score,
        ..MatchingConfig::default()
    };
    let engine = MatchingEngine::with_config(catalog, synonyms, config);

    if verbose {
        let expanded = engine.expand(&query);
        eprintln!(
            "Query '{}' expanded to {} terms: {}",
            query,
            expanded.len(),
            expanded.iter().collect::<Vec<_>>().join(", ")
        );
    }

    let results = match args.limit {
        Some(limit) => engine.find_matches(&query, limit),
        None => engine.rank(&query),
    };

    match format {
        OutputFormat::Text => print_text_results(&query, &results),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
        OutputFormat::Tsv => print_tsv_results(&results),
    }

    Ok(())
}

/// Execute the best command; absence of a match is not an error
///
/// # Errors
///
/// Returns an error if JSON output cannot be serialized.
pub fn run_best(
    args: &BestArgs,
    catalog: &WorkflowCatalog,
    synonyms: &SynonymTable,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let query = join_query(&args.query);
    let best = MatchingEngine::new(catalog, synonyms).best_match(&query);

    match format {
        OutputFormat::Text => match &best {
            Some(result) => println!(
                "{}\t{}\t{}",
                result.id,
                result.score,
                format_keywords(result)
            ),
            None => println!("No matching workflow"),
        },
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&best)?),
        OutputFormat::Tsv => print_tsv_results(best.as_slice()),
    }

    Ok(())
}

fn format_keywords(result: &SearchResult) -> String {
    result
        .matched_keywords
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_text_results(query: &str, results: &[SearchResult]) {
    if results.is_empty() {
        println!("No matching workflows");
        return;
    }

    let id_width = results
        .iter()
        .map(|r| r.id.as_str().len())
        .max()
        .unwrap_or(2)
        .max(2);

    println!("Results for '{}' ({} workflows)\n", query, results.len());
    println!(
        "{:>4}  {:<id_w$}  {:>6}  Matched",
        "Rank",
        "ID",
        "Score",
        id_w = id_width
    );
    println!("{}", "-".repeat(4 + 2 + id_width + 2 + 6 + 2 + 7));

    for (rank, result) in results.iter().enumerate() {
        println!(
            "{:>4}  {:<id_w$}  {:>6}  {}",
            rank + 1,
            result.id.as_str(),
            result.score,
            format_keywords(result),
            id_w = id_width
        );
    }
}

fn print_tsv_results(results: &[SearchResult]) {
    println!("rank\tid\tscore\tmatched_keywords");
    for (rank, result) in results.iter().enumerate() {
        println!(
            "{}\t{}\t{}\t{}",
            rank + 1,
            result.id,
            result.score,
            result
                .matched_keywords
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(",")
        );
    }
}
