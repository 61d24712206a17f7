//! # workflow-matcher
//!
//! Ranks a small, curated catalog of workflow templates against a free-text
//! query written in English, Chinese, or a mix of both.
//!
//! There is no search engine or index service behind it. Queries are split
//! into tokens, expanded through a directed synonym table so that a Chinese
//! query can reach English-tagged entries (and the other way round), and then
//! every catalog entry's keyword tags are scored by substring containment.
//!
//! ## Features
//!
//! - **Bilingual expansion**: `写作` reaches entries tagged `blog` or `article`
//! - **Two-tier scoring**: exact containment beats case-insensitive containment
//! - **Deterministic ranking**: stable sort, ties keep catalog order
//! - **Injected tables**: catalog and synonyms are plain values, not globals
//!
//! ## Example
//!
//! ```rust,no_run
//! use workflow_matcher::{best_match, SynonymTable, WorkflowCatalog};
//!
//! let catalog = WorkflowCatalog::load_embedded().unwrap();
//! let synonyms = SynonymTable::load_embedded().unwrap();
//!
//! if let Some(result) = best_match(&catalog, &synonyms, "写作") {
//!     println!("{} (score {})", result.id, result.score);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Workflow catalog and synonym table loading
//! - [`core`]: Identifiers, catalog entries, search results
//! - [`matching`]: Query expansion, scoring and ranking
//! - [`cli`]: Command-line interface implementation
//! - [`utils`]: Configuration validation

pub mod catalog;
pub mod cli;
pub mod core;
pub mod matching;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::catalog::store::{CatalogError, WorkflowCatalog};
pub use crate::catalog::synonyms::SynonymTable;
pub use crate::core::entry::CatalogEntry;
pub use crate::core::result::SearchResult;
pub use crate::core::types::WorkflowId;
pub use crate::matching::engine::{
    best_match, rank, MatchingConfig, MatchingEngine, ScoringWeights,
};
pub use crate::matching::expander::{ExpandedQuery, QueryExpander};
