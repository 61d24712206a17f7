//! Query expansion, scoring and ranking.
//!
//! - [`QueryExpander`]: Turns a raw query into lower-cased tokens plus synonyms
//! - [`MatchScore`]: Score and evidence for one catalog entry
//! - [`MatchingEngine`]: Scores every entry, drops non-matches, sorts
//!
//! ## Scoring
//!
//! Every (query term, catalog keyword) pair is checked:
//!
//! - **Exact containment** (either string contains the other): 10 points
//! - **Case-insensitive containment**, only when the exact check fails: 5 points
//!
//! Repeated keywords in an entry are scored once per occurrence, so authors
//! can weight a concept by repeating it. The matched-keyword evidence is a set.
//!
//! ## Ranking
//!
//! Results are sorted by score descending with a stable sort; equal scores
//! keep catalog order. Entries scoring zero never appear.
//!
//! ## Example
//!
//! ```rust,no_run
//! use workflow_matcher::{MatchingEngine, SynonymTable, WorkflowCatalog};
//!
//! let catalog = WorkflowCatalog::load_embedded().unwrap();
//! let synonyms = SynonymTable::load_embedded().unwrap();
//!
//! let engine = MatchingEngine::new(&catalog, &synonyms);
//! for result in engine.rank("写作 blog") {
//!     println!("{}: {} {:?}", result.id, result.score, result.matched_keywords);
//! }
//! ```

pub mod engine;
pub mod expander;
pub mod scoring;

pub use engine::{best_match, rank, MatchingConfig, MatchingEngine, ScoringWeights};
pub use expander::{ExpandedQuery, QueryExpander};
pub use scoring::MatchScore;
