use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::store::WorkflowCatalog;
use crate::catalog::synonyms::SynonymTable;
use crate::core::result::SearchResult;
use crate::matching::expander::{ExpandedQuery, QueryExpander};
use crate::matching::scoring::MatchScore;

/// Default minimum score: anything above zero is a match
pub const DEFAULT_MIN_SCORE: u64 = 0;

/// Points for each containment tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Case-sensitive containment in either direction
    pub exact: u64,
    /// Containment only after lower-casing both sides
    pub case_insensitive: u64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            exact: 10,
            case_insensitive: 5,
        }
    }
}

/// Configuration for the matching engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Results must score strictly above this
    #[serde(default)]
    pub min_score: u64,
    /// Points per containment tier
    #[serde(default)]
    pub scoring_weights: ScoringWeights,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_SCORE,
            scoring_weights: ScoringWeights::default(),
        }
    }
}

/// Ranks catalog entries against free-text queries.
///
/// Holds only shared references to the two read-only tables, so any number
/// of engines can search concurrently.
pub struct MatchingEngine<'a> {
    catalog: &'a WorkflowCatalog,
    expander: QueryExpander<'a>,
    config: MatchingConfig,
}

impl<'a> MatchingEngine<'a> {
    /// Create a new matching engine with default configuration
    pub fn new(catalog: &'a WorkflowCatalog, synonyms: &'a SynonymTable) -> Self {
        Self::with_config(catalog, synonyms, MatchingConfig::default())
    }

    /// Create a new matching engine with custom configuration
    pub fn with_config(
        catalog: &'a WorkflowCatalog,
        synonyms: &'a SynonymTable,
        config: MatchingConfig,
    ) -> Self {
        Self {
            catalog,
            expander: QueryExpander::new(synonyms),
            config,
        }
    }

    /// Expand a query the same way `rank` does
    pub fn expand(&self, query: &str) -> ExpandedQuery {
        self.expander.expand(query)
    }

    /// Rank every catalog entry against the query, best first.
    ///
    /// Entries scoring at or below `min_score` are dropped. Equal scores keep
    /// catalog order.
    pub fn rank(&self, query: &str) -> Vec<SearchResult> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        let expanded = self.expander.expand(query);
        debug!("Expanded query into {} terms", expanded.len());

        let mut results: Vec<SearchResult> = self
            .catalog
            .entries()
            .iter()
            .filter_map(|entry| {
                let score = MatchScore::calculate_with_weights(
                    &entry.keywords,
                    &expanded,
                    &self.config.scoring_weights,
                );
                (score.score > self.config.min_score).then(|| SearchResult {
                    id: entry.id.clone(),
                    score: score.score,
                    matched_keywords: score.matched,
                })
            })
            .collect();

        // sort_by is stable: ties stay in catalog order
        results.sort_by(|a, b| b.score.cmp(&a.score));

        debug!("Ranked {} matching workflows", results.len());
        results
    }

    /// Rank and keep at most `limit` results
    pub fn find_matches(&self, query: &str, limit: usize) -> Vec<SearchResult> {
        let mut results = self.rank(query);
        results.truncate(limit);
        results
    }

    /// The single best match, if any entry scored
    pub fn best_match(&self, query: &str) -> Option<SearchResult> {
        self.rank(query).into_iter().next()
    }
}

/// Rank `catalog` against `query` with the default configuration
pub fn rank(
    catalog: &WorkflowCatalog,
    synonyms: &SynonymTable,
    query: &str,
) -> Vec<SearchResult> {
    MatchingEngine::new(catalog, synonyms).rank(query)
}

/// Top result of [`rank`], or `None` when nothing matched
pub fn best_match(
    catalog: &WorkflowCatalog,
    synonyms: &SynonymTable,
    query: &str,
) -> Option<SearchResult> {
    MatchingEngine::new(catalog, synonyms).best_match(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entry::CatalogEntry;
    use crate::core::types::WorkflowId;

    fn make_catalog(entries: &[(&str, &[&str])]) -> WorkflowCatalog {
        WorkflowCatalog::from_entries(
            entries
                .iter()
                .map(|(id, keywords)| CatalogEntry::new(*id).with_keywords(keywords.iter().copied()))
                .collect(),
        )
        .unwrap()
    }

    fn ids(results: &[SearchResult]) -> Vec<&str> {
        results.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_empty_query_returns_nothing() {
        let catalog = make_catalog(&[("a", &["ai"]), ("b", &[""])]);
        let synonyms = SynonymTable::default();
        let engine = MatchingEngine::new(&catalog, &synonyms);

        assert!(engine.rank("").is_empty());
        assert!(engine.rank("   ").is_empty());
        assert!(engine.best_match("\t").is_none());
    }

    #[test]
    fn test_results_sorted_by_score_descending() {
        let catalog = make_catalog(&[
            ("low", &["AI"]),
            ("high", &["ai", "ai"]),
            ("mid", &["ai"]),
        ]);
        let synonyms = SynonymTable::default();
        let results = MatchingEngine::new(&catalog, &synonyms).rank("ai");

        assert_eq!(ids(&results), vec!["high", "mid", "low"]);
        let scores: Vec<u64> = results.iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![20, 10, 5]);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let catalog = make_catalog(&[
            ("third", &["rust"]),
            ("first", &["rust"]),
            ("skip", &["go"]),
            ("second", &["rust"]),
        ]);
        let synonyms = SynonymTable::default();
        let results = MatchingEngine::new(&catalog, &synonyms).rank("rust");

        assert_eq!(ids(&results), vec!["third", "first", "second"]);
    }

    #[test]
    fn test_zero_score_entries_excluded() {
        let catalog = make_catalog(&[("a", &["ai"]), ("b", &["unrelated"]), ("c", &[])]);
        let synonyms = SynonymTable::default();
        let results = MatchingEngine::new(&catalog, &synonyms).rank("ai");

        assert_eq!(ids(&results), vec!["a"]);
    }

    #[test]
    fn test_min_score_threshold() {
        let catalog = make_catalog(&[("exact", &["ai"]), ("folded", &["AI"])]);
        let synonyms = SynonymTable::default();
        let config = MatchingConfig {
            min_score: 5,
            ..MatchingConfig::default()
        };
        let results = MatchingEngine::with_config(&catalog, &synonyms, config).rank("ai");

        assert_eq!(ids(&results), vec!["exact"]);
    }

    #[test]
    fn test_find_matches_limits_results() {
        let catalog = make_catalog(&[("a", &["ai"]), ("b", &["ai"]), ("c", &["ai"])]);
        let synonyms = SynonymTable::default();
        let engine = MatchingEngine::new(&catalog, &synonyms);

        assert_eq!(ids(&engine.find_matches("ai", 2)), vec!["a", "b"]);
        assert!(engine.find_matches("ai", 0).is_empty());
    }

    #[test]
    fn test_synonyms_bridge_languages() {
        let catalog = make_catalog(&[("writer", &["blog"]), ("coder", &["code"])]);
        let synonyms: SynonymTable = [("写作", vec!["blog"])].into_iter().collect();
        let best = best_match(&catalog, &synonyms, "写作").unwrap();

        assert_eq!(best.id, WorkflowId::new("writer"));
        assert_eq!(best.score, 10);
        assert!(best.matched_keywords.contains("blog"));
    }

    #[test]
    fn test_best_match_none_when_nothing_scores() {
        let catalog = make_catalog(&[("a", &["ai"])]);
        let synonyms = SynonymTable::default();
        assert!(best_match(&catalog, &synonyms, "zzzznomatch").is_none());
    }

    #[test]
    fn test_single_character_query_matches_nothing() {
        let catalog = make_catalog(&[("a", &["ai"])]);
        let synonyms = SynonymTable::default();
        assert!(rank(&catalog, &synonyms, "a").is_empty());
    }

    #[test]
    fn test_config_serde_defaults() {
        let config: MatchingConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, MatchingConfig::default());
        assert_eq!(config.scoring_weights.exact, 10);
        assert_eq!(config.scoring_weights.case_insensitive, 5);
    }
}
