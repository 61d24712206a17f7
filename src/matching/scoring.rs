use std::collections::BTreeSet;

use crate::matching::engine::ScoringWeights;
use crate::matching::expander::ExpandedQuery;

/// Score and evidence for one catalog entry against one expanded query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchScore {
    /// Sum of all pair contributions; unbounded
    pub score: u64,

    /// Catalog keywords that contributed at least once
    pub matched: BTreeSet<String>,
}

impl MatchScore {
    /// Score with the default 10 / 5 weights
    #[must_use]
    pub fn calculate(keywords: &[String], query: &ExpandedQuery) -> Self {
        Self::calculate_with_weights(keywords, query, &ScoringWeights::default())
    }

    /// Score every (query term, keyword) pair.
    ///
    /// A pair earns `weights.exact` when either string contains the other,
    /// otherwise `weights.case_insensitive` when the lower-cased forms do.
    /// Duplicate keywords are scored once per occurrence; the matched set
    /// records each keyword string once.
    #[must_use]
    pub fn calculate_with_weights(
        keywords: &[String],
        query: &ExpandedQuery,
        weights: &ScoringWeights,
    ) -> Self {
        let mut result = Self::default();

        // Lower-case each keyword once rather than per query term
        let lowered: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();

        for term in query.iter() {
            let term_lower = term.to_lowercase();

            for (keyword, keyword_lower) in keywords.iter().zip(&lowered) {
                let points = if contains_either(keyword, term) {
                    weights.exact
                } else if contains_either(keyword_lower, &term_lower) {
                    weights.case_insensitive
                } else {
                    continue;
                };

                result.score = result.score.saturating_add(points);
                if !result.matched.contains(keyword) {
                    result.matched.insert(keyword.clone());
                }
            }
        }

        result
    }
}

#[inline]
fn contains_either(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kw(words: &[&str]) -> Vec<String> {
        words.iter().map(|s| (*s).to_string()).collect()
    }

    fn q(terms: &[&str]) -> ExpandedQuery {
        terms.iter().copied().collect()
    }

    #[test]
    fn test_exact_containment_scores_ten() {
        let score = MatchScore::calculate(&kw(&["ai"]), &q(&["ai"]));
        assert_eq!(score.score, 10);
        assert_eq!(score.matched, BTreeSet::from(["ai".to_string()]));
    }

    #[test]
    fn test_case_insensitive_fallback_scores_five() {
        let score = MatchScore::calculate(&kw(&["AI"]), &q(&["ai"]));
        assert_eq!(score.score, 5);
        assert!(score.matched.contains("AI"));
    }

    #[test]
    fn test_fallback_does_not_fire_when_exact_matches() {
        // "ai" in "ai" is exact: 10, never 10 + 5
        let score = MatchScore::calculate(&kw(&["ai", "AI"]), &q(&["ai"]));
        assert_eq!(score.score, 15);
        assert_eq!(score.matched.len(), 2);
    }

    #[test]
    fn test_containment_works_both_directions() {
        // keyword contains term
        assert_eq!(MatchScore::calculate(&kw(&["blogging"]), &q(&["blog"])).score, 10);
        // term contains keyword
        assert_eq!(MatchScore::calculate(&kw(&["blog"]), &q(&["blogging"])).score, 10);
        // both via case folding
        assert_eq!(MatchScore::calculate(&kw(&["SEO"]), &q(&["seotools"])).score, 5);
    }

    #[test]
    fn test_repeated_keyword_amplifies_score_not_evidence() {
        let single = MatchScore::calculate(&kw(&["ai"]), &q(&["ai"]));
        let double = MatchScore::calculate(&kw(&["ai", "ai"]), &q(&["ai"]));

        assert_eq!(single.score, 10);
        assert_eq!(double.score, 20);
        assert_eq!(single.matched, double.matched);
    }

    #[test]
    fn test_every_term_keyword_pair_counts() {
        // "content" hits "content" (10) and "contents" hits "content" (10)
        let score = MatchScore::calculate(&kw(&["content"]), &q(&["content", "contents"]));
        assert_eq!(score.score, 20);
        assert_eq!(score.matched.len(), 1);
    }

    #[test]
    fn test_no_overlap_scores_zero() {
        let score = MatchScore::calculate(&kw(&["development", "编程"]), &q(&["写作", "blog"]));
        assert_eq!(score, MatchScore::default());
        assert_eq!(score.score, 0);
    }

    #[test]
    fn test_empty_keyword_list_never_matches() {
        let score = MatchScore::calculate(&[], &q(&["anything"]));
        assert_eq!(score.score, 0);
        assert!(score.matched.is_empty());
    }

    #[test]
    fn test_empty_keyword_matches_every_term() {
        let score = MatchScore::calculate(&kw(&[""]), &q(&["aa", "bb"]));
        assert_eq!(score.score, 20);
    }

    #[test]
    fn test_custom_weights() {
        let weights = ScoringWeights {
            exact: 3,
            case_insensitive: 1,
        };
        let score = MatchScore::calculate_with_weights(&kw(&["ai", "AI"]), &q(&["ai"]), &weights);
        assert_eq!(score.score, 4);
    }

    #[test]
    fn test_huge_weights_saturate_instead_of_overflowing() {
        let weights = ScoringWeights {
            exact: u64::MAX,
            case_insensitive: 1,
        };
        let score = MatchScore::calculate_with_weights(&kw(&["ai", "ai"]), &q(&["ai"]), &weights);
        assert_eq!(score.score, u64::MAX);
        assert_eq!(score.matched, BTreeSet::from(["ai".to_string()]));
    }
}
