use std::collections::BTreeSet;

use crate::catalog::synonyms::SynonymTable;

/// The set of terms a raw query expands into.
///
/// Holds the lower-cased query tokens plus every related term found for them
/// in the synonym table (related terms keep their authored casing).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedQuery {
    terms: BTreeSet<String>,
}

impl ExpandedQuery {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ExpandedQuery {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            terms: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Split a query on whitespace, drop single-character tokens, lower-case the rest
pub fn tokenize(query: &str) -> impl Iterator<Item = String> + '_ {
    query
        .split_whitespace()
        .filter(|token| token.chars().count() > 1)
        .map(str::to_lowercase)
}

/// Expands raw queries through a synonym table
pub struct QueryExpander<'a> {
    synonyms: &'a SynonymTable,
}

impl<'a> QueryExpander<'a> {
    pub fn new(synonyms: &'a SynonymTable) -> Self {
        Self { synonyms }
    }

    /// Expand a query into its token set plus directed synonyms.
    ///
    /// Unknown tokens pass through unexpanded; an empty or whitespace-only
    /// query yields an empty set.
    pub fn expand(&self, query: &str) -> ExpandedQuery {
        let mut terms = BTreeSet::new();

        for token in tokenize(query) {
            if let Some(related) = self.synonyms.related(&token) {
                terms.extend(related.iter().cloned());
            }
            terms.insert(token);
        }

        ExpandedQuery { terms }
    }
}
