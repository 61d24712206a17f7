//! Directed synonym table used for query expansion.
//!
//! Each entry maps a term to the terms it expands into. Lookups are exact
//! and case-sensitive; callers lower-case query tokens before looking them
//! up. The relation is not symmetric: `A -> B` does not imply `B -> A`.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tracing::warn;

use crate::catalog::store::CatalogError;
use crate::utils::validation::validate_synonym_terms;

/// Synonym table version for compatibility checking
pub const SYNONYMS_VERSION: &str = "1.0.0";

/// Serializable synonym table format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynonymData {
    pub version: String,
    pub synonyms: BTreeMap<String, Vec<String>>,
}

/// Immutable term -> related terms mapping
#[derive(Debug, Clone, Default)]
pub struct SynonymTable {
    entries: HashMap<String, Vec<String>>,
}

impl SynonymTable {
    /// Build a table from an explicit map
    pub fn new(entries: HashMap<String, Vec<String>>) -> Self {
        Self { entries }
    }

    /// Load the embedded default synonym table
    pub fn load_embedded() -> Result<Self, CatalogError> {
        const EMBEDDED_SYNONYMS: &str = include_str!("../../catalogs/synonyms.json");
        Self::from_json(EMBEDDED_SYNONYMS)
    }

    /// Load a synonym table from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a synonym table from JSON string
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: SynonymData = serde_json::from_str(json)?;

        if data.version != SYNONYMS_VERSION {
            warn!(
                "Synonym table version mismatch (expected {}, found {})",
                SYNONYMS_VERSION, data.version
            );
        }

        validate_synonym_terms(data.synonyms.keys())?;

        Ok(Self::new(data.synonyms.into_iter().collect()))
    }

    /// Related terms for an exact key, in authored order
    pub fn related(&self, term: &str) -> Option<&[String]> {
        self.entries.get(term).map(Vec::as_slice)
    }

    /// Whether `term` is an exact key of the table
    pub fn contains(&self, term: &str) -> bool {
        self.entries.contains_key(term)
    }

    /// Export the table to JSON, keys sorted
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = SynonymData {
            version: SYNONYMS_VERSION.to_string(),
            synonyms: self
                .entries
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for SynonymTable
where
    K: Into<String>,
    V: IntoIterator,
    V::Item: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into_iter().map(Into::into).collect()))
                .collect(),
        )
    }
}
