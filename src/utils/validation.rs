//! Load-time validation of the catalog and synonym tables.

use std::collections::HashSet;

use tracing::warn;

use crate::core::entry::CatalogEntry;

/// Configuration validation error types
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Workflow at index {index} has a blank id")]
    BlankId { index: usize },
    #[error("Duplicate workflow id '{0}'")]
    DuplicateId(String),
    #[error("Synonym table contains an empty term")]
    EmptySynonymTerm,
}

/// Returns true if the string is empty or whitespace-only.
///
/// # Examples
///
/// ```
/// use workflow_matcher::utils::validation::is_blank;
///
/// assert!(is_blank(""));
/// assert!(is_blank(" \t\n"));
/// assert!(!is_blank("写作"));
/// ```
#[must_use]
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Validate catalog entries in document order.
///
/// # Errors
///
/// Returns `ValidationError::BlankId` for an entry with an empty or
/// whitespace-only id, or `ValidationError::DuplicateId` when an id repeats.
pub fn validate_entries(entries: &[CatalogEntry]) -> Result<(), ValidationError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        if is_blank(entry.id.as_str()) {
            return Err(ValidationError::BlankId { index });
        }
        if !seen.insert(entry.id.as_str()) {
            return Err(ValidationError::DuplicateId(entry.id.0.clone()));
        }
        warn_empty_keywords(entry);
    }

    Ok(())
}

/// Validate synonym table keys.
///
/// # Errors
///
/// Returns `ValidationError::EmptySynonymTerm` if any key is the empty string.
pub fn validate_synonym_terms<'a, I>(terms: I) -> Result<(), ValidationError>
where
    I: IntoIterator<Item = &'a String>,
{
    if terms.into_iter().any(String::is_empty) {
        return Err(ValidationError::EmptySynonymTerm);
    }
    Ok(())
}

// Empty keywords are kept: they contain every query term as a substring.
fn warn_empty_keywords(entry: &CatalogEntry) {
    let empty = entry.keywords.iter().filter(|k| k.is_empty()).count();
    if empty > 0 {
        warn!(
            "Workflow '{}' has {} empty keyword(s); they will match every query term",
            entry.id, empty
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_entries() {
        let entries = vec![
            CatalogEntry::new("a").with_keywords(["x"]),
            CatalogEntry::new("b"),
        ];
        assert!(validate_entries(&entries).is_ok());
    }

    #[test]
    fn test_blank_id_rejected() {
        let entries = vec![CatalogEntry::new("a"), CatalogEntry::new("  ")];
        match validate_entries(&entries) {
            Err(ValidationError::BlankId { index }) => assert_eq!(index, 1),
            other => panic!("Expected BlankId, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let entries = vec![CatalogEntry::new("dup"), CatalogEntry::new("dup")];
        assert!(matches!(
            validate_entries(&entries),
            Err(ValidationError::DuplicateId(id)) if id == "dup"
        ));
    }

    #[test]
    fn test_empty_keyword_is_not_an_error() {
        let entries = vec![CatalogEntry::new("a").with_keywords(["", "ai"])];
        assert!(validate_entries(&entries).is_ok());
    }

    #[test]
    fn test_empty_synonym_term_rejected() {
        let terms = vec!["ok".to_string(), String::new()];
        assert!(matches!(
            validate_synonym_terms(&terms),
            Err(ValidationError::EmptySynonymTerm)
        ));
        assert!(validate_synonym_terms(&vec!["写作".to_string()]).is_ok());
    }
}
