use serde::{Deserialize, Serialize};

use crate::core::types::WorkflowId;

/// A workflow template in the catalog, reduced to what ranking needs.
///
/// Keywords keep the author's casing and order. Repeated keywords are kept
/// as-is: every copy contributes to the score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Stable identifier, used by callers to resolve display metadata
    pub id: WorkflowId,

    /// Keyword tags (mixed case, mixed English/Chinese)
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl CatalogEntry {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: WorkflowId::new(id),
            keywords: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }
}
