use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::core::types::WorkflowId;

/// One ranked catalog entry for a query.
///
/// Only the identifier is carried; titles, descriptions and other display
/// metadata are resolved by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub id: WorkflowId,

    /// Relative ranking value, always > 0 for returned results
    pub score: u64,

    /// Catalog keyword strings that contributed to the score
    pub matched_keywords: BTreeSet<String>,
}
