//! Core data types for workflow matching.
//!
//! - [`WorkflowId`]: Stable identifier of a catalog entry
//! - [`CatalogEntry`]: A workflow template with its keyword tags
//! - [`SearchResult`]: A ranked match with its score and evidence

pub mod entry;
pub mod result;
pub mod types;
