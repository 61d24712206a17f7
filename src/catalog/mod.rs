//! Static configuration tables: the workflow catalog and the synonym table.
//!
//! Both tables are JSON documents. Default copies are compiled into the
//! binary, and custom copies can be loaded from files. Once built, neither
//! table changes; they can be shared freely between threads.
//!
//! ## Example
//!
//! ```rust,no_run
//! use workflow_matcher::{SynonymTable, WorkflowCatalog};
//! use workflow_matcher::core::types::WorkflowId;
//!
//! let catalog = WorkflowCatalog::load_embedded().unwrap();
//! let synonyms = SynonymTable::load_embedded().unwrap();
//!
//! for entry in catalog.entries() {
//!     println!("{} ({} keywords)", entry.id, entry.keywords.len());
//! }
//!
//! let content = catalog.get(&WorkflowId::new("content-powerhouse"));
//! let related = synonyms.related("写作");
//! ```

pub mod store;
pub mod synonyms;
