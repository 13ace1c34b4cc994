//! CSV Taxonomy Importer Library
//!
//! This library imports hierarchical taxonomy terms (categories and tags)
//! from CSV files into a pluggable term store.

mod error;
mod importer;
mod sanitize;
mod store;
mod types;

pub use error::{ImporterError, StoreError};
pub use importer::{validate, validate_path, ColumnMap, Importer};
pub use sanitize::{sanitize_text, slugify};
pub use store::{MemoryTermStore, TermStore};
pub use types::{ExistingTerm, ImportSummary, TaxonomyKind, TermArgs, TermId, TermRef};
