mod memory;

pub use memory::MemoryTermStore;

use crate::error::StoreError;
use crate::types::{TaxonomyKind, TermArgs, TermRef};

/// Persistence seam for taxonomy terms.
///
/// The importer needs exactly two capabilities from a backend: an existence
/// lookup and an insert. Implementations are expected to keep `find_term`
/// idempotent and to serialize their own writes.
pub trait TermStore {
    /// Look up a term by name or slug within one taxonomy kind.
    ///
    /// Matching is exact on either field; returns `None` when no term
    /// matches.
    fn find_term(
        &self,
        name_or_slug: &str,
        kind: TaxonomyKind,
    ) -> Result<Option<TermRef>, StoreError>;

    /// Insert a new term with the given attributes.
    fn insert_term(
        &mut self,
        name: &str,
        kind: TaxonomyKind,
        args: &TermArgs,
    ) -> Result<TermRef, StoreError>;
}
