use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::TermStore;
use crate::error::StoreError;
use crate::sanitize::slugify;
use crate::types::{ExistingTerm, TaxonomyKind, TermArgs, TermId, TermRef};

/// In-memory term store, persistable as a JSON document.
///
/// Terms are held in insertion order. This is the reference backend for the
/// CLI and the test double for the importer; a real content-management
/// backend would implement [`TermStore`] against its own database.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct MemoryTermStore {
    terms: Vec<ExistingTerm>,
}

impl MemoryTermStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        tracing::debug!("Loading term store from {:?}", path);
        let contents = fs::read_to_string(path)?;
        let store: Self = serde_json::from_str(&contents)?;
        tracing::debug!("Loaded {} terms", store.terms.len());
        Ok(store)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), StoreError> {
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn terms(&self) -> &[ExistingTerm] {
        &self.terms
    }

    pub fn get(&self, id: TermId) -> Option<&ExistingTerm> {
        self.terms.iter().find(|t| t.id == id)
    }
}

impl TermStore for MemoryTermStore {
    fn find_term(
        &self,
        name_or_slug: &str,
        kind: TaxonomyKind,
    ) -> Result<Option<TermRef>, StoreError> {
        Ok(self
            .terms
            .iter()
            .find(|t| t.kind == kind && (t.name == name_or_slug || t.slug == name_or_slug))
            .cloned()
            .map(TermRef::Existing))
    }

    fn insert_term(
        &mut self,
        name: &str,
        kind: TaxonomyKind,
        args: &TermArgs,
    ) -> Result<TermRef, StoreError> {
        if self.terms.iter().any(|t| t.kind == kind && t.name == name) {
            return Err(StoreError::DuplicateTerm {
                name: name.to_string(),
            });
        }

        let id = TermId::new();
        // Terms inserted without an explicit slug get one derived from the name
        let slug = match &args.slug {
            Some(slug) => slug.clone(),
            None => slugify(name),
        };

        self.terms.push(ExistingTerm {
            id,
            name: name.to_string(),
            slug,
            description: args.description.clone(),
            kind,
            parent: args.parent,
        });

        tracing::debug!("Inserted {} term '{}' ({})", kind, name, id);
        Ok(TermRef::Created(id))
    }
}
