use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::ImporterError;

/// Which taxonomy a term belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxonomyKind {
    Category,
    Tag,
}

impl TaxonomyKind {
    /// Parent references are only meaningful for hierarchical taxonomies.
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, TaxonomyKind::Category)
    }
}

impl FromStr for TaxonomyKind {
    type Err = ImporterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "category" => Ok(TaxonomyKind::Category),
            // "post_tag" is the wire name some backends use for the tag taxonomy
            "tag" | "post_tag" => Ok(TaxonomyKind::Tag),
            other => Err(ImporterError::UnknownTaxonomy(other.to_string())),
        }
    }
}

impl fmt::Display for TaxonomyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaxonomyKind::Category => write!(f, "category"),
            TaxonomyKind::Tag => write!(f, "tag"),
        }
    }
}

/// Opaque identifier issued by the term store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TermId(Uuid);

impl TermId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TermId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TermId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A persisted term as surfaced by store lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExistingTerm {
    pub id: TermId,
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub kind: TaxonomyKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<TermId>,
}

/// Reference to a term in the store.
///
/// Lookups surface either a bare identifier (a freshly created term) or the
/// full persisted record; callers that only need the identifier go through
/// [`TermRef::id`] and treat both shapes uniformly.
#[derive(Debug, Clone)]
pub enum TermRef {
    Created(TermId),
    Existing(ExistingTerm),
}

impl TermRef {
    pub fn id(&self) -> TermId {
        match self {
            TermRef::Created(id) => *id,
            TermRef::Existing(term) => term.id,
        }
    }
}

/// Optional attributes attached to a term creation request.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TermArgs {
    pub slug: Option<String>,
    pub description: Option<String>,
    pub parent: Option<TermId>,
}

/// Aggregate counters for one import run.
///
/// Blank-name rows and already-existing terms share the `skipped` counter;
/// the summary does not distinguish the two.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub created: u64,
    pub skipped: u64,
    pub errors: u64,
}

impl fmt::Display for ImportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Created: {} | Skipped: {} | Errors: {}",
            self.created, self.skipped, self.errors
        )
    }
}
