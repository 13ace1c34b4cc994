mod mapping;

pub use mapping::ColumnMap;

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::error::ImporterError;
use crate::sanitize::{sanitize_text, slugify};
use crate::store::TermStore;
use crate::types::{ImportSummary, TaxonomyKind, TermArgs, TermId, TermRef};

/// Imports taxonomy terms from CSV documents into a term store.
///
/// Each call to [`Importer::import`] is one linear pass over the rows with
/// its own session cache, so a row may name any *earlier* row of the same
/// file as its parent. A parent named only in a later row never resolves;
/// the term is simply created without one.
pub struct Importer<'a, S: TermStore> {
    store: &'a mut S,
}

impl<'a, S: TermStore> Importer<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    /// Open `path` and import its rows. An unreadable file fails the call
    /// before any row is processed.
    pub fn import_path<P: AsRef<Path>>(
        &mut self,
        path: P,
        kind: TaxonomyKind,
    ) -> Result<ImportSummary, ImporterError> {
        let path = path.as_ref();
        tracing::debug!("Reading taxonomy data from {:?}", path);
        let file = File::open(path)?;
        self.import(file, kind)
    }

    /// Run one import pass over `reader`.
    pub fn import<R: Read>(
        &mut self,
        reader: R,
        kind: TaxonomyKind,
    ) -> Result<ImportSummary, ImporterError> {
        let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);

        let headers = rdr.headers()?.clone();
        if headers.iter().all(|h| h.trim().is_empty()) {
            return Err(ImporterError::InvalidFormat(
                "file is empty or invalid".to_string(),
            ));
        }

        let columns = ColumnMap::from_headers(&headers)?;
        tracing::debug!("Resolved CSV columns: {:?}", columns);

        let mut session = ImportSession::new(kind);

        for result in rdr.records() {
            let record = match result {
                Ok(record) => record,
                // an IO failure means the stream itself is gone; anything
                // else is one bad record
                Err(e) if e.is_io_error() => return Err(ImporterError::Csv(e)),
                Err(e) => {
                    tracing::warn!("Skipping unreadable CSV record: {}", e);
                    session.summary.errors += 1;
                    continue;
                }
            };

            // Rows with nothing in them are not data; they count nowhere.
            if record.iter().all(|cell| cell.trim().is_empty()) {
                continue;
            }

            session.process_row(self.store, &columns, &record);
        }

        tracing::info!(
            "Import into {} complete: created {}, skipped {}, errors {}",
            kind,
            session.summary.created,
            session.summary.skipped,
            session.summary.errors
        );
        Ok(session.summary)
    }
}

/// Header-only check: runs the open and header guards against `path` and
/// reports the resolved columns without touching any store.
pub fn validate_path<P: AsRef<Path>>(path: P) -> Result<ColumnMap, ImporterError> {
    let file = File::open(path.as_ref())?;
    validate(file)
}

/// Header-only check over an already-open reader.
pub fn validate<R: Read>(reader: R) -> Result<ColumnMap, ImporterError> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = rdr.headers()?.clone();
    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(ImporterError::InvalidFormat(
            "file is empty or invalid".to_string(),
        ));
    }
    ColumnMap::from_headers(&headers)
}

/// Per-call state: the counters plus the name→term cache that makes
/// same-file parent references work.
///
/// The cache is keyed by the trimmed name exactly as first seen in the file
/// and is never evicted during the pass.
struct ImportSession {
    kind: TaxonomyKind,
    name_to_term: HashMap<String, TermRef>,
    summary: ImportSummary,
}

impl ImportSession {
    fn new(kind: TaxonomyKind) -> Self {
        Self {
            kind,
            name_to_term: HashMap::new(),
            summary: ImportSummary::default(),
        }
    }

    fn process_row<S: TermStore>(
        &mut self,
        store: &mut S,
        columns: &ColumnMap,
        record: &StringRecord,
    ) {
        let name = columns.name_cell(record).trim();
        if name.is_empty() {
            self.summary.skipped += 1;
            return;
        }

        let mut args = TermArgs::default();

        if let Some(slug) = columns.get(record, columns.slug) {
            let slug = slug.trim();
            if !slug.is_empty() {
                args.slug = Some(slugify(slug));
            }
        }

        if let Some(description) = columns.get(record, columns.description) {
            let description = description.trim();
            if !description.is_empty() {
                args.description = Some(sanitize_text(description));
            }
        }

        if self.kind.is_hierarchical() {
            if let Some(parent) = columns.get(record, columns.parent) {
                let parent = parent.trim();
                if !parent.is_empty() {
                    args.parent = self.resolve_parent(store, parent);
                }
            }
        }

        // An existing name is never re-created or updated, but it still
        // becomes visible to later rows as a parent.
        match self.lookup(store, name) {
            Some(existing) => {
                tracing::debug!("Term '{}' already exists in {}, skipping", name, self.kind);
                self.summary.skipped += 1;
                self.name_to_term.insert(name.to_string(), existing);
            }
            None => match store.insert_term(name, self.kind, &args) {
                Ok(created) => {
                    tracing::debug!("Created {} term '{}' ({})", self.kind, name, created.id());
                    self.summary.created += 1;
                    self.name_to_term.insert(name.to_string(), created);
                }
                Err(e) => {
                    tracing::warn!("Failed to create term '{}': {}", name, e);
                    self.summary.errors += 1;
                }
            },
        }
    }

    /// Store first, then the session cache. A parent found by neither path
    /// leaves the term top-level; that is not a row error.
    fn resolve_parent<S: TermStore>(&self, store: &S, parent_name: &str) -> Option<TermId> {
        if let Some(term) = self.lookup(store, parent_name) {
            return Some(term.id());
        }
        match self.name_to_term.get(parent_name) {
            Some(term) => Some(term.id()),
            None => {
                tracing::debug!("Parent '{}' not found, leaving term top-level", parent_name);
                None
            }
        }
    }

    /// Existence lookup that never fails the row: a backend error reads as
    /// "not found".
    fn lookup<S: TermStore>(&self, store: &S, name: &str) -> Option<TermRef> {
        match store.find_term(name, self.kind) {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!("Term lookup for '{}' failed: {}", name, e);
                None
            }
        }
    }
}
