use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("a term named '{name}' already exists in this taxonomy")]
    DuplicateTerm { name: String },
    #[error("term store error: {0}")]
    Backend(String),
}

#[derive(Debug, Error)]
pub enum ImporterError {
    #[error("could not open CSV file: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid CSV format: {0}")]
    InvalidFormat(String),
    #[error("unknown taxonomy kind: '{0}' [Expected: category, tag]")]
    UnknownTaxonomy(String),
    #[error("term store error: {0}")]
    Store(#[from] StoreError),
}
