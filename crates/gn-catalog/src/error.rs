//! Error types for catalog ingest.

use std::path::PathBuf;

use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {path}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed catalog entry at {at}: expected {expected}")]
    Shape { at: String, expected: &'static str },
}
