//! Error types for the gn-app service layer.

use std::path::PathBuf;

/// Application-level error wrapping the backend crates, one surface for
/// every host frontend.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] gn_catalog::CatalogError),

    #[error("Failed to read defaults file: {path}")]
    DefaultsFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Defaults error: {0}")]
    Defaults(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
