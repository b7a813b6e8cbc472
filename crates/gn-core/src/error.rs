//! Error types for gn-core.

use thiserror::Error;

/// Result alias used throughout the core crate.
pub type GnResult<T> = Result<T, GnError>;

#[derive(Error, Debug)]
pub enum GnError {
    #[error("Unknown period name: {name}")]
    UnknownPeriod { name: String },
}
