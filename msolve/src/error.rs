//! Error types for msolve storage and session operations

use std::path::PathBuf;

use msolve_core::MatrixError;
use thiserror::Error;

/// Errors that can occur outside the pure matrix engine
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid operands or input text
    #[error(transparent)]
    Matrix(#[from] MatrixError),

    /// Reading or writing a stored value failed
    #[error("Storage I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stored value could not be encoded or decoded
    #[error("Invalid stored data: {0}")]
    Json(#[from] serde_json::Error),

    /// Rejected configuration value
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for msolve operations
pub type Result<T> = std::result::Result<T, Error>;
