//! Error types for the Arcada pipeline.
//!
//! All crates return `ArcadaResult<T>` from fallible operations.

use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for the Arcada pipeline.
#[derive(Debug, Error)]
pub enum ArcadaError {
    /// Filesystem operation failed on a required input or on the output.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path the operation was reading or writing.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Serialization failure while writing the manifest.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ArcadaError {
    /// Wraps an I/O error together with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias for `Result<T, ArcadaError>`.
pub type ArcadaResult<T> = Result<T, ArcadaError>;
