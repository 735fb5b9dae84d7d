//! Error types for output generation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing run outputs.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Filesystem operation failed.
    #[error("failed to {operation} {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Temp file could not be renamed over the target.
    #[error("failed to move {temp_path} into place at {target_path}: {source}")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV serialization failed.
    #[error("failed to encode CSV: {message}")]
    Csv { message: String },

    /// Source path has no file name to derive output names from.
    #[error("cannot derive output names from {path}")]
    InvalidSourcePath { path: PathBuf },

    /// Derived output path would replace the source file.
    #[error("output {path} would overwrite the source file")]
    OverwritesSource { path: PathBuf },
}

impl OutputError {
    pub(crate) fn io(operation: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }
}

impl From<csv::Error> for OutputError {
    fn from(err: csv::Error) -> Self {
        Self::Csv {
            message: err.to_string(),
        }
    }
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
