//! Error types for schema conversion operations
//!
//! Copyright (c) 2025 Json2Rst Team
//! Licensed under the Apache-2.0 license

use std::path::PathBuf;
use thiserror::Error;

/// Result type for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Error types for schema loading, traversal and document emission
#[derive(Error, Debug)]
pub enum ConvertError {
    /// File I/O errors, on either the input or the output side
    #[error("failed to access '{}': {}", path.display(), source)]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// JSON parsing errors
    #[error("failed to parse JSON file '{}': {}", path.display(), source)]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Structural schema errors (missing or malformed fields)
    #[error("invalid schema '{}': {}", path.display(), reason)]
    Schema { path: PathBuf, reason: String },
}

impl ConvertError {
    /// Create an I/O error with path context
    pub fn io_error(path: PathBuf, source: std::io::Error) -> Self {
        Self::Io { path, source }
    }

    /// Create a JSON parsing error with path context
    pub fn parse_error(path: PathBuf, source: serde_json::Error) -> Self {
        Self::Parse { path, source }
    }

    /// Create a schema error with path context
    pub fn schema_error(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Schema {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get the file this error refers to
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Io { path, .. } => path,
            Self::Parse { path, .. } => path,
            Self::Schema { path, .. } => path,
        }
    }
}
