//! Dataset loading error types.

use std::path::PathBuf;

use crate::domain::{DomainError, InvalidId};

/// Errors that can occur while loading the network dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// Reading a data file failed
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A data file is not valid JSON for its schema
    #[error("failed to parse {file}: {message}")]
    Json { file: String, message: String },

    /// An identifier is malformed
    #[error(transparent)]
    InvalidId(#[from] InvalidId),

    /// A boarding map uses a key other than front, middle or back
    #[error("{context} has unknown boarding position {key:?}")]
    UnknownPosition { context: String, key: String },

    /// The records do not form a consistent network
    #[error(transparent)]
    Domain(#[from] DomainError),
}
