//! Error types for ABI export

use thiserror::Error;

/// Result type alias for export operations
pub type Result<T> = std::result::Result<T, ExportError>;

/// Main error type for export operations
#[derive(Debug, Error)]
pub enum ExportError {
    /// Artifact exists but its abi field is missing or unusable
    #[error("couldn't find expected abi in {0}")]
    MissingAbi(String),

    /// Failed to read an artifact file that exists on disk
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse an artifact file as JSON
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization or deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ExportError {
    pub fn missing_abi(path: impl Into<String>) -> Self {
        Self::MissingAbi(path.into())
    }
}
