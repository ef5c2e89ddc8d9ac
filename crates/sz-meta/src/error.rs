//! Error types for metadata and layout-store operations.

use thiserror::Error;

/// Errors that can occur while loading or saving collaborator state.
#[derive(Error, Debug)]
pub enum MetaError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for metadata operations.
pub type Result<T> = std::result::Result<T, MetaError>;
