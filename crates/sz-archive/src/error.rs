//! Error types for seed archive operations.
//!
//! Every failure is fatal and surfaced to the caller; nothing is retried
//! internally. A digest mismatch is deliberately absent here — the validator
//! reports it as a normal result, not an error.

use thiserror::Error;

/// Errors that can occur while packing or unpacking seeds.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// Input path missing or unreadable
    #[error("source not found: {path}: {source}")]
    SourceNotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// I/O error writing the archive or reconstructed files
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Corrupt or truncated compressed stream
    #[error("decompression failed: {0}")]
    Decompression(#[source] std::io::Error),

    /// Decompressed document is not a well-formed bundle
    #[error("malformed bundle: {0}")]
    MalformedBundle(String),

    /// Invalid base64 payload inside an otherwise well-formed bundle
    #[error("invalid payload encoding: {0}")]
    Encoding(#[from] base64::DecodeError),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for archive operations.
pub type Result<T> = std::result::Result<T, ArchiveError>;
