//! Error types for the flashdeck library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for flashdeck operations.
#[derive(Debug, Error)]
pub enum FlashdeckError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Notes were not valid UTF-8 text.
    #[error("Could not decode notes: {0}")]
    Decode(String),

    /// Configuration error (missing key, bad model name, client setup).
    #[error("Configuration error: {0}")]
    Config(String),

    /// The completion service failed or returned an unusable response.
    #[error("Completion service error: {0}")]
    Completion(String),

    /// Error saving or loading a deck file.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Error reading or writing the stored credential.
    #[error("Credential store error: {0}")]
    Credential(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for flashdeck operations.
pub type Result<T> = std::result::Result<T, FlashdeckError>;
