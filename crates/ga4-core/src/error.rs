//! Error types for ga4-core

use thiserror::Error;

/// Result type alias using ga4-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ga4-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP transport error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend API returned an error response
    #[error("API error: {0}")]
    Api(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Runtime configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Parameter storage error
    #[error("Storage error: {0}")]
    Storage(String),
}
