//! Error types for the stdio server

use thiserror::Error;

/// Result type alias for server operations
pub type Result<T> = std::result::Result<T, ServerError>;

/// Errors that end the server loop (per-request problems become JSON-RPC errors)
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("I/O error on stdio channel: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
