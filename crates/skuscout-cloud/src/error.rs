//! Cloud catalog error types

use thiserror::Error;

/// Errors a SKU catalog query can produce
#[derive(Error, Debug)]
pub enum CloudError {
    #[error("Provider CLI not found: {0}")]
    CliNotFound(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Command execution failed: {0}")]
    CommandFailed(String),

    #[error("Timeout")]
    Timeout,

    #[error("Unexpected failure: {0}")]
    Unexpected(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CloudError>;
