//! Error types for ghost-mcp-core

use thiserror::Error;

/// Result type alias for ghost-mcp-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ghost-mcp-core
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// No Ghost configuration has been initialized yet.
    #[error("Ghost API not configured")]
    NotConfigured,

    /// Configuration loading or validation failed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The admin API key is not in the `<id>:<hexSecret>` shape.
    #[error("Invalid admin key: {0}")]
    CredentialFormat(String),

    /// JWT signing failed.
    #[error("Token signing error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl Error {
    /// Build a configuration error from any displayable cause.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
