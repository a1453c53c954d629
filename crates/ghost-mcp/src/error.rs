//! Error types for ghost-mcp

use rmcp::model::ErrorData;
use thiserror::Error;

/// Result type alias for ghost-mcp operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ghost-mcp
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from ghost-mcp-core
    #[error(transparent)]
    Core(#[from] ghost_mcp_core::Error),

    /// Error from ghost-mcp-client
    #[error(transparent)]
    Client(#[from] ghost_mcp_client::Error),
}

/// Convert adapter-layer failures into protocol error payloads.
///
/// Tool calls normally surface failures as error-flagged
/// `CallToolResult`s; this conversion is for the surfaces that must
/// answer with an `ErrorData` instead (resource reads, prompts).
pub trait McpErrorExt {
    /// Map the error onto the closest protocol error code.
    fn to_mcp_error(&self) -> ErrorData;
}

impl McpErrorExt for ghost_mcp_client::Error {
    fn to_mcp_error(&self) -> ErrorData {
        if self.is_not_configured() {
            return ErrorData::invalid_request("Ghost API not configured", None);
        }
        match self {
            ghost_mcp_client::Error::Api { status: 404, .. } => {
                ErrorData::resource_not_found(self.to_string(), None)
            }
            other => ErrorData::internal_error(other.to_string(), None),
        }
    }
}
