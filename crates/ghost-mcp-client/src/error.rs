//! Error types for ghost-mcp-client

use thiserror::Error;

/// Result type alias for ghost-mcp-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ghost-mcp-client
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from ghost-mcp-core (configuration, credential format).
    #[error(transparent)]
    Core(#[from] ghost_mcp_core::Error),

    /// Transport-level failure (connect, timeout, decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote answered with a non-2xx status.
    #[error("Ghost API returned {status}: {body}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Response body, pretty-printed when it was JSON.
        body: String,
    },

    /// The response body did not match the bulk-envelope convention.
    #[error("Unexpected response shape: {0}")]
    Envelope(String),
}

impl Error {
    /// Whether this failure means no configuration was initialized.
    ///
    /// Tool adapters surface that case with a distinct message instead
    /// of the generic `status=...` formatting.
    pub fn is_not_configured(&self) -> bool {
        matches!(self, Self::Core(ghost_mcp_core::Error::NotConfigured))
    }

    /// Normalize any failure into a `(status, body)` pair.
    ///
    /// Fallback order, applied uniformly by every adapter:
    /// 1. status from the remote response, else from the transport
    ///    error, else the literal `"unknown"`;
    /// 2. body from the remote response text, else the transport
    ///    error's message, else the error's display form.
    pub fn failure_parts(&self) -> (String, String) {
        match self {
            Self::Api { status, body } => (status.to_string(), body.clone()),
            Self::Http(e) => {
                let status = e
                    .status()
                    .map(|s| s.as_u16().to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                (status, e.to_string())
            }
            other => ("unknown".to_string(), other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_failure_parts() {
        let err = Error::Api {
            status: 404,
            body: "{\n  \"errors\": []\n}".to_string(),
        };
        let (status, body) = err.failure_parts();
        assert_eq!(status, "404");
        assert!(body.contains("errors"));
    }

    #[test]
    fn test_core_failure_parts_fall_back_to_unknown() {
        let err = Error::Core(ghost_mcp_core::Error::CredentialFormat(
            "expected '<id>:<secret>' format".into(),
        ));
        let (status, body) = err.failure_parts();
        assert_eq!(status, "unknown");
        assert!(body.contains("expected '<id>:<secret>' format"));
    }

    #[test]
    fn test_envelope_failure_parts() {
        let err = Error::Envelope("response missing 'tags' field".into());
        let (status, body) = err.failure_parts();
        assert_eq!(status, "unknown");
        assert!(body.contains("missing 'tags'"));
    }

    #[test]
    fn test_not_configured_detection() {
        let err = Error::Core(ghost_mcp_core::Error::NotConfigured);
        assert!(err.is_not_configured());

        let other = Error::Envelope("x".into());
        assert!(!other.is_not_configured());
    }
}
