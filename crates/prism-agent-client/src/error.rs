//! Client error types.

use crate::models::ErrorResponse;

/// Errors from Prism Agent API calls.
#[derive(Debug, thiserror::Error)]
pub enum PrismAgentError {
    /// HTTP transport error.
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// The agent answered with a documented error status; the problem
    /// document it returned is attached.
    #[error("{endpoint} returned {status}: {error}")]
    Api {
        endpoint: String,
        status: u16,
        error: ErrorResponse,
    },
    /// The agent answered with a status outside the documented set and the
    /// client is configured to treat that as fatal.
    #[error("unexpected status {status} from {endpoint}")]
    UnexpectedStatus {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// Response deserialization failed.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        source: reqwest::Error,
    },
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
    /// The blocking facade could not build its tokio runtime.
    #[error("failed to build blocking runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

impl PrismAgentError {
    /// Status code of an `Api` or `UnexpectedStatus` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } | Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
