//! Response handling shared by every endpoint method.
//!
//! Each endpoint follows the same template: format the URL, send, then map
//! the status code. The documented success status decodes the endpoint's
//! model; documented error statuses decode the agent's problem document;
//! anything else lands in [`unexpected`], which honors the client-wide
//! `raise_on_unexpected_status` flag.

use serde::de::DeserializeOwned;

use crate::error::PrismAgentError;
use crate::models::ErrorResponse;

/// Decode a success body into `T`.
pub(crate) async fn decode<T: DeserializeOwned>(
    endpoint: &str,
    resp: reqwest::Response,
) -> Result<T, PrismAgentError> {
    resp.json()
        .await
        .map_err(|e| PrismAgentError::Deserialization {
            endpoint: endpoint.to_string(),
            source: e,
        })
}

/// Decode a documented error status into the problem document.
pub(crate) async fn api_error(
    endpoint: &str,
    status: u16,
    resp: reqwest::Response,
) -> PrismAgentError {
    match resp.json::<ErrorResponse>().await {
        Ok(error) => PrismAgentError::Api {
            endpoint: endpoint.to_string(),
            status,
            error,
        },
        Err(source) => PrismAgentError::Deserialization {
            endpoint: endpoint.to_string(),
            source,
        },
    }
}

/// Handle a status outside the endpoint's documented set.
pub(crate) async fn unexpected<T>(
    strict: bool,
    endpoint: &str,
    status: u16,
    resp: reqwest::Response,
) -> Result<Option<T>, PrismAgentError> {
    let body = resp.text().await.unwrap_or_default();
    if strict {
        Err(PrismAgentError::UnexpectedStatus {
            endpoint: endpoint.to_string(),
            status,
            body,
        })
    } else {
        tracing::warn!(endpoint, status, "ignoring unexpected status");
        Ok(None)
    }
}
