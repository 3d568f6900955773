//! Typed client for W3C DID resolution on the Prism agent.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET    | `/dids/{didRef}` | Resolve a DID to a DID document |
//!
//! Resolution follows the W3C DID Resolution HTTP binding: the agent
//! answers *every* documented status (success or failure) with a
//! [`DidResolutionResult`](crate::models::DidResolutionResult) envelope,
//! and failures are reported inside `didResolutionMetadata.error`
//! (`notFound`, `invalidDid`, `representationNotSupported`, ...) rather
//! than through the problem-document shape the other services use.

use crate::error::PrismAgentError;
use crate::models::DidResolutionResult;
use crate::response;

/// Client for the DID resolution endpoint.
#[derive(Debug, Clone)]
pub struct DidClient {
    http: reqwest::Client,
    base_url: url::Url,
    strict: bool,
}

impl DidClient {
    pub(crate) fn new(http: reqwest::Client, base_url: url::Url, strict: bool) -> Self {
        Self {
            http,
            base_url,
            strict,
        }
    }

    /// Resolve a DID reference (`did:prism:...`, long or canonical form).
    ///
    /// Calls `GET {base_url}/dids/{didRef}`. Statuses `200`, `400`, `404`,
    /// `406`, `410`, `500` and `501` all decode the resolution envelope;
    /// check [`DidResolutionResult::is_resolved`] or
    /// `did_resolution_metadata.error` to tell the cases apart.
    pub async fn resolve(
        &self,
        did_ref: &str,
    ) -> Result<Option<DidResolutionResult>, PrismAgentError> {
        let endpoint = format!("GET /dids/{did_ref}");
        let url = format!("{}dids/{did_ref}", self.base_url);

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| PrismAgentError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        match resp.status().as_u16() {
            200 | 400 | 404 | 406 | 410 | 500 | 501 => {
                response::decode(&endpoint, resp).await.map(Some)
            }
            status => response::unexpected(self.strict, &endpoint, status, resp).await,
        }
    }
}
