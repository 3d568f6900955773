//! Typed client for the agent's `_system` endpoints.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET    | `/_system/health` | Liveness probe with running version |

use crate::error::PrismAgentError;
use crate::models::HealthInfo;
use crate::response;

/// Client for the system service.
#[derive(Debug, Clone)]
pub struct SystemClient {
    http: reqwest::Client,
    base_url: url::Url,
    strict: bool,
}

impl SystemClient {
    pub(crate) fn new(http: reqwest::Client, base_url: url::Url, strict: bool) -> Self {
        Self {
            http,
            base_url,
            strict,
        }
    }

    /// Check the agent is up and report its running version.
    ///
    /// Calls `GET {base_url}/_system/health`.
    pub async fn health(&self) -> Result<Option<HealthInfo>, PrismAgentError> {
        let endpoint = "GET /_system/health";
        let url = format!("{}_system/health", self.base_url);

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| PrismAgentError::Http {
                endpoint: endpoint.into(),
                source: e,
            })?;

        match resp.status().as_u16() {
            200 => response::decode(endpoint, resp).await.map(Some),
            status @ 500 => Err(response::api_error(endpoint, status, resp).await),
            status => response::unexpected(self.strict, endpoint, status, resp).await,
        }
    }
}
