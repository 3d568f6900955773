//! Typed client for the present-proof protocol of the Prism agent.
//!
//! The verifier requests a presentation over a connection; the prover
//! answers the request by patching the presentation with an action
//! (`request-accept` plus the IDs of the credentials to present, or
//! `request-reject`). The verifier then polls until the status reaches
//! `PresentationVerified`.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | POST   | `/present-proof/presentations` | Request a presentation (verifier) |
//! | GET    | `/present-proof/presentations` | List presentations (paginated) |
//! | GET    | `/present-proof/presentations/{presentationId}` | Get one presentation |
//! | PATCH  | `/present-proof/presentations/{presentationId}` | Accept/reject (prover) |

use uuid::Uuid;

use crate::error::PrismAgentError;
use crate::models::{
    PresentationStatus, PresentationStatusPage, RequestPresentationAction,
    RequestPresentationInput, RequestPresentationOutput,
};
use crate::response;

/// Client for the present-proof protocol.
#[derive(Debug, Clone)]
pub struct PresentProofClient {
    http: reqwest::Client,
    base_url: url::Url,
    strict: bool,
}

impl PresentProofClient {
    pub(crate) fn new(http: reqwest::Client, base_url: url::Url, strict: bool) -> Self {
        Self {
            http,
            base_url,
            strict,
        }
    }

    /// Request a proof presentation from the peer on a connection.
    ///
    /// Calls `POST {base_url}/present-proof/presentations`. Only the new
    /// presentation's ID comes back; poll [`get`](Self::get) for progress.
    pub async fn request(
        &self,
        req: &RequestPresentationInput,
    ) -> Result<Option<RequestPresentationOutput>, PrismAgentError> {
        let endpoint = "POST /present-proof/presentations";
        let url = format!("{}present-proof/presentations", self.base_url);

        let resp = self
            .http
            .post(&url)
            .json(req)
            .send()
            .await
            .map_err(|e| PrismAgentError::Http {
                endpoint: endpoint.into(),
                source: e,
            })?;

        match resp.status().as_u16() {
            201 => response::decode(endpoint, resp).await.map(Some),
            status @ (400 | 500) => Err(response::api_error(endpoint, status, resp).await),
            status => response::unexpected(self.strict, endpoint, status, resp).await,
        }
    }

    /// List presentations on this agent, prover and verifier side alike.
    ///
    /// Calls `GET {base_url}/present-proof/presentations?offset=&limit=&thid=`.
    /// `thid` filters by DIDComm thread ID, which ties a prover-side
    /// presentation to the verifier's request.
    pub async fn list(
        &self,
        offset: Option<u32>,
        limit: Option<u32>,
        thid: Option<&str>,
    ) -> Result<Option<PresentationStatusPage>, PrismAgentError> {
        let endpoint = "GET /present-proof/presentations";
        let url = format!("{}present-proof/presentations", self.base_url);

        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(offset) = offset {
            query.push(("offset", offset.to_string()));
        }
        if let Some(limit) = limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(thid) = thid {
            query.push(("thid", thid.to_string()));
        }

        let mut req = self.http.get(&url);
        if !query.is_empty() {
            req = req.query(&query);
        }

        let resp = req.send().await.map_err(|e| PrismAgentError::Http {
            endpoint: endpoint.into(),
            source: e,
        })?;

        match resp.status().as_u16() {
            200 => response::decode(endpoint, resp).await.map(Some),
            status @ (400 | 500) => Err(response::api_error(endpoint, status, resp).await),
            status => response::unexpected(self.strict, endpoint, status, resp).await,
        }
    }

    /// Get one presentation by ID.
    ///
    /// Calls `GET {base_url}/present-proof/presentations/{presentationId}`.
    pub async fn get(
        &self,
        presentation_id: Uuid,
    ) -> Result<Option<PresentationStatus>, PrismAgentError> {
        let endpoint = format!("GET /present-proof/presentations/{presentation_id}");
        let url = format!(
            "{}present-proof/presentations/{presentation_id}",
            self.base_url
        );

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
            200 => response::decode(&endpoint, resp).await.map(Some),
            status @ (400 | 404 | 500) => Err(response::api_error(&endpoint, status, resp).await),
            status => response::unexpected(self.strict, &endpoint, status, resp).await,
        }
    }

    /// Answer a presentation request as the prover, or reject it.
    ///
    /// Calls `PATCH {base_url}/present-proof/presentations/{presentationId}`.
    /// For `request-accept` the action carries the issue-credential record
    /// IDs backing the proof.
    pub async fn update(
        &self,
        presentation_id: Uuid,
        req: &RequestPresentationAction,
    ) -> Result<Option<PresentationStatus>, PrismAgentError> {
        let endpoint = format!("PATCH /present-proof/presentations/{presentation_id}");
        let url = format!(
            "{}present-proof/presentations/{presentation_id}",
            self.base_url
        );

        let resp = self
            .http
            .patch(&url)
            .json(req)
            .send()
            .await
            .map_err(|e| PrismAgentError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        match resp.status().as_u16() {
            200 => response::decode(&endpoint, resp).await.map(Some),
            status @ (400 | 404 | 500) => Err(response::api_error(&endpoint, status, resp).await),
            status => response::unexpected(self.strict, &endpoint, status, resp).await,
        }
    }
}
