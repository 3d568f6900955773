//! Typed client for the DID registrar service of the Prism agent.
//!
//! The registrar manages DIDs whose keys live in the agent's wallet.
//! A managed DID starts life as `CREATED` (long form only), becomes
//! `PUBLICATION_PENDING` once its create operation is submitted to the
//! ledger, and `PUBLISHED` when the operation is confirmed. Updates and
//! deactivations are likewise asynchronous: the agent answers `202` with
//! a scheduled-operation handle, and the DID document changes only after
//! ledger confirmation.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET    | `/did-registrar/dids` | List managed DIDs (paginated) |
//! | GET    | `/did-registrar/dids/{didRef}` | Get a managed DID |
//! | POST   | `/did-registrar/dids` | Create an unpublished DID |
//! | POST   | `/did-registrar/dids/{didRef}/updates` | Schedule an update |
//! | POST   | `/did-registrar/dids/{didRef}/publications` | Publish to the ledger |
//! | POST   | `/did-registrar/dids/{didRef}/deactivations` | Deactivate |

use crate::error::PrismAgentError;
use crate::models::{
    CreateManagedDidRequest, CreateManagedDidResponse, DidOperationResponse, ManagedDid,
    ManagedDidPage, UpdateManagedDidRequest,
};
use crate::response;

/// Client for the DID registrar service.
#[derive(Debug, Clone)]
pub struct DidRegistrarClient {
    http: reqwest::Client,
    base_url: url::Url,
    strict: bool,
}

impl DidRegistrarClient {
    pub(crate) fn new(http: reqwest::Client, base_url: url::Url, strict: bool) -> Self {
        Self {
            http,
            base_url,
            strict,
        }
    }

    /// List DIDs managed by the agent's wallet.
    ///
    /// Calls `GET {base_url}/did-registrar/dids?offset=&limit=`.
    pub async fn list(
        &self,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Option<ManagedDidPage>, PrismAgentError> {
        let endpoint = "GET /did-registrar/dids";
        let url = format!("{}did-registrar/dids", self.base_url);

        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(offset) = offset {
            query.push(("offset", offset.to_string()));
        }
        if let Some(limit) = limit {
            query.push(("limit", limit.to_string()));
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

    /// Get one managed DID by reference (long or canonical form).
    ///
    /// Calls `GET {base_url}/did-registrar/dids/{didRef}`.
    pub async fn get(&self, did_ref: &str) -> Result<Option<ManagedDid>, PrismAgentError> {
        let endpoint = format!("GET /did-registrar/dids/{did_ref}");
        let url = format!("{}did-registrar/dids/{did_ref}", self.base_url);

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

    /// Create an unpublished (long-form) DID in the agent's wallet.
    ///
    /// Calls `POST {base_url}/did-registrar/dids`. The DID is usable
    /// immediately in its long form; call [`publish`](Self::publish) to
    /// anchor it on the ledger.
    pub async fn create(
        &self,
        req: &CreateManagedDidRequest,
    ) -> Result<Option<CreateManagedDidResponse>, PrismAgentError> {
        let endpoint = "POST /did-registrar/dids";
        let url = format!("{}did-registrar/dids", self.base_url);

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
            status @ (400 | 422 | 500) => Err(response::api_error(endpoint, status, resp).await),
            status => response::unexpected(self.strict, endpoint, status, resp).await,
        }
    }

    /// Schedule an update operation (add/remove keys or services) for a
    /// published DID.
    ///
    /// Calls `POST {base_url}/did-registrar/dids/{didRef}/updates`. A `409`
    /// means another operation for the same DID is still pending.
    pub async fn update(
        &self,
        did_ref: &str,
        req: &UpdateManagedDidRequest,
    ) -> Result<Option<DidOperationResponse>, PrismAgentError> {
        let endpoint = format!("POST /did-registrar/dids/{did_ref}/updates");
        let url = format!("{}did-registrar/dids/{did_ref}/updates", self.base_url);

        let resp = self
            .http
            .post(&url)
            .json(req)
            .send()
            .await
            .map_err(|e| PrismAgentError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        match resp.status().as_u16() {
            202 => response::decode(&endpoint, resp).await.map(Some),
            status @ (400 | 404 | 409 | 422 | 500) => {
                Err(response::api_error(&endpoint, status, resp).await)
            }
            status => response::unexpected(self.strict, &endpoint, status, resp).await,
        }
    }

    /// Submit the DID's create operation to the ledger.
    ///
    /// Calls `POST {base_url}/did-registrar/dids/{didRef}/publications`.
    pub async fn publish(
        &self,
        did_ref: &str,
    ) -> Result<Option<DidOperationResponse>, PrismAgentError> {
        let endpoint = format!("POST /did-registrar/dids/{did_ref}/publications");
        let url = format!("{}did-registrar/dids/{did_ref}/publications", self.base_url);

        let resp = self
            .http
            .post(&url)
            .send()
            .await
            .map_err(|e| PrismAgentError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        match resp.status().as_u16() {
            202 => response::decode(&endpoint, resp).await.map(Some),
            status @ (400 | 404 | 500) => Err(response::api_error(&endpoint, status, resp).await),
            status => response::unexpected(self.strict, &endpoint, status, resp).await,
        }
    }

    /// Schedule deactivation of a published DID.
    ///
    /// Calls `POST {base_url}/did-registrar/dids/{didRef}/deactivations`.
    /// Deactivation is permanent once the operation confirms.
    pub async fn deactivate(
        &self,
        did_ref: &str,
    ) -> Result<Option<DidOperationResponse>, PrismAgentError> {
        let endpoint = format!("POST /did-registrar/dids/{did_ref}/deactivations");
        let url = format!(
            "{}did-registrar/dids/{did_ref}/deactivations",
            self.base_url
        );

        let resp = self
            .http
            .post(&url)
            .send()
            .await
            .map_err(|e| PrismAgentError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        match resp.status().as_u16() {
            202 => response::decode(&endpoint, resp).await.map(Some),
            status @ (400 | 404 | 500) => Err(response::api_error(&endpoint, status, resp).await),
            status => response::unexpected(self.strict, &endpoint, status, resp).await,
        }
    }
}
