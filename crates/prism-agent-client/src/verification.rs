//! Typed client for verification policies on the Prism agent.
//!
//! A verification policy names the constraints (schema plus trusted
//! issuers) a verifier applies when checking presented credentials.
//! Policies are optimistically locked: every stored policy carries a
//! `nonce`, and updates and deletes must echo the nonce of the revision
//! they were based on or the agent refuses the write.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | POST   | `/verification/policies` | Create a policy |
//! | GET    | `/verification/policies` | Lookup by name (paginated) |
//! | GET    | `/verification/policies/{id}` | Get a policy |
//! | PUT    | `/verification/policies/{id}?nonce=` | Update (optimistic lock) |
//! | DELETE | `/verification/policies/{id}?nonce=` | Delete (optimistic lock) |

use uuid::Uuid;

use crate::error::PrismAgentError;
use crate::models::{
    PolicyLookupQuery, VerificationPolicy, VerificationPolicyInput, VerificationPolicyPage,
};
use crate::response;

/// Client for the verification policy store.
#[derive(Debug, Clone)]
pub struct VerificationClient {
    http: reqwest::Client,
    base_url: url::Url,
    strict: bool,
}

impl VerificationClient {
    pub(crate) fn new(http: reqwest::Client, base_url: url::Url, strict: bool) -> Self {
        Self {
            http,
            base_url,
            strict,
        }
    }

    /// Create a verification policy.
    ///
    /// Calls `POST {base_url}/verification/policies`. The response carries
    /// the server-assigned `id` and initial `nonce`.
    pub async fn create(
        &self,
        req: &VerificationPolicyInput,
    ) -> Result<Option<VerificationPolicy>, PrismAgentError> {
        let endpoint = "POST /verification/policies";
        let url = format!("{}verification/policies", self.base_url);

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

    /// Look up policies, optionally filtered by name.
    ///
    /// Calls `GET {base_url}/verification/policies` with whichever of
    /// `name`, `offset`, `limit` and `order` the query sets.
    pub async fn lookup(
        &self,
        query: &PolicyLookupQuery,
    ) -> Result<Option<VerificationPolicyPage>, PrismAgentError> {
        let endpoint = "GET /verification/policies";
        let url = format!("{}verification/policies", self.base_url);

        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(name) = &query.name {
            params.push(("name", name.clone()));
        }
        if let Some(offset) = query.offset {
            params.push(("offset", offset.to_string()));
        }
        if let Some(limit) = query.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(order) = &query.order {
            params.push(("order", order.clone()));
        }

        let mut req = self.http.get(&url);
        if !params.is_empty() {
            req = req.query(&params);
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

    /// Get one policy by ID.
    ///
    /// Calls `GET {base_url}/verification/policies/{id}`.
    pub async fn get(&self, id: Uuid) -> Result<Option<VerificationPolicy>, PrismAgentError> {
        let endpoint = format!("GET /verification/policies/{id}");
        let url = format!("{}verification/policies/{id}", self.base_url);

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
            status @ (404 | 500) => Err(response::api_error(&endpoint, status, resp).await),
            status => response::unexpected(self.strict, &endpoint, status, resp).await,
        }
    }

    /// Replace a policy's name, description and constraints.
    ///
    /// Calls `PUT {base_url}/verification/policies/{id}?nonce=`. `nonce`
    /// must be the value read from the revision being replaced; a stale
    /// nonce is rejected by the agent.
    pub async fn update(
        &self,
        id: Uuid,
        nonce: i64,
        req: &VerificationPolicyInput,
    ) -> Result<Option<VerificationPolicy>, PrismAgentError> {
        let endpoint = format!("PUT /verification/policies/{id}");
        let url = format!("{}verification/policies/{id}", self.base_url);

        let resp = self
            .http
            .put(&url)
            .query(&[("nonce", nonce.to_string())])
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

    /// Delete a policy.
    ///
    /// Calls `DELETE {base_url}/verification/policies/{id}?nonce=` and
    /// returns `Ok(Some(()))` on the agent's empty `200`.
    pub async fn delete(&self, id: Uuid, nonce: i64) -> Result<Option<()>, PrismAgentError> {
        let endpoint = format!("DELETE /verification/policies/{id}");
        let url = format!("{}verification/policies/{id}", self.base_url);

        let resp = self
            .http
            .delete(&url)
            .query(&[("nonce", nonce.to_string())])
            .send()
            .await
            .map_err(|e| PrismAgentError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        match resp.status().as_u16() {
            200 => Ok(Some(())),
            status @ (400 | 404 | 500) => Err(response::api_error(&endpoint, status, resp).await),
            status => response::unexpected(self.strict, &endpoint, status, resp).await,
        }
    }
}
