//! Typed client for the issue-credentials protocol of the Prism agent.
//!
//! Both sides of the Aries issue-credential flow share one record shape:
//! the issuer creates an offer over an established connection, the holder
//! accepts it with the subject DID the credential should be bound to, and
//! the issuer signs. Records move through `protocol_state` values such as
//! `OfferSent`, `RequestReceived` and `CredentialSent`; with
//! `automatic_issuance` the agent advances past the manual
//! [`issue`](IssueCredentialsClient::issue) step on its own.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | POST   | `/issue-credentials/credential-offers` | Create an offer (issuer) |
//! | GET    | `/issue-credentials/records` | List records (paginated) |
//! | GET    | `/issue-credentials/records/{recordId}` | Get a record |
//! | POST   | `/issue-credentials/records/{recordId}/accept-offer` | Accept (holder) |
//! | POST   | `/issue-credentials/records/{recordId}/issue-credential` | Sign and send (issuer) |

use uuid::Uuid;

use crate::error::PrismAgentError;
use crate::models::{
    AcceptCredentialOfferRequest, CreateIssueCredentialRecordRequest, IssueCredentialRecord,
    IssueCredentialRecordPage,
};
use crate::response;

/// Client for the issue-credentials protocol.
#[derive(Debug, Clone)]
pub struct IssueCredentialsClient {
    http: reqwest::Client,
    base_url: url::Url,
    strict: bool,
}

impl IssueCredentialsClient {
    pub(crate) fn new(http: reqwest::Client, base_url: url::Url, strict: bool) -> Self {
        Self {
            http,
            base_url,
            strict,
        }
    }

    /// Create a credential offer as the issuer.
    ///
    /// Calls `POST {base_url}/issue-credentials/credential-offers`. The
    /// offer travels over the connection named in the request; the new
    /// record starts in `OfferPending`.
    pub async fn create_offer(
        &self,
        req: &CreateIssueCredentialRecordRequest,
    ) -> Result<Option<IssueCredentialRecord>, PrismAgentError> {
        let endpoint = "POST /issue-credentials/credential-offers";
        let url = format!("{}issue-credentials/credential-offers", self.base_url);

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

    /// List issue-credential records on this agent, issuer and holder side
    /// alike.
    ///
    /// Calls `GET {base_url}/issue-credentials/records?offset=&limit=`.
    pub async fn list(
        &self,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Option<IssueCredentialRecordPage>, PrismAgentError> {
        let endpoint = "GET /issue-credentials/records";
        let url = format!("{}issue-credentials/records", self.base_url);

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

    /// Get one issue-credential record by ID.
    ///
    /// Calls `GET {base_url}/issue-credentials/records/{recordId}`.
    pub async fn get(
        &self,
        record_id: Uuid,
    ) -> Result<Option<IssueCredentialRecord>, PrismAgentError> {
        let endpoint = format!("GET /issue-credentials/records/{record_id}");
        let url = format!("{}issue-credentials/records/{record_id}", self.base_url);

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

    /// Accept a received credential offer as the holder.
    ///
    /// Calls `POST {base_url}/issue-credentials/records/{recordId}/accept-offer`
    /// with the subject DID (typically a long-form managed DID) the
    /// credential will be issued to.
    pub async fn accept_offer(
        &self,
        record_id: Uuid,
        req: &AcceptCredentialOfferRequest,
    ) -> Result<Option<IssueCredentialRecord>, PrismAgentError> {
        let endpoint = format!("POST /issue-credentials/records/{record_id}/accept-offer");
        let url = format!(
            "{}issue-credentials/records/{record_id}/accept-offer",
            self.base_url
        );

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
            200 => response::decode(&endpoint, resp).await.map(Some),
            status @ (400 | 404 | 500) => Err(response::api_error(&endpoint, status, resp).await),
            status => response::unexpected(self.strict, &endpoint, status, resp).await,
        }
    }

    /// Sign and send the credential for a record in `RequestReceived`.
    ///
    /// Calls `POST {base_url}/issue-credentials/records/{recordId}/issue-credential`.
    /// Only needed when the offer was created without `automatic_issuance`.
    pub async fn issue(
        &self,
        record_id: Uuid,
    ) -> Result<Option<IssueCredentialRecord>, PrismAgentError> {
        let endpoint = format!("POST /issue-credentials/records/{record_id}/issue-credential");
        let url = format!(
            "{}issue-credentials/records/{record_id}/issue-credential",
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
            200 => response::decode(&endpoint, resp).await.map(Some),
            status @ (400 | 404 | 500) => Err(response::api_error(&endpoint, status, resp).await),
            status => response::unexpected(self.strict, &endpoint, status, resp).await,
        }
    }
}
