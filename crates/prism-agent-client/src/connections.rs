//! Typed client for the Connections service of the Prism agent.
//!
//! Connections establish the DIDComm channel every other protocol
//! (issuance, presentation) runs over. The inviter creates an invitation,
//! hands the base64 payload to the invitee out of band, and the invitee
//! accepts it; both sides then poll their connection record until it
//! reaches `ConnectionResponseSent` / `ConnectionResponseReceived`.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | POST   | `/connections` | Create an invitation |
//! | GET    | `/connections` | List connections (paginated) |
//! | GET    | `/connections/{connectionId}` | Get a connection by ID |
//! | POST   | `/connection-invitations` | Accept an out-of-band invitation |

use uuid::Uuid;

use crate::error::PrismAgentError;
use crate::models::{
    AcceptConnectionInvitationRequest, Connection, ConnectionsPage, CreateConnectionRequest,
};
use crate::response;

/// Client for the Connections service.
#[derive(Debug, Clone)]
pub struct ConnectionsClient {
    http: reqwest::Client,
    base_url: url::Url,
    strict: bool,
}

impl ConnectionsClient {
    pub(crate) fn new(http: reqwest::Client, base_url: url::Url, strict: bool) -> Self {
        Self {
            http,
            base_url,
            strict,
        }
    }

    /// Create a connection record holding a fresh out-of-band invitation.
    ///
    /// Calls `POST {base_url}/connections`. The returned record starts in
    /// the `InvitationGenerated` state; pass its `invitation.invitation_url`
    /// payload to the other party.
    pub async fn create(
        &self,
        req: &CreateConnectionRequest,
    ) -> Result<Option<Connection>, PrismAgentError> {
        let endpoint = "POST /connections";
        let url = format!("{}connections", self.base_url);

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

    /// Get a connection record by ID.
    ///
    /// Calls `GET {base_url}/connections/{connectionId}`. An unknown ID is a
    /// documented `404` and surfaces as [`PrismAgentError::Api`].
    pub async fn get(&self, connection_id: Uuid) -> Result<Option<Connection>, PrismAgentError> {
        let endpoint = format!("GET /connections/{connection_id}");
        let url = format!("{}connections/{connection_id}", self.base_url);

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

    /// List connection records, newest batch first.
    ///
    /// Calls `GET {base_url}/connections?offset=&limit=`. Both parameters are
    /// optional; the agent applies its own defaults when they are omitted.
    pub async fn list(
        &self,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Option<ConnectionsPage>, PrismAgentError> {
        let endpoint = "GET /connections";
        let url = format!("{}connections", self.base_url);

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

    /// Accept an out-of-band invitation received from another agent.
    ///
    /// Calls `POST {base_url}/connection-invitations` with the raw invitation
    /// payload (the base64url fragment of the invitation URL). The returned
    /// record is the invitee-side view of the new connection.
    pub async fn accept_invitation(
        &self,
        req: &AcceptConnectionInvitationRequest,
    ) -> Result<Option<Connection>, PrismAgentError> {
        let endpoint = "POST /connection-invitations";
        let url = format!("{}connection-invitations", self.base_url);

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
            200 => response::decode(endpoint, resp).await.map(Some),
            status @ (400 | 500) => Err(response::api_error(endpoint, status, resp).await),
            status => response::unexpected(self.strict, endpoint, status, resp).await,
        }
    }
}
