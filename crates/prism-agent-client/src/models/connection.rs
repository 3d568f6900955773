//! Connection-management payloads (DIDComm out-of-band invitations and the
//! connection records built from them).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::Page;

/// The caller's side of a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectionRole {
    Inviter,
    Invitee,
    #[serde(other)]
    Unknown,
}

/// Protocol state of a connection, as reported by the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectionState {
    InvitationGenerated,
    InvitationReceived,
    ConnectionRequestPending,
    ConnectionRequestSent,
    ConnectionRequestReceived,
    ConnectionResponsePending,
    ConnectionResponseSent,
    ConnectionResponseReceived,
    ProblemReportPending,
    ProblemReportSent,
    ProblemReportReceived,
    #[serde(other)]
    Unknown,
}

/// Out-of-band invitation embedded in a connection record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionInvitation {
    /// Invitation identifier; regenerated for every new invitation.
    pub id: Uuid,
    /// DIDComm message type URI.
    #[serde(rename = "type")]
    pub invitation_type: String,
    /// Peer DID of the inviting party.
    #[serde(rename = "from")]
    pub from_did: String,
    /// Full invitation URL with the base64url-encoded invitation appended
    /// as the `_oob` query parameter.
    pub invitation_url: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A connection record tracked by the agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub connection_id: Uuid,
    pub role: ConnectionRole,
    pub state: ConnectionState,
    pub invitation: ConnectionInvitation,
    pub created_at: DateTime<Utc>,
    /// URI of this resource.
    #[serde(rename = "self")]
    pub self_uri: String,
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub my_did: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub their_did: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Request body for `POST /connections`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateConnectionRequest {
    /// Human-readable label shown to the invitee.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Request body for `POST /connection-invitations`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptConnectionInvitationRequest {
    /// The base64url-encoded invitation, as found in the `_oob` query
    /// parameter of an invitation URL.
    pub invitation: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub type ConnectionsPage = Page<Connection>;
