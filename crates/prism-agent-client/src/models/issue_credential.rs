//! Issue-credentials protocol payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::Page;

/// Request body for `POST /issue-credentials/credential-offers`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIssueCredentialRecordRequest {
    /// Claims to embed in the credential, free-form JSON.
    pub claims: Value,
    /// DID the credential will be issued by.
    #[serde(rename = "issuingDID")]
    pub issuing_did: String,
    /// Connection to send the offer over.
    pub connection_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validity_period: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_id: Option<String>,
    /// When true (the agent default) the issuer side advances the protocol
    /// without waiting for explicit approval per step.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub automatic_issuance: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Request body for `POST /issue-credentials/records/{recordId}/accept-offer`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptCredentialOfferRequest {
    /// Holder's subject DID the credential will be bound to.
    pub subject_id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// State of one credential issuance flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueCredentialRecord {
    pub record_id: Uuid,
    pub created_at: DateTime<Utc>,
    /// `Issuer` or `Holder`.
    pub role: String,
    /// Protocol state, e.g. `OfferPending`, `CredentialSent`.
    pub protocol_state: String,
    pub claims: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validity_period: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub automatic_issuance: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Base64-encoded JWT credential, present once issued.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jwt_credential: Option<String>,
    #[serde(default, rename = "issuingDID", skip_serializing_if = "Option::is_none")]
    pub issuing_did: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub type IssueCredentialRecordPage = Page<IssueCredentialRecord>;
