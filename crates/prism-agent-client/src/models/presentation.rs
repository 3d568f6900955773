//! Present-proof protocol payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::Page;

/// Domain/challenge pair the verifier binds a presentation request to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationOptions {
    pub challenge: String,
    pub domain: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Constraints on the credential a proof must be derived from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofRequestAux {
    pub schema_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trust_issuers: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Request body for `POST /present-proof/presentations`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestPresentationInput {
    /// Connection to send the presentation request over.
    pub connection_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<PresentationOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proofs: Option<Vec<ProofRequestAux>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response body of `POST /present-proof/presentations`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestPresentationOutput {
    pub presentation_id: Uuid,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Protocol state of a presentation flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PresentationState {
    RequestPending,
    RequestSent,
    RequestReceived,
    RequestRejected,
    PresentationPending,
    PresentationGenerated,
    PresentationSent,
    PresentationReceived,
    PresentationVerified,
    PresentationAccepted,
    PresentationRejected,
    ProblemReportPending,
    ProblemReportSent,
    ProblemReportReceived,
    #[serde(other)]
    Unknown,
}

/// State of one presentation flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationStatus {
    pub presentation_id: Uuid,
    pub status: PresentationState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proofs: Option<Vec<ProofRequestAux>>,
    /// Base64-encoded presentation payloads, present once generated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_id: Option<Uuid>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Action to advance a presentation flow, per `PATCH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PresentationAction {
    RequestAccept,
    RequestReject,
    PresentationAccept,
    PresentationReject,
    #[serde(other)]
    Unknown,
}

/// Request body for `PATCH /present-proof/presentations/{presentationId}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestPresentationAction {
    pub action: PresentationAction,
    /// For `request-accept` on the prover side: ids of the credential
    /// records to derive the proofs from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof_id: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An embedded proof over a presented payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proof {
    #[serde(rename = "type")]
    pub proof_type: String,
    pub created: DateTime<Utc>,
    pub verification_method: String,
    pub proof_purpose: String,
    pub proof_value: String,
    pub jws: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub type PresentationStatusPage = Page<PresentationStatus>;
