//! Managed-DID payloads for the `/did-registrar` API group.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{did::DidService, Page};

/// Verification relationship a key template is created for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KeyPurpose {
    Authentication,
    AssertionMethod,
    KeyAgreement,
    CapabilityInvocation,
    CapabilityDelegation,
    #[serde(other)]
    Unknown,
}

/// Key to generate when creating or updating a managed DID.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedDidKeyTemplate {
    /// Key identifier fragment, e.g. `key-1`.
    pub id: String,
    pub purpose: KeyPurpose,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Document template for `POST /did-registrar/dids`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidDocumentTemplate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_keys: Option<Vec<ManagedDidKeyTemplate>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<DidService>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Request body for `POST /did-registrar/dids`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateManagedDidRequest {
    pub document_template: DidDocumentTemplate,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response body of `POST /did-registrar/dids`.
///
/// Creation is offline: the agent mints a long-form DID without touching
/// the VDR. Publication is a separate, explicit operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateManagedDidResponse {
    pub long_form_did: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A DID under this agent's management.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedDid {
    pub did: String,
    /// Publication status: `CREATED`, `PUBLICATION_PENDING` or `PUBLISHED`.
    pub status: String,
    /// Set until the short form becomes resolvable on the VDR.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_form_did: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Kind of update applied to a managed DID document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UpdateActionType {
    AddKey,
    RemoveKey,
    AddService,
    RemoveService,
    UpdateService,
    PatchContext,
    #[serde(other)]
    Unknown,
}

/// Removes a key or service by its id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveEntryById {
    pub id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// In-place patch of an existing service entry. Absent fields are left
/// unchanged by the agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceAction {
    pub id: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_endpoint: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One update action; exactly the field matching `action_type` should be
/// set. The agent validates the pairing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateManagedDidAction {
    pub action_type: UpdateActionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_key: Option<ManagedDidKeyTemplate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove_key: Option<RemoveEntryById>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_service: Option<DidService>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove_service: Option<RemoveEntryById>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_service: Option<UpdateServiceAction>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Request body for `POST /did-registrar/dids/{didRef}/updates`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateManagedDidRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<UpdateManagedDidAction>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A VDR operation the agent has scheduled on the caller's behalf.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidOperationSubmission {
    /// Hex-encoded operation identifier.
    pub id: String,
    pub did_ref: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response body of the asynchronous registrar operations (update,
/// publication, deactivation), returned with status 202.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidOperationResponse {
    pub scheduled_operation: DidOperationSubmission,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub type ManagedDidPage = Page<ManagedDid>;
