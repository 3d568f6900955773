//! Credential-schema registry payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::Page;

/// Author-supplied schema fields, used by both create and update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialSchemaInput {
    pub name: String,
    /// Semantic version of this schema revision.
    pub version: String,
    /// Schema dialect, e.g. `https://w3c-ccg.github.io/vc-json-schemas/schema/2.0/schema.json`.
    #[serde(rename = "type")]
    pub schema_type: String,
    /// The JSON schema itself, free-form.
    pub schema: Value,
    /// DID of the schema author.
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A registered schema revision.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialSchemaResponse {
    /// Globally unique identifier of this revision.
    pub guid: Uuid,
    /// Locally unique schema identifier, stable across revisions.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_id: Option<String>,
    pub name: String,
    pub version: String,
    #[serde(rename = "type")]
    pub schema_type: String,
    pub schema: Value,
    pub author: String,
    /// When this revision was registered.
    pub authored: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    pub kind: String,
    #[serde(rename = "self")]
    pub self_uri: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Filters for `GET /schema-registry/schemas`. All fields optional; the
/// agent ANDs whatever is present.
#[derive(Debug, Clone, Default)]
pub struct SchemaLookupQuery {
    pub author: Option<String>,
    pub name: Option<String>,
    pub version: Option<String>,
    pub tags: Option<String>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
    pub order: Option<String>,
}

pub type CredentialSchemaPage = Page<CredentialSchemaResponse>;
