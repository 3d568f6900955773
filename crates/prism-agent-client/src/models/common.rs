//! Models shared across API groups: the problem document, health report,
//! and the paginated collection envelope.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// RFC 7807 problem document returned by the agent for documented error
/// statuses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// HTTP status the agent assigned to the failure.
    pub status: u16,
    /// URI reference identifying the problem type.
    #[serde(rename = "type")]
    pub error_type: String,
    /// Short human-readable summary of the problem type.
    pub title: String,
    /// URI reference identifying the specific occurrence.
    pub instance: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.detail {
            Some(detail) => write!(f, "{} ({detail})", self.title),
            None => write!(f, "{}", self.title),
        }
    }
}

/// Health report from `GET /_system/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthInfo {
    /// Semantic version of the running agent.
    pub version: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One page of a paginated collection resource.
///
/// The agent emits explicit `null` for `next`/`previous` on boundary pages;
/// `double_option` keeps that distinguishable from the key being absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    pub kind: String,
    #[serde(rename = "self")]
    pub self_uri: String,
    pub page_of: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contents: Option<Vec<T>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub next: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub previous: Option<Option<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<T> Page<T> {
    /// Items on this page, empty when the agent omitted `contents`.
    pub fn items(&self) -> &[T] {
        self.contents.as_deref().unwrap_or_default()
    }
}
