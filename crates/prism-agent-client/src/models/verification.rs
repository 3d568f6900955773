//! Verification-policy payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::Page;

/// Constraint entry: which schema a presented credential must conform to
/// and which issuers are trusted for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationPolicyConstraint {
    pub schema_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trusted_issuers: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A stored verification policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationPolicy {
    #[serde(rename = "self")]
    pub self_uri: String,
    pub kind: String,
    pub id: Uuid,
    /// Optimistic-concurrency token; must be echoed on update and delete.
    pub nonce: i64,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Vec<VerificationPolicyConstraint>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Caller-supplied policy fields for create and update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationPolicyInput {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Vec<VerificationPolicyConstraint>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Filters for `GET /verification/policies`.
#[derive(Debug, Clone, Default)]
pub struct PolicyLookupQuery {
    pub name: Option<String>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
    pub order: Option<String>,
}

pub type VerificationPolicyPage = Page<VerificationPolicy>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn policy_decodes_nonce_and_constraints() {
        let policy: VerificationPolicy = serde_json::from_value(json!({
            "self": "/verification/policies/c15b7b88-0a89-4c43-a757-9bb5d9fcf301",
            "kind": "VerificationPolicy",
            "id": "c15b7b88-0a89-4c43-a757-9bb5d9fcf301",
            "nonce": 1234,
            "name": "employment-check",
            "description": "Verify employment credentials",
            "createdAt": "2023-03-02T12:00:00Z",
            "updatedAt": "2023-03-02T12:00:00Z",
            "constraints": [
                {"schemaId": "employment-schema", "trustedIssuers": ["did:prism:hr-dept"]}
            ]
        }))
        .unwrap();
        assert_eq!(policy.nonce, 1234);
        let constraints = policy.constraints.unwrap();
        assert_eq!(constraints[0].schema_id, "employment-schema");
    }

    #[test]
    fn input_without_constraints_omits_key() {
        let input = VerificationPolicyInput {
            name: "p".into(),
            description: "d".into(),
            id: None,
            constraints: None,
            extra: Map::new(),
        };
        let raw = serde_json::to_value(&input).unwrap();
        assert_eq!(raw, json!({"name": "p", "description": "d"}));
    }
}
