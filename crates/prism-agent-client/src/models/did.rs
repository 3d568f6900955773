//! W3C DID resolution payloads returned by `GET /dids/{didRef}`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Public key material in JWK form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicKeyJwk {
    pub kty: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crv: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Verification method entry of a DID document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationMethod {
    pub id: String,
    #[serde(rename = "type")]
    pub method_type: String,
    pub controller: String,
    pub public_key_jwk: PublicKeyJwk,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Service entry of a DID document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidService {
    pub id: String,
    #[serde(rename = "type")]
    pub service_type: String,
    pub service_endpoint: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A W3C-compliant DID document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidDocument {
    pub id: String,
    #[serde(rename = "@context", default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controller: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_method: Option<Vec<VerificationMethod>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assertion_method: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_agreement: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capability_invocation: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capability_delegation: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<Vec<DidService>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// [DID document metadata](https://www.w3.org/TR/did-core/#did-document-metadata).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidDocumentMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deactivated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// [DID resolution metadata](https://www.w3.org/TR/did-core/#did-resolution-metadata).
///
/// `error` is set when resolution failed (`notFound`, `deactivated`,
/// `invalidDid`, ...); the HTTP status alone does not tell the full story.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidResolutionMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Resolution envelope: the document (when resolution succeeded) plus
/// document and resolution metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidResolutionResult {
    /// JSON-LD context of the resolution result, typically
    /// `https://w3id.org/did-resolution/v1`.
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub did_document: Option<DidDocument>,
    pub did_document_metadata: DidDocumentMetadata,
    pub did_resolution_metadata: DidResolutionMetadata,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DidResolutionResult {
    /// Whether resolution produced a document with no error reported.
    pub fn is_resolved(&self) -> bool {
        self.did_document.is_some() && self.did_resolution_metadata.error.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolution_result_with_document() {
        let raw = json!({
            "@context": "https://w3id.org/did-resolution/v1",
            "didDocument": {
                "id": "did:prism:4a5b5cf0a513e83b598bbea25cd6196746747f361a73ef77068268bc9bd732ff",
                "@context": ["https://www.w3.org/ns/did/v1"],
                "verificationMethod": [{
                    "id": "did:prism:4a5b5cf0#key-1",
                    "type": "JsonWebKey2020",
                    "controller": "did:prism:4a5b5cf0",
                    "publicKeyJwk": {
                        "kty": "EC", "crv": "secp256k1", "x": "38M2...", "y": "Cu1W..."
                    }
                }],
                "authentication": ["did:prism:4a5b5cf0#key-1"]
            },
            "didDocumentMetadata": {"deactivated": false, "versionId": "1"},
            "didResolutionMetadata": {
                "contentType": "application/ld+json; profile=\"https://w3id.org/did-resolution\""
            }
        });
        let result: DidResolutionResult = serde_json::from_value(raw).unwrap();
        assert!(result.is_resolved());
        let doc = result.did_document.unwrap();
        assert_eq!(doc.verification_method.unwrap()[0].public_key_jwk.kty, "EC");
        assert_eq!(result.did_document_metadata.deactivated, Some(false));
    }

    #[test]
    fn resolution_error_has_no_document() {
        let raw = json!({
            "@context": "https://w3id.org/did-resolution/v1",
            "didDocumentMetadata": {},
            "didResolutionMetadata": {"error": "notFound", "errorMessage": "DID not found"}
        });
        let result: DidResolutionResult = serde_json::from_value(raw).unwrap();
        assert!(!result.is_resolved());
        assert_eq!(result.did_resolution_metadata.error.as_deref(), Some("notFound"));
    }

    #[test]
    fn did_document_round_trips_context_key() {
        let raw = json!({
            "id": "did:prism:abc",
            "@context": ["https://www.w3.org/ns/did/v1"]
        });
        let doc: DidDocument = serde_json::from_value(raw.clone()).unwrap();
        let back = serde_json::to_value(&doc).unwrap();
        assert_eq!(back, raw);
    }
}
