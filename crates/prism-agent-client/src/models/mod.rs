//! Wire models for the Prism Agent REST API.
//!
//! Every type here is a descriptive mirror of an agent payload, not a domain
//! entity: the agent owns validation and lifecycle rules. Conventions shared
//! by all models:
//!
//! - camelCase wire names via `#[serde(rename_all = "camelCase")]`, with
//!   reserved or irregular keys (`self`, `from`, `type`, `@context`) renamed
//!   explicitly;
//! - optional fields are `Option` and skipped when `None`, so an absent key
//!   stays absent on re-encode;
//! - fields the agent emits as explicit `null` (pagination links) use
//!   `serde_with::rust::double_option` to keep "absent" and "null" apart;
//! - an `extra` bag under `#[serde(flatten)]` carries fields this client
//!   does not model, preserved verbatim on round-trip;
//! - closed enums carry a `#[serde(other)] Unknown` variant so new server
//!   values do not break deserialization.

mod common;
mod connection;
mod did;
mod did_registrar;
mod issue_credential;
mod presentation;
mod schema;
mod verification;

pub use common::{ErrorResponse, HealthInfo, Page};
pub use connection::{
    AcceptConnectionInvitationRequest, Connection, ConnectionInvitation, ConnectionRole,
    ConnectionState, ConnectionsPage, CreateConnectionRequest,
};
pub use did::{
    DidDocument, DidDocumentMetadata, DidResolutionMetadata, DidResolutionResult, DidService,
    PublicKeyJwk, VerificationMethod,
};
pub use did_registrar::{
    CreateManagedDidRequest, CreateManagedDidResponse, DidDocumentTemplate, DidOperationResponse,
    DidOperationSubmission, KeyPurpose, ManagedDid, ManagedDidKeyTemplate, ManagedDidPage,
    RemoveEntryById, UpdateActionType, UpdateManagedDidAction, UpdateManagedDidRequest,
    UpdateServiceAction,
};
pub use issue_credential::{
    AcceptCredentialOfferRequest, CreateIssueCredentialRecordRequest, IssueCredentialRecord,
    IssueCredentialRecordPage,
};
pub use presentation::{
    PresentationAction, PresentationOptions, PresentationState, PresentationStatus,
    PresentationStatusPage, Proof, ProofRequestAux, RequestPresentationAction,
    RequestPresentationInput, RequestPresentationOutput,
};
pub use schema::{
    CredentialSchemaInput, CredentialSchemaPage, CredentialSchemaResponse, SchemaLookupQuery,
};
pub use verification::{
    PolicyLookupQuery, VerificationPolicy, VerificationPolicyConstraint, VerificationPolicyInput,
    VerificationPolicyPage,
};
