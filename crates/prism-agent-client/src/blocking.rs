//! Blocking facade over the async client.
//!
//! Owns a current-thread tokio runtime and drives each call to completion
//! with `block_on`, so scripts and synchronous callers can talk to the
//! agent without touching async. Do not use this facade from inside a
//! tokio runtime; `block_on` panics there. Methods carry the full
//! operation names (`create_connection`, `resolve_did`, ...) since all
//! services share one flat surface here.

use uuid::Uuid;

use crate::config::AgentConfig;
use crate::error::PrismAgentError;
use crate::models::{
    AcceptConnectionInvitationRequest, AcceptCredentialOfferRequest, Connection, ConnectionsPage,
    CreateConnectionRequest, CreateIssueCredentialRecordRequest, CreateManagedDidRequest,
    CreateManagedDidResponse, CredentialSchemaInput, CredentialSchemaPage,
    CredentialSchemaResponse, DidOperationResponse, DidResolutionResult, HealthInfo,
    IssueCredentialRecord, IssueCredentialRecordPage, ManagedDid, ManagedDidPage,
    PolicyLookupQuery, PresentationStatus, PresentationStatusPage, RequestPresentationAction,
    RequestPresentationInput, RequestPresentationOutput, SchemaLookupQuery, UpdateManagedDidRequest,
    VerificationPolicy, VerificationPolicyInput, VerificationPolicyPage,
};

/// Blocking Prism agent client.
#[derive(Debug)]
pub struct PrismAgentClient {
    runtime: tokio::runtime::Runtime,
    inner: crate::PrismAgentClient,
}

impl PrismAgentClient {
    /// Create a blocking client from configuration.
    pub fn new(config: AgentConfig) -> Result<Self, PrismAgentError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(PrismAgentError::Runtime)?;
        let inner = crate::PrismAgentClient::new(config)?;
        Ok(Self { runtime, inner })
    }

    /// The wrapped async client, for mixing blocking and async call sites.
    pub fn inner(&self) -> &crate::PrismAgentClient {
        &self.inner
    }

    // -- Connections -----------------------------------------------------

    pub fn create_connection(
        &self,
        req: &CreateConnectionRequest,
    ) -> Result<Option<Connection>, PrismAgentError> {
        self.runtime.block_on(self.inner.connections().create(req))
    }

    pub fn get_connection(
        &self,
        connection_id: Uuid,
    ) -> Result<Option<Connection>, PrismAgentError> {
        self.runtime
            .block_on(self.inner.connections().get(connection_id))
    }

    pub fn list_connections(
        &self,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Option<ConnectionsPage>, PrismAgentError> {
        self.runtime
            .block_on(self.inner.connections().list(offset, limit))
    }

    pub fn accept_connection_invitation(
        &self,
        req: &AcceptConnectionInvitationRequest,
    ) -> Result<Option<Connection>, PrismAgentError> {
        self.runtime
            .block_on(self.inner.connections().accept_invitation(req))
    }

    // -- DID resolution --------------------------------------------------

    pub fn resolve_did(
        &self,
        did_ref: &str,
    ) -> Result<Option<DidResolutionResult>, PrismAgentError> {
        self.runtime.block_on(self.inner.did().resolve(did_ref))
    }

    // -- DID registrar ---------------------------------------------------

    pub fn list_managed_dids(
        &self,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Option<ManagedDidPage>, PrismAgentError> {
        self.runtime
            .block_on(self.inner.did_registrar().list(offset, limit))
    }

    pub fn get_managed_did(&self, did_ref: &str) -> Result<Option<ManagedDid>, PrismAgentError> {
        self.runtime.block_on(self.inner.did_registrar().get(did_ref))
    }

    pub fn create_managed_did(
        &self,
        req: &CreateManagedDidRequest,
    ) -> Result<Option<CreateManagedDidResponse>, PrismAgentError> {
        self.runtime.block_on(self.inner.did_registrar().create(req))
    }

    pub fn update_managed_did(
        &self,
        did_ref: &str,
        req: &UpdateManagedDidRequest,
    ) -> Result<Option<DidOperationResponse>, PrismAgentError> {
        self.runtime
            .block_on(self.inner.did_registrar().update(did_ref, req))
    }

    pub fn publish_managed_did(
        &self,
        did_ref: &str,
    ) -> Result<Option<DidOperationResponse>, PrismAgentError> {
        self.runtime
            .block_on(self.inner.did_registrar().publish(did_ref))
    }

    pub fn deactivate_managed_did(
        &self,
        did_ref: &str,
    ) -> Result<Option<DidOperationResponse>, PrismAgentError> {
        self.runtime
            .block_on(self.inner.did_registrar().deactivate(did_ref))
    }

    // -- Issue credentials -----------------------------------------------

    pub fn create_credential_offer(
        &self,
        req: &CreateIssueCredentialRecordRequest,
    ) -> Result<Option<IssueCredentialRecord>, PrismAgentError> {
        self.runtime
            .block_on(self.inner.issue_credentials().create_offer(req))
    }

    pub fn list_credential_records(
        &self,
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Option<IssueCredentialRecordPage>, PrismAgentError> {
        self.runtime
            .block_on(self.inner.issue_credentials().list(offset, limit))
    }

    pub fn get_credential_record(
        &self,
        record_id: Uuid,
    ) -> Result<Option<IssueCredentialRecord>, PrismAgentError> {
        self.runtime
            .block_on(self.inner.issue_credentials().get(record_id))
    }

    pub fn accept_credential_offer(
        &self,
        record_id: Uuid,
        req: &AcceptCredentialOfferRequest,
    ) -> Result<Option<IssueCredentialRecord>, PrismAgentError> {
        self.runtime
            .block_on(self.inner.issue_credentials().accept_offer(record_id, req))
    }

    pub fn issue_credential(
        &self,
        record_id: Uuid,
    ) -> Result<Option<IssueCredentialRecord>, PrismAgentError> {
        self.runtime
            .block_on(self.inner.issue_credentials().issue(record_id))
    }

    // -- Present proof ---------------------------------------------------

    pub fn request_presentation(
        &self,
        req: &RequestPresentationInput,
    ) -> Result<Option<RequestPresentationOutput>, PrismAgentError> {
        self.runtime
            .block_on(self.inner.present_proof().request(req))
    }

    pub fn list_presentations(
        &self,
        offset: Option<u32>,
        limit: Option<u32>,
        thid: Option<&str>,
    ) -> Result<Option<PresentationStatusPage>, PrismAgentError> {
        self.runtime
            .block_on(self.inner.present_proof().list(offset, limit, thid))
    }

    pub fn get_presentation(
        &self,
        presentation_id: Uuid,
    ) -> Result<Option<PresentationStatus>, PrismAgentError> {
        self.runtime
            .block_on(self.inner.present_proof().get(presentation_id))
    }

    pub fn update_presentation(
        &self,
        presentation_id: Uuid,
        req: &RequestPresentationAction,
    ) -> Result<Option<PresentationStatus>, PrismAgentError> {
        self.runtime
            .block_on(self.inner.present_proof().update(presentation_id, req))
    }

    // -- Schema registry -------------------------------------------------

    pub fn create_schema(
        &self,
        req: &CredentialSchemaInput,
    ) -> Result<Option<CredentialSchemaResponse>, PrismAgentError> {
        self.runtime
            .block_on(self.inner.schema_registry().create(req))
    }

    pub fn get_schema(
        &self,
        guid: Uuid,
    ) -> Result<Option<CredentialSchemaResponse>, PrismAgentError> {
        self.runtime.block_on(self.inner.schema_registry().get(guid))
    }

    pub fn lookup_schemas(
        &self,
        query: &SchemaLookupQuery,
    ) -> Result<Option<CredentialSchemaPage>, PrismAgentError> {
        self.runtime
            .block_on(self.inner.schema_registry().lookup(query))
    }

    pub fn update_schema(
        &self,
        author: &str,
        id: &str,
        req: &CredentialSchemaInput,
    ) -> Result<Option<CredentialSchemaResponse>, PrismAgentError> {
        self.runtime
            .block_on(self.inner.schema_registry().update(author, id, req))
    }

    // -- Verification policies -------------------------------------------

    pub fn create_policy(
        &self,
        req: &VerificationPolicyInput,
    ) -> Result<Option<VerificationPolicy>, PrismAgentError> {
        self.runtime.block_on(self.inner.verification().create(req))
    }

    pub fn lookup_policies(
        &self,
        query: &PolicyLookupQuery,
    ) -> Result<Option<VerificationPolicyPage>, PrismAgentError> {
        self.runtime
            .block_on(self.inner.verification().lookup(query))
    }

    pub fn get_policy(&self, id: Uuid) -> Result<Option<VerificationPolicy>, PrismAgentError> {
        self.runtime.block_on(self.inner.verification().get(id))
    }

    pub fn update_policy(
        &self,
        id: Uuid,
        nonce: i64,
        req: &VerificationPolicyInput,
    ) -> Result<Option<VerificationPolicy>, PrismAgentError> {
        self.runtime
            .block_on(self.inner.verification().update(id, nonce, req))
    }

    pub fn delete_policy(&self, id: Uuid, nonce: i64) -> Result<Option<()>, PrismAgentError> {
        self.runtime
            .block_on(self.inner.verification().delete(id, nonce))
    }

    // -- System ----------------------------------------------------------

    pub fn health(&self) -> Result<Option<HealthInfo>, PrismAgentError> {
        self.runtime.block_on(self.inner.system().health())
    }
}
