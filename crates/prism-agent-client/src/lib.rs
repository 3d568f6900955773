//! # prism-agent-client -- Typed Rust client for the Prism cloud agent
//!
//! Ergonomic, typed access to the Prism agent's REST surface, one
//! sub-client per service:
//! - **Connections** (`/connections`, `/connection-invitations`)
//! - **DID resolution** (`/dids`)
//! - **DID registrar** (`/did-registrar`)
//! - **Issue credentials** (`/issue-credentials`)
//! - **Present proof** (`/present-proof`)
//! - **Schema registry** (`/schema-registry`)
//! - **Verification policies** (`/verification`)
//! - **System** (`/_system`)
//!
//! ## Result shape
//!
//! Every endpoint method returns `Result<Option<T>, PrismAgentError>`:
//! - `Ok(Some(value))`: the endpoint's documented success status, decoded.
//! - `Err(PrismAgentError::Api { .. })`: a documented error status, with
//!   the agent's problem document decoded.
//! - For statuses the API document does not list, the client-wide
//!   [`AgentConfig::raise_on_unexpected_status`] flag picks between
//!   `Err(PrismAgentError::UnexpectedStatus { .. })` (the default) and a
//!   lenient `Ok(None)`.
//!
//! DID resolution is the one deviation: the agent answers its documented
//! error statuses with a resolution envelope rather than a problem
//! document, so those decode as `Ok(Some(_))` too (see [`did`]).
//!
//! ## Example
//!
//! ```no_run
//! use prism_agent_client::{AgentConfig, PrismAgentClient};
//! use prism_agent_client::models::CreateConnectionRequest;
//!
//! # async fn run() -> Result<(), prism_agent_client::PrismAgentError> {
//! let client = PrismAgentClient::new(AgentConfig::from_env()?)?;
//! let conn = client
//!     .connections()
//!     .create(&CreateConnectionRequest {
//!         label: Some("issuer <-> holder".into()),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("invite: {}", conn.unwrap().invitation.invitation_url);
//! # Ok(())
//! # }
//! ```

pub mod blocking;
pub mod config;
pub mod connections;
pub mod did;
pub mod did_registrar;
pub mod error;
pub mod issue_credentials;
pub mod models;
pub mod present_proof;
pub(crate) mod response;
pub mod schema_registry;
pub mod system;
pub mod verification;

pub use config::AgentConfig;
pub use error::PrismAgentError;

use std::time::Duration;

/// Top-level Prism agent client. Holds sub-clients for each service.
#[derive(Debug, Clone)]
pub struct PrismAgentClient {
    connections: connections::ConnectionsClient,
    did: did::DidClient,
    did_registrar: did_registrar::DidRegistrarClient,
    issue_credentials: issue_credentials::IssueCredentialsClient,
    present_proof: present_proof::PresentProofClient,
    schema_registry: schema_registry::SchemaRegistryClient,
    verification: verification::VerificationClient,
    system: system::SystemClient,
}

impl PrismAgentClient {
    /// Create a new agent client from configuration.
    ///
    /// Builds one shared `reqwest::Client` with the configured timeout and,
    /// when an API key is set, an `Authorization: Bearer` default header
    /// marked sensitive so proxies and logs do not echo it.
    pub fn new(config: AgentConfig) -> Result<Self, PrismAgentError> {
        let mut builder =
            reqwest::Client::builder().timeout(Duration::from_secs(config.timeout_secs));

        if let Some(api_key) = &config.api_key {
            let mut headers = reqwest::header::HeaderMap::new();
            let mut value =
                reqwest::header::HeaderValue::from_str(&format!("Bearer {}", api_key.as_str()))
                    .map_err(|_| PrismAgentError::Config(config::ConfigError::InvalidApiKey))?;
            value.set_sensitive(true);
            headers.insert(reqwest::header::AUTHORIZATION, value);
            builder = builder.default_headers(headers);
        }

        let http = builder.build().map_err(|e| PrismAgentError::Http {
            endpoint: "client_init".into(),
            source: e,
        })?;

        let base_url = config::normalize_base(config.base_url);
        let strict = config.raise_on_unexpected_status;

        Ok(Self {
            connections: connections::ConnectionsClient::new(
                http.clone(),
                base_url.clone(),
                strict,
            ),
            did: did::DidClient::new(http.clone(), base_url.clone(), strict),
            did_registrar: did_registrar::DidRegistrarClient::new(
                http.clone(),
                base_url.clone(),
                strict,
            ),
            issue_credentials: issue_credentials::IssueCredentialsClient::new(
                http.clone(),
                base_url.clone(),
                strict,
            ),
            present_proof: present_proof::PresentProofClient::new(
                http.clone(),
                base_url.clone(),
                strict,
            ),
            schema_registry: schema_registry::SchemaRegistryClient::new(
                http.clone(),
                base_url.clone(),
                strict,
            ),
            verification: verification::VerificationClient::new(
                http.clone(),
                base_url.clone(),
                strict,
            ),
            system: system::SystemClient::new(http, base_url, strict),
        })
    }

    /// Access the connections client.
    pub fn connections(&self) -> &connections::ConnectionsClient {
        &self.connections
    }

    /// Access the DID resolution client.
    pub fn did(&self) -> &did::DidClient {
        &self.did
    }

    /// Access the DID registrar client.
    pub fn did_registrar(&self) -> &did_registrar::DidRegistrarClient {
        &self.did_registrar
    }

    /// Access the issue-credentials client.
    pub fn issue_credentials(&self) -> &issue_credentials::IssueCredentialsClient {
        &self.issue_credentials
    }

    /// Access the present-proof client.
    pub fn present_proof(&self) -> &present_proof::PresentProofClient {
        &self.present_proof
    }

    /// Access the schema registry client.
    pub fn schema_registry(&self) -> &schema_registry::SchemaRegistryClient {
        &self.schema_registry
    }

    /// Access the verification policy client.
    pub fn verification(&self) -> &verification::VerificationClient {
        &self.verification
    }

    /// Access the system client.
    pub fn system(&self) -> &system::SystemClient {
        &self.system
    }
}
