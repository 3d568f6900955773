//! Prism Agent client configuration.
//!
//! Defaults point at a local agent instance. Override via environment
//! variables or explicit construction.

use url::Url;
use zeroize::Zeroizing;

/// Configuration for connecting to a Prism Agent.
///
/// Custom `Debug` implementation redacts the `api_key` field to prevent
/// credential leakage in log output.
#[derive(Clone)]
pub struct AgentConfig {
    /// Agent base URL; a trailing slash is appended when missing.
    /// Default: <http://localhost:8080/prism-agent>
    pub base_url: Url,
    /// Bearer token for API authentication; local agents run without one.
    pub api_key: Option<Zeroizing<String>>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// When the agent answers with a status outside an endpoint's
    /// documented set: `true` surfaces an `UnexpectedStatus` error,
    /// `false` degrades to an empty result.
    pub raise_on_unexpected_status: bool,
}

impl std::fmt::Debug for AgentConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .field("raise_on_unexpected_status", &self.raise_on_unexpected_status)
            .finish()
    }
}

impl AgentConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `PRISM_AGENT_URL` (default: `http://localhost:8080/prism-agent`)
    /// - `PRISM_AGENT_API_KEY` (optional)
    /// - `PRISM_AGENT_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: env_url("PRISM_AGENT_URL", "http://localhost:8080/prism-agent")?,
            api_key: std::env::var("PRISM_AGENT_API_KEY")
                .ok()
                .map(Zeroizing::new),
            timeout_secs: std::env::var("PRISM_AGENT_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
            raise_on_unexpected_status: true,
        })
    }

    /// Create a configuration pointing at a local agent (for testing).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` if the localhost URL cannot be
    /// parsed (should not occur for valid port numbers, but avoids
    /// `expect()`).
    pub fn local(port: u16) -> Result<Self, ConfigError> {
        let base_url = Url::parse(&format!("http://127.0.0.1:{port}"))
            .map_err(|e| ConfigError::InvalidUrl("localhost".to_string(), e.to_string()))?;
        Ok(Self {
            base_url,
            api_key: None,
            timeout_secs: 5,
            raise_on_unexpected_status: true,
        })
    }
}

fn env_url(var: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))
}

/// Base URLs are concatenated with relative API paths, so they must end in
/// a slash.
pub(crate) fn normalize_base(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
    #[error("api key contains characters not allowed in an Authorization header")]
    InvalidApiKey,
}
