//! Contract tests for SystemClient.
//!
//! | Method | Path | Test |
//! |--------|------|------|
//! | GET    | `/_system/health` | `health_*` |

use prism_agent_client::{AgentConfig, PrismAgentClient, PrismAgentError};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(mock_server: &MockServer) -> PrismAgentClient {
    let config = AgentConfig {
        base_url: mock_server.uri().parse().unwrap(),
        api_key: None,
        timeout_secs: 5,
        raise_on_unexpected_status: true,
    };
    PrismAgentClient::new(config).unwrap()
}

// ── GET /_system/health ──────────────────────────────────────────────

#[tokio::test]
async fn health_reports_agent_version() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/_system/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "version": "1.19.1" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let health = client.system().health().await.unwrap().unwrap();
    assert_eq!(health.version, "1.19.1");
}

#[tokio::test]
async fn health_internal_error_is_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/_system/health"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "status": 500,
            "type": "error://prism-agent/internal",
            "title": "InternalServerError",
            "instance": "/prism-agent/_system/health",
            "detail": "database connection refused"
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let result = client.system().health().await;
    match result.unwrap_err() {
        PrismAgentError::Api { endpoint, status, error } => {
            assert_eq!(endpoint, "GET /_system/health");
            assert_eq!(status, 500);
            assert_eq!(error.title, "InternalServerError");
        }
        other => panic!("expected Api, got: {other:?}"),
    }
}
