//! Smoke tests for the blocking facade.
//!
//! The blocking client drives its own current-thread runtime, so these
//! tests are plain `#[test]` functions. wiremock is async, so each test
//! hosts it on a separate multi-thread runtime whose workers keep the
//! mock server responsive while the test thread is parked in `block_on`.
//! Per-endpoint behavior is covered by the async contract tests; this
//! file only checks that calls round-trip through the facade.

use prism_agent_client::blocking;
use prism_agent_client::models::{ConnectionRole, ConnectionState};
use prism_agent_client::{AgentConfig, PrismAgentError};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn blocking_client(mock_server: &MockServer) -> blocking::PrismAgentClient {
    let config = AgentConfig {
        base_url: mock_server.uri().parse().unwrap(),
        api_key: None,
        timeout_secs: 5,
        raise_on_unexpected_status: true,
    };
    blocking::PrismAgentClient::new(config).unwrap()
}

#[test]
fn health_roundtrip_without_async() {
    let server_rt = tokio::runtime::Runtime::new().unwrap();
    let mock_server = server_rt.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/_system/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "version": "1.19.1" })))
            .expect(1)
            .mount(&server)
            .await;
        server
    });

    let client = blocking_client(&mock_server);
    let health = client.health().unwrap().unwrap();
    assert_eq!(health.version, "1.19.1");
}

#[test]
fn get_connection_decodes_record() {
    let id = "3fa85f64-5717-4562-b3fc-2c963f66afa6";
    let server_rt = tokio::runtime::Runtime::new().unwrap();
    let mock_server = server_rt.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/connections/{id}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "connectionId": id,
                "role": "Inviter",
                "state": "ConnectionResponseSent",
                "invitation": {
                    "id": id,
                    "type": "https://didcomm.org/out-of-band/2.0/invitation",
                    "from": "did:peer:2.Ez6LS...issuer",
                    "invitationUrl": "https://my.domain.com/path?_oob=eyJpZCI6IjA1MjdhZWExIn0="
                },
                "createdAt": "2026-02-10T09:30:00Z",
                "self": format!("/prism-agent/connections/{id}"),
                "kind": "Connection"
            })))
            .mount(&server)
            .await;
        server
    });

    let client = blocking_client(&mock_server);
    let conn = client.get_connection(id.parse().unwrap()).unwrap().unwrap();
    assert_eq!(conn.role, ConnectionRole::Inviter);
    assert_eq!(conn.state, ConnectionState::ConnectionResponseSent);
}

#[test]
fn api_errors_surface_through_blocking_calls() {
    let id = "c15b7b88-0a89-4c43-a757-9bb5d9fcf301";
    let server_rt = tokio::runtime::Runtime::new().unwrap();
    let mock_server = server_rt.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/verification/policies/{id}")))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "status": 404,
                "type": "error://prism-agent/not-found",
                "title": "NotFound",
                "instance": format!("/prism-agent/verification/policies/{id}"),
                "detail": "verification policy not found"
            })))
            .mount(&server)
            .await;
        server
    });

    let client = blocking_client(&mock_server);
    let result = client.get_policy(id.parse().unwrap());
    match result.unwrap_err() {
        PrismAgentError::Api { status, error, .. } => {
            assert_eq!(status, 404);
            assert_eq!(error.title, "NotFound");
        }
        other => panic!("expected Api, got: {other:?}"),
    }
}
