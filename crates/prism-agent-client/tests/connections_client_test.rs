//! Contract tests for ConnectionsClient against the Prism agent REST surface.
//!
//! wiremock stands in for the agent; paths, query parameters and body
//! shapes follow the agent's published API document.
//!
//! | Method | Path | Test |
//! |--------|------|------|
//! | POST   | `/connections` | `create_connection_*` |
//! | GET    | `/connections/{connectionId}` | `get_connection_*` |
//! | GET    | `/connections` | `list_connections_*` |
//! | POST   | `/connection-invitations` | `accept_invitation_*` |

use prism_agent_client::models::{
    AcceptConnectionInvitationRequest, ConnectionRole, ConnectionState, CreateConnectionRequest,
};
use prism_agent_client::{AgentConfig, PrismAgentClient, PrismAgentError};
use serde_json::{json, Map};
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build a client pointed at a wiremock server.
fn test_client(mock_server: &MockServer) -> PrismAgentClient {
    let config = AgentConfig {
        base_url: mock_server.uri().parse().unwrap(),
        api_key: None,
        timeout_secs: 5,
        raise_on_unexpected_status: true,
    };
    PrismAgentClient::new(config).unwrap()
}

/// Same, but with undocumented statuses degraded to `Ok(None)`.
fn lenient_client(mock_server: &MockServer) -> PrismAgentClient {
    let config = AgentConfig {
        base_url: mock_server.uri().parse().unwrap(),
        api_key: None,
        timeout_secs: 5,
        raise_on_unexpected_status: false,
    };
    PrismAgentClient::new(config).unwrap()
}

fn connection_body(id: &str, role: &str, state: &str) -> serde_json::Value {
    json!({
        "connectionId": id,
        "thid": "0527aea1-d131-3948-a34d-03af39aba8b4",
        "label": "issuer <-> holder",
        "role": role,
        "state": state,
        "invitation": {
            "id": id,
            "type": "https://didcomm.org/out-of-band/2.0/invitation",
            "from": "did:peer:2.Ez6LS...issuer",
            "invitationUrl": "https://my.domain.com/path?_oob=eyJpZCI6IjA1MjdhZWExIn0="
        },
        "createdAt": "2026-02-10T09:30:00Z",
        "self": format!("/prism-agent/connections/{id}"),
        "kind": "Connection"
    })
}

// ── POST /connections ────────────────────────────────────────────────

#[tokio::test]
async fn create_connection_returns_invitation_generated_record() {
    let mock_server = MockServer::start().await;
    let id = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

    Mock::given(method("POST"))
        .and(path("/connections"))
        .and(body_partial_json(json!({"label": "issuer <-> holder"})))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(connection_body(id, "Inviter", "InvitationGenerated")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let req = CreateConnectionRequest {
        label: Some("issuer <-> holder".into()),
        extra: Map::new(),
    };

    let conn = client.connections().create(&req).await.unwrap().unwrap();
    assert_eq!(conn.connection_id.to_string(), id);
    assert_eq!(conn.role, ConnectionRole::Inviter);
    assert_eq!(conn.state, ConnectionState::InvitationGenerated);
    assert!(conn.invitation.invitation_url.contains("_oob="));
}

#[tokio::test]
async fn create_connection_maps_problem_document_on_400() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/connections"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "status": 400,
            "type": "error://prism-agent/bad-request",
            "title": "BadRequest",
            "instance": "/prism-agent/connections",
            "detail": "label too long"
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let req = CreateConnectionRequest {
        label: Some("x".repeat(10_000)),
        extra: Map::new(),
    };

    let result = client.connections().create(&req).await;
    match result.unwrap_err() {
        PrismAgentError::Api { status, error, .. } => {
            assert_eq!(status, 400);
            assert_eq!(error.title, "BadRequest");
            assert_eq!(error.detail.as_deref(), Some("label too long"));
        }
        other => panic!("expected Api, got: {other:?}"),
    }
}

// ── GET /connections/{connectionId} ──────────────────────────────────

#[tokio::test]
async fn get_connection_returns_record() {
    let mock_server = MockServer::start().await;
    let id = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

    Mock::given(method("GET"))
        .and(path(format!("/connections/{id}")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(connection_body(id, "Invitee", "ConnectionResponseReceived")),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let conn = client
        .connections()
        .get(id.parse().unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(conn.role, ConnectionRole::Invitee);
    assert_eq!(conn.state, ConnectionState::ConnectionResponseReceived);
    assert_eq!(conn.label.as_deref(), Some("issuer <-> holder"));
}

#[tokio::test]
async fn get_connection_unknown_id_is_api_error() {
    let mock_server = MockServer::start().await;
    let id = "3fa85f64-5717-4562-b3fc-2c963f66afa7";

    Mock::given(method("GET"))
        .and(path(format!("/connections/{id}")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status": 404,
            "type": "error://prism-agent/connection-not-found",
            "title": "NotFound",
            "instance": format!("/prism-agent/connections/{id}")
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let result = client.connections().get(id.parse().unwrap()).await;
    match result.unwrap_err() {
        PrismAgentError::Api { status, error, .. } => {
            assert_eq!(status, 404);
            assert_eq!(error.title, "NotFound");
        }
        other => panic!("expected Api, got: {other:?}"),
    }
}

// ── GET /connections ─────────────────────────────────────────────────

#[tokio::test]
async fn list_connections_passes_offset_and_limit() {
    let mock_server = MockServer::start().await;
    let id = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

    Mock::given(method("GET"))
        .and(path("/connections"))
        .and(query_param("offset", "20"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "self": "/prism-agent/connections?offset=20&limit=10",
            "kind": "ConnectionsPage",
            "pageOf": "/prism-agent/connections",
            "next": null,
            "previous": "/prism-agent/connections?offset=10&limit=10",
            "contents": [connection_body(id, "Inviter", "ConnectionResponseSent")]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let page = client
        .connections()
        .list(Some(20), Some(10))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(page.items().len(), 1);
    assert_eq!(page.items()[0].state, ConnectionState::ConnectionResponseSent);
    // Explicit "next": null decodes as present-but-null.
    assert_eq!(page.next, Some(None));
    assert_eq!(
        page.previous,
        Some(Some("/prism-agent/connections?offset=10&limit=10".into()))
    );
}

#[tokio::test]
async fn list_connections_without_paging_decodes_empty_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/connections"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "self": "/prism-agent/connections",
            "kind": "ConnectionsPage",
            "pageOf": "/prism-agent/connections",
            "contents": []
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let page = client.connections().list(None, None).await.unwrap().unwrap();
    assert!(page.items().is_empty());
    assert_eq!(page.next, None);
}

// ── POST /connection-invitations ─────────────────────────────────────

#[tokio::test]
async fn accept_invitation_posts_raw_invitation_payload() {
    let mock_server = MockServer::start().await;
    let id = "4fa85f64-5717-4562-b3fc-2c963f66afa9";

    Mock::given(method("POST"))
        .and(path("/connection-invitations"))
        .and(body_partial_json(
            json!({"invitation": "eyJpZCI6IjA1MjdhZWExIn0="}),
        ))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(connection_body(id, "Invitee", "ConnectionRequestPending")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let req = AcceptConnectionInvitationRequest {
        invitation: "eyJpZCI6IjA1MjdhZWExIn0=".into(),
        extra: Map::new(),
    };

    let conn = client
        .connections()
        .accept_invitation(&req)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(conn.role, ConnectionRole::Invitee);
    assert_eq!(conn.state, ConnectionState::ConnectionRequestPending);
}

// ── Authorization ────────────────────────────────────────────────────

#[tokio::test]
async fn requests_carry_bearer_token_when_api_key_set() {
    let mock_server = MockServer::start().await;
    let id = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

    Mock::given(method("GET"))
        .and(path(format!("/connections/{id}")))
        .and(header("authorization", "Bearer test-api-key"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(connection_body(id, "Inviter", "InvitationGenerated")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = AgentConfig {
        base_url: mock_server.uri().parse().unwrap(),
        api_key: Some(zeroize::Zeroizing::new("test-api-key".into())),
        timeout_secs: 5,
        raise_on_unexpected_status: true,
    };
    let client = PrismAgentClient::new(config).unwrap();

    let conn = client.connections().get(id.parse().unwrap()).await.unwrap();
    assert!(conn.is_some());
}

// ── Undocumented statuses ────────────────────────────────────────────

#[tokio::test]
async fn strict_client_errors_on_undocumented_status() {
    let mock_server = MockServer::start().await;
    let id = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

    Mock::given(method("GET"))
        .and(path(format!("/connections/{id}")))
        .respond_with(ResponseTemplate::new(418).set_body_string("I'm a teapot"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let result = client.connections().get(id.parse().unwrap()).await;
    match result.unwrap_err() {
        PrismAgentError::UnexpectedStatus { status, body, .. } => {
            assert_eq!(status, 418);
            assert!(body.contains("teapot"));
        }
        other => panic!("expected UnexpectedStatus, got: {other:?}"),
    }
}

#[tokio::test]
async fn lenient_client_returns_none_on_undocumented_status() {
    let mock_server = MockServer::start().await;
    let id = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

    Mock::given(method("GET"))
        .and(path(format!("/connections/{id}")))
        .respond_with(ResponseTemplate::new(418).set_body_string("I'm a teapot"))
        .mount(&mock_server)
        .await;

    let client = lenient_client(&mock_server);
    let conn = client.connections().get(id.parse().unwrap()).await.unwrap();
    assert!(conn.is_none());
}

// ── Serde resilience (forward compatibility) ─────────────────────────

#[tokio::test]
async fn connection_with_unknown_fields_and_state_still_decodes() {
    let mock_server = MockServer::start().await;
    let id = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

    let mut body = connection_body(id, "Inviter", "SomeFutureState");
    body["goalCode"] = json!("issue-vc");
    body["myDid"] = json!("did:peer:2.Ez6LS...mine");

    Mock::given(method("GET"))
        .and(path(format!("/connections/{id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let conn = client
        .connections()
        .get(id.parse().unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(conn.state, ConnectionState::Unknown);
    assert_eq!(conn.my_did.as_deref(), Some("did:peer:2.Ez6LS...mine"));
    assert_eq!(conn.extra["goalCode"], json!("issue-vc"));
}
