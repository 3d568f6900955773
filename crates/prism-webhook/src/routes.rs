//! Catch-all request logging for the webhook sink.
//!
//! One fallback handler takes every method and path. The response body
//! echoes the request line so a `curl` against the sink confirms wiring
//! without reading the logs.

use axum::{
    body::Bytes,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use serde_json::Value;

/// Build the router: no routes, one catch-all.
pub fn router() -> Router {
    Router::new().fallback(log_request)
}

async fn log_request(method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Response {
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());

    tracing::info!("{method} request for {path}");
    for (name, value) in &headers {
        tracing::info!("  {name}: {}", String::from_utf8_lossy(value.as_bytes()));
    }

    if !body.is_empty() {
        match serde_json::from_slice::<Value>(&body) {
            Ok(json) => tracing::info!(
                "body:\n{}",
                serde_json::to_string_pretty(&json).unwrap_or_default()
            ),
            Err(_) => tracing::info!(
                "body ({} bytes, not JSON): {}",
                body.len(),
                String::from_utf8_lossy(&body)
            ),
        }
    }

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html")],
        format!("{method} request for {path}"),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use http_body_util::BodyExt;
    use serde_json::json;
    use tower::ServiceExt;

    async fn body_string(resp: Response) -> String {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn get_echoes_request_line() {
        let app = router();
        let req = axum::http::Request::builder()
            .uri("/prism-agent/events")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()[header::CONTENT_TYPE].to_str().unwrap(),
            "text/html"
        );
        assert_eq!(body_string(resp).await, "GET request for /prism-agent/events");
    }

    #[tokio::test]
    async fn query_string_survives_in_echo() {
        let app = router();
        let req = axum::http::Request::builder()
            .uri("/hook?source=agent-a")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_string(resp).await, "GET request for /hook?source=agent-a");
    }

    #[tokio::test]
    async fn post_json_body_accepted() {
        let app = router();
        let req = axum::http::Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from(
                serde_json::to_string(&json!({
                    "type": "ConnectionUpdated",
                    "connectionId": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
                    "state": "ConnectionResponseSent"
                }))
                .unwrap(),
            ))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_string(resp).await, "POST request for /");
    }

    #[tokio::test]
    async fn post_non_json_body_accepted() {
        let app = router();
        let req = axum::http::Request::builder()
            .method("POST")
            .uri("/raw")
            .body(Body::from("not json at all"))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_string(resp).await, "POST request for /raw");
    }
}
