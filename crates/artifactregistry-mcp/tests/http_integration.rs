// ABOUTME: Integration tests for the MCP HTTP router against a local mock upstream
// ABOUTME: Exercises health, tools/list, tools/call success and failure, and SSE responses
//
// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 dravr.ai

use std::sync::Arc;

use artifactregistry::{ApiConfig, ToolAdapter};
use artifactregistry_mcp::transport::http::router;
use artifactregistry_mcp::{build_tool_registry, McpServer, ServerState};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

/// Start a mock upstream answering `GET /v1/{*rest}` with `status` and `body`
async fn spawn_upstream(status: StatusCode, body: &'static str) -> String {
    let app = axum::Router::new().route("/v1/{*rest}", get(move || async move { (status, body) }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    format!("http://{addr}")
}

fn test_app(base_url: &str) -> axum::Router {
    let adapter = ToolAdapter::new(Arc::new(ApiConfig::new(base_url))).expect("adapter");
    let state = Arc::new(ServerState::new(adapter));
    router(Arc::new(McpServer::new(state, build_tool_registry())))
}

fn post_mcp(body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/mcp")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).expect("serialize")))
        .expect("build request")
}

/// Send a request and parse the response body as JSON
async fn send_and_parse(app: axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("send request");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect")
        .to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

fn call(id: u64, name: &str, arguments: &Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": "tools/call",
        "params": {"name": name, "arguments": arguments}
    })
}

// ============================================================================
// Health and discovery
// ============================================================================

#[tokio::test]
async fn health_reports_tool_count() {
    let app = test_app("http://127.0.0.1:9");
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .expect("build request");

    let (status, json) = send_and_parse(app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(
        json["tools"].as_u64(),
        Some(artifactregistry::catalog::ENDPOINTS.len() as u64)
    );
}

#[tokio::test]
async fn tools_list_follows_catalog_order() {
    let app = test_app("http://127.0.0.1:9");
    let (status, json) = send_and_parse(
        app,
        post_mcp(&json!({"jsonrpc": "2.0", "id": 1, "method": "tools/list"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let tools = json["result"]["tools"].as_array().expect("tools");
    assert_eq!(tools[0]["name"], "get_project_settings");
    assert!(tools.iter().all(|t| t["inputSchema"]["type"] == "object"));
}

#[tokio::test]
async fn malformed_body_is_parse_error() {
    let app = test_app("http://127.0.0.1:9");
    let request = Request::builder()
        .method("POST")
        .uri("/mcp")
        .body(Body::from("{not json"))
        .expect("build request");

    let (_, json) = send_and_parse(app, request).await;
    assert_eq!(json["error"]["code"], -32_700);
}

#[tokio::test]
async fn notification_is_accepted_without_body() {
    let app = test_app("http://127.0.0.1:9");
    let response = app
        .oneshot(post_mcp(
            &json!({"jsonrpc": "2.0", "method": "notifications/initialized"}),
        ))
        .await
        .expect("send request");
    assert_eq!(response.status(), StatusCode::ACCEPTED);
}

// ============================================================================
// Tool calls through the upstream
// ============================================================================

#[tokio::test]
async fn tool_call_returns_pretty_upstream_json() {
    let base = spawn_upstream(
        StatusCode::OK,
        r#"{"name":"projects/p/locations/us/repositories/r","format":"DOCKER","bogus":true}"#,
    )
    .await;
    let app = test_app(&base);

    let (_, json) = send_and_parse(
        app,
        post_mcp(&call(
            2,
            "repositories_get",
            &json!({"name": "projects/p/locations/us/repositories/r"}),
        )),
    )
    .await;

    let result = &json["result"];
    assert!(result.get("isError").is_none());
    let text = result["content"][0]["text"].as_str().expect("text");
    assert!(text.contains('\n'));
    let decoded: Value = serde_json::from_str(text).expect("json");
    assert_eq!(
        decoded,
        json!({"format": "DOCKER", "name": "projects/p/locations/us/repositories/r"})
    );
}

#[tokio::test]
async fn upstream_error_becomes_failed_result() {
    let base = spawn_upstream(StatusCode::NOT_FOUND, r#"{"error":"not found"}"#).await;
    let app = test_app(&base);

    let (status, json) = send_and_parse(
        app,
        post_mcp(&call(
            3,
            "repositories_packages_tags_get",
            &json!({"name": "projects/p/locations/us/repositories/r/packages/x/tags/latest"}),
        )),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(json.get("error").is_none());
    assert_eq!(json["result"]["isError"], true);
    assert_eq!(
        json["result"]["content"][0]["text"],
        r#"API error: {"error":"not found"}"#
    );
}

#[tokio::test]
async fn sse_accept_header_yields_event_stream() {
    let app = test_app("http://127.0.0.1:9");
    let request = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header("content-type", "application/json")
        .header("accept", "application/json, text/event-stream")
        .body(Body::from(
            r#"{"jsonrpc":"2.0","id":7,"method":"ping"}"#,
        ))
        .expect("build request");

    let response = app.oneshot(request).await.expect("send request");
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    assert!(content_type.starts_with("text/event-stream"));

    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect")
        .to_bytes();
    let text = String::from_utf8(bytes.to_vec()).expect("utf8");
    assert!(text.starts_with("data: "));
    assert!(text.contains(r#""id":7"#));
}

#[tokio::test]
async fn sse_media_type_with_parameters_is_recognized() {
    let app = test_app("http://127.0.0.1:9");
    let request = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header("accept", "text/event-stream;q=0.9")
        .header("mcp-session-id", "session-1")
        .body(Body::from(r#"{"jsonrpc":"2.0","id":8,"method":"ping"}"#))
        .expect("build request");

    let response = app.oneshot(request).await.expect("send request");
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("text/event-stream")));
}

#[tokio::test]
async fn session_cancel_notice_is_accepted() {
    let app = test_app("http://127.0.0.1:9");
    let request = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header("content-type", "application/json")
        .header("mcp-session-id", "session-1")
        .body(Body::from(
            r#"{"jsonrpc":"2.0","method":"notifications/cancelled","params":{"requestId":1}}"#,
        ))
        .expect("build request");

    let response = app.oneshot(request).await.expect("send request");
    assert_eq!(response.status(), StatusCode::ACCEPTED);
}
