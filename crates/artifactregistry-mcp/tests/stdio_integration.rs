// ABOUTME: Integration tests for the newline-delimited stdio transport
// ABOUTME: Covers concurrent request handling and cancellation of an in-flight tool call
//
// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 dravr.ai

use std::sync::Arc;
use std::time::Duration;

use artifactregistry::{ApiConfig, ToolAdapter};
use artifactregistry_mcp::transport::stdio::serve_lines;
use artifactregistry_mcp::{build_tool_registry, McpServer, ServerState};
use axum::http::StatusCode;
use axum::routing::get;
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

/// Mock upstream that answers every `/v1/...` GET after `delay`
async fn spawn_slow_upstream(delay: Duration) -> String {
    let app = axum::Router::new().route(
        "/v1/{*rest}",
        get(move || async move {
            tokio::time::sleep(delay).await;
            (StatusCode::OK, r#"{"name":"operations/op1","done":true}"#)
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    format!("http://{addr}")
}

fn server(base_url: &str) -> Arc<McpServer> {
    let adapter = ToolAdapter::new(Arc::new(ApiConfig::new(base_url))).expect("adapter");
    Arc::new(McpServer::new(
        Arc::new(ServerState::new(adapter)),
        build_tool_registry(),
    ))
}

async fn wait_for_in_flight(server: &McpServer, expected: usize) {
    for _ in 0..200 {
        if server.state().in_flight_count() == expected {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("in-flight count never reached {expected}");
}

#[tokio::test]
async fn cancellation_notice_interrupts_in_flight_call() {
    let base = spawn_slow_upstream(Duration::from_secs(10)).await;
    let server = server(&base);

    let (mut client_in, server_in) = tokio::io::duplex(4096);
    let (server_out, client_out) = tokio::io::duplex(4096);
    let serving = tokio::spawn(serve_lines(
        Arc::clone(&server),
        BufReader::new(server_in),
        server_out,
    ));

    client_in
        .write_all(
            br#"{"jsonrpc":"2.0","id":"slow-1","method":"tools/call","params":{"name":"operations_get","arguments":{"name":"projects/p/locations/us/operations/op1"}}}
"#,
        )
        .await
        .expect("write call");
    wait_for_in_flight(&server, 1).await;

    // A ping answered while the slow call is still running
    client_in
        .write_all(b"{\"jsonrpc\":\"2.0\",\"id\":2,\"method\":\"ping\"}\n")
        .await
        .expect("write ping");

    let mut responses = BufReader::new(client_out).lines();
    let first: Value = serde_json::from_str(
        &responses.next_line().await.expect("read").expect("line"),
    )
    .expect("json");
    assert_eq!(first["id"], 2);

    client_in
        .write_all(
            b"{\"jsonrpc\":\"2.0\",\"method\":\"notifications/cancelled\",\"params\":{\"requestId\":\"slow-1\"}}\n",
        )
        .await
        .expect("write cancel");

    let second: Value = serde_json::from_str(
        &responses.next_line().await.expect("read").expect("line"),
    )
    .expect("json");
    assert_eq!(second["id"], "slow-1");
    assert_eq!(second["result"]["isError"], true);
    assert_eq!(second["result"]["content"][0]["text"], "Request cancelled");

    drop(client_in);
    serving.await.expect("join").expect("serve");
    assert_eq!(server.state().in_flight_count(), 0);
}

#[tokio::test]
async fn parse_errors_do_not_stop_the_loop() {
    let server = server("http://127.0.0.1:9");
    let input = b"not json\n\n{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"ping\"}\n".to_vec();
    let (server_out, client_out) = tokio::io::duplex(4096);

    serve_lines(server, BufReader::new(input.as_slice()), server_out)
        .await
        .expect("serve");

    let mut lines = BufReader::new(client_out).lines();
    let mut codes = Vec::new();
    while let Some(line) = lines.next_line().await.expect("read") {
        let value: Value = serde_json::from_str(&line).expect("json");
        codes.push(value["error"]["code"].as_i64());
    }
    codes.sort_unstable();
    assert_eq!(codes, [None, Some(-32_700)]);
}

#[tokio::test]
async fn invalid_utf8_line_is_answered_and_loop_continues() {
    let server = server("http://127.0.0.1:9");
    let mut input = b"\xff\xfe garbage\n".to_vec();
    input.extend_from_slice(b"{\"jsonrpc\":\"2.0\",\"id\":5,\"method\":\"ping\"}\n");
    let (server_out, client_out) = tokio::io::duplex(4096);

    serve_lines(server, BufReader::new(input.as_slice()), server_out)
        .await
        .expect("serve");

    let mut lines = BufReader::new(client_out).lines();
    let mut responses = Vec::new();
    while let Some(line) = lines.next_line().await.expect("read") {
        responses.push(serde_json::from_str::<Value>(&line).expect("json"));
    }
    assert_eq!(responses.len(), 2);
    let parse_error = responses
        .iter()
        .find(|r| r["error"]["code"] == -32_700)
        .expect("parse error reply");
    assert!(parse_error["error"]["message"]
        .as_str()
        .is_some_and(|m| m.contains("UTF-8")));
    assert!(responses.iter().any(|r| r["id"] == 5 && r["result"].is_object()));
}
