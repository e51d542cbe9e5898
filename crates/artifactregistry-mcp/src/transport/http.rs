// ABOUTME: HTTP transport answering MCP JSON-RPC posts as JSON or a one-event SSE stream
// ABOUTME: Routes POST /mcp per Mcp-Session-Id and reports the tool count on GET /health
//
// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 dravr.ai

use std::convert::Infallible;
use std::sync::Arc;

use artifactregistry::ToolError;
use async_trait::async_trait;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::ACCEPT;
use axum::http::{HeaderMap, StatusCode};
use axum::response::sse::{Event, Sse};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use futures::stream;
use serde_json::{json, Value};
use tracing::{debug, error, info, warn};

use crate::protocol::{JsonRpcRequest, JsonRpcResponse, PARSE_ERROR};
use crate::server::McpServer;
use crate::state::DEFAULT_SESSION;
use crate::transport::McpTransport;

/// Header naming the client session a message belongs to
pub const SESSION_HEADER: &str = "mcp-session-id";

const EVENT_STREAM: &str = "text/event-stream";

/// Serves the tool catalog over HTTP
pub struct HttpTransport {
    host: String,
    port: u16,
}

impl HttpTransport {
    /// Listen on `host:port` once served
    pub const fn new(host: String, port: u16) -> Self {
        Self { host, port }
    }
}

#[async_trait]
impl McpTransport for HttpTransport {
    async fn serve(self, server: Arc<McpServer>) -> Result<(), ToolError> {
        let addr = format!("{}:{}", self.host, self.port);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| ToolError::internal(format!("Failed to bind {addr}: {e}")))?;
        info!(address = %addr, tools = server.tool_count(), "Serving MCP over HTTP");

        axum::serve(listener, router(server))
            .await
            .map_err(|e| ToolError::internal(format!("HTTP server error: {e}")))
    }
}

/// Routes for `POST /mcp` and `GET /health`
pub fn router(server: Arc<McpServer>) -> Router {
    Router::new()
        .route("/mcp", post(mcp_message))
        .route("/health", get(health))
        .with_state(server)
}

async fn health(State(server): State<Arc<McpServer>>) -> Json<Value> {
    Json(json!({ "status": "ok", "tools": server.tool_count() }))
}

/// Reply shape for one posted message
enum Reply {
    /// Notification, nothing to send back
    Accepted,
    Json(JsonRpcResponse),
    /// Single `data:` event for clients accepting an event stream
    Event(JsonRpcResponse),
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        match self {
            Self::Accepted => StatusCode::ACCEPTED.into_response(),
            Self::Json(response) => Json(response).into_response(),
            Self::Event(response) => match Event::default().json_data(&response) {
                Ok(event) => {
                    Sse::new(stream::once(async { Ok::<_, Infallible>(event) })).into_response()
                }
                Err(e) => {
                    error!(error = %e, "Failed to encode SSE event, answering with JSON");
                    Json(response).into_response()
                }
            },
        }
    }
}

/// One JSON-RPC message per POST
///
/// Dropping the connection drops this future, and with it the in-flight
/// registration of any tool call it was running.
async fn mcp_message(
    State(server): State<Arc<McpServer>>,
    headers: HeaderMap,
    body: Bytes,
) -> Reply {
    let request: JsonRpcRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, "Rejecting unparsable MCP body");
            return Reply::Json(JsonRpcResponse::error(
                None,
                PARSE_ERROR,
                format!("Parse error: {e}"),
            ));
        }
    };

    let session = headers
        .get(SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or(DEFAULT_SESSION);
    debug!(method = %request.method, session, "MCP message over HTTP");

    match server.handle_session_request(session, request).await {
        None => Reply::Accepted,
        Some(response) if accepts_event_stream(&headers) => Reply::Event(response),
        Some(response) => Reply::Json(response),
    }
}

fn accepts_event_stream(headers: &HeaderMap) -> bool {
    headers
        .get_all(ACCEPT)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .any(|media| media.split(';').next().is_some_and(|m| m.trim() == EVENT_STREAM))
}
