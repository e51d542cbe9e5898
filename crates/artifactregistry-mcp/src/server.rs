// ABOUTME: MCP server core that routes JSON-RPC requests to protocol handlers and tools
// ABOUTME: Implements initialize, ping, tools/list, tools/call, and cancellation notifications
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 dravr.ai

use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::protocol::{
    CallToolParams, CancelledParams, InitializeParams, InitializeResult, JsonRpcRequest,
    JsonRpcResponse, ToolsListResult, CANCELLED_NOTIFICATION, INVALID_PARAMS, INVALID_REQUEST,
    METHOD_NOT_FOUND,
};
use crate::state::{SharedState, DEFAULT_SESSION};
use crate::tools::ToolRegistry;

/// MCP server that dispatches JSON-RPC requests to the appropriate handler
///
/// Owns the shared state and tool registry. Transport layers feed parsed
/// requests into `handle_request` and send the returned responses.
pub struct McpServer {
    state: SharedState,
    tools: ToolRegistry,
}

impl McpServer {
    /// Create a server with the given shared state and tool registry
    pub const fn new(state: SharedState, tools: ToolRegistry) -> Self {
        Self { state, tools }
    }

    /// Number of tools this server exposes
    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    /// Shared state (adapter and in-flight calls)
    pub const fn state(&self) -> &SharedState {
        &self.state
    }

    /// Route a JSON-RPC message from a transport without sessions
    ///
    /// Returns `None` for notifications (messages without an id).
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        self.handle_session_request(DEFAULT_SESSION, request).await
    }

    /// Route a JSON-RPC message received within `session`
    ///
    /// Cancellation notices only reach calls made in the same session.
    pub async fn handle_session_request(
        &self,
        session: &str,
        request: JsonRpcRequest,
    ) -> Option<JsonRpcResponse> {
        if request.jsonrpc != "2.0" {
            return Some(JsonRpcResponse::error(
                request.id,
                INVALID_REQUEST,
                format!("Unsupported JSON-RPC version: {}", request.jsonrpc),
            ));
        }

        let Some(id) = request.id else {
            self.handle_notification(session, &request.method, request.params);
            return None;
        };

        let response = match request.method.as_str() {
            "initialize" => Self::handle_initialize(id, request.params),
            "ping" => JsonRpcResponse::success(Some(id), Value::Object(Map::new())),
            "tools/list" => self.handle_tools_list(id),
            "tools/call" => self.handle_tools_call(session, id, request.params).await,
            method => {
                debug!(method, "Unknown MCP method");
                JsonRpcResponse::error(
                    Some(id),
                    METHOD_NOT_FOUND,
                    format!("Method not found: {method}"),
                )
            }
        };

        Some(response)
    }

    fn handle_notification(&self, session: &str, method: &str, params: Option<Value>) {
        if method != CANCELLED_NOTIFICATION {
            debug!(method, "Received notification, no response");
            return;
        }

        let Some(Ok(cancelled)) = params.map(serde_json::from_value::<CancelledParams>) else {
            debug!("Ignoring cancellation notice without a requestId");
            return;
        };

        let found = self.state.cancel(session, &cancelled.request_id);
        info!(
            request_id = %cancelled.request_id,
            reason = cancelled.reason.as_deref().unwrap_or(""),
            found,
            "Cancellation requested"
        );
    }

    /// Handle `initialize`: log client info and return server capabilities
    fn handle_initialize(id: Value, params: Option<Value>) -> JsonRpcResponse {
        if let Some(Ok(init)) = params.map(serde_json::from_value::<InitializeParams>) {
            debug!(
                client = %init.client_info.name,
                version = ?init.client_info.version,
                protocol = %init.protocol_version,
                capabilities = %init.capabilities,
                "MCP client connected"
            );
        }

        JsonRpcResponse::from_serializable(Some(id), &InitializeResult::current())
    }

    /// Handle `tools/list`: every registered definition, in registration order
    fn handle_tools_list(&self, id: Value) -> JsonRpcResponse {
        let result = ToolsListResult {
            tools: self.tools.list_definitions(),
        };
        JsonRpcResponse::from_serializable(Some(id), &result)
    }

    /// Handle `tools/call`: run the named tool under a cancellable registration
    async fn handle_tools_call(
        &self,
        session: &str,
        id: Value,
        params: Option<Value>,
    ) -> JsonRpcResponse {
        let call_params: CallToolParams = match params.map(serde_json::from_value) {
            Some(Ok(cp)) => cp,
            Some(Err(e)) => {
                return JsonRpcResponse::error(
                    Some(id),
                    INVALID_PARAMS,
                    format!("Invalid params: {e}"),
                );
            }
            None => {
                return JsonRpcResponse::error(
                    Some(id),
                    INVALID_PARAMS,
                    "Missing params for tools/call".to_owned(),
                );
            }
        };

        let arguments = call_params
            .arguments
            .unwrap_or_else(|| Value::Object(Map::new()));

        let call = self.state.begin_call(session, &id);
        let result = self
            .tools
            .execute(&call_params.name, &self.state, arguments, call.token())
            .await;
        drop(call);

        JsonRpcResponse::from_serializable(Some(id), &result)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use artifactregistry::{ApiConfig, ToolAdapter};
    use serde_json::json;

    use super::*;
    use crate::protocol::{PROTOCOL_VERSION, SERVER_NAME};
    use crate::state::ServerState;
    use crate::tools::build_tool_registry;

    fn server() -> McpServer {
        // Nothing listens on port 9; no test here reaches the network
        let config = ApiConfig::new("http://127.0.0.1:9");
        let adapter = ToolAdapter::new(Arc::new(config)).expect("adapter");
        McpServer::new(Arc::new(ServerState::new(adapter)), build_tool_registry())
    }

    fn request(value: Value) -> JsonRpcRequest {
        serde_json::from_value(value).expect("request")
    }

    #[tokio::test]
    async fn initialize_reports_server_info() {
        let resp = server()
            .handle_request(request(json!({
                "jsonrpc": "2.0", "id": 1, "method": "initialize",
                "params": {"protocolVersion": "2024-11-05", "capabilities": {}, "clientInfo": {"name": "test"}}
            })))
            .await
            .expect("response");
        let result = resp.result.expect("result");
        assert_eq!(result["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(result["serverInfo"]["name"], SERVER_NAME);
        assert!(result["capabilities"]["tools"].is_object());
    }

    #[tokio::test]
    async fn wrong_jsonrpc_version_is_invalid_request() {
        let resp = server()
            .handle_request(request(json!({"jsonrpc": "1.0", "id": 1, "method": "ping"})))
            .await
            .expect("response");
        assert_eq!(resp.error.expect("error").code, INVALID_REQUEST);
    }

    #[tokio::test]
    async fn notifications_get_no_response() {
        let server = server();
        let resp = server
            .handle_request(request(json!({"jsonrpc": "2.0", "method": "notifications/initialized"})))
            .await;
        assert!(resp.is_none());

        let resp = server
            .handle_request(request(json!({
                "jsonrpc": "2.0", "method": "notifications/cancelled", "params": {"requestId": 99}
            })))
            .await;
        assert!(resp.is_none());
    }

    #[tokio::test]
    async fn unknown_method_is_rejected() {
        let resp = server()
            .handle_request(request(json!({"jsonrpc": "2.0", "id": 2, "method": "resources/list"})))
            .await
            .expect("response");
        assert_eq!(resp.error.expect("error").code, METHOD_NOT_FOUND);
    }

    #[tokio::test]
    async fn tools_list_contains_catalog_schemas() {
        let resp = server()
            .handle_request(request(json!({"jsonrpc": "2.0", "id": 3, "method": "tools/list"})))
            .await
            .expect("response");
        let tools = resp.result.expect("result")["tools"].clone();
        let create = tools
            .as_array()
            .expect("array")
            .iter()
            .find(|t| t["name"] == "repositories_create")
            .expect("repositories_create listed")
            .clone();
        assert_eq!(create["inputSchema"]["required"], json!(["parent"]));
        assert!(create["inputSchema"]["properties"]["format"].is_object());
    }

    #[tokio::test]
    async fn tool_errors_are_results_not_protocol_errors() {
        let resp = server()
            .handle_request(request(json!({
                "jsonrpc": "2.0", "id": 4, "method": "tools/call",
                "params": {"name": "repositories_get", "arguments": {}}
            })))
            .await
            .expect("response");
        assert!(resp.error.is_none());
        let result = resp.result.expect("result");
        assert_eq!(result["isError"], true);
        assert_eq!(
            result["content"][0]["text"],
            "Missing required path parameter: name"
        );
    }

    #[tokio::test]
    async fn unknown_tool_is_failed_result() {
        let resp = server()
            .handle_request(request(json!({
                "jsonrpc": "2.0", "id": 5, "method": "tools/call",
                "params": {"name": "get_v1_name"}
            })))
            .await
            .expect("response");
        let result = resp.result.expect("result");
        assert_eq!(result["isError"], true);
        assert_eq!(result["content"][0]["text"], "Unknown tool: get_v1_name");
    }

    #[tokio::test]
    async fn tools_call_without_params_is_invalid_params() {
        let server = server();
        let resp = server
            .handle_request(request(json!({"jsonrpc": "2.0", "id": 6, "method": "tools/call"})))
            .await
            .expect("response");
        assert_eq!(resp.error.expect("error").code, INVALID_PARAMS);
        assert_eq!(server.state().in_flight_count(), 0);
    }

    #[tokio::test]
    async fn cancellation_is_scoped_to_the_session() {
        let server = server();
        let call = server.state().begin_call("client-a", &Value::from(1));

        server
            .handle_session_request(
                "client-b",
                request(json!({
                    "jsonrpc": "2.0", "method": "notifications/cancelled", "params": {"requestId": 1}
                })),
            )
            .await;
        assert!(!call.token().is_cancelled());

        server
            .handle_session_request(
                "client-a",
                request(json!({
                    "jsonrpc": "2.0", "method": "notifications/cancelled", "params": {"requestId": 1}
                })),
            )
            .await;
        assert!(call.token().is_cancelled());
    }
}
