// ABOUTME: MCP JSON-RPC protocol types for the Artifact Registry tool server
// ABOUTME: Wire format for initialize, tools/list, tools/call, cancellation notices, and errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 dravr.ai

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// MCP protocol version supported by this server
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Server name reported during MCP handshake
pub const SERVER_NAME: &str = "artifactregistry-mcp";

/// Server version reported during MCP handshake
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Notification sent by clients to abandon an in-flight request
pub const CANCELLED_NOTIFICATION: &str = "notifications/cancelled";

// ============================================================================
// JSON-RPC Error Codes
// ============================================================================

/// Invalid JSON received
pub const PARSE_ERROR: i32 = -32_700;

/// Not a valid JSON-RPC 2.0 request
pub const INVALID_REQUEST: i32 = -32_600;

/// Unknown method
pub const METHOD_NOT_FOUND: i32 = -32_601;

/// Malformed method parameters
pub const INVALID_PARAMS: i32 = -32_602;

/// Server-side failure unrelated to the tool outcome
pub const INTERNAL_ERROR: i32 = -32_603;

// ============================================================================
// JSON-RPC Messages
// ============================================================================

/// Incoming JSON-RPC message; requests carry an id, notifications do not
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    /// Must be "2.0"
    pub jsonrpc: String,
    /// Request identifier (None for notifications)
    #[serde(default)]
    pub id: Option<Value>,
    /// Method name
    pub method: String,
    /// Method parameters
    #[serde(default)]
    pub params: Option<Value>,
}

/// Outgoing JSON-RPC response
#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    /// Always "2.0"
    pub jsonrpc: String,
    /// Matching request identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    /// Success payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Error payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error object
#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    /// Numeric error code
    pub code: i32,
    /// Human-readable error message
    pub message: String,
    /// Additional error data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcResponse {
    /// Build a success response
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_owned(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Build an error response
    pub fn error(id: Option<Value>, code: i32, message: String) -> Self {
        Self {
            jsonrpc: "2.0".to_owned(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message,
                data: None,
            }),
        }
    }

    /// Serialize `payload` into a success response, or an internal error if that fails
    pub fn from_serializable<T: Serialize>(id: Option<Value>, payload: &T) -> Self {
        match serde_json::to_value(payload) {
            Ok(val) => Self::success(id, val),
            Err(e) => Self::error(id, INTERNAL_ERROR, format!("Serialization error: {e}")),
        }
    }
}

// ============================================================================
// MCP Initialize
// ============================================================================

/// Client handshake parameters (logged, not negotiated)
#[derive(Debug, Deserialize)]
pub struct InitializeParams {
    /// Protocol version requested by the client
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    /// Client capabilities
    #[serde(default)]
    pub capabilities: Value,
    /// Client identification
    #[serde(rename = "clientInfo")]
    pub client_info: ClientInfo,
}

/// Client identification
#[derive(Debug, Deserialize)]
pub struct ClientInfo {
    /// Client name
    pub name: String,
    /// Client version
    #[serde(default)]
    pub version: Option<String>,
}

/// Result of `initialize`
#[derive(Debug, Serialize)]
pub struct InitializeResult {
    /// Protocol version the server speaks
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    /// Server capabilities
    pub capabilities: ServerCapabilities,
    /// Server identification
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
}

impl InitializeResult {
    /// Handshake result advertising this server and its tools capability
    pub fn current() -> Self {
        Self {
            protocol_version: PROTOCOL_VERSION.to_owned(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {}),
            },
            server_info: ServerInfo {
                name: SERVER_NAME.to_owned(),
                version: SERVER_VERSION.to_owned(),
            },
        }
    }
}

/// Server identification
#[derive(Debug, Serialize)]
pub struct ServerInfo {
    /// Server name
    pub name: String,
    /// Server version
    pub version: String,
}

/// Server capability declarations
#[derive(Debug, Serialize)]
pub struct ServerCapabilities {
    /// Present when tools are available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<ToolsCapability>,
}

/// Marker for tool support
#[derive(Debug, Serialize)]
pub struct ToolsCapability {}

// ============================================================================
// MCP Tools
// ============================================================================

/// Tool definition exposed via `tools/list`
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    /// Unique tool name
    pub name: String,
    /// Human-readable tool description
    pub description: String,
    /// JSON Schema describing the tool's input
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Result of `tools/list`
#[derive(Debug, Serialize)]
pub struct ToolsListResult {
    /// Available tool definitions, in registration order
    pub tools: Vec<ToolDefinition>,
}

/// Parameters for `tools/call`
#[derive(Debug, Deserialize)]
pub struct CallToolParams {
    /// Name of the tool to invoke
    pub name: String,
    /// Tool arguments
    #[serde(default)]
    pub arguments: Option<Value>,
}

/// Result of `tools/call`
///
/// Tool failures are reported here with `isError: true`, never as JSON-RPC
/// error objects.
#[derive(Debug, Serialize)]
pub struct CallToolResult {
    /// Response content parts
    pub content: Vec<ContentPart>,
    /// Whether this result represents a failure
    #[serde(rename = "isError", skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

/// A content part within a tool result
#[derive(Debug, Serialize)]
pub struct ContentPart {
    /// Content type (always "text")
    #[serde(rename = "type")]
    pub content_type: String,
    /// Text content
    pub text: String,
}

impl CallToolResult {
    /// Successful text result
    pub fn text(content: String) -> Self {
        Self {
            content: vec![ContentPart {
                content_type: "text".to_owned(),
                text: content,
            }],
            is_error: None,
        }
    }

    /// Failed result carrying the error description
    pub fn error(message: String) -> Self {
        Self {
            content: vec![ContentPart {
                content_type: "text".to_owned(),
                text: message,
            }],
            is_error: Some(true),
        }
    }
}

// ============================================================================
// MCP Notifications
// ============================================================================

/// Parameters of `notifications/cancelled`
#[derive(Debug, Deserialize)]
pub struct CancelledParams {
    /// Id of the request to abandon
    #[serde(rename = "requestId")]
    pub request_id: Value,
    /// Optional client-supplied reason
    #[serde(default)]
    pub reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_response_omits_error() {
        let resp = JsonRpcResponse::success(Some(Value::from(1)), serde_json::json!({"ok": true}));
        let json = serde_json::to_string(&resp).expect("serialize");
        assert!(json.contains("\"result\""));
        assert!(!json.contains("\"error\""));
    }

    #[test]
    fn error_response_carries_code() {
        let resp = JsonRpcResponse::error(Some(Value::from(1)), PARSE_ERROR, "bad json".to_owned());
        let json = serde_json::to_string(&resp).expect("serialize");
        assert!(json.contains("-32700"));
        assert!(!json.contains("\"result\""));
    }

    #[test]
    fn notification_has_no_id() {
        let raw = r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#;
        let req: JsonRpcRequest = serde_json::from_str(raw).expect("deserialize");
        assert!(req.id.is_none());
        assert!(req.params.is_none());
    }

    #[test]
    fn cancelled_params_accept_numeric_and_string_ids() {
        let numeric: CancelledParams =
            serde_json::from_value(serde_json::json!({"requestId": 7})).expect("numeric");
        assert_eq!(numeric.request_id, Value::from(7));

        let named: CancelledParams =
            serde_json::from_value(serde_json::json!({"requestId": "abc", "reason": "user"}))
                .expect("string");
        assert_eq!(named.reason.as_deref(), Some("user"));
    }

    #[test]
    fn error_result_sets_flag() {
        let result = CallToolResult::error("API error: nope".to_owned());
        let json = serde_json::to_value(&result).expect("serialize");
        assert_eq!(json["isError"], true);
        assert_eq!(json["content"][0]["type"], "text");
        assert!(CallToolResult::text("ok".to_owned()).is_error.is_none());
    }
}
