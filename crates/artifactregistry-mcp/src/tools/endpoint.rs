// ABOUTME: MCP tool backed by one Artifact Registry endpoint descriptor
// ABOUTME: Delegates to the shared adapter and maps its outcome onto a CallToolResult
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 dravr.ai

use artifactregistry::{EndpointDescriptor, ErrorKind};
use async_trait::async_trait;
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::protocol::{CallToolResult, ToolDefinition};
use crate::state::SharedState;
use crate::tools::McpTool;

/// Exposes one upstream operation as a tool
pub struct EndpointTool {
    endpoint: &'static EndpointDescriptor,
}

impl EndpointTool {
    /// Wrap a catalog descriptor
    pub const fn new(endpoint: &'static EndpointDescriptor) -> Self {
        Self { endpoint }
    }
}

#[async_trait]
impl McpTool for EndpointTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.endpoint.name.to_owned(),
            description: self.endpoint.description.to_owned(),
            input_schema: self.endpoint.input_schema(),
        }
    }

    async fn execute(
        &self,
        state: &SharedState,
        arguments: Value,
        cancel: &CancellationToken,
    ) -> CallToolResult {
        match state
            .adapter()
            .invoke(self.endpoint, &arguments, cancel)
            .await
        {
            Ok(text) => CallToolResult::text(text),
            Err(e) => {
                match e.kind {
                    ErrorKind::InvalidArguments | ErrorKind::Cancelled => {
                        debug!(tool = self.endpoint.name, error = %e, "Tool call rejected");
                    }
                    _ => warn!(tool = self.endpoint.name, error = %e, "Tool call failed"),
                }
                CallToolResult::error(e.message)
            }
        }
    }
}
