// ABOUTME: Transport abstraction for MCP server communication channels
// ABOUTME: Defines the McpTransport trait implemented by stdio and HTTP backends
//
// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 dravr.ai

pub mod http;
pub mod stdio;

use std::sync::Arc;

use artifactregistry::ToolError;
use async_trait::async_trait;

use crate::server::McpServer;

/// Transport layer for MCP JSON-RPC message exchange
///
/// Implementations handle the mechanics of reading requests and writing
/// responses over a specific channel.
#[async_trait]
pub trait McpTransport: Send {
    /// Serve MCP requests until the channel closes
    async fn serve(self, server: Arc<McpServer>) -> Result<(), ToolError>;
}
