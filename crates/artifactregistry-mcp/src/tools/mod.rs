// ABOUTME: Tool registry that maps MCP tool names to handler implementations
// ABOUTME: Provides the McpTool trait, an ordered ToolRegistry, and the catalog-backed registry builder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 dravr.ai

pub mod endpoint;

use std::collections::HashMap;

use artifactregistry::catalog;
use async_trait::async_trait;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::protocol::{CallToolResult, ToolDefinition};
use crate::state::SharedState;

/// Trait implemented by each MCP tool exposed by this server
#[async_trait]
pub trait McpTool: Send + Sync {
    /// Return the tool's MCP definition (name, description, input schema)
    fn definition(&self) -> ToolDefinition;

    /// Execute the tool, giving up as soon as `cancel` fires
    async fn execute(
        &self,
        state: &SharedState,
        arguments: Value,
        cancel: &CancellationToken,
    ) -> CallToolResult;
}

/// Registry mapping tool names to their handler implementations
///
/// Definitions are listed in registration order.
pub struct ToolRegistry {
    tools: Vec<Box<dyn McpTool>>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            tools: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Register a tool handler; a later tool with the same name replaces the earlier one
    pub fn register(&mut self, tool: Box<dyn McpTool>) {
        let name = tool.definition().name;
        if let Some(&slot) = self.index.get(&name) {
            self.tools[slot] = tool;
        } else {
            self.index.insert(name, self.tools.len());
            self.tools.push(tool);
        }
    }

    /// Number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether no tools are registered
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// All tool definitions for `tools/list`
    pub fn list_definitions(&self) -> Vec<ToolDefinition> {
        self.tools.iter().map(|t| t.definition()).collect()
    }

    /// Dispatch a `tools/call` to the named tool handler
    pub async fn execute(
        &self,
        name: &str,
        state: &SharedState,
        arguments: Value,
        cancel: &CancellationToken,
    ) -> CallToolResult {
        match self.index.get(name) {
            Some(&slot) => self.tools[slot].execute(state, arguments, cancel).await,
            None => CallToolResult::error(format!("Unknown tool: {name}")),
        }
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the registry with one tool per catalog endpoint, in catalog order
pub fn build_tool_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    for descriptor in catalog::ENDPOINTS {
        registry.register(Box::new(endpoint::EndpointTool::new(descriptor)));
    }
    registry
}
