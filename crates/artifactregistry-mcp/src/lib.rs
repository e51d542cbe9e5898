// ABOUTME: Library root for the Artifact Registry MCP server
// ABOUTME: Exposes protocol, dispatcher, state, tools and transports for the binary and tests
//
// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 dravr.ai

//! MCP server exposing every Artifact Registry catalog endpoint as a tool.
//!
//! The binary wires these pieces together; integration tests drive the
//! [`transport::http::router`] and [`transport::stdio::serve_lines`]
//! entry points directly.

/// JSON-RPC and MCP wire types
pub mod protocol;
/// Request dispatcher
pub mod server;
/// Shared adapter and in-flight call table
pub mod state;
/// Tool trait, registry and endpoint tools
pub mod tools;
/// Stdio and HTTP transports
pub mod transport;

pub use server::McpServer;
pub use state::{ServerState, SharedState};
pub use tools::build_tool_registry;
