// ABOUTME: Core types for Artifact Registry tool adapters: error taxonomy and argument bag alias
// ABOUTME: Provides ToolError with ErrorKind categories used by every adapter stage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 dravr.ai

//! # Core Types
//!
//! Error type shared by the request builder, response decoder and adapter.
//! Every failure a tool call can hit is mapped onto one [`ErrorKind`] so the
//! caller can tell an upstream 4xx/5xx apart from a cancelled or timed-out
//! call without parsing the message text.

use std::fmt;
use std::time::Duration;

use serde_json::{Map, Value};

/// Untyped per-call argument mapping supplied by the caller
pub type ArgumentBag = Map<String, Value>;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for tool adapter operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolError {
    /// Error category
    pub kind: ErrorKind,
    /// Human-readable error message
    pub message: String,
}

/// Categories of errors produced while invoking a tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Missing or mistyped argument, detected before any I/O
    InvalidArguments,
    /// Failure to marshal a request, build a URL, or format a response
    Encoding,
    /// Connection, DNS or TLS failure talking to the upstream API
    Transport,
    /// The upstream did not answer within the configured timeout
    Timeout,
    /// The caller cancelled the call before it completed
    Cancelled,
    /// The upstream answered with a status code >= 400
    Upstream,
    /// Configuration error
    Config,
    /// Internal error (bug, unexpected state, server plumbing)
    Internal,
}

impl ToolError {
    /// Create an argument error
    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::InvalidArguments,
            message: message.into(),
        }
    }

    /// Create a local encoding error with the failing step and its cause
    pub fn encoding(context: &str, cause: impl fmt::Display) -> Self {
        Self {
            kind: ErrorKind::Encoding,
            message: format!("{context}: {cause}"),
        }
    }

    /// Create a transport error
    pub fn transport(cause: impl fmt::Display) -> Self {
        Self {
            kind: ErrorKind::Transport,
            message: format!("Request failed: {cause}"),
        }
    }

    /// Create a timeout error for the deadline that elapsed
    pub fn timeout(deadline: Duration) -> Self {
        Self {
            kind: ErrorKind::Timeout,
            message: format!("Request timed out after {deadline:?}"),
        }
    }

    /// Create a cancellation error
    pub fn cancelled() -> Self {
        Self {
            kind: ErrorKind::Cancelled,
            message: "Request cancelled".to_owned(),
        }
    }

    /// Create an upstream error carrying the raw response body verbatim
    pub fn upstream(body: &str) -> Self {
        Self {
            kind: ErrorKind::Upstream,
            message: format!("API error: {body}"),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Config,
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Internal,
            message: message.into(),
        }
    }
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ToolError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_error_embeds_body_verbatim() {
        let err = ToolError::upstream(r#"{"error":"not found"}"#);
        assert_eq!(err.kind, ErrorKind::Upstream);
        assert_eq!(err.message, r#"API error: {"error":"not found"}"#);
    }

    #[test]
    fn cancelled_and_timeout_are_distinct_from_upstream() {
        assert_eq!(ToolError::cancelled().kind, ErrorKind::Cancelled);
        assert_eq!(
            ToolError::timeout(Duration::from_secs(5)).kind,
            ErrorKind::Timeout
        );
        assert_eq!(
            ToolError::timeout(Duration::from_secs(30)).message,
            "Request timed out after 30s"
        );
    }

    #[test]
    fn sub_second_timeout_keeps_its_unit() {
        assert_eq!(
            ToolError::timeout(Duration::from_millis(200)).message,
            "Request timed out after 200ms"
        );
    }

    #[test]
    fn display_includes_kind() {
        let err = ToolError::invalid_arguments("Missing required path parameter: parent");
        assert_eq!(
            err.to_string(),
            "InvalidArguments: Missing required path parameter: parent"
        );
    }
}
