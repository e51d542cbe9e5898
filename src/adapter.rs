// ABOUTME: Generic tool adapter executing one endpoint descriptor against the upstream API
// ABOUTME: Validates arguments, sends the request with timeout and cancellation, decodes the reply
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 dravr.ai

use std::sync::Arc;
use std::time::Instant;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tokio::time::timeout as tokio_timeout;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::config::ApiConfig;
use crate::endpoint::EndpointDescriptor;
use crate::request::{build_request, OutboundRequest};
use crate::response::decode_response;
use crate::types::ToolError;

const APPLICATION_JSON: &str = "application/json";

/// Executes endpoint descriptors against the upstream REST API
///
/// Holds the read-only configuration and one pooled HTTP client. Cloning is
/// cheap and every clone shares the same pool.
#[derive(Debug, Clone)]
pub struct ToolAdapter {
    config: Arc<ApiConfig>,
    client: Client,
}

impl ToolAdapter {
    /// Build an adapter with a fresh HTTP client
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::Config`](crate::ErrorKind::Config) if the HTTP
    /// client cannot be initialized (for example, no TLS backend).
    pub fn new(config: Arc<ApiConfig>) -> Result<Self, ToolError> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ToolError::config(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { config, client })
    }

    /// Run one call of `endpoint` with the caller's arguments
    ///
    /// Argument errors are raised before any network I/O. The round trip is
    /// bounded by the configured timeout and abandoned as soon as `cancel`
    /// fires.
    pub async fn invoke(
        &self,
        endpoint: &EndpointDescriptor,
        arguments: &Value,
        cancel: &CancellationToken,
    ) -> Result<String, ToolError> {
        let bag = arguments
            .as_object()
            .ok_or_else(|| ToolError::invalid_arguments("Invalid arguments object"))?;
        let request = build_request(endpoint, bag, &self.config)?;

        info!(
            tool = endpoint.name,
            method = %request.method,
            path = request.path(),
            "Calling upstream"
        );
        let start = Instant::now();

        let (status, body) = tokio::select! {
            biased;
            () = cancel.cancelled() => {
                warn!(tool = endpoint.name, "Call cancelled before upstream answered");
                return Err(ToolError::cancelled());
            }
            result = tokio_timeout(self.config.timeout, self.send(&request)) => match result {
                Ok(outcome) => outcome?,
                Err(_) => {
                    warn!(tool = endpoint.name, timeout = ?self.config.timeout, "Upstream call timed out");
                    return Err(ToolError::timeout(self.config.timeout));
                }
            },
        };

        debug!(
            tool = endpoint.name,
            status = status.as_u16(),
            bytes = body.len(),
            duration = ?start.elapsed(),
            "Upstream answered"
        );
        decode_response(status, &body, endpoint.response)
    }

    async fn send(&self, request: &OutboundRequest) -> Result<(StatusCode, Vec<u8>), ToolError> {
        let mut builder = self
            .client
            .request(request.method.to_reqwest(), request.url.clone())
            .header(ACCEPT, APPLICATION_JSON);
        if let Some(body) = &request.body {
            builder = builder
                .header(CONTENT_TYPE, APPLICATION_JSON)
                .body(body.clone());
        }

        // Errors carry the URL, which holds credentials in its query.
        let response = builder.send().await.map_err(|e| ToolError::transport(e.without_url()))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ToolError::encoding("Failed to read response body", e.without_url()))?;
        Ok((status, body.to_vec()))
    }
}
