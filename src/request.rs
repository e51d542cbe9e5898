// ABOUTME: Generic request builder turning an argument bag and endpoint descriptor into an HTTP request
// ABOUTME: Path substitution, query rendering, auth query parameters, and body projection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 dravr.ai

use reqwest::Url;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::endpoint::{EndpointDescriptor, HttpMethod};
use crate::schema::{self, SchemaError};
use crate::types::{ArgumentBag, ToolError};

/// A fully resolved upstream request, ready to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRequest {
    /// HTTP method
    pub method: HttpMethod,
    /// Absolute URL including the query string
    pub url: Url,
    /// Serialized JSON body for write operations
    pub body: Option<Vec<u8>>,
}

impl OutboundRequest {
    /// URL path without the query string, safe to log
    pub fn path(&self) -> &str {
        self.url.path()
    }
}

/// Build the outbound request for one call
///
/// Every argument check happens here, so a call that fails validation never
/// reaches the network.
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidArguments`](crate::ErrorKind::InvalidArguments)
/// for missing or mistyped path parameters and missing required query
/// parameters, and [`ErrorKind::Encoding`](crate::ErrorKind::Encoding) when
/// the body cannot be projected or serialized or the URL does not parse.
pub fn build_request(
    endpoint: &EndpointDescriptor,
    bag: &ArgumentBag,
    config: &ApiConfig,
) -> Result<OutboundRequest, ToolError> {
    let path = substitute_path(endpoint, bag)?;
    let query = render_query(endpoint, bag, config)?;

    let body = match endpoint.request_body {
        Some(body_schema) => {
            let projected = schema::project_body(bag, body_schema).map_err(|e| match e {
                SchemaError::Syntax(cause) => {
                    ToolError::encoding("Failed to encode request body", cause)
                }
                mismatch @ SchemaError::Mismatch { .. } => ToolError::encoding(
                    "Failed to convert arguments to request type",
                    mismatch,
                ),
            })?;
            let bytes = serde_json::to_vec(&projected)
                .map_err(|e| ToolError::encoding("Failed to encode request body", e))?;
            Some(bytes)
        }
        None => None,
    };

    let mut raw = format!("{}/{path}", config.trimmed_base_url());
    if !query.is_empty() {
        raw.push('?');
        raw.push_str(&query.join("&"));
    }
    let url = Url::parse(&raw).map_err(|e| ToolError::encoding("Failed to create request", e))?;

    Ok(OutboundRequest {
        method: endpoint.method,
        url,
        body,
    })
}

fn substitute_path(endpoint: &EndpointDescriptor, bag: &ArgumentBag) -> Result<String, ToolError> {
    let mut path = endpoint.path.to_owned();
    for param in endpoint.path_params() {
        let value = match bag.get(param.name) {
            None => {
                return Err(ToolError::invalid_arguments(format!(
                    "Missing required path parameter: {}",
                    param.name
                )))
            }
            Some(Value::String(s)) => s,
            Some(_) => {
                return Err(ToolError::invalid_arguments(format!(
                    "Invalid path parameter: {}",
                    param.name
                )))
            }
        };
        path = path.replace(&format!("{{{}}}", param.name), value);
    }
    Ok(path)
}

fn render_query(
    endpoint: &EndpointDescriptor,
    bag: &ArgumentBag,
    config: &ApiConfig,
) -> Result<Vec<String>, ToolError> {
    let mut query = Vec::new();
    for param in endpoint.query_params() {
        match bag.get(param.name) {
            Some(value) => query.push(format!("{}={}", param.name, query_value(value))),
            None if param.required => {
                return Err(ToolError::invalid_arguments(format!(
                    "Missing required query parameter: {}",
                    param.name
                )))
            }
            None => {}
        }
    }

    if let Some(token) = &config.bearer_token {
        query.push(format!("access_token={token}"));
    }
    if let Some(key) = &config.api_key {
        query.push(format!("key={key}"));
    }
    if let Some(token) = &config.bearer_token {
        query.push(format!("oauth_token={token}"));
    }
    Ok(query)
}

/// Default text rendering of a query value
fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
