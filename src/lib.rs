// ABOUTME: Artifact Registry REST adapter library exposing API operations as descriptor-driven tools
// ABOUTME: Re-exports the configuration, endpoint catalog, schema registry and generic tool adapter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 dravr.ai

//! # Artifact Registry Tool Adapters
//!
//! Every operation of the Google Artifact Registry v1 REST API is described
//! by a static [`EndpointDescriptor`] in the [`catalog`]. One generic
//! [`ToolAdapter`] interprets any descriptor: it validates the caller's
//! argument bag, builds the query string and JSON body from the declared
//! [`schema`](schema::SchemaDef), sends a single HTTP request and decodes the
//! reply into pretty-printed JSON.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use artifactregistry::{catalog, ApiConfig, ToolAdapter};
//! use serde_json::json;
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() -> Result<(), artifactregistry::ToolError> {
//! let config = ApiConfig::default().with_bearer_token("ya29...");
//! let adapter = ToolAdapter::new(Arc::new(config))?;
//! let endpoint = catalog::find("repositories_list").expect("registered");
//! let text = adapter
//!     .invoke(
//!         endpoint,
//!         &json!({ "parent": "projects/my-project/locations/us-central1" }),
//!         &CancellationToken::new(),
//!     )
//!     .await?;
//! println!("{text}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`types`]: `ToolError`, `ErrorKind` and the argument bag alias
//! - [`config`]: base URL, credentials and timeout
//! - [`schema`]: tagged field lists, body projection and response decoding
//! - [`models`]: the schema registry
//! - [`endpoint`]: descriptor types and input-schema generation
//! - [`catalog`]: every exposed operation
//! - [`request`]: the generic request builder
//! - [`response`]: the generic response decoder
//! - [`adapter`]: sending, timeout and cancellation

/// Core types: errors and the argument bag
pub mod types;

/// Upstream API configuration
pub mod config;
/// TOML configuration file loading
#[cfg(feature = "config-file")]
pub mod config_file;

/// Schema-driven projection and decoding
pub mod schema;
/// Static schema definitions of the upstream API
pub mod models;

/// Endpoint descriptor types
pub mod endpoint;
/// Static endpoint catalog
pub mod catalog;

/// Outbound request construction
pub mod request;
/// Upstream reply decoding
pub mod response;
/// Generic descriptor executor
pub mod adapter;

pub use adapter::ToolAdapter;
pub use config::ApiConfig;
pub use endpoint::{EndpointDescriptor, HttpMethod, ParamDef, ParamLocation};
pub use schema::{FieldDef, FieldKind, SchemaDef, SchemaError};
pub use types::{ArgumentBag, ErrorKind, ToolError};
