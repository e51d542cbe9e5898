// ABOUTME: CLI entry point for the Artifact Registry MCP server binary
// ABOUTME: Layers config file, environment and flags, selects transport (stdio or HTTP), and serves
//
// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 dravr.ai

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use artifactregistry::config_file::FileConfig;
use artifactregistry::{ApiConfig, ToolAdapter, ToolError};
use clap::Parser;

use artifactregistry_mcp::transport::http::HttpTransport;
use artifactregistry_mcp::transport::stdio::StdioTransport;
use artifactregistry_mcp::transport::McpTransport;
use artifactregistry_mcp::{build_tool_registry, McpServer, ServerState};

/// artifactregistry-mcp: Google Artifact Registry REST operations as MCP tools
#[derive(Parser)]
#[command(name = "artifactregistry-mcp", version, about)]
struct Cli {
    /// Transport mode: "stdio" for stdin/stdout or "http" for HTTP+SSE
    #[arg(long, default_value = "stdio")]
    transport: String,

    /// HTTP listen port (only used with --transport http)
    #[arg(long, default_value_t = 3000)]
    port: u16,

    /// HTTP listen host (only used with --transport http)
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Upstream API base URL (overrides ARTIFACTREGISTRY_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// API key sent as the `key` query parameter
    #[arg(long)]
    api_key: Option<String>,

    /// OAuth bearer token sent as `access_token` and `oauth_token`
    #[arg(long)]
    bearer_token: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Configuration file (defaults to <config dir>/artifactregistry-mcp/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Cli {
    /// Defaults, then the config file, then the environment, then flags
    fn api_config(&self) -> Result<ApiConfig, ToolError> {
        let file = match &self.config {
            Some(path) => Some(FileConfig::load(path)?),
            None => FileConfig::load_default()?,
        };
        let mut config = file
            .map_or_else(ApiConfig::default, |f| f.apply(ApiConfig::default()))
            .with_env_overrides()
            .map_err(|e| ToolError::config(format!("Invalid ARTIFACTREGISTRY_TIMEOUT_SECS: {e}")))?;

        if let Some(url) = &self.base_url {
            config = config.with_base_url(url.as_str());
        }
        if let Some(key) = &self.api_key {
            config = config.with_api_key(key.as_str());
        }
        if let Some(token) = &self.bearer_token {
            config = config.with_bearer_token(token.as_str());
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr to keep stdout clean for stdio transport
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Arc::new(cli.api_config()?);

    tracing::info!(
        transport = %cli.transport,
        base_url = %config.base_url,
        api_key = config.api_key.is_some(),
        bearer_token = config.bearer_token.is_some(),
        timeout = ?config.timeout,
        "Starting Artifact Registry MCP server"
    );

    let adapter = ToolAdapter::new(config)?;
    let state = Arc::new(ServerState::new(adapter));
    let server = Arc::new(McpServer::new(state, build_tool_registry()));

    match cli.transport.as_str() {
        "stdio" => StdioTransport.serve(server).await?,
        "http" => HttpTransport::new(cli.host, cli.port).serve(server).await?,
        other => {
            return Err(ToolError::config(format!(
                "Unknown transport: {other}. Valid: stdio, http"
            ))
            .into());
        }
    }

    Ok(())
}
