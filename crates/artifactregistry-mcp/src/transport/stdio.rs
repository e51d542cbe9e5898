// ABOUTME: Stdio transport reading newline-delimited JSON-RPC from stdin and writing to stdout
// ABOUTME: Runs requests concurrently and serializes their responses through one writer task
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 dravr.ai

use std::sync::Arc;

use artifactregistry::ToolError;
use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, error};

use crate::protocol::{JsonRpcRequest, JsonRpcResponse, PARSE_ERROR};
use crate::server::McpServer;
use crate::transport::McpTransport;

/// MCP transport over stdin/stdout using newline-delimited JSON-RPC
///
/// Each line on stdin is one JSON-RPC message. Responses are written as
/// single lines to stdout, in completion order. Logs go to stderr.
pub struct StdioTransport;

#[async_trait]
impl McpTransport for StdioTransport {
    async fn serve(self, server: Arc<McpServer>) -> Result<(), ToolError> {
        serve_lines(
            server,
            BufReader::new(tokio::io::stdin()),
            tokio::io::stdout(),
        )
        .await
    }
}

/// Serve newline-delimited JSON-RPC from `reader`, writing responses to `writer`
///
/// Requests are spawned onto their own tasks so a slow call does not block
/// later ones and a cancellation notice can reach it. Notifications are
/// handled inline, in arrival order. Returns once the reader is exhausted
/// and every outstanding response has been written.
pub async fn serve_lines<R, W>(
    server: Arc<McpServer>,
    mut reader: R,
    writer: W,
) -> Result<(), ToolError>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel::<JsonRpcResponse>();
    let writer_task = tokio::spawn(write_responses(rx, writer));

    debug!("Stdio transport ready, waiting for JSON-RPC messages");

    let mut buf = Vec::new();
    let read_result = loop {
        if tx.is_closed() {
            break Ok(());
        }
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => break Ok(()),
            Ok(_) => {}
            Err(e) => {
                error!(error = %e, "Failed to read from input");
                break Err(ToolError::internal(format!("stdin read failed: {e}")));
            }
        }

        let Some(request) = parse_line(&buf, &tx) else {
            continue;
        };

        debug!(method = %request.method, "Handling MCP request");

        if request.id.is_none() {
            server.handle_request(request).await;
            continue;
        }

        let server = Arc::clone(&server);
        let tx = tx.clone();
        tokio::spawn(async move {
            if let Some(response) = server.handle_request(request).await {
                if tx.send(response).is_err() {
                    debug!("Response writer closed, dropping response");
                }
            }
        });
    };

    debug!("Input closed, draining outstanding responses");
    drop(tx);
    let written = writer_task
        .await
        .map_err(|e| ToolError::internal(format!("Response writer task failed: {e}")))?;
    read_result.and(written)
}

/// Decode one raw line; undecodable lines get a parse error reply
///
/// Blank lines and lines that fail to decode yield `None`.
fn parse_line(raw: &[u8], tx: &mpsc::UnboundedSender<JsonRpcResponse>) -> Option<JsonRpcRequest> {
    let parsed = std::str::from_utf8(raw)
        .map_err(|e| format!("invalid UTF-8: {e}"))
        .and_then(|line| {
            let line = line.trim();
            if line.is_empty() {
                return Ok(None);
            }
            serde_json::from_str::<JsonRpcRequest>(line)
                .map(Some)
                .map_err(|e| e.to_string())
        });

    match parsed {
        Ok(request) => request,
        Err(reason) => {
            error!(error = %reason, "Failed to parse JSON-RPC request");
            let resp = JsonRpcResponse::error(None, PARSE_ERROR, format!("Parse error: {reason}"));
            if tx.send(resp).is_err() {
                debug!("Response writer closed, dropping parse error");
            }
            None
        }
    }
}

/// Single writer: one serialized line per response
async fn write_responses<W>(
    mut rx: mpsc::UnboundedReceiver<JsonRpcResponse>,
    mut writer: W,
) -> Result<(), ToolError>
where
    W: AsyncWrite + Unpin,
{
    while let Some(response) = rx.recv().await {
        write_response(&mut writer, &response).await?;
    }
    Ok(())
}

/// Serialize and write a JSON-RPC response as a single line
async fn write_response<W>(writer: &mut W, response: &JsonRpcResponse) -> Result<(), ToolError>
where
    W: AsyncWrite + Unpin,
{
    let mut json = serde_json::to_string(response)
        .map_err(|e| ToolError::internal(format!("JSON serialization failed: {e}")))?;
    json.push('\n');

    writer
        .write_all(json.as_bytes())
        .await
        .map_err(|e| ToolError::internal(format!("stdout write failed: {e}")))?;

    writer
        .flush()
        .await
        .map_err(|e| ToolError::internal(format!("stdout flush failed: {e}")))?;

    Ok(())
}
