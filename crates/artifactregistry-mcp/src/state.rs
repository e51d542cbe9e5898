// ABOUTME: Shared server state holding the tool adapter and in-flight call cancellation tokens
// ABOUTME: Calls register a token under their session and JSON-RPC id so cancellation notices can reach them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 dravr.ai

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use artifactregistry::ToolAdapter;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

/// Type alias for the shared state handle used across the server
pub type SharedState = Arc<ServerState>;

/// A registered call: its generation and cancellation token
type InFlightEntry = (u64, CancellationToken);

/// Session scope plus rendered request id
type CallKey = (String, String);

/// Scope used by transports without sessions (stdio, HTTP without a session header)
pub const DEFAULT_SESSION: &str = "";

/// Central server state
///
/// The adapter is read-only after startup. The only mutable part is the
/// table of in-flight calls, keyed by session and rendered JSON-RPC id so
/// that two sessions reusing an id cannot cancel each other.
pub struct ServerState {
    adapter: ToolAdapter,
    in_flight: Mutex<HashMap<CallKey, InFlightEntry>>,
    next_generation: AtomicU64,
}

impl ServerState {
    /// Create state around a configured adapter
    pub fn new(adapter: ToolAdapter) -> Self {
        Self {
            adapter,
            in_flight: Mutex::new(HashMap::new()),
            next_generation: AtomicU64::new(0),
        }
    }

    /// Adapter shared by every endpoint tool
    pub const fn adapter(&self) -> &ToolAdapter {
        &self.adapter
    }

    /// Register a call and return a guard that unregisters it when dropped
    pub fn begin_call(self: &Arc<Self>, session: &str, id: &Value) -> InFlightCall {
        let key = call_key(session, id);
        let token = CancellationToken::new();
        let generation = self.next_generation.fetch_add(1, Ordering::Relaxed);
        self.table().insert(key.clone(), (generation, token.clone()));
        InFlightCall {
            state: Arc::clone(self),
            key,
            generation,
            token,
        }
    }

    /// Cancel the session's in-flight call with this id; returns whether one was found
    pub fn cancel(&self, session: &str, id: &Value) -> bool {
        self.table().get(&call_key(session, id)).is_some_and(|(_, token)| {
            token.cancel();
            true
        })
    }

    /// Number of calls currently registered
    pub fn in_flight_count(&self) -> usize {
        self.table().len()
    }

    fn table(&self) -> MutexGuard<'_, HashMap<CallKey, InFlightEntry>> {
        // A panic while holding the lock leaves the map itself consistent
        self.in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Rendered id so that `1` and `"1"` stay distinct keys
fn call_key(session: &str, id: &Value) -> CallKey {
    (session.to_owned(), id.to_string())
}

/// Registration of one running `tools/call`
///
/// Dropping it, on completion or when the transport abandons the future,
/// removes the entry from the table.
pub struct InFlightCall {
    state: Arc<ServerState>,
    key: CallKey,
    generation: u64,
    token: CancellationToken,
}

impl InFlightCall {
    /// Token the call should race against
    pub const fn token(&self) -> &CancellationToken {
        &self.token
    }
}

impl Drop for InFlightCall {
    fn drop(&mut self) {
        let mut table = self.state.table();
        // A reused id may already point at a newer call
        if table
            .get(&self.key)
            .is_some_and(|(generation, _)| *generation == self.generation)
        {
            table.remove(&self.key);
        }
    }
}
