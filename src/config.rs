// ABOUTME: Read-only API configuration shared by every tool adapter
// ABOUTME: Base URL, credential material, request timeout, and environment key parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 dravr.ai

use std::fmt;
use std::num::ParseIntError;
use std::time::Duration;

/// Default upstream endpoint for the Artifact Registry REST API
pub const DEFAULT_BASE_URL: &str = "https://artifactregistry.googleapis.com";

/// Default timeout for a single upstream request (30 seconds)
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "ARTIFACTREGISTRY_BASE_URL";
/// Environment variable carrying the API key
pub const API_KEY_ENV: &str = "ARTIFACTREGISTRY_API_KEY";
/// Environment variable carrying the OAuth bearer token
pub const BEARER_TOKEN_ENV: &str = "ARTIFACTREGISTRY_BEARER_TOKEN";
/// Environment variable overriding the request timeout in seconds
pub const TIMEOUT_ENV: &str = "ARTIFACTREGISTRY_TIMEOUT_SECS";

/// Process-wide upstream configuration
///
/// Built once at startup and handed to the adapter behind an `Arc`.
/// Nothing mutates it afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the upstream API, without the `/v1` prefix
    pub base_url: String,
    /// API key appended as `key=` on every request
    pub api_key: Option<String>,
    /// Bearer token appended as `access_token=` and `oauth_token=`
    pub bearer_token: Option<String>,
    /// Maximum time to wait for one upstream round trip
    pub timeout: Duration,
    /// User agent sent with every request
    pub user_agent: String,
}

impl ApiConfig {
    /// Create a configuration targeting the given base URL with no credentials
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            bearer_token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: default_user_agent(),
        }
    }

    /// Build a configuration from `ARTIFACTREGISTRY_*` environment variables
    ///
    /// Unset or empty variables fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `ARTIFACTREGISTRY_TIMEOUT_SECS` is not a whole number.
    pub fn from_env() -> Result<Self, ParseIntError> {
        Self::default().with_env_overrides()
    }

    /// Layer `ARTIFACTREGISTRY_*` environment variables over this configuration
    ///
    /// # Errors
    ///
    /// Returns an error if `ARTIFACTREGISTRY_TIMEOUT_SECS` is not a whole number.
    pub fn with_env_overrides(self) -> Result<Self, ParseIntError> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Layer values from `lookup`, keyed by the `ARTIFACTREGISTRY_*` names
    ///
    /// Missing, empty and whitespace-only values leave the field untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the timeout value is not a whole number.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self, ParseIntError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).and_then(non_empty);
        if let Some(url) = get(BASE_URL_ENV) {
            self.base_url = url;
        }
        if let Some(key) = get(API_KEY_ENV) {
            self.api_key = Some(key);
        }
        if let Some(token) = get(BEARER_TOKEN_ENV) {
            self.bearer_token = Some(token);
        }
        if let Some(secs) = get(TIMEOUT_ENV) {
            self.timeout = parse_timeout(&secs)?;
        }
        Ok(self)
    }

    /// Set the base URL (empty strings keep the current one)
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        if let Some(url) = non_empty(base_url.into()) {
            self.base_url = url;
        }
        self
    }

    /// Set the API key (empty strings clear it)
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = non_empty(key.into());
        self
    }

    /// Set the bearer token (empty strings clear it)
    #[must_use]
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = non_empty(token.into());
        self
    }

    /// Set the per-request timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Base URL with any trailing slash removed
    pub fn trimmed_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

// Credentials stay out of logs and panic messages.
impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field(
                "bearer_token",
                &self.bearer_token.as_ref().map(|_| "<redacted>"),
            )
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// User agent identifying this crate and version
#[must_use]
pub fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Parse a timeout value from a string (in seconds)
///
/// # Errors
///
/// Returns an error if the string cannot be parsed as a `u64`.
pub fn parse_timeout(input: &str) -> Result<Duration, ParseIntError> {
    input.trim().parse::<u64>().map(Duration::from_secs)
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
