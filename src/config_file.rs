// ABOUTME: Optional TOML configuration file loading for the upstream API settings
// ABOUTME: Reads base URL, credentials and timeout from <config dir>/artifactregistry-mcp/config.toml
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 dravr.ai

//! File-based configuration, enabled with the `config-file` feature.
//!
//! Example:
//!
//! ```toml
//! base_url = "https://artifactregistry.googleapis.com"
//! api_key = "AIza..."
//! timeout_secs = 60
//! ```
//!
//! File values sit underneath environment variables and CLI flags.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::config::ApiConfig;
use crate::types::ToolError;

/// Directory name under the platform config dir
const CONFIG_DIR_NAME: &str = "artifactregistry-mcp";

/// File name of the configuration file
const CONFIG_FILE_NAME: &str = "config.toml";

/// On-disk shape of the configuration file; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Upstream base URL
    pub base_url: Option<String>,
    /// API key
    pub api_key: Option<String>,
    /// OAuth bearer token
    pub bearer_token: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,
}

impl FileConfig {
    /// Parse configuration from TOML text
    pub fn parse(text: &str) -> Result<Self, ToolError> {
        toml::from_str(text).map_err(|e| ToolError::config(format!("Invalid config file: {e}")))
    }

    /// Read and parse the file at `path`
    pub fn load(path: &Path) -> Result<Self, ToolError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            ToolError::config(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::parse(&text)
    }

    /// Read the file at the default location, if one exists
    pub fn load_default() -> Result<Option<Self>, ToolError> {
        match default_path() {
            Some(path) if path.is_file() => Self::load(&path).map(Some),
            _ => Ok(None),
        }
    }

    /// Apply the values present in the file on top of `config`
    #[must_use]
    pub fn apply(self, mut config: ApiConfig) -> ApiConfig {
        if let Some(url) = self.base_url {
            config.base_url = url;
        }
        if let Some(key) = self.api_key {
            config = config.with_api_key(key);
        }
        if let Some(token) = self.bearer_token {
            config = config.with_bearer_token(token);
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout = Duration::from_secs(secs);
        }
        config
    }
}

/// Default config file location (`<config dir>/artifactregistry-mcp/config.toml`)
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_partial_file() {
        let file = FileConfig::parse("api_key = \"k\"\ntimeout_secs = 5\n").expect("parse");
        let config = file.apply(ApiConfig::default());
        assert_eq!(config.api_key.as_deref(), Some("k"));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(config.bearer_token.is_none());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = FileConfig::parse("token = \"x\"\n").unwrap_err();
        assert!(err.message.contains("Invalid config file"));
    }

    #[test]
    fn load_reads_from_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "base_url = \"http://127.0.0.1:9\"\n").expect("write");
        let config = FileConfig::load(&path)
            .expect("load")
            .apply(ApiConfig::default());
        assert_eq!(config.base_url, "http://127.0.0.1:9");
    }
}
