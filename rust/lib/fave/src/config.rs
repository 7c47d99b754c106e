//! Client configuration.
//!
//! Read from an optional TOML file; every field has a default, so a
//! missing file or a partial file is fine.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Production API gateway.
pub const DEFAULT_BASE_URL: &str = "https://t8vrh2rit7.execute-api.ap-northeast-1.amazonaws.com/test";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API root, e.g. `https://example.com/test`.
    pub base_url: String,

    /// UI locale: `ja` or `en`.
    pub locale: String,

    /// Per-request timeout. A timeout counts as unreachable.
    pub request_timeout_secs: u64,

    /// Timeline collection path; the username is appended as a segment.
    pub timeline_path: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            locale: "ja".to_string(),
            request_timeout_secs: 10,
            timeline_path: "/api/timeline".to_string(),
        }
    }
}

impl ClientConfig {
    /// Load config from disk, or return the default if the file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// `base_url` without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
