// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Relay configuration.
//!
//! Read from a TOML file:
//!
//! ```toml
//! language = "en-US"
//! api_path = "/syncpusher"
//! bind = "0.0.0.0:80"
//!
//! [pusher]
//! app_id = "12345"
//! key = "..."
//! secret = "..."
//! cluster = "ap1"
//! use_tls = true
//! ```

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use syncpush_core::DEFAULT_API_PATH;

use crate::messages::Locale;

/// Errors loading the relay configuration.
#[derive(Debug, thiserror::Error)]
pub enum RelayConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("missing required config field: {0}")]
    MissingField(&'static str),

    #[error("api_path must start with '/': {0}")]
    InvalidPath(String),
}

pub type RelayConfigResult<T> = std::result::Result<T, RelayConfigError>;

/// Top-level relay configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RelayConfig {
    /// Language tag for operator logs and response bodies.
    #[serde(default = "default_language")]
    pub language: String,
    /// URL path of the relay endpoint.
    #[serde(default = "default_api_path")]
    pub api_path: String,
    /// Address to listen on.
    #[serde(default = "default_bind")]
    pub bind: SocketAddr,
    pub pusher: PusherConfig,
}

/// Pusher Channels credentials and endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PusherConfig {
    pub app_id: String,
    pub key: String,
    pub secret: String,
    #[serde(default = "default_cluster")]
    pub cluster: String,
    #[serde(default = "default_use_tls")]
    pub use_tls: bool,
    /// Overrides the cluster-derived API host.
    #[serde(default)]
    pub host: Option<String>,
}

fn default_language() -> String {
    Locale::EnUs.as_str().to_string()
}

fn default_api_path() -> String {
    DEFAULT_API_PATH.to_string()
}

fn default_bind() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 80))
}

fn default_cluster() -> String {
    "ap1".to_string()
}

fn default_use_tls() -> bool {
    true
}

impl RelayConfig {
    /// Loads and validates the config file at `path`.
    pub fn load(path: &Path) -> RelayConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| RelayConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parses and validates TOML config text.
    pub fn parse(content: &str) -> RelayConfigResult<Self> {
        let config: RelayConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> RelayConfigResult<()> {
        if !self.api_path.starts_with('/') {
            return Err(RelayConfigError::InvalidPath(self.api_path.clone()));
        }
        let required = [
            ("pusher.app_id", &self.pusher.app_id),
            ("pusher.key", &self.pusher.key),
            ("pusher.secret", &self.pusher.secret),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(RelayConfigError::MissingField(name));
            }
        }
        Ok(())
    }

    pub fn locale(&self) -> Locale {
        Locale::resolve(&self.language)
    }
}

impl PusherConfig {
    /// API host: the explicit override or `api-<cluster>.pusher.com`.
    pub fn api_host(&self) -> String {
        match &self.host {
            Some(host) => host.clone(),
            None => format!("api-{}.pusher.com", self.cluster),
        }
    }

    /// Scheme and host of the REST API.
    pub fn base_url(&self) -> String {
        let scheme = if self.use_tls { "https" } else { "http" };
        format!("{scheme}://{}", self.api_host())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
