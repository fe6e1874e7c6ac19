// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Client configuration.
//!
//! A [`ClientConfig`] is assembled once through [`ClientConfigBuilder`]:
//! user-supplied overrides are merged onto defaults and the required fields
//! (`key`, `api`) are checked. The result is immutable.

use std::time::Duration;

use syncpush_core::{HttpMethod, SYNC_EVENT};
use url::Url;

/// Default location of the provider client library.
pub const DEFAULT_LIBRARY_URL: &str = "https://js.pusher.com/8.2.0/pusher.min.js";
/// Default provider cluster.
pub const DEFAULT_CLUSTER: &str = "ap1";
/// Default logical channel name.
pub const DEFAULT_CHANNEL: &str = "sync";
/// Prefix marking a cached presence channel.
pub const PRESENCE_CHANNEL_PREFIX: &str = "presence-cache-";
/// Default number of retries after the first attempt.
pub const DEFAULT_RETRIES: u32 = 3;
/// Default delay between attempts.
pub const DEFAULT_DELAY_MS: u64 = 1000;

/// Errors raised while building a [`ClientConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("configuration error: '{0}' is required")]
    MissingField(&'static str),

    #[error("configuration error: invalid URL for '{field}': {reason}")]
    InvalidUrl { field: &'static str, reason: String },
}

/// Which kind of channel the client subscribes to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ChannelKind {
    /// Presence channel with member tracking; always uses the `sync` event.
    #[default]
    Presence,
    /// Ordinary channel reacting to a single named event.
    Plain { event: String },
}

/// Immutable per-instance client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    key: String,
    api: Url,
    library_url: Url,
    cluster: String,
    channel_name: String,
    kind: ChannelKind,
    method: HttpMethod,
    retries: u32,
    delay: Duration,
    verbose: bool,
}

impl ClientConfig {
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Provider application key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Relay endpoint URL.
    pub fn api(&self) -> &Url {
        &self.api
    }

    pub fn library_url(&self) -> &Url {
        &self.library_url
    }

    pub fn cluster(&self) -> &str {
        &self.cluster
    }

    /// Fully resolved channel name (prefixed for presence channels).
    pub fn channel_name(&self) -> &str {
        &self.channel_name
    }

    pub fn kind(&self) -> &ChannelKind {
        &self.kind
    }

    /// Event name carried by pushes and matched on receipt.
    pub fn event_name(&self) -> &str {
        match &self.kind {
            ChannelKind::Presence => SYNC_EVENT,
            ChannelKind::Plain { event } => event,
        }
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn retries(&self) -> u32 {
        self.retries
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

/// Builder merging overrides onto the default configuration.
#[derive(Debug, Clone, Default)]
pub struct ClientConfigBuilder {
    key: Option<String>,
    api: Option<String>,
    library_url: Option<String>,
    cluster: Option<String>,
    channel: Option<String>,
    kind: ChannelKind,
    method: HttpMethod,
    retries: Option<u32>,
    delay_ms: Option<u64>,
    verbose: bool,
}

impl ClientConfigBuilder {
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn api(mut self, api: impl Into<String>) -> Self {
        self.api = Some(api.into());
        self
    }

    pub fn library_url(mut self, url: impl Into<String>) -> Self {
        self.library_url = Some(url.into());
        self
    }

    pub fn cluster(mut self, cluster: impl Into<String>) -> Self {
        self.cluster = Some(cluster.into());
        self
    }

    /// Logical channel name, before any presence prefix is applied.
    pub fn channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    /// Switches to a plain channel listening for `event`.
    pub fn plain(mut self, event: impl Into<String>) -> Self {
        self.kind = ChannelKind::Plain {
            event: event.into(),
        };
        self
    }

    pub fn kind(mut self, kind: ChannelKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    /// Retries after the first failed attempt. Zero means a single attempt.
    pub fn retries(mut self, retries: u32) -> Self {
        self.retries = Some(retries);
        self
    }

    pub fn delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = Some(delay_ms);
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Validates required fields and produces the final configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] if `key` or `api` is absent or
    /// empty, and [`ConfigError::InvalidUrl`] if a URL does not parse.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let key = non_empty(self.key).ok_or(ConfigError::MissingField("key"))?;
        let api = non_empty(self.api).ok_or(ConfigError::MissingField("api"))?;
        let api = parse_url("api", &api)?;
        let library_url = parse_url(
            "pusherjs",
            self.library_url.as_deref().unwrap_or(DEFAULT_LIBRARY_URL),
        )?;

        let channel = non_empty(self.channel).unwrap_or_else(|| DEFAULT_CHANNEL.to_string());
        let channel_name = match self.kind {
            ChannelKind::Presence => format!("{PRESENCE_CHANNEL_PREFIX}{channel}"),
            ChannelKind::Plain { .. } => channel,
        };

        let kind = match self.kind {
            ChannelKind::Plain { event } if event.is_empty() => ChannelKind::Plain {
                event: SYNC_EVENT.to_string(),
            },
            other => other,
        };

        Ok(ClientConfig {
            key,
            api,
            library_url,
            cluster: non_empty(self.cluster).unwrap_or_else(|| DEFAULT_CLUSTER.to_string()),
            channel_name,
            kind,
            method: self.method,
            retries: self.retries.unwrap_or(DEFAULT_RETRIES),
            delay: Duration::from_millis(self.delay_ms.unwrap_or(DEFAULT_DELAY_MS)),
            verbose: self.verbose,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn parse_url(field: &'static str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|e| ConfigError::InvalidUrl {
        field,
        reason: e.to_string(),
    })
}
