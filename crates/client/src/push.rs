// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Push client for sending payloads to the relay.
//!
//! Shapes a (channel, event, payload) triple into a relay request:
//! - GET: fields appended to the API URL as query parameters
//! - POST: fields sent as a JSON body
//!
//! The payload is not validated here; the relay decides what it accepts.

use serde_json::Value;
use syncpush_core::{payload_text, HttpMethod, RelayRequest};

use crate::config::ClientConfig;
use crate::log::ConsoleLog;
use crate::retry::RetryingTransport;
use crate::transport::{HttpRequest, HttpTransport, ReqwestTransport, TransportError};

/// Error type for push operations.
#[derive(Debug, thiserror::Error)]
pub enum PushError {
    /// All attempts failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The payload could not be serialized.
    #[error("failed to encode payload: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Result type for push operations.
pub type PushResult<T> = Result<T, PushError>;

/// Sends payloads to the relay endpoint with retry.
pub struct PushClient<T: HttpTransport = ReqwestTransport> {
    config: ClientConfig,
    transport: RetryingTransport<T>,
    log: ConsoleLog,
}

impl PushClient<ReqwestTransport> {
    /// Create a push client with the default reqwest transport.
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, ReqwestTransport::new())
    }
}

impl<T: HttpTransport> PushClient<T> {
    /// Create a push client with a custom transport (for testing).
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        let transport = RetryingTransport::from_config(transport, &config);
        let log = ConsoleLog::new(config.verbose());
        PushClient {
            config,
            transport,
            log,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &RetryingTransport<T> {
        &self.transport
    }

    /// Pushes `data` on the configured channel with the configured event.
    ///
    /// Resolves to the relay's response text.
    pub async fn push(&self, data: &Value) -> PushResult<String> {
        self.push_event(self.config.event_name(), data).await
    }

    /// Pushes `data` with an explicit event name.
    pub async fn push_event(&self, event: &str, data: &Value) -> PushResult<String> {
        let request = self.build_request(event, data)?;

        match self.transport.send(&request).await {
            Ok(result) => {
                self.log
                    .info(format_args!("Data pushed successfully: {result}"));
                Ok(result)
            }
            Err(error) => {
                self.log.error(format_args!("Push failed: {error}"));
                Err(error.into())
            }
        }
    }

    /// Shapes the relay request according to the configured method.
    pub fn build_request(&self, event: &str, data: &Value) -> PushResult<HttpRequest> {
        let relay = RelayRequest::new(self.config.channel_name(), event, data.clone());
        let mut url = self.config.api().clone();

        match self.config.method() {
            HttpMethod::Get => {
                let data = payload_text(&relay.data)?;
                url.query_pairs_mut()
                    .append_pair("channel", &relay.channel)
                    .append_pair("event", &relay.event)
                    .append_pair("data", &data);

                Ok(HttpRequest {
                    method: HttpMethod::Get,
                    url,
                    headers: Vec::new(),
                    body: None,
                })
            }
            HttpMethod::Post => Ok(HttpRequest {
                method: HttpMethod::Post,
                url,
                headers: vec![("Content-Type".to_string(), "application/json".to_string())],
                body: Some(relay.to_json()?),
            }),
        }
    }
}
