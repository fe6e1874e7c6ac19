// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Provider trigger API.
//!
//! [`PusherTrigger`] publishes events through the Pusher Channels REST API.
//! Every request is signed:
//!
//! ```text
//! POST /apps/{app_id}/events?auth_key=..&auth_timestamp=..&auth_version=1.0
//!                           &body_md5=..&auth_signature=..
//! auth_signature = hex(HMAC-SHA256(secret, "POST\n{path}\n{sorted query}"))
//! ```

use std::future::Future;
use std::pin::Pin;

use hmac::{Hmac, Mac};
use md5::{Digest, Md5};
use serde_json::{json, Value};
use sha2::Sha256;
use syncpush_core::payload_text;

use crate::config::PusherConfig;

const AUTH_VERSION: &str = "1.0";

/// Errors from the provider trigger API.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("provider returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid signing key: {0}")]
    Signing(String),

    #[error(transparent)]
    Encode(#[from] serde_json::Error),
}

pub type ProviderResult<T> = std::result::Result<T, ProviderError>;

/// Publishes one event on one channel.
pub trait Trigger: Send + Sync {
    fn trigger<'a>(
        &'a self,
        channel: &'a str,
        event: &'a str,
        data: &'a Value,
    ) -> Pin<Box<dyn Future<Output = ProviderResult<()>> + Send + 'a>>;
}

/// Pusher Channels REST client.
#[derive(Debug, Clone)]
pub struct PusherTrigger {
    client: reqwest::Client,
    app_id: String,
    key: String,
    secret: String,
    base_url: String,
}

impl PusherTrigger {
    pub fn new(config: &PusherConfig) -> Self {
        PusherTrigger {
            client: reqwest::Client::new(),
            app_id: config.app_id.clone(),
            key: config.key.clone(),
            secret: config.secret.clone(),
            base_url: config.base_url(),
        }
    }

    /// Path of the trigger endpoint for this app.
    pub fn events_path(&self) -> String {
        format!("/apps/{}/events", self.app_id)
    }

    /// Serializes the trigger body. Non-string data is JSON-encoded.
    pub fn event_body(channel: &str, event: &str, data: &Value) -> ProviderResult<String> {
        let body = json!({
            "name": event,
            "channels": [channel],
            "data": payload_text(data)?,
        });
        Ok(serde_json::to_string(&body)?)
    }

    /// Builds the signed query string for a POST of `body` to `path`.
    pub fn signed_query(&self, path: &str, body: &str, timestamp: i64) -> ProviderResult<String> {
        let mut params = [
            ("auth_key", self.key.clone()),
            ("auth_timestamp", timestamp.to_string()),
            ("auth_version", AUTH_VERSION.to_string()),
            ("body_md5", body_md5(body)),
        ];
        params.sort_by(|a, b| a.0.cmp(b.0));
        let query = params
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");

        let signature = sign(&self.secret, "POST", path, &query)?;
        Ok(format!("{query}&auth_signature={signature}"))
    }
}

impl Trigger for PusherTrigger {
    fn trigger<'a>(
        &'a self,
        channel: &'a str,
        event: &'a str,
        data: &'a Value,
    ) -> Pin<Box<dyn Future<Output = ProviderResult<()>> + Send + 'a>> {
        Box::pin(async move {
            let path = self.events_path();
            let body = Self::event_body(channel, event, data)?;
            let query = self.signed_query(&path, &body, chrono::Utc::now().timestamp())?;
            let url = format!("{}{path}?{query}", self.base_url);

            let response = self
                .client
                .post(url)
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body)
                .send()
                .await
                .map_err(|e| ProviderError::Request(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(ProviderError::Status {
                    status: status.as_u16(),
                    body,
                });
            }
            Ok(())
        })
    }
}

/// Hex MD5 of the request body.
pub fn body_md5(body: &str) -> String {
    hex::encode(Md5::digest(body.as_bytes()))
}

/// Hex HMAC-SHA256 over `METHOD\npath\nquery`.
pub fn sign(secret: &str, method: &str, path: &str, query: &str) -> ProviderResult<String> {
    let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes())
        .map_err(|e| ProviderError::Signing(e.to_string()))?;
    mac.update(format!("{method}\n{path}\n{query}").as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
