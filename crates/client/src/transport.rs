// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Transport abstraction for relay HTTP requests.
//!
//! Provides a trait-based transport layer that enables:
//! - Real HTTP requests through reqwest for production
//! - Mock transports for unit testing

use std::future::Future;
use std::pin::Pin;

use syncpush_core::HttpMethod;
use url::Url;

/// Error type for transport operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransportError {
    /// The request never produced a response (DNS, connect, reset...).
    #[error("request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status.
    #[error("HTTP error! Status: {status}")]
    Status { status: u16, body: String },
}

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// A fully shaped outbound request.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Looks up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Status and body text of a completed request.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        HttpResponse {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport trait for a single HTTP exchange.
///
/// Implementations report any response they receive, successful or not;
/// only failures to obtain a response are errors.
pub trait HttpTransport: Send + Sync {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = TransportResult<HttpResponse>> + Send + '_>>;
}

/// HTTP transport implementation using reqwest.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        ReqwestTransport {
            client: reqwest::Client::new(),
        }
    }

    /// Uses a preconfigured client (timeouts, proxies, TLS roots).
    pub fn with_client(client: reqwest::Client) -> Self {
        ReqwestTransport { client }
    }
}

impl HttpTransport for ReqwestTransport {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = TransportResult<HttpResponse>> + Send + '_>> {
        Box::pin(async move {
            let method = match request.method {
                HttpMethod::Get => reqwest::Method::GET,
                HttpMethod::Post => reqwest::Method::POST,
            };

            let mut builder = self.client.request(method, request.url);
            for (name, value) in request.headers {
                builder = builder.header(name, value);
            }
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let response = builder
                .send()
                .await
                .map_err(|e| TransportError::Request(e.to_string()))?;
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .map_err(|e| TransportError::Request(e.to_string()))?;

            Ok(HttpResponse { status, body })
        })
    }
}
