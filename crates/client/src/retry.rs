// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed-delay retry around an [`HttpTransport`].

use std::time::Duration;

use crate::config::ClientConfig;
use crate::log::ConsoleLog;
use crate::transport::{HttpRequest, HttpTransport, TransportError, TransportResult};

/// Performs a request, retrying failed attempts after a constant delay.
///
/// An attempt fails when the transport errors or the response status is not
/// 2xx. Attempts run strictly one after another; there is no cancellation and
/// no per-attempt deadline beyond the transport's own.
pub struct RetryingTransport<T: HttpTransport> {
    transport: T,
    retries: u32,
    delay: Duration,
    log: ConsoleLog,
}

impl<T: HttpTransport> RetryingTransport<T> {
    pub fn new(transport: T, retries: u32, delay: Duration, log: ConsoleLog) -> Self {
        RetryingTransport {
            transport,
            retries,
            delay,
            log,
        }
    }

    /// Uses the retry bound, delay and verbosity from `config`.
    pub fn from_config(transport: T, config: &ClientConfig) -> Self {
        Self::new(
            transport,
            config.retries(),
            config.delay(),
            ConsoleLog::new(config.verbose()),
        )
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn retries(&self) -> u32 {
        self.retries
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Sends `request` with the configured retry bound and delay.
    pub async fn send(&self, request: &HttpRequest) -> TransportResult<String> {
        self.attempt(request, self.retries, self.delay).await
    }

    /// Sends `request`, allowing up to `retries` additional attempts.
    ///
    /// Returns the body of the first successful response, or the error of the
    /// last attempt once the retries are used up.
    pub async fn attempt(
        &self,
        request: &HttpRequest,
        retries: u32,
        delay: Duration,
    ) -> TransportResult<String> {
        let mut remaining = retries;

        loop {
            match self.attempt_once(request).await {
                Ok(body) => return Ok(body),
                Err(error) if remaining > 0 => {
                    let retry = retries - remaining + 1;
                    self.log
                        .info(format_args!("Retrying... ({retry}) after: {error}"));
                    tokio::time::sleep(delay).await;
                    remaining -= 1;
                }
                Err(error) => {
                    self.log.error(format_args!("Fetch failed: {error}"));
                    return Err(error);
                }
            }
        }
    }

    async fn attempt_once(&self, request: &HttpRequest) -> TransportResult<String> {
        let response = self.transport.execute(request.clone()).await?;
        if !response.is_success() {
            return Err(TransportError::Status {
                status: response.status,
                body: response.body,
            });
        }
        Ok(response.body)
    }
}
