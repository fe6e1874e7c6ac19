// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Provider library bootstrap.
//!
//! The provider client library must be available before any channel is set
//! up. [`LibraryBootstrap::ensure_loaded`] checks for it, loads it from the
//! configured URL when missing, and hands out a [`Ready`] token that channel
//! setup requires. A successful load happens once per bootstrap.

use std::future::Future;
use std::pin::Pin;
use std::sync::OnceLock;

use tokio::sync::OnceCell;
use url::Url;

use crate::config::ClientConfig;
use crate::log::ConsoleLog;

/// The provider library could not be made available.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BootstrapError {
    #[error("Pusher script could not be loaded from {url}: {reason}")]
    LoadFailed { url: String, reason: String },
}

/// Proof that the provider library is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ready {
    _private: (),
}

/// A loadable provider client library.
pub trait ProviderLibrary: Send + Sync {
    /// Whether the library is already present.
    fn is_available(&self) -> bool;

    /// Loads the library from `url`.
    fn load<'a>(
        &'a self,
        url: &'a Url,
    ) -> Pin<Box<dyn Future<Output = Result<(), BootstrapError>> + Send + 'a>>;
}

/// Ensures a [`ProviderLibrary`] is loaded exactly once.
pub struct LibraryBootstrap<L: ProviderLibrary> {
    library: L,
    url: Url,
    ready: OnceCell<Ready>,
    log: ConsoleLog,
}

impl<L: ProviderLibrary> LibraryBootstrap<L> {
    pub fn new(library: L, url: Url, log: ConsoleLog) -> Self {
        LibraryBootstrap {
            library,
            url,
            ready: OnceCell::new(),
            log,
        }
    }

    pub fn from_config(library: L, config: &ClientConfig) -> Self {
        Self::new(
            library,
            config.library_url().clone(),
            ConsoleLog::new(config.verbose()),
        )
    }

    pub fn library(&self) -> &L {
        &self.library
    }

    /// Makes the library available, loading it on first use.
    ///
    /// Concurrent callers wait for the same load. Once a load succeeds every
    /// later call returns immediately.
    pub async fn ensure_loaded(&self) -> Result<Ready, BootstrapError> {
        self.ready
            .get_or_try_init(|| async {
                if self.library.is_available() {
                    return Ok(Ready { _private: () });
                }
                match self.library.load(&self.url).await {
                    Ok(()) => Ok(Ready { _private: () }),
                    Err(error) => {
                        self.log.error(format_args!("Failed to load Pusher script."));
                        Err(error)
                    }
                }
            })
            .await
            .copied()
    }
}

/// Fetches the provider library over HTTP and keeps its source.
#[derive(Debug, Default)]
pub struct HttpLibraryLoader {
    client: reqwest::Client,
    script: OnceLock<String>,
}

impl HttpLibraryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Source of the loaded library, if any.
    pub fn script(&self) -> Option<&str> {
        self.script.get().map(String::as_str)
    }
}

impl ProviderLibrary for HttpLibraryLoader {
    fn is_available(&self) -> bool {
        self.script.get().is_some()
    }

    fn load<'a>(
        &'a self,
        url: &'a Url,
    ) -> Pin<Box<dyn Future<Output = Result<(), BootstrapError>> + Send + 'a>> {
        Box::pin(async move {
            let failed = |reason: String| BootstrapError::LoadFailed {
                url: url.to_string(),
                reason,
            };

            let response = self
                .client
                .get(url.clone())
                .send()
                .await
                .map_err(|e| failed(e.to_string()))?;
            let status = response.status();
            if !status.is_success() {
                return Err(failed(format!("HTTP status {status}")));
            }
            let script = response.text().await.map_err(|e| failed(e.to_string()))?;

            let _ = self.script.set(script);
            Ok(())
        })
    }
}
