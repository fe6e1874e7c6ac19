// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! syncpush-client: Push pipeline and channel observer for syncpush.
//!
//! Turns local payloads into relay requests and reacts to events delivered by
//! the hosted pub/sub provider.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────────┐     ┌─────────────┐
//! │ PushClient  │────►│ RetryingTransport│────►│    Relay    │
//! │  (push)     │     │ (HttpTransport)  │     │   Server    │
//! └─────────────┘     └──────────────────┘     └─────────────┘
//!        ▲
//!        │ cache miss
//! ┌─────────────────┐     ┌─────────────┐
//! │ ChannelObserver │────►│ SyncHandler │
//! │ presence│plain  │     │   (sync)    │
//! └─────────────────┘     └─────────────┘
//! ```
//!
//! # Features
//!
//! - GET (query string) or POST (JSON body) relay requests
//! - Fixed-delay retry with a bounded attempt count
//! - Presence channels with in-memory roster tracking
//! - One-time provider library bootstrap guarded by a [`Ready`] token
//! - Injectable transport trait for testing

pub mod bootstrap;
pub mod config;
pub mod log;
pub mod observer;
pub mod push;
pub mod pusher;
pub mod retry;
pub mod transport;

pub use bootstrap::{BootstrapError, HttpLibraryLoader, LibraryBootstrap, ProviderLibrary, Ready};
pub use config::{ChannelKind, ClientConfig, ClientConfigBuilder, ConfigError};
pub use log::ConsoleLog;
pub use observer::{
    ChannelEvent, ChannelMember, ChannelObserver, ConnectionEvent, ConnectionState,
    LogSyncHandler, ObserverAction, PresenceRoster, ProviderEvent, Roster, SubscriptionError,
    SyncHandler,
};
pub use push::{PushClient, PushError, PushResult};
pub use pusher::SyncPusher;
pub use retry::RetryingTransport;
pub use transport::{
    HttpRequest, HttpResponse, HttpTransport, ReqwestTransport, TransportError, TransportResult,
};

#[cfg(test)]
mod test_helpers;


#[cfg(test)]
mod config_tests;
