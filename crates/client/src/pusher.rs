// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sync pusher: push client and channel observer for one channel.

use futures_util::{Stream, StreamExt};
use serde_json::Value;

use crate::bootstrap::Ready;
use crate::observer::{ChannelObserver, LogSyncHandler, ObserverAction, ProviderEvent, SyncHandler};
use crate::push::{PushClient, PushResult};
use crate::transport::{HttpTransport, ReqwestTransport};

/// Pushes local state and applies remote state for a single channel.
///
/// Both channel variants share the same push pipeline; only the observer
/// differs.
pub struct SyncPusher<T: HttpTransport = ReqwestTransport, H: SyncHandler = LogSyncHandler> {
    client: PushClient<T>,
    observer: ChannelObserver,
    handler: H,
}

impl<T: HttpTransport, H: SyncHandler> SyncPusher<T, H> {
    /// Sets up the channel observer. Requires the provider library to be loaded.
    pub fn new(_ready: Ready, client: PushClient<T>, handler: H) -> Self {
        let observer = ChannelObserver::for_config(client.config());
        SyncPusher {
            client,
            observer,
            handler,
        }
    }

    pub fn client(&self) -> &PushClient<T> {
        &self.client
    }

    pub fn observer(&self) -> &ChannelObserver {
        &self.observer
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Pushes `data` to the relay.
    pub async fn push(&self, data: &Value) -> PushResult<String> {
        self.client.push(data).await
    }

    /// Routes one provider event and carries out the observer's follow-up.
    ///
    /// Returns an error only when priming the channel after a cache miss fails.
    pub async fn dispatch(&mut self, event: ProviderEvent) -> PushResult<()> {
        match self.observer.observe(event) {
            Some(ObserverAction::Sync(data)) => {
                self.handler.sync(&data);
                Ok(())
            }
            Some(ObserverAction::Prime) => {
                self.client.push(&Value::Array(Vec::new())).await?;
                Ok(())
            }
            None => Ok(()),
        }
    }

    /// Dispatches events until the provider stream ends.
    pub async fn run<S>(&mut self, mut events: S)
    where
        S: Stream<Item = ProviderEvent> + Unpin,
    {
        while let Some(event) = events.next().await {
            if let Err(e) = self.dispatch(event).await {
                tracing::warn!(channel = %self.observer.channel(), error = %e, "cache priming failed");
            }
        }
    }
}
