// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Channel observer for provider events.
//!
//! The provider's realtime client owns the connection and delivers two kinds
//! of events, modelled here as [`ProviderEvent`]:
//! - Connection transitions, which are only logged
//! - Channel events (subscription, presence membership, data)
//!
//! A [`ChannelObserver`] is one of two variants sharing the same surface:
//!
//! ```text
//! presence: subscription_succeeded, member_added, member_removed,
//!           subscription_error, cache_miss, "sync"
//! plain:    <configured event>
//! ```
//!
//! Observed connection state machine (driven by the provider, never by us):
//!
//! ```text
//! initialized → connecting → {connected, unavailable, failed}
//! connected → disconnected → connecting
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use syncpush_core::SYNC_EVENT;

use crate::config::{ChannelKind, ClientConfig};
use crate::log::ConsoleLog;

/// Connection state reported by the provider client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionState {
    Initialized,
    Connecting,
    Connected,
    Unavailable,
    Failed,
    Disconnected,
}

impl ConnectionState {
    pub fn as_str(self) -> &'static str {
        match self {
            ConnectionState::Initialized => "initialized",
            ConnectionState::Connecting => "connecting",
            ConnectionState::Connected => "connected",
            ConnectionState::Unavailable => "unavailable",
            ConnectionState::Failed => "failed",
            ConnectionState::Disconnected => "disconnected",
        }
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Connection-level notification from the provider client.
#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionEvent {
    Initialized,
    Connecting,
    Connected,
    Unavailable,
    Failed,
    Disconnected,
    Error(String),
    StateChange {
        previous: ConnectionState,
        current: ConnectionState,
    },
}

/// A subscriber on a presence channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelMember {
    pub id: String,
    #[serde(default)]
    pub info: Value,
}

impl ChannelMember {
    pub fn new(id: impl Into<String>, info: Value) -> Self {
        ChannelMember {
            id: id.into(),
            info,
        }
    }
}

/// Membership delivered when a presence subscription succeeds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    /// Every current member, including the local client.
    pub members: Vec<ChannelMember>,
    /// The local client's own membership.
    pub me: ChannelMember,
}

impl Roster {
    pub fn count(&self) -> usize {
        self.members.len()
    }
}

/// Subscription failure reported by the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionError {
    pub error: String,
    pub status: Option<u16>,
}

/// Channel-level notification from the provider client.
#[derive(Debug, Clone, PartialEq)]
pub enum ChannelEvent {
    SubscriptionSucceeded(Roster),
    MemberAdded(ChannelMember),
    MemberRemoved(ChannelMember),
    SubscriptionError(SubscriptionError),
    /// A cache channel holds no retained event yet.
    CacheMiss,
    /// A named data event.
    Message {
        event: String,
        data: Value,
    },
}

/// Any event delivered by the provider client.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderEvent {
    Connection(ConnectionEvent),
    Channel(ChannelEvent),
}

/// Follow-up the observer's owner must carry out.
#[derive(Debug, Clone, PartialEq)]
pub enum ObserverAction {
    /// Hand the payload to the [`SyncHandler`].
    Sync(Value),
    /// Push an empty payload so the channel has a baseline.
    Prime,
}

/// Receives synchronized state.
///
/// Override [`SyncHandler::sync`] to apply remote state locally; the default
/// only logs the payload.
pub trait SyncHandler: Send + Sync {
    fn sync(&self, data: &Value) {
        tracing::info!("Received sync data: {}", data);
    }
}

/// Handler that only logs received payloads.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSyncHandler;

impl SyncHandler for LogSyncHandler {}

/// In-memory membership of a presence channel.
#[derive(Debug, Clone, Default)]
pub struct PresenceRoster {
    members: BTreeMap<String, ChannelMember>,
    me: Option<ChannelMember>,
}

impl PresenceRoster {
    pub fn count(&self) -> usize {
        self.members.len()
    }

    pub fn me(&self) -> Option<&ChannelMember> {
        self.me.as_ref()
    }

    pub fn get(&self, id: &str) -> Option<&ChannelMember> {
        self.members.get(id)
    }

    pub fn members(&self) -> impl Iterator<Item = &ChannelMember> {
        self.members.values()
    }

    fn replace(&mut self, roster: Roster) {
        self.members = roster
            .members
            .into_iter()
            .map(|m| (m.id.clone(), m))
            .collect();
        self.me = Some(roster.me);
    }

    fn insert(&mut self, member: ChannelMember) {
        self.members.insert(member.id.clone(), member);
    }

    fn remove(&mut self, id: &str) {
        self.members.remove(id);
    }
}

/// Variant-specific observer state.
#[derive(Debug, Clone)]
enum ObserverKind {
    Presence(PresenceRoster),
    Plain { event: String },
}

/// Observes one channel and the connection carrying it.
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    channel: String,
    log: ConsoleLog,
    kind: ObserverKind,
}

impl ChannelObserver {
    /// Presence observer for `channel`, reacting to the `sync` event.
    pub fn presence(channel: impl Into<String>, log: ConsoleLog) -> Self {
        ChannelObserver {
            channel: channel.into(),
            log,
            kind: ObserverKind::Presence(PresenceRoster::default()),
        }
    }

    /// Plain observer for `channel`, reacting only to `event`.
    pub fn plain(channel: impl Into<String>, event: impl Into<String>, log: ConsoleLog) -> Self {
        ChannelObserver {
            channel: channel.into(),
            log,
            kind: ObserverKind::Plain {
                event: event.into(),
            },
        }
    }

    pub fn for_config(config: &ClientConfig) -> Self {
        let log = ConsoleLog::new(config.verbose());
        match config.kind() {
            ChannelKind::Presence => Self::presence(config.channel_name(), log),
            ChannelKind::Plain { event } => Self::plain(config.channel_name(), event, log),
        }
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// Event name that reaches the sync handler.
    pub fn event_name(&self) -> &str {
        match &self.kind {
            ObserverKind::Presence(_) => SYNC_EVENT,
            ObserverKind::Plain { event } => event,
        }
    }

    /// Membership, for presence observers.
    pub fn roster(&self) -> Option<&PresenceRoster> {
        match &self.kind {
            ObserverKind::Presence(roster) => Some(roster),
            ObserverKind::Plain { .. } => None,
        }
    }

    /// Routes any provider event.
    pub fn observe(&mut self, event: ProviderEvent) -> Option<ObserverAction> {
        match event {
            ProviderEvent::Connection(event) => {
                self.observe_connection(&event);
                None
            }
            ProviderEvent::Channel(event) => self.observe_channel(event),
        }
    }

    /// Logs a connection transition. Never changes observer state.
    pub fn observe_connection(&self, event: &ConnectionEvent) {
        match event {
            ConnectionEvent::Initialized => {
                self.log.info(format_args!("Pusher connection initialized."))
            }
            ConnectionEvent::Connecting => self.log.info(format_args!("Pusher connecting...")),
            ConnectionEvent::Connected => self.log.info(format_args!("Pusher connected.")),
            ConnectionEvent::Unavailable => self.log.info(format_args!("Pusher unavailable.")),
            ConnectionEvent::Failed => self.log.info(format_args!("Pusher failed.")),
            ConnectionEvent::Disconnected => self.log.info(format_args!("Pusher disconnected.")),
            ConnectionEvent::Error(message) => {
                self.log.error(format_args!("Pusher error: {message}"))
            }
            ConnectionEvent::StateChange { previous, current } => self
                .log
                .info(format_args!("Pusher state changed: {previous} -> {current}")),
        }
    }

    /// Handles a channel event, returning any follow-up for the owner.
    pub fn observe_channel(&mut self, event: ChannelEvent) -> Option<ObserverAction> {
        let log = self.log;
        match &mut self.kind {
            ObserverKind::Presence(roster) => observe_presence(&self.channel, log, roster, event),
            ObserverKind::Plain { event: name } => match event {
                ChannelEvent::Message { event, data } if event == *name => {
                    Some(ObserverAction::Sync(data))
                }
                _ => None,
            },
        }
    }
}

fn observe_presence(
    channel: &str,
    log: ConsoleLog,
    roster: &mut PresenceRoster,
    event: ChannelEvent,
) -> Option<ObserverAction> {
    match event {
        ChannelEvent::SubscriptionSucceeded(members) => {
            log.info(format_args!("Subscribed to channel: {channel}"));
            log.info(format_args!("{} member(s) in channel.", members.count()));
            for member in &members.members {
                log.info(format_args!("MemberId: {}", member.id));
                log.info(format_args!("MemberInfo: {}", member.info));
            }
            log.info(format_args!("MyId: {}", members.me.id));
            log.info(format_args!("MyInfo: {}", members.me.info));
            roster.replace(members);
            None
        }
        ChannelEvent::MemberAdded(member) => {
            log.info(format_args!("Member joined, Id: {}", member.id));
            log.info(format_args!("Member Info: {}", member.info));
            roster.insert(member);
            None
        }
        ChannelEvent::MemberRemoved(member) => {
            log.info(format_args!("Member left, Id: {}", member.id));
            log.info(format_args!("Member Info: {}", member.info));
            roster.remove(&member.id);
            None
        }
        ChannelEvent::SubscriptionError(error) => {
            log.error(format_args!("Connection Error: {}", error.error));
            None
        }
        ChannelEvent::CacheMiss => {
            log.info(format_args!("Initiating cache..."));
            Some(ObserverAction::Prime)
        }
        ChannelEvent::Message { event, data } if event == SYNC_EVENT => {
            Some(ObserverAction::Sync(data))
        }
        ChannelEvent::Message { .. } => None,
    }
}
