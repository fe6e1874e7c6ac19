// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the config module.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::time::Duration;

use super::config::*;
use syncpush_core::HttpMethod;
use yare::parameterized;

fn minimal() -> ClientConfigBuilder {
    ClientConfig::builder()
        .key("app-key")
        .api("https://relay.example.com/syncpusher")
}

#[test]
fn test_defaults_applied() {
    let config = minimal().build().unwrap();

    assert_eq!(config.key(), "app-key");
    assert_eq!(config.api().as_str(), "https://relay.example.com/syncpusher");
    assert_eq!(config.library_url().as_str(), DEFAULT_LIBRARY_URL);
    assert_eq!(config.cluster(), "ap1");
    assert_eq!(config.channel_name(), "presence-cache-sync");
    assert_eq!(config.kind(), &ChannelKind::Presence);
    assert_eq!(config.event_name(), "sync");
    assert_eq!(config.method(), HttpMethod::Post);
    assert_eq!(config.retries(), 3);
    assert_eq!(config.delay(), Duration::from_millis(1000));
    assert!(!config.verbose());
}

#[parameterized(
    no_key = { None, Some("https://relay.example.com"), "key" },
    empty_key = { Some(""), Some("https://relay.example.com"), "key" },
    no_api = { Some("k"), None, "api" },
    empty_api = { Some("k"), Some(""), "api" },
    neither = { None, None, "key" },
)]
fn test_missing_required_field(key: Option<&str>, api: Option<&str>, field: &str) {
    let mut builder = ClientConfig::builder();
    if let Some(key) = key {
        builder = builder.key(key);
    }
    if let Some(api) = api {
        builder = builder.api(api);
    }

    let err = builder.build().unwrap_err();
    assert!(matches!(err, ConfigError::MissingField(f) if f == field));
    assert!(err.to_string().contains("is required"));
}

#[test]
fn test_invalid_api_url() {
    let err = ClientConfig::builder()
        .key("k")
        .api("not a url")
        .build()
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidUrl { field: "api", .. }));
}

#[test]
fn test_presence_channel_is_prefixed() {
    let config = minimal().channel("board").build().unwrap();
    assert_eq!(config.channel_name(), "presence-cache-board");
    assert_eq!(config.event_name(), "sync");
}

#[test]
fn test_plain_channel_uses_name_and_event() {
    let config = minimal()
        .channel("board")
        .plain("board-updated")
        .build()
        .unwrap();
    assert_eq!(config.channel_name(), "board");
    assert_eq!(config.event_name(), "board-updated");
}

#[test]
fn test_plain_channel_empty_event_falls_back_to_sync() {
    let config = minimal().plain("").build().unwrap();
    assert_eq!(config.event_name(), "sync");
}

#[test]
fn test_zero_retries_is_honored() {
    let config = minimal().retries(0).delay_ms(0).build().unwrap();
    assert_eq!(config.retries(), 0);
    assert_eq!(config.delay(), Duration::ZERO);
}

#[test]
fn test_overrides() {
    let config = minimal()
        .cluster("eu")
        .library_url("https://cdn.example.com/pusher.js")
        .method(HttpMethod::Get)
        .retries(5)
        .delay_ms(250)
        .verbose(true)
        .build()
        .unwrap();

    assert_eq!(config.cluster(), "eu");
    assert_eq!(
        config.library_url().as_str(),
        "https://cdn.example.com/pusher.js"
    );
    assert_eq!(config.method(), HttpMethod::Get);
    assert_eq!(config.retries(), 5);
    assert_eq!(config.delay(), Duration::from_millis(250));
    assert!(config.verbose());
}
