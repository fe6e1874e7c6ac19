// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Relay request protocol.
//!
//! The protocol is simple:
//! - A client asks the relay to publish one event on one channel
//! - The request travels either as query parameters (GET) or as a JSON body (POST)
//! - The relay rejects the request unless channel, event and data are all present

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// Default URL path of the relay endpoint.
pub const DEFAULT_API_PATH: &str = "/syncpusher";

/// Body returned by the relay once the provider accepted the event.
pub const SUCCESS_MESSAGE: &str = "Data sent to Pusher";

/// Event name used by presence channels.
pub const SYNC_EVENT: &str = "sync";

/// HTTP method used to reach the relay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// Fields travel as query parameters; no body.
    Get,
    /// Fields travel as a JSON body.
    #[default]
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            _ => Err(Error::InvalidMethod(s.to_string())),
        }
    }
}

/// One of the three required relay request fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Channel,
    Event,
    Data,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Channel => "channel",
            Field::Event => "event",
            Field::Data => "data",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request to publish `data` as `event` on `channel`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayRequest {
    pub channel: String,
    pub event: String,
    pub data: Value,
}

impl RelayRequest {
    pub fn new(channel: impl Into<String>, event: impl Into<String>, data: Value) -> Self {
        RelayRequest {
            channel: channel.into(),
            event: event.into(),
            data,
        }
    }

    /// Parses a POST body.
    ///
    /// The body must be a JSON object. Fields of the wrong type count as
    /// missing, so `{"channel": 5}` is rejected the same way as `{}`.
    pub fn from_json_body(body: &[u8]) -> Result<Self> {
        let value: Value =
            serde_json::from_slice(body).map_err(|e| Error::MalformedBody(e.to_string()))?;
        let Value::Object(mut fields) = value else {
            return Err(Error::MalformedBody("expected a JSON object".to_string()));
        };

        let channel = take_string(fields.remove(Field::Channel.as_str()));
        let event = take_string(fields.remove(Field::Event.as_str()));
        let data = fields.remove(Field::Data.as_str()).unwrap_or(Value::Null);

        Self::checked(channel, event, data)
    }

    /// Builds a request from GET query parameters.
    ///
    /// Query parameters are untyped, so `data` stays a string.
    pub fn from_query(
        channel: Option<String>,
        event: Option<String>,
        data: Option<String>,
    ) -> Result<Self> {
        let data = data.map(Value::String).unwrap_or(Value::Null);
        Self::checked(channel.unwrap_or_default(), event.unwrap_or_default(), data)
    }

    /// Checks that every field is present and truthy.
    pub fn validate(&self) -> Result<()> {
        if self.channel.is_empty() {
            return Err(Error::MissingField(Field::Channel));
        }
        if self.event.is_empty() {
            return Err(Error::MissingField(Field::Event));
        }
        if !is_truthy(&self.data) {
            return Err(Error::MissingField(Field::Data));
        }
        Ok(())
    }

    /// Serializes the request as a POST body.
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    fn checked(channel: String, event: String, data: Value) -> Result<Self> {
        let request = RelayRequest {
            channel,
            event,
            data,
        };
        request.validate()?;
        Ok(request)
    }
}

fn take_string(value: Option<Value>) -> String {
    match value {
        Some(Value::String(s)) => s,
        _ => String::new(),
    }
}

/// JavaScript truthiness of a JSON value.
///
/// `null`, `false`, `0` and `""` are falsy. Arrays and objects are truthy even
/// when empty, which is what lets a client prime a channel with `[]`.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text form of a payload for untyped carriers (query strings, provider data).
///
/// Strings are passed through unchanged; everything else is JSON-encoded.
pub fn payload_text(data: &Value) -> std::result::Result<String, serde_json::Error> {
    match data {
        Value::String(s) => Ok(s.clone()),
        other => serde_json::to_string(other),
    }
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod tests;
