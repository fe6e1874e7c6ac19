// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! syncpush-core: Shared relay protocol for the syncpush client and relay.
//!
//! This crate defines the request shape both sides agree on, the validation
//! rules the relay enforces before forwarding an event, and the constants
//! that appear on the wire.

pub mod error;
pub mod protocol;

pub use error::{Error, Result};
pub use protocol::{
    is_truthy, payload_text, Field, HttpMethod, RelayRequest, DEFAULT_API_PATH, SUCCESS_MESSAGE,
    SYNC_EVENT,
};
