// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for relay protocol validation.

use thiserror::Error;

use crate::protocol::Field;

/// Reasons a relay request is rejected before reaching the provider.
#[derive(Debug, Error)]
pub enum Error {
    #[error("missing or empty field: {0}")]
    MissingField(Field),

    #[error("malformed request body: {0}")]
    MalformedBody(String),

    #[error("unsupported HTTP method: '{0}'\n  hint: valid methods are: GET, POST")]
    InvalidMethod(String),
}

/// A specialized Result type for protocol operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
