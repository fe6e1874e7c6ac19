// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging gated by the client's verbose flag.

use std::fmt;

/// Emits client diagnostics through `tracing` when enabled.
///
/// Diagnostics never influence control flow: a disabled log is a no-op and
/// an enabled one only records an event.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLog {
    enabled: bool,
}

impl ConsoleLog {
    pub fn new(enabled: bool) -> Self {
        ConsoleLog { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn info(&self, message: fmt::Arguments<'_>) {
        if self.enabled {
            tracing::info!("{}", message);
        }
    }

    pub fn error(&self, message: fmt::Arguments<'_>) {
        if self.enabled {
            tracing::error!("{}", message);
        }
    }
}
