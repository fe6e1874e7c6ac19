// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Localized operator and response messages.

use std::fmt;
use std::str::FromStr;

/// Language of the relay's user-facing text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    EnUs,
    ZhCn,
}

impl Locale {
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::ZhCn => "zh-CN",
        }
    }

    /// Parses a language tag, falling back to en-US for unknown tags.
    pub fn resolve(tag: &str) -> Self {
        tag.parse().unwrap_or_else(|_| {
            tracing::warn!(language = %tag, "unknown language, falling back to en-US");
            Locale::EnUs
        })
    }

    pub fn messages(self) -> &'static Messages {
        match self {
            Locale::EnUs => &EN_US,
            Locale::ZhCn => &ZH_CN,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The language tag is not one the relay ships messages for.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("unsupported language: {0}")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en-US" => Ok(Locale::EnUs),
            "zh-CN" => Ok(Locale::ZhCn),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}

/// Message table for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    pub starting_server: &'static str,
    pub server_started: &'static str,
    pub server_start_error: &'static str,
    /// Body of a 400 response.
    pub invalid_data: &'static str,
    /// Body of a 500 response.
    pub pusher_error: &'static str,
}

static EN_US: Messages = Messages {
    starting_server: "Starting server...",
    server_started: "Server started",
    server_start_error: "Error starting the server",
    invalid_data: "Invalid request data",
    pusher_error: "Pusher error",
};

static ZH_CN: Messages = Messages {
    starting_server: "启动服务器...",
    server_started: "服务器已启动",
    server_start_error: "启动服务器时出错",
    invalid_data: "无效的请求数据",
    pusher_error: "Pusher 错误",
};

#[cfg(test)]
#[path = "messages_tests.rs"]
mod tests;
