// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared relay state.

use std::sync::Arc;

use crate::messages::{Locale, Messages};
use crate::provider::Trigger;

/// State shared by every request handler.
#[derive(Clone)]
pub struct RelayState {
    inner: Arc<RelayStateInner>,
}

struct RelayStateInner {
    /// Provider client, reused across requests.
    trigger: Box<dyn Trigger>,
    locale: Locale,
    api_path: String,
}

impl RelayState {
    pub fn new(trigger: impl Trigger + 'static, locale: Locale, api_path: impl Into<String>) -> Self {
        RelayState {
            inner: Arc::new(RelayStateInner {
                trigger: Box::new(trigger),
                locale,
                api_path: api_path.into(),
            }),
        }
    }

    pub fn trigger(&self) -> &dyn Trigger {
        self.inner.trigger.as_ref()
    }

    pub fn locale(&self) -> Locale {
        self.inner.locale
    }

    pub fn messages(&self) -> &'static Messages {
        self.inner.locale.messages()
    }

    pub fn api_path(&self) -> &str {
        &self.inner.api_path
    }
}
