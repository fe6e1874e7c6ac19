// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP relay endpoint.
//!
//! GET and POST at the configured path both reduce to [`relay`]:
//!
//! ```text
//! invalid request      → 400 <invalid_data>   (provider not called)
//! provider accepted    → 200 Data sent to Pusher
//! provider failed      → 500 <pusher_error>   (detail logged only)
//! ```

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use tokio::net::TcpListener;
use tracing::{debug, error, warn};

use syncpush_core::{RelayRequest, SUCCESS_MESSAGE};

use crate::state::RelayState;

/// Query parameters of a GET relay request.
#[derive(Debug, Default, Deserialize)]
struct RelayQuery {
    channel: Option<String>,
    event: Option<String>,
    data: Option<String>,
}

/// Builds the relay router.
pub fn router(state: RelayState) -> Router {
    Router::new()
        .route(state.api_path(), get(relay_get).post(relay_post))
        .with_state(state)
}

/// Serves the relay on an already-bound listener until it fails.
pub async fn serve(listener: TcpListener, state: RelayState) -> std::io::Result<()> {
    axum::serve(listener, router(state)).await
}

async fn relay_get(
    State(state): State<RelayState>,
    query: Option<Query<RelayQuery>>,
) -> (StatusCode, String) {
    let query = query.map(|Query(q)| q).unwrap_or_default();
    let request = RelayRequest::from_query(query.channel, query.event, query.data);
    relay(&state, request).await
}

async fn relay_post(State(state): State<RelayState>, body: Bytes) -> (StatusCode, String) {
    let request = RelayRequest::from_json_body(&body);
    relay(&state, request).await
}

/// Validates a parsed request and forwards it to the provider.
pub(crate) async fn relay(
    state: &RelayState,
    request: syncpush_core::Result<RelayRequest>,
) -> (StatusCode, String) {
    let messages = state.messages();

    let request = match request {
        Ok(request) => request,
        Err(e) => {
            warn!("Rejected relay request: {}", e);
            return (StatusCode::BAD_REQUEST, messages.invalid_data.to_string());
        }
    };

    match state
        .trigger()
        .trigger(&request.channel, &request.event, &request.data)
        .await
    {
        Ok(()) => {
            debug!(channel = %request.channel, event = %request.event, "event triggered");
            (StatusCode::OK, SUCCESS_MESSAGE.to_string())
        }
        Err(e) => {
            error!(channel = %request.channel, "{}: {}", messages.pusher_error, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                messages.pusher_error.to_string(),
            )
        }
    }
}
