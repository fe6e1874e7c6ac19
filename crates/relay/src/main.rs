// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! syncpush-relay: HTTP relay between syncpush clients and Pusher Channels.
//!
//! Clients post `{channel, event, data}`; the relay validates the request and
//! publishes it through the Pusher trigger API, keeping the app secret
//! server-side.

mod config;
mod messages;
mod provider;
mod server;
mod state;

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use config::RelayConfig;
use provider::PusherTrigger;
use state::RelayState;

/// syncpush-relay: Pusher relay server
#[derive(Parser, Debug)]
#[command(name = "syncpush-relay")]
#[command(about = "HTTP relay forwarding sync events to Pusher Channels")]
struct Args {
    /// Path to the TOML config file
    #[arg(short, long, default_value = "relay.toml")]
    config: PathBuf,

    /// Address to bind the server to (overrides the config file)
    #[arg(short, long)]
    bind: Option<SocketAddr>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = RelayConfig::load(&args.config)?;
    let locale = config.locale();
    let messages = locale.messages();
    let bind = args.bind.unwrap_or(config.bind);

    let state = RelayState::new(
        PusherTrigger::new(&config.pusher),
        locale,
        config.api_path.clone(),
    );

    info!("{}", messages.starting_server);
    info!("  Language: {}", state.locale());
    info!("  API path: {}", state.api_path());
    info!("  Pusher host: {}", config.pusher.api_host());

    let listener = match TcpListener::bind(bind).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("{}: {}", messages.server_start_error, e);
            return Err(e.into());
        }
    };
    info!("{}: {}", messages.server_started, listener.local_addr()?);

    server::serve(listener, state).await?;

    Ok(())
}
