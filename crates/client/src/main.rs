// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! syncpush: push a payload to a syncpush relay from the command line.

use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use syncpush_client::{ClientConfig, PushClient};
use syncpush_core::HttpMethod;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// syncpush: Realtime state sync through a Pusher relay
#[derive(Parser, Debug)]
#[command(name = "syncpush")]
#[command(about = "Push state to a syncpush relay")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Push one payload to the relay
    Push(PushArgs),
}

#[derive(Args, Debug)]
struct PushArgs {
    /// Relay endpoint URL
    #[arg(long, env = "SYNCPUSH_API")]
    api: String,

    /// Provider application key
    #[arg(long, env = "SYNCPUSH_KEY")]
    key: String,

    /// Channel name (prefixed with presence-cache- unless --event is given)
    #[arg(long, default_value = "sync")]
    channel: String,

    /// Event name; selects a plain channel
    #[arg(long)]
    event: Option<String>,

    /// Request shape: GET (query string) or POST (JSON body)
    #[arg(long, default_value = "POST")]
    method: HttpMethod,

    /// Retries after the first failed attempt
    #[arg(long, default_value = "3")]
    retries: u32,

    /// Delay between attempts in milliseconds
    #[arg(long, default_value = "1000")]
    delay: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Payload; parsed as JSON, otherwise sent as a string
    data: String,
}

fn parse_data(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

async fn push(args: PushArgs) -> Result<String, Box<dyn std::error::Error>> {
    let mut builder = ClientConfig::builder()
        .api(args.api)
        .key(args.key)
        .channel(args.channel)
        .method(args.method)
        .retries(args.retries)
        .delay_ms(args.delay)
        .verbose(args.verbose);
    if let Some(event) = args.event {
        builder = builder.plain(event);
    }
    let config = builder.build()?;

    let client = PushClient::new(config);
    Ok(client.push(&parse_data(&args.data)).await?)
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let Command::Push(args) = cli.command;
    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    match push(args).await {
        Ok(body) => println!("{body}"),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
