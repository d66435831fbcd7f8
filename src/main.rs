use clap::error::ErrorKind;
use clap::Parser;
use drive_clear::{run, ENDPOINT};
use reqwest::Client;
use std::io;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Ask for confirmation, then delete all data through the local drive API.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "drive_clear=error".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Always exit 0: outcomes are reported as text. Stray arguments are ignored.
    match Args::try_parse() {
        Ok(_) => {}
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => debug!("ignoring command-line arguments: {:?}", e.kind()),
    }

    let client = Client::new();
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    if let Err(e) = run(&mut input, &mut output, &client, ENDPOINT, true).await {
        error!("console I/O failed: {:#}", e);
    }
}
