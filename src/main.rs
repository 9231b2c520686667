// s3report: A daily report of the space used in AWS S3, posted to Slack.
#![forbid(unsafe_code)]
use anyhow::Result;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod aggregator;
mod cli;
mod common;
mod coordinator;
mod report;
mod run;
mod s3;

use report::Notifier;

// Logs go to stderr, filtered by RUST_LOG.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let matches = cli::parse_args();

    info!("Starting daily S3 size report");

    let notifier = Notifier::new(cli::notifier_config(&matches)?)?;
    let client   = s3::Client::new(cli::client_config(&matches)).await;

    run::run(Arc::new(client), &notifier).await?;

    Ok(())
}
