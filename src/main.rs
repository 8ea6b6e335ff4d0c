//! remote-feed-loader — load a JSON image feed once and print it.
//!
//! `main` is the composition root: it parses [`Config`], installs logging,
//! starts a tokio runtime for the transport, wires a [`ReqwestHttpClient`]
//! into a [`RemoteFeedLoader`] and waits for the single outcome on a channel.
//! Items go to stdout, logs go to stderr.

use std::sync::{mpsc, Arc};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use remote_feed_loader::config::Config;
use remote_feed_loader::{FeedItem, RemoteFeedLoader, ReqwestHttpClient};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_item(item: &FeedItem) {
    println!(
        "{}  {}  {}  {}",
        item.id(),
        item.image(),
        item.location().unwrap_or("-"),
        item.description().unwrap_or("-"),
    );
}

fn main() -> Result<()> {
    let config = Config::parse();
    init_tracing();

    // -- transport -----------------------------------------------------------
    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    let client = ReqwestHttpClient::new(runtime.handle().clone(), &config.transport())
        .context("failed to build HTTP client")?;

    // -- load ----------------------------------------------------------------
    let loader = RemoteFeedLoader::new(config.url.clone(), Arc::new(client));
    let (tx, rx) = mpsc::channel();
    loader.load(move |result| {
        // The receiver only goes away if main has already bailed out.
        let _ = tx.send(result);
    });

    let items = rx
        .recv()
        .context("transport dropped the request without reporting")?
        .with_context(|| format!("failed to load {}", loader.url()))?;

    info!(count = items.len(), url = %loader.url(), "feed loaded");
    for item in &items {
        print_item(item);
    }

    Ok(())
}
