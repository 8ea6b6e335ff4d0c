//! Command-line configuration for the `remote-feed-loader` binary.

use std::time::Duration;

use clap::Parser;
use url::Url;

use crate::api::TransportConfig;

/// Fetch a JSON image feed once and print its items.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Config {
    /// Feed URL to load.
    #[arg(default_value = "https://example.com/feed.json")]
    pub url: Url,

    /// Request timeout in seconds, body included.
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Override the `User-Agent` header.
    #[arg(long)]
    pub user_agent: Option<String>,
}

impl Config {
    /// Transport policy derived from the command line.
    pub fn transport(&self) -> TransportConfig {
        let defaults = TransportConfig::default();
        TransportConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            user_agent: self.user_agent.clone().unwrap_or(defaults.user_agent),
        }
    }
}
