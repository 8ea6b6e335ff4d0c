//! [`HttpClient`] backed by `reqwest`.
//!
//! Each [`get`](HttpClient::get) spawns one task on the supplied tokio runtime,
//! so the caller never blocks.  Any HTTP status, including 4xx and 5xx, is a
//! successful transport outcome; only failures to send the request or read
//! the body are reported as errors.  A request whose task never runs to
//! completion, for example because the runtime shut down, is reported as a
//! cancelled request.

use std::time::Duration;

use anyhow::{anyhow, Context};
use tokio::runtime::Handle;
use tracing::debug;
use url::Url;

use super::http_client::{HttpClient, HttpClientCompletion, HttpClientResult, HttpResponse};

/// Policy applied by [`ReqwestHttpClient`] to every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    /// Upper bound for the whole request, body included.
    pub timeout: Duration,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).into(),
        }
    }
}

/// Production transport using an async [`reqwest::Client`].
pub struct ReqwestHttpClient {
    client: reqwest::Client,
    runtime: Handle,
}

impl ReqwestHttpClient {
    /// Build a client whose requests run on `runtime`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying TLS backend cannot be initialised.
    pub fn new(runtime: Handle, config: &TransportConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self { client, runtime })
    }

    async fn fetch(client: reqwest::Client, url: Url) -> HttpClientResult {
        let response = client
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("GET {url} failed"))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .with_context(|| format!("reading body of {url} failed"))?;

        debug!(%url, status, bytes = body.len(), "response received");
        Ok(HttpResponse::new(status, body.to_vec()))
    }
}

/// Calls the completion exactly once, with a cancellation error if dropped
/// before [`complete`](Self::complete).
struct CompletionGuard(Option<HttpClientCompletion>);

impl CompletionGuard {
    fn complete(mut self, result: HttpClientResult) {
        if let Some(completion) = self.0.take() {
            completion(result);
        }
    }
}

impl Drop for CompletionGuard {
    fn drop(&mut self) {
        if let Some(completion) = self.0.take() {
            debug!("request task dropped before completing");
            completion(Err(anyhow!("request cancelled")));
        }
    }
}

impl HttpClient for ReqwestHttpClient {
    fn get(&self, url: &Url, completion: HttpClientCompletion) {
        let client = self.client.clone();
        let url = url.clone();
        let guard = CompletionGuard(Some(completion));
        self.runtime.spawn(async move {
            guard.complete(Self::fetch(client, url).await);
        });
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
