//! Orchestration of one request/response/decode cycle.
//!
//! [`RemoteFeedLoader::load`] issues a single GET through the injected
//! [`HttpClient`], classifies the outcome and delivers exactly one
//! [`LoadResult`] to the caller's completion.
//!
//! The loader keeps no per-call state.  Each pending completion holds only a
//! weak reference to the loader's liveness token, so dropping the loader while
//! a request is in flight means its result is discarded instead of delivered.

use std::sync::{Arc, Weak};

use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use super::feed_items_mapper;
use super::http_client::{HttpClient, HttpClientResult};
use crate::feed::FeedItem;

/// The two ways a load can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoadError {
    /// No response was obtained from the transport.
    #[error("could not reach the feed server")]
    Connectivity,
    /// A response arrived but was not a valid feed.
    #[error("the feed server returned invalid data")]
    InvalidData,
}

/// The single outcome of one [`RemoteFeedLoader::load`] call.
pub type LoadResult = Result<Vec<FeedItem>, LoadError>;

/// Loads the feed at a fixed URL through an injected transport.
pub struct RemoteFeedLoader {
    url: Url,
    client: Arc<dyn HttpClient>,
    alive: Arc<()>,
}

impl RemoteFeedLoader {
    /// Create a loader for `url`.  No request is made until [`load`](Self::load).
    pub fn new(url: Url, client: Arc<dyn HttpClient>) -> Self {
        Self {
            url,
            client,
            alive: Arc::new(()),
        }
    }

    /// The URL every `load` call requests.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Request the feed and deliver exactly one result to `completion`.
    ///
    /// Returns immediately; `completion` runs on whatever thread the transport
    /// finishes on.  Concurrent calls are independent and may complete in any
    /// order.  If this loader is dropped before the transport reports back,
    /// `completion` is never called.
    pub fn load<F>(&self, completion: F)
    where
        F: FnOnce(LoadResult) + Send + 'static,
    {
        let alive: Weak<()> = Arc::downgrade(&self.alive);
        let url = self.url.clone();

        debug!(%url, "requesting feed");
        self.client.get(
            &self.url,
            Box::new(move |result| {
                if alive.upgrade().is_none() {
                    debug!(%url, "loader dropped before response; discarding result");
                    return;
                }
                completion(classify(&url, result));
            }),
        );
    }
}

fn classify(url: &Url, result: HttpClientResult) -> LoadResult {
    let response = match result {
        Ok(response) => response,
        Err(error) => {
            warn!(%url, error = %error, "feed request failed");
            return Err(LoadError::Connectivity);
        }
    };

    let status = response.status;
    match feed_items_mapper::map(&response) {
        Ok(items) => {
            debug!(%url, count = items.len(), "feed loaded");
            Ok(items)
        }
        Err(error) => {
            warn!(%url, status, bytes = response.body.len(), "feed response rejected");
            Err(error)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
