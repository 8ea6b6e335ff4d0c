//! Transport abstraction used by the loader.
//!
//! [`HttpClient`] is the only suspension point in the crate.  The loader hands
//! it a URL and a completion, and the implementation reports back exactly once
//! from whatever thread or task finishes the request.  Retries, timeouts and
//! caching are policy of a concrete client, never of this trait.
//!
//! ## Implementing a new client
//!
//! ```ignore
//! struct MyClient { /* connection state */ }
//!
//! impl HttpClient for MyClient {
//!     fn get(&self, url: &Url, completion: HttpClientCompletion) {
//!         // Start the request without blocking, then call
//!         // `completion(Ok(HttpResponse::new(status, body)))` or
//!         // `completion(Err(error))` exactly once.
//!     }
//! }
//! ```

use url::Url;

/// Status code and body of a response that reached us.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code as sent by the server.
    pub status: u16,
    /// Raw response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Outcome of one GET.
///
/// `Err` means no response was obtained at all.  The error value is opaque to
/// the loader, which only looks at the discriminant.
pub type HttpClientResult = Result<HttpResponse, anyhow::Error>;

/// Callback receiving the outcome of one GET.
pub type HttpClientCompletion = Box<dyn FnOnce(HttpClientResult) + Send + 'static>;

/// Capability to perform a single HTTP GET.
///
/// Implementations must not block the caller and must invoke `completion`
/// exactly once per call.  They are shared between loaders behind an
/// [`Arc`](std::sync::Arc), so they must be [`Send`] + [`Sync`].
pub trait HttpClient: Send + Sync {
    /// Start a GET for `url` and report the outcome through `completion`.
    fn get(&self, url: &Url, completion: HttpClientCompletion);
}
