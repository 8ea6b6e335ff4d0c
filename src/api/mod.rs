//! Remote feed API.
//!
//! This module ties a transport to the feed decoder:
//!
//! * [`HttpClient`] — the transport capability the loader depends on.
//! * [`map_response`] — turns a status code and body into feed items.
//! * [`RemoteFeedLoader`] — runs one request per `load` call and reports one
//!   [`LoadResult`].
//! * [`ReqwestHttpClient`] — the production transport.
//!
//! ## For contributors — adding a new transport
//!
//! 1. Implement [`HttpClient`] for your type (see the trait docs).
//! 2. Hand it to [`RemoteFeedLoader::new`] as an `Arc<dyn HttpClient>`.
//!
//! The loader, decoding and error classification stay transport-agnostic.

mod feed_items_mapper;
mod http_client;
mod remote_feed_loader;
mod reqwest_client;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use feed_items_mapper::map as map_response;
pub use http_client::{HttpClient, HttpClientCompletion, HttpClientResult, HttpResponse};
pub use remote_feed_loader::{LoadError, LoadResult, RemoteFeedLoader};
pub use reqwest_client::{ReqwestHttpClient, TransportConfig};
