//! remote-feed-loader — fetch and decode a JSON image feed over HTTP.
//!
//! ## Architecture overview
//!
//! ```text
//! ┌────────────┐  load()  ┌──────────────────┐  get()  ┌────────────┐
//! │   caller   │ ───────► │ RemoteFeedLoader │ ──────► │ HttpClient │
//! └────────────┘          └──────────────────┘         └────────────┘
//!       ▲                          │ map()                    │
//!       │ LoadResult               ▼                          │
//!       └────────────────    map_response     ◄───────────────┘
//!                                             status + body
//! ```
//!
//! * **`feed`** — the [`FeedItem`] value handed to callers.
//! * **`api`** — the transport trait, the response mapper, the loader and a
//!   `reqwest`-backed transport.
//! * **`config`** — command-line configuration for the bundled binary.
//!
//! Every `load` call issues exactly one request and reports exactly one
//! outcome: the items, [`LoadError::Connectivity`] when no response was
//! obtained, or [`LoadError::InvalidData`] when the response was unusable.

pub mod api;
pub mod config;
pub mod feed;

pub use api::{
    map_response, HttpClient, HttpClientCompletion, HttpClientResult, HttpResponse, LoadError,
    LoadResult, RemoteFeedLoader, ReqwestHttpClient, TransportConfig,
};
pub use feed::FeedItem;
