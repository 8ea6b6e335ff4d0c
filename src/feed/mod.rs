//! Feed feature types.
//!
//! This module owns the domain value exposed to callers.  It knows nothing
//! about HTTP or JSON: the API layer in [`crate::api`] converts wire data into
//! [`FeedItem`] values.

mod feed_item;

pub use feed_item::FeedItem;
