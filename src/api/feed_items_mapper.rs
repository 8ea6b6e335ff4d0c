//! Translation from a raw response to a [`LoadResult`].
//!
//! This is a pure function (no I/O, no logging) so that tests can exercise
//! every validation rule without a transport.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use url::Url;
use uuid::Uuid;

use super::http_client::HttpResponse;
use super::remote_feed_loader::{LoadError, LoadResult};
use crate::feed::FeedItem;

const OK_200: u16 = 200;

/// Length of the 8-4-4-4-12 hyphenated UUID form.
const HYPHENATED_UUID_LEN: usize = 36;

#[derive(Deserialize)]
struct Root {
    items: Vec<Item>,
}

// `Option` fields accept both a missing key and an explicit `null`.
#[derive(Deserialize)]
struct Item {
    #[serde(deserialize_with = "hyphenated_uuid")]
    id: Uuid,
    description: Option<String>,
    location: Option<String>,
    image: Url,
}

// `Uuid::try_parse` also takes simple, braced and URN forms; only the
// hyphenated form is a valid id on the wire.
fn hyphenated_uuid<'de, D>(deserializer: D) -> Result<Uuid, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if raw.len() != HYPHENATED_UUID_LEN {
        return Err(D::Error::custom(format!("expected a hyphenated UUID, got {raw:?}")));
    }
    Uuid::try_parse(&raw).map_err(D::Error::custom)
}

impl From<Item> for FeedItem {
    fn from(item: Item) -> Self {
        FeedItem::new(item.id, item.description, item.location, item.image)
    }
}

/// Validate `response` and decode its body into feed items.
///
/// Any status other than 200 is [`LoadError::InvalidData`] without looking at
/// the body, as is any body that does not decode as `{"items": [...]}`.
pub fn map(response: &HttpResponse) -> LoadResult {
    if response.status != OK_200 {
        return Err(LoadError::InvalidData);
    }

    let root: Root =
        serde_json::from_slice(&response.body).map_err(|_| LoadError::InvalidData)?;

    Ok(root.items.into_iter().map(FeedItem::from).collect())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
