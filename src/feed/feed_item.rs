//! The value type handed to callers of the loader.
//!
//! A `FeedItem` is a snapshot of one entry in the remote feed.  It is produced
//! by the response mapper while decoding and is never mutated afterwards:
//! fields are private and only readable through accessors.

use url::Url;
use uuid::Uuid;

/// A single feed entry.
///
/// Equality is structural, so two items decoded from identical JSON compare
/// equal regardless of where they came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedItem {
    id: Uuid,
    description: Option<String>,
    location: Option<String>,
    image: Url,
}

impl FeedItem {
    /// Build an item from already-validated parts.
    pub fn new(
        id: Uuid,
        description: Option<String>,
        location: Option<String>,
        image: Url,
    ) -> Self {
        Self {
            id,
            description,
            location,
            image,
        }
    }

    /// Unique identifier of the entry.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Optional free-form description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Optional place name.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Absolute URL of the entry's image.
    pub fn image(&self) -> &Url {
        &self.image
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
