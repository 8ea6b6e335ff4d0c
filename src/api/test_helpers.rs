//! Shared test doubles and fixtures for the API layer.

use std::sync::Mutex;

use serde_json::{json, Value};
use url::Url;
use uuid::Uuid;

use super::http_client::{HttpClient, HttpClientCompletion, HttpResponse};
use crate::feed::FeedItem;

pub fn any_url() -> Url {
    Url::parse("https://any-url.com").unwrap()
}

/// Build a feed item with a fresh id along with its wire representation.
///
/// Absent optionals are omitted from the JSON rather than written as `null`.
pub fn make_item(
    description: Option<&str>,
    location: Option<&str>,
    image: &str,
) -> (FeedItem, Value) {
    let id = Uuid::new_v4();
    let image = Url::parse(image).unwrap();
    let item = FeedItem::new(
        id,
        description.map(String::from),
        location.map(String::from),
        image.clone(),
    );

    let mut json = json!({ "id": id, "image": image.as_str() });
    if let Some(description) = description {
        json["description"] = json!(description);
    }
    if let Some(location) = location {
        json["location"] = json!(location);
    }

    (item, json)
}

pub fn items_json(items: &[Value]) -> String {
    json!({ "items": items }).to_string()
}

struct Message {
    url: Url,
    completion: Option<HttpClientCompletion>,
}

/// Records every GET and holds its completion until the test fires it.
#[derive(Default)]
pub struct HttpClientSpy {
    messages: Mutex<Vec<Message>>,
}

impl HttpClientSpy {
    pub fn requested_urls(&self) -> Vec<Url> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .map(|m| m.url.clone())
            .collect()
    }

    pub fn complete_with_error(&self, error: anyhow::Error, index: usize) {
        let completion = self.take_completion(index);
        completion(Err(error));
    }

    pub fn complete_with_status(&self, status: u16, body: impl Into<Vec<u8>>, index: usize) {
        let completion = self.take_completion(index);
        completion(Ok(HttpResponse::new(status, body)));
    }

    fn take_completion(&self, index: usize) -> HttpClientCompletion {
        self.messages.lock().unwrap()[index]
            .completion
            .take()
            .expect("request already completed")
    }
}

impl HttpClient for HttpClientSpy {
    fn get(&self, url: &Url, completion: HttpClientCompletion) {
        self.messages.lock().unwrap().push(Message {
            url: url.clone(),
            completion: Some(completion),
        });
    }
}
