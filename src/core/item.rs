//! # Feed Items
//!
//! The one unit of content the host delivers. The wire shape keeps the
//! feed-specific nesting of the original payload: the body markup lives
//! under `rss_entry.content`, not at the top level.
//!
//! Payloads are validated with [`Item::from_value`] before anything else
//! touches them, so a half-formed render callback fails fast with a named
//! error instead of leaking empty fields into the display regions.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One feed entry as pushed by the host. Opaque to the client beyond
/// the three fields it displays and opens.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub title: String,
    pub html_url: String,
    pub rss_entry: RssEntry,
}

/// The feed-specific wrapper around the body markup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RssEntry {
    pub content: String,
}

impl Item {
    /// Body markup, unwrapped from its feed-specific nesting.
    pub fn content(&self) -> &str {
        &self.rss_entry.content
    }
}

/// Validation failures for an inbound item payload. Each missing field
/// gets its own variant so the log says exactly what the host dropped.
#[derive(Debug, PartialEq)]
pub enum ItemError {
    /// Payload is not a JSON object at all.
    NotAnObject,
    MissingTitle,
    MissingUrl,
    MissingContent,
    /// `html_url` is present but not an absolute URL.
    InvalidUrl(String),
}

impl fmt::Display for ItemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemError::NotAnObject => write!(f, "item payload is not an object"),
            ItemError::MissingTitle => write!(f, "item payload missing 'title'"),
            ItemError::MissingUrl => write!(f, "item payload missing 'html_url'"),
            ItemError::MissingContent => {
                write!(f, "item payload missing 'rss_entry.content'")
            }
            ItemError::InvalidUrl(url) => write!(f, "item URL is not absolute: {url}"),
        }
    }
}

impl std::error::Error for ItemError {}

impl Item {
    /// Validates and extracts an item from a raw render payload.
    ///
    /// Checks each required field individually rather than relying on a
    /// blanket deserialize error, so the failure names the field.
    pub fn from_value(value: &Value) -> Result<Item, ItemError> {
        let obj = value.as_object().ok_or(ItemError::NotAnObject)?;

        let title = obj
            .get("title")
            .and_then(Value::as_str)
            .ok_or(ItemError::MissingTitle)?;
        let html_url = obj
            .get("html_url")
            .and_then(Value::as_str)
            .ok_or(ItemError::MissingUrl)?;
        let content = obj
            .get("rss_entry")
            .and_then(|e| e.get("content"))
            .and_then(Value::as_str)
            .ok_or(ItemError::MissingContent)?;

        // Url::parse rejects relative references, which is exactly the
        // absoluteness check the open action needs.
        if url::Url::parse(html_url).is_err() {
            return Err(ItemError::InvalidUrl(html_url.to_string()));
        }

        Ok(Item {
            title: title.to_string(),
            html_url: html_url.to_string(),
            rss_entry: RssEntry {
                content: content.to_string(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_well_formed() {
        let value = json!({
            "title": "Post A",
            "html_url": "http://x/a",
            "rss_entry": { "content": "<p>A</p>" }
        });
        let item = Item::from_value(&value).unwrap();
        assert_eq!(item.title, "Post A");
        assert_eq!(item.html_url, "http://x/a");
        assert_eq!(item.content(), "<p>A</p>");
    }

    #[test]
    fn test_from_value_missing_title() {
        let value = json!({
            "html_url": "http://x/a",
            "rss_entry": { "content": "<p>A</p>" }
        });
        assert_eq!(Item::from_value(&value), Err(ItemError::MissingTitle));
    }

    #[test]
    fn test_from_value_missing_url() {
        let value = json!({
            "title": "Post A",
            "rss_entry": { "content": "<p>A</p>" }
        });
        assert_eq!(Item::from_value(&value), Err(ItemError::MissingUrl));
    }

    #[test]
    fn test_from_value_missing_nested_content() {
        let value = json!({
            "title": "Post A",
            "html_url": "http://x/a",
            "rss_entry": {}
        });
        assert_eq!(Item::from_value(&value), Err(ItemError::MissingContent));
    }

    #[test]
    fn test_from_value_relative_url_rejected() {
        let value = json!({
            "title": "Post A",
            "html_url": "/a",
            "rss_entry": { "content": "<p>A</p>" }
        });
        assert_eq!(
            Item::from_value(&value),
            Err(ItemError::InvalidUrl("/a".to_string()))
        );
    }

    #[test]
    fn test_from_value_not_an_object() {
        assert_eq!(Item::from_value(&json!("nope")), Err(ItemError::NotAnObject));
    }

    #[test]
    fn test_serde_round_trip_keeps_wire_names() {
        let item = Item {
            title: "Post A".into(),
            html_url: "http://x/a".into(),
            rss_entry: RssEntry {
                content: "<p>A</p>".into(),
            },
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["rss_entry"]["content"], "<p>A</p>");
        assert_eq!(Item::from_value(&value).unwrap(), item);
    }
}
