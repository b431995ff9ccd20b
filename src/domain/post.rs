//! Post entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A blog post as stored on disk.
///
/// `title`, `content` and `createdAt` are the fields the repository
/// interprets. Anything else in the stored document lands in `extra` and is
/// written back untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub title: String,

    #[serde(default)]
    pub content: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Post {
    /// Field names that cannot be used for pass-through data
    pub const RESERVED_FIELDS: [&'static str; 3] = ["title", "content", "createdAt"];

    /// Create an unsaved post
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Post {
            title: title.into(),
            content: content.into(),
            created_at: None,
            extra: BTreeMap::new(),
        }
    }

    pub fn is_reserved_field(key: &str) -> bool {
        Self::RESERVED_FIELDS.contains(&key)
    }

    /// Attach a pass-through field. Reserved names are ignored.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if !Self::is_reserved_field(&key) {
            self.extra.insert(key, value.into());
        }
        self
    }

    /// Turn an incoming post into a brand new one created at `now`.
    pub fn created(mut self, now: DateTime<Utc>) -> Self {
        self.created_at = Some(now);
        self
    }

    /// Turn an incoming post into an update of `existing`: everything comes
    /// from `self` except the creation time.
    ///
    /// A stored post without a creation time gets `now`.
    pub fn updating(mut self, existing: &Post, now: DateTime<Utc>) -> Self {
        self.created_at = Some(existing.created_at.unwrap_or(now));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 17, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_new_post_has_no_creation_time() {
        let post = Post::new("Hello", "World");
        assert_eq!(post.title, "Hello");
        assert_eq!(post.content, "World");
        assert!(post.created_at.is_none());
        assert!(post.extra.is_empty());
    }

    #[test]
    fn test_created_sets_creation_time() {
        let post = Post::new("Hello", "World").created(at(9));
        assert_eq!(post.created_at, Some(at(9)));
    }

    #[test]
    fn test_updating_keeps_existing_creation_time() {
        let existing = Post::new("Hello", "World")
            .with_field("author", "duke")
            .created(at(9));
        let incoming = Post::new("Hello", "Updated").created(at(12));

        let merged = incoming.updating(&existing, at(15));

        assert_eq!(merged.created_at, Some(at(9)));
        assert_eq!(merged.content, "Updated");
        // Extra fields come from the incoming post only
        assert!(merged.extra.is_empty());
    }

    #[test]
    fn test_updating_post_without_creation_time_uses_now() {
        let existing = Post::new("Hello", "World");
        let merged = Post::new("Hello", "Updated").updating(&existing, at(15));
        assert_eq!(merged.created_at, Some(at(15)));
    }

    #[test]
    fn test_with_field_ignores_reserved_names() {
        let post = Post::new("Hello", "World")
            .with_field("createdAt", "2020-01-01T00:00:00Z")
            .with_field("tags", json!(["rust", "blog"]));

        assert_eq!(post.extra.len(), 1);
        assert_eq!(post.extra["tags"], json!(["rust", "blog"]));
    }

    #[test]
    fn test_serializes_camel_case_and_flattens_extra() {
        let post = Post::new("Hello", "World")
            .with_field("author", "duke")
            .created(at(9));

        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(value["title"], "Hello");
        assert_eq!(value["createdAt"], "2025-01-17T09:00:00Z");
        assert_eq!(value["author"], "duke");
        assert!(value.get("extra").is_none());
    }

    #[test]
    fn test_unsaved_post_omits_created_at() {
        let value = serde_json::to_value(Post::new("Hello", "World")).unwrap();
        assert!(value.get("createdAt").is_none());
    }

    #[test]
    fn test_deserialize_requires_title() {
        let result = serde_json::from_str::<Post>(r#"{"content": "no title"}"#);
        assert!(result.is_err());
    }
}
