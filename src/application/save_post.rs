//! Save post use case

use crate::domain::{FileName, Post};
use crate::error::{BlogpadError, Result};
use crate::infrastructure::{FileStorage, PostCodec, PostRepository};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Where the body of a post comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    Inline(String),
    File(PathBuf),
}

/// A post as described on the command line
#[derive(Debug, Clone)]
pub struct SavePostRequest {
    pub title: String,
    pub content: ContentSource,
    /// `KEY=VALUE` pairs
    pub fields: Vec<String>,
}

/// Service for saving posts into a repository
pub struct SavePostService<S: FileStorage> {
    repository: PostRepository<S>,
}

impl<S: FileStorage> SavePostService<S> {
    /// Create a new save service
    pub fn new(repository: PostRepository<S>) -> Self {
        SavePostService { repository }
    }

    /// Build a post from `request` and save it
    pub fn execute(&self, request: SavePostRequest) -> Result<FileName> {
        let content = match request.content {
            ContentSource::Inline(text) => text,
            ContentSource::File(path) => fs::read_to_string(&path)?,
        };

        let mut post = Post::new(request.title, content);
        for field in &request.fields {
            let (key, value) = parse_field(field)?;
            post = post.with_field(key, value);
        }

        self.repository.save_or_update(post)
    }

    /// Save a post given as a JSON document
    pub fn import(&self, path: &Path) -> Result<FileName> {
        let text = fs::read_to_string(path)?;
        let post = PostCodec::default()
            .decode(&text)
            .map_err(|e| BlogpadError::format(path, e))?;

        self.repository.save_or_update(post)
    }
}

/// Split `KEY=VALUE`. The value is taken as JSON when it parses, otherwise as
/// a plain string.
pub fn parse_field(field: &str) -> Result<(String, Value)> {
    let (key, raw) = field.split_once('=').ok_or_else(|| {
        BlogpadError::Config(format!("Invalid field '{}': expected KEY=VALUE", field))
    })?;

    let key = key.trim();
    if key.is_empty() {
        return Err(BlogpadError::Config(format!(
            "Invalid field '{}': key must not be empty",
            field
        )));
    }
    if Post::is_reserved_field(key) {
        return Err(BlogpadError::Config(format!(
            "Invalid field '{}': '{}' is set by blogpad itself",
            field, key
        )));
    }

    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn service(temp: &TempDir) -> SavePostService<crate::infrastructure::FileSystemStorage> {
        SavePostService::new(PostRepository::open(temp.path(), "posts").unwrap())
    }

    #[test]
    fn test_parse_field_plain_string() {
        let (key, value) = parse_field("author=Duke").unwrap();
        assert_eq!(key, "author");
        assert_eq!(value, json!("Duke"));
    }

    #[test]
    fn test_parse_field_json_value() {
        assert_eq!(parse_field("tags=[\"a\",\"b\"]").unwrap().1, json!(["a", "b"]));
        assert_eq!(parse_field("draft=true").unwrap().1, json!(true));
        assert_eq!(parse_field("rating=5").unwrap().1, json!(5));
        assert_eq!(parse_field("formula=a=b").unwrap().1, json!("a=b"));
    }

    #[test]
    fn test_parse_field_errors() {
        assert!(parse_field("no-equals-sign").is_err());
        assert!(parse_field("=value").is_err());
        assert!(parse_field("createdAt=2020-01-01").is_err());
    }

    #[test]
    fn test_execute_inline_content_with_fields() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        let name = service
            .execute(SavePostRequest {
                title: "Hello".to_string(),
                content: ContentSource::Inline("World".to_string()),
                fields: vec!["author=duke".to_string()],
            })
            .unwrap();

        assert_eq!(name.as_str(), "Hello");
        let post = service.repository.get_post("Hello").unwrap().unwrap();
        assert_eq!(post.content, "World");
        assert_eq!(post.extra["author"], json!("duke"));
    }

    #[test]
    fn test_execute_content_from_file() {
        let temp = TempDir::new().unwrap();
        let body = temp.path().join("body.md");
        fs::write(&body, "# Heading\n\nText").unwrap();
        let service = service(&temp);

        service
            .execute(SavePostRequest {
                title: "From file".to_string(),
                content: ContentSource::File(body),
                fields: vec![],
            })
            .unwrap();

        let post = service.repository.get_post("From file").unwrap().unwrap();
        assert_eq!(post.content, "# Heading\n\nText");
    }

    #[test]
    fn test_import_json_document() {
        let temp = TempDir::new().unwrap();
        let doc = temp.path().join("post.json");
        fs::write(
            &doc,
            r#"{"title": "Imported", "content": "Body", "tags": ["x"]}"#,
        )
        .unwrap();
        let service = service(&temp);

        let name = service.import(&doc).unwrap();

        assert_eq!(name.as_str(), "Imported");
        let post = service.repository.get_post(&name).unwrap().unwrap();
        assert_eq!(post.extra["tags"], json!(["x"]));
        assert!(post.created_at.is_some());
    }

    #[test]
    fn test_import_malformed_document() {
        let temp = TempDir::new().unwrap();
        let doc = temp.path().join("post.json");
        fs::write(&doc, "title: nope").unwrap();

        let result = service(&temp).import(&doc);
        assert!(matches!(result, Err(BlogpadError::Format { .. })));
    }
}
