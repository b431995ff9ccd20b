//! Title encoding
//!
//! A post title maps to its file name through form-urlencoding: ASCII
//! alphanumerics and `* - . _` stay as they are, a space becomes `+` and every
//! other byte becomes `%XX`. A leading `.` is escaped as `%2E` so a file name
//! is never `.`, `..` or a hidden file. The base encoding never emits `%2E`,
//! which keeps the mapping injective.

use crate::error::{BlogpadError, Result};
use std::fmt;
use std::path::Path;
use url::form_urlencoded;

/// Longest file name accepted by common filesystems, in bytes
pub const MAX_FILE_NAME_LEN: usize = 255;

const ESCAPED_DOT: &str = "%2E";

/// An encoded post title, usable as a single path segment
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileName(String);

impl FileName {
    /// Encode a title into its file name
    pub fn from_title(title: &str) -> Result<Self> {
        if title.is_empty() {
            return Err(BlogpadError::InvalidTitle(
                "title must not be empty".to_string(),
            ));
        }

        let encoded = encode(title);
        if encoded.len() > MAX_FILE_NAME_LEN {
            return Err(BlogpadError::InvalidTitle(format!(
                "encoded title is {} bytes long, at most {} are allowed",
                encoded.len(),
                MAX_FILE_NAME_LEN
            )));
        }

        Ok(FileName(encoded))
    }

    /// Accept an already-encoded file name.
    ///
    /// Only canonical encodings are accepted, so every `FileName` points at
    /// the same file `from_title` would produce for its title.
    pub fn parse(name: &str) -> Result<Self> {
        let title = decode(name);
        let canonical = Self::from_title(&title)?;
        if canonical.0 != name {
            return Err(BlogpadError::InvalidTitle(format!(
                "'{}' is not an encoded post file name (expected '{}')",
                name, canonical.0
            )));
        }
        Ok(canonical)
    }

    /// Decode back to the title
    pub fn title(&self) -> String {
        decode(&self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FileName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<Path> for FileName {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}

fn encode(title: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(title.as_bytes()).collect();
    match encoded.strip_prefix('.') {
        Some(rest) => format!("{}{}", ESCAPED_DOT, rest),
        None => encoded,
    }
}

fn decode(name: &str) -> String {
    // Encoded names never contain a raw '&' or '=', so the first key is the whole name
    form_urlencoded::parse(name.as_bytes())
        .next()
        .map(|(key, _)| key.into_owned())
        .unwrap_or_default()
}

/// How a caller identifies a stored post
#[derive(Debug, Clone, Copy)]
pub enum PostKey<'a> {
    /// A raw title, encoded on lookup
    Title(&'a str),
    /// A file name previously returned by the repository
    FileName(&'a FileName),
}

impl PostKey<'_> {
    pub fn resolve(&self) -> Result<FileName> {
        match self {
            PostKey::Title(title) => FileName::from_title(title),
            PostKey::FileName(name) => Ok((*name).clone()),
        }
    }
}

impl<'a> From<&'a str> for PostKey<'a> {
    fn from(title: &'a str) -> Self {
        PostKey::Title(title)
    }
}

impl<'a> From<&'a String> for PostKey<'a> {
    fn from(title: &'a String) -> Self {
        PostKey::Title(title.as_str())
    }
}

impl<'a> From<&'a FileName> for PostKey<'a> {
    fn from(name: &'a FileName) -> Self {
        PostKey::FileName(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn encoded(title: &str) -> String {
        FileName::from_title(title).unwrap().to_string()
    }

    #[test]
    fn test_plain_title_is_unchanged() {
        assert_eq!(encoded("Hello"), "Hello");
        assert_eq!(encoded("release-notes_v1.2"), "release-notes_v1.2");
    }

    #[test]
    fn test_space_and_separators_are_escaped() {
        assert_eq!(encoded("Hello World"), "Hello+World");
        assert_eq!(encoded("a/b\\c"), "a%2Fb%5Cc");
        assert_eq!(encoded("1+1=2"), "1%2B1%3D2");
    }

    #[test]
    fn test_non_ascii_is_percent_encoded() {
        assert_eq!(encoded("Grüße"), "Gr%C3%BC%C3%9Fe");
    }

    #[test]
    fn test_leading_dot_is_escaped() {
        assert_eq!(encoded("."), "%2E");
        assert_eq!(encoded(".."), "%2E.");
        assert_eq!(encoded(".hidden"), "%2Ehidden");
        assert_eq!(encoded("dots.inside."), "dots.inside.");
    }

    #[test]
    fn test_empty_title_is_rejected() {
        match FileName::from_title("") {
            Err(BlogpadError::InvalidTitle(msg)) => assert!(msg.contains("empty")),
            other => panic!("Expected InvalidTitle, got {:?}", other),
        }
    }

    #[test]
    fn test_overlong_title_is_rejected() {
        let title = "é".repeat(50); // 6 bytes each once encoded
        assert!(FileName::from_title(&title).is_err());

        let title = "a".repeat(MAX_FILE_NAME_LEN);
        assert!(FileName::from_title(&title).is_ok());
    }

    #[test]
    fn test_encoding_is_deterministic_and_collision_free() {
        let titles = [
            "Hello",
            "hello",
            "Hello World",
            "Hello+World",
            "Hello%20World",
            "Hello%2BWorld",
            ".",
            "..",
            "%2E",
            ".%2E",
            "a/b",
            "a%2Fb",
            "a b",
            "a+b",
            "a=b&c",
            "Grüße",
            "日本語のタイトル",
            "tab\tand\nnewline",
            "*-._",
        ];

        let mut seen = HashSet::new();
        for title in titles {
            let name = FileName::from_title(title).unwrap();
            assert_eq!(name, FileName::from_title(title).unwrap());
            assert!(seen.insert(name.clone()), "collision for {:?}", title);
            assert_eq!(name.title(), title);
        }
    }

    #[test]
    fn test_encoded_name_is_a_single_safe_segment() {
        for title in ["a/b", "../etc/passwd", "C:\\x", ".", "..", "nul\0byte"] {
            let name = FileName::from_title(title).unwrap();
            let path: &Path = name.as_ref();
            assert_eq!(path.components().count(), 1, "{:?}", name);
            assert!(!name.as_str().starts_with('.'));
            assert!(!name.as_str().contains('/'));
            assert!(!name.as_str().contains('\\'));
            assert!(!name.as_str().contains('\0'));
        }
    }

    #[test]
    fn test_parse_accepts_canonical_names() {
        let name = FileName::parse("Hello+World").unwrap();
        assert_eq!(name.title(), "Hello World");
        assert_eq!(name, FileName::from_title("Hello World").unwrap());
    }

    #[test]
    fn test_parse_rejects_non_canonical_names() {
        assert!(FileName::parse("Hello%20World").is_err());
        assert!(FileName::parse(".hidden").is_err());
        assert!(FileName::parse("a/b").is_err());
        assert!(FileName::parse("").is_err());
    }

    #[test]
    fn test_post_key_resolves_to_same_file() {
        let name = FileName::from_title("Hello World").unwrap();
        let title = String::from("Hello World");

        assert_eq!(PostKey::from("Hello World").resolve().unwrap(), name);
        assert_eq!(PostKey::from(&title).resolve().unwrap(), name);
        assert_eq!(PostKey::from(&name).resolve().unwrap(), name);
    }
}
