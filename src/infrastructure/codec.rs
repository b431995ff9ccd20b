//! Post serialization

use crate::domain::Post;

/// JSON codec for stored posts
#[derive(Debug, Clone, Copy)]
pub struct PostCodec {
    pretty: bool,
}

impl Default for PostCodec {
    fn default() -> Self {
        PostCodec { pretty: true }
    }
}

impl PostCodec {
    pub fn new(pretty: bool) -> Self {
        PostCodec { pretty }
    }

    pub fn encode(&self, post: &Post) -> serde_json::Result<String> {
        if self.pretty {
            serde_json::to_string_pretty(post)
        } else {
            serde_json::to_string(post)
        }
    }

    pub fn decode(&self, content: &str) -> serde_json::Result<Post> {
        serde_json::from_str(content)
    }
}
