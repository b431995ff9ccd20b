//! Output formatting utilities

use crate::domain::{FileName, Post};

/// Format a list of posts for display
pub fn format_post_list(posts: &[Post]) -> String {
    if posts.is_empty() {
        return "No posts found".to_string();
    }

    let mut output = String::new();
    for post in posts {
        let file = FileName::from_title(&post.title)
            .map(|name| name.to_string())
            .unwrap_or_default();
        match post.created_at {
            Some(created) => output.push_str(&format!(
                "{}  {}  ({})\n",
                created.format("%Y-%m-%d %H:%M"),
                post.title,
                file
            )),
            // No creation time yet - pad to keep titles aligned
            None => output.push_str(&format!(
                "                  {}  ({})\n",
                post.title, file
            )),
        }
    }
    output
}

/// Format one post with its header fields
pub fn format_post(post: &Post) -> String {
    let mut output = format!("# {}\n", post.title);
    if let Some(created) = post.created_at {
        output.push_str(&format!("created: {}\n", created.to_rfc3339()));
    }
    for (key, value) in &post.extra {
        match value.as_str() {
            Some(text) => output.push_str(&format!("{}: {}\n", key, text)),
            None => output.push_str(&format!("{}: {}\n", key, value)),
        }
    }
    output.push('\n');
    output.push_str(&post.content);
    output
}
