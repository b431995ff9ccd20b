//! List posts use case

use crate::domain::Post;
use crate::error::Result;
use crate::infrastructure::{FileStorage, PostRepository};

/// Posts newest first, all of them when `limit` is `None`
pub fn list_posts<S: FileStorage>(
    repository: &PostRepository<S>,
    limit: Option<usize>,
) -> Result<Vec<Post>> {
    match limit {
        Some(max) => repository.recent_posts(max),
        None => repository.all_posts(),
    }
}
