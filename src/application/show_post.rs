//! Show a single post use case

use crate::domain::{FileName, Post};
use crate::error::{BlogpadError, Result};
use crate::infrastructure::{FileStorage, PostRepository};

/// Fetch a post by title, or by encoded file name when `by_file_name` is set.
///
/// Unlike the repository, a missing post is an error here.
pub fn show_post<S: FileStorage>(
    repository: &PostRepository<S>,
    key: &str,
    by_file_name: bool,
) -> Result<Post> {
    let found = if by_file_name {
        let name = FileName::parse(key)?;
        repository.get_post(&name)?
    } else {
        repository.get_post(key)?
    };

    found.ok_or_else(|| BlogpadError::PostNotFound(key.to_string()))
}
