//! Initialize post storage use case

use crate::error::Result;
use crate::infrastructure::{Config, PostRepository};
use std::path::PathBuf;

/// Create the posts directory described by `config`.
///
/// Returns the resolved directory.
pub fn init(config: &Config) -> Result<PathBuf> {
    let repo = PostRepository::from_config(config)?;
    Ok(repo.directory().to_path_buf())
}
