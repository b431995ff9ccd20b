//! File system post repository

use crate::domain::{FileName, Post, PostKey};
use crate::error::{BlogpadError, Result, StorageOperation};
use crate::infrastructure::codec::PostCodec;
use crate::infrastructure::storage::{FileStorage, FileSystemStorage};
use crate::infrastructure::Config;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::path::{Path, PathBuf};

/// Stores one post per file inside a single working directory.
///
/// The working directory is resolved and created once, when the repository
/// is opened. The repository holds no locks: two concurrent saves of the
/// same title race and the last write wins.
#[derive(Debug, Clone)]
pub struct PostRepository<S = FileSystemStorage> {
    directory: PathBuf,
    storage: S,
    codec: PostCodec,
}

impl PostRepository<FileSystemStorage> {
    /// Open `<root>/<subdir>` on the local file system, creating it if needed
    pub fn open(root: impl AsRef<Path>, subdir: &str) -> Result<Self> {
        Self::with_storage(FileSystemStorage::new(), root, subdir)
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::open(&config.storage_dir, &config.posts_subdir)?
            .with_codec(PostCodec::new(config.pretty)))
    }
}

impl<S: FileStorage> PostRepository<S> {
    /// Open `<root>/<subdir>` through the given storage
    pub fn with_storage(storage: S, root: impl AsRef<Path>, subdir: &str) -> Result<Self> {
        let directory = root.as_ref().join(subdir);

        storage
            .ensure_directory(&directory)
            .map_err(|source| BlogpadError::StorageInitialization {
                path: directory.clone(),
                source,
            })?;

        tracing::info!(directory = %directory.display(), "post storage ready");

        Ok(PostRepository {
            directory,
            storage,
            codec: PostCodec::default(),
        })
    }

    pub fn with_codec(mut self, codec: PostCodec) -> Self {
        self.codec = codec;
        self
    }

    /// The working directory all posts live in
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Save a new post or update the stored post with the same title.
    ///
    /// Returns the file name the post was written to.
    pub fn save_or_update(&self, post: Post) -> Result<FileName> {
        self.save_or_update_at(post, Utc::now())
    }

    /// Like [`save_or_update`](Self::save_or_update), with `now` as the
    /// creation time of new posts.
    pub fn save_or_update_at(&self, post: Post, now: DateTime<Utc>) -> Result<FileName> {
        let file_name = FileName::from_title(&post.title)?;

        let post = match self.load(&file_name)? {
            Some(existing) => {
                if existing.title != post.title {
                    return Err(BlogpadError::TitleCollision {
                        file_name: file_name.to_string(),
                        stored: existing.title,
                        incoming: post.title,
                    });
                }
                tracing::info!(title = %post.title, file = %file_name, "updating post");
                post.updating(&existing, now)
            }
            None => {
                tracing::info!(title = %post.title, file = %file_name, "creating post");
                post.created(now)
            }
        };

        let path = self.path_of(&file_name);
        let content = self
            .codec
            .encode(&post)
            .map_err(|e| BlogpadError::format(&path, e))?;

        self.storage
            .write(&self.directory, file_name.as_str(), &content)
            .map_err(|e| BlogpadError::storage(StorageOperation::Write, &path, e))?;

        Ok(file_name)
    }

    /// Fetch a post by title or by the file name it was saved under.
    ///
    /// A missing post is `Ok(None)`; an unreadable or corrupt one is an error.
    pub fn get_post<'a>(&self, key: impl Into<PostKey<'a>>) -> Result<Option<Post>> {
        let file_name = key.into().resolve()?;
        self.load(&file_name)
    }

    /// Every stored post, newest first
    pub fn all_posts(&self) -> Result<Vec<Post>> {
        self.recent_posts(usize::MAX)
    }

    /// At most `max` posts, newest first.
    ///
    /// Posts created at the same instant are ordered by title. A single
    /// corrupt file fails the whole listing.
    pub fn recent_posts(&self, max: usize) -> Result<Vec<Post>> {
        let files = self
            .storage
            .list(&self.directory)
            .map_err(|e| BlogpadError::storage(StorageOperation::List, &self.directory, e))?;

        let mut posts = files
            .iter()
            .map(|path| self.read_post(path))
            .collect::<Result<Vec<_>>>()?;

        posts.sort_by(newest_first);
        posts.truncate(max);

        Ok(posts)
    }

    fn path_of(&self, file_name: &FileName) -> PathBuf {
        self.directory.join(file_name.as_str())
    }

    fn load(&self, file_name: &FileName) -> Result<Option<Post>> {
        let path = self.path_of(file_name);
        tracing::debug!(file = %file_name, "fetching post");

        let exists = self
            .storage
            .exists(&path)
            .map_err(|e| BlogpadError::storage(StorageOperation::Check, &path, e))?;
        if !exists {
            tracing::debug!(file = %file_name, "post does not exist");
            return Ok(None);
        }

        self.read_post(&path).map(Some)
    }

    fn read_post(&self, path: &Path) -> Result<Post> {
        let content = self
            .storage
            .read(path)
            .map_err(|e| BlogpadError::storage(StorageOperation::Read, path, e))?;

        self.codec.decode(&content).map_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "corrupt post file");
            BlogpadError::format(path, e)
        })
    }
}

fn newest_first(a: &Post, b: &Post) -> Ordering {
    b.created_at
        .cmp(&a.created_at)
        .then_with(|| a.title.cmp(&b.title))
}
