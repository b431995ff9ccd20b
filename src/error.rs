//! Error types for blogpad

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The storage operation that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageOperation {
    Read,
    Write,
    List,
    Check,
}

impl fmt::Display for StorageOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StorageOperation::Read => "read",
            StorageOperation::Write => "write",
            StorageOperation::List => "list contents of",
            StorageOperation::Check => "check",
        };
        f.write_str(name)
    }
}

/// Main error type for blogpad
#[derive(Debug, Error)]
pub enum BlogpadError {
    #[error("Cannot initialize storage directory {}: {source}", path.display())]
    StorageInitialization {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot {operation} {}: {source}", path.display())]
    Storage {
        operation: StorageOperation,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed post file {}: {source}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid title: {0}")]
    InvalidTitle(String),

    #[error("Title collision on '{file_name}': stored post is '{stored}', incoming post is '{incoming}'")]
    TitleCollision {
        file_name: String,
        stored: String,
        incoming: String,
    },

    #[error("Post not found: {0}")]
    PostNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl BlogpadError {
    pub fn storage(
        operation: StorageOperation,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        BlogpadError::Storage {
            operation,
            path: path.into(),
            source,
        }
    }

    pub fn format(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        BlogpadError::Format {
            path: path.into(),
            source,
        }
    }

    /// True for failures while reading, writing or decoding stored posts
    pub fn is_storage_failure(&self) -> bool {
        matches!(
            self,
            BlogpadError::Storage { .. } | BlogpadError::Format { .. }
        )
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            BlogpadError::StorageInitialization { .. } => 2,
            BlogpadError::Storage { .. } | BlogpadError::Format { .. } => 3,
            BlogpadError::PostNotFound(_) => 4,
            BlogpadError::InvalidTitle(_) | BlogpadError::TitleCollision { .. } => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            BlogpadError::StorageInitialization { path, .. } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Make sure {} is a directory, not a file\n\
                    • Check write permissions on its parent directory\n\
                    • Point --storage-dir or BLOGPAD_STORAGE_DIR somewhere else",
                    self,
                    path.display()
                )
            }
            BlogpadError::Format { path, .. } => {
                format!(
                    "{}\n\n\
                    Every file in the posts directory must be a JSON post document.\n\
                    Fix or move {} out of the directory and retry.",
                    self,
                    path.display()
                )
            }
            BlogpadError::PostNotFound(title) => {
                format!(
                    "No post titled '{}'\n\n\
                    Suggestions:\n\
                    • Titles are case-sensitive and must match exactly\n\
                    • Use 'blogpad list' to see stored posts",
                    title
                )
            }
            BlogpadError::TitleCollision { .. } => {
                format!(
                    "{}\n\n\
                    The filesystem maps both titles to the same file (it may ignore case).\n\
                    Choose a different title for the new post.",
                    self
                )
            }
            BlogpadError::Config(msg) => {
                if msg.contains("storage directory") {
                    format!(
                        "{}\n\n\
                        Set one of:\n\
                        • --storage-dir <DIR>\n\
                        • BLOGPAD_STORAGE_DIR environment variable\n\
                        • storage_dir in blogpad.toml",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using BlogpadError
pub type Result<T> = std::result::Result<T, BlogpadError>;
