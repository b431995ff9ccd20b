//! Domain layer - Posts and their storage keys

pub mod file_name;
pub mod post;

pub use file_name::{FileName, PostKey, MAX_FILE_NAME_LEN};
pub use post::Post;
