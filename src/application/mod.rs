//! Application layer - Use cases and orchestration

pub mod init;
pub mod list_posts;
pub mod save_post;
pub mod show_post;

pub use list_posts::list_posts;
pub use save_post::{ContentSource, SavePostRequest, SavePostService};
pub use show_post::show_post;
