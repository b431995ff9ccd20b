//! blogpad - File-backed blog post store
//!
//! Every post lives in one JSON file named after its encoded title. The
//! repository decides whether a save creates or updates a post, keeps the
//! original creation time across updates, and lists posts newest first.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::{FileName, Post, PostKey};
pub use error::BlogpadError;
pub use infrastructure::{Config, PostRepository};
