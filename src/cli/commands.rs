//! CLI command definitions

use crate::infrastructure::ConfigOverrides;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "blogpad")]
#[command(about = "File-backed blog post store", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Root storage directory (overrides BLOGPAD_STORAGE_DIR and blogpad.toml)
    #[arg(long, global = true, value_name = "DIR")]
    pub storage_dir: Option<PathBuf>,

    /// Subdirectory holding the posts (default: posts)
    #[arg(long, global = true, value_name = "NAME")]
    pub posts_subdir: Option<String>,

    /// Config file (default: ./blogpad.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Settings given as flags
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            storage_dir: self.storage_dir.clone(),
            posts_subdir: self.posts_subdir.clone(),
            pretty: None,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the posts directory
    Init,

    /// Save a new post or update an existing one
    Save {
        /// Post title
        title: String,

        /// Post body
        #[arg(short, long, conflicts_with = "content_file")]
        content: Option<String>,

        /// Read the post body from a file
        #[arg(long, value_name = "PATH")]
        content_file: Option<PathBuf>,

        /// Extra field as KEY=VALUE (VALUE may be JSON); repeatable
        #[arg(short, long = "field", value_name = "KEY=VALUE")]
        fields: Vec<String>,
    },

    /// Save a post given as a JSON document
    Import {
        /// JSON file with at least a "title"
        path: PathBuf,
    },

    /// Show one post
    Show {
        /// Post title, or encoded file name with --file-name
        key: String,

        /// Treat KEY as an encoded file name
        #[arg(long)]
        file_name: bool,

        /// Print the stored JSON document
        #[arg(long)]
        json: bool,
    },

    /// List posts, newest first
    List {
        /// Maximum number of posts to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}
