//! Configuration management

use crate::error::{BlogpadError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the current directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "blogpad.toml";
pub const DEFAULT_POSTS_SUBDIR: &str = "posts";

pub const STORAGE_DIR_ENV: &str = "BLOGPAD_STORAGE_DIR";
pub const POSTS_SUBDIR_ENV: &str = "BLOGPAD_POSTS_SUBDIR";

/// Resolved repository configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub storage_dir: PathBuf,
    pub posts_subdir: String,
    pub pretty: bool,
}

/// Settings that can be left unset at any one layer
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    pub storage_dir: Option<PathBuf>,
    pub posts_subdir: Option<String>,
    pub pretty: Option<bool>,
}

impl ConfigOverrides {
    /// Load settings from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                BlogpadError::Config(format!("Config file not found: {}", path.display()))
            } else {
                BlogpadError::Io(e)
            }
        })?;

        toml::from_str(&contents).map_err(|e| {
            BlogpadError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Read BLOGPAD_STORAGE_DIR and BLOGPAD_POSTS_SUBDIR
    pub fn from_env() -> Self {
        ConfigOverrides {
            storage_dir: std::env::var_os(STORAGE_DIR_ENV).map(PathBuf::from),
            posts_subdir: std::env::var(POSTS_SUBDIR_ENV).ok(),
            pretty: None,
        }
    }

    /// Values set in `other` win
    pub fn merge(self, other: ConfigOverrides) -> Self {
        ConfigOverrides {
            storage_dir: other.storage_dir.or(self.storage_dir),
            posts_subdir: other.posts_subdir.or(self.posts_subdir),
            pretty: other.pretty.or(self.pretty),
        }
    }

    pub fn into_config(self) -> Result<Config> {
        let storage_dir = self.storage_dir.ok_or_else(|| {
            BlogpadError::Config("No storage directory configured".to_string())
        })?;

        Ok(Config {
            storage_dir,
            posts_subdir: self
                .posts_subdir
                .unwrap_or_else(|| DEFAULT_POSTS_SUBDIR.to_string()),
            pretty: self.pretty.unwrap_or(true),
        })
    }
}

impl Config {
    /// Configuration with default subdirectory and formatting
    pub fn new(storage_dir: impl Into<PathBuf>) -> Self {
        Config {
            storage_dir: storage_dir.into(),
            posts_subdir: DEFAULT_POSTS_SUBDIR.to_string(),
            pretty: true,
        }
    }

    /// Resolve configuration: config file, then environment, then `cli`.
    ///
    /// Without an explicit `config_file`, `blogpad.toml` in `cwd` is used
    /// when present.
    pub fn resolve(cwd: &Path, config_file: Option<&Path>, cli: ConfigOverrides) -> Result<Self> {
        let file = match config_file {
            Some(path) => ConfigOverrides::load_from_file(path)?,
            None => {
                let default_path = cwd.join(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    ConfigOverrides::load_from_file(&default_path)?
                } else {
                    ConfigOverrides::default()
                }
            }
        };

        let mut resolved = file.merge(ConfigOverrides::from_env()).merge(cli);

        // Relative storage paths in a config file are relative to where blogpad runs
        if let Some(dir) = resolved.storage_dir.take() {
            resolved.storage_dir = Some(if dir.is_absolute() { dir } else { cwd.join(dir) });
        }

        resolved.into_config()
    }

    /// The directory posts are stored in
    pub fn posts_dir(&self) -> PathBuf {
        self.storage_dir.join(&self.posts_subdir)
    }
}
