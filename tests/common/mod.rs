#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn blogpad_cmd() -> Command {
    let mut cmd = Command::cargo_bin("blogpad").unwrap();
    cmd.env_remove("BLOGPAD_STORAGE_DIR");
    cmd.env_remove("BLOGPAD_POSTS_SUBDIR");
    cmd.env_remove("BLOGPAD_LOG");
    cmd
}

/// Command running in `dir` with `dir` as storage root
pub fn blogpad_in(dir: &Path) -> Command {
    let mut cmd = blogpad_cmd();
    cmd.current_dir(dir).arg("--storage-dir").arg(dir);
    cmd
}
