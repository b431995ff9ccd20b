//! File storage primitives

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Byte-level file operations the post repository relies on
pub trait FileStorage {
    /// Create `path` (and parents) unless it already is a directory
    fn ensure_directory(&self, path: &Path) -> io::Result<()>;

    /// Write `content` to `dir/name`, replacing any existing file
    fn write(&self, dir: &Path, name: &str, content: &str) -> io::Result<PathBuf>;

    /// Read a whole file
    fn read(&self, path: &Path) -> io::Result<String>;

    fn exists(&self, path: &Path) -> io::Result<bool>;

    /// List regular files directly inside `dir`, skipping hidden ones
    fn list(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;
}

/// `FileStorage` backed by the local file system
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSystemStorage;

impl FileSystemStorage {
    pub fn new() -> Self {
        FileSystemStorage
    }

    fn is_hidden(path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with('.'))
    }
}

impl FileStorage for FileSystemStorage {
    fn ensure_directory(&self, path: &Path) -> io::Result<()> {
        if path.is_dir() {
            return Ok(());
        }
        if path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} exists but is not a directory", path.display()),
            ));
        }
        fs::create_dir_all(path)
    }

    /// Atomic replace: write to a hidden temp file in the same directory,
    /// then persist it over the destination.
    ///
    /// The temp name is short and random, so it fits wherever `name` fits and
    /// concurrent writers never share it.
    fn write(&self, dir: &Path, name: &str, content: &str) -> io::Result<PathBuf> {
        let path = dir.join(name);

        let mut tmp = tempfile::Builder::new().prefix(".tmp-").tempfile_in(dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&path).map_err(|e| e.error)?;

        Ok(path)
    }

    fn read(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> io::Result<bool> {
        path.try_exists()
    }

    fn list(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let path = entry.path();
            if Self::is_hidden(&path) {
                continue;
            }
            files.push(path);
        }

        // read_dir order is filesystem-defined
        files.sort();
        Ok(files)
    }
}
