//! Filesystem capability
//!
//! Every side effect in this crate flows through the `FileSystem` trait. The
//! model types (`FileHandle`, `DirectoryNode`) are plain data and take the
//! capability as an argument, so the same code runs against the real
//! filesystem (`OsFileSystem`) or an in-memory double (`MemoryFileSystem`).

pub mod memory;
pub mod os;

pub use memory::MemoryFileSystem;
pub use os::OsFileSystem;

use crate::path::normalize;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// One entry of a directory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}

/// File metadata returned by `stat`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub len: u64,
    pub is_dir: bool,
    pub modified: Option<SystemTime>,
}

/// A writable stream that can be flushed to stable storage.
pub trait SyncWrite: Write + Send {
    fn sync_all(&mut self) -> io::Result<()>;
}

impl SyncWrite for std::fs::File {
    fn sync_all(&mut self) -> io::Result<()> {
        std::fs::File::sync_all(self)
    }
}

/// Filesystem operations consumed by the tree model and file handles.
pub trait FileSystem: Send + Sync {
    /// Base for resolving relative paths.
    fn current_dir(&self) -> io::Result<PathBuf>;

    /// Join `path` onto the current directory when relative and clean it
    /// lexically. Symlinks are not resolved.
    fn resolve_absolute(&self, path: &Path) -> io::Result<PathBuf> {
        if path.is_absolute() {
            return Ok(normalize(path));
        }
        Ok(normalize(&self.current_dir()?.join(path)))
    }

    /// Immediate children of `path`. Symlinks are reported as non-directories.
    fn list_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>>;

    fn open_read(&self, path: &Path) -> io::Result<Box<dyn Read + Send>>;

    /// Create or truncate `path` for writing.
    fn open_write(&self, path: &Path) -> io::Result<Box<dyn SyncWrite>>;

    fn remove_file(&self, path: &Path) -> io::Result<()>;

    fn stat(&self, path: &Path) -> io::Result<Metadata>;

    /// Whether `a` and `b` reach the same file, through links or aliases.
    /// The default compares resolved paths lexically.
    fn same_file(&self, a: &Path, b: &Path) -> io::Result<bool> {
        Ok(self.resolve_absolute(a)? == self.resolve_absolute(b)?)
    }
}
