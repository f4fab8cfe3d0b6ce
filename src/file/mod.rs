//! File handles
//!
//! A `FileHandle` is the decomposed identity of one file (directory, base
//! name, extension). It owns no descriptor; every operation opens what it
//! needs through the `FileSystem` capability and releases it before
//! returning, on success and on error alike.

mod transfer;

use crate::error::{FsError, IoOp};
use crate::fs::{FileSystem, Metadata, SyncWrite};
use crate::path::decompose;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Identity of a single file. Equal iff directory, base and extension match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileHandle {
    dir: PathBuf,
    base: String,
    ext: String,
}

impl FileHandle {
    /// Decompose `path` (resolved against the capability's working directory).
    pub fn new(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<Self, FsError> {
        let parts = decompose(fs, path)?;
        Ok(FileHandle {
            dir: parts.dir,
            base: parts.base,
            ext: parts.ext,
        })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.dir.as_os_str().is_empty() && self.base.is_empty() && self.ext.is_empty()
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn ext(&self) -> &str {
        &self.ext
    }

    /// Base name plus extension.
    pub fn name(&self) -> String {
        format!("{}{}", self.base, self.ext)
    }

    pub fn full_path(&self) -> PathBuf {
        self.dir.join(self.name())
    }

    pub fn stat(&self, fs: &dyn FileSystem) -> Result<Metadata, FsError> {
        let path = self.full_path();
        fs.stat(&path).map_err(|e| FsError::io(IoOp::Stat, path, e))
    }

    /// Open for writing, creating or truncating the file.
    pub fn create(&self, fs: &dyn FileSystem) -> Result<Box<dyn SyncWrite>, FsError> {
        let path = self.full_path();
        debug!(path = %path.display(), "Creating file");
        fs.open_write(&path)
            .map_err(|e| FsError::io(IoOp::Create, path, e))
    }

    pub fn open(&self, fs: &dyn FileSystem) -> Result<Box<dyn Read + Send>, FsError> {
        let path = self.full_path();
        fs.open_read(&path).map_err(|e| FsError::io(IoOp::Open, path, e))
    }

    pub fn remove(&self, fs: &dyn FileSystem) -> Result<(), FsError> {
        let path = self.full_path();
        debug!(path = %path.display(), "Removing file");
        fs.remove_file(&path)
            .map_err(|e| FsError::io(IoOp::Remove, path, e))
    }

    pub fn read_all(&self, fs: &dyn FileSystem) -> Result<Vec<u8>, FsError> {
        let path = self.full_path();
        let mut reader = fs
            .open_read(&path)
            .map_err(|e| FsError::io(IoOp::Read, &path, e))?;
        let mut contents = Vec::new();
        reader
            .read_to_end(&mut contents)
            .map_err(|e| FsError::io(IoOp::Read, &path, e))?;
        Ok(contents)
    }

    /// Truncate, write `contents`, and sync to stable storage. A failure part
    /// way through leaves whatever was written in place.
    pub fn write_bytes(&self, fs: &dyn FileSystem, contents: &[u8]) -> Result<(), FsError> {
        let path = self.full_path();
        let mut out = self.create(fs)?;
        out.write_all(contents)
            .map_err(|e| FsError::io(IoOp::Write, &path, e))?;
        out.flush().map_err(|e| FsError::io(IoOp::Flush, &path, e))?;
        out.sync_all()
            .map_err(|e| FsError::io(IoOp::Sync, &path, e))?;
        debug!(path = %path.display(), bytes = contents.len(), "Wrote file");
        Ok(())
    }

    pub fn write_string(&self, fs: &dyn FileSystem, contents: &str) -> Result<(), FsError> {
        self.write_bytes(fs, contents.as_bytes())
    }
}
