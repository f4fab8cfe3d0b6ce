//! `FileSystem` backed by the host operating system.

use super::{DirEntry, FileSystem, Metadata, SyncWrite};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn current_dir(&self) -> io::Result<PathBuf> {
        let cwd = std::env::current_dir()?;
        Ok(dunce::simplified(&cwd).to_path_buf())
    }

    fn resolve_absolute(&self, path: &Path) -> io::Result<PathBuf> {
        let joined = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.current_dir()?.join(path)
        };
        Ok(crate::path::normalize(dunce::simplified(&joined)))
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        if !fs::metadata(path)?.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is not a directory", path.display()),
            ));
        }

        let mut entries = Vec::new();
        for entry in WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
        {
            let entry = entry?;
            let name = entry.file_name().to_str().ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("non UTF-8 entry name in {}", path.display()),
                )
            })?;
            entries.push(DirEntry {
                name: name.to_string(),
                is_dir: entry.file_type().is_dir(),
            });
        }
        Ok(entries)
    }

    fn open_read(&self, path: &Path) -> io::Result<Box<dyn Read + Send>> {
        Ok(Box::new(fs::File::open(path)?))
    }

    fn open_write(&self, path: &Path) -> io::Result<Box<dyn SyncWrite>> {
        Ok(Box::new(fs::File::create(path)?))
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }

    fn stat(&self, path: &Path) -> io::Result<Metadata> {
        let meta = fs::metadata(path)?;
        Ok(Metadata {
            len: meta.len(),
            is_dir: meta.is_dir(),
            modified: meta.modified().ok(),
        })
    }

    /// Compares device and inode (file index on Windows), so symlinked
    /// directories and hard links are caught. A missing path matches nothing.
    fn same_file(&self, a: &Path, b: &Path) -> io::Result<bool> {
        match same_file::is_same_file(a, b) {
            Ok(same) => Ok(same),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }
}
