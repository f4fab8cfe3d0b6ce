//! Path decomposition
//!
//! Splits a path into absolute parent directory, base name and extension.
//! The extension is everything from the last `.` of the final segment, dot
//! included. A segment whose only dot is its first character (`.bashrc`) has
//! no extension.

use crate::error::FsError;
use crate::fs::FileSystem;
use std::io;
use std::path::{Component, Path, PathBuf};

/// The three parts a `FileHandle` is built from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathParts {
    pub dir: PathBuf,
    pub base: String,
    pub ext: String,
}

/// Resolve `path` against the capability's working directory and split it.
pub fn decompose(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<PathParts, FsError> {
    let path = path.as_ref();
    let abs = fs
        .resolve_absolute(path)
        .map_err(|e| FsError::resolution(path, e))?;

    let name = match abs.file_name() {
        Some(name) => name.to_str().ok_or_else(|| {
            FsError::resolution(
                path,
                io::Error::new(io::ErrorKind::InvalidData, "file name is not valid UTF-8"),
            )
        })?,
        // Filesystem root: no name to split.
        None => "",
    };
    let dir = abs.parent().map(Path::to_path_buf).unwrap_or_else(|| abs.clone());
    let (base, ext) = split_extension(name);

    Ok(PathParts {
        dir,
        base: base.to_string(),
        ext: ext.to_string(),
    })
}

/// Split a single path segment into base and extension.
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(0) | None => (name, ""),
        Some(idx) => name.split_at(idx),
    }
}

/// Lexically clean a path: drop `.` segments and let `..` pop its parent.
/// `..` never climbs above the root of an absolute path.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => out.push(prefix.as_os_str()),
            Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                let popped = matches!(
                    out.components().next_back(),
                    Some(Component::Normal(_))
                ) && out.pop();
                if !popped && !out.has_root() {
                    out.push("..");
                }
            }
            Component::Normal(name) => out.push(name),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}
