//! Recursive directory walk

use crate::error::{FsError, IoOp};
use crate::file::FileHandle;
use crate::fs::FileSystem;
use crate::tree::node::DirectoryNode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Walker configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkerConfig {
    /// Deepest directory that is listed; the root is depth 0. Directories
    /// below the limit still appear, with no children.
    #[serde(default)]
    pub max_depth: Option<usize>,

    /// Include entries whose name starts with `.`
    #[serde(default = "default_true")]
    pub include_hidden: bool,
}

fn default_true() -> bool {
    true
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            include_hidden: true,
        }
    }
}

/// Depth-first walk producing sorted `DirectoryNode`s.
pub struct Walker<'a> {
    fs: &'a dyn FileSystem,
    config: &'a WalkerConfig,
}

impl<'a> Walker<'a> {
    pub fn new(fs: &'a dyn FileSystem, config: &'a WalkerConfig) -> Self {
        Self { fs, config }
    }

    /// List `location` and recurse into its subdirectories. Entry names are
    /// joined onto `location`, never onto the process working directory.
    pub fn walk(
        &self,
        path: PathBuf,
        location: PathBuf,
        depth: usize,
    ) -> Result<DirectoryNode, FsError> {
        if self.config.max_depth.is_some_and(|max| depth > max) {
            return Ok(DirectoryNode::from_parts(
                path,
                location,
                Vec::new(),
                Vec::new(),
            ));
        }

        let entries = self
            .fs
            .list_dir(&location)
            .map_err(|e| FsError::io(IoOp::List, &location, e))?;
        debug!(dir = %location.display(), entries = entries.len(), "Listed directory");

        let mut subdirectories = Vec::new();
        let mut files = Vec::new();
        for entry in entries {
            if !self.is_included(&entry.name) {
                continue;
            }
            let child = location.join(&entry.name);
            if entry.is_dir {
                subdirectories.push(self.walk(PathBuf::from(&entry.name), child, depth + 1)?);
            } else {
                files.push(FileHandle::new(self.fs, &child)?);
            }
        }

        Ok(DirectoryNode::from_parts(path, location, subdirectories, files))
    }

    fn is_included(&self, name: &str) -> bool {
        if name == "." || name == ".." {
            return false;
        }
        self.config.include_hidden || !name.starts_with('.')
    }

    pub fn resolve_root(&self, root: &Path) -> Result<PathBuf, FsError> {
        self.fs
            .resolve_absolute(root)
            .map_err(|e| FsError::resolution(root, e))
    }
}
