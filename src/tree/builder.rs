//! Tree builder
//!
//! Resolves the root once and drives the walker. A failure anywhere in the
//! walk is returned as a single `Walk` error for the root; no partial tree is
//! handed back.

use crate::error::FsError;
use crate::fs::FileSystem;
use crate::tree::node::DirectoryNode;
use crate::tree::walker::{Walker, WalkerConfig};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// Builds a `DirectoryNode` tree for a root path
pub struct TreeBuilder {
    root: PathBuf,
    walker_config: WalkerConfig,
}

impl TreeBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            walker_config: WalkerConfig::default(),
        }
    }

    pub fn with_walker_config(mut self, config: WalkerConfig) -> Self {
        self.walker_config = config;
        self
    }

    /// Walk the root. The returned node's `path()` is the root exactly as given.
    pub fn build(&self, fs: &dyn FileSystem) -> Result<DirectoryNode, FsError> {
        let started = Instant::now();
        let walker = Walker::new(fs, &self.walker_config);
        let node = walker
            .resolve_root(&self.root)
            .and_then(|location| walker.walk(self.root.clone(), location, 0))
            .map_err(|e| FsError::walk(&self.root, e))?;

        info!(
            root = %self.root.display(),
            directories = node.total_directories(),
            files = node.total_files(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Built directory tree"
        );
        Ok(node)
    }
}
