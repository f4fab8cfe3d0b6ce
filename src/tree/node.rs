//! Directory node representation

use crate::error::FsError;
use crate::file::FileHandle;
use crate::fs::FileSystem;
use crate::tree::builder::TreeBuilder;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// One directory and its immediate children.
///
/// Subdirectories are kept sorted by path and files by name. Every insertion
/// re-sorts the whole sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryNode {
    path: PathBuf,
    #[serde(skip)]
    location: PathBuf,
    subdirectories: Vec<DirectoryNode>,
    files: Vec<FileHandle>,
}

impl DirectoryNode {
    /// Unpopulated node. `path` doubles as the location files are created in.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        DirectoryNode {
            location: path.clone(),
            path,
            subdirectories: Vec::new(),
            files: Vec::new(),
        }
    }

    /// Walk `root` with the default walker configuration.
    pub fn populate(fs: &dyn FileSystem, root: impl AsRef<Path>) -> Result<Self, FsError> {
        TreeBuilder::new(root.as_ref()).build(fs)
    }

    pub(crate) fn from_parts(
        path: PathBuf,
        location: PathBuf,
        subdirectories: Vec<DirectoryNode>,
        files: Vec<FileHandle>,
    ) -> Self {
        let mut node = DirectoryNode {
            path,
            location,
            subdirectories,
            files,
        };
        node.sort_subdirectories();
        node.sort_files();
        node
    }

    fn sort_subdirectories(&mut self) {
        self.subdirectories
            .sort_by(|a, b| a.path.as_os_str().cmp(b.path.as_os_str()));
    }

    fn sort_files(&mut self) {
        self.files.sort_by_key(|file| file.name());
    }

    /// Path as given at construction; a bare name for nodes found during a walk.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Absolute directory this node was listed from.
    pub fn location(&self) -> &Path {
        &self.location
    }

    pub fn subdirectories(&self) -> &[DirectoryNode] {
        &self.subdirectories
    }

    pub fn files(&self) -> &[FileHandle] {
        &self.files
    }

    /// Files directly in this directory whose extension is `.{ext}`.
    pub fn filter_by_extension(&self, ext: &str) -> Vec<FileHandle> {
        let wanted = format!(".{}", ext);
        self.files
            .iter()
            .filter(|file| file.ext() == wanted)
            .cloned()
            .collect()
    }

    /// Register `name` in this directory. Nothing is written to disk; call
    /// `create` or `write_bytes` on the returned handle to materialize it.
    pub fn create_file(
        &mut self,
        fs: &dyn FileSystem,
        name: &str,
    ) -> Result<FileHandle, FsError> {
        let file = FileHandle::new(fs, self.location.join(name))?;
        self.files.push(file.clone());
        self.sort_files();
        Ok(file)
    }

    /// Direct child directory by path.
    pub fn subdirectory(&self, path: impl AsRef<Path>) -> Option<&DirectoryNode> {
        let path = path.as_ref();
        self.subdirectories.iter().find(|dir| dir.path == path)
    }

    /// Number of directories below this one, at any depth.
    pub fn total_directories(&self) -> usize {
        self.subdirectories
            .iter()
            .map(|dir| 1 + dir.total_directories())
            .sum()
    }

    /// Number of files in this directory and all directories below it.
    pub fn total_files(&self) -> usize {
        self.files.len()
            + self
                .subdirectories
                .iter()
                .map(DirectoryNode::total_files)
                .sum::<usize>()
    }
}
