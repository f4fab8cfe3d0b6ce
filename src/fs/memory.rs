//! In-memory `FileSystem` used as a test double and for benchmarks.
//!
//! Paths are normalized on the way in, so `/a/./b` and `/a/b` name the same
//! entry. Parent directories must exist before files are written into them,
//! matching what the host filesystem enforces.

use super::{DirEntry, FileSystem, Metadata, SyncWrite};
use crate::path::normalize;
use parking_lot::RwLock;
use std::collections::{BTreeMap, BTreeSet};
use std::ops::Bound;
use std::io::{self, Cursor, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Clone)]
enum Node {
    Dir,
    File(Vec<u8>),
}

#[derive(Debug)]
struct State {
    nodes: BTreeMap<PathBuf, Node>,
    locked: BTreeSet<PathBuf>,
    cwd: Option<PathBuf>,
}

/// Shared, cloneable in-memory filesystem rooted at `/`.
#[derive(Debug, Clone)]
pub struct MemoryFileSystem {
    state: Arc<RwLock<State>>,
}

impl Default for MemoryFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryFileSystem {
    /// Empty filesystem with `/` as the only directory and current directory.
    pub fn new() -> Self {
        let mut nodes = BTreeMap::new();
        nodes.insert(PathBuf::from("/"), Node::Dir);
        Self {
            state: Arc::new(RwLock::new(State {
                nodes,
                locked: BTreeSet::new(),
                cwd: Some(PathBuf::from("/")),
            })),
        }
    }

    /// Set the directory relative paths resolve against.
    pub fn with_current_dir(self, dir: impl AsRef<Path>) -> Self {
        let dir = normalize(&Path::new("/").join(dir.as_ref()));
        self.state.write().cwd = Some(dir);
        self
    }

    /// Make `current_dir` fail, as when the process working directory was deleted.
    pub fn clear_current_dir(&self) {
        self.state.write().cwd = None;
    }

    pub fn create_dir_all(&self, path: impl AsRef<Path>) {
        let path = self.key(path.as_ref());
        let mut state = self.state.write();
        for ancestor in path.ancestors() {
            state
                .nodes
                .entry(ancestor.to_path_buf())
                .or_insert(Node::Dir);
        }
    }

    /// Write a file, creating missing parent directories.
    pub fn write(&self, path: impl AsRef<Path>, contents: impl AsRef<[u8]>) {
        let path = self.key(path.as_ref());
        if let Some(parent) = path.parent() {
            self.create_dir_all(parent);
        }
        self.state
            .write()
            .nodes
            .insert(path, Node::File(contents.as_ref().to_vec()));
    }

    pub fn contents(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        let path = self.key(path.as_ref());
        match self.state.read().nodes.get(&path) {
            Some(Node::File(data)) => Some(data.clone()),
            _ => None,
        }
    }

    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        let path = self.key(path.as_ref());
        self.state.read().nodes.contains_key(&path)
    }

    /// Make writes to and removal of `path` fail with `PermissionDenied`.
    pub fn lock(&self, path: impl AsRef<Path>) {
        let path = self.key(path.as_ref());
        self.state.write().locked.insert(path);
    }

    pub fn unlock(&self, path: impl AsRef<Path>) {
        let path = self.key(path.as_ref());
        self.state.write().locked.remove(&path);
    }

    fn key(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            return normalize(path);
        }
        let base = self
            .state
            .read()
            .cwd
            .clone()
            .unwrap_or_else(|| PathBuf::from("/"));
        normalize(&base.join(path))
    }

    fn check_unlocked(&self, path: &Path) -> io::Result<()> {
        if self.state.read().locked.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("{} is locked", path.display()),
            ));
        }
        Ok(())
    }
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("{} does not exist", path.display()),
    )
}

fn wrong_kind(path: &Path, expected: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("{} is not a {}", path.display(), expected),
    )
}

impl FileSystem for MemoryFileSystem {
    fn current_dir(&self) -> io::Result<PathBuf> {
        self.state.read().cwd.clone().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "current directory is unavailable")
        })
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let path = self.key(path);
        let state = self.state.read();
        match state.nodes.get(&path) {
            Some(Node::Dir) => {}
            Some(Node::File(_)) => return Err(wrong_kind(&path, "directory")),
            None => return Err(not_found(&path)),
        }
        // Descendants of `path` sort directly after it, so the scan stops at
        // the first key outside the subtree.
        let entries = state
            .nodes
            .range::<Path, _>((Bound::Excluded(path.as_path()), Bound::Unbounded))
            .take_while(|(child, _)| child.starts_with(&path))
            .filter(|(child, _)| child.parent() == Some(path.as_path()))
            .filter_map(|(child, node)| {
                let name = child.file_name()?.to_str()?.to_string();
                Some(DirEntry {
                    name,
                    is_dir: matches!(node, Node::Dir),
                })
            })
            .collect();
        Ok(entries)
    }

    fn open_read(&self, path: &Path) -> io::Result<Box<dyn Read + Send>> {
        let path = self.key(path);
        match self.state.read().nodes.get(&path) {
            Some(Node::File(data)) => Ok(Box::new(Cursor::new(data.clone()))),
            Some(Node::Dir) => Err(wrong_kind(&path, "file")),
            None => Err(not_found(&path)),
        }
    }

    fn open_write(&self, path: &Path) -> io::Result<Box<dyn SyncWrite>> {
        let path = self.key(path);
        self.check_unlocked(&path)?;
        let mut state = self.state.write();
        let parent = path
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| wrong_kind(&path, "file"))?;
        match state.nodes.get(&parent) {
            Some(Node::Dir) => {}
            Some(Node::File(_)) => return Err(wrong_kind(&parent, "directory")),
            None => return Err(not_found(&parent)),
        }
        if let Some(Node::Dir) = state.nodes.get(&path) {
            return Err(wrong_kind(&path, "file"));
        }
        state.nodes.insert(path.clone(), Node::File(Vec::new()));
        Ok(Box::new(MemoryWriter {
            state: Arc::clone(&self.state),
            path,
        }))
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        let path = self.key(path);
        self.check_unlocked(&path)?;
        let mut state = self.state.write();
        match state.nodes.get(&path) {
            Some(Node::File(_)) => {
                state.nodes.remove(&path);
                Ok(())
            }
            Some(Node::Dir) => Err(wrong_kind(&path, "file")),
            None => Err(not_found(&path)),
        }
    }

    fn stat(&self, path: &Path) -> io::Result<Metadata> {
        let path = self.key(path);
        match self.state.read().nodes.get(&path) {
            Some(Node::File(data)) => Ok(Metadata {
                len: data.len() as u64,
                is_dir: false,
                modified: None,
            }),
            Some(Node::Dir) => Ok(Metadata {
                len: 0,
                is_dir: true,
                modified: None,
            }),
            None => Err(not_found(&path)),
        }
    }

    fn same_file(&self, a: &Path, b: &Path) -> io::Result<bool> {
        let (a, b) = (self.key(a), self.key(b));
        Ok(a == b && self.state.read().nodes.contains_key(&a))
    }
}

/// Appends straight into the shared map so partial writes stay visible.
struct MemoryWriter {
    state: Arc<RwLock<State>>,
    path: PathBuf,
}

impl Write for MemoryWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut state = self.state.write();
        match state.nodes.get_mut(&self.path) {
            Some(Node::File(data)) => {
                data.extend_from_slice(buf);
                Ok(buf.len())
            }
            _ => Err(not_found(&self.path)),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl SyncWrite for MemoryWriter {
    fn sync_all(&mut self) -> io::Result<()> {
        Ok(())
    }
}
