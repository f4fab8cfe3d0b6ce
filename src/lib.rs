//! fstree: Ordered Filesystem Subtree Model
//!
//! Builds a deterministic, sorted in-memory model of a directory subtree and
//! exposes file handles for reading, writing, copying and moving files. All
//! filesystem access goes through the `FileSystem` capability so the same
//! code runs against the host filesystem or an in-memory double.

pub mod config;
pub mod error;
pub mod file;
pub mod fs;
pub mod logging;
pub mod path;
pub mod tooling;
pub mod tree;

pub use error::{ApiError, FsError, IoOp};
pub use file::FileHandle;
pub use fs::{FileSystem, MemoryFileSystem, OsFileSystem};
pub use path::{decompose, PathParts};
pub use tree::{DirectoryNode, TreeBuilder, WalkerConfig};
