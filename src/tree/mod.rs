//! Directory tree
//!
//! In-memory model of a directory subtree: each `DirectoryNode` owns its
//! sorted subdirectories and sorted file handles.

pub mod builder;
pub mod node;
pub mod walker;

pub use builder::TreeBuilder;
pub use node::DirectoryNode;
pub use walker::{Walker, WalkerConfig};
