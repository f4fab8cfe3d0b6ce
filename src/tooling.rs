//! Tooling & Integration Layer
//!
//! Command-line front end built on the tree model and file handles.

pub mod cli;
pub mod format;

pub use cli::{Cli, CliContext, Commands};
