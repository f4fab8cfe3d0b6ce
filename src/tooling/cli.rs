//! CLI Tooling
//!
//! Command-line front end over the tree model and file handles. Commands
//! return the text to print so they can be exercised without a process.

use crate::config::{ConfigLoader, FsTreeConfig};
use crate::error::ApiError;
use crate::file::FileHandle;
use crate::fs::{FileSystem, OsFileSystem};
use crate::logging::LoggingConfig;
use crate::tooling::format::{format_files_table, format_tree_text};
use crate::tree::{TreeBuilder, WalkerConfig};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// fstree - ordered directory trees and file operations
#[derive(Parser)]
#[command(name = "fstree")]
#[command(about = "Inspect directory trees and copy, move, read or write files")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Root directory for tree and listing commands
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Apply the logging flags on top of the loaded configuration.
    pub fn logging_config(&self, base: &LoggingConfig) -> LoggingConfig {
        let mut config = base.clone();
        if let Some(level) = &self.log_level {
            config.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            config.file = Some(file.clone());
        }
        config
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the directory tree under --root
    Tree {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List the files of one directory (defaults to --root)
    Files {
        /// Directory to list
        dir: Option<PathBuf>,
        /// Only files with this extension (without the dot)
        #[arg(long)]
        ext: Option<String>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Copy a file into a directory
    Copy {
        src: PathBuf,
        dest_dir: PathBuf,
        /// Name for the copy (defaults to the source name)
        #[arg(long)]
        rename: Option<String>,
    },
    /// Move a file into a directory (copy, then remove the source)
    Move {
        src: PathBuf,
        dest_dir: PathBuf,
        /// Name at the destination (defaults to the source name)
        #[arg(long)]
        rename: Option<String>,
    },
    /// Print a file's contents
    Cat { file: PathBuf },
    /// Replace a file's contents with TEXT
    Write { file: PathBuf, text: String },
}

/// Name used in logs for a command.
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Tree { .. } => "tree",
        Commands::Files { .. } => "files",
        Commands::Copy { .. } => "copy",
        Commands::Move { .. } => "move",
        Commands::Cat { .. } => "cat",
        Commands::Write { .. } => "write",
    }
}

/// Execution context: root directory, loaded configuration and filesystem.
pub struct CliContext {
    root: PathBuf,
    config: FsTreeConfig,
    fs: Arc<dyn FileSystem>,
}

impl CliContext {
    /// Create a context over the real filesystem.
    pub fn new(root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = match &config_path {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&root)?,
        };
        Ok(Self::with_filesystem(root, config, Arc::new(OsFileSystem)))
    }

    pub fn with_filesystem(
        root: PathBuf,
        config: FsTreeConfig,
        fs: Arc<dyn FileSystem>,
    ) -> Self {
        Self { root, config, fs }
    }

    pub fn config(&self) -> &FsTreeConfig {
        &self.config
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        info!(command = command_name(command), "Executing command");
        let fs = self.fs.as_ref();
        match command {
            Commands::Tree { format } => {
                let node = TreeBuilder::new(&self.root)
                    .with_walker_config(self.config.walk.clone())
                    .build(fs)?;
                match format.as_str() {
                    "json" => Ok(serde_json::to_string_pretty(&node)?),
                    _ => Ok(format_tree_text(&node)),
                }
            }
            Commands::Files { dir, ext, format } => {
                let dir = dir.clone().unwrap_or_else(|| self.root.clone());
                let walker_config = WalkerConfig {
                    max_depth: Some(0),
                    ..self.config.walk.clone()
                };
                let node = TreeBuilder::new(dir)
                    .with_walker_config(walker_config)
                    .build(fs)?;
                let files = match ext {
                    Some(ext) => node.filter_by_extension(ext.trim_start_matches('.')),
                    None => node.files().to_vec(),
                };
                match format.as_str() {
                    "json" => {
                        let rows: Vec<_> = files
                            .iter()
                            .map(|f| json!({ "name": f.name(), "path": f.full_path() }))
                            .collect();
                        Ok(serde_json::to_string_pretty(&rows)?)
                    }
                    _ => {
                        let title = node.location().display().to_string();
                        format_files_table(fs, &title, &files)
                    }
                }
            }
            Commands::Copy {
                src,
                dest_dir,
                rename,
            } => {
                let file = FileHandle::new(fs, src)?;
                let dest = match rename {
                    Some(name) => file.copy_and_rename(fs, dest_dir, name)?,
                    None => file.copy(fs, dest_dir)?,
                };
                Ok(format!(
                    "Copied {} -> {}",
                    file.full_path().display(),
                    dest.full_path().display()
                ))
            }
            Commands::Move {
                src,
                dest_dir,
                rename,
            } => {
                let file = FileHandle::new(fs, src)?;
                let dest = match rename {
                    Some(name) => file.move_and_rename(fs, dest_dir, name)?,
                    None => file.move_to(fs, dest_dir)?,
                };
                Ok(format!(
                    "Moved {} -> {}",
                    file.full_path().display(),
                    dest.full_path().display()
                ))
            }
            Commands::Cat { file } => {
                let contents = FileHandle::new(fs, file)?.read_all(fs)?;
                Ok(String::from_utf8_lossy(&contents).into_owned())
            }
            Commands::Write { file, text } => {
                let file = FileHandle::new(fs, file)?;
                file.write_string(fs, text)?;
                Ok(format!(
                    "Wrote {} bytes to {}",
                    text.len(),
                    file.full_path().display()
                ))
            }
        }
    }
}
