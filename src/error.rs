//! Error types
//!
//! `FsError` covers the filesystem model (decomposition, handle I/O, walks).
//! `ApiError` is the outer surface used by configuration, logging and the CLI.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The step of a filesystem operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoOp {
    List,
    Open,
    Create,
    Read,
    Write,
    Flush,
    Sync,
    Copy,
    Remove,
    Stat,
}

impl fmt::Display for IoOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IoOp::List => "list",
            IoOp::Open => "open",
            IoOp::Create => "create",
            IoOp::Read => "read",
            IoOp::Write => "write",
            IoOp::Flush => "flush",
            IoOp::Sync => "sync",
            IoOp::Copy => "copy",
            IoOp::Remove => "remove",
            IoOp::Stat => "stat",
        };
        f.write_str(name)
    }
}

/// Filesystem model errors
#[derive(Debug, Error)]
pub enum FsError {
    #[error("Failed to resolve absolute path for {}", path.display())]
    PathResolution {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Not found: {}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to {op} {}", path.display())]
    Io {
        op: IoOp,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Walk of {} aborted", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: Box<FsError>,
    },
}

impl FsError {
    pub(crate) fn resolution(path: impl Into<PathBuf>, source: io::Error) -> Self {
        FsError::PathResolution {
            path: path.into(),
            source,
        }
    }

    /// Wrap an I/O failure. Only `open` and `stat` report a missing target as
    /// `NotFound`; every other step reports it as `Io`.
    pub(crate) fn io(op: IoOp, path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound && matches!(op, IoOp::Open | IoOp::Stat) {
            return FsError::NotFound { path, source };
        }
        FsError::Io { op, path, source }
    }

    pub(crate) fn walk(path: impl Into<PathBuf>, source: FsError) -> Self {
        FsError::Walk {
            path: path.into(),
            source: Box::new(source),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FsError::NotFound { .. })
    }

    /// The innermost error, looking through any `Walk` wrappers.
    pub fn root_cause(&self) -> &FsError {
        match self {
            FsError::Walk { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Errors surfaced by the command-line and configuration layers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Filesystem error: {0}")]
    Fs(#[from] FsError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
