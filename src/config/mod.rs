//! Configuration
//!
//! Layered loading with the `config` crate. Precedence, lowest to highest:
//! built-in defaults, global file (`$XDG_CONFIG_HOME/fstree/config.toml`),
//! workspace file (`<root>/.fstree.toml`), `FSTREE__*` environment variables.

pub mod facade;
pub mod merge;
pub mod paths;
pub mod sources;

pub use facade::ConfigLoader;
pub use paths::xdg_root as xdg;

use crate::logging::LoggingConfig;
use crate::tree::WalkerConfig;
use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FsTreeConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub walk: WalkerConfig,
}
