//! Environment variable source: FSTREE prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Add environment variable overlay to builder.
/// Nested keys use `__`, e.g. `FSTREE__WALK__MAX_DEPTH=3`.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix("FSTREE")
            .separator("__")
            .try_parsing(true),
    );
    Ok(builder)
}
