use std::path::Path;
use tracing::info;

use crate::error::VidcleanError;
use crate::models::Config;

/// Command-line values that take precedence over vidclean.toml
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub fields: Option<Vec<String>>,
    pub extension: Option<String>,
    pub backup: bool,
    pub assume_yes: bool,
}

/// Load configuration from the root directory with CLI overrides
pub fn load_config(root: &Path, overrides: ConfigOverrides) -> Result<Config, VidcleanError> {
    let config = Config::load_from_dir(root)?.with_overrides(
        overrides.fields,
        overrides.extension,
        overrides.backup,
        overrides.assume_yes,
    );
    config.validate()?;

    info!(
        "Configuration loaded: {} field(s), extension={}, backup={}",
        config.fields.names.len(),
        config.scan.extension,
        config.behavior.backup
    );

    Ok(config)
}
