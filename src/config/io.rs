use std::fs;
use std::path::Path;

use super::schema::Config;
use super::validate::ConfigError;

/// Reads the notifier config from `path` and validates it before returning.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;

    parse_config(&raw, path.display().to_string())
}

pub(super) fn parse_config(raw: &str, path: String) -> Result<Config, ConfigError> {
    let config: Config =
        toml::from_str(raw).map_err(|source| ConfigError::Parse { path, source })?;
    config.validate()?;
    Ok(config)
}
