//! Reading [`CafeConfig`] from disk.

use super::{CafeConfig, ConfigError};
use std::fs;
use std::path::{Path, PathBuf};

/// Loads a config file and deserializes it. Performs no validation; use
/// [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<CafeConfig, ConfigError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    CafeConfig::from_toml_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads a config file and checks every startup invariant.
///
/// This is the entry point the binary uses; a config that passes here can be
/// handed straight to `CafeSystem::start`.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<CafeConfig, ConfigError> {
    let config = load_from_path(path)?;
    config.validate()?;
    Ok(config)
}

/// `BrewBytes.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("BrewBytes.toml")
}
