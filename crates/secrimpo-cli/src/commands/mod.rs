//! Subcommand implementations.

pub mod batch;
pub mod config;
pub mod extract;
pub mod laws;

use std::path::{Path, PathBuf};

use secrimpo_core::SecrimpoConfig;
use tracing::debug;

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("secrimpo")
        .join("config.json")
}

/// Load the configuration from an explicit path, then the default location,
/// falling back to built-in defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<SecrimpoConfig> {
    if let Some(path) = config_path {
        return Ok(SecrimpoConfig::from_file(Path::new(path))?);
    }

    let path = default_config_path();
    if path.exists() {
        debug!("Loading configuration from {}", path.display());
        Ok(SecrimpoConfig::from_file(&path)?)
    } else {
        Ok(SecrimpoConfig::default())
    }
}
