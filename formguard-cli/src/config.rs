//! Configuration loading.

use std::fs;
use std::path::Path;

use formguard_lib::FormConfig;
use log::{debug, info};

use crate::error::CliError;
use crate::paths;

/// Load the form configuration.
///
/// An explicit path must exist. Without one, the platform config file is
/// used if present; otherwise the defaults apply.
pub fn load(explicit: Option<&Path>) -> Result<FormConfig, CliError> {
    if let Some(path) = explicit {
        return read(path);
    }
    match paths::config_file() {
        Some(path) if path.exists() => read(&path),
        _ => {
            debug!("no config file, using defaults");
            Ok(FormConfig::default())
        }
    }
}

fn read(path: &Path) -> Result<FormConfig, CliError> {
    let text = fs::read_to_string(path)?;
    let config = parse(&text).map_err(|source| CliError::Config {
        path: path.to_path_buf(),
        source,
    })?;
    info!("loaded config from {}", path.display());
    Ok(config)
}

fn parse(text: &str) -> Result<FormConfig, serde_json::Error> {
    serde_json::from_str(text)
}
