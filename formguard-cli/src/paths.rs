//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "formguard";
const APPLICATION: &str = "formguard";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the path of the default configuration file.
///
/// - Linux: `$XDG_CONFIG_HOME/formguard/config.json`
/// - macOS: `~/Library/Application Support/dev.formguard.formguard/config.json`
pub fn config_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
}

/// Get the path of the session log file.
///
/// - Linux: `$XDG_CACHE_HOME/formguard/formguard.log`
/// - macOS: `~/Library/Caches/dev.formguard.formguard/formguard.log`
pub fn log_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().join("formguard.log"))
}
