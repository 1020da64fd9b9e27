//! Centralized path definitions for wellatlas
//!
//! ```text
//! ./wellatlas.toml                       # Local config (checked first)
//! ~/.config/wellatlas/config.toml        # User config (XDG standard)
//! ./wellatlas_v4_demo.db                 # Default database
//! ```

use std::path::PathBuf;

/// Local configuration filename, looked up in the working directory
pub const LOCAL_CONFIG: &str = "wellatlas.toml";

/// Default SQLite database file
pub const DEFAULT_DATABASE: &str = "wellatlas_v4_demo.db";

/// Directory name under the user config dir
const GLOBAL_DIR: &str = "wellatlas";

/// User config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the user config directory path.
///
/// Returns `<config dir>/wellatlas`, falling back to `~/.config/wellatlas`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join(GLOBAL_DIR)
}

/// Get the user config file path.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}

/// Get the local config file path (relative to the working directory).
#[must_use]
pub fn local_config() -> PathBuf {
    PathBuf::from(LOCAL_CONFIG)
}
