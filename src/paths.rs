//! Centralized path definitions for choreboard
//!
//! Single source of truth for all filesystem paths:
//!
//! ```text
//! ~/.config/choreboard/
//! └── config.toml          # User preferences (port, db override, log level)
//!
//! ~/.local/share/choreboard/
//! └── chores.db            # SQLite database (created on first run)
//! ```

use std::path::PathBuf;

/// Application directory name under the platform config/data dirs
const APP_DIR: &str = "choreboard";

/// Configuration filename
const CONFIG_FILE: &str = "config.toml";

/// Database filename
const DATABASE_FILE: &str = "chores.db";

/// Get the global config directory (`~/.config/choreboard`)
#[must_use]
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Get the global config file path (`~/.config/choreboard/config.toml`)
#[must_use]
pub fn config_file() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}

/// Get the data directory (`~/.local/share/choreboard`)
#[must_use]
pub fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Get the default database path (`~/.local/share/choreboard/chores.db`)
#[must_use]
pub fn default_database() -> PathBuf {
    data_dir().join(DATABASE_FILE)
}
