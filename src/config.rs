//! Global configuration management
//!
//! Config is stored at `~/.config/choreboard/config.toml` (XDG standard)
//! and covers the server port, an optional database path override and the
//! log level. Every key has a default, so a missing or partial file is fine.
//!
//! Resolution order for the port and database path is: command-line flag,
//! then environment variable (`CHOREBOARD_PORT` / `CHOREBOARD_DB`), then
//! config file, then built-in default.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::paths;

/// Default port the server binds on localhost
pub const DEFAULT_PORT: u16 = 5173;

/// Environment variable overriding the server port
pub const PORT_ENV: &str = "CHOREBOARD_PORT";

/// Environment variable overriding the database path
pub const DB_ENV: &str = "CHOREBOARD_DB";

/// Global choreboard configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to bind on 127.0.0.1
    #[serde(default = "default_port")]
    pub port: u16,
    /// Database path override (default: `~/.local/share/choreboard/chores.db`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,
}

const fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            database: None,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl GlobalConfig {
    /// Load config from disk, or defaults if the file does not exist
    #[must_use]
    pub fn load() -> Self {
        let path = paths::config_file();
        if path.exists() {
            fs::read_to_string(&path)
                .ok()
                .and_then(|content| toml::from_str(&content).ok())
                .unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// Save config to disk, creating the config directory if needed
    pub fn save(&self) -> anyhow::Result<()> {
        let dir = paths::config_dir();
        fs::create_dir_all(&dir)?;

        let content = toml::to_string_pretty(self)?;
        fs::write(paths::config_file(), content)?;
        Ok(())
    }

    /// Resolve the effective port: flag, then env var, then config file
    #[must_use]
    pub fn resolve_port(&self, flag: Option<u16>) -> u16 {
        flag.or_else(|| {
            std::env::var(PORT_ENV)
                .ok()
                .and_then(|v| v.parse().ok())
        })
        .unwrap_or(self.server.port)
    }

    /// Resolve the effective database path: flag, then env var, then config
    #[must_use]
    pub fn resolve_database(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| std::env::var_os(DB_ENV).map(PathBuf::from))
            .or_else(|| self.server.database.clone())
            .unwrap_or_else(paths::default_database)
    }
}
