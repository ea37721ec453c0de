//! Application settings loaded via OrthoConfig.
//!
//! Values come from `NUDILOG_*` environment variables, matching CLI flags, or
//! a configuration file; unset values fall back to local defaults.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_DATABASE_URL: &str = "nudilog.db";
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_POOL_MAX_SIZE: u32 = 10;
const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Errors raised when a configured value cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// `bind_addr` is not a socket address.
    #[error("invalid bind address {value:?}: {message}")]
    InvalidBindAddr { value: String, message: String },
}

/// Runtime configuration for the dive log server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "NUDILOG")]
pub struct AppSettings {
    /// SQLite database file path.
    pub database_url: Option<String>,
    /// Directory uploaded photos are written into.
    pub upload_dir: Option<PathBuf>,
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// Maximum number of pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Milliseconds a connection waits on a locked database.
    pub busy_timeout_ms: Option<u64>,
}

impl AppSettings {
    /// Return the configured database path, falling back to the default.
    pub fn database_url(&self) -> &str {
        self.database_url.as_deref().unwrap_or(DEFAULT_DATABASE_URL)
    }

    /// Return the configured upload directory, falling back to the default.
    pub fn upload_dir(&self) -> PathBuf {
        self.upload_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_UPLOAD_DIR))
    }

    /// Parse the configured bind address, falling back to the default.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidBindAddr`] when the value is not a
    /// socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse()
            .map_err(|err: std::net::AddrParseError| SettingsError::InvalidBindAddr {
                value: raw.to_owned(),
                message: err.to_string(),
            })
    }

    /// Return the configured pool size, falling back to the default.
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }

    /// Return the configured SQLite busy timeout, falling back to the default.
    pub fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms.unwrap_or(DEFAULT_BUSY_TIMEOUT_MS))
    }
}
