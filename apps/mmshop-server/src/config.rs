//! Server configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults; command-line flags override both.
//!
//! ## Sources (highest priority first)
//! ```text
//! 1. CLI flags         --host, --port, --with-index
//! 2. Environment       MMSHOP_HOST, MMSHOP_PORT, MMSHOP_WITH_INDEX
//! 3. Defaults          127.0.0.1:5000, index disabled
//! ```

use serde::{Deserialize, Serialize};
use std::env;

/// Service name, last segment of the API prefix.
pub const API_NAME: &str = "mmshop";

/// API version, part of the API prefix.
pub const API_VERSION: &str = "1.0";

/// Path prefix every route is mounted under.
pub const API_URL: &str = "/api/v1.0/mmshop";

/// Default bind host.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default bind port.
pub const DEFAULT_PORT: u16 = 5000;

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host name or address to bind
    pub host: String,

    /// Port to bind
    pub port: u16,

    /// Serve the HTML overview at the API root
    pub with_index: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            with_index: false,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ServerConfig::default();

        let host = lookup("MMSHOP_HOST").unwrap_or(defaults.host);
        if host.trim().is_empty() {
            return Err(ConfigError::InvalidValue("MMSHOP_HOST".to_string()));
        }

        let port = match lookup("MMSHOP_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("MMSHOP_PORT".to_string()))?,
            None => defaults.port,
        };

        let with_index = match lookup("MMSHOP_WITH_INDEX") {
            Some(raw) => parse_flag(&raw)
                .ok_or_else(|| ConfigError::InvalidValue("MMSHOP_WITH_INDEX".to_string()))?,
            None => defaults.with_index,
        };

        Ok(ServerConfig {
            host,
            port,
            with_index,
        })
    }

    /// Returns the `host:port` bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the base URL clients use to reach the API.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}{}", self.host, self.port, API_URL)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
