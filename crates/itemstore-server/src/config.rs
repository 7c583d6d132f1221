//! Server configuration from environment variables.
//!
//! - `ITEMSTORE_PORT`: listen port (default: `8080`)
//!
//! The host is always `0.0.0.0`.

use std::net::{Ipv4Addr, SocketAddr};

/// Environment variable naming the listen port.
pub const PORT_VAR: &str = "ITEMSTORE_PORT";

/// Port used when `ITEMSTORE_PORT` is unset.
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var} value '{value}': expected a port number")]
    InvalidPort { var: &'static str, value: String },
}

/// Resolved server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
}

impl Config {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which returns `None` for unset
    /// variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup(PORT_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort {
                    var: PORT_VAR,
                    value: raw.clone(),
                })?,
            None => DEFAULT_PORT,
        };
        Ok(Config { port })
    }

    /// The address the listener binds.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

impl Default for Config {
    fn default() -> Self {
        Config { port: DEFAULT_PORT }
    }
}
