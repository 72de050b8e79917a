//! Server configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Default directory holding the network dataset.
const DEFAULT_DATA_DIR: &str = "data";

/// Default listen address.
const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

/// Errors in environment configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed
    #[error("invalid {name}={value:?}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Process-level settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Directory containing `stations.json` and `lines.json`.
    pub data_dir: PathBuf,
    /// Address to listen on.
    pub listen_addr: SocketAddr,
    /// Override for the planner's transfer edge weight.
    pub transfer_weight: Option<u32>,
}

impl ServerConfig {
    /// Read `METRO_DATA_DIR`, `METRO_LISTEN_ADDR` and `METRO_TRANSFER_WEIGHT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_dir = var("METRO_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        let addr = var("METRO_LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = addr.parse::<SocketAddr>().map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
            name: "METRO_LISTEN_ADDR",
            value: addr.clone(),
            reason: e.to_string(),
        })?;

        let transfer_weight = var("METRO_TRANSFER_WEIGHT")
            .map(|value| {
                value.parse::<u32>().map_err(|e: std::num::ParseIntError| ConfigError::Invalid {
                    name: "METRO_TRANSFER_WEIGHT",
                    value: value.clone(),
                    reason: e.to_string(),
                })
            })
            .transpose()?;

        Ok(Self {
            data_dir,
            listen_addr,
            transfer_weight,
        })
    }
}
