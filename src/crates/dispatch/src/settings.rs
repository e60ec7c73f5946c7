//! Process settings read from the environment

use crate::error::{DispatchError, Result};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use tooling::config::{get_env_or, get_env_parse_or};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_CONFIG_DIR: &str = "config";

/// Where to listen and where to find `agents.yaml` / `tasks.yaml`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub config_dir: PathBuf,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
        }
    }
}

impl ServerSettings {
    /// `HOST`, `PORT` and `DISPATCH_CONFIG_DIR`, each with its default
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: get_env_or("HOST", DEFAULT_HOST)?,
            port: get_env_parse_or("PORT", DEFAULT_PORT)?,
            config_dir: PathBuf::from(get_env_or("DISPATCH_CONFIG_DIR", DEFAULT_CONFIG_DIR)?),
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .trim()
            .parse()
            .map_err(|_| DispatchError::InvalidConfig(format!("HOST is not an IP address: {}", self.host)))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
