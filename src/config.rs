use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_STOCKS_DIR: &str = "archive/stocks";
pub const DEFAULT_PORT: u16 = 8888;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT {0:?}")]
    Port(String),
    #[error("invalid HOST {0:?}")]
    Host(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub stocks_dir: PathBuf,
    pub host: IpAddr,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stocks_dir: PathBuf::from(DEFAULT_STOCKS_DIR),
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    /// Defaults, overridden by `STOCKS_DIR`, `HOST` and `PORT` (a `.env`
    /// file in the working directory is honoured too).
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `STOCKS_DIR` | `archive/stocks` |
    /// | `HOST` | `0.0.0.0` |
    /// | `PORT` | `8888` |
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(dir) = lookup("STOCKS_DIR").filter(|v| !v.is_empty()) {
            config.stocks_dir = PathBuf::from(dir);
        }
        if let Some(host) = lookup("HOST").filter(|v| !v.is_empty()) {
            config.host = host.parse().map_err(|_| ConfigError::Host(host))?;
        }
        if let Some(port) = lookup("PORT").filter(|v| !v.is_empty()) {
            config.port = port.parse().map_err(|_| ConfigError::Port(port))?;
        }
        Ok(config)
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
