use crate::DEFAULT_BIND_ADDR;
use crate::error::{ConfigError, ConfigErrorResult};

use std::net::SocketAddr;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR
                .parse()
                .expect("default bind address is valid"),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> ConfigErrorResult<Self> {
        let bind_addr = match std::env::var("BIND_ADDR") {
            Ok(raw) => raw
                .parse()
                .map_err(|source| ConfigError::InvalidBindAddr { source })?,
            Err(_) => Self::default().bind_addr,
        };

        Ok(Self { bind_addr })
    }
}
