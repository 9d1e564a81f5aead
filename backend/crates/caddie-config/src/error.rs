use std::net::AddrParseError;
use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid BIND_ADDR: {source}")]
    InvalidBindAddr {
        #[source]
        source: AddrParseError,
    },
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
