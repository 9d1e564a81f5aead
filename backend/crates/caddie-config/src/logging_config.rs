use crate::DEFAULT_LOG_LEVEL;
use crate::log_level::LogLevel;

use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Log file path. None = stdout.
    pub file: Option<String>,
    pub colored: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(DEFAULT_LOG_LEVEL),
            file: None,
            colored: true,
        }
    }
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        let level = std::env::var("LOG_LEVEL")
            .ok()
            .and_then(|s| LogLevel::from_str(&s).ok())
            .unwrap_or(LogLevel(DEFAULT_LOG_LEVEL));

        Self {
            level,
            file: std::env::var("LOG_FILE").ok().filter(|s| !s.is_empty()),
            colored: std::env::var("LOG_COLORED")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(true),
        }
    }
}
