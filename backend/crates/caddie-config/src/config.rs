use crate::database_config::DatabaseConfig;
use crate::error::ConfigErrorResult;
use crate::logging_config::LoggingConfig;
use crate::openai_config::OpenAiConfig;
use crate::serpapi_config::SerpApiConfig;
use crate::server_config::ServerConfig;

use log::{info, warn};

/// Application configuration, loaded from environment variables.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub openai: OpenAiConfig,
    pub serpapi: SerpApiConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the environment, reading a `.env` file first
    /// when one is present (development convenience).
    pub fn load() -> ConfigErrorResult<Self> {
        let _ = dotenvy::dotenv();

        Ok(Self {
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env(),
            openai: OpenAiConfig::from_env(),
            serpapi: SerpApiConfig::from_env(),
            logging: LoggingConfig::from_env(),
        })
    }

    /// Missing vendor keys and database URL are warnings, not startup
    /// failures: the affected endpoints answer 500 "not configured" instead.
    pub fn warn_on_missing(&self) {
        if !self.database.is_configured() {
            warn!("DATABASE_URL not set; endpoints that need the catalog will report it");
        }
        if !self.openai.is_configured() {
            warn!("OPENAI_API_KEY not set; /api/v1/recommend will report it");
        }
        if !self.serpapi.is_configured() {
            warn!("SERPAPI_API_KEY not set; image search fallback disabled");
        }
    }

    pub fn log_summary(&self) {
        info!("bind_addr: {}", self.server.bind_addr);
        info!(
            "database: {}",
            if self.database.is_configured() {
                "configured"
            } else {
                "NOT CONFIGURED"
            }
        );
        info!(
            "openai: model={}, key {}",
            self.openai.model,
            if self.openai.is_configured() {
                "present"
            } else {
                "MISSING"
            }
        );
        info!(
            "serpapi: key {}",
            if self.serpapi.is_configured() {
                "present"
            } else {
                "missing"
            }
        );
        info!("log level: {:?}", *self.logging.level);
    }
}
