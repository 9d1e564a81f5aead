mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod openai_config;
mod serpapi_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use openai_config::OpenAiConfig;
pub use serpapi_config::SerpApiConfig;
pub use server_config::ServerConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";
const DEFAULT_SERPAPI_BASE_URL: &str = "https://serpapi.com";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
