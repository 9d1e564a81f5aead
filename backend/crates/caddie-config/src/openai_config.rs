use crate::{DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENAI_MODEL};

/// Language-model API settings.
///
/// `base_url` is overridable so tests can point the client at a local mock
/// server instead of the vendor endpoint.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: String::from(DEFAULT_OPENAI_BASE_URL),
            model: String::from(DEFAULT_OPENAI_MODEL),
        }
    }
}

impl OpenAiConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|s| !s.is_empty()),
            base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| String::from(DEFAULT_OPENAI_BASE_URL)),
            model: std::env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| String::from(DEFAULT_OPENAI_MODEL)),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}
