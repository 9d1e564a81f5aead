use crate::DEFAULT_SERPAPI_BASE_URL;

/// Image-search API settings. Optional: without a key the image proxy
/// simply skips its search fallback and enrichment uses a placeholder.
#[derive(Debug, Clone)]
pub struct SerpApiConfig {
    pub api_key: Option<String>,
    pub base_url: String,
}

impl Default for SerpApiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: String::from(DEFAULT_SERPAPI_BASE_URL),
        }
    }
}

impl SerpApiConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("SERPAPI_API_KEY")
                .ok()
                .filter(|s| !s.is_empty()),
            base_url: std::env::var("SERPAPI_BASE_URL")
                .unwrap_or_else(|_| String::from(DEFAULT_SERPAPI_BASE_URL)),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}
