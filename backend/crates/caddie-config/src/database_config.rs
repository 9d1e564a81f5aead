/// Database connection settings.
///
/// The URL is optional on purpose: the server still starts without one so
/// that endpoints can answer with a "not configured" error instead of the
/// process refusing to boot.
#[derive(Debug, Clone, Default)]
pub struct DatabaseConfig {
    pub url: Option<String>,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self {
            url: std::env::var("DATABASE_URL").ok().filter(|s| !s.is_empty()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.url.is_some()
    }
}
