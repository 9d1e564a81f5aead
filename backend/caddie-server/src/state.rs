use crate::api::image_proxy::failed_url_cache::FailedUrlCache;

use caddie_config::Config;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared state handed to every handler. Vendor clients are built
/// per-request from the config so missing keys stay a request-time
/// condition, not a startup failure.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: Arc<Config>,
    pub failed_images: Arc<FailedUrlCache>,
}
