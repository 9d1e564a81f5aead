use crate::api::catalog::catalog::{debug_catalog, setup_catalog};
use crate::api::image_proxy::image_proxy::image_proxy;
use crate::api::recommend::recommend::recommend;
use crate::health;
use crate::state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Recommendation endpoint
        .route("/api/v1/recommend", post(recommend))
        // Image proxy
        .route("/api/v1/image-proxy", get(image_proxy))
        // Catalog management
        .route("/api/v1/setup", post(setup_catalog))
        .route("/api/v1/debug", get(debug_catalog))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Add shared state
        .with_state(state)
        // CORS middleware (the image proxy is consumed cross-origin)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
