use crate::state::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use serde_json::json;

fn configured(is: bool) -> &'static str {
    if is { "configured" } else { "not_configured" }
}

/// GET /health - Health check with component configuration status
pub async fn health_check(State(state): State<AppState>) -> Response {
    let config = state.config.as_ref();

    let health = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "database": configured(config.database.is_configured()),
            "openai": configured(config.openai.is_configured()),
            "serpapi": configured(config.serpapi.is_configured()),
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - Kubernetes liveness probe (is the process alive?)
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Kubernetes readiness probe (ready to accept traffic?)
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    // The pool exists even without DATABASE_URL (in-memory fallback), so a
    // failing ping means something is actually wrong.
    match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => (StatusCode::OK, "Ready").into_response(),
        Err(_) => (StatusCode::SERVICE_UNAVAILABLE, "Not ready").into_response(),
    }
}
