//! Integration tests for the setup, debug, and health endpoints
mod common;

use crate::common::{create_test_app_state, create_unconfigured_app_state, seed_catalog};

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use caddie_server::build_router;

fn request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_setup_without_database_reports_not_configured() {
    let state = create_unconfigured_app_state().await;
    let app = build_router(state);

    let response = app.oneshot(request("POST", "/api/v1/setup")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert!(
        json["message"]
            .as_str()
            .unwrap()
            .contains("not configured")
    );
}

#[tokio::test]
async fn test_setup_seeds_six_clubs() {
    let state = create_test_app_state("http://unused.local").await;
    let app = build_router(state.clone());

    let response = app.oneshot(request("POST", "/api/v1/setup")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Database setup completed successfully");
    assert_eq!(json["clubsInserted"], 6);

    let debug = build_router(state)
        .oneshot(request("GET", "/api/v1/debug"))
        .await
        .unwrap();
    let json = body_json(debug).await;
    assert_eq!(json["totalClubs"], 6);

    let clubs = json["clubs"].as_array().unwrap();
    assert_eq!(clubs[0]["brand"], "Titleist");
    assert_eq!(clubs[0]["model"], "T200 (2023)");
    assert_eq!(clubs[5]["model"], "Model Blade");
}

#[tokio::test]
async fn test_setup_replaces_existing_catalog() {
    let state = create_test_app_state("http://unused.local").await;
    seed_catalog(&state.pool).await;

    // Reseed over the existing rows: still exactly six clubs.
    let response = build_router(state.clone())
        .oneshot(request("POST", "/api/v1/setup"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let debug = build_router(state)
        .oneshot(request("GET", "/api/v1/debug"))
        .await
        .unwrap();
    let json = body_json(debug).await;
    assert_eq!(json["totalClubs"], 6);
}

#[tokio::test]
async fn test_debug_without_database_reports_not_configured() {
    let state = create_unconfigured_app_state().await;
    let app = build_router(state);

    let response = app.oneshot(request("GET", "/api/v1/debug")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Database connection not configured.");
}

#[tokio::test]
async fn test_health_reports_component_configuration() {
    let state = create_test_app_state("http://unused.local").await;
    let app = build_router(state);

    let response = app.oneshot(request("GET", "/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["components"]["database"], "configured");
    assert_eq!(json["components"]["openai"], "configured");
}

#[tokio::test]
async fn test_liveness_and_readiness() {
    let state = create_test_app_state("http://unused.local").await;

    let live = build_router(state.clone())
        .oneshot(request("GET", "/live"))
        .await
        .unwrap();
    assert_eq!(live.status(), StatusCode::OK);

    let ready = build_router(state)
        .oneshot(request("GET", "/ready"))
        .await
        .unwrap();
    assert_eq!(ready.status(), StatusCode::OK);
}
