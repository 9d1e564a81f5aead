use crate::api::error::ApiError;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_not_configured_names_the_missing_piece() {
    let response = ApiError::not_configured("OpenAI API key").into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["message"], "OpenAI API key not configured.");
}

#[tokio::test]
async fn test_internal_error_message_is_generic() {
    let response = ApiError::internal("sqlite went away").into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Error processing your request.");
}
