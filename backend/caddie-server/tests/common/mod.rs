#![allow(dead_code)]

//! Test infrastructure for caddie-server API tests

use caddie_config::{Config, DatabaseConfig, OpenAiConfig, SerpApiConfig};
use caddie_db::{ClubRepository, MIGRATOR};
use caddie_server::{AppState, FailedUrlCache};

use std::sync::Arc;

use sqlx::SqlitePool;

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create test database");

    MIGRATOR.run(&pool).await.expect("Failed to run migrations");

    pool
}

/// Create AppState for testing, with both vendor clients pointed at
/// `mock_url`.
pub async fn create_test_app_state(mock_url: &str) -> AppState {
    let pool = create_test_pool().await;

    let config = Config {
        database: DatabaseConfig {
            url: Some("sqlite::memory:".to_string()),
        },
        openai: OpenAiConfig {
            api_key: Some("test-key".to_string()),
            base_url: mock_url.to_string(),
            model: "gpt-3.5-turbo".to_string(),
        },
        serpapi: SerpApiConfig {
            api_key: Some("serp-key".to_string()),
            base_url: mock_url.to_string(),
        },
        ..Config::default()
    };

    AppState {
        pool,
        config: Arc::new(config),
        failed_images: Arc::new(FailedUrlCache::new()),
    }
}

/// AppState whose config has no vendor keys and no database URL.
pub async fn create_unconfigured_app_state() -> AppState {
    AppState {
        pool: create_test_pool().await,
        config: Arc::new(Config::default()),
        failed_images: Arc::new(FailedUrlCache::new()),
    }
}

/// Insert the fixed six-club seed catalog.
pub async fn seed_catalog(pool: &SqlitePool) {
    let repo = ClubRepository::new(pool.clone());
    for club in caddie_core::catalog::seed_clubs() {
        repo.insert(&club).await.expect("Failed to insert seed club");
    }
}

/// Wrap assistant `content` in a chat-completion response body.
pub fn completion_body(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [
            {
                "index": 0,
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }
        ]
    })
}

/// Percent-encode a URL for use as a query-string value.
pub fn encode_query_value(url: &str) -> String {
    url.replace(':', "%3A")
        .replace('/', "%2F")
        .replace('?', "%3F")
        .replace('&', "%26")
}
