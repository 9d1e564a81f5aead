#![allow(dead_code)]

//! Test infrastructure for caddie-db repository tests

use caddie_db::{ClubRepository, MIGRATOR};

use sqlx::SqlitePool;

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create test database");

    MIGRATOR.run(&pool).await.expect("Failed to run migrations");

    pool
}

/// Insert the fixed seed catalog and return the assigned ids.
pub async fn seed_clubs(pool: &SqlitePool) -> Vec<i64> {
    let repo = ClubRepository::new(pool.clone());
    let mut ids = Vec::new();
    for club in caddie_core::catalog::seed_clubs() {
        ids.push(repo.insert(&club).await.expect("Failed to insert seed club"));
    }
    ids
}
