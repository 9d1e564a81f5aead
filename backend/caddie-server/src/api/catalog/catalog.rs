//! Catalog management handlers
//!
//! Seeding is destructive: the clubs table is cleared and the fixed seed
//! list reinserted, which assigns fresh ids. The recommendation flow
//! tolerates cache rows that still point at the old ids.

use crate::api::catalog::club_dto::ClubDto;
use crate::api::catalog::debug_response::DebugResponse;
use crate::api::catalog::setup_response::SetupResponse;
use crate::api::error::{ApiError, Result as ApiResult};
use crate::state::AppState;

use caddie_db::ClubRepository;

use axum::{Json, extract::State};
use log::info;

/// POST /api/v1/setup
///
/// Clear the clubs table and insert the fixed seed catalog
pub async fn setup_catalog(State(state): State<AppState>) -> ApiResult<Json<SetupResponse>> {
    if !state.config.database.is_configured() {
        return Err(ApiError::not_configured("Database connection"));
    }

    let repo = ClubRepository::new(state.pool.clone());

    let removed = repo.delete_all().await?;
    info!("Cleared {} existing clubs", removed);

    let mut inserted = 0;
    for club in caddie_core::catalog::seed_clubs() {
        repo.insert(&club).await?;
        inserted += 1;
    }
    info!("Seeded catalog with {} clubs", inserted);

    Ok(Json(SetupResponse {
        message: "Database setup completed successfully".to_string(),
        clubs_inserted: inserted,
    }))
}

/// GET /api/v1/debug
///
/// Dump the current catalog contents
pub async fn debug_catalog(State(state): State<AppState>) -> ApiResult<Json<DebugResponse>> {
    if !state.config.database.is_configured() {
        return Err(ApiError::not_configured("Database connection"));
    }

    let repo = ClubRepository::new(state.pool.clone());
    let clubs = repo.find_all().await?;

    Ok(Json(DebugResponse {
        message: "Database debug info".to_string(),
        total_clubs: clubs.len() as i64,
        clubs: clubs.into_iter().map(ClubDto::from).collect(),
    }))
}
