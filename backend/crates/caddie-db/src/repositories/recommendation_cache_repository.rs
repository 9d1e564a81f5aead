//! Recommendation cache.
//!
//! Key is the exact user profile (handicap, goal, budget). One row per
//! key (unique index, insert-or-replace); rows older than the TTL are
//! treated as misses and overwritten on the next write.

use crate::{DbError, Result as DbResult};

use caddie_core::{Goal, PricePoint};

use std::time::Duration;

use chrono::Utc;
use sqlx::{Row, SqlitePool};

/// Cached entries are good for a day; prices and catalogs move slowly.
pub const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);

pub struct RecommendationCacheRepository {
    pool: SqlitePool,
}

impl RecommendationCacheRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Store the ranked club ids for a profile, replacing any previous row.
    pub async fn upsert(
        &self,
        handicap: i32,
        goal: Goal,
        budget: PricePoint,
        club_ids: &[i64],
    ) -> DbResult<()> {
        let ids = serde_json::to_string(club_ids).map_err(|e| {
            DbError::corrupt("recommendation_cache", format!("ids encode: {}", e))
        })?;
        let now = Utc::now().timestamp();

        sqlx::query(
            r#"
                INSERT INTO recommendation_cache (handicap, goal, budget, recommended_ids, created_at)
                VALUES (?, ?, ?, ?, ?)
                ON CONFLICT (handicap, goal, budget) DO UPDATE SET
                    recommended_ids = excluded.recommended_ids,
                    created_at = excluded.created_at
            "#,
        )
        .bind(handicap)
        .bind(goal.as_str())
        .bind(budget.as_str())
        .bind(ids)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Ranked club ids for a profile, if a row exists and is younger than
    /// `ttl`. Stale rows are reported as misses, not deleted; the next
    /// upsert replaces them.
    pub async fn find_fresh(
        &self,
        handicap: i32,
        goal: Goal,
        budget: PricePoint,
        ttl: Duration,
    ) -> DbResult<Option<Vec<i64>>> {
        let row = sqlx::query(
            r#"
                SELECT recommended_ids, created_at
                FROM recommendation_cache
                WHERE handicap = ? AND goal = ? AND budget = ?
            "#,
        )
        .bind(handicap)
        .bind(goal.as_str())
        .bind(budget.as_str())
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let created_at: i64 = row.try_get("created_at")?;
        let age = Utc::now().timestamp().saturating_sub(created_at);
        if age < 0 || age as u64 >= ttl.as_secs() {
            return Ok(None);
        }

        let ids: String = row.try_get("recommended_ids")?;
        let ids: Vec<i64> = serde_json::from_str(&ids).map_err(|e| {
            DbError::corrupt("recommendation_cache", format!("ids decode: {}", e))
        })?;

        Ok(Some(ids))
    }

    pub async fn count(&self) -> DbResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM recommendation_cache")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.try_get("n")?)
    }
}
