//! Catalog repository.
//!
//! Clubs are written by the seed operation and by enrichment; the
//! recommendation flow only reads them.

use crate::{DbError, Result as DbResult};

use caddie_core::{Category, Club, KeyStrength, NewClub, PricePoint};

use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

pub struct ClubRepository {
    pool: SqlitePool,
}

impl ClubRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new catalog entry and return its assigned id.
    pub async fn insert(&self, club: &NewClub) -> DbResult<i64> {
        let key_strengths = serde_json::to_string(&club.key_strengths)
            .map_err(|e| DbError::corrupt("clubs", format!("key_strengths encode: {}", e)))?;
        let now = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
                INSERT INTO clubs (
                    brand, model, category, handicap_range_min, handicap_range_max,
                    key_strengths, price_point, approximate_price, image_url,
                    created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&club.brand)
        .bind(&club.model)
        .bind(club.category.as_str())
        .bind(club.handicap_min)
        .bind(club.handicap_max)
        .bind(key_strengths)
        .bind(club.price_point.as_str())
        .bind(club.approximate_price)
        .bind(&club.image_url)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// All catalog rows in insertion (id) order. The engine's tie-break
    /// relies on this ordering being stable.
    pub async fn find_all(&self) -> DbResult<Vec<Club>> {
        let rows = sqlx::query(
            r#"
                SELECT id, brand, model, category, handicap_range_min, handicap_range_max,
                    key_strengths, price_point, approximate_price, image_url,
                    created_at, updated_at
                FROM clubs
                ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(club_from_row).collect()
    }

    pub async fn find_by_id(&self, id: i64) -> DbResult<Option<Club>> {
        let row = sqlx::query(
            r#"
                SELECT id, brand, model, category, handicap_range_min, handicap_range_max,
                    key_strengths, price_point, approximate_price, image_url,
                    created_at, updated_at
                FROM clubs
                WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(club_from_row).transpose()
    }

    /// Load clubs by id, preserving the order of `ids`. Ids that no longer
    /// exist are skipped (a cache row can outlive a reseed).
    pub async fn find_by_ids(&self, ids: &[i64]) -> DbResult<Vec<Club>> {
        let mut clubs = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(club) = self.find_by_id(*id).await? {
                clubs.push(club);
            }
        }
        Ok(clubs)
    }

    pub async fn delete_all(&self) -> DbResult<u64> {
        let result = sqlx::query("DELETE FROM clubs").execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    pub async fn count(&self) -> DbResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM clubs")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.try_get("n")?)
    }
}

fn club_from_row(row: &SqliteRow) -> DbResult<Club> {
    let category: String = row.try_get("category")?;
    let price_point: String = row.try_get("price_point")?;
    let key_strengths: String = row.try_get("key_strengths")?;
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    let key_strengths: Vec<KeyStrength> = serde_json::from_str(&key_strengths)
        .map_err(|e| DbError::corrupt("clubs", format!("key_strengths decode: {}", e)))?;

    Ok(Club {
        id: row.try_get("id")?,
        brand: row.try_get("brand")?,
        model: row.try_get("model")?,
        category: Category::from_str(&category)
            .map_err(|e| DbError::corrupt("clubs", e.to_string()))?,
        handicap_min: row.try_get("handicap_range_min")?,
        handicap_max: row.try_get("handicap_range_max")?,
        key_strengths,
        price_point: PricePoint::from_str(&price_point)
            .map_err(|e| DbError::corrupt("clubs", e.to_string()))?,
        approximate_price: row.try_get("approximate_price")?,
        image_url: row.try_get("image_url")?,
        created_at: DateTime::from_timestamp(created_at, 0)
            .ok_or_else(|| DbError::corrupt("clubs", "invalid created_at timestamp"))?,
        updated_at: DateTime::from_timestamp(updated_at, 0)
            .ok_or_else(|| DbError::corrupt("clubs", "invalid updated_at timestamp"))?,
    })
}
