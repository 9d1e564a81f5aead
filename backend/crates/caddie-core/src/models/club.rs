//! Club entity - one iron-set model in the catalog.

use crate::models::category::Category;
use crate::models::key_strength::KeyStrength;
use crate::models::price_point::PricePoint;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog row. Identity is the integer `id` assigned at ingestion;
/// the model name is display data, never a lookup key on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Club {
    pub id: i64,
    pub brand: String,
    pub model: String,
    pub category: Category,
    pub handicap_min: i32,
    pub handicap_max: i32,
    pub key_strengths: Vec<KeyStrength>,
    pub price_point: PricePoint,
    /// Approximate retail price in USD, when known.
    pub approximate_price: Option<i32>,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Club {
    pub fn fits_handicap(&self, handicap: i32) -> bool {
        handicap >= self.handicap_min && handicap <= self.handicap_max
    }

    pub fn handicap_midpoint(&self) -> f64 {
        (self.handicap_min as f64 + self.handicap_max as f64) / 2.0
    }

    /// Display name as shown to the user and to the language model.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }
}

/// A club that has not been persisted yet (seed rows, enrichment output).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewClub {
    pub brand: String,
    pub model: String,
    pub category: Category,
    pub handicap_min: i32,
    pub handicap_max: i32,
    pub key_strengths: Vec<KeyStrength>,
    pub price_point: PricePoint,
    pub approximate_price: Option<i32>,
    pub image_url: String,
}

impl NewClub {
    /// Synthesized catalog entries come from an external model and must be
    /// sane before they are inserted: handicap range inside [0, 36] and
    /// not inverted.
    pub fn handicap_range_is_sane(&self) -> bool {
        self.handicap_min >= 0
            && self.handicap_max >= self.handicap_min
            && self.handicap_max <= 36
    }
}
