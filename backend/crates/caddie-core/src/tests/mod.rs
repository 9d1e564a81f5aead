mod models;

use crate::catalog::seed_clubs;
use crate::models::club::Club;

use chrono::Utc;

/// The seed catalog as persisted rows, ids assigned in insertion order.
pub fn seed_catalog() -> Vec<Club> {
    let now = Utc::now();
    seed_clubs()
        .into_iter()
        .enumerate()
        .map(|(i, c)| Club {
            id: (i + 1) as i64,
            brand: c.brand,
            model: c.model,
            category: c.category,
            handicap_min: c.handicap_min,
            handicap_max: c.handicap_max,
            key_strengths: c.key_strengths,
            price_point: c.price_point,
            approximate_price: c.approximate_price,
            image_url: c.image_url,
            created_at: now,
            updated_at: now,
        })
        .collect()
}
