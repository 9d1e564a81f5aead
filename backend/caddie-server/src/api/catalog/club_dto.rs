use caddie_core::Club;

use serde::Serialize;

/// Club DTO for JSON serialization
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubDto {
    pub id: i64,
    pub brand: String,
    pub model: String,
    pub category: String,
    pub handicap_range: [i32; 2],
    pub key_strengths: Vec<String>,
    pub price_point: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approximate_price: Option<i32>,
    pub image_url: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Club> for ClubDto {
    fn from(c: Club) -> Self {
        Self {
            id: c.id,
            brand: c.brand,
            model: c.model,
            category: c.category.as_str().to_string(),
            handicap_range: [c.handicap_min, c.handicap_max],
            key_strengths: c
                .key_strengths
                .iter()
                .map(|s| s.as_str().to_string())
                .collect(),
            price_point: c.price_point.as_str().to_string(),
            approximate_price: c.approximate_price,
            image_url: c.image_url,
            created_at: c.created_at.timestamp(),
            updated_at: c.updated_at.timestamp(),
        }
    }
}
