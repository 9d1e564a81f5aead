use caddie_core::ScoredClub;

use serde::Serialize;

/// One ranked recommendation, shaped for the calculator frontend.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationDto {
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
    pub rank: u32,
    pub match_score: f64,
    pub badge: String,
    pub explanation: String,
}

impl RecommendationDto {
    pub fn from_scored(scored: ScoredClub, explanation: String) -> Self {
        let club = scored.club;
        Self {
            id: club.id,
            brand: club.brand,
            model: club.model,
            category: club.category.as_str().to_string(),
            handicap_range: [club.handicap_min, club.handicap_max],
            key_strengths: club
                .key_strengths
                .iter()
                .map(|s| s.as_str().to_string())
                .collect(),
            price_point: club.price_point.as_str().to_string(),
            approximate_price: club.approximate_price,
            image_url: club.image_url,
            rank: scored.rank,
            match_score: scored.score,
            badge: scored.badge.as_str().to_string(),
            explanation,
        }
    }
}
