//! Fixed seed catalog. The setup endpoint clears the clubs table and
//! reinserts exactly these six rows.

use crate::models::category::Category;
use crate::models::club::NewClub;
use crate::models::key_strength::KeyStrength;
use crate::models::price_point::PricePoint;

/// Stand-in image used for seed rows and for synthesized clubs whose
/// image search came up empty.
pub const PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1593113598332-cd288d649433?w=400&h=300&fit=crop&crop=center";

pub fn seed_clubs() -> Vec<NewClub> {
    vec![
        NewClub {
            brand: "Titleist".to_string(),
            model: "T200 (2023)".to_string(),
            category: Category::PlayersDistance,
            handicap_min: 5,
            handicap_max: 15,
            key_strengths: vec![KeyStrength::Distance, KeyStrength::Feel],
            price_point: PricePoint::Premium,
            approximate_price: None,
            image_url: PLACEHOLDER_IMAGE.to_string(),
        },
        NewClub {
            brand: "Callaway".to_string(),
            model: "Rogue ST Max".to_string(),
            category: Category::GameImprovement,
            handicap_min: 15,
            handicap_max: 30,
            key_strengths: vec![KeyStrength::Forgiveness, KeyStrength::Distance],
            price_point: PricePoint::MidRange,
            approximate_price: None,
            image_url: PLACEHOLDER_IMAGE.to_string(),
        },
        NewClub {
            brand: "Mizuno".to_string(),
            model: "JPX 923 Forged".to_string(),
            category: Category::PlayersIron,
            handicap_min: 8,
            handicap_max: 18,
            key_strengths: vec![KeyStrength::Feel, KeyStrength::Workability],
            price_point: PricePoint::Premium,
            approximate_price: None,
            image_url: PLACEHOLDER_IMAGE.to_string(),
        },
        NewClub {
            brand: "TaylorMade".to_string(),
            model: "P790 (2023)".to_string(),
            category: Category::PlayersDistance,
            handicap_min: 5,
            handicap_max: 15,
            key_strengths: vec![KeyStrength::Distance, KeyStrength::Forgiveness],
            price_point: PricePoint::Premium,
            approximate_price: None,
            image_url: PLACEHOLDER_IMAGE.to_string(),
        },
        NewClub {
            brand: "Ping".to_string(),
            model: "G430".to_string(),
            category: Category::GameImprovement,
            handicap_min: 12,
            handicap_max: 30,
            key_strengths: vec![KeyStrength::Forgiveness, KeyStrength::Distance],
            price_point: PricePoint::MidRange,
            approximate_price: None,
            image_url: PLACEHOLDER_IMAGE.to_string(),
        },
        NewClub {
            brand: "Wilson Staff".to_string(),
            model: "Model Blade".to_string(),
            category: Category::Blade,
            handicap_min: 0,
            handicap_max: 8,
            key_strengths: vec![KeyStrength::Feel, KeyStrength::Workability],
            price_point: PricePoint::Premium,
            approximate_price: None,
            image_url: PLACEHOLDER_IMAGE.to_string(),
        },
    ]
}
