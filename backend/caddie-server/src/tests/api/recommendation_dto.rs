use crate::api::recommend::recommendation_dto::RecommendationDto;

use caddie_core::{Badge, Category, Club, KeyStrength, PricePoint, ScoredClub};

use chrono::Utc;

fn scored_club() -> ScoredClub {
    ScoredClub {
        club: Club {
            id: 5,
            brand: "Ping".to_string(),
            model: "G430".to_string(),
            category: Category::GameImprovement,
            handicap_min: 12,
            handicap_max: 30,
            key_strengths: vec![KeyStrength::Forgiveness, KeyStrength::Distance],
            price_point: PricePoint::MidRange,
            approximate_price: None,
            image_url: "https://example.com/g430.jpg".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        },
        rank: 1,
        score: 78.0,
        badge: Badge::BestMatch,
    }
}

#[test]
fn test_dto_serializes_camel_case_wire_shape() {
    let dto = RecommendationDto::from_scored(scored_club(), "Very forgiving.".to_string());
    let json = serde_json::to_value(&dto).unwrap();

    assert_eq!(json["id"], 5);
    assert_eq!(json["brand"], "Ping");
    assert_eq!(json["model"], "G430");
    assert_eq!(json["category"], "Game Improvement");
    assert_eq!(json["handicapRange"], serde_json::json!([12, 30]));
    assert_eq!(
        json["keyStrengths"],
        serde_json::json!(["Forgiveness", "Distance"])
    );
    assert_eq!(json["pricePoint"], "Mid-range");
    assert_eq!(json["imageUrl"], "https://example.com/g430.jpg");
    assert_eq!(json["rank"], 1);
    assert_eq!(json["matchScore"], 78.0);
    assert_eq!(json["badge"], "Best Match");
    assert_eq!(json["explanation"], "Very forgiving.");
}

#[test]
fn test_dto_omits_unknown_price() {
    let dto = RecommendationDto::from_scored(scored_club(), String::new());
    let json = serde_json::to_value(&dto).unwrap();

    assert!(json.get("approximatePrice").is_none());
}
