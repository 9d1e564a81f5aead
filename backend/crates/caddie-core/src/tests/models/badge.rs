use crate::models::badge::Badge;
use crate::models::price_point::PricePoint;

#[test]
fn test_badge_for_rank() {
    assert_eq!(Badge::for_rank(1, PricePoint::Budget), Badge::BestMatch);
    assert_eq!(Badge::for_rank(2, PricePoint::Premium), Badge::TopPick);
    assert_eq!(Badge::for_rank(3, PricePoint::Premium), Badge::PremiumChoice);
    assert_eq!(Badge::for_rank(3, PricePoint::MidRange), Badge::GreatValue);
    assert_eq!(Badge::for_rank(6, PricePoint::Budget), Badge::GreatValue);
}

#[test]
fn test_badge_serializes_to_display_label() {
    let json = serde_json::to_string(&Badge::BestMatch).unwrap();
    assert_eq!(json, "\"Best Match\"");
}
