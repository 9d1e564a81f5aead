use crate::models::goal::Goal;
use crate::models::price_point::PricePoint;
use crate::models::user_input::UserInput;

#[test]
fn test_user_input_parses_camel_case_json() {
    let json = r#"{
        "handicap": 15,
        "goal": "Distance",
        "budget": "Mid-range",
        "preferredBrand": "Ping",
        "clubSpeed": 92.5
    }"#;

    let input: UserInput = serde_json::from_str(json).unwrap();
    assert_eq!(input.handicap, 15);
    assert_eq!(input.goal, Goal::Distance);
    assert_eq!(input.budget, PricePoint::MidRange);
    assert_eq!(input.preferred_brand.as_deref(), Some("Ping"));
    assert_eq!(input.age, None);
    assert_eq!(input.club_speed, Some(92.5));
}

#[test]
fn test_user_input_optional_fields_default() {
    let json = r#"{"handicap": 0, "goal": "Feel", "budget": "Premium"}"#;
    let input: UserInput = serde_json::from_str(json).unwrap();
    assert_eq!(input.preferred_brand, None);
    assert_eq!(input.age, None);
    assert_eq!(input.club_speed, None);
}

#[test]
fn test_user_input_rejects_unknown_goal() {
    let json = r#"{"handicap": 10, "goal": "Spin", "budget": "Budget"}"#;
    assert!(serde_json::from_str::<UserInput>(json).is_err());
}
