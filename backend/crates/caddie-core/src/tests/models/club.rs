use crate::catalog::seed_clubs;
use crate::models::category::Category;
use crate::models::price_point::PricePoint;
use crate::tests::seed_catalog;

use std::str::FromStr;

#[test]
fn test_seed_catalog_has_six_clubs() {
    assert_eq!(seed_clubs().len(), 6);
}

#[test]
fn test_fits_handicap_boundaries() {
    let clubs = seed_catalog();
    let blade = clubs.iter().find(|c| c.model == "Model Blade").unwrap();

    assert!(blade.fits_handicap(0));
    assert!(blade.fits_handicap(8));
    assert!(!blade.fits_handicap(9));
    assert!(!blade.fits_handicap(-1));
}

#[test]
fn test_handicap_midpoint() {
    let clubs = seed_catalog();
    let g430 = clubs.iter().find(|c| c.model == "G430").unwrap();
    assert_eq!(g430.handicap_midpoint(), 21.0);
}

#[test]
fn test_new_club_sanity_check() {
    let mut club = seed_clubs().remove(0);
    assert!(club.handicap_range_is_sane());

    club.handicap_min = 10;
    club.handicap_max = 5;
    assert!(!club.handicap_range_is_sane());

    club.handicap_min = -2;
    club.handicap_max = 5;
    assert!(!club.handicap_range_is_sane());

    club.handicap_min = 30;
    club.handicap_max = 40;
    assert!(!club.handicap_range_is_sane());
}

#[test]
fn test_enum_round_trips() {
    for s in ["Game Improvement", "Player's Distance", "Player's Iron", "Blade"] {
        assert_eq!(Category::from_str(s).unwrap().as_str(), s);
    }
    for s in ["Budget", "Mid-range", "Premium"] {
        assert_eq!(PricePoint::from_str(s).unwrap().as_str(), s);
    }
    assert!(Category::from_str("Hybrid").is_err());
    assert!(PricePoint::from_str("Luxury").is_err());
}
