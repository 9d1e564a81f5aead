//! Integration tests for the club catalog repository
mod common;

use crate::common::{create_test_pool, seed_clubs};

use caddie_core::{Category, KeyStrength, NewClub, PricePoint};
use caddie_db::ClubRepository;

fn sample_club() -> NewClub {
    NewClub {
        brand: "Srixon".to_string(),
        model: "ZX5 Mk II".to_string(),
        category: Category::PlayersDistance,
        handicap_min: 6,
        handicap_max: 16,
        key_strengths: vec![KeyStrength::Distance, KeyStrength::Feel],
        price_point: PricePoint::MidRange,
        approximate_price: Some(1100),
        image_url: "https://example.com/zx5.jpg".to_string(),
    }
}

#[tokio::test]
async fn test_insert_assigns_sequential_ids() {
    let pool = create_test_pool().await;
    let repo = ClubRepository::new(pool.clone());

    let first = repo.insert(&sample_club()).await.unwrap();
    let second = repo.insert(&sample_club()).await.unwrap();

    assert!(second > first);
}

#[tokio::test]
async fn test_insert_then_find_by_id_round_trips() {
    let pool = create_test_pool().await;
    let repo = ClubRepository::new(pool.clone());

    let id = repo.insert(&sample_club()).await.unwrap();
    let club = repo.find_by_id(id).await.unwrap().unwrap();

    assert_eq!(club.id, id);
    assert_eq!(club.brand, "Srixon");
    assert_eq!(club.model, "ZX5 Mk II");
    assert_eq!(club.category, Category::PlayersDistance);
    assert_eq!(club.handicap_min, 6);
    assert_eq!(club.handicap_max, 16);
    assert_eq!(
        club.key_strengths,
        vec![KeyStrength::Distance, KeyStrength::Feel]
    );
    assert_eq!(club.price_point, PricePoint::MidRange);
    assert_eq!(club.approximate_price, Some(1100));
    assert_eq!(club.image_url, "https://example.com/zx5.jpg");
}

#[tokio::test]
async fn test_find_by_id_missing_returns_none() {
    let pool = create_test_pool().await;
    let repo = ClubRepository::new(pool.clone());

    assert!(repo.find_by_id(9999).await.unwrap().is_none());
}

#[tokio::test]
async fn test_find_all_returns_insertion_order() {
    let pool = create_test_pool().await;
    let ids = seed_clubs(&pool).await;

    let repo = ClubRepository::new(pool.clone());
    let clubs = repo.find_all().await.unwrap();

    assert_eq!(clubs.len(), 6);
    let found_ids: Vec<i64> = clubs.iter().map(|c| c.id).collect();
    assert_eq!(found_ids, ids);
    assert_eq!(clubs[0].model, "T200 (2023)");
    assert_eq!(clubs[5].model, "Model Blade");
}

#[tokio::test]
async fn test_find_by_ids_preserves_requested_order_and_skips_missing() {
    let pool = create_test_pool().await;
    let ids = seed_clubs(&pool).await;

    let repo = ClubRepository::new(pool.clone());
    let request = vec![ids[4], 9999, ids[0]];
    let clubs = repo.find_by_ids(&request).await.unwrap();

    assert_eq!(clubs.len(), 2);
    assert_eq!(clubs[0].model, "G430");
    assert_eq!(clubs[1].model, "T200 (2023)");
}

#[tokio::test]
async fn test_delete_all_then_reseed() {
    let pool = create_test_pool().await;
    seed_clubs(&pool).await;

    let repo = ClubRepository::new(pool.clone());
    assert_eq!(repo.count().await.unwrap(), 6);

    let deleted = repo.delete_all().await.unwrap();
    assert_eq!(deleted, 6);
    assert_eq!(repo.count().await.unwrap(), 0);

    seed_clubs(&pool).await;
    assert_eq!(repo.count().await.unwrap(), 6);
}
