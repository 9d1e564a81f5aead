pub mod club_repository;
pub mod recommendation_cache_repository;
