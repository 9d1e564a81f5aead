pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::club_repository::ClubRepository;
pub use repositories::recommendation_cache_repository::RecommendationCacheRepository;

/// Embedded migrations, run at startup and by the test pools.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();
