pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    catalog::{
        catalog::{debug_catalog, setup_catalog},
        club_dto::ClubDto,
        debug_response::DebugResponse,
        setup_response::SetupResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    image_proxy::{failed_url_cache::FailedUrlCache, image_proxy::image_proxy},
    recommend::{recommend::recommend, recommendation_dto::RecommendationDto},
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
