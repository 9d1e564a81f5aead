mod error;
mod failed_url_cache;
mod image_proxy;
mod recommendation_dto;
