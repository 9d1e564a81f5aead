pub mod failed_url_cache;
pub mod image_proxy;
