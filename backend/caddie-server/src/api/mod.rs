pub mod catalog;
pub mod error;
pub mod image_proxy;
pub mod recommend;
