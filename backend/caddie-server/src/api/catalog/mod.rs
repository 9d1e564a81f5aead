pub mod catalog;
pub mod club_dto;
pub mod debug_response;
pub mod setup_response;
