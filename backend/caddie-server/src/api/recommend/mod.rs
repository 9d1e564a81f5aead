pub mod recommend;
pub mod recommendation_dto;
