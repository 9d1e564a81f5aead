pub mod catalog;
pub mod engine;
pub mod error;
pub mod matching;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::badge::Badge;
pub use models::category::Category;
pub use models::club::{Club, NewClub};
pub use models::goal::Goal;
pub use models::key_strength::KeyStrength;
pub use models::price_point::PricePoint;
pub use models::scored_club::ScoredClub;
pub use models::user_input::UserInput;
