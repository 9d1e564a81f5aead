pub mod badge;
pub mod category;
pub mod club;
pub mod goal;
pub mod key_strength;
pub mod price_point;
pub mod scored_club;
pub mod user_input;
