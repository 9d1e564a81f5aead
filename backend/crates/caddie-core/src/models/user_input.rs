use crate::models::goal::Goal;
use crate::models::price_point::PricePoint;

use serde::{Deserialize, Serialize};

/// Data captured from the calculator form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
    pub handicap: i32,
    pub goal: Goal,
    pub budget: PricePoint,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_brand: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,

    /// Driver swing speed in mph, when the user knows it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub club_speed: Option<f64>,
}
