use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid club category: {value} {location}")]
    InvalidCategory {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid key strength: {value} {location}")]
    InvalidKeyStrength {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid price point: {value} {location}")]
    InvalidPricePoint {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid goal: {value} {location}")]
    InvalidGoal {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
