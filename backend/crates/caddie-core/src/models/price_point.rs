use crate::error::{CoreError, Result as CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PricePoint {
    #[serde(rename = "Budget")]
    Budget,
    #[serde(rename = "Mid-range")]
    MidRange,
    #[serde(rename = "Premium")]
    Premium,
}

impl PricePoint {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Budget => "Budget",
            Self::MidRange => "Mid-range",
            Self::Premium => "Premium",
        }
    }

    /// Ordinal position of the tier: Budget < Mid-range < Premium.
    pub fn tier(&self) -> i32 {
        match self {
            Self::Budget => 0,
            Self::MidRange => 1,
            Self::Premium => 2,
        }
    }
}

impl FromStr for PricePoint {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "Budget" => Ok(Self::Budget),
            "Mid-range" => Ok(Self::MidRange),
            "Premium" => Ok(Self::Premium),
            _ => Err(CoreError::InvalidPricePoint {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
