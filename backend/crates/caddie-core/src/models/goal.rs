use crate::error::{CoreError, Result as CoreResult};
use crate::models::key_strength::KeyStrength;

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// What the golfer wants most out of a new set.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Goal {
    Distance,
    Accuracy,
    Forgiveness,
    Feel,
}

impl Goal {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Distance => "Distance",
            Self::Accuracy => "Accuracy",
            Self::Forgiveness => "Forgiveness",
            Self::Feel => "Feel",
        }
    }

    /// The strength tag that counts as a direct hit for this goal.
    /// Accuracy has no tag of its own; it only earns partial credit
    /// through Workability (see the scoring table).
    pub fn matching_strength(&self) -> Option<KeyStrength> {
        match self {
            Self::Distance => Some(KeyStrength::Distance),
            Self::Forgiveness => Some(KeyStrength::Forgiveness),
            Self::Feel => Some(KeyStrength::Feel),
            Self::Accuracy => None,
        }
    }
}

impl FromStr for Goal {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "Distance" => Ok(Self::Distance),
            "Accuracy" => Ok(Self::Accuracy),
            "Forgiveness" => Ok(Self::Forgiveness),
            "Feel" => Ok(Self::Feel),
            _ => Err(CoreError::InvalidGoal {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
