use crate::error::{CoreError, Result as CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Club head category. The four tags are fixed; anything else coming back
/// from the language model is rejected at parse time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Category {
    #[serde(rename = "Game Improvement")]
    GameImprovement,
    #[serde(rename = "Player's Distance")]
    PlayersDistance,
    #[serde(rename = "Player's Iron")]
    PlayersIron,
    #[serde(rename = "Blade")]
    Blade,
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Self::GameImprovement => "Game Improvement",
            Self::PlayersDistance => "Player's Distance",
            Self::PlayersIron => "Player's Iron",
            Self::Blade => "Blade",
        }
    }
}

impl FromStr for Category {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "Game Improvement" => Ok(Self::GameImprovement),
            "Player's Distance" => Ok(Self::PlayersDistance),
            "Player's Iron" => Ok(Self::PlayersIron),
            "Blade" => Ok(Self::Blade),
            _ => Err(CoreError::InvalidCategory {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
