use crate::error::{CoreError, Result as CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum KeyStrength {
    Forgiveness,
    Distance,
    Feel,
    Workability,
}

impl KeyStrength {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Forgiveness => "Forgiveness",
            Self::Distance => "Distance",
            Self::Feel => "Feel",
            Self::Workability => "Workability",
        }
    }
}

impl FromStr for KeyStrength {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "Forgiveness" => Ok(Self::Forgiveness),
            "Distance" => Ok(Self::Distance),
            "Feel" => Ok(Self::Feel),
            "Workability" => Ok(Self::Workability),
            _ => Err(CoreError::InvalidKeyStrength {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
