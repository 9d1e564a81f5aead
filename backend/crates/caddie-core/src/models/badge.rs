use crate::models::price_point::PricePoint;

use serde::{Deserialize, Serialize};

/// Display label attached to a ranked result.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Badge {
    #[serde(rename = "Best Match")]
    BestMatch,
    #[serde(rename = "Top Pick")]
    TopPick,
    #[serde(rename = "Great Value")]
    GreatValue,
    #[serde(rename = "Premium Choice")]
    PremiumChoice,
}

impl Badge {
    pub fn as_str(&self) -> &str {
        match self {
            Self::BestMatch => "Best Match",
            Self::TopPick => "Top Pick",
            Self::GreatValue => "Great Value",
            Self::PremiumChoice => "Premium Choice",
        }
    }

    /// Derive the badge from the 1-based rank and the club's price tier.
    pub fn for_rank(rank: u32, price_point: PricePoint) -> Self {
        match rank {
            1 => Self::BestMatch,
            2 => Self::TopPick,
            _ => match price_point {
                PricePoint::Premium => Self::PremiumChoice,
                _ => Self::GreatValue,
            },
        }
    }
}
