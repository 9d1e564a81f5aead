use crate::models::badge::Badge;
use crate::models::club::Club;

use serde::{Deserialize, Serialize};

/// Engine output: a catalog club with its rank, match score, and badge.
/// The explanation text is attached later by the recommendation pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredClub {
    pub club: Club,
    /// 1-based position in the ranked list.
    pub rank: u32,
    /// 0-100, from the fixed scoring table.
    pub score: f64,
    pub badge: Badge,
}
