//! Filter-and-score pass over the catalog.
//!
//! Weights: goal 40, budget 30, handicap centering 20, category bonus 10.
//! Clubs whose handicap range excludes the player never reach scoring.

use crate::models::badge::Badge;
use crate::models::category::Category;
use crate::models::club::Club;
use crate::models::goal::Goal;
use crate::models::key_strength::KeyStrength;
use crate::models::scored_club::ScoredClub;
use crate::models::user_input::UserInput;

/// Result lists are capped at six entries.
pub const MAX_RESULTS: usize = 6;

const GOAL_WEIGHT: f64 = 40.0;
const GOAL_PARTIAL: f64 = 30.0;
const BUDGET_WEIGHT: f64 = 30.0;
const BUDGET_PARTIAL: f64 = 15.0;
const CENTERING_WEIGHT: f64 = 20.0;
const CATEGORY_BONUS: f64 = 10.0;

/// Clubs the player's handicap falls inside, in catalog order.
pub fn filter_by_handicap(clubs: &[Club], handicap: i32) -> Vec<&Club> {
    clubs.iter().filter(|c| c.fits_handicap(handicap)).collect()
}

/// Score one club against the user profile. Assumes the handicap filter
/// has already passed.
pub fn score_club(input: &UserInput, club: &Club) -> f64 {
    let mut score = 0.0;

    // Goal: full weight on a direct strength-tag hit; Accuracy settles for
    // Workability at partial credit.
    match input.goal.matching_strength() {
        Some(tag) if club.key_strengths.contains(&tag) => score += GOAL_WEIGHT,
        _ => {
            if input.goal == Goal::Accuracy && club.key_strengths.contains(&KeyStrength::Workability)
            {
                score += GOAL_PARTIAL;
            }
        }
    }

    // Budget: exact tier, or the user shopping one tier above the club.
    if input.budget == club.price_point {
        score += BUDGET_WEIGHT;
    } else if input.budget.tier() - club.price_point.tier() == 1 {
        score += BUDGET_PARTIAL;
    }

    // Handicap centering: linear falloff from the range midpoint.
    let distance = (input.handicap as f64 - club.handicap_midpoint()).abs();
    score += (CENTERING_WEIGHT - 2.0 * distance).max(0.0);

    // Category bonus at the extremes of the handicap spectrum.
    let bonus = (input.handicap > 20 && club.category == Category::GameImprovement)
        || (input.handicap < 10 && club.category == Category::PlayersDistance);
    if bonus {
        score += CATEGORY_BONUS;
    }

    score
}

/// Full engine pass: filter, score, stable-sort descending, take the top
/// six, attach ranks and badges. Ties keep catalog order.
pub fn recommend(input: &UserInput, clubs: &[Club]) -> Vec<ScoredClub> {
    let mut scored: Vec<(f64, &Club)> = filter_by_handicap(clubs, input.handicap)
        .into_iter()
        .map(|club| (score_club(input, club), club))
        .collect();

    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

    scored
        .into_iter()
        .take(MAX_RESULTS)
        .enumerate()
        .map(|(i, (score, club))| {
            let rank = (i + 1) as u32;
            ScoredClub {
                club: club.clone(),
                rank,
                score,
                badge: Badge::for_rank(rank, club.price_point),
            }
        })
        .collect()
}
