//! Reconcile free-text model names from the language model against the
//! catalog.
//!
//! Exact match on the normalized name is the identity check. Substring and
//! word containment exist only as a fallback heuristic for the model
//! prepending brands or dropping year suffixes, and every fallback hit is
//! logged so ambiguous matches ("Rogue" landing on "Rogue ST Max") are
//! visible in the server log.

use crate::models::club::Club;

use log::{debug, warn};

/// How a candidate name was resolved to a catalog row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Fuzzy,
}

/// Lowercase, trim, and collapse internal whitespace.
pub fn normalize(name: &str) -> String {
    name.split_whitespace()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Find the catalog club a model-suggested name refers to.
///
/// Tries, in order:
/// 1. normalized equality with the model name or the "brand model" form;
/// 2. substring containment in either direction;
/// 3. every word of the shorter name appearing in the longer one.
///
/// Steps 2 and 3 are heuristics, not identity; hits are logged at warn.
pub fn find_club<'a>(clubs: &'a [Club], name: &str) -> Option<(&'a Club, MatchKind)> {
    let needle = normalize(name);
    if needle.is_empty() {
        return None;
    }

    for club in clubs {
        let model = normalize(&club.model);
        let full = normalize(&club.full_name());
        if needle == model || needle == full {
            debug!("Matched \"{}\" exactly to club {}", name, club.id);
            return Some((club, MatchKind::Exact));
        }
    }

    for club in clubs {
        let model = normalize(&club.model);
        let full = normalize(&club.full_name());

        let contained = full.contains(&needle)
            || model.contains(&needle)
            || needle.contains(&model);

        let word_match = {
            let club_words: Vec<&str> = full.split(' ').collect();
            needle.split(' ').all(|w| {
                club_words
                    .iter()
                    .any(|cw| cw.contains(w) || w.contains(cw))
            })
        };

        if contained || word_match {
            warn!(
                "Fuzzy-matched \"{}\" to catalog club {} (\"{}\"); treat as heuristic",
                name,
                club.id,
                club.full_name()
            );
            return Some((club, MatchKind::Fuzzy));
        }
    }

    None
}
