//! Candidate Matcher
//!
//! Decides whether a free-text answer names a candidate, and picks the best
//! remaining candidate for an answer across a whole catalog.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::similarity::{containment_ratio, similarity};
use super::text_normalizer::normalize;

/// Containment at or above this ratio is accepted without further scoring.
pub const PARTIAL_MATCH_THRESHOLD: f64 = 0.6;

/// Minimum similarity for ordinary answers.
pub const MIN_SIMILARITY: f64 = 0.75;

/// Minimum similarity for very short answers.
pub const MIN_SIMILARITY_SHORT: f64 = 0.85;

/// Answers whose normalized length is at most this use the stricter threshold.
pub const SHORT_INPUT_LEN: usize = 4;

/// A reference entity the player is trying to name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl Candidate {
    pub fn new(id: impl Into<String>, name: impl Into<String>, aliases: Vec<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            aliases,
        }
    }
}

/// Best candidate for an answer
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateMatch {
    pub id: String,
    pub score: f64,
}

/// Score `input` against one candidate name and its aliases.
///
/// Returns `None` when the best score does not clear the threshold for the
/// input's length.
pub fn match_against_one<S: AsRef<str>>(
    input: &str,
    canonical_name: &str,
    aliases: &[S],
) -> Option<f64> {
    let normalized_input = normalize(input);
    let normalized_name = normalize(canonical_name);

    if normalized_input == normalized_name {
        return Some(1.0);
    }

    if aliases
        .iter()
        .any(|alias| normalize(alias.as_ref()) == normalized_input)
    {
        return Some(1.0);
    }

    if normalized_name.contains(&normalized_input) || normalized_input.contains(&normalized_name) {
        let partial = containment_ratio(&normalized_input, &normalized_name);
        if partial >= PARTIAL_MATCH_THRESHOLD {
            return Some(partial);
        }
    }

    // Aliases go in raw; similarity normalizes them itself
    let best = aliases
        .iter()
        .map(|alias| similarity(&normalized_input, alias.as_ref()))
        .fold(
            similarity(&normalized_input, &normalized_name),
            f64::max,
        );

    let threshold = if normalized_input.len() <= SHORT_INPUT_LEN {
        MIN_SIMILARITY_SHORT
    } else {
        MIN_SIMILARITY
    };

    (best >= threshold).then_some(best)
}

/// Find the best-scoring candidate whose id is not in `excluded`.
///
/// Ties keep the candidate that appears first.
pub fn match_against_candidates(
    input: &str,
    candidates: &[Candidate],
    excluded: &HashSet<String>,
) -> Option<CandidateMatch> {
    let mut best: Option<CandidateMatch> = None;

    for candidate in candidates {
        if excluded.contains(&candidate.id) {
            continue;
        }

        let Some(score) = match_against_one(input, &candidate.name, &candidate.aliases) else {
            continue;
        };

        if best.as_ref().map_or(true, |b| score > b.score) {
            best = Some(CandidateMatch {
                id: candidate.id.clone(),
                score,
            });
        }
    }

    match &best {
        Some(m) => debug!("🎯 '{}' matched {} ({:.3})", input, m.id, m.score),
        None => debug!("'{}' matched nothing", input),
    }

    best
}

/// Check a guess against a single expected answer, as capital and flag
/// rounds do.
pub fn is_accepted_answer<S: AsRef<str>>(guess: &str, answer: &str, accepted: &[S]) -> bool {
    let guess_lower = guess.trim().to_lowercase();

    if guess_lower == answer.to_lowercase() {
        return true;
    }

    if accepted
        .iter()
        .any(|name| guess_lower == name.as_ref().to_lowercase())
    {
        return true;
    }

    match_against_one(guess, answer, accepted).is_some_and(|score| score >= MIN_SIMILARITY)
}
