//! GeoQuiz Library
//!
//! Fuzzy answer matching for geography trivia games: normalization, edit
//! distance, similarity scoring and best-candidate selection, plus the
//! catalog, session and daily-selection pieces built on top.

pub mod catalog;
pub mod config;
pub mod core;
pub mod daily;
pub mod error;
pub mod session;

pub use crate::core::{
    edit_distance, is_accepted_answer, match_against_candidates, match_against_one, normalize,
    similarity, Candidate, CandidateMatch,
};
pub use catalog::Catalog;
pub use error::{QuizError, QuizResult};
pub use session::{GameSession, GameStatus, Guess};
