//! Core matching modules
//!
//! Normalization, edit distance, similarity scoring and candidate
//! selection. Everything here is pure and stateless.

pub mod distance;
pub mod matcher;
pub mod similarity;
pub mod text_normalizer;

pub use distance::edit_distance;
pub use matcher::{
    is_accepted_answer, match_against_candidates, match_against_one, Candidate, CandidateMatch,
};
pub use similarity::similarity;
pub use text_normalizer::normalize;
