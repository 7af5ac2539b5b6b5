//! Game Session
//!
//! Caller-owned state for a "name every country" round. The guessed set
//! doubles as the matcher's exclusion set.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::core::{match_against_candidates, Candidate};

/// Default round length in seconds (15 minutes)
pub const DEFAULT_TIME_LIMIT_SECS: u64 = 15 * 60;

/// Phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Idle,
    Playing,
    Won,
    Lost,
}

/// An accepted guess
#[derive(Debug, Clone, PartialEq)]
pub struct Guess {
    pub id: String,
    pub score: f64,
}

/// State of one game
#[derive(Debug)]
pub struct GameSession {
    status: GameStatus,
    time_limit: u64,
    time_left: u64,
    guessed: HashSet<String>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_LIMIT_SECS)
    }
}

impl GameSession {
    pub fn new(time_limit: u64) -> Self {
        Self {
            status: GameStatus::Idle,
            time_limit,
            time_left: time_limit,
            guessed: HashSet::new(),
        }
    }

    /// Reset and begin playing
    pub fn start(&mut self) {
        info!("🌍 Session started ({}s)", self.time_limit);
        self.status = GameStatus::Playing;
        self.time_left = self.time_limit;
        self.guessed.clear();
    }

    /// Submit an answer. Returns the newly guessed candidate, if any.
    pub fn submit(&mut self, catalog: &Catalog, input: &str) -> Option<Guess> {
        if self.status != GameStatus::Playing {
            return None;
        }

        let guess = match catalog.resolve_abbreviation(input) {
            Some(id) if !self.guessed.contains(id) => Some(Guess {
                id: id.to_string(),
                score: 1.0,
            }),
            _ => match_against_candidates(input, catalog.candidates(), &self.guessed).map(|m| {
                Guess {
                    id: m.id,
                    score: m.score,
                }
            }),
        }?;

        debug!("✅ Guessed {} ({:.3})", guess.id, guess.score);
        self.guessed.insert(guess.id.clone());

        if self.guessed.len() == catalog.len() {
            info!("🏆 All {} candidates named", catalog.len());
            self.status = GameStatus::Won;
        }

        Some(guess)
    }

    /// Advance the clock by one second
    pub fn tick(&mut self) {
        if self.status != GameStatus::Playing {
            return;
        }
        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left == 0 {
            info!("⏰ Time is up with {} guessed", self.guessed.len());
            self.status = GameStatus::Lost;
        }
    }

    pub fn give_up(&mut self) {
        if self.status == GameStatus::Playing {
            info!("🏳️ Gave up with {} guessed", self.guessed.len());
            self.status = GameStatus::Lost;
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn time_left(&self) -> u64 {
        self.time_left
    }

    pub fn score(&self) -> usize {
        self.guessed.len()
    }

    pub fn guessed(&self) -> &HashSet<String> {
        &self.guessed
    }

    /// Candidates not yet guessed, in catalog order
    pub fn remaining<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Candidate> {
        catalog
            .candidates()
            .iter()
            .filter(|c| !self.guessed.contains(&c.id))
            .collect()
    }
}
