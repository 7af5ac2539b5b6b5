//! Candidate Catalog
//!
//! Loads candidate reference data once, validates it, and exposes it as
//! typed records for the matcher.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::core::Candidate;
use crate::error::{QuizError, QuizResult};

/// Bundled country list
const BUNDLED_COUNTRIES: &str = include_str!("../data/countries.json");

/// Common abbreviations, resolved exactly before fuzzy matching
const ABBREVIATIONS: &[(&str, &str)] = &[
    ("uae", "AE"),
    ("dr", "DO"),
    ("uk", "GB"),
    ("usa", "US"),
    ("us", "US"),
    ("congo", "CG"),
    ("drc", "CD"),
    ("czech", "CZ"),
    ("south korea", "KR"),
    ("north korea", "KP"),
];

/// On-disk record shape
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CandidateRecord {
    code: String,
    name: String,
    #[serde(default)]
    accepted_names: Vec<String>,
}

/// Validated, immutable set of candidates
#[derive(Debug, Clone)]
pub struct Catalog {
    candidates: Vec<Candidate>,
}

impl Catalog {
    /// Build a catalog from candidates, rejecting blank or duplicate entries
    pub fn new(candidates: Vec<Candidate>) -> QuizResult<Self> {
        let mut seen = HashSet::new();
        for (i, candidate) in candidates.iter().enumerate() {
            if candidate.id.trim().is_empty() {
                return Err(QuizError::Catalog(format!("entry {} has an empty code", i)));
            }
            if candidate.name.trim().is_empty() {
                return Err(QuizError::Catalog(format!(
                    "entry '{}' has an empty name",
                    candidate.id
                )));
            }
            if !seen.insert(candidate.id.as_str()) {
                return Err(QuizError::Catalog(format!(
                    "duplicate code '{}'",
                    candidate.id
                )));
            }
        }

        Ok(Self { candidates })
    }

    /// Parse a JSON array of `{ code, name, acceptedNames }` records
    pub fn from_json(json: &str) -> QuizResult<Self> {
        let records: Vec<CandidateRecord> = serde_json::from_str(json)?;
        let candidates = records
            .into_iter()
            .map(|r| Candidate::new(r.code, r.name, r.accepted_names))
            .collect();
        Self::new(candidates)
    }

    /// Load a catalog file
    pub fn load(path: &Path) -> QuizResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;
        info!("📚 Loaded {} candidates from {:?}", catalog.len(), path);
        Ok(catalog)
    }

    /// The country list shipped with the crate
    pub fn bundled() -> QuizResult<Self> {
        Self::from_json(BUNDLED_COUNTRIES)
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn get(&self, id: &str) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Resolve a known abbreviation ("uk", "drc") to a code in this catalog
    pub fn resolve_abbreviation(&self, input: &str) -> Option<&str> {
        let key = input.trim().to_lowercase();
        let (_, code) = ABBREVIATIONS.iter().find(|(abbr, _)| *abbr == key)?;
        let candidate = self.get(code)?;
        debug!("Abbreviation '{}' -> {}", key, candidate.id);
        Some(candidate.id.as_str())
    }
}
