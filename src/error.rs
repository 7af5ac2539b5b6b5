//! GeoQuiz Error Types
//!
//! The matching core is total and never fails; errors only come from
//! loading catalogs and configuration.

use thiserror::Error;

/// Central error type for GeoQuiz
#[derive(Error, Debug)]
pub enum QuizError {
    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for GeoQuiz operations
pub type QuizResult<T> = Result<T, QuizError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_display() {
        let err = QuizError::Catalog("duplicate code 'FR'".to_string());
        assert_eq!(err.to_string(), "Catalog error: duplicate code 'FR'");
    }

    #[test]
    fn test_json_error_conversion() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{ nope");
        let err: QuizError = parse.unwrap_err().into();
        assert!(matches!(err, QuizError::Json(_)));
    }
}
