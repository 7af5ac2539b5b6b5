//! Text Normalization
//!
//! Canonicalizes free-text answers and reference names before any comparison.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalize text for matching
///
/// - Lowercase conversion
/// - Canonical decomposition with combining marks dropped ("é" -> "e")
/// - Everything except ASCII letters, digits and whitespace removed
/// - Whitespace runs collapsed to a single space, ends trimmed
pub fn normalize(text: &str) -> String {
    let stripped: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
