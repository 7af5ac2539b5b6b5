//! Similarity scoring
//!
//! Heuristic similarity in [0, 1] built from exact match, containment and
//! edit distance. Not a metric: the containment rule and the short-string
//! boost are directional.

use super::distance::edit_distance;
use super::text_normalizer::normalize;

/// Strings shorter than this get the leniency boost.
pub const SHORT_STRING_LEN: usize = 6;

/// Additive leniency for short strings.
pub const SHORT_STRING_BOOST: f64 = 0.1;

/// Calculate similarity score between two strings (1.0 = identical)
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = normalize(a);
    let b = normalize(b);

    if a == b {
        return 1.0;
    }

    if !a.is_empty() && !b.is_empty() && (a.contains(&b) || b.contains(&a)) {
        return containment_ratio(&a, &b);
    }

    // Normalized strings are pure ASCII, so byte length is char length
    let max_len = a.len().max(b.len());
    if max_len == 0 {
        return 1.0;
    }

    let distance = edit_distance(&a, &b);
    let base = 1.0 - distance as f64 / max_len as f64;

    let boost = if a.len() < SHORT_STRING_LEN || b.len() < SHORT_STRING_LEN {
        SHORT_STRING_BOOST
    } else {
        0.0
    };

    (base + boost).clamp(0.0, 1.0)
}

/// Length of the shorter string over the longer one.
pub(crate) fn containment_ratio(a: &str, b: &str) -> f64 {
    let (shorter, longer) = if a.len() > b.len() { (b, a) } else { (a, b) };
    if longer.is_empty() {
        return 1.0;
    }
    shorter.len() as f64 / longer.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_identical_after_normalization() {
        assert_eq!(similarity("France", "FRANCE"), 1.0);
        assert_eq!(similarity("Côte d'Ivoire", "cote divoire"), 1.0);
        assert_eq!(similarity("", ""), 1.0);
        assert_eq!(similarity("!!!", "   "), 1.0);
    }

    #[test]
    fn test_containment() {
        assert!(approx(similarity("korea", "South Korea"), 5.0 / 11.0));
        assert!(approx(similarity("South Korea", "korea"), 5.0 / 11.0));
    }

    #[test]
    fn test_containment_gets_no_boost() {
        // "chad" inside "chads" would be 0.9 with the boost
        assert!(approx(similarity("chad", "chads"), 0.8));
    }

    #[test]
    fn test_edit_distance_without_boost() {
        // 1 - 1/7, both strings at least 6 chars
        assert!(approx(similarity("germny", "germany"), 6.0 / 7.0));
    }

    #[test]
    fn test_short_string_boost() {
        // 1 - 1/4 + 0.1
        assert!(approx(similarity("chod", "chad"), 0.85));
        // only one side needs to be short
        assert!(approx(similarity("srbi", "serbia"), 1.0 - 2.0 / 6.0 + 0.1));
    }

    #[test]
    fn test_empty_against_non_empty() {
        // falls through to edit distance: base 0, boosted because "" is short
        assert!(approx(similarity("", "france"), 0.1));
        assert!(approx(similarity("Switzerland", ""), 0.1));
    }

    #[test]
    fn test_bounds() {
        let pairs = [
            ("", "a"),
            ("a", "zzzzzzzzzzzzzzzzzzzzzzzzzzzz"),
            ("abc", "xyz"),
            ("united kingdom", "q"),
            ("ÆØÅ", "æøå"),
        ];
        for (a, b) in pairs {
            let s = similarity(a, b);
            assert!((0.0..=1.0).contains(&s), "{a:?} vs {b:?} gave {s}");
        }
    }

    #[test]
    fn test_containment_ratio_orders_by_length() {
        assert!(approx(containment_ratio("ab", "abcd"), 0.5));
        assert!(approx(containment_ratio("abcd", "ab"), 0.5));
    }
}
