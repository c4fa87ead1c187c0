//! Similarity scoring between a query and a candidate name.

use strsim::levenshtein;

use super::{normalize, EXACT_SCORE, SUBSTRING_SCORE};

/// Similarity score (0.0 - 1.0) of `candidate` for `query`.
///
/// Both inputs are trimmed and lowercased. Rules, in order:
/// - equal strings score [`EXACT_SCORE`]
/// - a candidate containing the query scores [`SUBSTRING_SCORE`]
/// - otherwise `1 - levenshtein / max_len`, lengths counted in chars
pub fn score(query: &str, candidate: &str) -> f64 {
    let q = normalize(query);
    let c = normalize(candidate);

    if q == c {
        return EXACT_SCORE;
    }

    if c.contains(q.as_str()) {
        return SUBSTRING_SCORE;
    }

    levenshtein_ratio(&q, &c)
}

/// Levenshtein ratio (0.0 - 1.0).
fn levenshtein_ratio(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return EXACT_SCORE;
    }
    let distance = levenshtein(a, b);
    1.0 - (distance as f64 / max_len as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_exact_match() {
        assert_eq!(score("Milorganite 6-4-0", "Milorganite 6-4-0"), 1.0);
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        assert_eq!(score("  MILORGANITE 6-4-0", "milorganite 6-4-0  "), 1.0);
    }

    #[test]
    fn test_substring_match() {
        assert_eq!(score("milorganite", "Milorganite 6-4-0"), 0.9);
        assert_eq!(score("32-0-4", "Scotts Turf Builder Lawn Food 32-0-4"), 0.9);
    }

    #[test]
    fn test_typo() {
        // "scots" -> "scotts" is one insertion over six chars
        let s = score("scots", "Scotts");
        assert!(approx(s, 1.0 - 1.0 / 6.0), "Score was {}", s);
    }

    #[test]
    fn test_symmetric_without_shortcuts() {
        let ab = score("kitten", "sitting");
        let ba = score("sitting", "kitten");
        assert!(approx(ab, ba));
        assert!(approx(ab, 1.0 - 3.0 / 7.0), "Score was {}", ab);
    }

    #[test]
    fn test_substring_shortcut_is_not_symmetric() {
        assert_eq!(score("lesco", "Lesco 24-0-11"), 0.9);
        assert!(score("Lesco 24-0-11", "lesco") < 0.9);
    }

    #[test]
    fn test_range() {
        let pairs = [
            ("weed", "Milorganite 6-4-0"),
            ("x", "The Andersons 16-0-8 Humic DG"),
            ("a very long query that matches nothing", "Lime"),
            ("zzz", "aaa"),
        ];
        for (q, c) in pairs {
            let s = score(q, c);
            assert!((0.0..=1.0).contains(&s), "score({:?}, {:?}) = {}", q, c, s);
        }
    }

    #[test]
    fn test_completely_different() {
        assert_eq!(score("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(score("", ""), 1.0);
        assert_eq!(score("   ", "\t"), 1.0);
        // Every string contains the empty string
        assert_eq!(score("", "Milorganite"), 0.9);
        assert_eq!(score("lime", ""), 0.0);
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        // One substitution over five chars, even though 'é' is two bytes
        let s = score("creme", "crème");
        assert!(approx(s, 0.8), "Score was {}", s);
    }
}
