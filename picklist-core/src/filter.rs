//! Search normalization and matching
//!
//! Matching is case-insensitive and ignores combining diacritical marks:
//! the query and each label are lowercased, decomposed to NFD and
//! stripped of combining marks before the substring test, so "jose"
//! finds both "José" and "JOSÉ".

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalize a label or query for matching
pub fn normalize_for_match(s: &str) -> String {
    s.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Test a label against an already-normalized query
pub fn label_matches(label: &str, normalized_query: &str) -> bool {
    normalize_for_match(label).contains(normalized_query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_lowercases() {
        assert_eq!(normalize_for_match("Ada Lovelace"), "ada lovelace");
    }

    #[test]
    fn normalization_strips_diacritics() {
        assert_eq!(normalize_for_match("José"), "jose");
        assert_eq!(normalize_for_match("JOSÉ"), "jose");
        assert_eq!(normalize_for_match("Ångström"), "angstrom");
    }

    #[test]
    fn decomposed_input_matches_precomposed() {
        // e + combining acute vs. precomposed é
        assert_eq!(
            normalize_for_match("e\u{0301}"),
            normalize_for_match("\u{00E9}")
        );
    }

    #[test]
    fn match_is_substring_based() {
        let query = normalize_for_match("jos");
        assert!(label_matches("José María", &query));
        assert!(label_matches("Josefina", &query));
        assert!(!label_matches("Juan", &query));
    }

    #[test]
    fn empty_query_matches_everything() {
        let query = normalize_for_match("");
        assert!(label_matches("anything", &query));
    }
}
