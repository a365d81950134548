//! Token-order-insensitive similarity scoring between normalized names.

use std::cmp::Ordering;

use crate::{data::ScoredMatch, macros::logs::trace_score, utils::sorted_tokens};

/// Highest possible similarity score
pub const MAX_SCORE: f64 = 100.0;

const STAGE: &str = "similarity";

/// Similarity between two names on a 0-100 scale, ignoring the order of their words
///
/// Both names are split on whitespace, their tokens sorted and re-joined, and the results
/// compared with the normalized Indel ratio. Two empty names are identical (100), while an
/// empty name scores 0 against anything else.
pub fn token_sort_ratio(a: impl AsRef<str>, b: impl AsRef<str>) -> f64 {
    score_sorted(&sorted_tokens(a), &sorted_tokens(b))
}

/// Score two names whose tokens have already been sorted
fn score_sorted(a: &str, b: &str) -> f64 {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => MAX_SCORE,
        (true, false) | (false, true) => 0.0,
        (false, false) => rapidfuzz::fuzz::ratio(a.chars(), b.chars()) * MAX_SCORE,
    }
}

/// Orders matches from best to worst: highest score first, then lexicographically by name so
/// that ties always resolve the same way
pub fn rank(a: &ScoredMatch, b: &ScoredMatch) -> Ordering {
    b.score.total_cmp(&a.score).then_with(|| a.name.cmp(&b.name))
}

/// Scores `query` against every candidate, keeping those scoring at least `score_cutoff`
///
/// Results are ordered with [`rank`]. The query is compared as is, so it should already be
/// normalized.
#[tracing::instrument(level = "trace", skip(candidates))]
pub fn extract<S: AsRef<str>>(
    query: &str,
    candidates: &[S],
    score_cutoff: f64,
) -> Vec<ScoredMatch> {
    let sorted_query = sorted_tokens(query);

    let mut matches = candidates
        .iter()
        .filter_map(|candidate| {
            let candidate = candidate.as_ref();
            let score = score_sorted(&sorted_query, &sorted_tokens(candidate));
            trace_score!(query, candidate, score);

            (score >= score_cutoff).then(|| ScoredMatch::new(candidate, score))
        })
        .collect::<Vec<ScoredMatch>>();

    matches.sort_by(rank);
    matches
}

#[cfg(test)]
pub mod test {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("the elder scrolls v skyrim", "the elder scrolls v skyrim"; "identical")]
    #[test_case("skyrim the elder scrolls v", "the elder scrolls v skyrim"; "reordered")]
    #[test_case("the  elder scrolls v skyrim", "the elder scrolls v skyrim"; "extra whitespace")]
    #[test_case("", ""; "both empty")]
    fn test_token_sort_ratio_perfect(a: &str, b: &str) {
        assert_eq!(token_sort_ratio(a, b), MAX_SCORE);
    }

    #[test_case("", "bioshock")]
    #[test_case("bioshock", "")]
    fn test_token_sort_ratio_one_empty(a: &str, b: &str) {
        assert_eq!(token_sort_ratio(a, b), 0.0);
    }

    #[test]
    fn test_token_sort_ratio_values() {
        // "elder scrolls skyrim the v" (26) vs "elder goty scrolls skyrim the v" (31)
        let score = token_sort_ratio(
            "the elder scrolls v skyrim",
            "the elder scrolls v skyrim goty",
        );
        assert!((score - 5200.0 / 57.0).abs() < 1e-9, "unexpected score {score}");

        let score = token_sort_ratio("bioshock infinite", "bioshock 2");
        assert!(score < 85.0, "unexpected score {score}");
    }

    #[test]
    fn test_token_sort_ratio_symmetric() {
        let pairs = [
            ("portal 2", "portal"),
            ("half life 2 episode one", "half life 2 episode two"),
            ("fallout new vegas", "new vegas fallout ultimate"),
        ];

        for (a, b) in pairs {
            assert_eq!(token_sort_ratio(a, b), token_sort_ratio(b, a));
        }
    }

    #[test]
    fn test_extract_orders_and_filters() {
        let candidates = [
            "bioshock 2",
            "infinite bioshock",
            "bioshock infinite",
            "bioshock infinite goty",
        ];

        let matches = extract("bioshock infinite", &candidates, 85.0);

        assert_eq!(
            matches
                .iter()
                .map(|m| m.name.as_str())
                .collect::<Vec<&str>>(),
            vec!["bioshock infinite", "infinite bioshock", "bioshock infinite goty"]
        );
        assert_eq!(matches[0].score, MAX_SCORE);
        assert_eq!(matches[1].score, MAX_SCORE);
        assert!(matches[2].score < MAX_SCORE);
    }

    #[test]
    fn test_extract_empty_candidates() {
        let candidates: [&str; 0] = [];
        assert!(extract("portal", &candidates, 0.0).is_empty());
    }
}
