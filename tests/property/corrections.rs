//! The pruned correction walk against brute force.

use proptest::prelude::*;
use suggestrix::{
    bounded_edit_distance, find_corrections, find_corrections_exhaustive,
    find_corrections_with_distance, PrefixIndex,
};

use super::oracles::{oracle_corrections, oracle_entries, oracle_levenshtein, oracle_vocabulary};

fn vocab_strategy(alphabet: &'static str) -> impl Strategy<Value = Vec<(String, u64)>> {
    prop::collection::vec((alphabet, 0u64..20), 1..40)
}

fn build(pairs: &[(String, u64)]) -> PrefixIndex {
    PrefixIndex::from_pairs(pairs.iter().map(|(w, f)| (w.as_str(), *f))).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Pruning never changes the answer.
    #[test]
    fn prop_pruned_matches_exhaustive(
        pairs in vocab_strategy("[abc]{1,6}"),
        query in "[abcd]{1,6}",
        max_distance in 0usize..4,
    ) {
        let index = build(&pairs);
        prop_assert_eq!(
            find_corrections(&index, &query, max_distance),
            find_corrections_exhaustive(&index, &query, max_distance)
        );
    }

    /// Both implementations agree with the oracle on a binary alphabet.
    #[test]
    fn prop_corrections_match_oracle(
        pairs in vocab_strategy("[ab]{1,7}"),
        query in "[ab]{1,7}",
        max_distance in 0usize..3,
    ) {
        let index = build(&pairs);
        let entries = oracle_entries(&oracle_vocabulary(&pairs), &Default::default());
        prop_assert_eq!(
            find_corrections(&index, &query, max_distance),
            oracle_corrections(&entries, &query, max_distance)
        );
    }

    /// Sound: every result is within budget, at its true distance.
    /// Complete: an uncapped result set holds every word within budget.
    #[test]
    fn prop_corrections_sound_and_complete(
        pairs in vocab_strategy("[abc]{1,5}"),
        query in "[abc]{1,5}",
        max_distance in 0usize..3,
    ) {
        let index = build(&pairs);
        let found = find_corrections_with_distance(&index, &query, max_distance);
        for c in &found {
            prop_assert_eq!(c.distance, oracle_levenshtein(&query, &c.entry.word));
            prop_assert!(c.distance <= max_distance);
        }

        let within: Vec<String> = oracle_vocabulary(&pairs)
            .into_keys()
            .filter(|w| oracle_levenshtein(&query, w) <= max_distance)
            .collect();
        if within.len() <= 5 {
            prop_assert_eq!(found.len(), within.len());
            for word in &within {
                prop_assert!(found.iter().any(|c| &c.entry.word == word), "missing {:?}", word);
            }
        } else {
            prop_assert_eq!(found.len(), 5);
        }
    }

    /// The budgeted distance is the oracle distance, cut off at the budget.
    #[test]
    fn prop_bounded_distance_matches_oracle(a in "[abc]{0,7}", b in "[abc]{0,7}", max in 0usize..5) {
        let exact = oracle_levenshtein(&a, &b);
        prop_assert_eq!(bounded_edit_distance(&a, &b, max), (exact <= max).then_some(exact));
    }

    /// Zero distance is an exact-match lookup.
    #[test]
    fn prop_zero_distance_is_exact(pairs in vocab_strategy("[ab]{1,4}"), query in "[ab]{1,4}") {
        let index = build(&pairs);
        let found = find_corrections(&index, &query, 0);
        prop_assert!(found.len() <= 1);
        prop_assert_eq!(found.len() == 1, index.is_complete_word(&query));
    }
}
