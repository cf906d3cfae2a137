//! Cache invariants after arbitrary insert and usage sequences.

use std::collections::BTreeMap;

use proptest::prelude::*;
use suggestrix::{lookup, PrefixIndex, MAX_SUGGESTIONS};

use super::common::assert_index_well_formed;
use super::oracles::{oracle_entries, oracle_top_at_prefix, oracle_vocabulary};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Short words over a small alphabet so prefixes are heavily shared.
fn word_strategy() -> impl Strategy<Value = String> {
    "[abc]{1,5}"
}

fn vocab_strategy() -> impl Strategy<Value = Vec<(String, u64)>> {
    prop::collection::vec((word_strategy(), 0u64..20), 1..40)
}

fn build(pairs: &[(String, u64)]) -> PrefixIndex {
    PrefixIndex::from_pairs(pairs.iter().map(|(w, f)| (w.as_str(), *f))).unwrap()
}

/// Every prefix of every word, plus the empty prefix.
fn all_prefixes(pairs: &[(String, u64)]) -> Vec<String> {
    let mut prefixes = vec![String::new()];
    for (word, _) in pairs {
        for (i, _) in word.char_indices().skip(1) {
            prefixes.push(word[..i].to_string());
        }
        prefixes.push(word.clone());
    }
    prefixes.sort();
    prefixes.dedup();
    prefixes
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every cache equals the brute-force top five of its subtree.
    #[test]
    fn prop_caches_match_oracle(pairs in vocab_strategy()) {
        let index = build(&pairs);
        let entries = oracle_entries(&oracle_vocabulary(&pairs), &BTreeMap::new());

        for prefix in all_prefixes(&pairs) {
            let cached = index.top_suggestions_at_prefix(&prefix);
            prop_assert!(cached.len() <= MAX_SUGGESTIONS);
            prop_assert_eq!(cached, oracle_top_at_prefix(&entries, &prefix), "prefix {:?}", prefix);
        }
        prop_assert_eq!(index.global_top_list(), oracle_top_at_prefix(&entries, ""));
        assert_index_well_formed(&index);
    }

    /// Inserting the same word repeatedly sums its weight under one entry.
    #[test]
    fn prop_insert_is_additive(word in word_strategy(), weights in prop::collection::vec(0u64..1000, 1..6)) {
        let mut index = PrefixIndex::new();
        for &w in &weights {
            index.insert(&word, w).unwrap();
        }
        prop_assert_eq!(index.len(), 1);
        prop_assert_eq!(index.entry(&word).unwrap().insertion_frequency, weights.iter().sum::<u64>());
        prop_assert_eq!(index.global_top_list().len(), 1);
    }

    /// Any prefix of a valid prefix is valid.
    #[test]
    fn prop_prefix_monotonicity(pairs in vocab_strategy(), probe in "[abcd]{0,6}") {
        let index = build(&pairs);
        if index.is_valid_prefix(&probe) {
            for (i, _) in probe.char_indices() {
                prop_assert!(index.is_valid_prefix(&probe[..i]));
            }
        }
    }

    /// Usage recorded through lookups keeps every cache exact.
    #[test]
    fn prop_usage_keeps_caches_exact(
        pairs in vocab_strategy(),
        queries in prop::collection::vec("[abc]{0,5}", 0..30),
    ) {
        let mut index = build(&pairs);
        let vocab = oracle_vocabulary(&pairs);
        let mut usage = BTreeMap::new();

        for q in &queries {
            lookup(&mut index, q, 1);
            if vocab.contains_key(q) {
                *usage.entry(q.clone()).or_insert(0u64) += 1;
            }
        }

        let entries = oracle_entries(&vocab, &usage);
        for prefix in all_prefixes(&pairs) {
            prop_assert_eq!(
                index.top_suggestions_at_prefix(&prefix),
                oracle_top_at_prefix(&entries, &prefix),
                "prefix {:?}",
                prefix
            );
        }
        assert_index_well_formed(&index);
    }

    /// Of two equally weighted words sharing a prefix, the used one ranks first.
    #[test]
    fn prop_usage_perturbs_ranking(
        stem in "[ab]{0,3}",
        (x, y) in ("[c-z]", "[c-z]").prop_filter("distinct", |(x, y)| x != y),
        weight in 0u64..100,
    ) {
        let first = format!("{}{}", stem, x);
        let second = format!("{}{}", stem, y);
        let mut index = PrefixIndex::from_pairs([(first.as_str(), weight), (second.as_str(), weight)]).unwrap();

        let used = first.max(second);
        prop_assert!(index.record_usage(&used));
        prop_assert_eq!(&index.top_suggestions_at_prefix(&stem)[0].word, &used);
    }
}
