//! Reference oracles for differential testing.
//!
//! Simple, obviously-correct implementations that recompute from the raw
//! vocabulary what the index answers from its caches and pruned walks.

use std::collections::BTreeMap;

use proptest::prelude::*;
use suggestrix::{RankedEntry, MAX_SUGGESTIONS};

// =============================================================================
// ORACLE IMPLEMENTATIONS
// =============================================================================

/// Classic Levenshtein edit distance via the full dynamic-programming table.
pub fn oracle_levenshtein(s1: &str, s2: &str) -> usize {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    let mut table = vec![vec![0usize; b.len() + 1]; a.len() + 1];

    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b.len() {
        table[0][j] = j;
    }
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            table[i][j] = (table[i - 1][j] + 1) // deletion
                .min(table[i][j - 1] + 1) // insertion
                .min(table[i - 1][j - 1] + cost); // substitution
        }
    }
    table[a.len()][b.len()]
}

/// Fold a vocabulary the way repeated inserts do: one entry per word, weights summed.
pub fn oracle_vocabulary(pairs: &[(String, u64)]) -> BTreeMap<String, u64> {
    let mut vocab = BTreeMap::new();
    for (word, weight) in pairs {
        *vocab.entry(word.clone()).or_insert(0) += weight;
    }
    vocab
}

/// Apply usage counts to a folded vocabulary.
pub fn oracle_entries(vocab: &BTreeMap<String, u64>, usage: &BTreeMap<String, u64>) -> Vec<RankedEntry> {
    vocab
        .iter()
        .map(|(word, &weight)| RankedEntry::new(word.clone(), weight, usage.get(word).copied().unwrap_or(0)))
        .collect()
}

/// Best five words starting with `prefix`, by full sort.
pub fn oracle_top_at_prefix(entries: &[RankedEntry], prefix: &str) -> Vec<RankedEntry> {
    let mut matching: Vec<RankedEntry> = entries
        .iter()
        .filter(|e| e.word.starts_with(prefix))
        .cloned()
        .collect();
    matching.sort();
    matching.truncate(MAX_SUGGESTIONS);
    matching
}

/// Best five words within `max_distance` of `query`, by full scan.
pub fn oracle_corrections(entries: &[RankedEntry], query: &str, max_distance: usize) -> Vec<RankedEntry> {
    if query.is_empty() {
        return Vec::new();
    }
    let mut within: Vec<RankedEntry> = entries
        .iter()
        .filter(|e| oracle_levenshtein(query, &e.word) <= max_distance)
        .cloned()
        .collect();
    within.sort();
    within.truncate(MAX_SUGGESTIONS);
    within
}

// =============================================================================
// ORACLE SELF-TESTS
// =============================================================================

#[test]
fn oracle_levenshtein_known_values() {
    assert_eq!(oracle_levenshtein("", ""), 0);
    assert_eq!(oracle_levenshtein("kitten", "sitting"), 3);
    assert_eq!(oracle_levenshtein("kat", "cart"), 2);
    assert_eq!(oracle_levenshtein("bnad", "band"), 2);
    assert_eq!(oracle_levenshtein("abc", ""), 3);
}

#[test]
fn oracle_top_at_prefix_sorts_and_caps() {
    let vocab = oracle_vocabulary(&[
        ("cat".into(), 10),
        ("car".into(), 10),
        ("cart".into(), 5),
        ("dog".into(), 50),
    ]);
    let entries = oracle_entries(&vocab, &BTreeMap::new());
    let words: Vec<String> = oracle_top_at_prefix(&entries, "ca").into_iter().map(|e| e.word).collect();
    assert_eq!(words, vec!["car", "cat", "cart"]);
}

proptest! {
    #[test]
    fn oracle_levenshtein_symmetric(a in "[abc]{0,6}", b in "[abc]{0,6}") {
        prop_assert_eq!(oracle_levenshtein(&a, &b), oracle_levenshtein(&b, &a));
    }

    #[test]
    fn oracle_levenshtein_bounded_by_longer(a in "[abc]{0,6}", b in "[abc]{0,6}") {
        let d = oracle_levenshtein(&a, &b);
        prop_assert!(d <= a.chars().count().max(b.chars().count()));
        prop_assert!(d >= a.chars().count().abs_diff(b.chars().count()));
    }
}
