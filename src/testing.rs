//! Test utilities shared across unit tests, integration tests and benches.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::index::PrefixIndex;
use crate::types::RankedEntry;

/// The three-word vocabulary most scenarios start from.
pub const CAT_CAR_CART: &[(&str, u64)] = &[("cat", 10), ("car", 10), ("cart", 5)];

/// A dozen words sharing the `ap`, `ba` and `ban` prefixes.
pub const FRUIT_AND_BANDS: &[(&str, u64)] = &[
    ("apple", 10),
    ("application", 15),
    ("app", 20),
    ("apricot", 5),
    ("ape", 8),
    ("apex", 12),
    ("banana", 7),
    ("band", 9),
    ("bandana", 6),
    ("bandwidth", 4),
    ("bat", 11),
    ("batch", 3),
];

/// Build an index from static pairs. Panics on an empty word.
pub fn index_from(pairs: &[(&str, u64)]) -> PrefixIndex {
    PrefixIndex::from_pairs(pairs.iter().copied()).expect("test vocabulary has no empty words")
}

/// Words of a ranked list, in order.
pub fn words_of(entries: &[RankedEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.word.as_str()).collect()
}

/// Deterministic pseudo-random vocabulary over `alphabet`.
///
/// Linear congruential, so benches and tests see the same words on every run.
pub fn synthetic_vocabulary(count: usize, alphabet: &[char], max_len: usize, seed: u64) -> Vec<(String, u64)> {
    let mut state = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
    let mut next = move || {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        state >> 33
    };

    (0..count)
        .map(|_| {
            let len = 1 + (next() as usize % max_len.max(1));
            let word: String = (0..len)
                .map(|_| alphabet[next() as usize % alphabet.len()])
                .collect();
            (word, next() % 1000)
        })
        .collect()
}
