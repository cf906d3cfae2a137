// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how suggestions get sorted.
//!
//! Usage beats weight. A word that lookups confirmed once outranks a word with
//! a million corpus occurrences and no confirmations. Insertion weight only
//! breaks ties between equal usage, and the word itself breaks the rest.
//!
//! Because distinct words never compare equal, every sorted list is unique.
//! Tests can assert exact orderings without caring about hash iteration order
//! or traversal order in the trie.

use crate::types::RankedEntry;
use std::cmp::Ordering;

/// Compare two entries for ranking.
///
/// Sort order:
/// 1. **Usage frequency** - higher wins
/// 2. **Insertion frequency** - higher wins
/// 3. **Word** - lexicographically smaller wins
///
/// `Ordering::Less` means `a` ranks ahead of `b`.
pub fn compare_entries(a: &RankedEntry, b: &RankedEntry) -> Ordering {
    b.usage_frequency
        .cmp(&a.usage_frequency)
        .then_with(|| b.insertion_frequency.cmp(&a.insertion_frequency))
        .then_with(|| a.word.cmp(&b.word))
}

/// Replace `entry.word`'s slot in a ranked list, keeping it sorted and at most `limit` long.
///
/// Any stale snapshot of the same word is dropped first, so the list never
/// holds a word twice. If the new entry ranks below a full list it falls off
/// the end.
pub fn upsert_ranked(list: &mut Vec<RankedEntry>, entry: RankedEntry, limit: usize) {
    list.retain(|existing| existing.word != entry.word);
    let position = list.partition_point(|existing| compare_entries(existing, &entry) == Ordering::Less);
    if position < limit {
        list.insert(position, entry);
    }
    list.truncate(limit);
}

/// Keep the `limit` best entries of an unordered candidate set, best first.
pub fn top_ranked(mut entries: Vec<RankedEntry>, limit: usize) -> Vec<RankedEntry> {
    if limit == 0 {
        entries.clear();
        return entries;
    }
    if entries.len() > limit {
        entries.select_nth_unstable_by(limit - 1, compare_entries);
        entries.truncate(limit);
    }
    entries.sort_unstable_by(compare_entries);
    entries
}

/// Is every adjacent pair strictly ordered?
pub fn is_ranked(entries: &[RankedEntry]) -> bool {
    entries
        .windows(2)
        .all(|pair| compare_entries(&pair[0], &pair[1]) == Ordering::Less)
}
