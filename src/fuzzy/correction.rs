// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Spelling correction over the trie.
//!
//! The naive approach computes a full Levenshtein table against every word in
//! the vocabulary. The trie lets us share work: words with a common prefix
//! share the DP rows for that prefix, so we compute each row once per node and
//! hand it down to the children.
//!
//! Row `r` at a node holds, for every prefix `query[..j]`, the edit distance
//! between the node's path and `query[..j]`. Extending the path by one char
//! can only keep or grow every cell's lower bound, so once `min(r) > max`
//! no descendant can come back within budget and the whole subtree is skipped.
//!
//! Distance is a hard cutoff, not a score. Among the survivors, ranking is the
//! same usage-then-weight order as everywhere else: a popular word two edits
//! away beats an obscure word one edit away.

use serde::{Deserialize, Serialize};
use tracing::trace;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::levenshtein::bounded_edit_distance;
use crate::index::{PrefixIndex, TrieNode};
use crate::scoring::ranking::compare_entries;
use crate::types::{RankedEntry, MAX_SUGGESTIONS};

/// How to search for corrections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrectionStrategy {
    /// Trie walk with incremental rows and subtree pruning.
    #[default]
    Pruned,
    /// Full Levenshtein against every indexed word.
    Exhaustive,
}

/// A correction candidate with its distance from the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Correction {
    pub entry: RankedEntry,
    pub distance: usize,
}

/// Best-ranked indexed words within `max_distance` edits of `query`.
///
/// At most [`MAX_SUGGESTIONS`] entries, best first. An empty query has no
/// corrections. `max_distance == 0` is an exact-match lookup.
pub fn find_corrections(index: &PrefixIndex, query: &str, max_distance: usize) -> Vec<RankedEntry> {
    into_entries(find_corrections_with_distance(index, query, max_distance))
}

/// [`find_corrections`] with the strategy chosen at runtime.
pub fn find_corrections_using(
    index: &PrefixIndex,
    query: &str,
    max_distance: usize,
    strategy: CorrectionStrategy,
) -> Vec<RankedEntry> {
    match strategy {
        CorrectionStrategy::Pruned => find_corrections(index, query, max_distance),
        CorrectionStrategy::Exhaustive => find_corrections_exhaustive(index, query, max_distance),
    }
}

/// The pruned trie walk, keeping each candidate's distance.
pub fn find_corrections_with_distance(
    index: &PrefixIndex,
    query: &str,
    max_distance: usize,
) -> Vec<Correction> {
    let query: Vec<char> = query.chars().collect();
    if query.is_empty() {
        return Vec::new();
    }

    let first_row: Vec<usize> = (0..=query.len()).collect();
    let root = index.root();

    #[cfg(feature = "parallel")]
    let walks: Vec<RowWalk> = root
        .children
        .par_iter()
        .map(|(&ch, child)| {
            let mut walk = RowWalk::new(&query, max_distance);
            walk.descend(child, ch, &first_row);
            walk
        })
        .collect();

    #[cfg(not(feature = "parallel"))]
    let walks: Vec<RowWalk> = root
        .children()
        .map(|(ch, child)| {
            let mut walk = RowWalk::new(&query, max_distance);
            walk.descend(child, ch, &first_row);
            walk
        })
        .collect();

    let mut visited = 0;
    let mut pruned = 0;
    let mut candidates = Vec::new();
    for walk in walks {
        visited += walk.visited;
        pruned += walk.pruned;
        candidates.extend(walk.candidates);
    }

    trace!(
        query = %query.iter().collect::<String>(),
        max_distance,
        visited,
        pruned,
        candidates = candidates.len(),
        "correction search"
    );

    rank_corrections(candidates)
}

/// Reference implementation: Levenshtein distance to every indexed word.
///
/// Asymptotically worse than [`find_corrections`] but obviously correct.
pub fn find_corrections_exhaustive(
    index: &PrefixIndex,
    query: &str,
    max_distance: usize,
) -> Vec<RankedEntry> {
    if query.is_empty() {
        return Vec::new();
    }

    let candidates = index
        .entries()
        .into_iter()
        .filter_map(|entry| {
            let distance = bounded_edit_distance(query, &entry.word, max_distance)?;
            Some(Correction { entry, distance })
        })
        .collect();

    into_entries(rank_corrections(candidates))
}

fn rank_corrections(mut candidates: Vec<Correction>) -> Vec<Correction> {
    candidates.sort_unstable_by(|a, b| compare_entries(&a.entry, &b.entry));
    candidates.truncate(MAX_SUGGESTIONS);
    candidates
}

fn into_entries(corrections: Vec<Correction>) -> Vec<RankedEntry> {
    corrections.into_iter().map(|c| c.entry).collect()
}

/// Depth-first walk of one root subtree, one DP row per level.
struct RowWalk<'q> {
    query: &'q [char],
    max_distance: usize,
    /// Path from the root to the current node.
    word: String,
    candidates: Vec<Correction>,
    visited: usize,
    pruned: usize,
}

impl<'q> RowWalk<'q> {
    fn new(query: &'q [char], max_distance: usize) -> Self {
        Self {
            query,
            max_distance,
            word: String::new(),
            candidates: Vec::new(),
            visited: 0,
            pruned: 0,
        }
    }

    fn descend(&mut self, node: &TrieNode, ch: char, prev_row: &[usize]) {
        self.visited += 1;

        let columns = self.query.len() + 1;
        let mut row = Vec::with_capacity(columns);
        row.push(prev_row[0] + 1);
        for i in 1..columns {
            let insert_cost = row[i - 1] + 1;
            let delete_cost = prev_row[i] + 1;
            let replace_cost = prev_row[i - 1] + usize::from(self.query[i - 1] != ch);
            row.push(insert_cost.min(delete_cost).min(replace_cost));
        }

        self.word.push(ch);

        let distance = row[columns - 1];
        if node.is_word_end && distance <= self.max_distance {
            self.candidates.push(Correction {
                entry: node.entry(&self.word),
                distance,
            });
        }

        let row_min = row.iter().copied().min().unwrap_or(usize::MAX);
        if row_min <= self.max_distance {
            for (&next, child) in &node.children {
                self.descend(child, next, &row);
            }
        } else if !node.children.is_empty() {
            self.pruned += 1;
        }

        self.word.pop();
    }
}

impl PrefixIndex {
    /// See [`find_corrections`].
    pub fn find_corrections(&self, query: &str, max_distance: usize) -> Vec<RankedEntry> {
        find_corrections(self, query, max_distance)
    }
}
