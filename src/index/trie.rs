// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use tracing::trace;

use super::node::TrieNode;
use crate::error::IndexError;
use crate::scoring::ranking::upsert_ranked;
use crate::types::{IndexStats, RankedEntry, MAX_SUGGESTIONS};
use crate::verify::contracts::check_cache;

/// A character trie that knows its best completions at every prefix.
///
/// Mutation takes `&mut self`; there is no interior locking. Hosts that serve
/// lookups from several threads wrap the index in a
/// [`SharedIndex`](crate::SharedIndex).
///
/// # Example
///
/// ```
/// use suggestrix::PrefixIndex;
///
/// let mut index = PrefixIndex::new();
/// index.insert("cat", 10).unwrap();
/// index.insert("car", 10).unwrap();
/// index.insert("cart", 5).unwrap();
///
/// let words: Vec<_> = index
///     .top_suggestions_at_prefix("ca")
///     .into_iter()
///     .map(|e| e.word)
///     .collect();
/// assert_eq!(words, ["car", "cat", "cart"]);
/// ```
#[derive(Debug, Clone)]
pub struct PrefixIndex {
    root: TrieNode,
    words: usize,
    nodes: usize,
}

impl Default for PrefixIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixIndex {
    pub fn new() -> Self {
        Self {
            root: TrieNode::default(),
            words: 0,
            nodes: 1,
        }
    }

    /// Build an index from `(word, weight)` pairs, failing on the first empty word.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, IndexError>
    where
        I: IntoIterator<Item = (S, u64)>,
        S: AsRef<str>,
    {
        let mut index = Self::new();
        index.insert_all(pairs)?;
        Ok(index)
    }

    /// Insert every pair in order. Returns how many pairs were applied.
    pub fn insert_all<I, S>(&mut self, pairs: I) -> Result<usize, IndexError>
    where
        I: IntoIterator<Item = (S, u64)>,
        S: AsRef<str>,
    {
        let mut applied = 0;
        for (word, weight) in pairs {
            self.insert(word.as_ref(), weight)?;
            applied += 1;
        }
        Ok(applied)
    }

    // =========================================================================
    // MUTATION
    // =========================================================================

    /// Add `weight` to `word`, creating its path if needed.
    ///
    /// Inserting an indexed word again accumulates weight; the vocabulary
    /// never holds the same word twice. Weight saturates at `u64::MAX`.
    pub fn insert(&mut self, word: &str, weight: u64) -> Result<(), IndexError> {
        if word.is_empty() {
            return Err(IndexError::EmptyWord);
        }

        let mut created = 0;
        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_insert_with(|| {
                created += 1;
                TrieNode::default()
            });
        }

        if !node.is_word_end {
            node.is_word_end = true;
            self.words += 1;
        }
        node.insertion_frequency = node.insertion_frequency.saturating_add(weight);
        let entry = node.entry(word);

        self.nodes += created;
        self.rethread(word, &entry);
        Ok(())
    }

    /// Count one confirmed lookup of `word`.
    ///
    /// Returns `false` and changes nothing when `word` is not an indexed word
    /// (absent, or only a prefix of longer words). Usage feedback is best
    /// effort, so this is never an error.
    pub fn record_usage(&mut self, word: &str) -> bool {
        let Some(node) = self.find_node_mut(word) else {
            return false;
        };
        if !node.is_word_end {
            return false;
        }

        node.usage_frequency = node.usage_frequency.saturating_add(1);
        let entry = node.entry(word);
        trace!(word, usage = entry.usage_frequency, "recorded usage");

        self.rethread(word, &entry);
        true
    }

    /// Push a fresh snapshot of `word` into every cache from the root to its node.
    ///
    /// Counters only grow, so an entry that fell out of an ancestor's cache
    /// stays out until its own counters move, at which point this runs again.
    fn rethread(&mut self, word: &str, entry: &RankedEntry) {
        let mut node = &mut self.root;
        upsert_ranked(&mut node.top_cache, entry.clone(), MAX_SUGGESTIONS);
        check_cache(&node.top_cache);

        for ch in word.chars() {
            let Some(child) = node.children.get_mut(&ch) else {
                return;
            };
            node = child;
            upsert_ranked(&mut node.top_cache, entry.clone(), MAX_SUGGESTIONS);
            check_cache(&node.top_cache);
        }
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Does some indexed word start with `prefix`? The empty prefix always does.
    pub fn is_valid_prefix(&self, prefix: &str) -> bool {
        self.find_node(prefix).is_some()
    }

    /// Is `word` itself an indexed word, not merely a prefix of one?
    pub fn is_complete_word(&self, word: &str) -> bool {
        self.find_node(word).is_some_and(TrieNode::is_word_end)
    }

    /// The cached best completions of `prefix`, best first. Empty if none.
    pub fn top_suggestions_at_prefix(&self, prefix: &str) -> Vec<RankedEntry> {
        self.find_node(prefix)
            .map(|node| node.top_cache.clone())
            .unwrap_or_default()
    }

    /// The best words in the whole vocabulary.
    pub fn global_top_list(&self) -> Vec<RankedEntry> {
        self.root.top_cache.clone()
    }

    /// Current counters of an indexed word.
    pub fn entry(&self, word: &str) -> Option<RankedEntry> {
        self.find_node(word)
            .filter(|node| node.is_word_end)
            .map(|node| node.entry(word))
    }

    /// Every indexed word with its counters, in unspecified order.
    pub fn entries(&self) -> Vec<RankedEntry> {
        let mut out = Vec::with_capacity(self.words);
        let mut word = String::new();
        collect_entries(&self.root, &mut word, &mut out);
        out
    }

    /// Distinct indexed words.
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Trie nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    pub fn stats(&self) -> IndexStats {
        let mut stats = IndexStats {
            words: self.words,
            nodes: self.nodes,
            ..IndexStats::default()
        };
        accumulate_stats(&self.root, 0, &mut stats);
        stats
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Node at the end of `prefix`, if the path exists.
    pub fn find_node(&self, prefix: &str) -> Option<&TrieNode> {
        prefix
            .chars()
            .try_fold(&self.root, |node, ch| node.children.get(&ch))
    }

    fn find_node_mut(&mut self, prefix: &str) -> Option<&mut TrieNode> {
        let mut node = &mut self.root;
        for ch in prefix.chars() {
            node = node.children.get_mut(&ch)?;
        }
        Some(node)
    }
}

fn collect_entries(node: &TrieNode, word: &mut String, out: &mut Vec<RankedEntry>) {
    if node.is_word_end {
        out.push(node.entry(word));
    }
    for (&ch, child) in &node.children {
        word.push(ch);
        collect_entries(child, word, out);
        word.pop();
    }
}

fn accumulate_stats(node: &TrieNode, depth: usize, stats: &mut IndexStats) {
    if node.is_word_end {
        stats.max_depth = stats.max_depth.max(depth);
        stats.total_insertion_frequency = stats
            .total_insertion_frequency
            .saturating_add(node.insertion_frequency);
        stats.total_usage_frequency = stats
            .total_usage_frequency
            .saturating_add(node.usage_frequency);
    }
    for child in node.children.values() {
        accumulate_stats(child, depth + 1, stats);
    }
}
