// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;

use crate::types::RankedEntry;

/// One character transition in the trie.
///
/// Each node is exclusively owned by its parent; the root is owned by the
/// [`PrefixIndex`](crate::PrefixIndex). Nothing points back up the tree.
#[derive(Debug, Default, Clone)]
pub struct TrieNode {
    pub(crate) children: HashMap<char, TrieNode>,
    pub(crate) is_word_end: bool,
    pub(crate) insertion_frequency: u64,
    pub(crate) usage_frequency: u64,
    /// Best-ranked words in this subtree, this node's own word included.
    pub(crate) top_cache: Vec<RankedEntry>,
}

impl TrieNode {
    pub fn child(&self, ch: char) -> Option<&TrieNode> {
        self.children.get(&ch)
    }

    /// Children in unspecified order.
    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> {
        self.children.iter().map(|(&ch, node)| (ch, node))
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn is_word_end(&self) -> bool {
        self.is_word_end
    }

    pub fn insertion_frequency(&self) -> u64 {
        self.insertion_frequency
    }

    pub fn usage_frequency(&self) -> u64 {
        self.usage_frequency
    }

    pub fn top_cache(&self) -> &[RankedEntry] {
        &self.top_cache
    }

    /// Snapshot of this node's counters under `word`.
    ///
    /// The node doesn't store its own spelling; the caller knows the path.
    pub(crate) fn entry(&self, word: &str) -> RankedEntry {
        RankedEntry::new(word, self.insertion_frequency, self.usage_frequency)
    }
}
