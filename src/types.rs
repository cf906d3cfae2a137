// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The values that flow out of the index.
//!
//! A `RankedEntry` is a snapshot of one vocabulary word and its two counters.
//! It never changes after construction: when a word's counters move, every
//! cache that held the old snapshot gets a fresh one instead.
//!
//! # Invariants
//!
//! - **RankedEntry**: `word` is non-empty. Entries for the same word always
//!   carry the counters of the word's node at the time they were cached.
//!
//! - **Lookup**: `entries.len() ≤ MAX_SUGGESTIONS` and `entries` is sorted by
//!   [`compare_entries`](crate::compare_entries).

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::scoring::ranking::compare_entries;

/// Upper bound on every per-node cache and every ranked result list.
pub const MAX_SUGGESTIONS: usize = 5;

/// Edit distance used when a host has no opinion of its own.
pub const DEFAULT_MAX_DISTANCE: usize = 2;

// =============================================================================
// RANKED ENTRY
// =============================================================================

/// One vocabulary word with the counters that decide its rank.
///
/// Serializes as `{"word", "freq", "searchFreq"}`, the shape suggestion
/// clients already consume.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RankedEntry {
    pub word: String,
    /// Cumulative weight from every `insert` of this word.
    #[serde(rename = "freq")]
    pub insertion_frequency: u64,
    /// How many times a lookup confirmed this exact word.
    #[serde(rename = "searchFreq")]
    pub usage_frequency: u64,
}

impl RankedEntry {
    pub fn new(word: impl Into<String>, insertion_frequency: u64, usage_frequency: u64) -> Self {
        Self {
            word: word.into(),
            insertion_frequency,
            usage_frequency,
        }
    }
}

/// `a < b` means `a` ranks ahead of `b`, so `sort()` yields best-first order.
impl Ord for RankedEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_entries(self, other)
    }
}

impl PartialOrd for RankedEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// =============================================================================
// LOOKUP RESULT
// =============================================================================

/// Which path a lookup took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupKind {
    /// Empty query: the best words in the whole vocabulary.
    Top,
    /// The query is a prefix of at least one indexed word.
    Autocomplete,
    /// The query matched no prefix; entries are spelling corrections.
    Autocorrect,
}

impl LookupKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LookupKind::Top => "top",
            LookupKind::Autocomplete => "autocomplete",
            LookupKind::Autocorrect => "autocorrect",
        }
    }
}

impl std::fmt::Display for LookupKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of [`lookup`](crate::lookup): `{"type": ..., "suggestions": [...]}` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lookup {
    #[serde(rename = "type")]
    pub kind: LookupKind,
    #[serde(rename = "suggestions")]
    pub entries: Vec<RankedEntry>,
}

impl Lookup {
    pub fn new(kind: LookupKind, entries: Vec<RankedEntry>) -> Self {
        Self { kind, entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Words only, in rank order.
    pub fn words(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.word.as_str()).collect()
    }
}

// =============================================================================
// STATISTICS
// =============================================================================

/// Shape of a built index, reported by `inspect`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexStats {
    /// Distinct indexed words.
    pub words: usize,
    /// Trie nodes, root included.
    pub nodes: usize,
    /// Length in chars of the longest indexed word.
    pub max_depth: usize,
    pub total_insertion_frequency: u64,
    pub total_usage_frequency: u64,
}
