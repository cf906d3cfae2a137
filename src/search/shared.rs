// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A prefix index behind one coarse lock.
//!
//! Writes are rare (bulk load, then one usage bump per confirmed word) and
//! short (one path of five-entry caches). A single `RwLock` is enough: readers
//! never see a cache mid-update, and lookups that don't learn run in parallel.

use parking_lot::{RwLock, RwLockReadGuard};

use super::{answer_without_learning, LookupOptions};
use crate::error::IndexError;
use crate::fuzzy::find_corrections;
use crate::index::PrefixIndex;
use crate::types::{Lookup, LookupKind, RankedEntry};

/// Thread-safe handle around a [`PrefixIndex`]. Wrap in an `Arc` to share.
#[derive(Debug, Default)]
pub struct SharedIndex {
    index: RwLock<PrefixIndex>,
}

impl From<PrefixIndex> for SharedIndex {
    fn from(index: PrefixIndex) -> Self {
        Self::new(index)
    }
}

impl SharedIndex {
    pub fn new(index: PrefixIndex) -> Self {
        Self {
            index: RwLock::new(index),
        }
    }

    pub fn insert(&self, word: &str, weight: u64) -> Result<(), IndexError> {
        self.index.write().insert(word, weight)
    }

    pub fn record_usage(&self, word: &str) -> bool {
        self.index.write().record_usage(word)
    }

    pub fn is_valid_prefix(&self, prefix: &str) -> bool {
        self.index.read().is_valid_prefix(prefix)
    }

    pub fn is_complete_word(&self, word: &str) -> bool {
        self.index.read().is_complete_word(word)
    }

    pub fn top_suggestions_at_prefix(&self, prefix: &str) -> Vec<RankedEntry> {
        self.index.read().top_suggestions_at_prefix(prefix)
    }

    pub fn global_top_list(&self) -> Vec<RankedEntry> {
        self.index.read().global_top_list()
    }

    pub fn find_corrections(&self, query: &str, max_distance: usize) -> Vec<RankedEntry> {
        find_corrections(&self.index.read(), query, max_distance)
    }

    /// Answer a query; see [`lookup_with`](super::lookup_with).
    ///
    /// Only a lookup of a complete word takes the write lock. Words are never
    /// removed, so the word is still complete once the write lock is held.
    pub fn lookup(&self, query: &str, options: &LookupOptions) -> Lookup {
        {
            let index = self.index.read();
            if let Some(answer) = answer_without_learning(&index, query, options) {
                return answer;
            }
        }

        let mut index = self.index.write();
        index.record_usage(query);
        Lookup::new(LookupKind::Autocomplete, index.top_suggestions_at_prefix(query))
    }

    /// Hold the read lock for several queries in a row.
    pub fn read(&self) -> RwLockReadGuard<'_, PrefixIndex> {
        self.index.read()
    }

    pub fn into_inner(self) -> PrefixIndex {
        self.index.into_inner()
    }
}
