// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The query path: one entry point that picks the right answer.
//!
//! Three outcomes, checked in order:
//! 1. **Top** - nothing typed yet, show the best words overall
//! 2. **Autocomplete** - the query is a prefix of something, show its cache
//! 3. **Autocorrect** - the query leads nowhere, search for nearby spellings
//!
//! Autocomplete also learns: when the query is itself a complete word, that
//! word's usage counter goes up before the cache is read, so repeated lookups
//! pull a word toward the top of every prefix above it.

mod shared;

pub use shared::*;

use crate::fuzzy::{find_corrections_using, CorrectionStrategy};
use crate::index::PrefixIndex;
use crate::types::{Lookup, LookupKind, DEFAULT_MAX_DISTANCE};

/// Knobs for [`lookup_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupOptions {
    pub max_distance: usize,
    pub strategy: CorrectionStrategy,
    /// Count a lookup of a complete word as usage.
    pub record_usage: bool,
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self {
            max_distance: DEFAULT_MAX_DISTANCE,
            strategy: CorrectionStrategy::Pruned,
            record_usage: true,
        }
    }
}

impl LookupOptions {
    pub fn with_max_distance(self, max_distance: usize) -> Self {
        Self {
            max_distance,
            ..self
        }
    }
}

/// Answer a query, recording usage when it names a complete word.
///
/// A query that is empty after trimming whitespace gets the global top list.
pub fn lookup(index: &mut PrefixIndex, query: &str, max_distance: usize) -> Lookup {
    lookup_with(
        index,
        query,
        &LookupOptions::default().with_max_distance(max_distance),
    )
}

/// [`lookup`] with every knob exposed.
pub fn lookup_with(index: &mut PrefixIndex, query: &str, options: &LookupOptions) -> Lookup {
    if let Some(answer) = answer_without_learning(index, query, options) {
        return answer;
    }
    index.record_usage(query);
    Lookup::new(LookupKind::Autocomplete, index.top_suggestions_at_prefix(query))
}

/// Everything a lookup can do under a shared borrow.
///
/// `None` means the query is a complete word whose usage must be recorded
/// first; the caller needs `&mut` for that.
pub(crate) fn answer_without_learning(
    index: &PrefixIndex,
    query: &str,
    options: &LookupOptions,
) -> Option<Lookup> {
    if query.trim().is_empty() {
        return Some(Lookup::new(LookupKind::Top, index.global_top_list()));
    }

    if !index.is_valid_prefix(query) {
        let entries = find_corrections_using(index, query, options.max_distance, options.strategy);
        return Some(Lookup::new(LookupKind::Autocorrect, entries));
    }

    if options.record_usage && index.is_complete_word(query) {
        return None;
    }
    Some(Lookup::new(
        LookupKind::Autocomplete,
        index.top_suggestions_at_prefix(query),
    ))
}
