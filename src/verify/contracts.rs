// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts checked on every mutated path.
//!
//! These are `debug_assert!`s: free in release builds, loud in tests.

use crate::scoring::ranking::is_ranked;
use crate::types::{RankedEntry, MAX_SUGGESTIONS};

/// A cache holds at most `MAX_SUGGESTIONS` entries.
#[inline]
pub fn check_cache_bounded(cache: &[RankedEntry]) {
    debug_assert!(
        cache.len() <= MAX_SUGGESTIONS,
        "Contract violation: cache holds {} entries (max {})",
        cache.len(),
        MAX_SUGGESTIONS
    );
}

/// A cache is strictly ordered best-first, which also rules out duplicate words.
#[inline]
pub fn check_cache_sorted(cache: &[RankedEntry]) {
    debug_assert!(
        is_ranked(cache),
        "Contract violation: cache not ranked: {:?}",
        cache.iter().map(|e| e.word.as_str()).collect::<Vec<_>>()
    );
}

/// Both cache contracts.
#[inline]
pub fn check_cache(cache: &[RankedEntry]) {
    check_cache_bounded(cache);
    check_cache_sorted(cache);
}
