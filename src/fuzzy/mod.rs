// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search: spelling correction via edit distance.
//!
//! Two implementations here: a trie walk that carries one dynamic-programming
//! row per level and prunes hopeless branches, and a plain per-word Levenshtein
//! scan that serves as the reference the walk is tested against.

mod correction;
mod levenshtein;

pub use correction::*;
pub use levenshtein::*;
