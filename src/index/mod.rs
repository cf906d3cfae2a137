// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The ranked prefix index: a character trie with a top-k cache at every node.
//!
//! Autocomplete is the hot path, so it must not scan subtrees. Every node
//! keeps the five best words below it, already sorted. Answering a prefix
//! query is a walk down `|prefix|` edges and a copy of at most five entries.
//!
//! The price is paid on mutation: `insert` and `record_usage` re-thread the
//! changed word through every cache on its path. Paths are as long as words,
//! and caches hold five entries, so that is cheap.
//!
//! | Operation                   | Cost                 |
//! |-----------------------------|----------------------|
//! | `insert`, `record_usage`    | O(\|word\|)          |
//! | `is_valid_prefix`           | O(\|prefix\|)        |
//! | `top_suggestions_at_prefix` | O(\|prefix\| + 5)    |
//! | `global_top_list`           | O(5)                 |

mod node;
mod trie;

pub use node::*;
pub use trie::*;
