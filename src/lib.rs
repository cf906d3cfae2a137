// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranked prefix autocomplete with edit-distance autocorrect.
//!
//! The core is a character trie that caches the five best words at every
//! prefix node, so completing a prefix is a walk and a copy. When the query
//! isn't a prefix of anything, a pruned dynamic-programming walk over the same
//! trie finds indexed words within a few edits.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  build/     │────▶│  index/      │────▶│  search/     │
//! │ (feed,      │     │ (PrefixIndex,│     │ (lookup,     │
//! │  config)    │     │  TrieNode)   │     │  SharedIndex)│
//! └─────────────┘     └──────────────┘     └──────────────┘
//!                            │                    │
//!                            ▼                    ▼
//!                     ┌──────────────┐     ┌──────────────┐
//!                     │  scoring/    │     │  fuzzy/      │
//!                     │ (ranking)    │     │ (corrections)│
//!                     └──────────────┘     └──────────────┘
//!                            │
//!                            ▼
//!                     ┌──────────────┐
//!                     │  verify/     │
//!                     │ (audit,      │
//!                     │  contracts)  │
//!                     └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use suggestrix::{lookup, LookupKind, PrefixIndex};
//!
//! let mut index = PrefixIndex::from_pairs([("cat", 10), ("car", 10), ("cart", 5)]).unwrap();
//!
//! let result = lookup(&mut index, "ca", 2);
//! assert_eq!(result.kind, LookupKind::Autocomplete);
//! assert_eq!(result.words(), ["car", "cat", "cart"]);
//!
//! let result = lookup(&mut index, "kat", 1);
//! assert_eq!(result.kind, LookupKind::Autocorrect);
//! assert_eq!(result.words(), ["cat"]);
//! ```

pub mod build;
pub mod error;
pub mod fuzzy;
pub mod index;
pub mod scoring;
pub mod search;
pub mod testing;
mod types;
pub mod verify;

// Re-exports for public API
pub use build::{
    build_index, load_index, load_vocabulary_file, read_vocabulary, retain_above_quantile,
    FeedConfig, SuggestConfig, CONFIG_ENV,
};
pub use error::{ConfigError, IndexError, VocabError};
pub use fuzzy::{
    bounded_edit_distance, edit_distance, find_corrections, find_corrections_exhaustive,
    find_corrections_using, find_corrections_with_distance, Correction, CorrectionStrategy,
};
pub use index::{PrefixIndex, TrieNode};
pub use scoring::{compare_entries, is_ranked};
pub use search::{lookup, lookup_with, LookupOptions, SharedIndex};
pub use types::{
    IndexStats, Lookup, LookupKind, RankedEntry, DEFAULT_MAX_DISTANCE, MAX_SUGGESTIONS,
};
pub use verify::{verify_index, InvariantError, VerificationReport};
