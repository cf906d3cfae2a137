// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Full-index audit.
//!
//! The cache at a node is supposed to be the top `MAX_SUGGESTIONS` words of its
//! subtree. The audit computes that list independently, bottom-up from the
//! word-end nodes, never reading a cache to build it, and then compares.

use std::fmt;

use crate::index::{PrefixIndex, TrieNode};
use crate::scoring::ranking::{is_ranked, top_ranked};
use crate::types::{RankedEntry, MAX_SUGGESTIONS};

/// A broken index invariant, located by the prefix of the offending node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// Cache is longer than `MAX_SUGGESTIONS`.
    CacheOverflow { prefix: String, len: usize },
    /// Cache is not strictly ordered best-first.
    UnsortedCache { prefix: String },
    /// Cache holds a word that is not an indexed word below this node.
    ForeignEntry { prefix: String, word: String },
    /// Cache differs from the true top-k of the subtree.
    StaleCache {
        prefix: String,
        expected: Vec<RankedEntry>,
        actual: Vec<RankedEntry>,
    },
    /// The index's word counter disagrees with the word-end nodes.
    WordCountMismatch { claimed: usize, actual: usize },
    /// The index's node counter disagrees with the tree.
    NodeCountMismatch { claimed: usize, actual: usize },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::CacheOverflow { prefix, len } => {
                write!(f, "cache at '{}' holds {} entries (max {})", prefix, len, MAX_SUGGESTIONS)
            }
            InvariantError::UnsortedCache { prefix } => {
                write!(f, "cache at '{}' is not ranked", prefix)
            }
            InvariantError::ForeignEntry { prefix, word } => {
                write!(f, "cache at '{}' holds '{}', not an indexed word below it", prefix, word)
            }
            InvariantError::StaleCache {
                prefix,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "cache at '{}' is {:?}, expected {:?}",
                    prefix,
                    words(actual),
                    words(expected)
                )
            }
            InvariantError::WordCountMismatch { claimed, actual } => {
                write!(f, "index claims {} words but holds {}", claimed, actual)
            }
            InvariantError::NodeCountMismatch { claimed, actual } => {
                write!(f, "index claims {} nodes but holds {}", claimed, actual)
            }
        }
    }
}

impl std::error::Error for InvariantError {}

fn words(entries: &[RankedEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.word.as_str()).collect()
}

/// Outcome of [`verify_index`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationReport {
    pub nodes_checked: usize,
    pub words_checked: usize,
    pub errors: Vec<InvariantError>,
}

impl VerificationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// First violation as an error, for `?` at call sites that only care about pass/fail.
    pub fn into_result(self) -> Result<(), InvariantError> {
        match self.errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Audit every node of `index`.
pub fn verify_index(index: &PrefixIndex) -> VerificationReport {
    let mut report = VerificationReport::default();
    let mut prefix = String::new();
    audit_node(index.root(), &mut prefix, &mut report);

    if report.words_checked != index.len() {
        report.errors.push(InvariantError::WordCountMismatch {
            claimed: index.len(),
            actual: report.words_checked,
        });
    }
    if report.nodes_checked != index.node_count() {
        report.errors.push(InvariantError::NodeCountMismatch {
            claimed: index.node_count(),
            actual: report.nodes_checked,
        });
    }
    report
}

/// Returns the true top-k of the subtree so the parent can merge it.
fn audit_node(node: &TrieNode, prefix: &mut String, report: &mut VerificationReport) -> Vec<RankedEntry> {
    report.nodes_checked += 1;

    let mut candidates = Vec::new();
    if node.is_word_end() {
        report.words_checked += 1;
        candidates.push(node.entry(prefix));
    }
    for (ch, child) in node.children() {
        prefix.push(ch);
        candidates.extend(audit_node(child, prefix, report));
        prefix.pop();
    }
    let expected = top_ranked(candidates, MAX_SUGGESTIONS);

    let cache = node.top_cache();
    if cache.len() > MAX_SUGGESTIONS {
        report.errors.push(InvariantError::CacheOverflow {
            prefix: prefix.clone(),
            len: cache.len(),
        });
    }
    if !is_ranked(cache) {
        report.errors.push(InvariantError::UnsortedCache {
            prefix: prefix.clone(),
        });
    }
    for entry in cache {
        if !entry.word.starts_with(prefix.as_str()) {
            report.errors.push(InvariantError::ForeignEntry {
                prefix: prefix.clone(),
                word: entry.word.clone(),
            });
        }
    }
    if cache != expected.as_slice() {
        report.errors.push(InvariantError::StaleCache {
            prefix: prefix.clone(),
            expected: expected.clone(),
            actual: cache.to_vec(),
        });
    }

    expected
}
