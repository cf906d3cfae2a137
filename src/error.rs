// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors for index mutation and vocabulary feeds.
//!
//! Lookups never fail: a word that isn't there is an empty result, not an
//! error. The only things that can go wrong are bad input at build time.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Rejected call into the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// `insert` was called with a word of zero characters.
    EmptyWord,
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexError::EmptyWord => write!(f, "cannot index an empty word"),
        }
    }
}

impl std::error::Error for IndexError {}

/// Malformed vocabulary feed.
///
/// Line numbers are 1-based and count the header row when there is one.
#[derive(Debug)]
pub enum VocabError {
    /// The underlying reader failed.
    Io(io::Error),
    /// The CSV layer rejected a record (bad quoting, invalid UTF-8, read failure).
    Csv(csv::Error),
    /// The configured delimiter isn't a single ASCII character.
    InvalidDelimiter { delimiter: char },
    /// A header row is present but lacks a required column.
    MissingColumn { column: &'static str },
    /// A row has no word, or the word is blank after trimming.
    EmptyWord { line: usize },
    /// The weight column is missing, non-numeric or negative.
    InvalidWeight { line: usize, value: String },
    /// The index rejected a pair the feed produced (`row` is 0-based).
    Index { row: usize, source: IndexError },
}

impl fmt::Display for VocabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VocabError::Io(e) => write!(f, "failed to read vocabulary: {}", e),
            VocabError::Csv(e) => write!(f, "malformed vocabulary: {}", e),
            VocabError::InvalidDelimiter { delimiter } => {
                write!(f, "delimiter {:?} is not a single ASCII character", delimiter)
            }
            VocabError::MissingColumn { column } => {
                write!(f, "vocabulary header has no '{}' column", column)
            }
            VocabError::EmptyWord { line } => write!(f, "line {}: empty word", line),
            VocabError::InvalidWeight { line, value } => {
                write!(f, "line {}: invalid weight '{}'", line, value)
            }
            VocabError::Index { row, source } => write!(f, "row {}: {}", row, source),
        }
    }
}

impl std::error::Error for VocabError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VocabError::Io(e) => Some(e),
            VocabError::Csv(e) => Some(e),
            VocabError::Index { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for VocabError {
    fn from(e: io::Error) -> Self {
        VocabError::Io(e)
    }
}

/// Unreadable or unparsable configuration file.
#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: io::Error },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "failed to read config {}: {}", path.display(), source)
            }
            ConfigError::Parse { path, source } => {
                write!(f, "invalid config {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
        }
    }
}
