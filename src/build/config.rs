// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Configuration file.
//!
//! Every field has a default, so an empty `{}` is a valid config and a missing
//! file is the same as an empty one. The path comes from `--config`, then the
//! `SUGGESTRIX_CONFIG` environment variable.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::fuzzy::CorrectionStrategy;
use crate::search::LookupOptions;
use crate::types::DEFAULT_MAX_DISTANCE;

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "SUGGESTRIX_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SuggestConfig {
    /// `word,count` vocabulary file.
    pub vocabulary: Option<PathBuf>,
    pub max_distance: usize,
    pub strategy: CorrectionStrategy,
    /// Count lookups of complete words as usage.
    pub record_usage: bool,
    pub feed: FeedConfig,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            vocabulary: None,
            max_distance: DEFAULT_MAX_DISTANCE,
            strategy: CorrectionStrategy::default(),
            record_usage: true,
            feed: FeedConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

/// How to read the vocabulary feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeedConfig {
    /// First non-blank line names the columns (`word`, `count`).
    pub has_header: bool,
    pub delimiter: char,
    /// Skip malformed rows with a warning instead of failing the load.
    pub lenient: bool,
    /// Drop words whose weight falls below this quantile (0.0..=1.0) of all weights.
    pub min_quantile: Option<f64>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            has_header: true,
            delimiter: ',',
            lenient: true,
            min_quantile: None,
        }
    }
}

impl SuggestConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `explicit`, else the file named by [`CONFIG_ENV`], else defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn lookup_options(&self) -> LookupOptions {
        LookupOptions {
            max_distance: self.max_distance,
            strategy: self.strategy,
            record_usage: self.record_usage,
        }
    }
}
