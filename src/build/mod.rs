// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Startup: configuration, vocabulary feed, and the bulk load into the index.
//!
//! Loading is the one heavy write the index ever sees. It finishes before the
//! index is handed to readers, so nothing here takes a lock.

pub mod config;
pub mod feed;

use std::path::Path;

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::error::VocabError;
use crate::index::PrefixIndex;

pub use config::*;
pub use feed::*;

/// Create a progress style for the load progress bar
#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("━━╸")
}

/// Insert every pair, in feed order.
pub fn build_index(pairs: &[(String, u64)]) -> Result<PrefixIndex, VocabError> {
    #[cfg(feature = "parallel")]
    let pb = {
        let pb = ProgressBar::new(pairs.len() as u64);
        pb.set_style(create_progress_style());
        pb.set_prefix("Indexing");
        pb.set_message("words...");
        pb
    };

    let mut index = PrefixIndex::new();
    for (row, (word, weight)) in pairs.iter().enumerate() {
        index
            .insert(word, *weight)
            .map_err(|source| VocabError::Index { row, source })?;
        #[cfg(feature = "parallel")]
        pb.inc(1);
    }

    #[cfg(feature = "parallel")]
    pb.finish_and_clear();

    info!(
        rows = pairs.len(),
        words = index.len(),
        nodes = index.node_count(),
        "built prefix index"
    );
    Ok(index)
}

/// Read a feed file, apply the quantile cut if configured, and build the index.
pub fn load_index(path: &Path, feed: &FeedConfig) -> Result<PrefixIndex, VocabError> {
    let mut pairs = load_vocabulary_file(path, feed)?;
    if let Some(q) = feed.min_quantile {
        pairs = retain_above_quantile(pairs, q);
    }
    info!(path = %path.display(), rows = pairs.len(), "loaded vocabulary");
    build_index(&pairs)
}
