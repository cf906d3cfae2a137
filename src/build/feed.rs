// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Vocabulary feed: `word,count` rows into `(String, u64)` pairs.
//!
//! The index assumes clean input, so this is where input gets cleaned. Rows
//! are parsed as CSV (quoted fields may hold the delimiter, `""` is a literal
//! quote) and every field is trimmed. Rows with no word or a weight that isn't
//! a non-negative integer are rejected. Lenient mode skips them with a
//! warning, strict mode stops at the first one.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, warn};

use super::config::FeedConfig;
use crate::error::VocabError;

/// Header names accepted for the weight column.
const WEIGHT_COLUMNS: &[&str] = &["count", "weight", "freq", "frequency"];

/// Column positions resolved from the header, or the `word,count` default.
#[derive(Debug, Clone, Copy)]
struct Columns {
    word: usize,
    weight: usize,
}

impl Default for Columns {
    fn default() -> Self {
        Self { word: 0, weight: 1 }
    }
}

impl Columns {
    fn from_header(header: &StringRecord) -> Result<Self, VocabError> {
        let names: Vec<String> = header.iter().map(str::to_ascii_lowercase).collect();

        let word = names
            .iter()
            .position(|name| name == "word")
            .ok_or(VocabError::MissingColumn { column: "word" })?;
        let weight = names
            .iter()
            .position(|name| WEIGHT_COLUMNS.contains(&name.as_str()))
            .ok_or(VocabError::MissingColumn { column: "count" })?;

        Ok(Self { word, weight })
    }
}

fn parse_record(record: &StringRecord, columns: Columns) -> Result<(String, u64), VocabError> {
    let line = record.position().map_or(0, |pos| pos.line() as usize);

    let word = record.get(columns.word).unwrap_or_default();
    if word.is_empty() {
        return Err(VocabError::EmptyWord { line });
    }

    let raw_weight = record.get(columns.weight).unwrap_or_default();
    let weight = raw_weight
        .parse::<u64>()
        .map_err(|_| VocabError::InvalidWeight {
            line,
            value: raw_weight.to_string(),
        })?;

    Ok((word.to_string(), weight))
}

/// Read every row of a vocabulary feed, in order.
///
/// Blank lines are ignored. Rows may have extra or missing fields; only the
/// word and weight columns matter.
pub fn read_vocabulary<R: Read>(reader: R, config: &FeedConfig) -> Result<Vec<(String, u64)>, VocabError> {
    if !config.delimiter.is_ascii() {
        return Err(VocabError::InvalidDelimiter {
            delimiter: config.delimiter,
        });
    }

    let mut csv = ReaderBuilder::new()
        .delimiter(config.delimiter as u8)
        .has_headers(config.has_header)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let columns = if config.has_header {
        let header = csv.headers().map_err(VocabError::Csv)?;
        if header.is_empty() {
            return Ok(Vec::new());
        }
        Columns::from_header(header)?
    } else {
        Columns::default()
    };

    let mut pairs = Vec::new();
    let mut skipped = 0usize;

    for record in csv.records() {
        let parsed = record
            .map_err(VocabError::Csv)
            .and_then(|record| parse_record(&record, columns));

        match parsed {
            Ok(pair) => pairs.push(pair),
            // A failing reader won't recover; don't spin on it
            Err(VocabError::Csv(err)) if err.is_io_error() => return Err(VocabError::Csv(err)),
            Err(err) if config.lenient => {
                warn!(error = %err, "skipping malformed vocabulary row");
                skipped += 1;
            }
            Err(err) => return Err(err),
        }
    }

    debug!(rows = pairs.len(), skipped, "read vocabulary feed");
    Ok(pairs)
}

/// [`read_vocabulary`] over a file.
pub fn load_vocabulary_file(path: &Path, config: &FeedConfig) -> Result<Vec<(String, u64)>, VocabError> {
    let file = File::open(path)?;
    read_vocabulary(file, config)
}

/// The `q`-quantile of `weights` with linear interpolation between ranks.
///
/// `q` is clamped to `0.0..=1.0`. `None` for an empty slice.
pub fn quantile(weights: &[u64], q: f64) -> Option<f64> {
    if weights.is_empty() {
        return None;
    }
    let mut sorted = weights.to_vec();
    sorted.sort_unstable();

    let position = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    Some(sorted[lower] as f64 + (sorted[upper] as f64 - sorted[lower] as f64) * fraction)
}

/// Keep pairs whose weight is at least the `q`-quantile of all weights.
pub fn retain_above_quantile(pairs: Vec<(String, u64)>, q: f64) -> Vec<(String, u64)> {
    let weights: Vec<u64> = pairs.iter().map(|(_, weight)| *weight).collect();
    let Some(cutoff) = quantile(&weights, q) else {
        return pairs;
    };

    let before = pairs.len();
    let kept: Vec<_> = pairs
        .into_iter()
        .filter(|(_, weight)| *weight as f64 >= cutoff)
        .collect();
    debug!(quantile = q, cutoff, before, after = kept.len(), "pruned low-weight words");
    kept
}
