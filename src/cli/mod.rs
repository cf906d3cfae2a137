// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the suggestrix command-line interface.
//!
//! Four subcommands over one vocabulary: `lookup` answers a single query,
//! `repl` answers queries from stdin so usage learning shows up across
//! queries, `top` prints the global list, and `inspect` audits the index.
//! Options shared by all of them override the config file.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use suggestrix::{CorrectionStrategy, SuggestConfig};

#[derive(Parser)]
#[command(
    name = "suggestrix",
    about = "Ranked autocomplete and autocorrect over a weighted vocabulary",
    version
)]
pub struct Cli {
    /// JSON config file (default: $SUGGESTRIX_CONFIG, else built-in defaults)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Vocabulary file with `word,count` rows
    #[arg(long, global = true)]
    pub vocab: Option<PathBuf>,

    /// Maximum edit distance for corrections
    #[arg(long, global = true)]
    pub max_distance: Option<usize>,

    /// Correction search strategy
    #[arg(long, global = true, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Don't count lookups of complete words as usage
    #[arg(long, global = true)]
    pub no_learn: bool,

    /// Log filter used when RUST_LOG is unset (e.g. "debug", "suggestrix=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Answer one query
    Lookup {
        /// Query text; empty returns the global top list
        query: String,

        /// Print the `{"type", "suggestions"}` JSON shape
        #[arg(long)]
        json: bool,
    },

    /// Answer queries read line by line from stdin
    ///
    /// `:top` prints the global list, `:quit` exits.
    Repl,

    /// Print the best words in the whole vocabulary
    Top {
        #[arg(long)]
        json: bool,
    },

    /// Print index statistics and audit every cache
    Inspect {
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StrategyArg {
    Pruned,
    Exhaustive,
}

impl From<StrategyArg> for CorrectionStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Pruned => CorrectionStrategy::Pruned,
            StrategyArg::Exhaustive => CorrectionStrategy::Exhaustive,
        }
    }
}

impl Cli {
    /// Command-line flags win over the config file.
    pub fn apply(&self, config: &mut SuggestConfig) {
        if let Some(vocab) = &self.vocab {
            config.vocabulary = Some(vocab.clone());
        }
        if let Some(max_distance) = self.max_distance {
            config.max_distance = max_distance;
        }
        if let Some(strategy) = self.strategy {
            config.strategy = strategy.into();
        }
        if self.no_learn {
            config.record_usage = false;
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
    }
}
