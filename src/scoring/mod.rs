// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranking: how suggestions get ordered.
//!
//! There is exactly one ordering in this crate. Per-node caches, correction
//! results and the global top list all sort with it, so a word never ranks
//! differently depending on which path found it.

pub mod ranking;

pub use ranking::*;
