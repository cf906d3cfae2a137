// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: whole-index audits and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Audit** (`verify_index`) recomputes every node's top-k from scratch
//!    and compares it with the cache. Slow, exhaustive, used by `inspect`
//!    and by the property tests.
//!
//! 2. **Runtime contracts** that panic in debug builds when a cache on a
//!    mutated path is too long or out of order. Zero-cost in release.

pub mod contracts;
mod report;

pub use report::*;
