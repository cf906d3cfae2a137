// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance, unbounded and with a budget.
//!
//! `|len(a) - len(b)|` is a lower bound on edit distance, and row minima
//! never decrease as the DP consumes more of `a`. Either bound past the
//! budget ends a bounded computation early.
//!
//! Everything here counts `char`s, not bytes, so `café` and `cafe` are one
//! substitution apart.

/// Levenshtein distance: unit-cost insertions, deletions and substitutions.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b_chars.len()).collect();

    for (i, ac) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &bc) in b_chars.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = (above + 1)
                .min(row[j] + 1)
                .min(diagonal + usize::from(ac != bc));
            diagonal = above;
        }
    }

    row[b_chars.len()]
}

/// `edit_distance(a, b)` if it is at most `max`, else `None`.
///
/// Gives up as soon as the answer is known to exceed `max`: when the lengths
/// differ by more than `max`, or when every cell of a row does.
pub fn bounded_edit_distance(a: &str, b: &str, max: usize) -> Option<usize> {
    let b_chars: Vec<char> = b.chars().collect();
    if a.chars().count().abs_diff(b_chars.len()) > max {
        return None;
    }

    let mut row: Vec<usize> = (0..=b_chars.len()).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        let mut row_min = row[0];
        for (j, &bc) in b_chars.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = (above + 1)
                .min(row[j] + 1)
                .min(diagonal + usize::from(ac != bc));
            diagonal = above;
            row_min = row_min.min(row[j + 1]);
        }
        if row_min > max {
            return None;
        }
    }

    let distance = row[b_chars.len()];
    (distance <= max).then_some(distance)
}
