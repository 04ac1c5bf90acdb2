// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Plain dynamic-programming edit distance, for one-off comparisons.
//!
//! This is the reference the compiled automata are checked against. It counts
//! adjacent transpositions as one edit (optimal string alignment), which is the
//! same metric [`EditDistanceDfa`](super::dfa::EditDistanceDfa) implements with
//! transpositions enabled.
//!
//! `|len(a) - len(b)|` is a lower bound on the distance, so strings whose
//! lengths differ by more than the bound are rejected without allocating.

/// Optimal-string-alignment distance between `a` and `b`, if it is at most `max`.
pub fn osa_distance_within(a: &str, b: &str, max: usize) -> Option<usize> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    bounded_distance(&a, &b, max, true)
}

/// Classic Levenshtein distance (no transpositions), if it is at most `max`.
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> Option<usize> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    bounded_distance(&a, &b, max, false)
}

fn bounded_distance(a: &[char], b: &[char], max: usize, transpositions: bool) -> Option<usize> {
    if a.len().abs_diff(b.len()) > max {
        return None;
    }

    // Three rolling rows: two back (for transpositions), previous, current.
    let mut before: Vec<usize> = vec![0; b.len() + 1];
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut row: Vec<usize> = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        row[0] = i;
        let mut row_min = row[0];
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let mut best = (prev[j] + 1).min(row[j - 1] + 1).min(prev[j - 1] + cost);
            if transpositions && i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                best = best.min(before[j - 2] + 1);
            }
            row[j] = best;
            row_min = row_min.min(best);
        }
        // Nothing in this row is within budget, and rows never decrease below it.
        // Transpositions look two rows back, so keep going one extra row.
        if row_min > max && (!transpositions || prev.iter().min().is_some_and(|&m| m > max)) {
            return None;
        }
        std::mem::swap(&mut before, &mut prev);
        std::mem::swap(&mut prev, &mut row);
    }

    let distance = prev[b.len()];
    (distance <= max).then_some(distance)
}
