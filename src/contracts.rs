// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the invariants the rest of the crate relies on.
//!
//! Every check is a `debug_assert!`, so release builds pay nothing. Call
//! sites sit right where an invariant could first be broken.
//!
//! | Contract                       | Invariant                                        |
//! |--------------------------------|--------------------------------------------------|
//! | `check_postings_sorted_unique` | posting lists are strictly increasing            |
//! | `check_doc_vec_canonical`      | vector entries sorted by token, no duplicates    |
//! | `check_similarity_in_range`    | cosine similarity lies in `[0, 1]`               |
//! | `check_errors_within_budget`   | an accepting cursor never exceeds its budget     |
//! | `check_ranking_unique`         | a ranking lists each document once               |

use crate::config::{MAX_EDIT_BUDGET, MAX_PATTERN_LEN};
use crate::scoring::ranking::Candidate;
use crate::scoring::vector::TokenFrequency;
use crate::types::DocId;
use std::collections::HashSet;

// ============================================================================
// COMPILE-TIME ASSERTIONS
// ============================================================================

const _: () = {
    // Pattern offsets are stored as u16 inside automaton positions, and the
    // largest offset reached is the pattern length plus one.
    assert!(MAX_PATTERN_LEN + 2 <= u16::MAX as usize);
    // Edit counts (and prefix edit counts) are stored as u8.
    assert!(MAX_EDIT_BUDGET < u8::MAX);
};

/// Slack for floating-point rounding in similarity.
const SIMILARITY_EPSILON: f64 = 1e-9;

// ============================================================================
// INDEX CONTRACTS
// ============================================================================

#[inline]
pub fn check_postings_sorted_unique(ids: &[DocId]) {
    for i in 1..ids.len() {
        debug_assert!(
            ids[i - 1] < ids[i],
            "Contract violation: posting list not strictly increasing at {}: {} then {}",
            i,
            ids[i - 1],
            ids[i]
        );
    }
}

// ============================================================================
// SCORING CONTRACTS
// ============================================================================

#[inline]
pub fn check_doc_vec_canonical(entries: &[TokenFrequency]) {
    for i in 1..entries.len() {
        debug_assert!(
            entries[i - 1].token < entries[i].token,
            "Contract violation: vector entries out of order at {}: '{}' then '{}'",
            i,
            entries[i - 1].token,
            entries[i].token
        );
    }
}

#[inline]
pub fn check_similarity_in_range(similarity: f64) {
    debug_assert!(
        (-SIMILARITY_EPSILON..=1.0 + SIMILARITY_EPSILON).contains(&similarity),
        "Contract violation: similarity {} outside [0, 1]",
        similarity
    );
}

#[inline]
pub fn check_errors_within_budget(errors: u8, max_edits: u8) {
    debug_assert!(
        errors <= max_edits,
        "Contract violation: accepted with {} errors over a budget of {}",
        errors,
        max_edits
    );
}

// ============================================================================
// RANKING CONTRACTS
// ============================================================================

#[inline]
pub fn check_ranking_unique(ranked: &[Candidate]) {
    if cfg!(debug_assertions) {
        let mut seen = HashSet::with_capacity(ranked.len());
        for candidate in ranked {
            debug_assert!(
                seen.insert(candidate.id),
                "Contract violation: document {} ranked twice",
                candidate.id
            );
        }
    }
}
