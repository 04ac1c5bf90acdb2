// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Candidate deduplication.
//!
//! A document should appear at most once in a ranking, even when several
//! retrieval paths (name variants, languages, synonyms) produce it. The
//! merger is keyed by document id alone.
//!
//! **Invariant**: each document id appears at most once in the output.

use crate::scoring::ranking::{compare_prefilter, Candidate};
use crate::types::DocId;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Keeps the best candidate per document id.
///
/// "Best" is the [`compare_prefilter`] order: exact beats inexact, then the
/// larger norm, then the higher rank. On a complete tie the first candidate
/// seen is kept.
#[derive(Debug, Default)]
pub struct CandidateMerger {
    map: HashMap<DocId, Candidate>,
}

impl CandidateMerger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        CandidateMerger {
            map: HashMap::with_capacity(capacity),
        }
    }

    pub fn merge(&mut self, candidate: Candidate) {
        match self.map.get_mut(&candidate.id) {
            Some(existing) => {
                if compare_prefilter(&candidate, existing) == Ordering::Less {
                    *existing = candidate;
                }
            }
            None => {
                self.map.insert(candidate.id, candidate);
            }
        }
    }

    pub fn merge_all(&mut self, candidates: impl IntoIterator<Item = Candidate>) {
        for candidate in candidates {
            self.merge(candidate);
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn contains(&self, id: DocId) -> bool {
        self.map.contains_key(&id)
    }

    /// Unique candidates in prefilter order, at most `limit` of them.
    pub fn into_sorted(self, limit: usize) -> Vec<Candidate> {
        let mut candidates: Vec<Candidate> = self.map.into_values().collect();
        candidates.sort_by(compare_prefilter);
        candidates.truncate(limit);
        candidates
    }
}
