// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Top-K selection: how retrieved candidates get ordered.
//!
//! Ranking runs in two passes so the expensive part only touches a bounded
//! number of candidates:
//!
//! 1. **Prefilter** on cheap, precomputed signals (exactness, vector norm,
//!    static rank) and keep at most `prefilter_limit` candidates.
//! 2. **Evaluate** the survivors (similarity, match breadth) and sort them for
//!    real. Candidates tied on everything but id are then ordered by distance,
//!    so the nearest of equally good results comes first.
//!
//! Every comparator ends on the document id, so the output is deterministic.

use crate::contracts::check_ranking_unique;
use crate::error::Result;
use crate::search::cancel::CancelFlag;
use crate::search::dedup::CandidateMerger;
use crate::types::DocId;
use std::cmp::Ordering;
use std::collections::HashSet;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub id: DocId,
    /// Every query token matched this document without edits.
    pub exact: bool,
    /// Query-independent vector norm of the document.
    pub norm: f64,
    /// Static popularity rank; higher is better.
    pub rank: u8,
    pub similarity: f64,
    /// How much of the query the best name alignment covered.
    pub breadth: usize,
    /// Inside the region the user is looking at.
    pub in_region: bool,
    pub distance: f64,
}

impl Candidate {
    pub fn new(id: DocId, exact: bool) -> Self {
        Candidate {
            id,
            exact,
            norm: 0.0,
            rank: 0,
            similarity: 0.0,
            breadth: 0,
            in_region: false,
            distance: f64::INFINITY,
        }
    }
}

/// Prefilter order: exact first, then larger norm, then higher rank.
pub fn compare_prefilter(a: &Candidate, b: &Candidate) -> Ordering {
    b.exact
        .cmp(&a.exact)
        .then_with(|| b.norm.total_cmp(&a.norm))
        .then_with(|| b.rank.cmp(&a.rank))
        .then_with(|| a.id.cmp(&b.id))
}

/// Final order: similarity, breadth, region, rank (all descending), then id.
pub fn compare_final(a: &Candidate, b: &Candidate) -> Ordering {
    final_key(a, b).then_with(|| a.id.cmp(&b.id))
}

fn final_key(a: &Candidate, b: &Candidate) -> Ordering {
    b.similarity
        .total_cmp(&a.similarity)
        .then_with(|| b.breadth.cmp(&a.breadth))
        .then_with(|| b.in_region.cmp(&a.in_region))
        .then_with(|| b.rank.cmp(&a.rank))
}

/// Select the best `limit` candidates.
///
/// `evaluate` fills in the expensive fields (`similarity`, `breadth`, and if
/// it likes `in_region` and `distance`) of each candidate that survives the
/// prefilter. The cancel flag is polled before each evaluation. Duplicate
/// ids are collapsed to their best entry.
pub fn top_k<F>(
    candidates: Vec<Candidate>,
    prefilter_limit: usize,
    limit: usize,
    cancel: &CancelFlag,
    mut evaluate: F,
) -> Result<Vec<Candidate>>
where
    F: FnMut(&mut Candidate),
{
    let input = candidates.len();
    let mut merger = CandidateMerger::with_capacity(input);
    merger.merge_all(candidates);
    let mut ranked = merger.into_sorted(prefilter_limit);
    let prefiltered = ranked.len();

    for candidate in &mut ranked {
        cancel.check()?;
        evaluate(candidate);
    }

    ranked.sort_by(compare_final);
    regroup_by_distance(&mut ranked);

    let mut seen = HashSet::with_capacity(ranked.len());
    ranked.retain(|c| seen.insert(c.id));
    ranked.truncate(limit);
    // INVARIANT: RANKING_UNIQUE_IDS
    check_ranking_unique(&ranked);

    debug!(input, prefiltered, returned = ranked.len(), "ranked candidates");
    Ok(ranked)
}

/// Within each run tied on the final key, nearest first.
fn regroup_by_distance(ranked: &mut [Candidate]) {
    let mut start = 0;
    while start < ranked.len() {
        let mut end = start + 1;
        while end < ranked.len() && final_key(&ranked[start], &ranked[end]) == Ordering::Equal {
            end += 1;
        }
        ranked[start..end].sort_by(|a, b| a.distance.total_cmp(&b.distance).then_with(|| a.id.cmp(&b.id)));
        start = end;
    }
}
