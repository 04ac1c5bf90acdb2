//! Top-K selection order.

use typotrie::scoring::{compare_final, top_k, Candidate};
use typotrie::search::{CancelFlag, CandidateMerger};

fn scored(id: u32, similarity: f64, breadth: usize, in_region: bool, rank: u8) -> Candidate {
    Candidate {
        similarity,
        breadth,
        in_region,
        rank,
        ..Candidate::new(id, false)
    }
}

fn ids(ranked: &[Candidate]) -> Vec<u32> {
    ranked.iter().map(|c| c.id).collect()
}

#[test]
fn final_order_key_by_key() {
    let mut candidates = vec![
        scored(1, 0.5, 3, false, 0),
        scored(2, 0.9, 1, false, 0),
        scored(3, 0.5, 5, false, 0),
        scored(4, 0.5, 3, true, 0),
        scored(5, 0.5, 3, false, 7),
        scored(6, 0.5, 3, false, 0),
    ];
    candidates.sort_by(compare_final);
    assert_eq!(ids(&candidates), vec![2, 3, 4, 5, 1, 6]);
}

#[test]
fn evaluation_happens_after_prefilter() {
    // Only exact candidates survive a prefilter of two, so the high
    // similarity of the inexact one never gets computed.
    let candidates = vec![
        Candidate::new(1, true),
        Candidate::new(2, true),
        Candidate::new(3, false),
    ];
    let ranked = top_k(candidates, 2, 10, &CancelFlag::new(), |c| {
        c.similarity = if c.id == 3 { 1.0 } else { 0.1 * f64::from(c.id) };
    })
    .unwrap();
    assert_eq!(ids(&ranked), vec![2, 1]);
}

#[test]
fn tied_group_nearest_first() {
    let candidates = (1..=4).map(|id| Candidate::new(id, false)).collect();
    let ranked = top_k(candidates, 10, 10, &CancelFlag::new(), |c| {
        c.similarity = 0.5;
        c.distance = f64::from(10 - c.id);
    })
    .unwrap();
    assert_eq!(ids(&ranked), vec![4, 3, 2, 1]);
}

#[test]
fn merger_keeps_the_better_duplicate() {
    let mut merger = CandidateMerger::new();
    merger.merge(Candidate::new(5, false));
    merger.merge(Candidate {
        norm: 3.0,
        ..Candidate::new(5, false)
    });
    merger.merge(Candidate::new(6, true));
    assert_eq!(merger.len(), 2);
    assert!(merger.contains(5));

    let sorted = merger.into_sorted(10);
    assert_eq!(ids(&sorted), vec![6, 5]);
    assert_eq!(sorted[1].norm, 3.0);
}

#[test]
fn limit_zero_returns_nothing() {
    let candidates = vec![Candidate::new(1, true)];
    let ranked = top_k(candidates, 10, 0, &CancelFlag::new(), |_| {}).unwrap();
    assert!(ranked.is_empty());
}
