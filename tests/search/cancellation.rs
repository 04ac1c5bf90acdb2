//! Cooperative cancellation at token and candidate boundaries.

use super::common::{query, sample_engine};
use std::thread;
use typotrie::config::EditBudgetPolicy;
use typotrie::scoring::{top_k, Candidate};
use typotrie::search::{retrieve, CancelFlag, RequestBuilder};
use typotrie::SearchError;

#[test]
fn cancelled_engine_search_fails() {
    let cancel = CancelFlag::new();
    cancel.cancel();
    let result = sample_engine().search_text("moscow", &cancel);
    assert!(matches!(result, Err(SearchError::Cancelled)));
}

#[test]
fn cancellation_crosses_threads() {
    let cancel = CancelFlag::new();
    let remote = cancel.clone();
    thread::spawn(move || remote.cancel()).join().unwrap();
    assert!(cancel.is_cancelled());
    assert!(matches!(cancel.check(), Err(SearchError::Cancelled)));
}

#[test]
fn retrieval_checks_before_each_token() {
    let engine = sample_engine();
    let policy = EditBudgetPolicy::default();
    let request = RequestBuilder::new(&policy).build(&query("new york ")).unwrap();
    let cancel = CancelFlag::new();
    cancel.cancel();
    assert!(matches!(
        retrieve(&engine.index().root(), &request, &cancel),
        Err(SearchError::Cancelled)
    ));
}

#[test]
fn ranking_stops_mid_way() {
    let cancel = CancelFlag::new();
    let trigger = cancel.clone();
    let mut evaluated = Vec::new();
    let candidates = (0..10).map(|id| Candidate::new(id, false)).collect();
    let result = top_k(candidates, 10, 10, &cancel, |c| {
        evaluated.push(c.id);
        if evaluated.len() == 3 {
            trigger.cancel();
        }
    });
    assert!(matches!(result, Err(SearchError::Cancelled)));
    assert_eq!(evaluated.len(), 3);
}

#[test]
fn uncancelled_flag_passes() {
    let cancel = CancelFlag::new();
    assert!(cancel.check().is_ok());
    let hits = sample_engine().search_text("moscow ", &cancel).unwrap();
    assert_eq!(hits.len(), 2);
}
