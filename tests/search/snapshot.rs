//! Snapshot-and-swap sharing between a writer and concurrent readers.

use super::common::{never_cancelled, query, sample_engine};
use std::sync::Arc;
use std::thread;
use typotrie::config::EditBudgetPolicy;
use typotrie::index::SharedIndex;
use typotrie::search::{retrieve, Document, RequestBuilder};

fn ids_for(index: &SharedIndex, text: &str) -> Vec<u32> {
    let policy = EditBudgetPolicy::default();
    let request = RequestBuilder::new(&policy)
        .match_categories(true)
        .build(&query(text))
        .unwrap();
    let snapshot = index.snapshot();
    retrieve(&snapshot.root(), &request, &never_cancelled())
        .unwrap()
        .into_iter()
        .map(|(id, _)| id)
        .collect()
}

#[test]
fn snapshot_matches_live_index() {
    let engine = sample_engine();
    let shared = SharedIndex::new(engine.index());
    for text in ["moscow ", "hotel ", "leningrad ", "new y"] {
        let policy = EditBudgetPolicy::default();
        let request = RequestBuilder::new(&policy)
            .match_categories(true)
            .build(&query(text))
            .unwrap();
        let live: Vec<u32> = retrieve(&engine.index().root(), &request, &never_cancelled())
            .unwrap()
            .into_iter()
            .map(|(id, _)| id)
            .collect();
        assert_eq!(ids_for(&shared, text), live, "{text}");
    }
}

#[test]
fn readers_see_whole_publishes_only() {
    let mut engine = sample_engine();
    let shared = Arc::new(SharedIndex::new(engine.index()));
    let held = shared.snapshot();

    engine.add_document(&Document::new(7, "Moscow Zoo"));
    shared.publish(engine.index());

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || ids_for(&shared, "moscow "))
        })
        .collect();
    for reader in readers {
        assert_eq!(reader.join().unwrap(), vec![1, 2, 7]);
    }
    assert_eq!(held.num_postings() + 2, shared.snapshot().num_postings());
}
