// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for end-to-end queries.
//!
//! Arbitrary text against a fixed gazetteer must never panic, must respect
//! the result limit, must return each id once, and must keep similarities
//! inside [0, 1] in non-increasing order.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;
use std::sync::OnceLock;
use typotrie::search::{CancelFlag, SearchEngine};
use typotrie::testing::sample_documents;
use typotrie::SearchConfig;

fn engine() -> &'static SearchEngine {
    static ENGINE: OnceLock<SearchEngine> = OnceLock::new();
    ENGINE.get_or_init(|| {
        let mut engine = SearchEngine::new(SearchConfig::default()).expect("default config is valid");
        engine.add_documents(&sample_documents());
        engine
    })
}

fuzz_target!(|text: &str| {
    let text: String = text.chars().take(64).collect();
    let engine = engine();
    let hits = engine
        .search_text(&text, &CancelFlag::new())
        .expect("uncancelled search with bounded budgets succeeds");

    assert!(hits.len() <= engine.config().result_limit);
    let ids: HashSet<u32> = hits.iter().map(|h| h.id).collect();
    assert_eq!(ids.len(), hits.len(), "duplicate ids for {text:?}");
    for hit in &hits {
        assert!((0.0..=1.0 + 1e-9).contains(&hit.similarity), "{text:?}: {}", hit.similarity);
    }
    assert!(hits.windows(2).all(|w| w[0].similarity >= w[1].similarity));
});
