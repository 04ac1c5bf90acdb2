//! Shared test utilities and fixtures.

#![allow(dead_code)]

use typotrie::search::{Document, SearchEngine};
use typotrie::SearchConfig;

// Re-export canonical test utilities from typotrie::testing
pub use typotrie::testing::{
    brute_force_ids, exact, never_cancelled, plain_dfa, query, sample_documents, tokens, trie_of, walk_ids,
};

/// Two hotels and a homel.
pub const HOTELS: &[(&str, u32)] = &[("hotel", 1), ("homel", 2), ("hotel", 3)];

/// A small vocabulary with near neighbours, for walk-vs-brute-force checks.
pub const VOCABULARY: &[(&str, u32)] = &[
    ("moscow", 1),
    ("moskow", 2),
    ("kremlin", 3),
    ("krem", 4),
    ("hotel", 5),
    ("hostel", 6),
    ("host", 7),
    ("palace", 8),
    ("place", 9),
    ("new", 10),
    ("york", 11),
    ("yolk", 12),
];

/// Engine over [`sample_documents`] with the default configuration.
pub fn sample_engine() -> SearchEngine {
    engine_with(SearchConfig::default(), &sample_documents())
}

pub fn engine_with(config: SearchConfig, docs: &[Document]) -> SearchEngine {
    let mut engine = SearchEngine::new(config).unwrap();
    engine.add_documents(docs);
    engine
}

/// Ids of a ranked hit list, in order.
pub fn hit_ids(hits: &[typotrie::SearchHit]) -> Vec<u32> {
    hits.iter().map(|h| h.id).collect()
}

/// Ids of a ranked hit list, sorted.
pub fn sorted_ids(hits: &[typotrie::SearchHit]) -> Vec<u32> {
    let mut ids = hit_ids(hits);
    ids.sort_unstable();
    ids
}
