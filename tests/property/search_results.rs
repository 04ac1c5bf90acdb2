//! Result-list properties of the engine over arbitrary query text.

use proptest::prelude::*;
use std::collections::HashSet;

use super::common::{engine_with, never_cancelled, sample_documents};
use typotrie::{SearchConfig, SearchEngine};

fn engine(limit: usize) -> SearchEngine {
    let config = SearchConfig {
        result_limit: limit,
        ..SearchConfig::default()
    };
    engine_with(config, &sample_documents())
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        // Empty and whitespace queries
        Just(String::new()),
        Just(" ".to_string()),
        // Words near the gazetteer's vocabulary
        prop::sample::select(vec!["moscow", "moskow", "hotel", "new york", "leningrad", "petersbrug", "cafe"])
            .prop_map(|s| s.to_string()),
        // Random words, with and without a closing space
        "[a-z]{1,3}",
        "[a-z]{4,10} ?",
        "[a-z]{2,6} [a-z]{2,6} ?",
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// At most `limit` hits, each a known document, each once.
    #[test]
    fn hits_are_bounded_known_and_unique(text in query_strategy(), limit in 1usize..8) {
        let hits = engine(limit).search_text(&text, &never_cancelled()).unwrap();
        prop_assert!(hits.len() <= limit);
        let known: HashSet<u32> = sample_documents().iter().map(|d| d.id).collect();
        let mut seen = HashSet::new();
        for hit in &hits {
            prop_assert!(known.contains(&hit.id));
            prop_assert!(seen.insert(hit.id), "duplicate id {}", hit.id);
        }
    }

    /// Similarity stays in [0, 1] and never increases down the list.
    #[test]
    fn similarity_is_bounded_and_sorted(text in query_strategy()) {
        let hits = engine(10).search_text(&text, &never_cancelled()).unwrap();
        for hit in &hits {
            prop_assert!((0.0..=1.0 + 1e-9).contains(&hit.similarity));
        }
        for pair in hits.windows(2) {
            prop_assert!(pair[0].similarity >= pair[1].similarity);
        }
    }

    /// A smaller limit returns a prefix of the larger list.
    #[test]
    fn limits_truncate_consistently(text in query_strategy(), small in 1usize..4) {
        let long = engine(10).search_text(&text, &never_cancelled()).unwrap();
        let short = engine(small).search_text(&text, &never_cancelled()).unwrap();
        let long_ids: Vec<u32> = long.iter().take(small).map(|h| h.id).collect();
        let short_ids: Vec<u32> = short.iter().map(|h| h.id).collect();
        prop_assert_eq!(short_ids, long_ids);
    }

    /// The same query on the same index always ranks the same way.
    #[test]
    fn search_is_deterministic(text in query_strategy()) {
        let engine = engine(10);
        let first: Vec<u32> = engine.search_text(&text, &never_cancelled()).unwrap().iter().map(|h| h.id).collect();
        let second: Vec<u32> = engine.search_text(&text, &never_cancelled()).unwrap().iter().map(|h| h.id).collect();
        prop_assert_eq!(first, second);
    }
}
