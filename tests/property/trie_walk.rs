//! The automaton-trie walk against a linear scan of the vocabulary.

use super::common::{brute_force_ids, plain_dfa, trie_of, walk_ids};
use proptest::prelude::*;
use std::collections::BTreeSet;
use typotrie::fuzzy::{osa_distance_within, PrefixAcceptor};
use typotrie::index::FrozenTrie;

fn vocabulary_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::string::string_regex("[a-d]{1,6}").unwrap(), 1..24)
}

fn pattern_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-d]{1,6}").unwrap()
}

/// Word `i` is indexed under document `i`.
fn entries(words: &[String]) -> Vec<(&str, u32)> {
    words.iter().enumerate().map(|(i, w)| (w.as_str(), i as u32)).collect()
}

proptest! {
    #[test]
    fn prop_walk_finds_exactly_the_near_tokens(
        words in vocabulary_strategy(),
        pattern in pattern_strategy(),
        k in 0u8..=2,
    ) {
        let entries = entries(&words);
        let trie = trie_of(&entries);
        let dfa = plain_dfa(&pattern, k).unwrap();
        prop_assert_eq!(walk_ids(&trie.root(), &dfa), brute_force_ids(&entries, &pattern, k));
    }

    #[test]
    fn prop_frozen_walk_equals_arena_walk(
        words in vocabulary_strategy(),
        pattern in pattern_strategy(),
        k in 0u8..=2,
    ) {
        let trie = trie_of(&entries(&words));
        let frozen = FrozenTrie::freeze(&trie);
        let dfa = plain_dfa(&pattern, k).unwrap();
        prop_assert_eq!(walk_ids(&trie.root(), &dfa), walk_ids(&frozen.root(), &dfa));
    }

    /// A prefix walk finds every token that has some prefix near the pattern.
    #[test]
    fn prop_prefix_walk_matches_scan(
        words in vocabulary_strategy(),
        pattern in pattern_strategy(),
        k in 0u8..=1,
    ) {
        let entries = entries(&words);
        let trie = trie_of(&entries);
        let wrapped = PrefixAcceptor::new(plain_dfa(&pattern, k).unwrap());
        let expected: BTreeSet<u32> = entries
            .iter()
            .filter(|(word, _)| {
                (0..=word.len()).any(|i| osa_distance_within(&pattern, &word[..i], k as usize).is_some())
            })
            .map(|&(_, id)| id)
            .collect();
        prop_assert_eq!(walk_ids(&trie.root(), &wrapped), expected);
    }
}
