//! Posting trie and automaton walk vectors.

use super::common::{plain_dfa, trie_of, walk_ids, HOTELS, VOCABULARY};
use std::collections::BTreeSet;
use typotrie::index::cursor::for_each_lang_root;
use typotrie::index::{FrozenTrie, PostingTrie};
use typotrie::scoring::DocFrequency;
use typotrie::search::match_in_trie;
use typotrie::types::DEFAULT_LANG;
use typotrie::{Automaton, EditDistanceDfa, ExactAutomaton, Token, TrieCursor};

fn set(ids: &[u32]) -> BTreeSet<u32> {
    ids.iter().copied().collect()
}

/// Ids the walk reports as matched without edits.
fn exact_ids<A: Automaton, C: TrieCursor>(root: &C, automaton: &A) -> BTreeSet<u32> {
    let mut found = BTreeSet::new();
    for_each_lang_root(root, &[DEFAULT_LANG], |_, branch, consumed| {
        match_in_trie(&branch, consumed, automaton, |id, exact| {
            if exact {
                found.insert(id);
            }
        });
    });
    found
}

#[test]
fn strict_match_separates_hotel_from_homel() {
    let trie = trie_of(HOTELS);
    let hotel = EditDistanceDfa::new("hotel", 0).unwrap();
    let homel = EditDistanceDfa::new("homel", 0).unwrap();
    assert_eq!(walk_ids(&trie.root(), &hotel), set(&[1, 3]));
    assert_eq!(walk_ids(&trie.root(), &homel), set(&[2]));
}

#[test]
fn one_substitution_reaches_homel() {
    let trie = trie_of(HOTELS);
    let hotel = EditDistanceDfa::new("hotel", 1).unwrap();
    assert_eq!(walk_ids(&trie.root(), &hotel), set(&[1, 2, 3]));
}

#[test]
fn one_edit_walk_tags_only_literal_tokens_exact() {
    let trie = trie_of(HOTELS);
    let hotel = EditDistanceDfa::new("hotel", 1).unwrap();
    let homel = EditDistanceDfa::new("homel", 1).unwrap();
    assert_eq!(walk_ids(&trie.root(), &homel), set(&[1, 2, 3]));
    assert_eq!(exact_ids(&trie.root(), &hotel), set(&[1, 3]));
    assert_eq!(exact_ids(&trie.root(), &homel), set(&[2]));

    let frozen = FrozenTrie::freeze(&trie);
    assert_eq!(exact_ids(&frozen.root(), &hotel), set(&[1, 3]));
    assert_eq!(exact_ids(&frozen.root(), &homel), set(&[2]));
}

#[test]
fn strict_match_on_frozen_snapshot() {
    let frozen = FrozenTrie::freeze(&trie_of(HOTELS));
    let hotel = ExactAutomaton::new("hotel");
    let homel = ExactAutomaton::new("homel");
    assert_eq!(walk_ids(&frozen.root(), &hotel), set(&[1, 3]));
    assert_eq!(walk_ids(&frozen.root(), &homel), set(&[2]));
}

#[test]
fn both_cursors_agree_on_vocabulary() {
    let trie = trie_of(VOCABULARY);
    let frozen = FrozenTrie::from(&trie);
    for (word, _) in VOCABULARY {
        for k in 0..=2 {
            let dfa = plain_dfa(word, k).unwrap();
            assert_eq!(
                walk_ids(&trie.root(), &dfa),
                walk_ids(&frozen.root(), &dfa),
                "{word} with {k} edits"
            );
        }
    }
}

#[test]
fn frozen_snapshot_keeps_counts() {
    let trie = trie_of(VOCABULARY);
    let frozen = FrozenTrie::freeze(&trie);
    assert_eq!(frozen.num_postings(), trie.num_postings());
    assert!(frozen.num_nodes() <= trie.num_nodes());
    assert_eq!(frozen.languages(), trie.languages());
}

#[test]
fn document_frequency_matches_between_tries() {
    let trie = trie_of(VOCABULARY);
    let frozen = FrozenTrie::freeze(&trie);
    for (token, prefix) in [("hotel", false), ("hos", true), ("mos", true), ("zzz", true)] {
        let token = Token::from(token);
        assert_eq!(trie.doc_frequency(&token, prefix), frozen.doc_frequency(&token, prefix));
    }
    assert_eq!(trie.doc_frequency(&Token::from("hos"), true), 2);
}

#[test]
fn erase_removes_only_the_given_id() {
    let mut trie = trie_of(HOTELS);
    trie.erase(1, 0, &[Token::from("hotel")]);
    assert_eq!(trie.postings(0, &Token::from("hotel")).unwrap().as_slice(), &[3]);
    let dfa = EditDistanceDfa::new("hotel", 1).unwrap();
    assert_eq!(walk_ids(&trie.root(), &dfa), set(&[2, 3]));
}

#[test]
fn languages_are_separate_branches() {
    let mut trie = PostingTrie::new();
    trie.add(1, 0, &[Token::from("moscow")]);
    trie.add(2, 3, &[Token::from("moscow")]);
    let dfa = EditDistanceDfa::new("moscow", 0).unwrap();
    assert_eq!(walk_ids(&trie.root(), &dfa), set(&[1]));
    assert_eq!(trie.languages(), vec![0, 3]);
}
