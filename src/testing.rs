// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::error::AutomatonError;
use crate::fuzzy::automaton::{Automaton, TokenAutomaton};
use crate::fuzzy::dfa::EditDistanceDfa;
use crate::fuzzy::osa_distance_within;
use crate::index::cursor::TrieCursor;
use crate::index::trie::PostingTrie;
use crate::search::cancel::CancelFlag;
use crate::search::engine::Document;
use crate::search::walk::match_in_trie;
use crate::types::{DocId, QueryTokens, Token, DEFAULT_LANG};
use std::collections::BTreeSet;

/// Whitespace-split tokens, lowercased.
pub fn tokens(text: &str) -> Vec<Token> {
    text.split_whitespace()
        .map(|w| Token::new(w.to_lowercase()))
        .collect()
}

/// Query tokens; the last one is a prefix unless `text` ends in a space.
pub fn query(text: &str) -> QueryTokens {
    let last_is_prefix = !text.ends_with(' ');
    QueryTokens::from_tokens(tokens(text), last_is_prefix)
}

/// Trie over the default language with one token per entry.
pub fn trie_of(entries: &[(&str, DocId)]) -> PostingTrie {
    let mut trie = PostingTrie::new();
    for (token, id) in entries {
        trie.add(*id, DEFAULT_LANG, &[Token::from(*token)]);
    }
    trie
}

/// Edit-distance automaton with plain Levenshtein-with-transpositions costs:
/// no exact prefix, no confusables.
pub fn plain_dfa(pattern: &str, max_edits: u8) -> Result<EditDistanceDfa, AutomatonError> {
    EditDistanceDfa::builder(pattern)
        .max_edits(max_edits)
        .exact_prefix(0)
        .transpositions(true)
        .build()
}

/// Ids reached by walking `automaton` over the default-language branch.
pub fn walk_ids<A: Automaton, C: TrieCursor>(root: &C, automaton: &A) -> BTreeSet<DocId> {
    let mut found = BTreeSet::new();
    crate::index::cursor::for_each_lang_root(root, &[DEFAULT_LANG], |_, branch, consumed| {
        match_in_trie(&branch, consumed, automaton, |id, _| {
            found.insert(id);
        });
    });
    found
}

/// Brute-force counterpart of [`walk_ids`]: every `(token, id)` whose token
/// is within `max_edits` of `pattern`.
pub fn brute_force_ids(entries: &[(&str, DocId)], pattern: &str, max_edits: u8) -> BTreeSet<DocId> {
    entries
        .iter()
        .filter(|(token, _)| osa_distance_within(pattern, token, max_edits as usize).is_some())
        .map(|&(_, id)| id)
        .collect()
}

/// Exact token automaton, for retrieval tests that do not care about edits.
pub fn exact(token: &str) -> TokenAutomaton {
    TokenAutomaton::exact(&Token::from(token), false)
}

pub fn never_cancelled() -> CancelFlag {
    CancelFlag::new()
}

/// A small gazetteer used by engine and CLI tests.
pub fn sample_documents() -> Vec<Document> {
    vec![
        Document::new(1, "Hotel Moscow").rank(5),
        Document::new(2, "Moscow Kremlin").rank(9),
        Document::new(3, "New York").alt_name("Big Apple").rank(8),
        Document::new(4, "Grand Palace").category("hotel"),
        Document::new(5, "Saint Petersburg").alt_name("Leningrad"),
        Document::new(6, "Café Pushkin").category("restaurant"),
    ]
}
