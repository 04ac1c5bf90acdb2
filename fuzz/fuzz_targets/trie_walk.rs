// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for automaton walks over the posting trie.
//!
//! Walking the trie in lockstep with an automaton must reach exactly the ids
//! a linear scan of the vocabulary finds, on both trie layouts, including
//! after erasures.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use std::collections::BTreeSet;
use typotrie::index::{FrozenTrie, PostingTrie};
use typotrie::testing::{brute_force_ids, plain_dfa, walk_ids};
use typotrie::Token;

#[derive(Debug, Arbitrary)]
struct WalkInput {
    entries: Vec<(String, u8)>,
    erase: Vec<u8>,
    pattern: String,
    max_edits: u8,
}

fn clip(s: &str) -> String {
    s.chars().filter(|c| !c.is_control()).take(10).collect()
}

fuzz_target!(|input: WalkInput| {
    let entries: Vec<(String, u32)> = input
        .entries
        .iter()
        .take(64)
        .map(|(token, id)| (clip(token), u32::from(*id)))
        .filter(|(token, _)| !token.is_empty())
        .collect();
    let erased: BTreeSet<u32> = input.erase.iter().map(|&id| u32::from(id)).collect();

    let mut trie = PostingTrie::new();
    for (token, id) in &entries {
        trie.add(*id, 0, &[Token::from(token.as_str())]);
    }
    for (token, id) in &entries {
        if erased.contains(id) {
            trie.erase(*id, 0, &[Token::from(token.as_str())]);
        }
    }

    let survivors: Vec<(&str, u32)> = entries
        .iter()
        .filter(|(_, id)| !erased.contains(id))
        .map(|(token, id)| (token.as_str(), *id))
        .collect();

    let pattern = clip(&input.pattern);
    let k = input.max_edits % 3;
    let Ok(dfa) = plain_dfa(&pattern, k) else {
        return;
    };

    let expected = brute_force_ids(&survivors, &pattern, k);
    assert_eq!(walk_ids(&trie.root(), &dfa), expected);
    let frozen = FrozenTrie::freeze(&trie);
    assert_eq!(walk_ids(&frozen.root(), &dfa), expected);
});
