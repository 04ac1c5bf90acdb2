// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for edit-distance automaton matching.
//!
//! The DFA must report exactly the restricted Damerau distance whenever it
//! is within budget, and reject everything else. The prefix wrapper must
//! report the best distance over all prefixes of the text.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use typotrie::fuzzy::{osa_distance_within, Automaton, EditDistanceDfa, PrefixAcceptor};

#[derive(Debug, Arbitrary)]
struct MatchInput {
    pattern: String,
    text: String,
    max_edits: u8,
}

fuzz_target!(|input: MatchInput| {
    // Cap lengths to avoid timeouts
    let pattern: String = input.pattern.chars().take(12).collect();
    let text: String = input.text.chars().take(24).collect();
    let k = input.max_edits % 3;

    let Ok(dfa) = EditDistanceDfa::new(&pattern, k) else {
        return;
    };

    let expected = osa_distance_within(&pattern, &text, k as usize).map(|d| d as u8);
    assert_eq!(dfa.run(&text), expected, "pattern={pattern:?} text={text:?} k={k}");

    // A pattern always accepts itself for free.
    assert_eq!(dfa.run(&pattern), Some(0));

    let best_prefix = (0..=text.chars().count())
        .filter_map(|n| {
            let prefix: String = text.chars().take(n).collect();
            osa_distance_within(&pattern, &prefix, k as usize).map(|d| d as u8)
        })
        .min();
    assert_eq!(PrefixAcceptor::new(dfa).run(&text), best_prefix);
});
