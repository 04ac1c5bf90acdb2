// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Zero-edit automaton: accepts exactly one string.
//!
//! Short tokens and synonyms are matched with this instead of a compiled
//! [`EditDistanceDfa`](super::dfa::EditDistanceDfa). Stepping is a single
//! character comparison.

use super::automaton::{Automaton, AutomatonCursor};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactAutomaton {
    pattern: Vec<char>,
}

impl ExactAutomaton {
    pub fn new(pattern: &str) -> Self {
        ExactAutomaton {
            pattern: pattern.chars().collect(),
        }
    }

    #[inline]
    pub fn pattern_len(&self) -> usize {
        self.pattern.len()
    }
}

impl Automaton for ExactAutomaton {
    type Cursor<'a> = ExactCursor<'a>;

    fn start(&self) -> ExactCursor<'_> {
        ExactCursor {
            pattern: &self.pattern,
            matched: 0,
            dead: false,
        }
    }

    fn max_edits(&self) -> u8 {
        0
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ExactCursor<'a> {
    pattern: &'a [char],
    matched: usize,
    dead: bool,
}

impl AutomatonCursor for ExactCursor<'_> {
    #[inline]
    fn step(&mut self, c: char) {
        if self.dead {
            return;
        }
        if self.pattern.get(self.matched) == Some(&c) {
            self.matched += 1;
        } else {
            self.dead = true;
        }
    }

    #[inline]
    fn is_accepting(&self) -> bool {
        !self.dead && self.matched == self.pattern.len()
    }

    #[inline]
    fn is_rejecting(&self) -> bool {
        self.dead
    }

    fn errors_made(&self) -> u8 {
        0
    }

    fn prefix_errors_made(&self) -> u8 {
        0
    }
}
