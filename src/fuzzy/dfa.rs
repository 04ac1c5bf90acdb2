// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Deterministic edit-distance automaton for a single pattern.
//!
//! The automaton accepts exactly the strings within `max_edits` edits of the
//! pattern, where an edit is an insertion, deletion, substitution or (when
//! enabled) a transposition of two adjacent characters. It is built eagerly
//! from the classic position-set construction:
//!
//! - A **position** is a point `offset` in the pattern reached after spending
//!   `edits` edits. Deletions are applied eagerly as an epsilon closure.
//! - A **state** is a normalized set of positions: sorted, deduplicated, with
//!   every position dropped that another position *subsumes* (reaches everything
//!   it reaches for no more edits).
//! - States are memoized by their position set and explored breadth-first.
//!
//! Input characters are reduced to a small alphabet first: every character of
//! the pattern (plus anything confusable with one) gets its own symbol, and
//! all other characters share a single "other" symbol. The transition table is
//! a flat `state * symbols + symbol` array, so stepping is one binary search
//! on the alphabet and one array load.
//!
//! # Options
//!
//! | Option           | Effect                                                          |
//! |------------------|-----------------------------------------------------------------|
//! | `exact_prefix`   | the first N characters must match literally, no edits at all    |
//! | `salient_prefix` | edits at the first N offsets are also counted separately        |
//! | `transpositions` | `ab` ↔ `ba` costs one edit instead of two                       |
//! | `confusables`    | substitution inside a confusable class is free                  |

use super::automaton::{Automaton, AutomatonCursor};
use super::confusable::ConfusableClasses;
use crate::config::{MAX_EDIT_BUDGET, MAX_PATTERN_LEN};
use crate::error::AutomatonError;
use std::collections::{HashMap, VecDeque};
use tracing::debug;

/// Transition target of a position set that became empty.
pub const DEAD: u32 = u32::MAX;

const NOT_ACCEPTING: u8 = u8::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct Position {
    offset: u16,
    edits: u8,
    /// Read `pattern[offset + 1]` first; `pattern[offset]` must come next.
    transposed: bool,
    prefix_edits: u8,
}

impl Position {
    const START: Position = Position {
        offset: 0,
        edits: 0,
        transposed: false,
        prefix_edits: 0,
    };
}

/// Construction parameters for an [`EditDistanceDfa`].
#[derive(Debug, Clone)]
pub struct DfaBuilder {
    pattern: Vec<char>,
    max_edits: u8,
    exact_prefix_len: usize,
    salient_prefix_len: usize,
    transpositions: bool,
    confusables: ConfusableClasses,
}

impl DfaBuilder {
    pub fn new(pattern: &str) -> Self {
        DfaBuilder {
            pattern: pattern.chars().collect(),
            max_edits: 1,
            exact_prefix_len: 0,
            salient_prefix_len: 0,
            transpositions: true,
            confusables: ConfusableClasses::default(),
        }
    }

    pub fn max_edits(mut self, max_edits: u8) -> Self {
        self.max_edits = max_edits;
        self
    }

    /// Clamped to the pattern length at build time.
    pub fn exact_prefix(mut self, len: usize) -> Self {
        self.exact_prefix_len = len;
        self
    }

    pub fn salient_prefix(mut self, len: usize) -> Self {
        self.salient_prefix_len = len;
        self
    }

    pub fn transpositions(mut self, enabled: bool) -> Self {
        self.transpositions = enabled;
        self
    }

    pub fn confusables(mut self, classes: ConfusableClasses) -> Self {
        self.confusables = classes;
        self
    }

    pub fn build(self) -> Result<EditDistanceDfa, AutomatonError> {
        if self.max_edits > MAX_EDIT_BUDGET {
            return Err(AutomatonError::EditBudgetTooLarge {
                requested: self.max_edits,
                ceiling: MAX_EDIT_BUDGET,
            });
        }
        if self.pattern.len() > MAX_PATTERN_LEN {
            return Err(AutomatonError::PatternTooLong {
                len: self.pattern.len(),
                max: MAX_PATTERN_LEN,
            });
        }

        let alphabet = self.alphabet();
        let construction = Construction {
            pattern: &self.pattern,
            max_edits: self.max_edits,
            exact_prefix_len: self.exact_prefix_len.min(self.pattern.len()),
            salient_prefix_len: self.salient_prefix_len,
            transpositions: self.transpositions,
            confusables: &self.confusables,
        };
        let dfa = construction.run(&alphabet);

        debug!(
            pattern_len = self.pattern.len(),
            max_edits = self.max_edits,
            states = dfa.num_states(),
            alphabet = alphabet.len(),
            "built edit-distance automaton"
        );
        Ok(dfa)
    }

    /// Pattern characters plus their confusable partners, sorted and unique.
    fn alphabet(&self) -> Vec<char> {
        let mut alphabet: Vec<char> = self.pattern.clone();
        for &c in &self.pattern {
            alphabet.extend(self.confusables.partners(c));
        }
        alphabet.sort_unstable();
        alphabet.dedup();
        alphabet
    }
}

/// Borrowed view of the builder used while exploring states.
struct Construction<'b> {
    pattern: &'b [char],
    max_edits: u8,
    exact_prefix_len: usize,
    salient_prefix_len: usize,
    transpositions: bool,
    confusables: &'b ConfusableClasses,
}

impl Construction<'_> {
    fn run(&self, alphabet: &[char]) -> EditDistanceDfa {
        let num_symbols = alphabet.len() + 1;

        let mut states: Vec<Vec<Position>> = Vec::new();
        let mut state_ids: HashMap<Vec<Position>, u32> = HashMap::new();
        let mut transitions: Vec<u32> = Vec::new();
        let mut queue: VecDeque<u32> = VecDeque::new();

        let initial = self.normalize(self.closure(vec![Position::START]));
        state_ids.insert(initial.clone(), 0);
        states.push(initial);
        transitions.resize(num_symbols, DEAD);
        queue.push_back(0);

        while let Some(id) = queue.pop_front() {
            let current = states[id as usize].clone();
            for symbol in 0..num_symbols {
                // The last symbol stands for every character outside the alphabet.
                let input = alphabet.get(symbol).copied();
                let next = self.step(&current, input);
                if next.is_empty() {
                    continue;
                }
                let target = match state_ids.get(&next) {
                    Some(&existing) => existing,
                    None => {
                        let new_id = states.len() as u32;
                        state_ids.insert(next.clone(), new_id);
                        states.push(next);
                        transitions.resize(states.len() * num_symbols, DEAD);
                        queue.push_back(new_id);
                        new_id
                    }
                };
                transitions[id as usize * num_symbols + symbol] = target;
            }
        }

        let mut accept_errors = Vec::with_capacity(states.len());
        let mut accept_prefix_errors = Vec::with_capacity(states.len());
        for positions in &states {
            match self.acceptance(positions) {
                Some((edits, prefix_edits)) => {
                    accept_errors.push(edits);
                    accept_prefix_errors.push(prefix_edits);
                }
                None => {
                    accept_errors.push(NOT_ACCEPTING);
                    accept_prefix_errors.push(0);
                }
            }
        }

        EditDistanceDfa {
            alphabet: alphabet
                .iter()
                .enumerate()
                .map(|(symbol, &c)| (c, symbol as u16))
                .collect(),
            num_symbols,
            transitions,
            accept_errors,
            accept_prefix_errors,
            max_edits: self.max_edits,
            pattern_len: self.pattern.len(),
        }
    }

    /// Cheapest `(edits, prefix_edits)` finishing the pattern from this state,
    /// deleting whatever pattern characters are left.
    fn acceptance(&self, positions: &[Position]) -> Option<(u8, u8)> {
        let n = self.pattern.len() as u16;
        self.closure(positions.to_vec())
            .into_iter()
            .filter(|p| !p.transposed && p.offset == n)
            .map(|p| (p.edits, p.prefix_edits))
            .min()
    }

    #[inline]
    fn editable(&self, offset: usize) -> bool {
        offset >= self.exact_prefix_len
    }

    #[inline]
    fn prefix_cost(&self, offset: usize) -> u8 {
        u8::from(offset < self.salient_prefix_len)
    }

    #[inline]
    fn literal(&self, input: Option<char>, offset: usize) -> bool {
        offset < self.pattern.len() && input == Some(self.pattern[offset])
    }

    #[inline]
    fn confusable(&self, input: Option<char>, offset: usize) -> bool {
        match input {
            Some(c) if offset < self.pattern.len() => self.confusables.confusable(c, self.pattern[offset]),
            _ => false,
        }
    }

    /// Apply deletions (skip a pattern character) until nothing new appears.
    fn closure(&self, mut positions: Vec<Position>) -> Vec<Position> {
        let mut i = 0;
        while i < positions.len() {
            let p = positions[i];
            let offset = p.offset as usize;
            if !p.transposed
                && offset < self.pattern.len()
                && self.editable(offset)
                && p.edits < self.max_edits
            {
                positions.push(Position {
                    offset: p.offset + 1,
                    edits: p.edits + 1,
                    transposed: false,
                    prefix_edits: p.prefix_edits + self.prefix_cost(offset),
                });
            }
            i += 1;
        }
        positions
    }

    fn step(&self, positions: &[Position], input: Option<char>) -> Vec<Position> {
        let mut next = Vec::new();
        // Pattern characters may be deleted before the input is consumed.
        for p in self.closure(positions.to_vec()) {
            let offset = p.offset as usize;

            if p.transposed {
                // Second half of a swap: the skipped character arrives now.
                if self.literal(input, offset) {
                    next.push(Position {
                        offset: p.offset + 2,
                        edits: p.edits,
                        transposed: false,
                        prefix_edits: p.prefix_edits,
                    });
                }
                continue;
            }

            let free_match = self.literal(input, offset)
                || (self.editable(offset) && self.confusable(input, offset));
            if free_match {
                next.push(Position {
                    offset: p.offset + 1,
                    ..p
                });
            }

            if !self.editable(offset) || p.edits >= self.max_edits {
                continue;
            }
            let edits = p.edits + 1;
            let prefix_edits = p.prefix_edits + self.prefix_cost(offset);

            // Insertion: consume input, stay put in the pattern.
            next.push(Position {
                offset: p.offset,
                edits,
                transposed: false,
                prefix_edits,
            });
            // Substitution.
            if offset < self.pattern.len() {
                next.push(Position {
                    offset: p.offset + 1,
                    edits,
                    transposed: false,
                    prefix_edits,
                });
            }
            // Transposition: input matches the next pattern character.
            if self.transpositions
                && offset + 1 < self.pattern.len()
                && self.literal(input, offset + 1)
                && !self.literal(input, offset)
            {
                next.push(Position {
                    offset: p.offset,
                    edits,
                    transposed: true,
                    prefix_edits,
                });
            }
        }
        self.normalize(self.closure(next))
    }

    fn normalize(&self, mut positions: Vec<Position>) -> Vec<Position> {
        positions.sort_unstable();
        positions.dedup();
        let kept: Vec<Position> = positions
            .iter()
            .filter(|&&b| !positions.iter().any(|&a| a != b && self.subsumes(a, b)))
            .copied()
            .collect();
        kept
    }

    /// Whether `a` reaches every suffix `b` reaches, for no more edits and no
    /// more prefix-region edits.
    fn subsumes(&self, a: Position, b: Position) -> bool {
        if a.offset == b.offset
            && a.transposed == b.transposed
            && a.edits <= b.edits
            && a.prefix_edits <= b.prefix_edits
        {
            return true;
        }
        if a.edits >= b.edits || a.prefix_edits > b.prefix_edits {
            return false;
        }
        if a.transposed || b.transposed {
            return false;
        }
        let (i, j) = (a.offset as usize, b.offset as usize);
        // A position still inside the exact prefix cannot spend edits to catch up.
        if !self.editable(i) || i.abs_diff(j) > usize::from(b.edits - a.edits) {
            return false;
        }
        // Behind: delete up to `j`. Ahead: insert at `i` for each skipped character.
        let catch_up = if i <= j {
            self.salient_prefix_len.min(j).saturating_sub(i)
        } else {
            (i - j) * usize::from(self.prefix_cost(i))
        };
        usize::from(a.prefix_edits) + catch_up <= usize::from(b.prefix_edits)
    }
}

/// A compiled edit-distance automaton. See the module docs.
#[derive(Debug, Clone)]
pub struct EditDistanceDfa {
    /// Sorted `(char, symbol)` pairs; anything absent maps to the last symbol.
    alphabet: Vec<(char, u16)>,
    num_symbols: usize,
    transitions: Vec<u32>,
    accept_errors: Vec<u8>,
    accept_prefix_errors: Vec<u8>,
    max_edits: u8,
    pattern_len: usize,
}

impl EditDistanceDfa {
    /// Automaton with transpositions, no exact prefix and no confusables.
    pub fn new(pattern: &str, max_edits: u8) -> Result<Self, AutomatonError> {
        DfaBuilder::new(pattern).max_edits(max_edits).build()
    }

    pub fn builder(pattern: &str) -> DfaBuilder {
        DfaBuilder::new(pattern)
    }

    #[inline]
    pub fn num_states(&self) -> usize {
        self.accept_errors.len()
    }

    /// Distinct symbols, including the shared "other" symbol.
    #[inline]
    pub fn num_symbols(&self) -> usize {
        self.num_symbols
    }

    #[inline]
    pub fn pattern_len(&self) -> usize {
        self.pattern_len
    }

    #[inline]
    fn symbol(&self, c: char) -> usize {
        match self.alphabet.binary_search_by_key(&c, |&(ch, _)| ch) {
            Ok(i) => self.alphabet[i].1 as usize,
            Err(_) => self.num_symbols - 1,
        }
    }
}

impl Automaton for EditDistanceDfa {
    type Cursor<'a> = DfaCursor<'a>;

    fn start(&self) -> DfaCursor<'_> {
        DfaCursor { dfa: self, state: 0 }
    }

    fn max_edits(&self) -> u8 {
        self.max_edits
    }
}

/// Current state of an [`EditDistanceDfa`] run. Copying is cheap.
#[derive(Debug, Clone, Copy)]
pub struct DfaCursor<'a> {
    dfa: &'a EditDistanceDfa,
    state: u32,
}

impl AutomatonCursor for DfaCursor<'_> {
    #[inline]
    fn step(&mut self, c: char) {
        if self.state != DEAD {
            let index = self.state as usize * self.dfa.num_symbols + self.dfa.symbol(c);
            self.state = self.dfa.transitions[index];
        }
    }

    #[inline]
    fn is_accepting(&self) -> bool {
        self.state != DEAD && self.dfa.accept_errors[self.state as usize] != NOT_ACCEPTING
    }

    #[inline]
    fn is_rejecting(&self) -> bool {
        self.state == DEAD
    }

    fn errors_made(&self) -> u8 {
        if self.is_accepting() {
            self.dfa.accept_errors[self.state as usize]
        } else {
            self.dfa.max_edits
        }
    }

    fn prefix_errors_made(&self) -> u8 {
        if self.is_accepting() {
            self.dfa.accept_prefix_errors[self.state as usize]
        } else {
            0
        }
    }
}
