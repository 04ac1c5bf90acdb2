// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The automaton contract and the concrete automaton used per query token.
//!
//! Every automaton hands out cursors. A cursor is a small copyable value that
//! is stepped one character at a time and can be cloned at any point, which is
//! what lets the trie walk fork it at each branch.
//!
//! [`TokenAutomaton`] is a closed enum over the four shapes a query token can
//! take (exact or fuzzy, whole word or prefix). Dispatch on it is a match, so
//! the innermost stepping loop never goes through a vtable.

use super::dfa::{DfaCursor, EditDistanceDfa};
use super::exact::{ExactAutomaton, ExactCursor};
use super::prefix::{PrefixAcceptor, PrefixCursor};
use crate::config::EditBudgetPolicy;
use crate::error::AutomatonError;
use crate::types::Token;

/// A position inside a running automaton.
pub trait AutomatonCursor: Clone {
    fn step(&mut self, c: char);

    fn is_accepting(&self) -> bool;

    /// No continuation of the input can ever be accepted.
    fn is_rejecting(&self) -> bool;

    /// Fewest edits explaining the input when accepting, otherwise the budget.
    fn errors_made(&self) -> u8;

    /// Edits among [`errors_made`](Self::errors_made) that fell in the
    /// salient prefix of the pattern.
    fn prefix_errors_made(&self) -> u8;

    fn advance(&mut self, text: &str) {
        for c in text.chars() {
            self.step(c);
        }
    }

    fn advance_chars(&mut self, chars: &[char]) {
        for &c in chars {
            if self.is_rejecting() {
                return;
            }
            self.step(c);
        }
    }
}

pub trait Automaton {
    type Cursor<'a>: AutomatonCursor
    where
        Self: 'a;

    fn start(&self) -> Self::Cursor<'_>;

    fn max_edits(&self) -> u8;

    /// Errors made on `text` if it is accepted.
    fn run(&self, text: &str) -> Option<u8> {
        let mut cursor = self.start();
        cursor.advance(text);
        cursor.is_accepting().then(|| cursor.errors_made())
    }
}

/// Automaton matching one query token against index tokens.
#[derive(Debug, Clone)]
pub enum TokenAutomaton {
    Exact(ExactAutomaton),
    Fuzzy(EditDistanceDfa),
    ExactPrefix(PrefixAcceptor<ExactAutomaton>),
    FuzzyPrefix(PrefixAcceptor<EditDistanceDfa>),
}

impl TokenAutomaton {
    /// Build the automaton for `token` under `policy`.
    ///
    /// Tokens whose budget is zero get an [`ExactAutomaton`]. With `prefix`
    /// set the result also accepts every extension of a match.
    pub fn for_token(
        token: &Token,
        policy: &EditBudgetPolicy,
        prefix: bool,
    ) -> Result<Self, AutomatonError> {
        let max_edits = policy.max_edits_for(token.char_len());
        if max_edits == 0 {
            return Ok(Self::exact(token, prefix));
        }
        let dfa = EditDistanceDfa::builder(token.as_str())
            .max_edits(max_edits)
            .exact_prefix(policy.exact_prefix_len)
            .salient_prefix(policy.salient_prefix_len)
            .transpositions(policy.transpositions)
            .confusables(policy.confusables.clone())
            .build()?;
        Ok(if prefix {
            TokenAutomaton::FuzzyPrefix(PrefixAcceptor::new(dfa))
        } else {
            TokenAutomaton::Fuzzy(dfa)
        })
    }

    /// Zero-edit automaton, used for short tokens and for synonyms.
    pub fn exact(token: &Token, prefix: bool) -> Self {
        let exact = ExactAutomaton::new(token.as_str());
        if prefix {
            TokenAutomaton::ExactPrefix(PrefixAcceptor::new(exact))
        } else {
            TokenAutomaton::Exact(exact)
        }
    }

    pub fn is_prefix(&self) -> bool {
        matches!(self, TokenAutomaton::ExactPrefix(_) | TokenAutomaton::FuzzyPrefix(_))
    }
}

impl Automaton for TokenAutomaton {
    type Cursor<'a> = TokenCursor<'a>;

    fn start(&self) -> TokenCursor<'_> {
        match self {
            TokenAutomaton::Exact(a) => TokenCursor::Exact(a.start()),
            TokenAutomaton::Fuzzy(a) => TokenCursor::Fuzzy(a.start()),
            TokenAutomaton::ExactPrefix(a) => TokenCursor::ExactPrefix(a.start()),
            TokenAutomaton::FuzzyPrefix(a) => TokenCursor::FuzzyPrefix(a.start()),
        }
    }

    fn max_edits(&self) -> u8 {
        match self {
            TokenAutomaton::Exact(a) => a.max_edits(),
            TokenAutomaton::Fuzzy(a) => a.max_edits(),
            TokenAutomaton::ExactPrefix(a) => a.max_edits(),
            TokenAutomaton::FuzzyPrefix(a) => a.max_edits(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum TokenCursor<'a> {
    Exact(ExactCursor<'a>),
    Fuzzy(DfaCursor<'a>),
    ExactPrefix(PrefixCursor<ExactCursor<'a>>),
    FuzzyPrefix(PrefixCursor<DfaCursor<'a>>),
}

macro_rules! dispatch {
    ($self:expr, $cursor:ident => $body:expr) => {
        match $self {
            TokenCursor::Exact($cursor) => $body,
            TokenCursor::Fuzzy($cursor) => $body,
            TokenCursor::ExactPrefix($cursor) => $body,
            TokenCursor::FuzzyPrefix($cursor) => $body,
        }
    };
}

impl AutomatonCursor for TokenCursor<'_> {
    #[inline]
    fn step(&mut self, c: char) {
        dispatch!(self, cursor => cursor.step(c))
    }

    #[inline]
    fn is_accepting(&self) -> bool {
        dispatch!(self, cursor => cursor.is_accepting())
    }

    #[inline]
    fn is_rejecting(&self) -> bool {
        dispatch!(self, cursor => cursor.is_rejecting())
    }

    fn errors_made(&self) -> u8 {
        dispatch!(self, cursor => cursor.errors_made())
    }

    fn prefix_errors_made(&self) -> u8 {
        dispatch!(self, cursor => cursor.prefix_errors_made())
    }
}
