// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turn a whole-word automaton into a prefix acceptor.
//!
//! A string is accepted once any of its prefixes is accepted by the inner
//! automaton. This is how the last, still-being-typed query token matches
//! longer words: `mosc` accepts `moscow`.
//!
//! After the first accept the cursor keeps feeding the inner automaton while it
//! is alive, so that a longer input can improve the error count (`abcd`
//! against a two-edit `abcde` first accepts with two errors, then with one).
//! The reported count is the smallest seen at any accepting point. Once the
//! inner automaton rejects, further input changes nothing.

use super::automaton::{Automaton, AutomatonCursor};

#[derive(Debug, Clone)]
pub struct PrefixAcceptor<A> {
    inner: A,
}

impl<A: Automaton> PrefixAcceptor<A> {
    pub fn new(inner: A) -> Self {
        PrefixAcceptor { inner }
    }

    pub fn inner(&self) -> &A {
        &self.inner
    }
}

impl<A: Automaton> Automaton for PrefixAcceptor<A> {
    type Cursor<'a> = PrefixCursor<A::Cursor<'a>> where Self: 'a;

    fn start(&self) -> Self::Cursor<'_> {
        PrefixCursor::new(self.inner.start())
    }

    fn max_edits(&self) -> u8 {
        self.inner.max_edits()
    }
}

/// Best accepting point seen so far: `(errors, prefix_errors)`.
type Latch = Option<(u8, u8)>;

#[derive(Debug, Clone, Copy)]
pub struct PrefixCursor<C> {
    inner: C,
    latch: Latch,
}

impl<C: AutomatonCursor> PrefixCursor<C> {
    fn new(inner: C) -> Self {
        let mut cursor = PrefixCursor { inner, latch: None };
        cursor.observe();
        cursor
    }

    fn observe(&mut self) {
        if self.inner.is_accepting() {
            let seen = (self.inner.errors_made(), self.inner.prefix_errors_made());
            self.latch = Some(match self.latch {
                Some(best) => best.min(seen),
                None => seen,
            });
        }
    }
}

impl<C: AutomatonCursor> AutomatonCursor for PrefixCursor<C> {
    fn step(&mut self, c: char) {
        if self.inner.is_rejecting() {
            return;
        }
        self.inner.step(c);
        self.observe();
    }

    #[inline]
    fn is_accepting(&self) -> bool {
        self.latch.is_some()
    }

    #[inline]
    fn is_rejecting(&self) -> bool {
        self.latch.is_none() && self.inner.is_rejecting()
    }

    fn errors_made(&self) -> u8 {
        match self.latch {
            Some((errors, _)) => errors,
            None => self.inner.errors_made(),
        }
    }

    fn prefix_errors_made(&self) -> u8 {
        match self.latch {
            Some((_, prefix_errors)) => prefix_errors,
            None => self.inner.prefix_errors_made(),
        }
    }
}
