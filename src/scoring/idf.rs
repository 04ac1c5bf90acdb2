// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverse document frequency, memoized per query.
//!
//! `idf(t) = 1 / df(t)` where `df` is the number of documents containing `t`
//! (or, for a prefix term, a token starting with `t`). Tokens that occur
//! nowhere get a configurable `unknown_idf` instead of a division by zero.
//!
//! Document frequency is expensive (a trie descent, and for prefixes a subtree
//! scan), so an [`IdfCache`] asks its delegate at most once per
//! `(token, is_prefix)` pair. Create one cache per query; the memo table is
//! not shared between threads.

use crate::error::ConfigError;
use crate::types::Token;
use std::collections::HashMap;

/// Source of document frequencies.
pub trait DocFrequency {
    fn doc_frequency(&self, token: &Token, is_prefix: bool) -> u64;
}

impl<T: DocFrequency + ?Sized> DocFrequency for &T {
    fn doc_frequency(&self, token: &Token, is_prefix: bool) -> u64 {
        (**self).doc_frequency(token, is_prefix)
    }
}

/// Adapter turning a closure into a [`DocFrequency`].
pub struct FrequencyFn<F>(pub F);

impl<F> DocFrequency for FrequencyFn<F>
where
    F: Fn(&Token, bool) -> u64,
{
    fn doc_frequency(&self, token: &Token, is_prefix: bool) -> u64 {
        (self.0)(token, is_prefix)
    }
}

pub struct IdfCache<D> {
    delegate: D,
    unknown_idf: f64,
    full: HashMap<Token, f64>,
    prefix: HashMap<Token, f64>,
}

impl<D: DocFrequency> IdfCache<D> {
    /// Fails when `unknown_idf` is not strictly positive.
    pub fn new(delegate: D, unknown_idf: f64) -> Result<Self, ConfigError> {
        if !(unknown_idf > 0.0) {
            return Err(ConfigError::NonPositiveUnknownIdf(unknown_idf));
        }
        Ok(IdfCache {
            delegate,
            unknown_idf,
            full: HashMap::new(),
            prefix: HashMap::new(),
        })
    }

    pub fn get(&mut self, token: &Token, is_prefix: bool) -> f64 {
        let memo = if is_prefix { &mut self.prefix } else { &mut self.full };
        if let Some(&idf) = memo.get(token) {
            return idf;
        }
        let df = self.delegate.doc_frequency(token, is_prefix);
        let idf = if df == 0 { self.unknown_idf } else { 1.0 / df as f64 };
        memo.insert(token.clone(), idf);
        idf
    }

    /// Distinct `(token, is_prefix)` pairs looked up so far.
    pub fn len(&self) -> usize {
        self.full.len() + self.prefix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
