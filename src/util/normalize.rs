// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization and tokenization.
//!
//! Index and query text must go through the same normalizer, otherwise
//! `Café` in a document and `cafe` in a query never meet. The default
//! implementation:
//!
//! 1. NFD-decomposes and drops combining marks (`café` → `cafe`), when the
//!    `unicode-normalization` feature is enabled
//! 2. lowercases
//! 3. splits on anything that is not alphanumeric
//!
//! Without the feature only steps 2 and 3 run, which assumes pre-normalized
//! or ASCII input.

use crate::types::Token;

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Turns raw text into tokens.
pub trait Normalizer {
    fn tokenize(&self, text: &str) -> Vec<Token>;

    /// True when the user has finished the last word of `text`.
    fn ends_with_separator(&self, text: &str) -> bool {
        text.chars().last().map_or(true, |c| !c.is_alphanumeric())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultNormalizer;

impl Normalizer for DefaultNormalizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        tokenize(text)
    }
}

/// Lowercase, strip diacritics, collapse whitespace.
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|&c| !is_combining_mark(c))
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lowercase and collapse whitespace.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn tokenize(text: &str) -> Vec<Token> {
    normalize(text)
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(Token::from)
        .collect()
}
