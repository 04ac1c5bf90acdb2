// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The vocabulary shared by every stage of retrieval and ranking.
//!
//! A [`Token`] is an already-normalized unit of text. Tokens are compared by
//! code point, and every length in this crate is a count of characters, never
//! bytes. Documents are identified by an opaque [`DocId`] and indexed under a
//! [`Lang`] branch.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Opaque document identifier. Posting lists keep these sorted and unique.
pub type DocId = u32;

/// Language code selecting a branch of the posting trie.
pub type Lang = u8;

/// Branch used when a caller does not care about languages.
pub const DEFAULT_LANG: Lang = 0;

/// Reserved branch holding category labels instead of name tokens.
pub const CATEGORY_LANG: Lang = Lang::MAX;

/// A normalized token.
///
/// Construction does not normalize; callers are expected to have run text
/// through a [`Normalizer`](crate::util::normalize::Normalizer) first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        Token(text.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn chars(&self) -> std::str::Chars<'_> {
        self.0.chars()
    }

    /// Length in code points.
    #[inline]
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when `self` is a (possibly equal) code-point prefix of `other`.
    #[inline]
    pub fn is_prefix_of(&self, other: &Token) -> bool {
        other.0.starts_with(self.0.as_str())
    }

    pub fn to_chars(&self) -> Vec<char> {
        self.0.chars().collect()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        Token(text.to_string())
    }
}

impl From<String> for Token {
    fn from(text: String) -> Self {
        Token(text)
    }
}

impl Borrow<str> for Token {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A query token together with the literal alternatives it may match.
///
/// The original token is matched with a fuzzy automaton; synonyms are only
/// ever matched exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pattern {
    pub token: Token,
    pub synonyms: Vec<Token>,
}

impl Pattern {
    pub fn new(token: impl Into<Token>) -> Self {
        Pattern {
            token: token.into(),
            synonyms: Vec::new(),
        }
    }

    pub fn with_synonyms<I, T>(mut self, synonyms: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Token>,
    {
        self.synonyms.extend(synonyms.into_iter().map(Into::into));
        self
    }
}

/// A tokenized query: an ordered sequence of patterns, the last of which may
/// be an incomplete prefix of the word the user is still typing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryTokens {
    pub patterns: Vec<Pattern>,
    pub last_is_prefix: bool,
}

impl QueryTokens {
    pub fn new(patterns: Vec<Pattern>, last_is_prefix: bool) -> Self {
        QueryTokens {
            patterns,
            last_is_prefix,
        }
    }

    /// Convenience constructor from bare tokens, without synonyms.
    pub fn from_tokens<I, T>(tokens: I, last_is_prefix: bool) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Token>,
    {
        QueryTokens {
            patterns: tokens.into_iter().map(Pattern::new).collect(),
            last_is_prefix,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Whether the pattern at `index` is the trailing prefix token.
    #[inline]
    pub fn is_prefix(&self, index: usize) -> bool {
        self.last_is_prefix && index + 1 == self.patterns.len()
    }

    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.patterns.iter().map(|p| &p.token)
    }
}
