// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Synonyms and stop words.
//!
//! Loaded once at start-up (typically from JSON) and then only read, so a
//! single `Arc<Lexicon>` can serve every query thread.
//!
//! ```json
//! {
//!   "synonyms": { "st": ["saint", "street"] },
//!   "stop_words": ["the", "of"]
//! }
//! ```

use super::normalize::normalize;
use crate::error::ConfigError;
use crate::types::{Pattern, QueryTokens, Token};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LexiconFile {
    synonyms: HashMap<String, Vec<String>>,
    stop_words: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    synonyms: HashMap<Token, Vec<Token>>,
    stop_words: HashSet<Token>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_synonyms<I, S>(mut self, token: &str, synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entry = self.synonyms.entry(Token::new(normalize(token))).or_default();
        for synonym in synonyms {
            let synonym = Token::new(normalize(synonym.as_ref()));
            if !entry.contains(&synonym) {
                entry.push(synonym);
            }
        }
        self
    }

    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stop_words
            .extend(words.into_iter().map(|w| Token::new(normalize(w.as_ref()))));
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let file: LexiconFile = serde_json::from_str(json)?;
        let mut lexicon = Lexicon::new().with_stop_words(&file.stop_words);
        for (token, synonyms) in &file.synonyms {
            lexicon = lexicon.with_synonyms(token, synonyms);
        }
        Ok(lexicon)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn synonyms_of(&self, token: &Token) -> &[Token] {
        self.synonyms.get(token).map_or(&[], Vec::as_slice)
    }

    pub fn is_stop_word(&self, token: &Token) -> bool {
        self.stop_words.contains(token)
    }

    /// Attach synonyms and drop stop words.
    ///
    /// A trailing prefix token is never dropped: it may still grow into a real
    /// word. If every token is a stop word, none are dropped.
    pub fn expand(&self, tokens: Vec<Token>, last_is_prefix: bool) -> QueryTokens {
        let last = tokens.len().saturating_sub(1);
        let keep = |i: usize, token: &Token| (last_is_prefix && i == last) || !self.is_stop_word(token);
        let all_stop = !tokens.iter().enumerate().any(|(i, t)| keep(i, t));

        let patterns = tokens
            .iter()
            .enumerate()
            .filter(|&(i, token)| all_stop || keep(i, token))
            .map(|(_, token)| Pattern::new(token.clone()).with_synonyms(self.synonyms_of(token).iter().cloned()))
            .collect();
        QueryTokens::new(patterns, last_is_prefix)
    }
}
