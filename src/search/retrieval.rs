// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Candidate retrieval: which documents contain every query token?
//!
//! Each query token becomes a small bundle of automata:
//!
//! | Automaton        | Matches against        | Edits allowed          |
//! |------------------|------------------------|------------------------|
//! | the token itself | every listed language  | by length, see policy  |
//! | each synonym     | every listed language  | none                   |
//! | category label   | the category branch    | none                   |
//!
//! The last token of a query still being typed is wrapped as a prefix
//! acceptor (synonyms too). Hits of one bundle are OR-ed, bundles are AND-ed.

use super::cancel::CancelFlag;
use super::intersect::TokenIntersector;
use super::walk::match_in_trie;
use crate::config::EditBudgetPolicy;
use crate::error::{AutomatonError, Result};
use crate::fuzzy::automaton::TokenAutomaton;
use crate::fuzzy::exact::ExactAutomaton;
use crate::index::cursor::{for_each_lang_root, TrieCursor};
use crate::types::{DocId, Lang, QueryTokens, CATEGORY_LANG, DEFAULT_LANG};
use tracing::debug;

/// Automata for one query token.
#[derive(Debug, Clone)]
pub struct TokenRequest {
    pub automata: Vec<TokenAutomaton>,
    pub category: Option<ExactAutomaton>,
}

#[derive(Debug, Clone)]
pub struct RetrievalRequest {
    pub tokens: Vec<TokenRequest>,
    pub langs: Vec<Lang>,
}

pub struct RequestBuilder<'p> {
    policy: &'p EditBudgetPolicy,
    langs: Vec<Lang>,
    categories: bool,
}

impl<'p> RequestBuilder<'p> {
    pub fn new(policy: &'p EditBudgetPolicy) -> Self {
        RequestBuilder {
            policy,
            langs: vec![DEFAULT_LANG],
            categories: false,
        }
    }

    pub fn langs(mut self, langs: &[Lang]) -> Self {
        self.langs = langs.to_vec();
        self
    }

    pub fn match_categories(mut self, enabled: bool) -> Self {
        self.categories = enabled;
        self
    }

    pub fn build(&self, query: &QueryTokens) -> std::result::Result<RetrievalRequest, AutomatonError> {
        let mut tokens = Vec::with_capacity(query.len());
        for (i, pattern) in query.patterns.iter().enumerate() {
            let prefix = query.is_prefix(i);
            let mut automata = Vec::with_capacity(1 + pattern.synonyms.len());
            automata.push(TokenAutomaton::for_token(&pattern.token, self.policy, prefix)?);
            automata.extend(
                pattern
                    .synonyms
                    .iter()
                    .map(|synonym| TokenAutomaton::exact(synonym, prefix)),
            );
            let category = self
                .categories
                .then(|| ExactAutomaton::new(pattern.token.as_str()));
            tokens.push(TokenRequest { automata, category });
        }
        Ok(RetrievalRequest {
            tokens,
            langs: self.langs.clone(),
        })
    }
}

/// Ids matching every token of `request`, each flagged exact when every token
/// matched it without edits. Sorted by id.
///
/// The cancel flag is polled before each token.
pub fn retrieve<C: TrieCursor>(
    root: &C,
    request: &RetrievalRequest,
    cancel: &CancelFlag,
) -> Result<Vec<(DocId, bool)>> {
    let mut intersector = TokenIntersector::new();

    for (i, token) in request.tokens.iter().enumerate() {
        cancel.check()?;

        for automaton in &token.automata {
            for_each_lang_root(root, &request.langs, |_, branch, consumed| {
                match_in_trie(&branch, consumed, automaton, |id, exact| intersector.add(id, exact));
            });
        }
        if let Some(category) = &token.category {
            for_each_lang_root(root, &[CATEGORY_LANG], |_, branch, consumed| {
                match_in_trie(&branch, consumed, category, |id, exact| intersector.add(id, exact));
            });
        }

        intersector.step();
        debug!(token = i, candidates = intersector.len(), "intersected query token");
        if intersector.is_empty() {
            break;
        }
    }

    Ok(intersector.finish())
}
