// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! AND across query tokens, OR within one token.
//!
//! Every automaton belonging to the current token (the token itself, its
//! synonyms, its category match) reports ids into the same bucket. Stepping to
//! the next token keeps only the ids that were also in the previous result. An
//! id stays exact only while every token it matched so far matched exactly.

use crate::types::DocId;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct TokenIntersector {
    current: HashMap<DocId, bool>,
    /// `None` until the first step.
    result: Option<HashMap<DocId, bool>>,
}

impl TokenIntersector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a hit for the current token.
    pub fn add(&mut self, id: DocId, exact: bool) {
        *self.current.entry(id).or_insert(false) |= exact;
    }

    /// Close the current token and intersect it with everything before.
    pub fn step(&mut self) {
        let current = std::mem::take(&mut self.current);
        self.result = Some(match self.result.take() {
            None => current,
            Some(previous) => current
                .into_iter()
                .filter_map(|(id, exact)| previous.get(&id).map(|&was_exact| (id, exact && was_exact)))
                .collect(),
        });
    }

    /// Ids surviving so far. Zero before the first step.
    pub fn len(&self) -> usize {
        self.result.as_ref().map_or(0, HashMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Surviving ids sorted ascending. Hits added after the last step are ignored.
    pub fn finish(self) -> Vec<(DocId, bool)> {
        let mut out: Vec<(DocId, bool)> = self.result.unwrap_or_default().into_iter().collect();
        out.sort_unstable_by_key(|&(id, _)| id);
        out
    }
}
