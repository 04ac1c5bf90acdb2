// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! TF-IDF vectors and cosine similarity with prefix completion.
//!
//! A [`DocVec`] is a sparse vector over tokens: each entry carries the summed
//! frequency of the token and the largest weight any single occurrence
//! contributed. Entries are sorted by token and unique, so similarity is a
//! linear merge of two sorted lists.
//!
//! A [`QueryVec`] is a `DocVec` plus, optionally, one prefix term: the word
//! the user has not finished typing. The prefix may complete to any document
//! token it is a prefix of; similarity takes the best such completion (or
//! none at all, whichever scores higher).
//!
//! Weights are `frequency × idf`, with idf coming from an [`IdfCache`].

use super::idf::{DocFrequency, IdfCache};
use crate::contracts::{check_doc_vec_canonical, check_similarity_in_range};
use crate::types::Token;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq)]
pub struct TokenFrequency {
    pub token: Token,
    pub frequency: f64,
    pub max_weight: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocVec {
    entries: Vec<TokenFrequency>,
}

impl DocVec {
    pub fn builder() -> DocVecBuilder {
        DocVecBuilder::default()
    }

    #[inline]
    pub fn entries(&self) -> &[TokenFrequency] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Squared Euclidean norm under the given idf table.
    pub fn sqr_norm<D: DocFrequency>(&self, idfs: &mut IdfCache<D>) -> f64 {
        self.entries
            .iter()
            .map(|e| {
                let w = e.frequency * idfs.get(&e.token, false);
                w * w
            })
            .sum()
    }

    fn weights<D: DocFrequency>(&self, idfs: &mut IdfCache<D>) -> Vec<f64> {
        self.entries
            .iter()
            .map(|e| e.frequency * idfs.get(&e.token, false))
            .collect()
    }
}

/// Collects raw `(token, weight)` occurrences; [`build`](Self::build) sorts
/// and merges them.
#[derive(Debug, Clone, Default)]
pub struct DocVecBuilder {
    raw: Vec<(Token, f64)>,
}

impl DocVecBuilder {
    pub fn add(&mut self, token: Token) -> &mut Self {
        self.add_weighted(token, 1.0)
    }

    pub fn add_weighted(&mut self, token: Token, weight: f64) -> &mut Self {
        self.raw.push((token, weight));
        self
    }

    pub fn build(&self) -> DocVec {
        let mut raw = self.raw.clone();
        raw.sort_by(|a, b| a.0.cmp(&b.0));

        let mut entries: Vec<TokenFrequency> = Vec::with_capacity(raw.len());
        for (token, weight) in raw {
            match entries.last_mut() {
                Some(last) if last.token == token => {
                    last.frequency += weight;
                    last.max_weight = last.max_weight.max(weight);
                }
                _ => entries.push(TokenFrequency {
                    token,
                    frequency: weight,
                    max_weight: weight,
                }),
            }
        }
        // INVARIANT: DOC_VEC_CANONICAL
        check_doc_vec_canonical(&entries);
        DocVec { entries }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryVec {
    terms: DocVec,
    prefix: Option<Token>,
}

impl QueryVec {
    pub fn builder() -> QueryVecBuilder {
        QueryVecBuilder::default()
    }

    pub fn terms(&self) -> &DocVec {
        &self.terms
    }

    pub fn prefix(&self) -> Option<&Token> {
        self.prefix.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty() && self.prefix.is_none()
    }
}

#[derive(Debug, Clone, Default)]
pub struct QueryVecBuilder {
    terms: DocVecBuilder,
    prefix: Option<Token>,
}

impl QueryVecBuilder {
    pub fn add(&mut self, token: Token) -> &mut Self {
        self.terms.add(token);
        self
    }

    pub fn add_weighted(&mut self, token: Token, weight: f64) -> &mut Self {
        self.terms.add_weighted(token, weight);
        self
    }

    /// Replaces any earlier prefix term.
    pub fn set_prefix(&mut self, token: Token) -> &mut Self {
        self.prefix = Some(token);
        self
    }

    pub fn build(&self) -> QueryVec {
        QueryVec {
            terms: self.terms.build(),
            prefix: self.prefix.clone(),
        }
    }
}

/// Cosine similarity of `query` and `doc`, in `[0, 1]`.
///
/// Two empty vectors are identical (1.0); an empty vector against a non-empty
/// one shares nothing (0.0).
pub fn similarity<D: DocFrequency>(query: &QueryVec, doc: &DocVec, idfs: &mut IdfCache<D>) -> f64 {
    match (query.is_empty(), doc.is_empty()) {
        (true, true) => return 1.0,
        (true, false) | (false, true) => return 0.0,
        (false, false) => {}
    }

    let terms = &query.terms.entries;
    let entries = &doc.entries;
    let query_weights = query.terms.weights(idfs);
    let doc_weights = doc.weights(idfs);

    let doc_sqr: f64 = doc_weights.iter().map(|w| w * w).sum();
    let mut query_sqr: f64 = query_weights.iter().map(|w| w * w).sum();
    let prefix_weight = query.prefix.as_ref().map(|p| idfs.get(p, true));
    if let Some(w) = prefix_weight {
        query_sqr += w * w;
    }
    if doc_sqr <= 0.0 || query_sqr <= 0.0 {
        return 0.0;
    }

    // Merge walk over the two sorted lists; remember which query term each
    // document entry matched so a prefix completion can take its place.
    let mut matched: Vec<Option<usize>> = vec![None; entries.len()];
    let mut dot = 0.0;
    let (mut i, mut j) = (0, 0);
    while i < terms.len() && j < entries.len() {
        match terms[i].token.cmp(&entries[j].token) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                dot += query_weights[i] * doc_weights[j];
                matched[j] = Some(i);
                i += 1;
                j += 1;
            }
        }
    }

    let doc_norm = doc_sqr.sqrt();
    let mut best = dot / (query_sqr.sqrt() * doc_norm);

    if let (Some(prefix), Some(prefix_weight)) = (&query.prefix, prefix_weight) {
        // Completions of the prefix are contiguous in sorted order.
        let start = entries.partition_point(|e| e.token.as_str() < prefix.as_str());
        for (j, entry) in entries.iter().enumerate().skip(start) {
            if !prefix.is_prefix_of(&entry.token) {
                break;
            }
            let (mut nd, mut nl) = (dot, query_sqr);
            if let Some(i) = matched[j] {
                nd -= query_weights[i] * doc_weights[j];
                nl -= query_weights[i] * query_weights[i];
            }
            nd += prefix_weight * entry.max_weight * idfs.get(&entry.token, false);
            if nl > 0.0 {
                best = best.max(nd / (nl.sqrt() * doc_norm));
            }
        }
    }

    // INVARIANT: SIMILARITY_IN_UNIT_RANGE
    check_similarity_in_range(best);
    best.clamp(0.0, 1.0)
}
