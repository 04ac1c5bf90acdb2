// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The whole pipeline behind one call.
//!
//! ```text
//! text ──normalize──▶ tokens ──lexicon──▶ QueryTokens
//!                                            │
//!                      RequestBuilder ◀──────┘
//!                            │
//!            retrieve (trie walk + intersect)
//!                            │
//!       Candidate { exact, norm, rank } per surviving id
//!                            │
//!     top_k: prefilter ─▶ similarity + alignment ─▶ final order
//! ```
//!
//! The engine owns the posting trie and the per-document data scoring needs
//! (name variants, categories, rank, token vector). Documents can be added,
//! replaced and removed at any time; queries borrow the engine immutably, so
//! a caller sharing one across threads wraps it in a lock of its choosing (or
//! publishes frozen snapshots through [`SharedIndex`](crate::index::SharedIndex)).

use super::cancel::CancelFlag;
use super::retrieval::{retrieve, RequestBuilder};
use crate::config::SearchConfig;
use crate::error::{ConfigError, Result};
use crate::index::trie::PostingTrie;
use crate::scoring::alignment::{AlignmentScorer, NameScores, QuerySlice};
use crate::scoring::idf::IdfCache;
use crate::scoring::ranking::{top_k, Candidate};
use crate::scoring::vector::{similarity, DocVec, QueryVec};
use crate::types::{DocId, Lang, QueryTokens, Token, CATEGORY_LANG, DEFAULT_LANG};
use crate::util::lexicon::Lexicon;
use crate::util::normalize::{DefaultNormalizer, Normalizer};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

/// A document as supplied by the caller, before tokenization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocId,
    pub name: String,
    #[serde(default)]
    pub alt_names: Vec<String>,
    #[serde(default)]
    pub rank: u8,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub lang: Lang,
}

impl Document {
    pub fn new(id: DocId, name: impl Into<String>) -> Self {
        Document {
            id,
            name: name.into(),
            lang: DEFAULT_LANG,
            ..Document::default()
        }
    }

    pub fn alt_name(mut self, name: impl Into<String>) -> Self {
        self.alt_names.push(name.into());
        self
    }

    pub fn rank(mut self, rank: u8) -> Self {
        self.rank = rank;
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.categories.push(category.into());
        self
    }
}

/// Parse a JSON array of documents.
///
/// A document claiming the category branch's language code is rejected.
pub fn parse_documents(json: &str) -> std::result::Result<Vec<Document>, ConfigError> {
    let docs: Vec<Document> = serde_json::from_str(json)?;
    if let Some(doc) = docs.iter().find(|d| d.lang == CATEGORY_LANG) {
        return Err(ConfigError::ReservedLanguage {
            id: Some(doc.id),
            lang: doc.lang,
        });
    }
    Ok(docs)
}

pub fn load_documents(path: impl AsRef<Path>) -> std::result::Result<Vec<Document>, ConfigError> {
    let json = std::fs::read_to_string(path)?;
    parse_documents(&json)
}

/// Signals about a document that live outside the index.
pub trait ExternalFeatures {
    /// Distance from the user; only orders otherwise tied results.
    fn distance(&self, _id: DocId) -> f64 {
        f64::INFINITY
    }

    fn in_region(&self, _id: DocId) -> bool {
        false
    }
}

/// No geography at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFeatures;

impl ExternalFeatures for NoFeatures {}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub id: DocId,
    pub similarity: f64,
    pub name_scores: NameScores,
    pub exact: bool,
}

#[derive(Debug, Clone)]
struct NameVariant {
    tokens: Vec<Token>,
    is_alternate: bool,
}

#[derive(Debug, Clone)]
struct StoredDoc {
    lang: Lang,
    names: Vec<NameVariant>,
    categories: Vec<Token>,
    rank: u8,
    vec: DocVec,
}

pub struct SearchEngine<N = DefaultNormalizer> {
    trie: PostingTrie,
    docs: HashMap<DocId, StoredDoc>,
    config: SearchConfig,
    lexicon: Arc<Lexicon>,
    normalizer: N,
}

impl SearchEngine<DefaultNormalizer> {
    pub fn new(config: SearchConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        Ok(SearchEngine {
            trie: PostingTrie::new(),
            docs: HashMap::new(),
            config,
            lexicon: Arc::new(Lexicon::new()),
            normalizer: DefaultNormalizer,
        })
    }
}

impl<N: Normalizer> SearchEngine<N> {
    pub fn with_lexicon(mut self, lexicon: Arc<Lexicon>) -> Self {
        self.lexicon = lexicon;
        self
    }

    pub fn with_normalizer<M: Normalizer>(self, normalizer: M) -> SearchEngine<M> {
        SearchEngine {
            trie: self.trie,
            docs: self.docs,
            config: self.config,
            lexicon: self.lexicon,
            normalizer,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn index(&self) -> &PostingTrie {
        &self.trie
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn contains(&self, id: DocId) -> bool {
        self.docs.contains_key(&id)
    }

    /// Index a document, replacing any earlier one with the same id.
    ///
    /// Names tagged with the category branch's language code are filed under
    /// [`DEFAULT_LANG`] instead.
    pub fn add_document(&mut self, doc: &Document) {
        self.remove_document(doc.id);

        let lang = if doc.lang == CATEGORY_LANG {
            warn!(id = doc.id, lang = doc.lang, "reserved language code, indexing under default");
            DEFAULT_LANG
        } else {
            doc.lang
        };

        let mut names = Vec::with_capacity(1 + doc.alt_names.len());
        names.push(NameVariant {
            tokens: self.normalizer.tokenize(&doc.name),
            is_alternate: false,
        });
        names.extend(doc.alt_names.iter().map(|alt| NameVariant {
            tokens: self.normalizer.tokenize(alt),
            is_alternate: true,
        }));
        let categories: Vec<Token> = doc
            .categories
            .iter()
            .flat_map(|c| self.normalizer.tokenize(c))
            .collect();

        let mut vec = DocVec::builder();
        for name in &names {
            self.trie.add(doc.id, lang, &name.tokens);
            for token in &name.tokens {
                vec.add(token.clone());
            }
        }
        self.trie.add_categories(doc.id, &categories);

        self.docs.insert(
            doc.id,
            StoredDoc {
                lang,
                names,
                categories,
                rank: doc.rank,
                vec: vec.build(),
            },
        );
    }

    pub fn add_documents<'d>(&mut self, docs: impl IntoIterator<Item = &'d Document>) {
        for doc in docs {
            self.add_document(doc);
        }
    }

    /// Returns false if `id` was not indexed.
    pub fn remove_document(&mut self, id: DocId) -> bool {
        let Some(stored) = self.docs.remove(&id) else {
            return false;
        };
        for name in &stored.names {
            self.trie.erase(id, stored.lang, &name.tokens);
        }
        self.trie.erase_categories(id, &stored.categories);
        true
    }

    /// Tokenize `text` and apply the lexicon. The last token is a prefix
    /// unless the text ends in a separator.
    pub fn parse_query(&self, text: &str) -> QueryTokens {
        let tokens = self.normalizer.tokenize(text);
        let last_is_prefix = !tokens.is_empty() && !self.normalizer.ends_with_separator(text);
        self.lexicon.expand(tokens, last_is_prefix)
    }

    pub fn search_text(&self, text: &str, cancel: &CancelFlag) -> Result<Vec<SearchHit>> {
        self.search(&self.parse_query(text), cancel)
    }

    pub fn search(&self, query: &QueryTokens, cancel: &CancelFlag) -> Result<Vec<SearchHit>> {
        self.search_with_features(query, &NoFeatures, cancel)
    }

    pub fn search_with_features(
        &self,
        query: &QueryTokens,
        features: &dyn ExternalFeatures,
        cancel: &CancelFlag,
    ) -> Result<Vec<SearchHit>> {
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let request = RequestBuilder::new(&self.config.policy)
            .langs(&self.config.languages)
            .match_categories(self.config.match_categories)
            .build(query)?;
        let matched = retrieve(&self.trie.root(), &request, cancel)?;

        let mut idfs = IdfCache::new(&self.trie, self.config.unknown_idf)?;
        let candidates: Vec<Candidate> = matched
            .into_iter()
            .filter_map(|(id, exact)| {
                let doc = self.docs.get(&id)?;
                Some(Candidate {
                    norm: doc.vec.sqr_norm(&mut idfs).sqrt(),
                    rank: doc.rank,
                    ..Candidate::new(id, exact)
                })
            })
            .collect();

        let query_vec = query_vector(query);
        let slice = QuerySlice::new(query.tokens().cloned().collect(), query.last_is_prefix);
        let scorer = AlignmentScorer::new(&slice, &self.config.policy)?;
        let mut name_scores: HashMap<DocId, NameScores> = HashMap::new();

        let ranked = top_k(
            candidates,
            self.config.prefilter_limit,
            self.config.result_limit,
            cancel,
            |candidate| {
                let Some(doc) = self.docs.get(&candidate.id) else {
                    return;
                };
                let scores = scorer.score_names(
                    doc.names
                        .iter()
                        .map(|name| (name.tokens.as_slice(), name.is_alternate)),
                );
                candidate.similarity = similarity(&query_vec, &doc.vec, &mut idfs);
                candidate.breadth = scores.matched_length;
                candidate.distance = features.distance(candidate.id);
                candidate.in_region = features.in_region(candidate.id);
                name_scores.insert(candidate.id, scores);
            },
        )?;

        debug!(tokens = query.len(), hits = ranked.len(), "search finished");
        Ok(ranked
            .into_iter()
            .map(|c| SearchHit {
                id: c.id,
                similarity: c.similarity,
                name_scores: name_scores.remove(&c.id).unwrap_or_default(),
                exact: c.exact,
            })
            .collect())
    }
}

/// Full query tokens become terms; a trailing prefix token becomes the
/// prefix term instead.
fn query_vector(query: &QueryTokens) -> QueryVec {
    let mut builder = QueryVec::builder();
    for (i, token) in query.tokens().enumerate() {
        if query.is_prefix(i) {
            builder.set_prefix(token.clone());
        } else {
            builder.add(token.clone());
        }
    }
    builder.build()
}
