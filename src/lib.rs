// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Typo-tolerant token retrieval and ranking.
//!
//! Every query token is compiled into an edit-distance automaton, walked in
//! lockstep over a trie of indexed tokens, and the posting lists it reaches
//! are intersected across tokens. Survivors are ranked by name alignment and
//! IDF-weighted cosine similarity.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   fuzzy     │────▶│   search     │◀────│    index     │
//! │ (DFA, exact,│     │ (walk, inter-│     │ (PostingTrie,│
//! │  prefix)    │     │  sect, engine│     │  FrozenTrie) │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!                            │
//!                            ▼
//!                     ┌──────────────┐
//!                     │   scoring    │
//!                     │ (alignment,  │
//!                     │  idf, top-K) │
//!                     └──────────────┘
//! ```
//!
//! | Module      | Key types                                              |
//! |-------------|--------------------------------------------------------|
//! | `fuzzy`     | `EditDistanceDfa`, `ExactAutomaton`, `PrefixAcceptor`  |
//! | `index`     | `PostingTrie`, `FrozenTrie`, `TrieCursor`              |
//! | `search`    | `retrieve`, `TokenIntersector`, `SearchEngine`         |
//! | `scoring`   | `AlignmentScorer`, `IdfCache`, `similarity`, `top_k`   |
//! | `util`      | `Normalizer`, `Lexicon`                                |
//! | `contracts` | debug-only invariant checks                            |
//!
//! # Usage
//!
//! ```
//! use typotrie::{CancelFlag, Document, SearchConfig, SearchEngine};
//!
//! let mut engine = SearchEngine::new(SearchConfig::default()).unwrap();
//! engine.add_document(&Document::new(1, "Hotel Moscow"));
//! engine.add_document(&Document::new(2, "Moscow Kremlin"));
//!
//! let hits = engine.search_text("moscw ", &CancelFlag::new()).unwrap();
//! assert_eq!(hits.len(), 2);
//! ```

pub mod config;
pub mod contracts;
pub mod error;
pub mod fuzzy;
pub mod index;
pub mod scoring;
pub mod search;
#[doc(hidden)]
pub mod testing;
pub mod types;
pub mod util;

pub use config::{EditBudgetPolicy, SearchConfig};
pub use error::{AutomatonError, ConfigError, Result, SearchError};
pub use fuzzy::{Automaton, AutomatonCursor, EditDistanceDfa, ExactAutomaton, PrefixAcceptor, TokenAutomaton};
pub use index::{FrozenTrie, PostingTrie, TrieCursor};
pub use scoring::{similarity, top_k, AlignmentScorer, Candidate, DocVec, IdfCache, NameScore, NameScores, QueryVec};
pub use search::{retrieve, CancelFlag, Document, RequestBuilder, SearchEngine, SearchHit};
pub use types::{DocId, Lang, Pattern, QueryTokens, Token};
pub use util::{normalize, tokenize, Lexicon};
