// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: from query tokens to a ranked list of documents.
//!
//! Retrieval walks every query token's automaton over the posting trie and
//! intersects the hits; ranking then orders what survived. [`engine`] strings
//! the stages together for callers that just want results.

pub mod cancel;
pub mod dedup;
pub mod engine;
pub mod intersect;
pub mod retrieval;
pub mod walk;

pub use cancel::CancelFlag;
pub use dedup::CandidateMerger;
pub use engine::{load_documents, parse_documents, Document, ExternalFeatures, NoFeatures, SearchEngine, SearchHit};
pub use intersect::TokenIntersector;
pub use retrieval::{retrieve, RequestBuilder, RetrievalRequest, TokenRequest};
pub use walk::match_in_trie;
