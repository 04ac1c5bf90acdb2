// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how retrieved candidates get their numbers.
//!
//! Two independent signals feed the final order. [`alignment`] grades how the
//! query lines up with a document's names (full match, prefix, substring...),
//! and [`vector`] computes an IDF-weighted cosine similarity over token bags,
//! with a completion step for a query whose last word is still being typed.
//! [`ranking`] combines them with external features into a top-K list.

pub mod alignment;
pub mod idf;
pub mod ranking;
pub mod vector;

pub use alignment::{score_name, AlignmentScorer, EditTally, NameScore, NameScores, QuerySlice};
pub use idf::{DocFrequency, FrequencyFn, IdfCache};
pub use ranking::{compare_final, compare_prefilter, top_k, Candidate};
pub use vector::{similarity, DocVec, DocVecBuilder, QueryVec, QueryVecBuilder, TokenFrequency};
