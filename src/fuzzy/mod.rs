// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! Two implementations here: a plain bounded DP for one-off comparisons, and
//! compiled automata for bulk matching against every token in the index.

pub mod automaton;
pub mod confusable;
pub mod dfa;
pub mod exact;
mod levenshtein;
pub mod prefix;

pub use automaton::{Automaton, AutomatonCursor, TokenAutomaton, TokenCursor};
pub use confusable::ConfusableClasses;
pub use dfa::{DfaBuilder, DfaCursor, EditDistanceDfa};
pub use exact::ExactAutomaton;
pub use levenshtein::*;
pub use prefix::PrefixAcceptor;
