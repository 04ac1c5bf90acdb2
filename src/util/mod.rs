// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text helpers: normalization for accent-insensitive matching, and the
//! synonym / stop-word lexicon applied to queries.

pub mod lexicon;
pub mod normalize;

pub use lexicon::Lexicon;
pub use normalize::{normalize, tokenize, DefaultNormalizer, Normalizer};
