// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tuning constants and runtime configuration.
//!
//! Compile-time constants live at the top of this file. Everything a deployment
//! may want to tune per index is on [`SearchConfig`], which deserializes from
//! JSON and is validated once before use.

use crate::error::ConfigError;
use crate::fuzzy::confusable::ConfusableClasses;
use crate::types::{Lang, CATEGORY_LANG, DEFAULT_LANG};
use serde::{Deserialize, Serialize};
use std::path::Path;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Hard ceiling on the edit budget of a compiled automaton.
///
/// The number of distinct states grows quickly with the budget; three edits
/// is already generous for tokens of natural-language names.
pub const MAX_EDIT_BUDGET: u8 = 3;

/// Longest pattern an edit-distance automaton accepts, in characters.
pub const MAX_PATTERN_LEN: usize = 1024;

/// Inverse document frequency used for tokens absent from the index.
pub const DEFAULT_UNKNOWN_IDF: f64 = 1.0;

/// Candidates kept by the cheap prefilter before similarity is computed.
pub const DEFAULT_PREFILTER_LIMIT: usize = 200;

/// Results returned by a query when the caller does not say otherwise.
pub const DEFAULT_RESULT_LIMIT: usize = 20;

/// Two matched lengths are "similar" when the shorter is within a quarter of
/// the longer. Used when picking the best alignment among name variants.
pub const MATCHED_LENGTH_TOLERANCE_DIVISOR: usize = 4;

// =============================================================================
// EDIT BUDGET POLICY
// =============================================================================

/// Maps a token's length to the number of edits it may absorb.
///
/// Short tokens get no slack at all: one typo in a three-letter word already
/// produces a different word more often than not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditBudgetPolicy {
    /// Tokens shorter than this are matched exactly.
    pub zero_below: usize,
    /// Tokens shorter than this (and not shorter than `zero_below`) get one edit.
    /// Longer tokens get two.
    pub one_below: usize,
    /// Leading characters that must match literally.
    pub exact_prefix_len: usize,
    /// Leading characters whose edits are also tallied separately.
    pub salient_prefix_len: usize,
    /// Whether swapping two adjacent characters counts as a single edit.
    pub transpositions: bool,
    /// Character classes whose members substitute for each other for free.
    pub confusables: ConfusableClasses,
}

impl Default for EditBudgetPolicy {
    fn default() -> Self {
        EditBudgetPolicy {
            zero_below: 4,
            one_below: 8,
            exact_prefix_len: 1,
            salient_prefix_len: 0,
            transpositions: true,
            confusables: ConfusableClasses::default(),
        }
    }
}

impl EditBudgetPolicy {
    /// Edit budget for a token of `len` characters.
    pub fn max_edits_for(&self, len: usize) -> u8 {
        let budget = if len < self.zero_below {
            0
        } else if len < self.one_below {
            1
        } else {
            2
        };
        budget.min(MAX_EDIT_BUDGET)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.zero_below > self.one_below {
            return Err(ConfigError::InvalidBudgetThresholds {
                zero_below: self.zero_below,
                one_below: self.one_below,
            });
        }
        Ok(())
    }
}

// =============================================================================
// SEARCH CONFIG
// =============================================================================

/// Runtime configuration of a [`SearchEngine`](crate::search::engine::SearchEngine).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub policy: EditBudgetPolicy,
    pub unknown_idf: f64,
    pub prefilter_limit: usize,
    pub result_limit: usize,
    /// Language branches a query walks.
    pub languages: Vec<Lang>,
    /// Also match query tokens against category labels.
    pub match_categories: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            policy: EditBudgetPolicy::default(),
            unknown_idf: DEFAULT_UNKNOWN_IDF,
            prefilter_limit: DEFAULT_PREFILTER_LIMIT,
            result_limit: DEFAULT_RESULT_LIMIT,
            languages: vec![DEFAULT_LANG],
            match_categories: true,
        }
    }
}

impl SearchConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // NaN fails this comparison too.
        if !(self.unknown_idf > 0.0) {
            return Err(ConfigError::NonPositiveUnknownIdf(self.unknown_idf));
        }
        if self.prefilter_limit == 0 {
            return Err(ConfigError::ZeroLimit("prefilter_limit"));
        }
        if self.result_limit == 0 {
            return Err(ConfigError::ZeroLimit("result_limit"));
        }
        if self.languages.contains(&CATEGORY_LANG) {
            return Err(ConfigError::ReservedLanguage {
                id: None,
                lang: CATEGORY_LANG,
            });
        }
        self.policy.validate()
    }
}
