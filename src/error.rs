// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Failing to find anything is not an error: an empty candidate set is a
//! perfectly good answer. The variants here cover misconfiguration rejected at
//! construction time and cooperative cancellation of a running query.

use thiserror::Error;

/// Rejected automaton construction parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AutomatonError {
    #[error("edit budget {requested} exceeds the supported ceiling of {ceiling}")]
    EditBudgetTooLarge { requested: u8, ceiling: u8 },

    #[error("pattern of {len} characters exceeds the supported maximum of {max}")]
    PatternTooLong { len: usize, max: usize },
}

/// Rejected configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unknown-token idf must be positive, got {0}")]
    NonPositiveUnknownIdf(f64),

    #[error("edit budget thresholds must satisfy zero_below <= one_below (got {zero_below} and {one_below})")]
    InvalidBudgetThresholds { zero_below: usize, one_below: usize },

    #[error("{0} must be greater than zero")]
    ZeroLimit(&'static str),

    #[error("language {lang} is reserved for category labels (document {id:?})")]
    ReservedLanguage { id: Option<u32>, lang: u8 },

    #[error("invalid configuration JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors surfaced by a running query.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("query cancelled")]
    Cancelled,

    #[error(transparent)]
    Automaton(#[from] AutomatonError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, SearchError>;
