// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! How well does a query line up with a document name?
//!
//! The query tokens are slid along the name tokens. At each shift every
//! aligned pair is matched with the query token's automaton; the best shift
//! decides a **grade** for the whole name:
//!
//! | Grade        | Meaning                                                        |
//! |--------------|----------------------------------------------------------------|
//! | `FullMatch`  | same number of tokens, all matched from the start              |
//! | `FullPrefix` | all query tokens matched from the start, name continues        |
//! | `FirstMatch` | name and query start together, but not everything matched      |
//! | `Prefix`     | like `FullPrefix`, but the last word only matched as a prefix  |
//! | `Substring`  | matched somewhere inside the name                              |
//! | `Zero`       | nothing matched                                                |
//!
//! Grades are totally ordered; between shifts (and between name variants) the
//! comparison also looks at how many query characters were matched, so a long
//! partial match beats a short full one. See [`NameScores::update_if_better`].

use crate::config::{EditBudgetPolicy, MATCHED_LENGTH_TOLERANCE_DIVISOR};
use crate::contracts::check_errors_within_budget;
use crate::error::AutomatonError;
use crate::fuzzy::automaton::{Automaton, TokenAutomaton};
use crate::types::Token;
use std::fmt;
use std::ops::Add;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NameScore {
    #[default]
    Zero,
    Substring,
    Prefix,
    FirstMatch,
    FullPrefix,
    FullMatch,
}

impl fmt::Display for NameScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NameScore::Zero => "zero",
            NameScore::Substring => "substring",
            NameScore::Prefix => "prefix",
            NameScore::FirstMatch => "first-match",
            NameScore::FullPrefix => "full-prefix",
            NameScore::FullMatch => "full-match",
        };
        f.write_str(name)
    }
}

/// Count of edits, or "no match at all".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EditTally(Option<u32>);

impl EditTally {
    pub const NONE: EditTally = EditTally(None);
    pub const ZERO: EditTally = EditTally(Some(0));

    pub fn new(edits: u32) -> Self {
        EditTally(Some(edits))
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.0.is_some()
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == Some(0)
    }

    #[inline]
    pub fn count(self) -> Option<u32> {
        self.0
    }

    /// Valid, and either `other` is not or this has fewer edits.
    pub fn is_better_than(self, other: EditTally) -> bool {
        match (self.0, other.0) {
            (Some(a), Some(b)) => a < b,
            (Some(_), None) => true,
            (None, _) => false,
        }
    }

    pub fn min(self, other: EditTally) -> EditTally {
        if other.is_better_than(self) {
            other
        } else {
            self
        }
    }
}

impl Add for EditTally {
    type Output = EditTally;

    /// Invalid if either side is.
    fn add(self, rhs: EditTally) -> EditTally {
        match (self.0, rhs.0) {
            (Some(a), Some(b)) => EditTally(Some(a + b)),
            _ => EditTally::NONE,
        }
    }
}

impl fmt::Display for EditTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(n) => write!(f, "{n}"),
            None => f.write_str("-"),
        }
    }
}

/// Grades an alternate name must lead by before it displaces a primary one.
pub const ALTERNATE_GRADE_MARGIN: i8 = 1;

/// Result of aligning a query with one or more names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NameScores {
    pub name_score: NameScore,
    pub errors: EditTally,
    pub is_alternate: bool,
    /// Characters of the query covered by matched tokens.
    pub matched_length: usize,
}

impl NameScores {
    /// Replace `self` with `rhs` when `rhs` is the better alignment.
    ///
    /// A clearly longer match always wins. Otherwise, when the lengths are
    /// similar, the better grade wins, except that a primary name is preferred
    /// over an alternate one graded at most [`ALTERNATE_GRADE_MARGIN`] above
    /// it. At equal grade the edit count is the smaller of the two.
    pub fn update_if_better(&mut self, rhs: &NameScores) {
        let similar = self.matched_length - self.matched_length / MATCHED_LENGTH_TOLERANCE_DIVISOR
            <= rhs.matched_length;
        let gap = rhs.name_score as i8 - self.name_score as i8;
        let same_grade = gap == 0;
        let grade_wins = match (self.is_alternate, rhs.is_alternate) {
            (true, false) => rhs.name_score != NameScore::Zero && gap >= -ALTERNATE_GRADE_MARGIN,
            (false, true) => gap > ALTERNATE_GRADE_MARGIN,
            _ => gap > 0,
        };

        let replace = rhs.matched_length > self.matched_length || (similar && grade_wins);

        if replace {
            let errors = if same_grade && self.is_alternate == rhs.is_alternate {
                self.errors.min(rhs.errors)
            } else {
                rhs.errors
            };
            *self = NameScores { errors, ..*rhs };
        } else if same_grade && self.is_alternate == rhs.is_alternate {
            self.errors = self.errors.min(rhs.errors);
        }
    }
}

/// The query tokens to align, with the last one possibly a prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuerySlice {
    pub tokens: Vec<Token>,
    pub last_is_prefix: bool,
}

impl QuerySlice {
    pub fn new(tokens: Vec<Token>, last_is_prefix: bool) -> Self {
        QuerySlice {
            tokens,
            last_is_prefix,
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

struct TokenMatcher {
    full: TokenAutomaton,
    prefix: Option<TokenAutomaton>,
    len: usize,
}

/// Scores names against one query slice.
///
/// Automata are compiled once at construction, so scoring many names against
/// the same query only pays for stepping.
pub struct AlignmentScorer {
    matchers: Vec<TokenMatcher>,
}

impl AlignmentScorer {
    pub fn new(slice: &QuerySlice, policy: &EditBudgetPolicy) -> Result<Self, AutomatonError> {
        let last = slice.tokens.len().saturating_sub(1);
        let mut matchers = Vec::with_capacity(slice.tokens.len());
        for (i, token) in slice.tokens.iter().enumerate() {
            let prefix = if slice.last_is_prefix && i == last {
                Some(TokenAutomaton::for_token(token, policy, true)?)
            } else {
                None
            };
            matchers.push(TokenMatcher {
                full: TokenAutomaton::for_token(token, policy, false)?,
                prefix,
                len: token.char_len(),
            });
        }
        Ok(AlignmentScorer { matchers })
    }

    /// Best alignment of the query against a single name.
    pub fn score(&self, name: &[Token], is_alternate: bool) -> NameScores {
        let mut best = NameScores {
            is_alternate,
            ..NameScores::default()
        };
        let n = name.len() as isize;
        let m = self.matchers.len() as isize;
        if n == 0 || m == 0 {
            return best;
        }
        for shift in (1 - m..n).rev() {
            best.update_if_better(&self.score_shift(name, shift, is_alternate));
        }
        best
    }

    /// Best alignment across several name variants, each `(tokens, is_alternate)`.
    pub fn score_names<'n, I>(&self, names: I) -> NameScores
    where
        I: IntoIterator<Item = (&'n [Token], bool)>,
    {
        let mut best = NameScores::default();
        for (tokens, is_alternate) in names {
            best.update_if_better(&self.score(tokens, is_alternate));
        }
        best
    }

    /// Query token `s` is aligned with name token `s + shift`.
    fn score_shift(&self, name: &[Token], shift: isize, is_alternate: bool) -> NameScores {
        let last = self.matchers.len() - 1;
        let mut errors = EditTally::ZERO;
        let mut matched_length = 0;
        let mut any_failed = false;
        let mut unaligned = false;
        let mut prefix_only = false;
        let mut demoted = false;
        let mut first_matched = false;

        for (s, matcher) in self.matchers.iter().enumerate() {
            let t = s as isize + shift;
            if t < 0 || t >= name.len() as isize {
                unaligned = true;
                continue;
            }
            let name_token = name[t as usize].as_str();
            let mut tally = run(&matcher.full, name_token);
            if s == last && !tally.is_zero() {
                if let Some(prefix) = &matcher.prefix {
                    let prefix_tally = run(prefix, name_token);
                    if prefix_tally.is_better_than(tally) {
                        if tally.is_valid() {
                            demoted = true;
                        } else {
                            prefix_only = true;
                        }
                        tally = prefix_tally;
                    }
                }
            }
            if tally.is_valid() {
                errors = errors + tally;
                matched_length += matcher.len;
                if t == 0 && s == 0 {
                    first_matched = true;
                }
            } else {
                any_failed = true;
            }
        }

        let name_score = if matched_length == 0 {
            NameScore::Zero
        } else if shift == 0 && !any_failed && !unaligned {
            if prefix_only {
                NameScore::Prefix
            } else if self.matchers.len() == name.len() && !demoted {
                NameScore::FullMatch
            } else {
                NameScore::FullPrefix
            }
        } else if first_matched {
            NameScore::FirstMatch
        } else {
            NameScore::Substring
        };

        NameScores {
            name_score,
            errors: if name_score == NameScore::Zero { EditTally::NONE } else { errors },
            is_alternate,
            matched_length,
        }
    }
}

fn run(automaton: &TokenAutomaton, text: &str) -> EditTally {
    match automaton.run(text) {
        Some(errors) => {
            // INVARIANT: ERRORS_WITHIN_BUDGET
            check_errors_within_budget(errors, automaton.max_edits());
            EditTally::new(u32::from(errors))
        }
        None => EditTally::NONE,
    }
}

/// Score one name against a query slice with the default edit policy.
pub fn score_name(name: &[Token], slice: &QuerySlice) -> Result<NameScores, AutomatonError> {
    Ok(AlignmentScorer::new(slice, &EditBudgetPolicy::default())?.score(name, false))
}
