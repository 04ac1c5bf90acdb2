// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Classes of characters that substitute for each other at no cost.
//!
//! Typical use is folding spellings that differ only in a letter nobody hears,
//! e.g. `{c, k}` or `{s, z}`. Classes are small; membership is a linear scan.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct ConfusableClasses {
    classes: Vec<Vec<char>>,
}

impl ConfusableClasses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class made of the characters of `members`. Classes with fewer
    /// than two distinct characters carry no information and are dropped.
    pub fn with_class(mut self, members: &str) -> Self {
        self.push_class(members);
        self
    }

    fn push_class(&mut self, members: &str) {
        let mut class: Vec<char> = members.chars().collect();
        class.sort_unstable();
        class.dedup();
        if class.len() > 1 {
            self.classes.push(class);
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// True when `a` and `b` are distinct members of a common class.
    pub fn confusable(&self, a: char, b: char) -> bool {
        a != b
            && self
                .classes
                .iter()
                .any(|class| class.binary_search(&a).is_ok() && class.binary_search(&b).is_ok())
    }

    /// Every character confusable with `c`, excluding `c` itself.
    pub fn partners(&self, c: char) -> impl Iterator<Item = char> + '_ {
        self.classes
            .iter()
            .filter(move |class| class.binary_search(&c).is_ok())
            .flat_map(|class| class.iter().copied())
            .filter(move |&other| other != c)
    }
}

impl From<Vec<String>> for ConfusableClasses {
    fn from(raw: Vec<String>) -> Self {
        let mut classes = ConfusableClasses::new();
        for members in &raw {
            classes.push_class(members);
        }
        classes
    }
}

impl From<ConfusableClasses> for Vec<String> {
    fn from(classes: ConfusableClasses) -> Self {
        classes
            .classes
            .into_iter()
            .map(|class| class.into_iter().collect())
            .collect()
    }
}
