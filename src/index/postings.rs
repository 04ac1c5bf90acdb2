// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sorted, duplicate-free lists of document ids.

use crate::contracts::check_postings_sorted_unique;
use crate::types::DocId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostingList {
    ids: Vec<DocId>,
}

impl PostingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `id`, keeping order. Returns false if it was already present.
    pub fn insert(&mut self, id: DocId) -> bool {
        // Ids usually arrive in increasing order during bulk loads.
        if self.ids.last().map_or(true, |&last| last < id) {
            self.ids.push(id);
            return true;
        }
        match self.ids.binary_search(&id) {
            Ok(_) => false,
            Err(at) => {
                self.ids.insert(at, id);
                // INVARIANT: POSTINGS_SORTED_UNIQUE
                check_postings_sorted_unique(&self.ids);
                true
            }
        }
    }

    /// Remove `id`. Returns false if it was not present.
    pub fn remove(&mut self, id: DocId) -> bool {
        match self.ids.binary_search(&id) {
            Ok(at) => {
                self.ids.remove(at);
                true
            }
            Err(_) => false,
        }
    }

    #[inline]
    pub fn contains(&self, id: DocId) -> bool {
        self.ids.binary_search(&id).is_ok()
    }

    #[inline]
    pub fn as_slice(&self) -> &[DocId] {
        &self.ids
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<DocId> for PostingList {
    fn from_iter<I: IntoIterator<Item = DocId>>(iter: I) -> Self {
        let mut ids: Vec<DocId> = iter.into_iter().collect();
        ids.sort_unstable();
        ids.dedup();
        PostingList { ids }
    }
}
