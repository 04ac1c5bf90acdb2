// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Share one index between a writer and many concurrent readers.
//!
//! Readers take a snapshot (an `Arc` clone under a read lock held for a few
//! nanoseconds) and query it for as long as they like. The writer keeps its
//! own [`PostingTrie`], applies updates to it, and publishes a freshly frozen
//! copy by swapping the `Arc`. A query therefore always sees either the old or
//! the new index in full, never a mix.

use super::frozen::FrozenTrie;
use super::trie::PostingTrie;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Default)]
pub struct SharedIndex {
    current: RwLock<Arc<FrozenTrie>>,
}

impl SharedIndex {
    pub fn new(trie: &PostingTrie) -> Self {
        SharedIndex {
            current: RwLock::new(Arc::new(FrozenTrie::freeze(trie))),
        }
    }

    /// The index as of the last publish.
    pub fn snapshot(&self) -> Arc<FrozenTrie> {
        Arc::clone(&self.current.read())
    }

    /// Freeze `trie` and make it visible to subsequent snapshots.
    pub fn publish(&self, trie: &PostingTrie) {
        // Freeze outside the lock; readers are only blocked for the swap.
        let frozen = Arc::new(FrozenTrie::freeze(trie));
        debug!(
            nodes = frozen.num_nodes(),
            postings = frozen.num_postings(),
            "publishing index snapshot"
        );
        *self.current.write() = frozen;
    }
}
