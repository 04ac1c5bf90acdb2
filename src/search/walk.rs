// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Walk an automaton and a trie in lockstep.
//!
//! Starting from a trie node, every edge is tried by stepping a copy of the
//! automaton cursor through the edge label. Subtrees whose cursor rejects are
//! never entered, which is what keeps fuzzy lookup proportional to the part of
//! the vocabulary near the pattern instead of the whole vocabulary.

use crate::fuzzy::automaton::{Automaton, AutomatonCursor};
use crate::index::cursor::TrieCursor;
use crate::types::DocId;
use std::collections::VecDeque;
use tracing::trace;

/// Emit every id below `root` whose key the automaton accepts.
///
/// `consumed` are characters already on the path to `root` that belong to the
/// token (a compressed edge may carry them past a language marker); they are
/// fed to the automaton before the walk starts. `emit` receives each id along
/// with whether the match needed no edits. An id stored under several accepted
/// keys is emitted once per key. Returns the number of trie nodes visited.
pub fn match_in_trie<A, C, F>(root: &C, consumed: &[char], automaton: &A, mut emit: F) -> usize
where
    A: Automaton,
    C: TrieCursor,
    F: FnMut(DocId, bool),
{
    let mut start = automaton.start();
    start.advance_chars(consumed);
    if start.is_rejecting() {
        return 0;
    }

    let mut queue: VecDeque<(C, A::Cursor<'_>)> = VecDeque::new();
    queue.push_back((root.clone(), start));
    let mut visited = 0;

    while let Some((node, state)) = queue.pop_front() {
        visited += 1;
        if state.is_accepting() {
            let exact = state.errors_made() == 0;
            for &id in node.values() {
                emit(id, exact);
            }
        }
        for i in 0..node.num_edges() {
            let mut next = state.clone();
            next.advance_chars(node.edge_label(i));
            if !next.is_rejecting() {
                queue.push_back((node.descend(i), next));
            }
        }
    }

    trace!(visited, "trie walk finished");
    visited
}
