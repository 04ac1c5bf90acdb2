// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Read-only navigation over a posting trie.
//!
//! Edge labels are sequences of characters so that path-compressed tries can
//! expose a whole run of single-child nodes as one edge. Cursors are cheap to
//! clone and never mutate the trie underneath them.
//!
//! The helpers below are written once against the trait and serve both the
//! mutable [`PostingTrie`](super::trie::PostingTrie) and the
//! [`FrozenTrie`](super::frozen::FrozenTrie).

use crate::types::{DocId, Lang};
use std::collections::BTreeSet;

pub trait TrieCursor: Clone {
    fn num_edges(&self) -> usize;

    /// Label of edge `i`; never empty.
    fn edge_label(&self, i: usize) -> &[char];

    /// Cursor at the node edge `i` leads to.
    fn descend(&self, i: usize) -> Self;

    /// Ids stored at this node.
    fn values(&self) -> &[DocId];
}

/// Private-use code points that open each language branch.
const LANG_MARKER_BASE: u32 = 0xF_0000;

/// First character of every key stored under `lang`.
pub fn lang_marker(lang: Lang) -> char {
    // Plane 15 is entirely private use, so every code in range is a valid char.
    char::from_u32(LANG_MARKER_BASE + u32::from(lang)).unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Inverse of [`lang_marker`].
pub fn marker_lang(c: char) -> Option<Lang> {
    let code = u32::from(c);
    code.checked_sub(LANG_MARKER_BASE)
        .and_then(|offset| Lang::try_from(offset).ok())
}

/// Where a path ended up inside a trie.
#[derive(Debug, Clone)]
pub enum Seek<C> {
    /// The path ends exactly on a node.
    Node(C),
    /// The path ends partway along an edge; the cursor is the node below it.
    InsideEdge(C),
}

/// Follow `path` from `cursor`.
pub fn seek<C: TrieCursor>(cursor: &C, path: &[char]) -> Option<Seek<C>> {
    let mut node = cursor.clone();
    let mut rest = path;
    while !rest.is_empty() {
        let mut next = None;
        for i in 0..node.num_edges() {
            let label = node.edge_label(i);
            if label[0] != rest[0] {
                continue;
            }
            let shared = label.iter().zip(rest).take_while(|(a, b)| a == b).count();
            if shared == rest.len() {
                let below = node.descend(i);
                return Some(if shared == label.len() {
                    Seek::Node(below)
                } else {
                    Seek::InsideEdge(below)
                });
            }
            if shared == label.len() {
                next = Some((node.descend(i), shared));
            }
            break;
        }
        let (below, consumed) = next?;
        node = below;
        rest = &rest[consumed..];
    }
    Some(Seek::Node(node))
}

/// Every id stored in the subtree below `cursor`, including the cursor itself.
pub fn collect_subtree<C: TrieCursor>(cursor: &C, into: &mut BTreeSet<DocId>) {
    let mut stack = vec![cursor.clone()];
    while let Some(node) = stack.pop() {
        into.extend(node.values().iter().copied());
        for i in 0..node.num_edges() {
            stack.push(node.descend(i));
        }
    }
}

/// Visit the root of every language branch listed in `langs`.
///
/// A path-compressed trie may fold the first characters of a token into the
/// marker edge; those are passed along as `consumed`.
pub fn for_each_lang_root<C, F>(root: &C, langs: &[Lang], mut visit: F)
where
    C: TrieCursor,
    F: FnMut(Lang, C, &[char]),
{
    for i in 0..root.num_edges() {
        let label = root.edge_label(i);
        let Some(lang) = marker_lang(label[0]) else {
            continue;
        };
        if langs.contains(&lang) {
            visit(lang, root.descend(i), &label[1..]);
        }
    }
}

/// Distinct ids holding `token` (or, with `is_prefix`, any extension of it)
/// across the given language branches.
pub fn doc_frequency_in<C: TrieCursor>(root: &C, langs: &[Lang], token: &[char], is_prefix: bool) -> u64 {
    let mut ids = BTreeSet::new();
    for &lang in langs {
        let mut path = Vec::with_capacity(token.len() + 1);
        path.push(lang_marker(lang));
        path.extend_from_slice(token);
        match seek(root, &path) {
            Some(Seek::Node(node)) if !is_prefix => ids.extend(node.values().iter().copied()),
            Some(Seek::Node(node) | Seek::InsideEdge(node)) if is_prefix => collect_subtree(&node, &mut ids),
            _ => {}
        }
    }
    ids.len() as u64
}
