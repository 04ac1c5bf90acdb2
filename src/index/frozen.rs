// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Read-only, path-compressed snapshot of a [`PostingTrie`].
//!
//! Chains of nodes that hold no ids and have a single child are folded into one
//! edge with a multi-character label. All nodes, edges, labels and ids sit in
//! four flat arrays, laid out breadth-first so the edges of a node are
//! contiguous.
//!
//! ```text
//! nodes:  [ first_edge | num_edges | values range ] ...
//! edges:  [ label range | target node ] ...
//! labels: flat char pool
//! values: flat id pool
//! ```

use super::cursor::{doc_frequency_in, marker_lang, TrieCursor};
use super::trie::{NodeId, PostingTrie};
use crate::scoring::idf::DocFrequency;
use crate::types::{DocId, Lang, Token, CATEGORY_LANG};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, Default)]
struct FrozenNode {
    first_edge: u32,
    num_edges: u32,
    values_start: u32,
    values_end: u32,
}

#[derive(Debug, Clone, Copy)]
struct FrozenEdge {
    label_start: u32,
    label_end: u32,
    target: u32,
}

#[derive(Debug, Clone, Default)]
pub struct FrozenTrie {
    nodes: Vec<FrozenNode>,
    edges: Vec<FrozenEdge>,
    labels: Vec<char>,
    values: Vec<DocId>,
}

impl FrozenTrie {
    pub fn freeze(trie: &PostingTrie) -> Self {
        let mut out = FrozenTrie {
            nodes: vec![FrozenNode::default()],
            ..Default::default()
        };
        let mut queue: VecDeque<(u32, NodeId)> = VecDeque::new();
        queue.push_back((0, PostingTrie::root_id()));

        while let Some((slot, source)) = queue.pop_front() {
            let values_start = out.values.len() as u32;
            out.values.extend_from_slice(trie.node_postings(source));
            let first_edge = out.edges.len() as u32;

            for &(c, child) in trie.node_children(source) {
                let label_start = out.labels.len() as u32;
                out.labels.push(c);
                let mut end = child;
                while trie.node_postings(end).is_empty() {
                    match trie.node_children(end) {
                        [(next_c, next)] => {
                            out.labels.push(*next_c);
                            end = *next;
                        }
                        _ => break,
                    }
                }
                let target = out.nodes.len() as u32;
                out.nodes.push(FrozenNode::default());
                out.edges.push(FrozenEdge {
                    label_start,
                    label_end: out.labels.len() as u32,
                    target,
                });
                queue.push_back((target, end));
            }

            out.nodes[slot as usize] = FrozenNode {
                first_edge,
                num_edges: out.edges.len() as u32 - first_edge,
                values_start,
                values_end: out.values.len() as u32,
            };
        }
        out
    }

    pub fn root(&self) -> FrozenCursor<'_> {
        FrozenCursor { trie: self, node: 0 }
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn num_postings(&self) -> usize {
        self.values.len()
    }

    pub fn languages(&self) -> Vec<Lang> {
        let root = self.root();
        (0..root.num_edges())
            .filter_map(|i| marker_lang(root.edge_label(i)[0]))
            .collect()
    }

    #[inline]
    fn edge(&self, node: u32, i: usize) -> &FrozenEdge {
        &self.edges[self.nodes[node as usize].first_edge as usize + i]
    }
}

impl From<&PostingTrie> for FrozenTrie {
    fn from(trie: &PostingTrie) -> Self {
        FrozenTrie::freeze(trie)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FrozenCursor<'a> {
    trie: &'a FrozenTrie,
    node: u32,
}

impl TrieCursor for FrozenCursor<'_> {
    #[inline]
    fn num_edges(&self) -> usize {
        self.trie.nodes[self.node as usize].num_edges as usize
    }

    #[inline]
    fn edge_label(&self, i: usize) -> &[char] {
        let edge = self.trie.edge(self.node, i);
        &self.trie.labels[edge.label_start as usize..edge.label_end as usize]
    }

    #[inline]
    fn descend(&self, i: usize) -> Self {
        FrozenCursor {
            trie: self.trie,
            node: self.trie.edge(self.node, i).target,
        }
    }

    #[inline]
    fn values(&self) -> &[DocId] {
        let node = &self.trie.nodes[self.node as usize];
        &self.trie.values[node.values_start as usize..node.values_end as usize]
    }
}

impl DocFrequency for FrozenTrie {
    fn doc_frequency(&self, token: &Token, is_prefix: bool) -> u64 {
        let langs: Vec<Lang> = self
            .languages()
            .into_iter()
            .filter(|&lang| lang != CATEGORY_LANG)
            .collect();
        doc_frequency_in(&self.root(), &langs, &token.to_chars(), is_prefix)
    }
}
