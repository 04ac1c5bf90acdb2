// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Mutable character trie mapping tokens to posting lists.
//!
//! Nodes live in one arena and refer to each other by index, so the trie has
//! no interior pointers and cloning a cursor is copying two words. Every key
//! starts with a language marker (see [`lang_marker`]); the children of the
//! root are therefore one branch per language, plus the reserved category
//! branch.
//!
//! Erasing the last id below a node unlinks the node and pushes its slot on a
//! free list. Slots are reused by later insertions, so the arena never shrinks
//! but also never accumulates garbage.

use super::cursor::{doc_frequency_in, lang_marker, marker_lang, TrieCursor};
use super::postings::PostingList;
use crate::scoring::idf::DocFrequency;
use crate::types::{DocId, Lang, Token, CATEGORY_LANG};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub type NodeId = u32;

const ROOT: NodeId = 0;

#[derive(Debug, Clone, Default)]
struct Node {
    /// Sorted by character.
    children: Vec<(char, NodeId)>,
    postings: PostingList,
}

#[derive(Debug, Clone)]
pub struct PostingTrie {
    nodes: Vec<Node>,
    free: Vec<NodeId>,
    num_postings: usize,
}

impl Default for PostingTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl PostingTrie {
    pub fn new() -> Self {
        PostingTrie {
            nodes: vec![Node::default()],
            free: Vec::new(),
            num_postings: 0,
        }
    }

    /// Build from `(lang, token, id)` triples in one pass.
    ///
    /// Triples are sorted first (in parallel with the `parallel` feature) so
    /// every posting list is filled by appends only.
    pub fn from_entries(mut entries: Vec<(Lang, Token, DocId)>) -> Self {
        #[cfg(feature = "parallel")]
        entries.par_sort_unstable();
        #[cfg(not(feature = "parallel"))]
        entries.sort_unstable();

        let mut trie = PostingTrie::new();
        for (lang, token, id) in &entries {
            trie.insert_key(&key_of(*lang, token), *id);
        }
        trie
    }

    /// Index `id` under every token in `tokens` in the `lang` branch.
    pub fn add(&mut self, id: DocId, lang: Lang, tokens: &[Token]) {
        for token in tokens {
            self.insert_key(&key_of(lang, token), id);
        }
    }

    /// Index `id` under category labels.
    pub fn add_categories(&mut self, id: DocId, categories: &[Token]) {
        self.add(id, CATEGORY_LANG, categories);
    }

    /// Remove `id` from every token in `tokens` in the `lang` branch.
    /// Tokens `id` was never indexed under are ignored.
    pub fn erase(&mut self, id: DocId, lang: Lang, tokens: &[Token]) {
        for token in tokens {
            self.remove_key(&key_of(lang, token), id);
        }
    }

    pub fn erase_categories(&mut self, id: DocId, categories: &[Token]) {
        self.erase(id, CATEGORY_LANG, categories);
    }

    /// Posting list of an exact token, if present.
    pub fn postings(&self, lang: Lang, token: &Token) -> Option<&PostingList> {
        let mut node = ROOT;
        for c in key_of(lang, token) {
            node = self.child(node, c)?;
        }
        let postings = &self.nodes[node as usize].postings;
        (!postings.is_empty()).then_some(postings)
    }

    /// Total `(token, id)` pairs stored.
    #[inline]
    pub fn num_postings(&self) -> usize {
        self.num_postings
    }

    /// Nodes currently linked into the trie, root included.
    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num_postings == 0
    }

    pub fn root(&self) -> ArenaCursor<'_> {
        ArenaCursor {
            trie: self,
            node: ROOT,
        }
    }

    /// Language branches that currently hold at least one token.
    pub fn languages(&self) -> Vec<Lang> {
        self.nodes[ROOT as usize]
            .children
            .iter()
            .filter_map(|&(c, _)| marker_lang(c))
            .collect()
    }

    /// Every stored `(lang, token, ids)` triple, in key order.
    pub fn entries(&self) -> Vec<(Lang, Token, Vec<DocId>)> {
        let mut out = Vec::new();
        let mut stack: Vec<(NodeId, Vec<char>)> = vec![(ROOT, Vec::new())];
        // Depth-first in reverse child order yields keys in ascending order.
        while let Some((node, path)) = stack.pop() {
            let n = &self.nodes[node as usize];
            if let Some((&marker, token)) = path.split_first() {
                if let (Some(lang), false) = (marker_lang(marker), n.postings.is_empty()) {
                    let token: String = token.iter().collect();
                    out.push((lang, Token::new(token), n.postings.as_slice().to_vec()));
                }
            }
            for &(c, child) in n.children.iter().rev() {
                let mut next = path.clone();
                next.push(c);
                stack.push((child, next));
            }
        }
        out
    }

    pub(crate) fn node_children(&self, node: NodeId) -> &[(char, NodeId)] {
        &self.nodes[node as usize].children
    }

    pub(crate) fn node_postings(&self, node: NodeId) -> &[DocId] {
        self.nodes[node as usize].postings.as_slice()
    }

    pub(crate) const fn root_id() -> NodeId {
        ROOT
    }

    fn child(&self, node: NodeId, c: char) -> Option<NodeId> {
        let children = &self.nodes[node as usize].children;
        children
            .binary_search_by_key(&c, |&(ch, _)| ch)
            .ok()
            .map(|i| children[i].1)
    }

    fn alloc(&mut self) -> NodeId {
        match self.free.pop() {
            Some(id) => id,
            None => {
                self.nodes.push(Node::default());
                (self.nodes.len() - 1) as NodeId
            }
        }
    }

    fn insert_key(&mut self, key: &[char], id: DocId) -> bool {
        let mut node = ROOT;
        for &c in key {
            node = match self.child(node, c) {
                Some(next) => next,
                None => {
                    let next = self.alloc();
                    let children = &mut self.nodes[node as usize].children;
                    let at = children.partition_point(|&(ch, _)| ch < c);
                    children.insert(at, (c, next));
                    next
                }
            };
        }
        let inserted = self.nodes[node as usize].postings.insert(id);
        if inserted {
            self.num_postings += 1;
        }
        inserted
    }

    fn remove_key(&mut self, key: &[char], id: DocId) -> bool {
        let mut path: Vec<NodeId> = Vec::with_capacity(key.len() + 1);
        let mut node = ROOT;
        path.push(node);
        for &c in key {
            match self.child(node, c) {
                Some(next) => node = next,
                None => return false,
            }
            path.push(node);
        }
        if !self.nodes[node as usize].postings.remove(id) {
            return false;
        }
        self.num_postings -= 1;

        // Unlink nodes that no longer lead anywhere, bottom-up.
        for depth in (1..path.len()).rev() {
            let node = path[depth];
            let n = &self.nodes[node as usize];
            if !n.postings.is_empty() || !n.children.is_empty() {
                break;
            }
            let parent = &mut self.nodes[path[depth - 1] as usize].children;
            if let Ok(at) = parent.binary_search_by_key(&key[depth - 1], |&(ch, _)| ch) {
                parent.remove(at);
            }
            self.nodes[node as usize] = Node::default();
            self.free.push(node);
        }
        true
    }
}

fn key_of(lang: Lang, token: &Token) -> Vec<char> {
    let mut key = Vec::with_capacity(token.as_str().len() + 1);
    key.push(lang_marker(lang));
    key.extend(token.chars());
    key
}

/// Cursor over a [`PostingTrie`]. Every edge is a single character.
#[derive(Debug, Clone, Copy)]
pub struct ArenaCursor<'a> {
    trie: &'a PostingTrie,
    node: NodeId,
}

impl TrieCursor for ArenaCursor<'_> {
    #[inline]
    fn num_edges(&self) -> usize {
        self.trie.nodes[self.node as usize].children.len()
    }

    #[inline]
    fn edge_label(&self, i: usize) -> &[char] {
        std::slice::from_ref(&self.trie.nodes[self.node as usize].children[i].0)
    }

    #[inline]
    fn descend(&self, i: usize) -> Self {
        ArenaCursor {
            trie: self.trie,
            node: self.trie.nodes[self.node as usize].children[i].1,
        }
    }

    #[inline]
    fn values(&self) -> &[DocId] {
        self.trie.nodes[self.node as usize].postings.as_slice()
    }
}

impl DocFrequency for PostingTrie {
    fn doc_frequency(&self, token: &Token, is_prefix: bool) -> u64 {
        let langs: Vec<Lang> = self
            .languages()
            .into_iter()
            .filter(|&lang| lang != CATEGORY_LANG)
            .collect();
        doc_frequency_in(&self.root(), &langs, &token.to_chars(), is_prefix)
    }
}
