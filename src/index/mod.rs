// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index structures: tokens to posting lists.
//!
//! Two tries behind one cursor trait:
//! - **PostingTrie**: mutable arena trie, one character per edge
//! - **FrozenTrie**: read-only path-compressed snapshot of it
//!
//! Both expose the same [`TrieCursor`] walk, so retrieval runs unchanged
//! against either.

pub mod cursor;
pub mod frozen;
pub mod postings;
#[cfg(feature = "parallel")]
pub mod shared;
pub mod trie;

pub use cursor::{lang_marker, marker_lang, TrieCursor};
pub use frozen::{FrozenCursor, FrozenTrie};
pub use postings::PostingList;
#[cfg(feature = "parallel")]
pub use shared::SharedIndex;
pub use trie::{ArenaCursor, PostingTrie};
