// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the typotrie command-line interface.
//!
//! Three subcommands: `query` to search a JSON document file, `explain` to
//! see how one name aligns with a query, and `automaton` to inspect the
//! compiled edit-distance automaton for a pattern.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "typotrie",
    about = "Typo-tolerant token search over a posting trie",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a JSON document file
    Query {
        /// JSON array of documents: [{ "id", "name", "alt_names"?, "rank"?, "categories"? }]
        #[arg(short, long)]
        docs: String,

        /// JSON search configuration (defaults apply to missing fields)
        #[arg(short, long)]
        config: Option<String>,

        /// JSON lexicon: { "synonyms": {..}, "stop_words": [..] }
        #[arg(long)]
        lexicon: Option<String>,

        /// Maximum number of results to return
        #[arg(short, long)]
        limit: Option<usize>,

        /// Search query; a trailing space ends the last word
        text: String,
    },

    /// Show how a query aligns with a single name
    Explain {
        /// Document name
        name: String,

        /// Search query
        query: String,
    },

    /// Compile the automaton for a pattern and print its size
    Automaton {
        pattern: String,

        /// Edit budget; defaults to the length-based policy
        #[arg(short = 'k', long)]
        max_edits: Option<u8>,
    },
}
