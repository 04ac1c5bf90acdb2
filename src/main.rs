// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use std::collections::HashMap;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use typotrie::config::{EditBudgetPolicy, SearchConfig};
use typotrie::error::Result;
use typotrie::fuzzy::EditDistanceDfa;
use typotrie::scoring::{AlignmentScorer, QuerySlice};
use typotrie::search::{load_documents, CancelFlag, SearchEngine};
use typotrie::util::{DefaultNormalizer, Lexicon, Normalizer};

mod cli;
use cli::{display, Cli, Commands};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Query {
            docs,
            config,
            lexicon,
            limit,
            text,
        } => run_query(&docs, config.as_deref(), lexicon.as_deref(), limit, &text),
        Commands::Explain { name, query } => run_explain(&name, &query),
        Commands::Automaton { pattern, max_edits } => run_automaton(&pattern, max_edits),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run_query(
    docs_path: &str,
    config_path: Option<&str>,
    lexicon_path: Option<&str>,
    limit: Option<usize>,
    text: &str,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => SearchConfig::from_path(path)?,
        None => SearchConfig::default(),
    };
    if let Some(limit) = limit {
        config.result_limit = limit;
    }
    let lexicon = match lexicon_path {
        Some(path) => Lexicon::from_path(path)?,
        None => Lexicon::new(),
    };
    let docs = load_documents(docs_path)?;

    let mut engine = SearchEngine::new(config)?.with_lexicon(Arc::new(lexicon));
    engine.add_documents(&docs);
    let hits = engine.search_text(text, &CancelFlag::new())?;

    let names: HashMap<u32, &str> = docs.iter().map(|d| (d.id, d.name.as_str())).collect();
    display::print_hits(text, &hits, |id| names.get(&id).copied().unwrap_or("?"));
    Ok(())
}

fn run_explain(name: &str, query: &str) -> Result<()> {
    let normalizer = DefaultNormalizer;
    let tokens = normalizer.tokenize(query);
    let last_is_prefix = !tokens.is_empty() && !normalizer.ends_with_separator(query);
    let slice = QuerySlice::new(tokens, last_is_prefix);
    let scorer = AlignmentScorer::new(&slice, &EditBudgetPolicy::default())?;
    let scores = scorer.score(&normalizer.tokenize(name), false);
    display::print_explain(name, query, &scores);
    Ok(())
}

fn run_automaton(pattern: &str, max_edits: Option<u8>) -> Result<()> {
    let policy = EditBudgetPolicy::default();
    let max_edits = max_edits.unwrap_or_else(|| policy.max_edits_for(pattern.chars().count()));
    let dfa = EditDistanceDfa::builder(pattern)
        .max_edits(max_edits)
        .exact_prefix(policy.exact_prefix_len)
        .transpositions(policy.transpositions)
        .confusables(policy.confusables.clone())
        .build()?;
    display::print_automaton(pattern, max_edits, dfa.num_states(), dfa.num_symbols());
    Ok(())
}
