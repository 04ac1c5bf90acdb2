//! Cosine similarity and IDF weighting.

use std::cell::Cell;
use typotrie::index::PostingTrie;
use typotrie::scoring::{similarity, DocVec, FrequencyFn, IdfCache, QueryVec};
use typotrie::{ConfigError, Token};

fn doc(weights: &[(&str, f64)]) -> DocVec {
    let mut builder = DocVec::builder();
    for (token, w) in weights {
        builder.add_weighted(Token::from(*token), *w);
    }
    builder.build()
}

fn query(weights: &[(&str, f64)]) -> QueryVec {
    let mut builder = QueryVec::builder();
    for (token, w) in weights {
        builder.add_weighted(Token::from(*token), *w);
    }
    builder.build()
}

#[test]
fn empty_against_empty_is_one() {
    let mut idfs = IdfCache::new(FrequencyFn(|_: &Token, _: bool| 1), 1.0).unwrap();
    assert_eq!(similarity(&QueryVec::default(), &DocVec::default(), &mut idfs), 1.0);
}

#[test]
fn empty_against_non_empty_is_zero() {
    let mut idfs = IdfCache::new(FrequencyFn(|_: &Token, _: bool| 1), 1.0).unwrap();
    assert_eq!(similarity(&QueryVec::default(), &doc(&[("a", 1.0)]), &mut idfs), 0.0);
    assert_eq!(similarity(&query(&[("a", 1.0)]), &DocVec::default(), &mut idfs), 0.0);
}

#[test]
fn scaling_both_vectors_keeps_similarity() {
    let mut idfs = IdfCache::new(FrequencyFn(|t: &Token, _: bool| t.char_len() as u64), 1.0).unwrap();
    let q = [("red", 1.0), ("square", 2.0)];
    let d = [("red", 3.0), ("square", 1.0), ("moscow", 1.0)];
    let base = similarity(&query(&q), &doc(&d), &mut idfs);

    let scale = |v: &[(&'static str, f64)], k: f64| -> Vec<(&'static str, f64)> {
        v.iter().map(|&(t, w)| (t, w * k)).collect()
    };
    let scaled = similarity(&query(&scale(&q, 4.0)), &doc(&scale(&d, 4.0)), &mut idfs);
    assert!((base - scaled).abs() < 1e-12);
    assert!(base > 0.0 && base < 1.0);
}

#[test]
fn idf_is_memoized_per_token_and_kind() {
    let calls = Cell::new(0);
    let delegate = FrequencyFn(|_: &Token, _: bool| {
        calls.set(calls.get() + 1);
        4
    });
    let mut idfs = IdfCache::new(delegate, 1.0).unwrap();
    let moscow = Token::from("moscow");

    assert_eq!(idfs.get(&moscow, false), 0.25);
    assert_eq!(idfs.get(&moscow, false), 0.25);
    assert_eq!(calls.get(), 1);

    idfs.get(&moscow, true);
    assert_eq!(calls.get(), 2);
    assert_eq!(idfs.len(), 2);
}

#[test]
fn unknown_tokens_use_the_fallback() {
    let mut idfs = IdfCache::new(FrequencyFn(|_: &Token, _: bool| 0), 3.5).unwrap();
    assert_eq!(idfs.get(&Token::from("nowhere"), false), 3.5);
}

#[test]
fn non_positive_fallback_is_rejected() {
    for bad in [0.0, -1.0, f64::NAN] {
        let result = IdfCache::new(FrequencyFn(|_: &Token, _: bool| 1), bad);
        assert!(matches!(result, Err(ConfigError::NonPositiveUnknownIdf(_))));
    }
}

#[test]
fn trie_serves_as_frequency_source() {
    let mut trie = PostingTrie::new();
    trie.add(1, 0, &[Token::from("moscow"), Token::from("hotel")]);
    trie.add(2, 0, &[Token::from("moscow")]);
    let mut idfs = IdfCache::new(&trie, 1.0).unwrap();
    assert_eq!(idfs.get(&Token::from("moscow"), false), 0.5);
    assert_eq!(idfs.get(&Token::from("hotel"), false), 1.0);
    assert_eq!(idfs.get(&Token::from("mo"), true), 0.5);
}
