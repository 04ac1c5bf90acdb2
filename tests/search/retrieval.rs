//! Retrieval: automata over the trie, intersected per token.

use super::common::{never_cancelled, query};
use typotrie::config::EditBudgetPolicy;
use typotrie::index::{FrozenTrie, PostingTrie};
use typotrie::search::{retrieve, RequestBuilder};
use typotrie::{Pattern, QueryTokens, Token};

fn gazetteer() -> PostingTrie {
    let mut trie = PostingTrie::new();
    trie.add(1, 0, &[Token::from("hotel"), Token::from("moscow")]);
    trie.add(2, 0, &[Token::from("moscow"), Token::from("kremlin")]);
    trie.add(3, 0, &[Token::from("moskva"), Token::from("river")]);
    trie.add(4, 1, &[Token::from("moskau")]);
    trie.add(5, 0, &[Token::from("grand"), Token::from("palace")]);
    trie.add_categories(5, &[Token::from("hotel")]);
    trie
}

fn run(trie: &PostingTrie, query: &QueryTokens, langs: &[u8]) -> Vec<(u32, bool)> {
    let policy = EditBudgetPolicy::default();
    let request = RequestBuilder::new(&policy)
        .langs(langs)
        .match_categories(true)
        .build(query)
        .unwrap();
    retrieve(&trie.root(), &request, &never_cancelled()).unwrap()
}

#[test]
fn tokens_are_intersected() {
    let trie = gazetteer();
    assert_eq!(run(&trie, &query("moscow kremlin "), &[0]), vec![(2, true)]);
    assert_eq!(run(&trie, &query("moscow "), &[0]), vec![(1, true), (2, true)]);
}

#[test]
fn exactness_requires_every_token_exact() {
    let trie = gazetteer();
    assert_eq!(run(&trie, &query("moscw kremlin "), &[0]), vec![(2, false)]);
}

#[test]
fn prefix_and_typo_combine() {
    let trie = gazetteer();
    // "mosc" is one substitution away from "mosk".
    assert_eq!(
        run(&trie, &query("mosk"), &[0]),
        vec![(1, false), (2, false), (3, true)]
    );
    assert_eq!(
        run(&trie, &query("mosk"), &[0, 1]),
        vec![(1, false), (2, false), (3, true), (4, true)]
    );
}

#[test]
fn missing_language_yields_nothing() {
    assert!(run(&gazetteer(), &query("moscow "), &[9]).is_empty());
}

#[test]
fn category_hits_count_as_exact() {
    let trie = gazetteer();
    assert_eq!(run(&trie, &query("hotel "), &[0]), vec![(1, true), (5, true)]);
}

#[test]
fn synonyms_widen_a_token() {
    let trie = gazetteer();
    let q = QueryTokens::new(
        vec![Pattern::new("msk").with_synonyms(["moscow", "moskva"])],
        false,
    );
    assert_eq!(run(&trie, &q, &[0]), vec![(1, true), (2, true), (3, true)]);
}

#[test]
fn frozen_snapshot_retrieves_the_same() {
    let trie = gazetteer();
    let frozen = FrozenTrie::freeze(&trie);
    let policy = EditBudgetPolicy::default();
    for text in ["moscw ", "mosk", "hotel ", "moscow kremlin ", "grand pal"] {
        let request = RequestBuilder::new(&policy)
            .langs(&[0, 1])
            .match_categories(true)
            .build(&query(text))
            .unwrap();
        assert_eq!(
            retrieve(&trie.root(), &request, &never_cancelled()).unwrap(),
            retrieve(&frozen.root(), &request, &never_cancelled()).unwrap(),
            "{text}"
        );
    }
}
