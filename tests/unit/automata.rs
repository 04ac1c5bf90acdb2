//! Automaton acceptance vectors.

use typotrie::config::EditBudgetPolicy;
use typotrie::fuzzy::{Automaton, AutomatonCursor, EditDistanceDfa, ExactAutomaton, PrefixAcceptor, TokenAutomaton};
use typotrie::{AutomatonError, Token};

fn accepts(dfa: &EditDistanceDfa, text: &str) -> bool {
    dfa.run(text).is_some()
}

#[test]
fn abc_with_one_edit() {
    let dfa = EditDistanceDfa::new("abc", 1).unwrap();
    for text in ["ab", "abd", "abcd", "bbc", "ac", "acb", "acbc"] {
        assert!(accepts(&dfa, text), "expected {text:?} to be accepted");
    }
    for text in ["cba", "abcde", "acbd"] {
        assert!(!accepts(&dfa, text), "expected {text:?} to be rejected");
    }
}

#[test]
fn abc_after_a_is_intermediate() {
    let dfa = EditDistanceDfa::new("abc", 1).unwrap();
    let mut cursor = dfa.start();
    cursor.step('a');
    assert!(!cursor.is_accepting());
    assert!(!cursor.is_rejecting());
}

#[test]
fn pattern_accepts_itself_with_no_errors() {
    for k in 0..=3 {
        let dfa = EditDistanceDfa::new("kremlin", k).unwrap();
        assert_eq!(dfa.run("kremlin"), Some(0));
    }
}

#[test]
fn prefix_wrapper_vector() {
    let wrapped = PrefixAcceptor::new(EditDistanceDfa::new("abcde", 2).unwrap());
    let mut cursor = wrapped.start();

    cursor.advance("ab");
    assert!(!cursor.is_accepting());
    assert!(!cursor.is_rejecting());
    assert_eq!(cursor.errors_made(), 2);

    cursor.step('c');
    assert!(cursor.is_accepting());
    assert_eq!(cursor.errors_made(), 2);

    cursor.step('d');
    assert!(cursor.is_accepting());
    assert_eq!(cursor.errors_made(), 1);

    cursor.step('e');
    assert_eq!(cursor.errors_made(), 0);

    cursor.advance("xyz");
    assert!(cursor.is_accepting());
    assert_eq!(cursor.errors_made(), 0);
}

#[test]
fn exact_automaton_only_matches_itself() {
    let exact = ExactAutomaton::new("york");
    assert_eq!(exact.run("york"), Some(0));
    assert_eq!(exact.run("yor"), None);
    assert_eq!(exact.run("yorks"), None);
    assert_eq!(PrefixAcceptor::new(exact).run("yorkshire"), Some(0));
}

#[test]
fn policy_picks_exact_automaton_for_short_tokens() {
    let policy = EditBudgetPolicy::default();
    let short = TokenAutomaton::for_token(&Token::from("ny"), &policy, false).unwrap();
    assert!(matches!(short, TokenAutomaton::Exact(_)));
    assert_eq!(short.max_edits(), 0);

    let long = TokenAutomaton::for_token(&Token::from("petersburg"), &policy, true).unwrap();
    assert!(matches!(long, TokenAutomaton::FuzzyPrefix(_)));
    assert_eq!(long.max_edits(), 2);
    assert!(long.run("petersbrug").is_some());
}

#[test]
fn default_policy_keeps_first_letter_exact() {
    let policy = EditBudgetPolicy::default();
    let automaton = TokenAutomaton::for_token(&Token::from("moscow"), &policy, false).unwrap();
    assert_eq!(automaton.run("moscw"), Some(1));
    assert_eq!(automaton.run("noscow"), None);
}

#[test]
fn oversized_budget_is_refused() {
    let err = EditDistanceDfa::new("anything", 9).unwrap_err();
    assert!(matches!(err, AutomatonError::EditBudgetTooLarge { requested: 9, .. }));
}
