//! Name alignment grades through the public scorer.

use super::common::tokens;
use typotrie::config::EditBudgetPolicy;
use typotrie::scoring::{AlignmentScorer, EditTally, NameScore, QuerySlice};

fn scorer(query: &str) -> AlignmentScorer {
    let slice = QuerySlice::new(tokens(query), !query.ends_with(' '));
    AlignmentScorer::new(&slice, &EditBudgetPolicy::default()).unwrap()
}

#[test]
fn reference_grades() {
    let cases = [
        ("New York", "New York ", NameScore::FullMatch, 0, 7),
        ("New York", "York ", NameScore::Substring, 0, 4),
        ("Moscow", "Mosc", NameScore::Prefix, 0, 4),
        ("Moscow", "Moscw ", NameScore::FullMatch, 1, 5),
    ];
    for (name, query, grade, edits, length) in cases {
        let s = scorer(query).score(&tokens(name), false);
        assert_eq!(s.name_score, grade, "{name} / {query}");
        assert_eq!(s.errors, EditTally::new(edits), "{name} / {query}");
        assert_eq!(s.matched_length, length, "{name} / {query}");
    }
}

#[test]
fn grades_are_ordered() {
    assert!(NameScore::FullMatch > NameScore::FullPrefix);
    assert!(NameScore::FullPrefix > NameScore::FirstMatch);
    assert!(NameScore::FirstMatch > NameScore::Prefix);
    assert!(NameScore::Prefix > NameScore::Substring);
    assert!(NameScore::Substring > NameScore::Zero);
}

#[test]
fn best_variant_wins() {
    let scorer = scorer("leningrad ");
    let primary = tokens("Saint Petersburg");
    let alternate = tokens("Leningrad");
    let s = scorer.score_names([(primary.as_slice(), false), (alternate.as_slice(), true)]);
    assert_eq!(s.name_score, NameScore::FullMatch);
    assert!(s.is_alternate);
    assert_eq!(s.matched_length, 9);
}

#[test]
fn primary_preferred_when_variants_tie() {
    let scorer = scorer("moscow ");
    let name = tokens("Moscow");
    let s = scorer.score_names([(name.as_slice(), true), (name.as_slice(), false)]);
    assert_eq!(s.name_score, NameScore::FullMatch);
    assert!(!s.is_alternate);
}

#[test]
fn scoring_is_pure() {
    let scorer = scorer("new yo");
    let name = tokens("New York");
    assert_eq!(scorer.score(&name, false), scorer.score(&name, false));
}
