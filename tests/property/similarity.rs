//! Algebraic properties of the cosine similarity.

use proptest::prelude::*;
use typotrie::scoring::{similarity, DocVec, FrequencyFn, IdfCache, QueryVec};
use typotrie::Token;

type Bag = Vec<(String, f64)>;

fn bag_strategy() -> impl Strategy<Value = Bag> {
    prop::collection::vec(
        (prop::string::string_regex("[a-e]{1,3}").unwrap(), 0.1f64..5.0),
        0..8,
    )
}

fn doc(bag: &Bag, scale: f64) -> DocVec {
    let mut builder = DocVec::builder();
    for (token, w) in bag {
        builder.add_weighted(Token::from(token.as_str()), w * scale);
    }
    builder.build()
}

fn query(bag: &Bag, scale: f64, prefix: Option<&str>) -> QueryVec {
    let mut builder = QueryVec::builder();
    for (token, w) in bag {
        builder.add_weighted(Token::from(token.as_str()), w * scale);
    }
    if let Some(prefix) = prefix {
        builder.set_prefix(Token::from(prefix));
    }
    builder.build()
}

/// Document frequency derived from the token, so the weights are uneven but stable.
fn idfs() -> IdfCache<FrequencyFn<impl Fn(&Token, bool) -> u64>> {
    IdfCache::new(
        FrequencyFn(|t: &Token, is_prefix: bool| t.char_len() as u64 + u64::from(is_prefix)),
        1.0,
    )
    .unwrap()
}

proptest! {
    #[test]
    fn prop_similarity_in_unit_range(
        q in bag_strategy(),
        d in bag_strategy(),
        prefix in prop::option::of(prop::string::string_regex("[a-e]{1,2}").unwrap()),
    ) {
        let s = similarity(&query(&q, 1.0, prefix.as_deref()), &doc(&d, 1.0), &mut idfs());
        prop_assert!((0.0..=1.0).contains(&s), "similarity {} out of range", s);
    }

    #[test]
    fn prop_similarity_is_symmetric(q in bag_strategy(), d in bag_strategy()) {
        let mut cache = idfs();
        let forward = similarity(&query(&q, 1.0, None), &doc(&d, 1.0), &mut cache);
        let backward = similarity(&query(&d, 1.0, None), &doc(&q, 1.0), &mut cache);
        prop_assert!((forward - backward).abs() < 1e-9);
    }

    #[test]
    fn prop_similarity_is_scale_invariant(
        q in bag_strategy(),
        d in bag_strategy(),
        scale in 0.5f64..20.0,
    ) {
        let mut cache = idfs();
        let base = similarity(&query(&q, 1.0, None), &doc(&d, 1.0), &mut cache);
        let scaled = similarity(&query(&q, scale, None), &doc(&d, scale), &mut cache);
        prop_assert!((base - scaled).abs() < 1e-9);
    }

    #[test]
    fn prop_vector_is_its_own_best_match(d in bag_strategy()) {
        prop_assume!(!d.is_empty());
        let s = similarity(&query(&d, 1.0, None), &doc(&d, 1.0), &mut idfs());
        prop_assert!((s - 1.0).abs() < 1e-9);
    }
}
