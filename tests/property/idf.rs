//! IDF memoization: the delegate is asked once per distinct lookup.

use proptest::prelude::*;
use std::cell::Cell;
use std::collections::HashSet;
use typotrie::scoring::{FrequencyFn, IdfCache};
use typotrie::Token;

proptest! {
    #[test]
    fn prop_delegate_called_once_per_key(
        lookups in prop::collection::vec(
            (prop::string::string_regex("[a-c]{1,2}").unwrap(), any::<bool>()),
            0..40,
        ),
    ) {
        let calls = Cell::new(0usize);
        let mut cache = IdfCache::new(
            FrequencyFn(|t: &Token, _: bool| {
                calls.set(calls.get() + 1);
                t.char_len() as u64
            }),
            1.0,
        )
        .unwrap();

        let mut first: Vec<f64> = Vec::new();
        for (token, is_prefix) in &lookups {
            first.push(cache.get(&Token::from(token.as_str()), *is_prefix));
        }
        for ((token, is_prefix), expected) in lookups.iter().zip(&first) {
            prop_assert_eq!(cache.get(&Token::from(token.as_str()), *is_prefix), *expected);
        }

        let distinct: HashSet<&(String, bool)> = lookups.iter().collect();
        prop_assert_eq!(calls.get(), distinct.len());
        prop_assert_eq!(cache.len(), distinct.len());
    }
}
